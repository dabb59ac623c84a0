use arrayvec::ArrayVec;
use std::fmt;

use crate::Point;
use crate::error::GoError;
use crate::stone::Stone;

/// Square board stored as flat row-major arrays.
///
/// `cells` holds `Stone::to_int()` values with `0` for empty points.
/// `order` holds the 1-based move number of the stone on each point, `0` where
/// the point is empty. The two arrays are kept in step: a point has a move
/// number exactly when it holds a stone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    cells: Vec<i8>,
    order: Vec<u32>,
}

impl Board {
    /// Create an empty `size` x `size` board.
    pub fn new(size: u8) -> Self {
        let area = size as usize * size as usize;
        Board {
            size,
            cells: vec![0; area],
            order: vec![0; area],
        }
    }

    /// Build a board from an ASCII layout: `B` Black, `W` White, anything else
    /// empty. Stones get move numbers in reading order, starting at 1.
    ///
    /// # Panics
    ///
    /// Panics if the layout is not square.
    #[cfg(test)]
    pub(crate) fn from_layout(layout: &[&str]) -> Self {
        let size = layout.len();
        assert!(
            layout.iter().all(|row| row.chars().count() == size),
            "malformed board layout"
        );

        let mut board = Board::new(size as u8);
        let mut seq = 0;
        for (row, line) in layout.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                if let Some(stone) = Stone::from_letter(c) {
                    seq += 1;
                    let i = board.idx(col as u8, row as u8);
                    board.cells[i] = stone.to_int();
                    board.order[i] = seq;
                }
            }
        }
        board
    }

    /// Restore a board from its flat arrays, checking that they agree.
    pub(crate) fn from_parts(size: u8, cells: Vec<i8>, order: Vec<u32>) -> Option<Self> {
        let area = size as usize * size as usize;
        if cells.len() != area || order.len() != area {
            return None;
        }
        let consistent = cells.iter().zip(&order).all(|(&c, &n)| match c {
            0 => n == 0,
            _ => Stone::from_int(c).is_some() && n > 0,
        });
        if !consistent {
            return None;
        }
        Some(Board { size, cells, order })
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn cells(&self) -> &[i8] {
        &self.cells
    }

    pub fn move_numbers(&self) -> &[u32] {
        &self.order
    }

    pub fn on_board(&self, (col, row): Point) -> bool {
        col < self.size && row < self.size
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        if self.on_board(point) {
            Stone::from_int(self.cells[self.idx(point.0, point.1)])
        } else {
            None
        }
    }

    pub fn move_number_at(&self, point: Point) -> Option<u32> {
        if !self.on_board(point) {
            return None;
        }
        match self.order[self.idx(point.0, point.1)] {
            0 => None,
            n => Some(n),
        }
    }

    /// Occupied points paired with their move numbers, in reading order.
    pub fn move_order(&self) -> impl Iterator<Item = (Point, u32)> + '_ {
        self.order
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n > 0)
            .map(|(i, &n)| (self.point_of(i), n))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != 0)
    }

    /// The on-board orthogonal neighbours of a point.
    pub fn neighbors(&self, (col, row): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if row > 0 {
            result.push((col, row - 1));
        }
        if row + 1 < self.size {
            result.push((col, row + 1));
        }
        if col > 0 {
            result.push((col - 1, row));
        }
        if col + 1 < self.size {
            result.push((col + 1, row));
        }
        result
    }

    // -- Mutators --

    /// Put a stone on an empty point and record its move number.
    pub fn place(&mut self, point: Point, stone: Stone, seq: u32) -> Result<(), GoError> {
        if !self.on_board(point) {
            return Err(GoError::OutOfBounds);
        }
        let i = self.idx(point.0, point.1);
        if self.cells[i] != 0 {
            return Err(GoError::Occupied);
        }
        self.cells[i] = stone.to_int();
        self.order[i] = seq;
        Ok(())
    }

    /// Take a stone off the board, dropping its move number.
    pub fn remove(&mut self, point: Point) -> Result<Stone, GoError> {
        if !self.on_board(point) {
            return Err(GoError::OutOfBounds);
        }
        let i = self.idx(point.0, point.1);
        let stone = Stone::from_int(self.cells[i]).ok_or(GoError::EmptyCell)?;
        self.cells[i] = 0;
        self.order[i] = 0;
        Ok(stone)
    }

    /// Set a cell without touching move numbers. Only for scratch copies used
    /// to evaluate a hypothetical placement.
    pub(crate) fn set_scratch(&mut self, (col, row): Point, stone: Stone) {
        if self.on_board((col, row)) {
            let i = self.idx(col, row);
            self.cells[i] = stone.to_int();
        }
    }

    // -- Internal helpers --

    #[inline]
    pub(crate) fn idx(&self, col: u8, row: u8) -> usize {
        row as usize * self.size as usize + col as usize
    }

    #[inline]
    fn point_of(&self, i: usize) -> Point {
        let size = self.size as usize;
        ((i % size) as u8, (i / size) as u8)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let c = self.stone_at((col, row)).map_or('+', Stone::letter);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_empty_board() {
        let board = Board::new(5);
        assert!(board.is_empty());
        assert!(!board.is_full());
        assert_eq!(board.cells().len(), 25);
        assert_eq!(board.move_order().count(), 0);
    }

    #[test]
    #[should_panic(expected = "malformed")]
    fn rejects_malformed_layout() {
        Board::from_layout(&["++", "+"]);
    }

    #[test]
    fn layout_numbers_stones_in_reading_order() {
        let board = Board::from_layout(&["+B+", "W++", "++B"]);
        assert_eq!(board.stone_at((1, 0)), Some(Stone::Black));
        assert_eq!(board.stone_at((0, 1)), Some(Stone::White));
        assert_eq!(board.move_number_at((1, 0)), Some(1));
        assert_eq!(board.move_number_at((0, 1)), Some(2));
        assert_eq!(board.move_number_at((2, 2)), Some(3));
        assert_eq!(board.move_number_at((0, 0)), None);
    }

    #[test]
    fn display_matches_layout() {
        let layout = ["+B+", "W++", "++B"];
        let board = Board::from_layout(&layout);
        assert_eq!(board.to_string(), "+B+\nW++\n++B\n");
    }

    #[test]
    fn place_records_move_number() {
        let mut board = Board::new(9);
        board.place((3, 4), Stone::Black, 7).unwrap();
        assert_eq!(board.stone_at((3, 4)), Some(Stone::Black));
        assert_eq!(board.move_number_at((3, 4)), Some(7));
        assert_eq!(board.move_order().collect::<Vec<_>>(), vec![((3, 4), 7)]);
    }

    #[test]
    fn place_on_occupied_point_fails_without_mutation() {
        let mut board = Board::new(9);
        board.place((0, 0), Stone::Black, 1).unwrap();
        let before = board.clone();
        assert_eq!(board.place((0, 0), Stone::White, 2), Err(GoError::Occupied));
        assert_eq!(board, before);
    }

    #[test]
    fn place_off_board_fails() {
        let mut board = Board::new(9);
        assert_eq!(board.place((9, 0), Stone::Black, 1), Err(GoError::OutOfBounds));
        assert!(board.is_empty());
    }

    #[test]
    fn remove_clears_point_and_move_number() {
        let mut board = Board::new(9);
        board.place((2, 2), Stone::White, 1).unwrap();
        assert_eq!(board.remove((2, 2)), Ok(Stone::White));
        assert_eq!(board.stone_at((2, 2)), None);
        assert_eq!(board.move_number_at((2, 2)), None);
        assert!(board.is_empty());
    }

    #[test]
    fn remove_empty_point_fails() {
        let mut board = Board::new(9);
        assert_eq!(board.remove((2, 2)), Err(GoError::EmptyCell));
        assert_eq!(board.remove((20, 2)), Err(GoError::OutOfBounds));
    }

    #[test]
    fn neighbors_respect_edges() {
        let board = Board::new(4);
        assert_eq!(board.neighbors((0, 0)).len(), 2);
        assert_eq!(board.neighbors((3, 0)).len(), 2);
        assert_eq!(board.neighbors((1, 0)).len(), 3);
        assert_eq!(board.neighbors((1, 1)).len(), 4);
        assert!(board.neighbors((1, 1)).contains(&(1, 0)));
        assert!(!board.neighbors((1, 1)).contains(&(0, 0)));
    }

    #[test]
    fn stone_at_off_board_is_none() {
        let board = Board::from_layout(&["BB", "BB"]);
        assert!(board.is_full());
        assert_eq!(board.stone_at((2, 0)), None);
        assert_eq!(board.move_number_at((0, 5)), None);
    }

    #[test]
    fn from_parts_checks_consistency() {
        assert!(Board::from_parts(2, vec![1, 0, 0, -1], vec![1, 0, 0, 2]).is_some());
        assert!(Board::from_parts(2, vec![1, 0, 0, -1], vec![1, 0, 0, 0]).is_none());
        assert!(Board::from_parts(2, vec![0, 0, 0, 0], vec![3, 0, 0, 0]).is_none());
        assert!(Board::from_parts(2, vec![5, 0, 0, 0], vec![1, 0, 0, 0]).is_none());
        assert!(Board::from_parts(3, vec![0; 4], vec![0; 4]).is_none());
    }
}
