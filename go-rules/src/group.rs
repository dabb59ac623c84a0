//! Connected groups and liberties.
//!
//! Both queries flood-fill breadth-first over orthogonally adjacent stones of
//! one color, with an explicit queue and a visited bitmap sized to the board.

use std::collections::VecDeque;

use crate::Point;
use crate::board::Board;

/// Whether the group containing `point` touches at least one empty point.
/// Stops at the first liberty found.
///
/// # Panics
///
/// Panics if `point` is empty or off the board.
pub fn has_liberty(board: &Board, point: Point) -> bool {
    let stone = board
        .stone_at(point)
        .unwrap_or_else(|| panic!("has_liberty called on empty point {point:?}"));

    let mut visited = vec![false; board.cells().len()];
    let mut queue = VecDeque::from([point]);
    visited[board.idx(point.0, point.1)] = true;

    while let Some(p) = queue.pop_front() {
        for n in board.neighbors(p) {
            match board.stone_at(n) {
                None => return true,
                Some(s) if s == stone => {
                    let ni = board.idx(n.0, n.1);
                    if !visited[ni] {
                        visited[ni] = true;
                        queue.push_back(n);
                    }
                }
                Some(_) => {}
            }
        }
    }

    false
}

/// Every point of the group containing `point`, in discovery order.
///
/// # Panics
///
/// Panics if `point` is empty or off the board.
pub fn group_of(board: &Board, point: Point) -> Vec<Point> {
    let stone = board
        .stone_at(point)
        .unwrap_or_else(|| panic!("group_of called on empty point {point:?}"));

    let mut visited = vec![false; board.cells().len()];
    let mut result = Vec::new();
    let mut queue = VecDeque::from([point]);
    visited[board.idx(point.0, point.1)] = true;

    while let Some(p) = queue.pop_front() {
        result.push(p);
        for n in board.neighbors(p) {
            let ni = board.idx(n.0, n.1);
            if !visited[ni] && board.stone_at(n) == Some(stone) {
                visited[ni] = true;
                queue.push_back(n);
            }
        }
    }

    result
}

/// Whether any point of a precomputed group touches an empty point.
pub fn group_has_liberty(board: &Board, group: &[Point]) -> bool {
    group
        .iter()
        .any(|&p| board.neighbors(p).iter().any(|&n| board.stone_at(n).is_none()))
}
