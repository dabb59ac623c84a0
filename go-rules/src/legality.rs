use crate::Point;
use crate::board::Board;
use crate::error::GoError;
use crate::group;
use crate::ko::Ko;
use crate::stone::Stone;

/// Decide whether `stone` may be placed at `point`, and if not, why.
///
/// The board is never modified: the suicide test runs on a scratch copy
/// holding the hypothetical stone.
pub fn check_move(board: &Board, ko: Option<&Ko>, point: Point, stone: Stone) -> Result<(), GoError> {
    if !board.on_board(point) {
        return Err(GoError::OutOfBounds);
    }
    if board.stone_at(point).is_some() {
        return Err(GoError::Occupied);
    }
    if ko.is_some_and(|ko| ko.pos == point) {
        return Err(GoError::KoViolation);
    }

    // Any empty neighbour is a liberty; skip the copy.
    if board.neighbors(point).iter().any(|&n| board.stone_at(n).is_none()) {
        return Ok(());
    }

    let mut scratch = board.clone();
    scratch.set_scratch(point, stone);

    if group::has_liberty(&scratch, point) || captures_any(&scratch, point, stone) {
        Ok(())
    } else {
        Err(GoError::Suicide)
    }
}

pub fn is_legal(board: &Board, ko: Option<&Ko>, point: Point, stone: Stone) -> bool {
    check_move(board, ko, point, stone).is_ok()
}

/// Whether some opponent group next to `point` is out of liberties.
fn captures_any(board: &Board, point: Point, stone: Stone) -> bool {
    board
        .neighbors(point)
        .iter()
        .any(|&n| board.stone_at(n) == Some(stone.opp()) && !group::has_liberty(board, n))
}
