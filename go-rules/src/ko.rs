use serde::{Deserialize, Serialize};

use crate::Point;
use crate::board::Board;
use crate::stone::Stone;

/// The point that may not be played on the next move. It always refers to an
/// empty point, since it is the spot of a stone captured on the previous move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ko {
    pub pos: Point,
}

/// Recompute the ko point after `stone` was played at `played` and captured
/// `captured`.
///
/// A ko is recorded when exactly one stone was captured and the played stone
/// has exactly one friendly orthogonal neighbour. Any other outcome clears it.
pub fn update_ko(ko: &mut Option<Ko>, board: &Board, played: Point, stone: Stone, captured: &[Point]) {
    let friendly = board
        .neighbors(played)
        .iter()
        .filter(|&&n| board.stone_at(n) == Some(stone))
        .count();

    *ko = match captured {
        [single] if friendly == 1 => {
            tracing::debug!("ko at {single:?} after {stone} played {played:?}");
            Some(Ko { pos: *single })
        }
        _ => None,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_capture_with_one_friend_sets_ko() {
        // B just played (1,1), capturing W at (1,0); B(1,2) is its only friend.
        let board = Board::from_layout(&["B+B", "+B+", "+B+"]);
        let mut ko = None;
        update_ko(&mut ko, &board, (1, 1), Stone::Black, &[(1, 0)]);
        assert_eq!(ko, Some(Ko { pos: (1, 0) }));
    }

    #[test]
    fn no_friend_means_no_ko() {
        let board = Board::from_layout(&["+BW+", "B+BW", "+BW+", "++++"]);
        let mut ko = None;
        update_ko(&mut ko, &board, (2, 1), Stone::Black, &[(1, 1)]);
        assert_eq!(ko, None);
    }

    #[test]
    fn two_friends_means_no_ko() {
        let board = Board::from_layout(&["B+B", "BB+", "+B+"]);
        let mut ko = None;
        update_ko(&mut ko, &board, (1, 1), Stone::Black, &[(1, 0)]);
        assert_eq!(ko, None);
    }

    #[test]
    fn multi_stone_capture_means_no_ko() {
        let board = Board::from_layout(&["B++", "+B+", "+B+"]);
        let mut ko = None;
        update_ko(&mut ko, &board, (1, 1), Stone::Black, &[(1, 0), (2, 0)]);
        assert_eq!(ko, None);
    }

    #[test]
    fn move_without_capture_clears_existing_ko() {
        let board = Board::from_layout(&["+++", "+W+", "+W+"]);
        let mut ko = Some(Ko { pos: (0, 0) });
        update_ko(&mut ko, &board, (1, 1), Stone::White, &[]);
        assert_eq!(ko, None);
    }

    #[test]
    fn json_shape() {
        let json = serde_json::to_value(Ko { pos: (3, 4) }).unwrap();
        assert_eq!(json["pos"], serde_json::json!([3, 4]));
    }
}
