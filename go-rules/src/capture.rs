use crate::Point;
use crate::board::Board;
use crate::error::GoError;
use crate::group;
use crate::stone::Stone;

/// Remove every opponent group adjacent to `just_played` that has no liberty
/// left. Returns the removed points in discovery order.
///
/// A neighbour already swept up by an earlier group in the same call is not
/// traversed again.
pub fn resolve_captures(
    board: &mut Board,
    just_played: Point,
    stone: Stone,
) -> Result<Vec<Point>, GoError> {
    let opponent = stone.opp();
    let mut resolved = vec![false; board.cells().len()];
    let mut captured = Vec::new();

    for n in board.neighbors(just_played) {
        if board.stone_at(n) != Some(opponent) || resolved[board.idx(n.0, n.1)] {
            continue;
        }

        let chain = group::group_of(board, n);
        for &p in &chain {
            resolved[board.idx(p.0, p.1)] = true;
        }
        if group::group_has_liberty(board, &chain) {
            continue;
        }

        for &p in &chain {
            board.remove(p)?;
        }
        captured.extend(chain);
    }

    Ok(captured)
}
