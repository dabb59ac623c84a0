use std::fmt;

/// Why a move or a board mutation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoError {
    OutOfBounds,
    Occupied,
    EmptyCell,
    KoViolation,
    Suicide,
    OutOfTurn,
    GameOver,
    MoveLimit,
}

impl GoError {
    /// Text shown to players for any rejected move.
    pub const NOTICE: &'static str = "Invalid move. Try again.";

    /// Stable machine-readable code, handy for presentation layers and logs.
    pub fn code(&self) -> &'static str {
        match self {
            GoError::OutOfBounds => "out_of_bounds",
            GoError::Occupied => "occupied",
            GoError::EmptyCell => "empty_cell",
            GoError::KoViolation => "ko_violation",
            GoError::Suicide => "suicide",
            GoError::OutOfTurn => "out_of_turn",
            GoError::GameOver => "game_over",
            GoError::MoveLimit => "move_limit",
        }
    }
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::OutOfBounds => write!(f, "point is off the board"),
            GoError::Occupied => write!(f, "point is already occupied"),
            GoError::EmptyCell => write!(f, "point is already empty"),
            GoError::KoViolation => write!(f, "ko violation"),
            GoError::Suicide => write!(f, "suicide"),
            GoError::OutOfTurn => write!(f, "out of turn"),
            GoError::GameOver => write!(f, "game is over"),
            GoError::MoveLimit => write!(f, "move counter exhausted"),
        }
    }
}

impl std::error::Error for GoError {}
