use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::board::Board;
use crate::capture;
use crate::config::{ConfigError, EngineConfig};
use crate::error::GoError;
use crate::ko::{self, Ko};
use crate::legality;
use crate::stone::Stone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum Stage {
    AwaitingMove { player: Stone },
    GameOver { winner: Stone },
}

impl Stage {
    pub fn is_over(&self) -> bool {
        matches!(self, Stage::GameOver { .. })
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::AwaitingMove { player: Stone::Black } => write!(f, "black_to_play"),
            Stage::AwaitingMove { player: Stone::White } => write!(f, "white_to_play"),
            Stage::GameOver { .. } => write!(f, "game_over"),
        }
    }
}

/// Snapshot of everything a presentation layer needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub size: u8,
    pub board: Vec<i8>,
    pub move_numbers: Vec<u32>,
    pub ko: Option<Ko>,
    pub current: Stone,
    pub move_number: u32,
    pub stage: Stage,
}

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accepted {
    pub captured: Vec<Point>,
    pub state: GameState,
}

/// Owns the board, ko point and turn state of one game and runs every
/// placement through validation, capture and ko bookkeeping.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    board: Board,
    ko: Option<Ko>,
    current: Stone,
    move_number: u32,
    winner: Option<Stone>,
    last_captures: Vec<Point>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::create(EngineConfig::default())
    }
}

impl Engine {
    /// A fresh game on the default 19x19 board.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::create(config))
    }

    fn create(config: EngineConfig) -> Self {
        Engine {
            board: Board::new(config.size),
            config,
            ko: None,
            current: Stone::Black,
            move_number: 0,
            winner: None,
            last_captures: Vec::new(),
        }
    }

    /// Restore an engine from a snapshot, e.g. one round-tripped through JSON.
    pub fn from_game_state(state: GameState) -> Result<Self, ConfigError> {
        let config = EngineConfig::with_size(state.size);
        config.validate()?;

        let board = Board::from_parts(state.size, state.board, state.move_numbers)
            .ok_or(ConfigError::MalformedState("board and move numbers disagree"))?;

        if state
            .ko
            .as_ref()
            .is_some_and(|ko| !board.on_board(ko.pos) || board.stone_at(ko.pos).is_some())
        {
            return Err(ConfigError::MalformedState("ko point is not an empty point"));
        }
        if board.move_numbers().iter().any(|&n| n > state.move_number) {
            return Err(ConfigError::MalformedState("move number behind board"));
        }

        let (current, winner) = match state.stage {
            Stage::AwaitingMove { player } => (player, None),
            Stage::GameOver { winner } => (winner, Some(winner)),
        };
        if winner.is_some() != board.is_full() {
            return Err(ConfigError::MalformedState("stage does not match board"));
        }
        if current != state.current {
            return Err(ConfigError::MalformedState("stage and current player disagree"));
        }

        Ok(Engine {
            config,
            board,
            ko: state.ko,
            current,
            move_number: state.move_number,
            winner,
            last_captures: Vec::new(),
        })
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cells(&self) -> &[i8] {
        self.board.cells()
    }

    pub fn move_numbers(&self) -> &[u32] {
        self.board.move_numbers()
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.board.stone_at(point)
    }

    pub fn move_number_at(&self, point: Point) -> Option<u32> {
        self.board.move_number_at(point)
    }

    pub fn ko(&self) -> Option<&Ko> {
        self.ko.as_ref()
    }

    pub fn current_player(&self) -> Stone {
        self.current
    }

    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Points emptied by the most recent accepted move.
    pub fn last_captures(&self) -> &[Point] {
        &self.last_captures
    }

    pub fn stage(&self) -> Stage {
        match self.winner {
            Some(winner) => Stage::GameOver { winner },
            None => Stage::AwaitingMove {
                player: self.current,
            },
        }
    }

    /// Default status text for the game in its current stage.
    pub fn status_line(&self) -> String {
        match self.stage() {
            Stage::AwaitingMove { player } => format!("Current Player: {player}"),
            Stage::GameOver { winner } => format!("Player {} wins!", winner.letter()),
        }
    }

    // -- Game actions --

    pub fn check_move(&self, point: Point, stone: Stone) -> Result<(), GoError> {
        legality::check_move(&self.board, self.ko.as_ref(), point, stone)
    }

    pub fn is_legal(&self, point: Point, stone: Stone) -> bool {
        self.check_move(point, stone).is_ok()
    }

    /// Play `stone` at `point`. On success the board, ko point and turn have
    /// advanced; on error nothing has changed.
    pub fn attempt_move(&mut self, point: Point, stone: Stone) -> Result<Accepted, GoError> {
        let seq = match self.validate(point, stone) {
            Ok(seq) => seq,
            Err(e) => {
                tracing::debug!("rejected {stone} at {point:?}: {e}");
                return Err(e);
            }
        };

        self.board.place(point, stone, seq)?;
        self.move_number = seq;

        let captured = capture::resolve_captures(&mut self.board, point, stone)?;
        ko::update_ko(&mut self.ko, &self.board, point, stone, &captured);
        tracing::debug!(
            "move {seq}: {stone} at {point:?}, captured {}",
            captured.len()
        );

        self.last_captures = captured.clone();
        self.advance(stone);

        Ok(Accepted {
            captured,
            state: self.game_state(),
        })
    }

    /// Start over with an empty board, Black to play.
    pub fn restart(&mut self) -> GameState {
        *self = Self::create(self.config.clone());
        tracing::info!("game restarted on {0}x{0}", self.config.size);
        self.game_state()
    }

    /// Returns the move number the stone will carry.
    fn validate(&self, point: Point, stone: Stone) -> Result<u32, GoError> {
        if self.is_over() {
            return Err(GoError::GameOver);
        }
        if stone != self.current {
            return Err(GoError::OutOfTurn);
        }
        self.check_move(point, stone)?;
        self.move_number.checked_add(1).ok_or(GoError::MoveLimit)
    }

    /// End the game if the board is full, otherwise hand the turn over.
    fn advance(&mut self, mover: Stone) {
        if self.board.is_full() {
            tracing::info!("board full after move {}, {mover} wins", self.move_number);
            self.winner = Some(mover);
        } else {
            self.current = mover.opp();
        }
    }

    // -- Serialization --

    pub fn game_state(&self) -> GameState {
        GameState {
            size: self.board.size(),
            board: self.board.cells().to_vec(),
            move_numbers: self.board.move_numbers().to_vec(),
            ko: self.ko.clone(),
            current: self.current,
            move_number: self.move_number,
            stage: self.stage(),
        }
    }
}
