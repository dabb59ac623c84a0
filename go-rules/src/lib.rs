pub mod board;
pub mod capture;
pub mod config;
pub mod engine;
pub mod error;
pub mod group;
pub mod hoshi;
pub mod ko;
pub mod legality;
pub mod stone;

/// A board coordinate as `(col, row)`, zero-based from the top-left corner.
pub type Point = (u8, u8);

pub use board::Board;
pub use config::{ConfigError, EngineConfig};
pub use engine::{Accepted, Engine, GameState, Stage};
pub use error::GoError;
pub use ko::Ko;
pub use stone::Stone;
