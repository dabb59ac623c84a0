use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest supported board edge.
pub const MAX_SIZE: u8 = 25;

pub const DEFAULT_SIZE: u8 = 19;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidSize(u8),
    Parse(String),
    MalformedState(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSize(size) => {
                write!(f, "board size {size} is outside 1..={MAX_SIZE}")
            }
            ConfigError::Parse(msg) => write!(f, "invalid config: {msg}"),
            ConfigError::MalformedState(msg) => write!(f, "malformed game state: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

/// Engine settings. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub size: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig { size: DEFAULT_SIZE }
    }
}

impl EngineConfig {
    pub fn with_size(size: u8) -> Self {
        EngineConfig { size }
    }

    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 || self.size > MAX_SIZE {
            tracing::warn!("rejecting board size {}", self.size);
            return Err(ConfigError::InvalidSize(self.size));
        }
        Ok(())
    }
}
