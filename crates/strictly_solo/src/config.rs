//! Game configuration loaded from TOML.

use crate::opponent::Strategy;
use crate::settings::{FirstMover, ResetPolicy};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a play session.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Opponent strategy.
    #[serde(default)]
    strategy: Strategy,

    /// Who opens each game.
    #[serde(default)]
    first_mover: FirstMover,

    /// Delay before a finished game resets itself. Absent means the
    /// player resets manually.
    #[serde(default)]
    auto_reset_ms: Option<u64>,

    /// Seed for the session's random choices. Absent means seed from
    /// system entropy.
    #[serde(default)]
    seed: Option<u64>,
}

impl GameConfig {
    /// Creates a configuration with every field at its default.
    pub fn new() -> Self {
        Self {
            strategy: Strategy::default(),
            first_mover: FirstMover::default(),
            auto_reset_ms: None,
            seed: None,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(strategy = %config.strategy, first_mover = %config.first_mover, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Returns the reset policy implied by `auto_reset_ms`.
    pub fn reset_policy(&self) -> ResetPolicy {
        ResetPolicy::from_millis(self.auto_reset_ms)
    }

    /// Overrides the opponent strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Overrides who opens each game.
    pub fn with_first_mover(mut self, first_mover: FirstMover) -> Self {
        self.first_mover = first_mover;
        self
    }

    /// Overrides the auto-reset delay.
    pub fn with_auto_reset_ms(mut self, auto_reset_ms: Option<u64>) -> Self {
        self.auto_reset_ms = auto_reset_ms;
        self
    }

    /// Overrides the random seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
