//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::games::tictactoe::{DEFAULT_SIDE, MAX_SIDE};

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length N.
    #[serde(default = "default_side")]
    side: usize,

    /// File to write logs to; stderr when absent.
    #[serde(default)]
    log_file: Option<PathBuf>,
}

#[instrument]
fn default_side() -> usize {
    DEFAULT_SIDE
}

impl GameConfig {
    /// Creates a configuration for the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the side is outside `1..=MAX_SIDE`.
    #[instrument]
    pub fn new(side: usize) -> Result<Self, ConfigError> {
        let config = Self {
            side,
            log_file: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, parsed, or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(side = config.side, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid TOML or fails validation.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with a different side length.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the side is outside `1..=MAX_SIDE`.
    #[instrument(skip(self))]
    pub fn with_side(mut self, side: usize) -> Result<Self, ConfigError> {
        self.side = side;
        self.validate()?;
        Ok(self)
    }

    #[track_caller]
    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_SIDE).contains(&self.side) {
            return Err(ConfigError::new(format!(
                "Board side must be between 1 and {}, got {}",
                MAX_SIDE, self.side
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            side: default_side(),
            log_file: None,
        }
    }
}

/// Configuration error with location tracking.
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
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
