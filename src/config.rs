//! Runtime configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Smallest playable board: below this every opening move wins.
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest addressable board: columns are a single letter `a`..`z`.
pub const MAX_BOARD_SIZE: usize = 26;

/// Configuration for a game session.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the board.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Where the score record lives.
    #[serde(default = "default_score_path")]
    score_path: PathBuf,
}

fn default_board_size() -> usize {
    3
}

fn default_score_path() -> PathBuf {
    PathBuf::from("scores.json")
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or
    /// if the configured board size is out of range.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads from the file when it exists, defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an existing file that fails to load
    /// or validate; a missing file is not an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns a copy with the board size replaced.
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Returns a copy with the score path replaced.
    pub fn with_score_path(mut self, score_path: PathBuf) -> Self {
        self.score_path = score_path;
        self
    }

    /// Checks the board size against the addressable range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the size falls outside
    /// [`MIN_BOARD_SIZE`]..=[`MAX_BOARD_SIZE`].
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            Ok(())
        } else {
            Err(ConfigError::new(format!(
                "Board size {} is outside {}..={}",
                self.board_size, MIN_BOARD_SIZE, MAX_BOARD_SIZE
            )))
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            score_path: default_score_path(),
        }
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
