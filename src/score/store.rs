//! Durable storage for the score record.

use super::record::ScoreRecord;
use crate::game::GameOutcome;
use derive_more::{Display, Error};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Persistence handle for a [`ScoreRecord`] stored as a JSON document.
///
/// The store is passed explicitly to whoever records outcomes; nothing
/// opens the file implicitly from inside game logic. Reads are lenient
/// (a missing or corrupt file yields a zeroed record), writes are
/// atomic (serialize to a `.tmp` sibling, then rename into place).
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    /// Creates a store over the given file path.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        debug!("Creating score store");
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored record.
    ///
    /// A missing file is the normal first-run case and a corrupt file is
    /// recoverable; both yield a zeroed record and a log line, never an
    /// error.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> ScoreRecord {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!(error = %e, "No readable score file, starting from zero");
                return ScoreRecord::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(record) => {
                debug!("Score record loaded");
                record
            }
            Err(e) => {
                warn!(error = %e, "Score file is corrupt, starting from zero");
                ScoreRecord::new()
            }
        }
    }

    /// Writes the record back atomically.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or the filesystem write
    /// fails. The previous record, if any, is left intact on failure.
    #[instrument(skip(self, record), fields(path = %self.path.display()))]
    pub fn save(&self, record: &ScoreRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| StoreError::new(format!("Failed to serialize record: {}", e)))?;

        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json).map_err(|e| {
            StoreError::new(format!("Failed to write '{}': {}", tmp.display(), e))
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|e| {
            StoreError::new(format!(
                "Failed to move '{}' into place: {}",
                tmp.display(),
                e
            ))
        })?;

        debug!("Score record saved");
        Ok(())
    }

    /// The once-per-game read-modify-write: load, tally, save.
    ///
    /// Returns the updated record for display.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write-back fails.
    #[instrument(skip(self))]
    pub fn record_outcome(&self, outcome: GameOutcome) -> Result<ScoreRecord, StoreError> {
        let mut record = self.load();
        record.tally(outcome);
        self.save(&record)?;
        info!(?outcome, totals = %record, "Outcome recorded");
        Ok(record)
    }
}

/// Score persistence failure with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Score store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
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
