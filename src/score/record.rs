//! The persisted score record.

use crate::game::{GameOutcome, Mark};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Win and draw counters carried across sessions.
///
/// One counter per outcome category. Loaded once at program start,
/// incremented once per completed game, written back by the store.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Games won by X.
    #[serde(default)]
    wins_x: u64,
    /// Games won by O.
    #[serde(default)]
    wins_o: u64,
    /// Drawn games.
    #[serde(default)]
    draws: u64,
    /// When the record was last written.
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl ScoreRecord {
    /// Creates a zeroed record.
    #[instrument]
    pub fn new() -> Self {
        Self {
            wins_x: 0,
            wins_o: 0,
            draws: 0,
            updated_at: None,
        }
    }

    /// Returns the win counter for the given mark.
    pub fn wins(&self, mark: Mark) -> u64 {
        match mark {
            Mark::X => self.wins_x,
            Mark::O => self.wins_o,
        }
    }

    /// Returns the total number of recorded games.
    pub fn total(&self) -> u64 {
        self.wins_x + self.wins_o + self.draws
    }

    /// Increments the one counter matching a terminal outcome.
    ///
    /// An in-progress outcome is not a category; it is logged and
    /// ignored rather than miscounted.
    #[instrument(skip(self))]
    pub fn tally(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Mark::X) => self.wins_x += 1,
            GameOutcome::Win(Mark::O) => self.wins_o += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => {
                warn!("Tally requested for a game still in progress; ignored");
                return;
            }
        }
        self.updated_at = Some(Utc::now());
    }
}

impl Default for ScoreRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X: {}   O: {}   Draws: {}",
            self.wins_x, self.wins_o, self.draws
        )
    }
}
