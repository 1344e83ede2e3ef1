//! Player-facing move addressing.
//!
//! Players address cells with a column letter and a 1-based row number
//! (`b1` is column 1, row 0). The two parts may appear in either order
//! and any other characters are ignored, so `1b` and `b 1` parse the
//! same way.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A 0-indexed `(row, col)` coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate pair.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parses the player-facing addressing scheme.
    ///
    /// Scans the input for the first column letter (`a`..`z`, case
    /// insensitive) and the first row number (1-based, multi-digit
    /// allowed). Range checking against a particular board is not done
    /// here; out-of-range coordinates parse fine and are rejected by the
    /// board as an illegal move.
    ///
    /// # Errors
    ///
    /// Returns [`ParseCoordError`] when either part is missing.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, ParseCoordError> {
        let mut col = None;
        let mut row = None;

        let mut chars = input.chars().peekable();
        while let Some(c) = chars.next() {
            if col.is_none() && c.is_ascii_alphabetic() {
                col = Some(c.to_ascii_lowercase() as usize - 'a' as usize);
            } else if row.is_none() && c.is_ascii_digit() {
                let mut value = (c as u8 - b'0') as usize;
                while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                    value = value * 10 + d as usize;
                    chars.next();
                }
                row = Some(value);
            }
        }

        let col = col.ok_or(ParseCoordError::MissingColumn)?;
        let row = row.ok_or(ParseCoordError::MissingRow)?;
        if row == 0 {
            // Rows are numbered from 1 in the player-facing scheme.
            return Err(ParseCoordError::MissingRow);
        }

        Ok(Self { row: row - 1, col })
    }

    /// Returns the column letter for display, or `?` past `z`.
    fn col_letter(&self) -> char {
        char::from_u32('a' as u32 + self.col as u32).unwrap_or('?')
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.col_letter(), self.row + 1)
    }
}

/// Failure to read a coordinate from player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseCoordError {
    /// No column letter found in the input.
    #[display("missing column letter (a, b, c, ...)")]
    MissingColumn,
    /// No 1-based row number found in the input.
    #[display("missing row number (1, 2, 3, ...)")]
    MissingRow,
}
