//! Turn-alternating game session over a single board.
//!
//! The evaluator in [`super::rules`] knows nothing about turns; turn
//! order is enforced here, at the session layer, by always placing the
//! mark whose move it is.

use super::board::{Board, IllegalMove};
use super::coords::Coord;
use super::rules;
use super::types::{GameOutcome, Mark};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// A move that was accepted into a game: a mark placed at a coordinate.
///
/// Moves are first-class events; the history of a game is the sequence
/// of moves that produced its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub coord: Coord,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.coord)
    }
}

/// Why a move was not accepted by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum MoveError {
    /// The board rejected the placement.
    #[display("{_0}")]
    Illegal(IllegalMove),
    /// The game has already ended.
    #[display("game is already over")]
    GameOver,
}

/// A running game: the board, whose turn it is, the derived outcome,
/// and the move history. Exclusively owned by one session at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Mark,
    outcome: GameOutcome,
    history: Vec<Move>,
}

impl Game {
    /// Starts a new game on an empty board; X moves first.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            to_move: Mark::X,
            outcome: GameOutcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the derived outcome.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current mark at `coord` and advances the turn.
    ///
    /// On success the board is re-evaluated and the new outcome
    /// returned; the turn only alternates while the game remains in
    /// progress. On failure the session is unchanged and the caller
    /// re-prompts.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game has ended, or
    /// [`MoveError::Illegal`] when the board rejects the placement.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn make_move(&mut self, coord: Coord) -> Result<GameOutcome, MoveError> {
        if self.outcome.is_over() {
            warn!(%coord, "Move attempted after game end");
            return Err(MoveError::GameOver);
        }

        let mark = self.to_move;
        self.board.place(coord.row, coord.col, mark).map_err(|e| {
            warn!(%coord, error = %e, "Board rejected move");
            e
        })?;
        self.history.push(Move { mark, coord });

        self.outcome = rules::evaluate(&self.board);
        if !self.outcome.is_over() {
            self.to_move = mark.opponent();
        }

        info!(%coord, outcome = ?self.outcome, "Move accepted");
        Ok(self.outcome)
    }
}
