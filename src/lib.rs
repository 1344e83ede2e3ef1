//! Gridmarks library - square-board line games
//!
//! A generic finite-board game-state evaluator for N×N mark-placement
//! games (tic-tac-toe at N=3), with persistent score tracking.
//!
//! # Architecture
//!
//! - **Game**: board grid, pure win/draw evaluation, and a
//!   turn-alternating session engine
//! - **Score**: a JSON score record behind an explicit store handle,
//!   loaded leniently and written back atomically
//! - **Console**: line-oriented rendering and input for a human player
//!
//! # Example
//!
//! ```
//! use gridmarks::{Coord, Game, GameOutcome, Mark};
//!
//! let mut game = Game::new(3);
//! game.make_move(Coord::new(0, 0))?; // X
//! game.make_move(Coord::new(1, 1))?; // O
//! assert_eq!(game.outcome(), GameOutcome::InProgress);
//! assert_eq!(game.to_move(), Mark::X);
//! # Ok::<(), gridmarks::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod game;
mod score;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

// Crate-level exports - Console session
pub use console::{render_board, reset_stats, run_game, show_stats};

// Crate-level exports - Game types
pub use game::{
    Board, Cell, Coord, Game, GameOutcome, IllegalMove, Mark, Move, MoveError, ParseCoordError,
    check_draw, check_win, evaluate,
};

// Crate-level exports - Score persistence
pub use score::{ScoreRecord, ScoreStore, StoreError};
