//! Pure evaluation of terminal game states. No I/O, never blocks.

mod draw;
mod win;

pub use draw::check_draw;
pub use win::check_win;

use super::{Board, GameOutcome};
use tracing::instrument;

/// Derives the three-way outcome of a board.
///
/// A win takes precedence over a draw: should a caller error ever
/// produce a board that is both full and won, the win is reported.
#[instrument]
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some(mark) = check_win(board) {
        GameOutcome::Win(mark)
    } else if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
