//! Draw detection.

use super::super::Board;
use super::win::check_win;
use tracing::instrument;

/// Checks if the game is drawn: every cell taken and no winning line.
///
/// A fully populated, non-winning board is the valid draw state, never
/// an error.
#[instrument]
pub fn check_draw(board: &Board) -> bool {
    board.is_full() && check_win(board).is_none()
}
