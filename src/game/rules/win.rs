//! Win detection over the candidate lines of a square board.

use super::super::{Board, Mark};
use tracing::instrument;

/// Checks if any mark owns a full line on the board.
///
/// A line is won iff all `N` cells along it hold the same non-empty
/// mark. Every candidate line — `N` rows, `N` columns, and both
/// diagonals, `2N + 2` in total — is checked; a legal game can produce
/// at most one winning line on the winning move, but the scan does not
/// rely on that.
///
/// Scan order: rows top to bottom, columns left to right, the main
/// diagonal, then the anti-diagonal. If a corrupted board carries more
/// than one winning line, the first in that order is reported.
#[instrument]
pub fn check_win(board: &Board) -> Option<Mark> {
    let n = board.size();

    for row in 0..n {
        if let Some(mark) = line_owner(board, (0..n).map(|col| (row, col))) {
            return Some(mark);
        }
    }

    for col in 0..n {
        if let Some(mark) = line_owner(board, (0..n).map(|row| (row, col))) {
            return Some(mark);
        }
    }

    if let Some(mark) = line_owner(board, (0..n).map(|i| (i, i))) {
        return Some(mark);
    }

    line_owner(board, (0..n).map(|i| (i, n - 1 - i)))
}

/// Returns the mark occupying every cell of `line`, if one does.
fn line_owner(board: &Board, line: impl Iterator<Item = (usize, usize)>) -> Option<Mark> {
    let mut owner = None;
    for (row, col) in line {
        let mark = board.get(row, col)?.mark()?;
        match owner {
            None => owner = Some(mark),
            Some(first) if first == mark => {}
            Some(_) => return None,
        }
    }
    owner
}
