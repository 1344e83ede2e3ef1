//! The N×N board grid.

use super::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Square board of `size` × `size` cells in row-major order.
///
/// The single indexable grid abstraction for every board size; index
/// arithmetic lives here and nowhere else. Cells are only ever written
/// through [`Board::place`], which refuses to overwrite a taken cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with the given side length.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Returns the side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the cell at the given coordinates, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.size && col < self.size {
            self.cells.get(row * self.size + col).copied()
        } else {
            None
        }
    }

    /// Checks whether a move targeting `(row, col)` would be accepted.
    ///
    /// True iff both coordinates are in range and the cell is empty.
    pub fn is_legal_move(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Writes `mark` into the cell at `(row, col)`.
    ///
    /// Bounds and emptiness are re-checked here even when the caller
    /// already ran [`Board::is_legal_move`]; a taken cell is never
    /// overwritten. On failure the board is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] if the target is out of range or occupied.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), IllegalMove> {
        match self.get(row, col) {
            None => Err(IllegalMove::OutOfRange {
                row,
                col,
                size: self.size,
            }),
            Some(Cell::Taken(_)) => Err(IllegalMove::Occupied { row, col }),
            Some(Cell::Empty) => {
                self.cells[row * self.size + col] = Cell::Taken(mark);
                Ok(())
            }
        }
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Iterates over rows, each row a slice of `size` cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }
}

/// A rejected move. Recoverable: the board is left unchanged and the
/// caller re-prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum IllegalMove {
    /// Target coordinates fall outside the board.
    #[display("({row}, {col}) is outside the {size}x{size} board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Side length of the board.
        size: usize,
    },
    /// Target cell already holds a mark.
    #[display("cell ({row}, {col}) is already taken")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_all_empty() {
        let board = Board::new(3);
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(board.get(row, col), Some(Cell::Empty));
            }
        }
    }

    #[test]
    fn test_place_then_get() {
        let mut board = Board::new(3);
        board.place(1, 2, Mark::X).expect("Place failed");
        assert_eq!(board.get(1, 2), Some(Cell::Taken(Mark::X)));
    }

    #[test]
    fn test_place_occupied_rejected_and_unchanged() {
        let mut board = Board::new(3);
        board.place(0, 0, Mark::X).expect("Place failed");
        let before = board.clone();

        let err = board.place(0, 0, Mark::O).expect_err("Overwrite accepted");
        assert_eq!(err, IllegalMove::Occupied { row: 0, col: 0 });
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_out_of_range_rejected_and_unchanged() {
        let mut board = Board::new(3);
        let before = board.clone();

        let err = board.place(3, 0, Mark::X).expect_err("Out of range accepted");
        assert_eq!(
            err,
            IllegalMove::OutOfRange {
                row: 3,
                col: 0,
                size: 3
            }
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_is_legal_move() {
        let mut board = Board::new(3);
        assert!(board.is_legal_move(0, 0));
        board.place(0, 0, Mark::O).expect("Place failed");
        assert!(!board.is_legal_move(0, 0));
        assert!(!board.is_legal_move(0, 3));
        assert!(!board.is_legal_move(9, 9));
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new(2);
        assert!(!board.is_full());
        for row in 0..2 {
            for col in 0..2 {
                board.place(row, col, Mark::X).expect("Place failed");
            }
        }
        assert!(board.is_full());
    }
}
