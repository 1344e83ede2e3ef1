//! Tests for board evaluation over the public API.

use gridmarks::{Board, GameOutcome, Mark, check_draw, check_win, evaluate};

/// Fills a board from a rows-of-marks layout, `None` meaning empty.
fn board_from(layout: &[&[Option<Mark>]]) -> Board {
    let mut board = Board::new(layout.len());
    for (row, marks) in layout.iter().enumerate() {
        for (col, mark) in marks.iter().enumerate() {
            if let Some(mark) = mark {
                board.place(row, col, *mark).expect("Place failed");
            }
        }
    }
    board
}

const X: Option<Mark> = Some(Mark::X);
const O: Option<Mark> = Some(Mark::O);
const E: Option<Mark> = None;

#[test]
fn test_top_row_win_example() {
    // [[X,X,X],[_,_,_],[_,_,_]] from the worked example.
    let board = board_from(&[&[X, X, X], &[E, E, E], &[E, E, E]]);
    assert_eq!(check_win(&board), Some(Mark::X));
    assert_eq!(evaluate(&board), GameOutcome::Win(Mark::X));
}

#[test]
fn test_full_board_no_line_draw_example() {
    // [[X,O,X],[O,X,O],[O,X,O]] — full, no line.
    let board = board_from(&[&[X, O, X], &[O, X, O], &[O, X, O]]);
    assert_eq!(check_win(&board), None);
    assert!(check_draw(&board));
    assert_eq!(evaluate(&board), GameOutcome::Draw);
}

#[test]
fn test_empty_board_in_progress_example() {
    let board = Board::new(3);
    assert_eq!(evaluate(&board), GameOutcome::InProgress);
    assert!(board.is_legal_move(0, 0));
}

#[test]
fn test_every_single_line_wins_for_each_mark() {
    let n = 3;
    for mark in [Mark::X, Mark::O] {
        // Each row.
        for row in 0..n {
            let mut board = Board::new(n);
            for col in 0..n {
                board.place(row, col, mark).expect("Place failed");
            }
            assert_eq!(check_win(&board), Some(mark), "row {row} for {mark}");
        }
        // Each column.
        for col in 0..n {
            let mut board = Board::new(n);
            for row in 0..n {
                board.place(row, col, mark).expect("Place failed");
            }
            assert_eq!(check_win(&board), Some(mark), "col {col} for {mark}");
        }
        // Both diagonals.
        let mut board = Board::new(n);
        for i in 0..n {
            board.place(i, i, mark).expect("Place failed");
        }
        assert_eq!(check_win(&board), Some(mark), "main diagonal for {mark}");

        let mut board = Board::new(n);
        for i in 0..n {
            board.place(i, n - 1 - i, mark).expect("Place failed");
        }
        assert_eq!(check_win(&board), Some(mark), "anti diagonal for {mark}");
    }
}

#[test]
fn test_no_line_with_empty_cells_in_progress() {
    let board = board_from(&[&[X, O, X], &[O, E, O], &[E, X, E]]);
    assert_eq!(check_win(&board), None);
    assert!(!check_draw(&board));
    assert_eq!(evaluate(&board), GameOutcome::InProgress);
}

#[test]
fn test_four_by_four_anti_diagonal_win() {
    let mut board = Board::new(4);
    for i in 0..4 {
        board.place(i, 3 - i, Mark::O).expect("Place failed");
    }
    assert_eq!(check_win(&board), Some(Mark::O));
    assert_eq!(evaluate(&board), GameOutcome::Win(Mark::O));
}

#[test]
fn test_four_by_four_draw() {
    // Column pattern XXOO repeated shifts by row pairs; no full line.
    let board = board_from(&[
        &[X, X, O, O],
        &[O, O, X, X],
        &[X, X, O, O],
        &[O, O, X, X],
    ]);
    assert_eq!(check_win(&board), None);
    assert!(check_draw(&board));
    assert_eq!(evaluate(&board), GameOutcome::Draw);
}

#[test]
fn test_win_takes_precedence_on_full_board() {
    // Full board where O owns the bottom row.
    let board = board_from(&[&[X, O, X], &[X, X, O], &[O, O, O]]);
    assert_eq!(evaluate(&board), GameOutcome::Win(Mark::O));
    assert!(!check_draw(&board));
}
