//! Interactive console session: rendering, input, and score reporting.
//!
//! The evaluator core never blocks or prints; everything a human sees
//! or types passes through here.

use crate::config::GameConfig;
use crate::game::{Board, Cell, Coord, Game, GameOutcome, Mark};
use crate::score::{ScoreRecord, ScoreStore};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Words that end the session immediately. Quitting mid-game records
/// nothing.
const EXIT_WORDS: [&str; 3] = ["exit", "quit", "q"];

/// Renders the board with a column-letter header and 1-based row labels.
#[instrument(skip(board))]
pub fn render_board(board: &Board) -> String {
    let n = board.size();

    let mut out = String::new();
    out.push_str("   ");
    for col in 0..n {
        let letter = (b'a' + col as u8) as char;
        out.push_str("  ");
        out.push_str(&letter.to_string().dimmed().to_string());
        out.push(' ');
    }
    out.push('\n');

    let mut rule = String::from("   +");
    for _ in 0..n {
        rule.push_str("---+");
    }

    for (row, cells) in board.rows().enumerate() {
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!("{:>2} |", row + 1));
        for cell in cells {
            out.push(' ');
            out.push_str(&cell_glyph(*cell));
            out.push_str(" |");
        }
        out.push('\n');
    }
    out.push_str(&rule);
    out
}

fn cell_glyph(cell: Cell) -> String {
    match cell {
        Cell::Empty => " ".to_string(),
        Cell::Taken(Mark::X) => "X".red().bold().to_string(),
        Cell::Taken(Mark::O) => "O".cyan().bold().to_string(),
    }
}

/// Runs one interactive game and records its outcome.
///
/// Illegal or unparseable moves print a short message and re-prompt;
/// the session state is untouched. An exit word ends the session
/// without recording.
///
/// # Errors
///
/// Fails only on I/O trouble with the terminal or the score store.
#[instrument(skip(config, store))]
pub fn run_game(config: &GameConfig, store: &ScoreStore) -> Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    play(config, store, &mut input, &mut output)
}

/// The game loop, generic over its streams.
fn play(
    config: &GameConfig,
    store: &ScoreStore,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    let mut game = Game::new(*config.board_size());
    info!(board_size = config.board_size(), "Starting game session");

    while !game.outcome().is_over() {
        writeln!(output, "\n{}", render_board(game.board()))?;
        write!(
            output,
            "Player {}, your move (e.g. b2): ",
            game.to_move()
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("Failed to read input")? == 0 {
            writeln!(output, "\nInput closed. Goodbye!")?;
            return Ok(());
        }
        let line = line.trim().to_lowercase();

        if EXIT_WORDS.contains(&line.as_str()) {
            info!("Player quit mid-game, nothing recorded");
            writeln!(output, "Stopping game... Goodbye!")?;
            return Ok(());
        }

        let coord = match Coord::parse(&line) {
            Ok(coord) => coord,
            Err(e) => {
                debug!(input = %line, error = %e, "Unparseable move");
                writeln!(output, "That is not a valid move: {}.", e)?;
                continue;
            }
        };

        if let Err(e) = game.make_move(coord) {
            writeln!(output, "That is not a valid move: {}.", e)?;
        }
    }

    writeln!(output, "\n{}", render_board(game.board()))?;
    match game.outcome() {
        GameOutcome::Win(mark) => writeln!(output, "Congratulations, {} wins!", mark)?,
        GameOutcome::Draw => writeln!(output, "It's a tie!")?,
        GameOutcome::InProgress => unreachable!("loop exits only on a terminal outcome"),
    }

    let record = store.record_outcome(game.outcome())?;
    writeln!(output, "The current results are: {}", record)?;
    Ok(())
}

/// Prints the persisted score table.
///
/// # Errors
///
/// Fails only on terminal I/O trouble.
#[instrument(skip(store))]
pub fn show_stats(store: &ScoreStore) -> Result<()> {
    use strum::IntoEnumIterator;

    let record = store.load();
    println!("Scores from {}", store.path().display());
    for mark in Mark::iter() {
        println!("  {} wins: {}", mark, record.wins(mark));
    }
    println!("  Draws: {}", record.draws());
    println!("  Games recorded: {}", record.total());
    Ok(())
}

/// Writes a fresh zeroed record over the stored one.
///
/// # Errors
///
/// Fails when the store cannot write the record back.
#[instrument(skip(store))]
pub fn reset_stats(store: &ScoreStore) -> Result<()> {
    store.save(&ScoreRecord::new())?;
    println!("Scores reset at {}", store.path().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ScoreStore {
        ScoreStore::new(dir.path().join("scores.json"))
    }

    #[test]
    fn test_full_game_records_win() {
        let dir = TempDir::new().expect("Temp dir failed");
        let store = store_in(&dir);
        let config = GameConfig::default();

        // X takes the top row while O answers on row 2.
        let mut input = b"a1\na2\nb1\nb2\nc1\n" as &[u8];
        let mut output = Vec::new();
        play(&config, &store, &mut input, &mut output).expect("Game failed");

        let text = String::from_utf8(output).expect("Invalid UTF-8");
        assert!(text.contains("Congratulations"));

        let record = store.load();
        assert_eq!(record.wins(Mark::X), 1);
        assert_eq!(record.total(), 1);
    }

    #[test]
    fn test_bad_input_reprompts_without_recording() {
        let dir = TempDir::new().expect("Temp dir failed");
        let store = store_in(&dir);
        let config = GameConfig::default();

        // Garbage, an occupied cell, an out-of-range cell, then quit.
        let mut input = b"??\na1\na1\nz9\nquit\n" as &[u8];
        let mut output = Vec::new();
        play(&config, &store, &mut input, &mut output).expect("Game failed");

        let text = String::from_utf8(output).expect("Invalid UTF-8");
        assert!(text.contains("That is not a valid move"));
        assert!(text.contains("Goodbye"));
        assert_eq!(store.load().total(), 0);
    }

    #[test]
    fn test_input_exhausted_ends_cleanly() {
        let dir = TempDir::new().expect("Temp dir failed");
        let store = store_in(&dir);
        let config = GameConfig::default();

        let mut input = b"a1\n" as &[u8];
        let mut output = Vec::new();
        play(&config, &store, &mut input, &mut output).expect("Game failed");
        assert_eq!(store.load().total(), 0);
    }

    #[test]
    fn test_render_board_labels() {
        let board = Board::new(3);
        let text = render_board(&board);
        assert!(text.contains('a'));
        assert!(text.contains('c'));
        assert!(text.contains('1'));
        assert!(text.contains('3'));
    }
}
