#![cfg(feature = "std")]

//! Terminal rendering and coordinate parsing for the interactive game.

use crate::{
    board::Board,
    common::{GameStatus, Mark},
    config::BOARD_SIZE,
    game::Scoreboard,
};
use std::fmt::Write;
use std::string::String;

/// Format a coordinate the way players type it, e.g. `(1, 2)` -> `C2`.
pub fn coord_to_string(r: usize, c: usize) -> String {
    let col = (b'A' + c as u8) as char;
    std::format!("{}{}", col, r + 1)
}

/// Parse `<COLUMN><ROW>` input such as `a1` or `C3` into `(row, col)`.
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-C", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= BOARD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-C", col_ch));
    }
    let row_str = chars.as_str();
    if row_str.is_empty() {
        return Err("Too short - need column letter and row number (e.g., B2)".to_string());
    }
    let row = match row_str.as_bytes() {
        [d] if d.is_ascii_digit() => (d - b'0') as usize,
        _ => return Err(format!("Invalid row '{}' - must be a digit 1-3", row_str)),
    };
    if row == 0 || row > BOARD_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-3", row));
    }
    Ok((row - 1, col))
}

/// Draw the board with column letters and row numbers.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("      A   B   C\n");
    out.push_str("    ╔═══╦═══╦═══╗\n");
    for r in 0..BOARD_SIZE {
        let _ = write!(out, "  {} ║", r + 1);
        for c in 0..BOARD_SIZE {
            let ch = match board.get(r, c).mark() {
                Some(mark) => mark.symbol(),
                None => ' ',
            };
            let _ = write!(out, " {} ║", ch);
        }
        out.push('\n');
        if r + 1 < BOARD_SIZE {
            out.push_str("    ╠═══╬═══╬═══╣\n");
        }
    }
    out.push_str("    ╚═══╩═══╩═══╝\n");
    out
}

/// End-of-round announcement. X is Player A and O is Player B.
pub fn announce(status: GameStatus) -> String {
    match status {
        GameStatus::Won(Mark::X) => "Player A (X) wins!".to_string(),
        GameStatus::Won(Mark::O) => "Player B (O) wins!".to_string(),
        GameStatus::Draw => "It's a draw!".to_string(),
        GameStatus::InProgress => "The round is still in progress.".to_string(),
    }
}

pub fn render_scoreboard(score: &Scoreboard) -> String {
    std::format!(
        "Rounds: {}  You: {}  Computer: {}  Draws: {}",
        score.rounds(),
        score.human_wins,
        score.computer_wins,
        score.draws
    )
}

/// Help text shown when a player types `help`.
pub const MOVE_HELP: &str = "
╔════════════════════════════════════════════╗
║               MOVE HELP                    ║
╠════════════════════════════════════════════╣
║ Format: <COLUMN><ROW>                      ║
║                                            ║
║ Examples:                                  ║
║   A1     - top left corner                 ║
║   B2     - center                          ║
║   C3     - bottom right corner             ║
║                                            ║
║ Type 'quit' to leave the game.             ║
╚════════════════════════════════════════════╝
";
