#![cfg(feature = "std")]

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::string::String;

use crate::{
    board::Board,
    common::{GameError, GameStatus, Mark},
    ui,
};

use super::Player;

/// Interactive player reading moves from `input` and writing prompts to
/// `output`.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl HumanPlayer<BufReader<Stdin>, Stdout> {
    /// Player attached to the process terminal.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Hand back the output sink, mainly to inspect what was written.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                log::warn!("failed to read move: {}", e);
                None
            }
        }
    }

    fn say(&mut self, text: &str) {
        let _ = writeln!(self.output, "{}", text);
    }
}

impl<R: BufRead + Send, W: Write + Send> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        "human"
    }

    fn select_move(&mut self, board: &Board, mark: Mark) -> Result<(usize, usize), GameError> {
        self.say(&ui::render_board(board));
        loop {
            let _ = write!(self.output, "Your move as {} (e.g. B2, 'help' or 'quit'): ", mark);
            let _ = self.output.flush();
            let line = match self.read_line() {
                Some(line) => line,
                None => return Err(GameError::Abandoned(mark)),
            };

            if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
                return Err(GameError::Abandoned(mark));
            }
            if line.eq_ignore_ascii_case("help") {
                self.say(ui::MOVE_HELP);
                continue;
            }

            let (r, c) = match ui::parse_coord(&line) {
                Ok(coord) => coord,
                Err(e) => {
                    self.say(&std::format!("✗ Invalid coordinate: {}", e));
                    continue;
                }
            };
            match board.cell(r, c) {
                Ok(cell) if cell.is_empty() => return Ok((r, c)),
                Ok(_) => self.say(&std::format!(
                    "✗ {} is already taken. Choose another cell.",
                    ui::coord_to_string(r, c)
                )),
                Err(e) => self.say(&std::format!("✗ {}", e)),
            }
        }
    }

    fn observe_move(&mut self, _board: &Board, mark: Mark, coord: (usize, usize)) {
        self.say(&std::format!(
            "{} plays {}",
            mark,
            ui::coord_to_string(coord.0, coord.1)
        ));
    }

    fn round_over(&mut self, board: &Board, status: GameStatus) {
        self.say(&ui::render_board(board));
        self.say(&ui::announce(status));
    }
}
