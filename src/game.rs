use crate::{
    board::Board,
    common::{GameError, GameStatus, Mark, Precondition},
    config::{COMPUTER_MARK, HUMAN_MARK},
    search,
};

/// Tally of finished rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scoreboard {
    pub human_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn rounds(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }
}

/// Round orchestration: owns the board, enforces turn order and only asks
/// the search for a move while the round is undecided.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    human: Mark,
    computer: Mark,
    scoreboard: Scoreboard,
}

impl Default for Game {
    fn default() -> Self {
        Self {
            board: Board::new(),
            human: HUMAN_MARK,
            computer: COMPUTER_MARK,
            scoreboard: Scoreboard::default(),
        }
    }
}

impl Game {
    /// Create a game with an empty board. X always opens a round. The two
    /// sides must hold different marks.
    pub fn new(human: Mark, computer: Mark) -> Result<Self, GameError> {
        if human == computer {
            return Err(GameError::PreconditionViolated(Precondition::SameMarks(
                human,
            )));
        }
        Ok(Self {
            human,
            computer,
            ..Self::default()
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human(&self) -> Mark {
        self.human
    }

    pub fn computer(&self) -> Mark {
        self.computer
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    /// Place `mark` at (row, col) if it is that side's turn and the round is
    /// still open, then pass the turn.
    pub fn play_turn(&mut self, mark: Mark, row: usize, col: usize) -> Result<GameStatus, GameError> {
        let status = self.board.status();
        if status.is_over() {
            return Err(GameError::PreconditionViolated(Precondition::GameOver(
                status,
            )));
        }
        let expected = self.board.whose_turn();
        if mark != expected {
            return Err(GameError::OutOfTurn { expected, got: mark });
        }
        self.board.place_mark(row, col, mark)?;
        self.board.pass_turn();
        Ok(self.board.status())
    }

    /// Apply the human's move.
    pub fn human_move(&mut self, row: usize, col: usize) -> Result<GameStatus, GameError> {
        self.play_turn(self.human, row, col)
    }

    /// Search for and apply the computer's move.
    pub fn computer_move(&mut self) -> Result<((usize, usize), GameStatus), GameError> {
        let status = self.board.status();
        if status.is_over() {
            return Err(GameError::PreconditionViolated(Precondition::GameOver(
                status,
            )));
        }
        let expected = self.board.whose_turn();
        if expected != self.computer {
            return Err(GameError::OutOfTurn {
                expected,
                got: self.computer,
            });
        }
        let (row, col) = search::best_move(&mut self.board, self.computer, self.human)?;
        let status = self.play_turn(self.computer, row, col)?;
        Ok(((row, col), status))
    }

    /// Record a decided round and start the next one. Returns the recorded
    /// outcome; an undecided round is left untouched.
    pub fn finish_round(&mut self) -> Result<GameStatus, GameError> {
        let status = self.board.status();
        match status {
            GameStatus::InProgress => {
                return Err(GameError::PreconditionViolated(
                    Precondition::RoundInProgress,
                ))
            }
            GameStatus::Won(mark) if mark == self.human => self.scoreboard.human_wins += 1,
            GameStatus::Won(_) => self.scoreboard.computer_wins += 1,
            GameStatus::Draw => self.scoreboard.draws += 1,
        }
        log::info!("round over: {}", status);
        self.reset();
        Ok(status)
    }

    /// Clear the board and give the opening move back to X.
    pub fn reset(&mut self) {
        self.board.reset();
    }
}
