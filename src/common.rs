//! Common types for Tic-Tac-Toe: cells, marks, round status and errors.

use core::fmt;

/// A player's symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    /// Player A, the human by default.
    X,
    /// Player B, the computer by default.
    O,
}

impl Mark {
    /// The other side.
    pub const fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Content of a single board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The mark occupying this cell, if any.
    pub const fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

impl GameStatus {
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(mark) => write!(f, "{} wins", mark),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

/// Precondition a caller broke when asking for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    /// The round is already decided; no move can be searched or played.
    GameOver(GameStatus),
    /// Computer and human were given the same mark.
    SameMarks(Mark),
    /// A result was requested for a round that is still undecided.
    RoundInProgress,
}

/// Errors returned by board, search and orchestration operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Row or column is outside `[0, BOARD_SIZE)`.
    InvalidCoordinate { row: usize, col: usize },
    /// Target cell already holds a mark.
    CellOccupied { row: usize, col: usize },
    /// Operation invoked on a state it does not accept.
    PreconditionViolated(Precondition),
    /// A move was offered by the side that is not on turn.
    OutOfTurn { expected: Mark, got: Mark },
    /// A player left the round without choosing a move.
    Abandoned(Mark),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidCoordinate { row, col } => {
                write!(f, "Coordinate ({}, {}) is off the board", row, col)
            }
            GameError::CellOccupied { row, col } => {
                write!(f, "Cell ({}, {}) is already occupied", row, col)
            }
            GameError::PreconditionViolated(Precondition::GameOver(status)) => {
                write!(f, "Round is already over ({})", status)
            }
            GameError::PreconditionViolated(Precondition::SameMarks(mark)) => {
                write!(f, "Both sides were assigned mark {}", mark)
            }
            GameError::PreconditionViolated(Precondition::RoundInProgress) => {
                write!(f, "Round is still in progress")
            }
            GameError::OutOfTurn { expected, got } => {
                write!(f, "It is {}'s turn, not {}'s", expected, got)
            }
            GameError::Abandoned(mark) => write!(f, "Player {} left the game", mark),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
