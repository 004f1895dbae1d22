//! Board state: the 3×3 grid of cells and whose turn it is.

use crate::common::{Cell, GameError, GameStatus, Mark};
use crate::config::{BOARD_SIZE, LINES};
use core::fmt;

/// Cells indexed `[row][col]`.
pub type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// Grid plus turn flag. Turn order is not enforced here; callers decide
/// when to pass the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Grid,
    turn: Mark,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with X to move.
    pub const fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            turn: Mark::X,
        }
    }

    /// Build a board from rows of cells. Turn is inferred from the mark
    /// counts: X moves when both sides have placed equally.
    pub fn from_cells(cells: Grid) -> Self {
        let mut board = Board { cells, turn: Mark::X };
        if board.count(Cell::X) > board.count(Cell::O) {
            board.turn = Mark::O;
        }
        board
    }

    fn check(row: usize, col: usize) -> Result<(), GameError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GameError::InvalidCoordinate { row, col });
        }
        Ok(())
    }

    /// Place `mark` at (row, col). Fails without touching the board when the
    /// coordinate is off the grid or the cell is taken.
    pub fn place_mark(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), GameError> {
        Self::check(row, col)?;
        if !self.cells[row][col].is_empty() {
            return Err(GameError::CellOccupied { row, col });
        }
        self.cells[row][col] = Cell::from(mark);
        Ok(())
    }

    /// Empty the cell at (row, col); rolls back a simulated move.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        Self::check(row, col)?;
        self.cells[row][col] = Cell::Empty;
        Ok(())
    }

    /// Read a cell. Panics on an off-board coordinate; see [`Board::cell`].
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Range-checked read.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        Self::check(row, col)?;
        Ok(self.cells[row][col])
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    /// Returns `true` when `mark` owns any full row, column or diagonal.
    pub fn winner(&self, mark: Mark) -> bool {
        let target = Cell::from(mark);
        LINES
            .iter()
            .any(|line| line.iter().all(|&(r, c)| self.cells[r][c] == target))
    }

    /// Clear every cell and give the turn back to X.
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        self.turn = Mark::X;
    }

    pub fn whose_turn(&self) -> Mark {
        self.turn
    }

    /// Hand the turn to the other side.
    pub fn pass_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    /// Empty coordinates in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..BOARD_SIZE)
            .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.cells[r][c].is_empty())
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Classify the position. A completed line takes precedence over a full
    /// board.
    pub fn status(&self) -> GameStatus {
        if self.winner(Mark::X) {
            GameStatus::Won(Mark::X)
        } else if self.winner(Mark::O) {
            GameStatus::Won(Mark::O)
        } else if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
