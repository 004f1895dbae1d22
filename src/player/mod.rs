//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - ComputerPlayer: full-depth minimax, never loses
//! - RandomPlayer: uniform choice among empty cells, seeded for reproducibility
//! - HumanPlayer: interactive terminal player
//! - MatchRunner: drives rounds between two players over a shared `Game`

use crate::{
    board::Board,
    common::{GameError, GameStatus, Mark},
};

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Choosing a move for its mark on the current board
/// - Reacting to moves and finished rounds, if it cares to
pub trait Player: Send {
    /// Short label used in logs and summaries.
    fn name(&self) -> &str;

    /// Choose an empty `(row, col)` for `mark`.
    fn select_move(&mut self, board: &Board, mark: Mark) -> Result<(usize, usize), GameError>;

    /// Inform the player that `mark` was placed at `coord`.
    fn observe_move(&mut self, _board: &Board, _mark: Mark, _coord: (usize, usize)) {}

    /// Inform the player that the round ended; `board` is the final position.
    fn round_over(&mut self, _board: &Board, _status: GameStatus) {}
}

pub mod computer;
pub use computer::ComputerPlayer;

pub mod random;
pub use random::RandomPlayer;

#[cfg(feature = "std")]
pub mod human;
#[cfg(feature = "std")]
pub use human::HumanPlayer;

#[cfg(feature = "std")]
pub mod runner;
#[cfg(feature = "std")]
pub use runner::MatchRunner;
