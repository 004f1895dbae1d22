use crate::{
    board::Board,
    common::{GameError, Mark},
    search,
};

use super::Player;

/// Minimax player. It searches on a private copy of the board it is shown.
pub struct ComputerPlayer;

impl ComputerPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ComputerPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for ComputerPlayer {
    fn name(&self) -> &str {
        "computer"
    }

    fn select_move(&mut self, board: &Board, mark: Mark) -> Result<(usize, usize), GameError> {
        let mut snapshot = *board;
        search::best_move(&mut snapshot, mark, mark.opponent())
    }
}
