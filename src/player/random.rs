use crate::{
    board::Board,
    common::{GameError, Mark, Precondition},
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::Player;

/// Picks uniformly among the empty cells. Used as a stand-in opponent for
/// simulations.
pub struct RandomPlayer {
    rng: SmallRng,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_rng(rng: SmallRng) -> Self {
        Self { rng }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "random"
    }

    fn select_move(&mut self, board: &Board, _mark: Mark) -> Result<(usize, usize), GameError> {
        let status = board.status();
        if status.is_over() {
            return Err(GameError::PreconditionViolated(Precondition::GameOver(
                status,
            )));
        }
        let pick = self.rng.random_range(0..board.empty_cells().count());
        board
            .empty_cells()
            .nth(pick)
            .ok_or(GameError::PreconditionViolated(Precondition::GameOver(
                status,
            )))
    }
}
