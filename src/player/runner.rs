#![cfg(feature = "std")]

use crate::{
    common::{GameError, GameStatus, Mark},
    game::{Game, Scoreboard},
};

use super::Player;

/// Rejected moves tolerated from one player in a single turn before the
/// round is abandoned.
const MAX_REJECTED_MOVES: usize = 9;

/// Drives rounds between the X and O players over a shared [`Game`].
///
/// Move selection runs on tokio's blocking pool. The player and a copy of
/// the board move into the worker and come back with the answer, so the
/// game state is never touched while a selection is outstanding.
pub struct MatchRunner {
    x: Option<Box<dyn Player>>,
    o: Option<Box<dyn Player>>,
    game: Game,
}

impl MatchRunner {
    pub fn new(x: Box<dyn Player>, o: Box<dyn Player>, game: Game) -> Self {
        Self {
            x: Some(x),
            o: Some(o),
            game,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.game.scoreboard()
    }

    fn slot(&mut self, mark: Mark) -> &mut Option<Box<dyn Player>> {
        match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        }
    }

    async fn select(&mut self, mark: Mark) -> anyhow::Result<Result<(usize, usize), GameError>> {
        let mut player = self
            .slot(mark)
            .take()
            .ok_or_else(|| anyhow::anyhow!("player {} is already selecting a move", mark))?;
        let board = *self.game.board();
        let (player, choice) = tokio::task::spawn_blocking(move || {
            let choice = player.select_move(&board, mark);
            (player, choice)
        })
        .await?;
        *self.slot(mark) = Some(player);
        Ok(choice)
    }

    fn notify_move(&mut self, mark: Mark, coord: (usize, usize)) {
        let board = *self.game.board();
        for player in [&mut self.x, &mut self.o].into_iter().flatten() {
            player.observe_move(&board, mark, coord);
        }
    }

    fn notify_round_over(&mut self, status: GameStatus) {
        let board = *self.game.board();
        for player in [&mut self.x, &mut self.o].into_iter().flatten() {
            player.round_over(&board, status);
        }
    }

    /// Play one round to completion, record it and reset the board. A round
    /// that ends in an error is discarded and the board is reset unrecorded.
    pub async fn play_round(&mut self) -> anyhow::Result<GameStatus> {
        let mut rejected = 0;
        loop {
            let status = self.game.status();
            if status.is_over() {
                self.notify_round_over(status);
                return Ok(self.game.finish_round()?);
            }

            let mark = self.game.board().whose_turn();
            let (row, col) = match self.select(mark).await? {
                Ok(coord) => coord,
                Err(e @ GameError::Abandoned(_)) => {
                    log::info!("{}", e);
                    self.game.reset();
                    return Err(e.into());
                }
                Err(e) => {
                    log::error!("player {} failed to choose a move: {}", mark, e);
                    self.game.reset();
                    return Err(e.into());
                }
            };

            match self.game.play_turn(mark, row, col) {
                Ok(_) => {
                    rejected = 0;
                    self.notify_move(mark, (row, col));
                }
                Err(e @ (GameError::InvalidCoordinate { .. } | GameError::CellOccupied { .. })) => {
                    rejected += 1;
                    log::warn!("ignoring move from {}: {}", mark, e);
                    if rejected >= MAX_REJECTED_MOVES {
                        self.game.reset();
                        return Err(anyhow::anyhow!(
                            "player {} kept offering illegal moves",
                            mark
                        ));
                    }
                }
                Err(e) => {
                    self.game.reset();
                    return Err(e.into());
                }
            }
        }
    }

    /// Play `rounds` rounds and return the final tally.
    pub async fn play_rounds(&mut self, rounds: u32) -> anyhow::Result<Scoreboard> {
        for _ in 0..rounds {
            self.play_round().await?;
        }
        Ok(self.scoreboard())
    }
}
