#![cfg_attr(not(feature = "std"), no_std)]

mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod search;
#[cfg(feature = "std")]
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use player::{ComputerPlayer, Player, RandomPlayer};
#[cfg(feature = "std")]
pub use player::{HumanPlayer, MatchRunner};
pub use search::{best_move, best_move_with_stats, minimax, terminal_score, SearchReport};
