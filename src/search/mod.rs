//! Move selection strategies
//!
//! Contains:
//! - One-ply tactical scans shared by the stronger strategies
//! - Random choice with a heuristic blend (Easy)
//! - Rule cascade: win, block, double threat, center (Medium)
//! - Fixed-depth alpha-beta over a scratch board (Hard)
//!
//! Every strategy has the same shape: given a board and the player to
//! move it returns a [`MoveResult`](crate::engine::MoveResult), or `None`
//! when the board has no empty cell.

use rand::rngs::StdRng;

use crate::config::OpponentConfig;

pub mod alphabeta;
pub mod heuristic;
pub mod random;
pub mod threat;

pub use alphabeta::{SearchResult, Searcher};
pub use threat::{count_winning_cells, find_double_threat, find_forced_block, find_immediate_win};

/// Per-call inputs a strategy may draw on
pub struct StrategyContext<'a> {
    pub rng: &'a mut StdRng,
    pub config: &'a OpponentConfig,
}
