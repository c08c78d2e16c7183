//! Evaluation module for four-in-a-row positions
//!
//! The static evaluation scores every 4-cell line on the board:
//! lines held by only one player are worth `10^k` for `k` of their
//! cells, mixed lines are worth nothing. Center-distance helpers used
//! for move ordering live here as well.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{center_distance, evaluate, order_by_center};
pub use patterns::{window_score, LineScore};
