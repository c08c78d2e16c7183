//! Medium: ordered rule cascade
//!
//! 1. Take an immediate win.
//! 2. Block the opponent's immediate win.
//! 3. Create a double threat.
//! 4. Take the empty cell nearest the center, random among ties.
//! 5. Any random empty cell.

use rand::rngs::StdRng;
use rand::Rng;
use tracing::trace;

use crate::board::{Board, Player, Pos};
use crate::engine::{MoveResult, SearchType};
use crate::eval::center_distance;

use super::random::random_cell;
use super::threat::{find_double_threat, find_forced_block, find_immediate_win};
use super::StrategyContext;

/// Cells this close to the center (doubled Manhattan distance) count as
/// central: the middle 2x2 block and its eight orthogonal neighbours.
pub const CENTER_RADIUS: u8 = 4;

/// Nearest-to-center empty cell within [`CENTER_RADIUS`], random among ties
pub fn center_cell(board: &Board, rng: &mut StdRng) -> Option<Pos> {
    let central: Vec<Pos> = board
        .empty_cells()
        .iter_ones()
        .filter(|&pos| center_distance(pos) <= CENTER_RADIUS)
        .collect();
    let nearest = central.iter().map(|&pos| center_distance(pos)).min()?;
    let ties: Vec<Pos> = central
        .into_iter()
        .filter(|&pos| center_distance(pos) == nearest)
        .collect();
    Some(ties[rng.random_range(0..ties.len())])
}

pub fn choose(board: &Board, player: Player, ctx: &mut StrategyContext) -> Option<MoveResult> {
    if board.is_full() {
        return None;
    }
    let (pos, search_type) = if let Some(pos) = find_immediate_win(board, player) {
        (pos, SearchType::ImmediateWin)
    } else if let Some(pos) = find_forced_block(board, player) {
        (pos, SearchType::Block)
    } else if let Some(pos) = find_double_threat(board, player) {
        (pos, SearchType::DoubleThreat)
    } else if let Some(pos) = center_cell(board, ctx.rng) {
        (pos, SearchType::Center)
    } else {
        (random_cell(board, ctx.rng)?, SearchType::Random)
    };
    trace!(%player, %pos, ?search_type, "heuristic pick");
    Some(MoveResult::pick(board, player, pos, search_type))
}
