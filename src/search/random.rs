//! Easy: uniform random choice, sometimes deferring to the heuristic

use rand::rngs::StdRng;
use rand::Rng;
use tracing::trace;

use crate::board::{Board, Player, Pos};
use crate::engine::{MoveResult, SearchType};
use crate::rules::legal_moves;

use super::{heuristic, StrategyContext};

/// Uniformly random empty cell, `None` on a full board
pub fn random_cell(board: &Board, rng: &mut StdRng) -> Option<Pos> {
    let cells = legal_moves(board);
    if cells.is_empty() {
        return None;
    }
    Some(cells[rng.random_range(0..cells.len())])
}

/// Pick a random empty cell.
///
/// With probability `random_blend` the call is handed to the heuristic
/// strategy instead. A blend of 0 is pure random; 1 plays like Medium.
pub fn choose(board: &Board, player: Player, ctx: &mut StrategyContext) -> Option<MoveResult> {
    if board.is_full() {
        return None;
    }
    let roll: f64 = ctx.rng.random_range(0.0..1.0);
    if roll < ctx.config.random_blend {
        trace!(roll, blend = ctx.config.random_blend, "easy defers to heuristic");
        return heuristic::choose(board, player, ctx);
    }
    let pos = random_cell(board, ctx.rng)?;
    Some(MoveResult::pick(board, player, pos, SearchType::Random))
}
