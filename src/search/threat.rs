//! One-ply tactical scans
//!
//! Immediate wins, forced blocks and double threats. Both the heuristic
//! strategy and the alpha-beta strategy run these before anything else,
//! so neither can miss a one-move win or a one-move loss.
//!
//! All scans visit empty cells in row-major order and return the first
//! match, which fixes the tie-break between equally good cells.

use crate::board::{Board, Player, Pos};
use crate::rules::has_four_at;

/// First empty cell where `player` completes a line of four
pub fn find_immediate_win(board: &Board, player: Player) -> Option<Pos> {
    board
        .empty_cells()
        .iter_ones()
        .find(|&pos| has_four_at(&board.with_stone(pos, player), pos, player))
}

/// First empty cell `player` must take to stop the opponent winning next move
pub fn find_forced_block(board: &Board, player: Player) -> Option<Pos> {
    find_immediate_win(board, player.opponent())
}

/// Number of distinct empty cells where `player` would win immediately
pub fn count_winning_cells(board: &Board, player: Player) -> usize {
    board
        .empty_cells()
        .iter_ones()
        .filter(|&pos| has_four_at(&board.with_stone(pos, player), pos, player))
        .count()
}

/// First empty cell after which `player` threatens to win in two or more
/// distinct places, so a single block cannot stop them.
pub fn find_double_threat(board: &Board, player: Player) -> Option<Pos> {
    board
        .empty_cells()
        .iter_ones()
        .find(|&pos| count_winning_cells(&board.with_stone(pos, player), player) >= 2)
}
