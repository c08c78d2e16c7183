//! Static evaluation and center ordering

use crate::board::{Board, Player, Pos, BOARD_SIZE};
use crate::rules::WINDOWS;

use super::patterns::window_score;

/// Evaluate the board from the perspective of `player`.
///
/// Sums [`window_score`] over every 4-cell line in every direction.
/// Positive values favor `player`, and `evaluate(b, p) == -evaluate(b, p.opponent())`.
#[must_use]
pub fn evaluate(board: &Board, player: Player) -> i32 {
    let mine = board.stones(player);
    let theirs = board.stones(player.opponent());

    WINDOWS
        .iter()
        .map(|line| {
            let m = line.iter().filter(|&&p| mine.get(p)).count();
            let t = line.iter().filter(|&&p| theirs.get(p)).count();
            window_score(m, t)
        })
        .sum()
}

/// Doubled Manhattan distance from the board center.
///
/// The center of an even board sits between cells, so distances are
/// doubled to stay integral: the four central cells are at 2, the
/// corners at 10.
#[inline]
pub fn center_distance(pos: Pos) -> u8 {
    let span = BOARD_SIZE as i32 - 1;
    let dr = (2 * pos.row as i32 - span).unsigned_abs();
    let dc = (2 * pos.col as i32 - span).unsigned_abs();
    (dr + dc) as u8
}

/// Stable sort by distance to the center; ties keep row-major order.
pub fn order_by_center(moves: &mut [Pos]) {
    moves.sort_by_key(|&pos| center_distance(pos));
}
