//! Win and draw detection
//!
//! Win condition: four same-symbol cells, contiguous and collinear
//! (row, column or either diagonal). A full board without such a line
//! is a draw.
//!
//! The full-board scan in [`detect`] is the reference semantics. The
//! position-restricted helpers ([`has_four_at`], [`find_four_at`]) only
//! look at the four lines through one cell and are used right after a
//! single placement, mostly inside the search.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, Pos, BOARD_SIZE, WIN_LENGTH};

/// Direction vectors in scan order
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down-right
    (-1, 1), // Diagonal up-right
];

/// The four coordinates of a completed line, in scan order
pub type WinningLine = [Pos; WIN_LENGTH];

/// Number of distinct 4-cell lines on a 6x6 board
pub const WINDOW_COUNT: usize = 54;

/// Every 4-cell line on the board, direction-major then row-major by start
pub const WINDOWS: [WinningLine; WINDOW_COUNT] = build_windows();

const fn build_windows() -> [WinningLine; WINDOW_COUNT] {
    let n = BOARD_SIZE as i32;
    let len = WIN_LENGTH as i32;
    let mut out = [[Pos { row: 0, col: 0 }; WIN_LENGTH]; WINDOW_COUNT];
    let mut count = 0;
    let mut d = 0;
    while d < DIRECTIONS.len() {
        let (dr, dc) = DIRECTIONS[d];
        let mut r = 0;
        while r < n {
            let mut c = 0;
            while c < n {
                let end_r = r + (len - 1) * dr;
                let end_c = c + (len - 1) * dc;
                if end_r >= 0 && end_r < n && end_c >= 0 && end_c < n {
                    let mut k = 0;
                    while k < len {
                        out[count][k as usize] = Pos {
                            row: (r + k * dr) as u8,
                            col: (c + k * dc) as u8,
                        };
                        k += 1;
                    }
                    count += 1;
                }
                c += 1;
            }
            r += 1;
        }
        d += 1;
    }
    out
}

/// Terminal result of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win { winner: Player, line: WinningLine },
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { winner, .. } => Some(*winner),
            Outcome::Draw => None,
        }
    }
}

/// Check the 4 cells starting at `start` along `(dr, dc)`.
///
/// Returns the owner and the cells if all four are on the board and
/// held by the same player.
fn line_from(board: &Board, start: Pos, dr: i32, dc: i32) -> Option<(Player, WinningLine)> {
    let owner = board.get(start).player()?;
    let mut line = [start; WIN_LENGTH];
    for (k, slot) in line.iter_mut().enumerate().skip(1) {
        let next = start.offset(dr, dc, k as i32)?;
        if !board.is_owned_by(next, owner) {
            return None;
        }
        *slot = next;
    }
    Some((owner, line))
}

/// Scan the whole board for a win, then for a draw.
///
/// Occupied cells are visited in row-major order and each is tried as
/// the start of a line in [`DIRECTIONS`] order. The first complete line
/// found is returned, which is also the tie-break if a (never reachable
/// under valid play) board holds lines for both players.
///
/// Returns `None` while the game is still in progress.
#[must_use]
pub fn detect(board: &Board) -> Option<Outcome> {
    let occupied = board.stones(Player::X).union(*board.stones(Player::O));
    for pos in occupied.iter_ones() {
        for &(dr, dc) in &DIRECTIONS {
            if let Some((winner, line)) = line_from(board, pos, dr, dc) {
                return Some(Outcome::Win { winner, line });
            }
        }
    }

    if board.is_full() {
        Some(Outcome::Draw)
    } else {
        None
    }
}

/// Check whether `player` holds a line of four through `pos`.
///
/// Only the four lines through `pos` are examined. No allocation.
#[inline]
pub fn has_four_at(board: &Board, pos: Pos, player: Player) -> bool {
    for &(dr, dc) in &DIRECTIONS {
        let mut count = 1;
        // Positive direction
        let mut k = 1;
        while let Some(next) = pos.offset(dr, dc, k) {
            if !board.is_owned_by(next, player) {
                break;
            }
            count += 1;
            k += 1;
        }
        // Negative direction
        k = 1;
        while let Some(prev) = pos.offset(dr, dc, -k) {
            if !board.is_owned_by(prev, player) {
                break;
            }
            count += 1;
            k += 1;
        }
        if count >= WIN_LENGTH {
            return true;
        }
    }
    false
}

/// Find a line of four through `pos` owned by whoever holds `pos`.
///
/// Directions are tried in [`DIRECTIONS`] order, and within a direction
/// the window starting farthest back is tried first, so the line
/// returned matches what [`detect`] reports for a single fresh line.
pub fn find_four_at(board: &Board, pos: Pos) -> Option<WinningLine> {
    board.get(pos).player()?;
    for &(dr, dc) in &DIRECTIONS {
        for back in (0..WIN_LENGTH as i32).rev() {
            let Some(start) = pos.offset(dr, dc, -back) else {
                continue;
            };
            if let Some((_, line)) = line_from(board, start, dr, dc) {
                return Some(line);
            }
        }
    }
    None
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any straight four on an otherwise empty board is reported as a win
        /// with exactly those cells.
        #[test]
        fn prop_any_window_wins(idx in 0usize..WINDOW_COUNT, o_player in any::<bool>()) {
            let player = if o_player { Player::O } else { Player::X };
            let line = WINDOWS[idx];
            let mut board = Board::new();
            for pos in line {
                board.place_stone(pos, player);
            }
            prop_assert_eq!(detect(&board), Some(Outcome::Win { winner: player, line }));
            for pos in line {
                prop_assert!(has_four_at(&board, pos, player));
            }
        }

        /// Three cells of any window never make a win.
        #[test]
        fn prop_three_never_wins(idx in 0usize..WINDOW_COUNT, skip in 0usize..WIN_LENGTH) {
            let mut board = Board::new();
            for (k, pos) in WINDOWS[idx].iter().enumerate() {
                if k != skip {
                    board.place_stone(*pos, Player::X);
                }
            }
            prop_assert_eq!(detect(&board), None);
        }

        /// The restricted check agrees with the full scan after one placement.
        #[test]
        fn prop_restricted_scan_agrees(cells in prop::collection::vec(0usize..36, 0..20), last in 0usize..36) {
            let mut board = Board::new();
            for (i, idx) in cells.into_iter().enumerate() {
                let pos = Pos::from_index(idx);
                if board.is_empty(pos) {
                    board.place_stone(pos, if i % 2 == 0 { Player::X } else { Player::O });
                }
            }
            // Only meaningful when the position was in progress before the last stone
            prop_assume!(detect(&board).and_then(|o| o.winner()).is_none());
            let pos = Pos::from_index(last);
            prop_assume!(board.is_empty(pos));
            board.place_stone(pos, Player::X);
            let full = detect(&board).and_then(|o| o.winner()) == Some(Player::X);
            prop_assert_eq!(full, has_four_at(&board, pos, Player::X));
            prop_assert_eq!(full, find_four_at(&board, pos).is_some());
        }
    }
}
