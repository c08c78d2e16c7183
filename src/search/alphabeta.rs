//! Fixed-depth alpha-beta search
//!
//! Negamax with alpha-beta pruning over a scratch copy of the board.
//! Stones are placed and removed in place while descending, and the
//! scratch board is back to the caller's position when `search` returns.
//!
//! Terminal scores carry the remaining depth: a win found with `d` plies
//! still to go scores `LineScore::WIN + d`. Faster wins therefore score
//! higher and slower losses score less negative. Positions at the depth
//! horizon get the static line-window evaluation.
//!
//! # Example
//!
//! ```
//! use four_row::board::{Board, Player, Pos};
//! use four_row::search::Searcher;
//!
//! let mut board = Board::new();
//! for col in 0..3 {
//!     board.place_stone(Pos::new(0, col), Player::X);
//! }
//!
//! let result = Searcher::new(2).search(&board, Player::X);
//! assert_eq!(result.best_move, Some(Pos::new(0, 3)));
//! ```

use tracing::{instrument, trace};

use crate::board::{Board, Player, Pos};
use crate::engine::{MoveResult, SearchType};
use crate::eval::{evaluate, order_by_center, LineScore};
use crate::rules::{has_four_at, legal_moves};

use super::threat::{find_forced_block, find_immediate_win};
use super::StrategyContext;

/// Infinity score for alpha-beta bounds
const INF: i32 = i32::MAX / 2;

/// Search result containing the best move found and node count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` only on a full board
    pub best_move: Option<Pos>,
    /// Negamax score of the best move for the side to move
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Total nodes searched
    pub nodes: u64,
}

/// Fixed-depth searcher
#[derive(Debug, Clone)]
pub struct Searcher {
    nodes: u64,
    max_depth: u8,
}

impl Searcher {
    /// Create a searcher that looks `max_depth` plies ahead (at least one)
    #[must_use]
    pub fn new(max_depth: u8) -> Self {
        Self {
            nodes: 0,
            max_depth: max_depth.max(1),
        }
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Search for the best move for `player`.
    ///
    /// Candidates are all empty cells, tried nearest-to-center first.
    /// Among equal scores the first candidate tried is kept.
    #[must_use]
    pub fn search(&mut self, board: &Board, player: Player) -> SearchResult {
        self.nodes = 0;
        let mut scratch = *board;
        let result = self.search_root(&mut scratch, player, self.max_depth);
        debug_assert_eq!(scratch, *board, "scratch board not restored");
        result
    }

    fn search_root(&mut self, board: &mut Board, player: Player, depth: u8) -> SearchResult {
        self.nodes += 1;
        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;
        let beta = INF;

        for mov in Self::generate_moves(board) {
            let score = self.score_placement(board, mov, player, depth, alpha, beta);
            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
            alpha = alpha.max(score);
        }

        SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            depth,
            nodes: self.nodes,
        }
    }

    /// Negamax value of `board` for `player`, who is about to move.
    fn alpha_beta(
        &mut self,
        board: &mut Board,
        player: Player,
        depth: u8,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        self.nodes += 1;

        let moves = Self::generate_moves(board);
        if moves.is_empty() {
            // Full board without a four: draw
            return 0;
        }

        let mut best_score = -INF;
        for mov in moves {
            let score = self.score_placement(board, mov, player, depth, alpha, beta);
            best_score = best_score.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
        best_score
    }

    /// Value for `player` of playing `mov` with `depth` plies remaining,
    /// counting this one. Leaves `board` unchanged.
    fn score_placement(
        &mut self,
        board: &mut Board,
        mov: Pos,
        player: Player,
        depth: u8,
        alpha: i32,
        beta: i32,
    ) -> i32 {
        board.place_stone(mov, player);
        let score = if has_four_at(board, mov, player) {
            LineScore::WIN + i32::from(depth)
        } else if depth <= 1 {
            evaluate(board, player)
        } else {
            -self.alpha_beta(board, player.opponent(), depth - 1, -beta, -alpha)
        };
        board.remove_stone(mov);
        score
    }

    /// Empty cells, nearest to center first, row-major among equals
    fn generate_moves(board: &Board) -> Vec<Pos> {
        let mut moves = legal_moves(board);
        order_by_center(&mut moves);
        moves
    }
}

/// Hard strategy: win or block first, otherwise search
#[instrument(level = "debug", skip(board, ctx), fields(depth = ctx.config.search_depth))]
pub fn choose(board: &Board, player: Player, ctx: &mut StrategyContext) -> Option<MoveResult> {
    if board.is_full() {
        return None;
    }
    if let Some(pos) = find_immediate_win(board, player) {
        return Some(MoveResult::pick(board, player, pos, SearchType::ImmediateWin));
    }
    if let Some(pos) = find_forced_block(board, player) {
        return Some(MoveResult::pick(board, player, pos, SearchType::Block));
    }

    let mut searcher = Searcher::new(ctx.config.search_depth);
    let result = searcher.search(board, player);
    trace!(
        best = ?result.best_move,
        score = result.score,
        nodes = result.nodes,
        "alpha-beta finished"
    );
    MoveResult::from_search(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::center_distance;

    #[test]
    fn test_search_empty_board_plays_center() {
        let result = Searcher::new(2).search(&Board::new(), Player::X);
        let best = result.best_move.unwrap();
        assert_eq!(center_distance(best), 2);
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_search_finds_winning_move() {
        let board = Board::from_rows(&[
            ". . . . . .",
            ". . . . . .",
            ". X X X . O",
            ". . . . . .",
            ". O . . . .",
            ". . . . . O",
        ])
        .unwrap();
        let result = Searcher::new(3).search(&board, Player::X);
        // Both ends win; (2,4) is nearer the center
        assert_eq!(result.best_move, Some(Pos::new(2, 4)));
        assert_eq!(result.score, LineScore::WIN + 3);
    }

    #[test]
    fn test_search_blocks_opponent_win() {
        let board = Board::from_rows(&[
            "O O O . . .",
            ". . . . . .",
            ". . X . . .",
            ". . . X . .",
            ". . . . . .",
            ". . . . . .",
        ])
        .unwrap();
        let result = Searcher::new(2).search(&board, Player::X);
        assert_eq!(result.best_move, Some(Pos::new(0, 3)));
    }

    #[test]
    fn test_search_finds_double_threat() {
        let board = Board::from_rows(&[
            "X . . . . X",
            ". . . . . .",
            ". . . . . .",
            ". O O . . .",
            ". . . . . .",
            ". . . . . X",
        ])
        .unwrap();
        let result = Searcher::new(3).search(&board, Player::O);
        assert_eq!(result.best_move, Some(Pos::new(3, 3)));
        assert!(result.score >= LineScore::WIN);
    }

    #[test]
    fn test_search_unstoppable_three_scores_loss() {
        // X has an open three in row 3; whatever O does, X wins next move
        let board = Board::from_rows(&[
            ". . . . . .",
            ". . . . . .",
            ". . . . . .",
            ". X X X . .",
            ". . . . . .",
            "O . . . . O",
        ])
        .unwrap();
        let result = Searcher::new(3).search(&board, Player::O);
        assert_eq!(result.score, -(LineScore::WIN + 2));
        // Every move loses equally, so the first candidate tried is kept
        assert_eq!(result.best_move, Some(Pos::new(2, 2)));
    }

    #[test]
    fn test_search_full_board() {
        let mut board = Board::new();
        for pos in Pos::all() {
            let player = if (pos.col / 2 + pos.row) % 2 == 0 {
                Player::X
            } else {
                Player::O
            };
            board.place_stone(pos, player);
        }
        let result = Searcher::new(4).search(&board, Player::X);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_search_is_deterministic() {
        let board = Board::from_rows(&[
            ". . . . . .",
            ". . . . . .",
            ". . X O . .",
            ". . . . . .",
            ". . . . . .",
            ". . . . . .",
        ])
        .unwrap();
        let mut searcher = Searcher::new(3);
        let first = searcher.search(&board, Player::X);
        let second = searcher.search(&board, Player::X);
        assert_eq!(first, second);
    }

    #[test]
    fn test_depth_clamped_to_one() {
        let searcher = Searcher::new(0);
        assert_eq!(searcher.max_depth(), 1);
    }
}
