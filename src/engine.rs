//! Computer opponent
//!
//! The engine picks a move for the player to move, using one of three
//! strategies selected by [`Difficulty`]:
//!
//! 1. **Easy**: random empty cell, deferring to the Medium cascade with
//!    probability `random_blend`
//! 2. **Medium**: win, block, double threat, center, random
//! 3. **Hard**: win, block, then fixed-depth alpha-beta search
//!
//! Each call is independent of the previous one apart from the random
//! number generator, which `with_seed` makes reproducible.
//!
//! # Example
//!
//! ```
//! use four_row::{AIEngine, Board, Difficulty, Player, Pos};
//! use four_row::config::OpponentConfig;
//!
//! let mut engine = AIEngine::with_seed(7, OpponentConfig::default());
//! let mut board = Board::new();
//! for col in 0..3 {
//!     board.place_stone(Pos::new(0, col), Player::X);
//! }
//!
//! let result = engine.choose_move(&board, Player::O, Difficulty::Hard).unwrap();
//! assert_eq!(result.best_move, Pos::new(0, 3));
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::board::{Board, Player, Pos};
use crate::config::OpponentConfig;
use crate::error::EngineError;
use crate::eval::evaluate;
use crate::search::{alphabeta, heuristic, random, SearchResult, StrategyContext};

/// Opponent strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Random moves with an occasional heuristic one
    Easy,
    /// Rule cascade
    #[default]
    Medium,
    /// Alpha-beta search
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "random" => Ok(Difficulty::Easy),
            "medium" | "heuristic" => Ok(Difficulty::Medium),
            "hard" | "minimax" => Ok(Difficulty::Hard),
            _ => Err(EngineError::InvalidDifficulty(s.to_string())),
        }
    }
}

/// Which rule or search produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Completes a line of four
    ImmediateWin,
    /// Stops the opponent completing a line of four
    Block,
    /// Leaves two or more winning cells at once
    DoubleThreat,
    /// Nearest free cell to the center
    Center,
    /// Uniformly random empty cell
    Random,
    /// Alpha-beta search result
    AlphaBeta,
}

/// Result of a move choice with diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Cell to play
    pub best_move: Pos,
    /// Search score, or the static evaluation after the move for rule picks
    pub score: i32,
    /// Rule or search that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    /// Result for a rule-based pick, scored by the evaluation after the move
    #[inline]
    pub(crate) fn pick(board: &Board, player: Player, pos: Pos, search_type: SearchType) -> Self {
        Self {
            best_move: pos,
            score: evaluate(&board.with_stone(pos, player), player),
            search_type,
            time_ms: 0,
            nodes: 1,
        }
    }

    /// Result from alpha-beta search, `None` if the search found no move
    #[inline]
    pub(crate) fn from_search(result: SearchResult) -> Option<Self> {
        Some(Self {
            best_move: result.best_move?,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            time_ms: 0,
            nodes: result.nodes,
        })
    }
}

/// Computer opponent.
///
/// Holds the strategy settings and the random number generator used by
/// Easy and Medium. Hard is fully deterministic.
#[derive(Debug, Clone)]
pub struct AIEngine {
    rng: StdRng,
    config: OpponentConfig,
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AIEngine {
    /// Engine with default settings and an OS-seeded generator
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(OpponentConfig::default())
    }

    /// Engine with custom settings and an OS-seeded generator
    #[must_use]
    pub fn with_config(config: OpponentConfig) -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            config,
        }
    }

    /// Engine whose random choices replay identically for the same seed
    #[must_use]
    pub fn with_seed(seed: u64, config: OpponentConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &OpponentConfig {
        &self.config
    }

    /// Cell to play, without diagnostics
    pub fn get_move(
        &mut self,
        board: &Board,
        player: Player,
        difficulty: Difficulty,
    ) -> Result<Pos, EngineError> {
        self.choose_move(board, player, difficulty)
            .map(|result| result.best_move)
    }

    /// Choose a move for `player` on `board`.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoLegalMove`] when the board has no empty cell. The
    /// game is already over in that case and the caller should not have
    /// asked.
    #[instrument(level = "debug", skip(self, board))]
    pub fn choose_move(
        &mut self,
        board: &Board,
        player: Player,
        difficulty: Difficulty,
    ) -> Result<MoveResult, EngineError> {
        let start = Instant::now();
        if board.is_full() {
            return Err(EngineError::NoLegalMove);
        }

        let mut ctx = StrategyContext {
            rng: &mut self.rng,
            config: &self.config,
        };
        let picked = match difficulty {
            Difficulty::Easy => random::choose(board, player, &mut ctx),
            Difficulty::Medium => heuristic::choose(board, player, &mut ctx),
            Difficulty::Hard => alphabeta::choose(board, player, &mut ctx),
        };
        let mut result = picked.ok_or(EngineError::NoLegalMove)?;
        result.time_ms = start.elapsed().as_millis() as u64;

        debug!(
            pos = %result.best_move,
            search_type = ?result.search_type,
            score = result.score,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "move chosen"
        );
        Ok(result)
    }
}

/// Choose a move with a default-configured engine.
///
/// Convenience for one-off calls; keep an [`AIEngine`] around to reuse
/// settings or a seeded generator.
pub fn choose_move(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
) -> Result<Pos, EngineError> {
    AIEngine::new().get_move(board, player, difficulty)
}
