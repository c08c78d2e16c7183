//! Player-facing game state

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, Pos};
use crate::rules::{detect, Outcome, WinningLine};

use super::history::MoveHistory;

/// Game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A recorded move. Immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub mover: Player,
    pub pos: Pos,
    /// Per-game sequence number, assigned when the move is first applied
    pub seq: u32,
}

/// Board, status and history of one game.
///
/// Every operation takes `&self` and returns a new state; a rejected
/// operation returns a state equal to the input. Whose turn it is is
/// derived from the history, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(super) board: Board,
    pub(super) status: GameStatus,
    pub(super) winning_line: Option<WinningLine>,
    pub(super) history: MoveHistory,
    pub(super) starting_player: Player,
    pub(super) next_seq: u32,
}

impl GameState {
    /// Empty board, in progress, `starting_player` to move
    #[must_use]
    pub fn new(starting_player: Player) -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::InProgress,
            winning_line: None,
            history: MoveHistory::default(),
            starting_player,
            next_seq: 0,
        }
    }

    /// Fresh game started by whoever would have moved next in this one
    #[must_use]
    pub fn rematch(&self) -> Self {
        Self::new(self.current_player())
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The four winning cells, only while the status is `Won`
    #[inline]
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    #[inline]
    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    /// Player entitled to the next move.
    ///
    /// After a terminal move this is still the opponent of the last
    /// mover; `rematch` uses it as the next starting player.
    pub fn current_player(&self) -> Player {
        match self.history.last() {
            Some(m) => m.mover.opponent(),
            None => self.starting_player,
        }
    }

    #[inline]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last()
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.history.applied().len()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Re-run win/draw detection and update status and winning line
    pub(super) fn settle(&mut self) {
        match detect(&self.board) {
            Some(Outcome::Win { winner, line }) => {
                self.status = GameStatus::Won(winner);
                self.winning_line = Some(line);
            }
            Some(Outcome::Draw) => {
                self.status = GameStatus::Draw;
                self.winning_line = None;
            }
            None => {
                self.status = GameStatus::InProgress;
                self.winning_line = None;
            }
        }
    }
}
