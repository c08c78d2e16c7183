//! Linear undo/redo
//!
//! Applied moves and undone moves live on two stacks. A redo replays
//! the recorded move as-is (same cell, same sequence number), so
//! `redo(undo(s)) == s`. Recording a brand-new move clears the undone
//! stack; there is no branching history.

use tracing::debug;

use super::state::{GameState, GameStatus, Move};

/// Applied moves (oldest first) and undone moves (most recent last)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    applied: Vec<Move>,
    undone: Vec<Move>,
}

impl MoveHistory {
    /// Applied moves, oldest first
    #[inline]
    pub fn applied(&self) -> &[Move] {
        &self.applied
    }

    /// Undone moves, most recently undone last
    #[inline]
    pub fn undone(&self) -> &[Move] {
        &self.undone
    }

    #[inline]
    pub fn last(&self) -> Option<Move> {
        self.applied.last().copied()
    }

    /// Record a brand-new move, discarding anything that could be redone
    pub(super) fn record(&mut self, mov: Move) {
        self.applied.push(mov);
        self.undone.clear();
    }

    fn pop_to_undone(&mut self) -> Option<Move> {
        let mov = self.applied.pop()?;
        self.undone.push(mov);
        Some(mov)
    }

    fn pop_to_applied(&mut self) -> Option<Move> {
        let mov = self.undone.pop()?;
        self.applied.push(mov);
        Some(mov)
    }
}

impl GameState {
    #[inline]
    pub fn can_undo(&self) -> bool {
        self.status == GameStatus::InProgress && !self.history.applied.is_empty()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        self.status == GameStatus::InProgress && !self.history.undone.is_empty()
    }

    /// Take back the most recent move.
    ///
    /// Returns a state equal to `self` when there is nothing to undo or
    /// the game has already ended. The turn returns to the undone move's
    /// mover.
    #[must_use]
    pub fn undo(&self) -> GameState {
        if !self.can_undo() {
            return self.clone();
        }
        let mut next = self.clone();
        let Some(mov) = next.history.pop_to_undone() else {
            return self.clone();
        };
        next.board = next.board.without_stone(mov.pos);
        next.status = GameStatus::InProgress;
        next.winning_line = None;

        debug!(mover = %mov.mover, pos = %mov.pos, "move undone");
        next
    }

    /// Replay the most recently undone move.
    ///
    /// Returns a state equal to `self` when nothing was undone or the
    /// game has already ended. Status is recomputed exactly as
    /// `apply_move` does, so a redo can restore a win.
    #[must_use]
    pub fn redo(&self) -> GameState {
        if !self.can_redo() {
            return self.clone();
        }
        let mut next = self.clone();
        let Some(mov) = next.history.pop_to_applied() else {
            return self.clone();
        };
        next.board = next.board.with_stone(mov.pos, mov.mover);
        next.settle();

        debug!(mover = %mov.mover, pos = %mov.pos, status = ?next.status, "move redone");
        next
    }
}
