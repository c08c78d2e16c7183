//! Four-in-a-row engine on a 6x6 board
//!
//! Two players, X and O, take turns placing their symbol on an empty
//! cell. Four of one symbol in a contiguous horizontal, vertical or
//! diagonal line wins; a full board without such a line is a draw.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win/draw detection and move legality
//! - [`game`]: Copy-on-write game state, move application, undo/redo
//! - [`eval`]: Line-window evaluation and center ordering
//! - [`search`]: Random, heuristic and alpha-beta strategies
//! - [`engine`]: Computer opponent integrating the strategies
//! - [`config`]: TOML configuration
//!
//! # Quick Start
//!
//! ```
//! use four_row::{apply_move, choose_move, create_game, get_winner, Difficulty, Player};
//!
//! let mut state = create_game(Player::X);
//! state = apply_move(&state, 2, 2);
//!
//! let reply = choose_move(state.board(), state.current_player(), Difficulty::Medium).unwrap();
//! state = apply_move(&state, reply.row as i32, reply.col as i32);
//!
//! assert_eq!(state.move_count(), 2);
//! assert!(get_winner(state.board()).is_none());
//! ```
//!
//! # Game state
//!
//! Every state-changing call returns a new [`GameState`] and leaves its
//! input untouched. A rejected move, or an undo/redo with nothing to do,
//! returns a state equal to the input, so callers detect rejection by
//! comparing before and after.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE, WIN_LENGTH};
pub use engine::{choose_move, AIEngine, Difficulty, MoveResult, SearchType};
pub use error::{ConfigError, EngineError, MoveRejection};
pub use game::{check_move, GameState, GameStatus, Move};
pub use rules::{Outcome, WinningLine};

/// Start a game on an empty board with `starting_player` to move
#[must_use]
pub fn create_game(starting_player: Player) -> GameState {
    GameState::new(starting_player)
}

/// Play the current player's symbol at `(row, col)`; unchanged state on rejection
#[must_use]
pub fn apply_move(state: &GameState, row: i32, col: i32) -> GameState {
    state.apply_move(row, col)
}

/// Take back the most recent move; unchanged state when not applicable
#[must_use]
pub fn undo(state: &GameState) -> GameState {
    state.undo()
}

/// Replay the most recently undone move; unchanged state when not applicable
#[must_use]
pub fn redo(state: &GameState) -> GameState {
    state.redo()
}

/// Winner and winning line, draw, or `None` while the game can continue
pub fn get_winner(board: &Board) -> Option<Outcome> {
    rules::detect(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_round_trip() {
        let start = create_game(Player::O);
        let played = apply_move(&start, 1, 1);
        assert_eq!(played.current_player(), Player::X);
        assert_eq!(undo(&played).board(), start.board());
        assert_eq!(undo(&played).current_player(), Player::O);
        assert_eq!(redo(&undo(&played)), played);
        assert_eq!(apply_move(&played, 1, 1), played);
    }

    #[test]
    fn test_get_winner_reports_line() {
        let board = Board::from_rows(&[
            ". . . . . .",
            ". . . . . .",
            ". . . . . .",
            ". . . . . .",
            ". . . . . .",
            ". . O O O O",
        ])
        .unwrap();
        match get_winner(&board) {
            Some(Outcome::Win { winner, line }) => {
                assert_eq!(winner, Player::O);
                assert_eq!(line[0], Pos::new(5, 2));
                assert_eq!(line[3], Pos::new(5, 5));
            }
            other => panic!("expected a win, got {other:?}"),
        }
        assert_eq!(get_winner(&Board::new()), None);
    }

    #[test]
    fn test_top_row_scenario_through_api() {
        let mut state = create_game(Player::X);
        for (r, c) in [(0, 0), (4, 4), (0, 1), (4, 5), (0, 2)] {
            state = apply_move(&state, r, c);
        }
        let reply = choose_move(state.board(), state.current_player(), Difficulty::Hard).unwrap();
        assert_eq!(reply, Pos::new(0, 3));
    }
}
