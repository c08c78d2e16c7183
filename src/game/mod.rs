//! Game state, move application and undo/redo
//!
//! [`GameState`] is a value the caller threads through: `apply_move`,
//! `undo` and `redo` never mutate their input and answer an
//! inapplicable request with an unchanged copy.

pub mod apply;
pub mod history;
pub mod state;

pub use apply::check_move;
pub use history::MoveHistory;
pub use state::{GameState, GameStatus, Move};
