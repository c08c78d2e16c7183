//! Game rules for four-in-a-row on a 6x6 board
//!
//! - Win detection (four contiguous, collinear cells) and draw detection
//! - Board-level move legality

pub mod legality;
pub mod win;

// Re-exports for convenient access
pub use legality::{is_valid_move, legal_moves};
pub use win::{detect, find_four_at, has_four_at, Outcome, WinningLine, DIRECTIONS, WINDOWS};
