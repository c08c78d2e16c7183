//! GUI module for the four-in-a-row game
//!
//! This module provides a native Rust GUI using egui/eframe. It talks to
//! the engine only through the public game and opponent API.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::FourRowApp;
pub use game_state::{GameMode, Session};
