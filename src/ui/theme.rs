//! Theme constants for the four-in-a-row GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(46, 52, 64);
pub const CELL_BG: Color32 = Color32::from_rgb(59, 66, 82);
pub const CELL_BG_HOVER: Color32 = Color32::from_rgb(76, 86, 106);
pub const GRID_LINE: Color32 = Color32::from_rgb(30, 34, 42);
pub const COORD_TEXT: Color32 = Color32::from_rgb(140, 148, 165);

// Player symbols
pub const X_COLOR: Color32 = Color32::from_rgb(235, 120, 90);
pub const O_COLOR: Color32 = Color32::from_rgb(110, 180, 235);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(235, 203, 139);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);
pub const SUGGESTION: Color32 = Color32::from_rgb(235, 203, 139);

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 60)
}

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 32.0;
pub const SYMBOL_RATIO: f32 = 0.3;
pub const SYMBOL_STROKE: f32 = 6.0;
pub const GRID_LINE_WIDTH: f32 = 2.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

/// Symbol color for a player
pub fn player_color(player: crate::Player) -> Color32 {
    match player {
        crate::Player::X => X_COLOR,
        crate::Player::O => O_COLOR,
    }
}
