//! Error types for the engine, move validation and configuration

use std::path::PathBuf;

use crate::board::Player;

/// Errors surfaced by the computer opponent.
///
/// These indicate a defect in the caller, never routine user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("no legal move: the board has no empty cell")]
    NoLegalMove,

    #[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
    InvalidDifficulty(String),
}

/// Why a move would be rejected.
///
/// `apply_move` never returns this; it answers a rejected move with the
/// unchanged state. Callers that need the reason (UI messages, a network
/// boundary re-validating a peer's move) ask `game::check_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    #[error("game is already over")]
    GameOver,

    #[error("({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("({row}, {col}) is already taken")]
    Occupied { row: u8, col: u8 },

    #[error("it is {expected}'s turn, not {got}'s")]
    NotYourTurn { expected: Player, got: Player },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
