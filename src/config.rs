use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::Player;
use crate::engine::Difficulty;
use crate::error::ConfigError;

/// Deepest search the Hard opponent may be configured for
pub const MAX_SEARCH_DEPTH: u8 = 8;

/// Settings for the computer opponent's strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpponentConfig {
    /// Plies searched by the Hard opponent
    pub search_depth: u8,
    /// Probability that an Easy move is chosen by the Medium cascade
    pub random_blend: f64,
}

impl Default for OpponentConfig {
    fn default() -> Self {
        Self {
            search_depth: 4,
            random_blend: 0.3,
        }
    }
}

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub starting_player: Player,
    /// Side the human plays against the computer
    pub human_player: Player,
    pub difficulty: Difficulty,
    /// Pause before the computer's move is shown, in milliseconds.
    /// Applied by the front-end, never by the search.
    pub ai_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_player: Player::X,
            human_player: Player::X,
            difficulty: Difficulty::Medium,
            ai_delay_ms: 300,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: OpponentConfig,
    pub game: GameConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.search_depth == 0 || self.engine.search_depth > MAX_SEARCH_DEPTH {
            return Err(ConfigError::Validation(format!(
                "engine.search_depth must be in 1..={MAX_SEARCH_DEPTH}"
            )));
        }
        if !(0.0..=1.0).contains(&self.engine.random_blend) {
            return Err(ConfigError::Validation(
                "engine.random_blend must be in [0, 1]".into(),
            ));
        }
        Ok(())
    }

    /// TOML text with every default value filled in.
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.engine.search_depth, 4);
        assert!((config.engine.random_blend - 0.3).abs() < 1e-9);
        assert_eq!(config.game.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[engine]
search_depth = 6

[game]
difficulty = "hard"
starting_player = "O"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.engine.search_depth, 6);
        assert!((config.engine.random_blend - 0.3).abs() < 1e-9);
        assert_eq!(config.game.difficulty, Difficulty::Hard);
        assert_eq!(config.game.starting_player, Player::O);
        assert_eq!(config.game.human_player, Player::X);
        assert_eq!(config.game.ai_delay_ms, 300);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[game]\ndifficulty = \"nightmare\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_depth_out_of_range() {
        let mut config = AppConfig::default();
        config.engine.search_depth = 0;
        assert!(config.validate().is_err());
        config.engine.search_depth = MAX_SEARCH_DEPTH + 1;
        assert!(config.validate().is_err());
        config.engine.search_depth = MAX_SEARCH_DEPTH;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_blend_out_of_range() {
        let mut config = AppConfig::default();
        config.engine.random_blend = 1.5;
        assert!(config.validate().is_err());
        config.engine.random_blend = -0.1;
        assert!(config.validate().is_err());
        config.engine.random_blend = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_four_row.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("four_row_config_{}.toml", std::process::id()));
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
ai_delay_ms = 0
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(config.game.ai_delay_ms, 0);
        // Others are defaults
        assert_eq!(config.engine, OpponentConfig::default());
    }

    #[test]
    fn test_load_invalid_file_fails_validation() {
        let path =
            std::env::temp_dir().join(format!("four_row_bad_config_{}.toml", std::process::id()));
        std::fs::write(&path, "[engine]\nrandom_blend = 2.0\n").unwrap();
        let result = AppConfig::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
