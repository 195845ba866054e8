//! Game configuration
//!
//! Frame cap, asset paths and debug toggles, loaded from
//! `assets/config/game.json` when present. The window title, the 800x600
//! board and the island layout are fixed. Unknown keys are a parse error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Default location of the optional config file
pub const CONFIG_PATH: &str = "assets/config/game.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub frame_rate: u32,
    pub assets: AssetPaths,
    /// Draw red outlines around every island while playing
    pub show_region_outlines: bool,
    /// `tracing` filter directive, e.g. "info" or "pirate_islands=debug"
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetPaths {
    pub islands: String,
    pub victory: String,
    pub defeat: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            frame_rate: 60,
            assets: AssetPaths::default(),
            show_region_outlines: true,
            log_level: "info".to_string(),
        }
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        AssetPaths {
            islands: "assets/Islands.png".to_string(),
            victory: "assets/Victory.png".to_string(),
            defeat: "assets/Defeat.png".to_string(),
        }
    }
}

/// Error types for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "Config IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Config parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err)
    }
}

impl From<ConfigError> for String {
    fn from(error: ConfigError) -> Self {
        error.to_string()
    }
}

impl GameConfig {
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load the config file if it exists, otherwise fall back to defaults.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_rate == 0 {
            return Err(ConfigError::Invalid("frame_rate must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.frame_rate, 60);
        assert!(config.show_region_outlines);
        assert_eq!(config.assets.victory, "assets/Victory.png");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = GameConfig::from_json(
            r#"{ "show_region_outlines": false, "assets": { "islands": "art/board.png" } }"#,
        )
        .unwrap();

        assert!(!config.show_region_outlines);
        assert_eq!(config.assets.islands, "art/board.png");
        assert_eq!(config.assets.defeat, "assets/Defeat.png");
        assert_eq!(config.frame_rate, 60);
    }

    #[test]
    fn test_zero_frame_rate_rejected() {
        let result = GameConfig::from_json(r#"{ "frame_rate": 0 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_board_size_and_title_not_configurable() {
        for json in [
            r#"{ "logical_width": 400 }"#,
            r#"{ "logical_height": 300 }"#,
            r#"{ "window_title": "Elsewhere" }"#,
        ] {
            let result = GameConfig::from_json(json);
            assert!(matches!(result, Err(ConfigError::ParseError(_))), "{} was accepted", json);
        }
    }

    #[test]
    fn test_unknown_asset_key_rejected() {
        let result = GameConfig::from_json(r#"{ "assets": { "treasure": "x.png" } }"#);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = GameConfig::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = GameConfig::load_or_default("does/not/exist/game.json").unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
