use std::path::Path;

use crate::error::ConfigError;
use crate::game::{CONNECT, STANDARD_HEIGHT, STANDARD_WIDTH};

/// Largest accepted board dimension
pub const MAX_DIMENSION: usize = 64;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
}

/// Board size, pacing and randomness for a single game.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Pause between turns in milliseconds, 0 for instant output
    pub turn_delay_ms: u64,
    /// Seed for the random agents; fresh entropy when unset
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: STANDARD_WIDTH,
            height: STANDARD_HEIGHT,
            turn_delay_ms: 1000,
            seed: None,
        }
    }
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
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.width < CONNECT {
            return Err(ConfigError::Validation(format!(
                "game.width must be >= {CONNECT}"
            )));
        }
        if self.game.height < CONNECT {
            return Err(ConfigError::Validation(format!(
                "game.height must be >= {CONNECT}"
            )));
        }
        if self.game.width > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "game.width must be <= {MAX_DIMENSION}"
            )));
        }
        if self.game.height > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "game.height must be <= {MAX_DIMENSION}"
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
