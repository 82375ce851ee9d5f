//! Runtime configuration loaded from TOML.

use crate::device::ProfileSetting;
use crate::games::tictactoe::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// File read from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "numpad_games.toml";

/// Game and terminal settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Who moves first in every tic-tac-toe game.
    #[serde(default)]
    first_player: Player,

    /// Which instructions to show.
    #[serde(default)]
    input_profile: ProfileSetting,

    /// Where logs go while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// How long the event loop waits for input before redrawing.
    #[serde(default = "default_tick_rate_ms")]
    tick_rate_ms: u64,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("numpad_games.log")
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_player: Player::default(),
            input_profile: ProfileSetting::default(),
            log_file: default_log_file(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(first_player = %config.first_player, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `explicit` if given, else the default file if present, else
    /// built-in defaults.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    debug!("No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Returns a copy with the first player replaced.
    pub fn with_first_player(mut self, first_player: Player) -> Self {
        self.first_player = first_player;
        self
    }

    /// Returns a copy with the input profile replaced.
    pub fn with_input_profile(mut self, input_profile: ProfileSetting) -> Self {
        self.input_profile = input_profile;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_full_toml() {
        let config = Config::from_toml(
            r#"
            first_player = "O"
            input_profile = "touch"
            log_file = "/tmp/games.log"
            tick_rate_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(*config.first_player(), Player::O);
        assert_eq!(*config.input_profile(), ProfileSetting::Touch);
        assert_eq!(config.log_file(), &PathBuf::from("/tmp/games.log"));
        assert_eq!(*config.tick_rate_ms(), 250);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::from_toml("colour = \"red\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_bad_player_rejected() {
        assert!(Config::from_toml("first_player = \"Z\"").is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::default()
            .with_first_player(Player::O)
            .with_input_profile(ProfileSetting::Keyboard);
        assert_eq!(*config.first_player(), Player::O);
        assert_eq!(*config.input_profile(), ProfileSetting::Keyboard);
    }
}
