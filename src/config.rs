use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use ratatui::style::Color;
use tracing::warn;

use crate::error::ConfigError;
use crate::game::{Dimensions, DEFAULT_COLS, DEFAULT_ROWS};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: DEFAULT_ROWS,
            width: DEFAULT_COLS,
        }
    }
}

/// Piece colours: a colour name ("red", "light-blue"), an ANSI index, or
/// `#rrggbb`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub player1_color: String,
    pub player2_color: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            player1_color: "red".into(),
            player2_color: "yellow".into(),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Pause between the final move and the end-of-game message.
    pub announce_delay_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            announce_delay_ms: 500,
        }
    }
}

impl UiConfig {
    pub fn announce_delay(&self) -> Duration {
        Duration::from_millis(self.announce_delay_ms)
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
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.height == 0 {
            return Err(ConfigError::Validation("board.height must be > 0".into()));
        }
        if self.board.width == 0 {
            return Err(ConfigError::Validation("board.width must be > 0".into()));
        }
        self.player_colors()?;
        Ok(())
    }

    pub fn dimensions(&self) -> Result<Dimensions, ConfigError> {
        Dimensions::new(self.board.height, self.board.width)
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }

    /// Parse both player colours.
    pub fn player_colors(&self) -> Result<(Color, Color), ConfigError> {
        let first = parse_color("players.player1_color", &self.players.player1_color)?;
        let second = parse_color("players.player2_color", &self.players.player2_color)?;
        Ok((first, second))
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value.trim())
        .map_err(|_| ConfigError::Validation(format!("{field}: '{value}' is not a colour")))
}
