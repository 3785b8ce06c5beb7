//! Front-end configuration loaded from TOML.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use tictactoe_core::Player;
use tracing::{debug, info, instrument};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Colours of the two marks, as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Colour name or `#RRGGBB` for X.
    x_color: String,
    /// Colour name or `#RRGGBB` for O.
    o_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            x_color: "#2196F3".to_string(),
            o_color: "#FF9800".to_string(),
        }
    }
}

/// Configuration for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Where tracing output goes; the terminal itself is owned by the UI.
    log_file: PathBuf,

    /// Whether to capture mouse clicks.
    mouse: bool,

    /// Mark colours.
    theme: ThemeConfig,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("tictactoe.log"),
            mouse: true,
            theme: ThemeConfig::default(),
        }
    }
}

impl TuiConfig {
    /// Loads the config from an explicit path, or from
    /// [`DEFAULT_CONFIG_FILE`] if it exists, or falls back to defaults.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file is not.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        // Colours must parse before the UI starts.
        Theme::try_from(&config.theme)?;
        Ok(config)
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, log_file: Option<PathBuf>, no_mouse: bool) -> Self {
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        if no_mouse {
            self.mouse = false;
        }
        self
    }
}

/// Resolved mark colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    x: Color,
    o: Color,
}

impl Theme {
    /// Colour used for a player's mark.
    pub fn mark_color(&self, player: Player) -> Color {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x: Color::Rgb(0x21, 0x96, 0xF3),
            o: Color::Rgb(0xFF, 0x98, 0x00),
        }
    }
}

impl TryFrom<&ThemeConfig> for Theme {
    type Error = ConfigError;

    #[track_caller]
    fn try_from(config: &ThemeConfig) -> Result<Self, Self::Error> {
        let parse = |name: &str, value: &str| {
            Color::from_str(value)
                .map_err(|_| ConfigError::new(format!("Invalid {name} colour: {value:?}")))
        };
        let x = parse("x_color", &config.x_color)?;
        let o = parse("o_color", &config.o_color)?;
        if x == o {
            return Err(ConfigError::new(
                "x_color and o_color must differ".to_string(),
            ));
        }
        Ok(Self { x, o })
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
