//! Application settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_core::Mark;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Symbol drawn for an empty cell in text reports.
pub(crate) const EMPTY_SYMBOL: char = '.';

/// Settings for logging and display.
///
/// Every key is optional; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// File the terminal UI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Symbol drawn for Cross.
    #[serde(default = "default_cross_symbol")]
    cross_symbol: char,

    /// Symbol drawn for Circle.
    #[serde(default = "default_circle_symbol")]
    circle_symbol: char,
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

fn default_cross_symbol() -> char {
    'X'
}

fn default_circle_symbol() -> char {
    'O'
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            log_file: default_log_file(),
            cross_symbol: default_cross_symbol(),
            circle_symbol: default_circle_symbol(),
        }
    }
}

impl Settings {
    /// Loads settings.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and defaults are used otherwise.
    #[instrument(skip(path), fields(path = ?path.map(Path::display)))]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!(log_filter = %settings.log_filter, "Config loaded successfully");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.cross_symbol == self.circle_symbol {
            return Err(ConfigError::new(format!(
                "cross_symbol and circle_symbol must differ (both {:?})",
                self.cross_symbol
            )));
        }
        if self.cross_symbol.is_whitespace() || self.circle_symbol.is_whitespace() {
            return Err(ConfigError::new("Mark symbols must be visible characters".to_string()));
        }
        if self.cross_symbol == EMPTY_SYMBOL || self.circle_symbol == EMPTY_SYMBOL {
            return Err(ConfigError::new(format!(
                "Mark symbols must not be {:?}, which marks an empty cell",
                EMPTY_SYMBOL
            )));
        }
        Ok(())
    }

    /// Symbol configured for `mark`.
    pub fn symbol(&self, mark: Mark) -> char {
        match mark {
            Mark::Cross => self.cross_symbol,
            Mark::Circle => self.circle_symbol,
        }
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
