//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use simon_core::{Timing, configure_level};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal game and the simulator.
///
/// Every field has a default, so an empty file (or no file) is valid.
///
/// ```toml
/// level = 2
/// bell = false
///
/// [timing]
/// step_ms = 450
/// light_ms = 350
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Level used when none is given on the command line (1-4).
    level: i64,

    /// Playback cadence and pauses.
    timing: Timing,

    /// Ring the terminal bell when a pad lights.
    bell: bool,

    /// File receiving logs while the terminal UI is running.
    log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            level: 1,
            timing: Timing::default(),
            bell: true,
            log_file: PathBuf::from("simon_says.log"),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(level = config.level, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks the level selector and the timing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        configure_level(Some(self.level)).map_err(|e| ConfigError::new(e.to_string()))?;
        self.timing
            .validate()
            .map_err(|e| ConfigError::new(e.to_string()))?;
        Ok(())
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
