//! Game configuration loaded from TOML.

use crate::games::oxo::Side;
use crate::players::PlayerKind;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a single game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct OxoConfig {
    /// Board dimension.
    #[serde(default = "default_size")]
    size: usize,

    /// Side that moves first.
    #[serde(default = "default_start")]
    start: Side,

    /// Who plays noughts.
    #[serde(default = "default_nought")]
    nought: PlayerKind,

    /// Who plays crosses.
    #[serde(default = "default_cross")]
    cross: PlayerKind,
}

fn default_size() -> usize {
    3
}

fn default_start() -> Side {
    Side::Cross
}

fn default_nought() -> PlayerKind {
    PlayerKind::Human
}

fn default_cross() -> PlayerKind {
    PlayerKind::Ai
}

impl Default for OxoConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            start: default_start(),
            nought: default_nought(),
            cross: default_cross(),
        }
    }
}

impl OxoConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(size = config.size, start = %config.start, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(
        mut self,
        size: Option<usize>,
        start: Option<Side>,
        nought: Option<PlayerKind>,
        cross: Option<PlayerKind>,
    ) -> Self {
        self.size = size.unwrap_or(self.size);
        self.start = start.unwrap_or(self.start);
        self.nought = nought.unwrap_or(self.nought);
        self.cross = cross.unwrap_or(self.cross);
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
