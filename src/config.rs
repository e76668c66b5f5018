//! Runtime configuration for the terminal front end.
//!
//! Game constants (board size, timings, stroke widths) are fixed; only the
//! ambient settings below can be configured, from a TOML file and then from
//! command-line overrides.

use crate::animation::AnimationEngine;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Animation frame ticks per second.
    #[serde(default = "default_frame_rate")]
    frame_rate: u32,

    /// File that receives log output (the terminal belongs to the UI).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_frame_rate() -> u32 {
    AnimationEngine::DEFAULT_FRAME_RATE
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_sketch.log")
}

fn default_log_filter() -> String {
    "info,strictly_sketch=debug".to_string()
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(frame_rate = config.frame_rate, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validated()
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the frame rate.
    pub fn with_frame_rate(self, frame_rate: u32) -> Result<Self, ConfigError> {
        Self { frame_rate, ..self }.validated()
    }

    /// Replaces the log file.
    pub fn with_log_file(self, log_file: PathBuf) -> Self {
        Self { log_file, ..self }
    }

    /// Animation engine ticking at the configured frame rate.
    pub fn engine(&self) -> AnimationEngine {
        AnimationEngine::with_frame_rate(self.frame_rate)
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if !(1..=240).contains(&self.frame_rate) {
            return Err(ConfigError::new(format!(
                "frame_rate must be between 1 and 240, got {}",
                self.frame_rate
            )));
        }
        Ok(self)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
