//! Application configuration loaded from `config.json`.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use signup_form::render::DEFAULT_TWITTER_PREFIX;
use thiserror::Error;

use crate::paths;

/// Config error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Log verbosity, as written in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    #[default]
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Front-end settings. Every key is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: LogLevel,
    /// Prefix shown before the Twitter handle input.
    pub twitter_prefix: String,
    /// Show the language selector below the fields.
    pub show_language: bool,
    /// How long to wait for input before redrawing.
    pub poll_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            twitter_prefix: DEFAULT_TWITTER_PREFIX.to_string(),
            show_language: true,
            poll_interval_ms: 250,
        }
    }
}

impl Config {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Load from the platform config directory.
    pub fn load_default() -> Result<Self, ConfigError> {
        match paths::config_file() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
