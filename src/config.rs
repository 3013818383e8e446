//! Runtime configuration, loaded from JSON.
//!
//! ```json
//! { "log": { "level": "debug", "file": "versioned.log" } }
//! ```
//!
//! Every field is optional. The sequences themselves never read this; it
//! only drives logging setup in the binary.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown log level {0:?}")]
    InvalidLevel(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub log: LogConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
    /// Append log lines to this file instead of stderr.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        return LogConfig {
            level: "info".to_string(),
            file: None,
        };
    }
}

impl LogConfig {
    /// The configured level as a `tracing` level.
    pub fn level(&self) -> Result<tracing::Level, ConfigError> {
        return self
            .level
            .parse()
            .map_err(|_| ConfigError::InvalidLevel(self.level.clone()));
    }
}

impl Config {
    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        return Config::from_json(&text);
    }

    /// Parse and validate config text.
    pub fn from_json(text: &str) -> Result<Config, ConfigError> {
        let config: Config = serde_json::from_str(text)?;
        config.log.level()?;
        return Ok(config);
    }
}
