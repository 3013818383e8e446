//! Installs the global `tracing` subscriber.
//!
//! Logging is optional. Without a subscriber the events emitted by the
//! sequences are dropped, and a failure here should be reported and then
//! ignored by the caller.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

use crate::config::ConfigError;
use crate::config::LogConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("a global subscriber is already installed: {0}")]
    AlreadyInstalled(String),
}

/// Install a `fmt` subscriber for `config`.
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    let level = config.level()?;
    let builder = tracing_subscriber::fmt().with_max_level(level).with_target(false);

    let installed = match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::Open {
                    path: path.clone(),
                    source,
                })?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    return installed.map_err(|err| LoggingError::AlreadyInstalled(err.to_string()));
}
