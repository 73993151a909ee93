//! File logger setup.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use log::{LevelFilter, SetLoggerError};
use simplelog::{Config as LogConfig, WriteLogger};
use thiserror::Error;

use crate::paths;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("no cache directory for the log file")]
    NoCacheDir,

    #[error("failed to open log file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("logger already initialized: {0}")]
    AlreadySet(#[from] SetLoggerError),
}

/// Rotate old logs and send all records at `level` or above to `latest.log`.
pub fn init(level: LevelFilter) -> Result<(), LoggingError> {
    paths::rotate_logs();
    let path = paths::log_file().ok_or(LoggingError::NoCacheDir)?;
    let file = open_log_file(&path)?;
    WriteLogger::init(level, LogConfig::default(), file)?;
    Ok(())
}

/// Create `path` and its parent directories, truncating an existing file.
pub(crate) fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    let io_error = |source: io::Error| LoggingError::Io {
        path: path.display().to_string(),
        source,
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(io_error)?;
    }
    File::create(path).map_err(io_error)
}
