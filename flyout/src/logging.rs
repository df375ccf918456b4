//! File logging for hosts.
//!
//! Widgets log through the `log` facade. A terminal host can't print to
//! stdout without corrupting the screen, so logs go to a file.

use std::fs::File;
use std::path::Path;

pub use simplelog::LevelFilter;
use simplelog::{Config, WriteLogger};
use thiserror::Error;

/// Errors from [`init_file_logger`].
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log file couldn't be created.
    #[error("failed to create log file: {0}")]
    Io(#[from] std::io::Error),

    /// A global logger was already installed.
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

/// Install a `simplelog` file logger at `level`, truncating `path`.
pub fn init_file_logger(path: impl AsRef<Path>, level: LevelFilter) -> Result<(), LoggingError> {
    let log_file = File::create(path)?;
    WriteLogger::init(level, Config::default(), log_file)?;
    Ok(())
}
