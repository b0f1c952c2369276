//! File logger setup for hosts embedding the list.

use std::fs::OpenOptions;
use std::path::Path;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use thiserror::Error;

/// Errors from logger initialization.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to create log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

/// Route `log` output at `level` and above to a file, appending to it.
///
/// Can only succeed once per process. A failed repeat call leaves the file
/// of the installed logger untouched.
pub fn init_file_logger(path: impl AsRef<Path>, level: LevelFilter) -> Result<(), LoggingError> {
    let log_file = OpenOptions::new().create(true).append(true).open(path)?;
    WriteLogger::init(level, Config::default(), log_file)?;
    Ok(())
}
