//! File sink helper

use crate::core::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Open `path` for appending, creating it when missing
///
/// The returned handle is handed to a logger as its sink; closing it is up to
/// whoever drops the logger. Keep a [`File::try_clone`] if the file must
/// outlive the logger.
///
/// # Examples
///
/// ```no_run
/// use rust_leveled_logger::{sinks::open_log_file, Logger};
///
/// let file = open_log_file("/var/log/app.log").unwrap();
/// let logger = Logger::new(true, file);
/// logger.info("Startup", "listening");
/// ```
pub fn open_log_file(path: impl AsRef<Path>) -> Result<File> {
    let path = path.as_ref();
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            LoggerError::io_operation(
                "opening log file",
                format!("cannot open '{}' for append", path.display()),
                e,
            )
        })
}
