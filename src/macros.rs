//! Logging macros for ergonomic message formatting.
//!
//! Each macro takes the logger, a title, and a `format!`-style message.
//!
//! # Examples
//!
//! ```
//! use rust_leveled_logger::prelude::*;
//! use rust_leveled_logger::info;
//!
//! let logger = Logger::new(false, std::io::stdout());
//!
//! // Basic logging
//! info!(logger, "Server", "started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server", "listening on port {}", port);
//! ```

/// Log at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::new(false, std::io::sink());
/// use rust_leveled_logger::log;
/// log!(logger, LogLevel::Info, "Startup", "Simple message");
/// log!(logger, LogLevel::Error, "Startup", "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $title:expr, $($arg:tt)+) => {
        $logger.log($level, $title, format_args!($($arg)+))
    };
}

/// Log a debug-level message; skipped unless the logger has debug enabled.
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::new(true, std::io::sink());
/// use rust_leveled_logger::debug;
/// debug!(logger, "Cache", "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $title:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $title, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $title:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $title, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $title:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $title, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $title:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $title, $($arg)+)
    };
}

/// Log with the fatal label. Does not exit.
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = Logger::new(false, std::io::sink());
/// use rust_leveled_logger::fatal;
/// fatal!(logger, "Storage", "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $title:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $title, $($arg)+)
    };
}
