//! # Rust Leveled Logger
//!
//! A small leveled logger that writes one formatted line per call to a
//! caller-supplied sink, plus a helper that dumps HTTP traffic through it.
//!
//! ## Features
//!
//! - **Two display modes**: compact standard lines with a date/time sink
//!   header, or Datadog compatible tab-separated lines with a UTC timestamp
//! - **Configurable labels**: the five level tags can be renamed
//! - **Debug gating**: debug lines are only written when enabled
//! - **HTTP traffic**: request/response dumps at a verbosity that follows the
//!   logger's debug flag
//!
//! ```
//! use rust_leveled_logger::prelude::*;
//!
//! let buffer = SharedBuffer::new();
//! let mut logger = Logger::new(true, buffer.clone());
//! logger.set_flags(SinkFlags::NONE);
//!
//! logger.info("Test", format_args!("hello {}", 1));
//! assert_eq!(buffer.contents(), "[INFO][Test] hello 1\n");
//! ```

pub mod core;
pub mod macros;
pub mod sinks;
pub mod traffic;

pub mod prelude {
    pub use crate::core::{
        LevelLabels, LineFormat, LineWriter, LogLevel, LogMode, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, Result, SinkFlags, TimestampFormat,
    };
    pub use crate::sinks::{open_log_file, SharedBuffer};
    pub use crate::traffic::{log_request, log_response, HttpDumper, HttpTrafficLogger, WireDumper};
}

pub use crate::core::{
    LevelLabels, LineFormat, LineWriter, LogLevel, LogMode, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, Result, SinkFlags, TimestampFormat,
};
pub use sinks::{open_log_file, SharedBuffer};
pub use traffic::{log_request, log_response, HttpDumper, HttpTrafficLogger, WireDumper};
