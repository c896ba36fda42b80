//! Core logger types

pub mod config;
pub mod error;
pub mod labels;
pub mod line_writer;
pub mod log_level;
pub mod log_mode;
pub mod logger;
pub mod sink_flags;
pub mod timestamp;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use labels::LevelLabels;
pub use line_writer::LineWriter;
pub use log_level::LogLevel;
pub use log_mode::{LineFormat, LogMode};
pub use logger::{Logger, LoggerBuilder};
pub use sink_flags::SinkFlags;
pub use timestamp::TimestampFormat;
