//! Declarative logger configuration
//!
//! ```
//! use rust_leveled_logger::{LoggerConfig, LogMode};
//!
//! let config = LoggerConfig::from_json_str(r#"{
//!     "debug": true,
//!     "mode": "datadog",
//!     "labels": { "warn": "WARNING" }
//! }"#).unwrap();
//!
//! let logger = config.build(std::io::stdout());
//! assert_eq!(logger.mode(), LogMode::Datadog);
//! assert_eq!(logger.labels().warn, "WARNING");
//! ```

use super::{
    error::{LoggerError, Result},
    labels::LevelLabels,
    log_mode::LogMode,
    logger::{Logger, LoggerBuilder},
    sink_flags::SinkFlags,
};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Emit Debug-level lines
    pub debug: bool,
    pub mode: LogMode,
    pub labels: LevelLabels,
    /// Sink header flags; when absent the mode decides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<SinkFlags>,
    pub prefix: String,
}

impl LoggerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger config",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json_str(&text)
    }

    /// Reject flag bits that name no header piece
    pub fn validate(&self) -> Result<()> {
        if let Some(flags) = self.flags {
            let unknown = flags.unknown_bits();
            if unknown != 0 {
                return Err(LoggerError::config(
                    "LoggerConfig",
                    format!("unknown sink flag bits {:#x}", unknown),
                ));
            }
        }

        Ok(())
    }

    pub fn to_builder(&self) -> LoggerBuilder {
        let builder = Logger::builder()
            .debug(self.debug)
            .mode(self.mode)
            .labels(self.labels.clone())
            .prefix(self.prefix.clone());

        match self.flags {
            Some(flags) => builder.flags(flags),
            None => builder,
        }
    }

    pub fn build<W: Write + Send + 'static>(&self, out: W) -> Logger {
        self.to_builder().build(out)
    }
}
