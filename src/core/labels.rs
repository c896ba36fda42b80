//! Level labels

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// The five textual tags written in the level field of each line.
///
/// Every label is independently overridable; unset labels in a
/// deserialized config fall back to the uppercase defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelLabels {
    pub info: String,
    pub debug: String,
    pub warn: String,
    pub fatal: String,
    pub error: String,
}

impl Default for LevelLabels {
    fn default() -> Self {
        Self {
            info: LogLevel::Info.to_str().to_string(),
            debug: LogLevel::Debug.to_str().to_string(),
            warn: LogLevel::Warn.to_str().to_string(),
            fatal: LogLevel::Fatal.to_str().to_string(),
            error: LogLevel::Error.to_str().to_string(),
        }
    }
}

impl LevelLabels {
    /// Build labels in the order info, debug, warn, fatal, error
    pub fn new(
        info: impl Into<String>,
        debug: impl Into<String>,
        warn: impl Into<String>,
        fatal: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            info: info.into(),
            debug: debug.into(),
            warn: warn.into(),
            fatal: fatal.into(),
            error: error.into(),
        }
    }

    #[must_use]
    pub fn get(&self, level: LogLevel) -> &str {
        match level {
            LogLevel::Info => &self.info,
            LogLevel::Debug => &self.debug,
            LogLevel::Warn => &self.warn,
            LogLevel::Fatal => &self.fatal,
            LogLevel::Error => &self.error,
        }
    }

    pub fn set(&mut self, level: LogLevel, label: impl Into<String>) {
        let slot = match level {
            LogLevel::Info => &mut self.info,
            LogLevel::Debug => &mut self.debug,
            LogLevel::Warn => &mut self.warn,
            LogLevel::Fatal => &mut self.fatal,
            LogLevel::Error => &mut self.error,
        };
        *slot = label.into();
    }
}
