//! Display modes and the line templates they select
//!
//! Two modes are available:
//!
//! - **Datadog compatible**: `[DEBUG]	2020-03-25T07:49:06.648Z	[Test] test write to file`
//! - **Standard**: `2020/03/25 16:52:16 [DEBUG][Test] test write to file`
//!   (the date and time come from the sink flags, not from the template)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display convention used by a [`Logger`](crate::Logger)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogMode {
    /// Datadog compatible: tab separated, UTC millisecond timestamp in the line
    #[serde(alias = "ddg")]
    Datadog,
    /// Standard: compact tags, timestamp supplied by the sink header
    #[default]
    #[serde(alias = "std")]
    Standard,
}

impl LogMode {
    /// Line template this mode renders with
    #[must_use]
    pub fn line_format(&self) -> LineFormat {
        match self {
            LogMode::Datadog => LineFormat::Datadog,
            LogMode::Standard => LineFormat::Standard,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogMode::Datadog => "datadog",
            LogMode::Standard => "standard",
        }
    }
}

impl fmt::Display for LogMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "datadog" | "ddg" => Ok(LogMode::Datadog),
            "standard" | "std" => Ok(LogMode::Standard),
            _ => Err(format!("Invalid log mode: '{}'", s)),
        }
    }
}

/// Line template with four positional fields: level, prefix, title, message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFormat {
    /// `[{level}]\t{prefix}\t[{title}] {message}\n`
    Datadog,
    /// `[{level}]{prefix}[{title}] {message}\n`
    Standard,
}

impl LineFormat {
    /// Render one line, including its trailing newline
    ///
    /// The message is inserted verbatim; no escaping is applied.
    pub fn render(
        &self,
        level: &str,
        prefix: &str,
        title: &str,
        message: impl fmt::Display,
    ) -> String {
        match self {
            LineFormat::Datadog => format!("[{}]\t{}\t[{}] {}\n", level, prefix, title, message),
            LineFormat::Standard => format!("[{}]{}[{}] {}\n", level, prefix, title, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selects_template() {
        assert_eq!(LogMode::Datadog.line_format(), LineFormat::Datadog);
        assert_eq!(LogMode::Standard.line_format(), LineFormat::Standard);
    }

    #[test]
    fn test_standard_render_collapses_empty_prefix() {
        let line = LineFormat::Standard.render("INFO", "", "Test", "hello 1");
        assert_eq!(line, "[INFO][Test] hello 1\n");
    }

    #[test]
    fn test_datadog_render() {
        let line = LineFormat::Datadog.render("WARN", "2020-03-25T07:49:06.648Z", "Test", 42);
        assert_eq!(line, "[WARN]\t2020-03-25T07:49:06.648Z\t[Test] 42\n");
    }

    #[test]
    fn test_message_is_not_escaped() {
        let line = LineFormat::Standard.render("INFO", "", "T", "a\tb %s {}");
        assert_eq!(line, "[INFO][T] a\tb %s {}\n");
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("DDG".parse::<LogMode>(), Ok(LogMode::Datadog));
        assert_eq!("std".parse::<LogMode>(), Ok(LogMode::Standard));
        assert_eq!("Standard".parse::<LogMode>(), Ok(LogMode::Standard));
        assert!("json".parse::<LogMode>().is_err());
    }

    #[test]
    fn test_mode_serde() {
        let json = serde_json::to_string(&LogMode::Datadog).expect("serialize");
        assert_eq!(json, "\"datadog\"");
        let mode: LogMode = serde_json::from_str("\"standard\"").expect("deserialize");
        assert_eq!(mode, LogMode::Standard);
        let mode: LogMode = serde_json::from_str("\"ddg\"").expect("deserialize alias");
        assert_eq!(mode, LogMode::Datadog);
    }
}
