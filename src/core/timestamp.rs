//! Timestamp formatting utilities
//!
//! Provides the timestamp renderings used by the line templates and by the
//! sink header.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use rust_leveled_logger::TimestampFormat;
/// use chrono::Utc;
///
/// let timestamp = TimestampFormat::Iso8601Millis.format(&Utc::now());
/// assert!(timestamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 UTC with milliseconds: `2025-01-08T10:30:45.123Z`
    ///
    /// Always three fractional digits and a literal `Z`; used by the
    /// Datadog compatible line template.
    #[default]
    Iso8601Millis,

    /// Sink header date: `2025/01/08`
    SinkDate,

    /// Sink header time: `10:30:45`
    SinkTime,

    /// Sink header time with microseconds: `10:30:45.123456`
    SinkTimeMicros,
}

impl TimestampFormat {
    /// Format a timestamp in any time zone according to this format
    #[must_use]
    pub fn format<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        match self {
            TimestampFormat::Iso8601Millis => datetime
                .with_timezone(&Utc)
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
            TimestampFormat::SinkDate => datetime.format("%Y/%m/%d").to_string(),
            TimestampFormat::SinkTime => datetime.format("%H:%M:%S").to_string(),
            TimestampFormat::SinkTimeMicros => datetime.format("%H:%M:%S%.6f").to_string(),
        }
    }
}

/// Current UTC time in the Datadog line format
#[must_use]
pub fn datadog_now() -> String {
    TimestampFormat::Iso8601Millis.format(&Utc::now())
}

/// Render the date/time part of a sink header, each piece followed by a space
pub(crate) fn sink_header<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    date: bool,
    time: bool,
    micros: bool,
    out: &mut String,
) where
    Tz::Offset: std::fmt::Display,
{
    if date {
        out.push_str(&TimestampFormat::SinkDate.format(datetime));
        out.push(' ');
    }
    if time || micros {
        let format = if micros {
            TimestampFormat::SinkTimeMicros
        } else {
            TimestampFormat::SinkTime
        };
        out.push_str(&format.format(datetime));
        out.push(' ');
    }
}

/// Local wall-clock time, or UTC when requested
pub(crate) fn now_header(utc: bool, date: bool, time: bool, micros: bool, out: &mut String) {
    if utc {
        sink_header(&Utc::now(), date, time, micros, out);
    } else {
        sink_header(&Local::now(), date, time, micros, out);
    }
}
