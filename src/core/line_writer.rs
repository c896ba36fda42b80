//! Line-oriented sink primitive
//!
//! A [`LineWriter`] owns the destination writer together with the header
//! flags and prefix. Every call writes exactly one complete line under the
//! writer's lock, so concurrent writers never interleave within a line.

use super::error::Result;
use super::sink_flags::SinkFlags;
use super::timestamp;
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;
use std::panic::Location;

pub struct LineWriter {
    out: Mutex<Box<dyn Write + Send>>,
    prefix: String,
    flags: SinkFlags,
}

impl LineWriter {
    /// Create a line writer over `out` with the given prefix and header flags
    pub fn new<W: Write + Send + 'static>(out: W, prefix: impl Into<String>, flags: SinkFlags) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
            prefix: prefix.into(),
            flags,
        }
    }

    /// Replace the destination; lines already written are unaffected
    pub fn set_output<W: Write + Send + 'static>(&mut self, out: W) {
        *self.out.get_mut() = Box::new(out);
    }

    pub fn flags(&self) -> SinkFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: SinkFlags) {
        self.flags = flags;
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// Write one line, prepending the flag-controlled header
    ///
    /// `call_depth` is kept for compatibility with line-logger adapter
    /// contracts. The file location reported by `LONG_FILE`/`SHORT_FILE` is the
    /// nearest caller not marked `#[track_caller]`.
    #[track_caller]
    pub fn output(&self, call_depth: usize, line: &str) -> Result<()> {
        let _ = call_depth;
        self.write_line(Location::caller(), line)
    }

    /// Write `message` as-is, terminated by a newline
    #[track_caller]
    pub fn print(&self, message: impl fmt::Display) {
        let _ = self.write_line(Location::caller(), &message.to_string());
    }

    /// Write pre-formatted arguments, terminated by a newline
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        let _ = self.write_line(Location::caller(), &fmt::format(args));
    }

    /// Write `message` followed by exactly one newline
    #[track_caller]
    pub fn println(&self, message: impl fmt::Display) {
        let _ = self.write_line(Location::caller(), &format!("{}\n", message));
    }

    pub fn flush(&self) -> Result<()> {
        self.out.lock().flush()?;
        Ok(())
    }

    pub(crate) fn write_line(&self, location: &Location<'_>, line: &str) -> Result<()> {
        let mut buf = String::with_capacity(self.prefix.len() + line.len() + 48);
        self.format_header(&mut buf, location);
        buf.push_str(line);
        if !line.ends_with('\n') {
            buf.push('\n');
        }

        let mut out = self.out.lock();
        out.write_all(buf.as_bytes())?;
        Ok(())
    }

    fn format_header(&self, buf: &mut String, location: &Location<'_>) {
        let flags = self.flags;
        if !flags.contains(SinkFlags::MSG_PREFIX) {
            buf.push_str(&self.prefix);
        }

        timestamp::now_header(
            flags.contains(SinkFlags::UTC),
            flags.contains(SinkFlags::DATE),
            flags.contains(SinkFlags::TIME),
            flags.contains(SinkFlags::MICROSECONDS),
            buf,
        );

        if flags.intersects(SinkFlags::SHORT_FILE | SinkFlags::LONG_FILE) {
            let file = location.file();
            let file = if flags.contains(SinkFlags::SHORT_FILE) {
                file.rsplit(['/', '\\']).next().unwrap_or(file)
            } else {
                file
            };
            buf.push_str(file);
            buf.push(':');
            buf.push_str(&location.line().to_string());
            buf.push_str(": ");
        }

        if flags.contains(SinkFlags::MSG_PREFIX) {
            buf.push_str(&self.prefix);
        }
    }
}

impl fmt::Debug for LineWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineWriter")
            .field("prefix", &self.prefix)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}
