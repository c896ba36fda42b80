//! Main logger implementation

use super::{
    error::Result,
    labels::LevelLabels,
    line_writer::LineWriter,
    log_level::LogLevel,
    log_mode::{LineFormat, LogMode},
    sink_flags::SinkFlags,
    timestamp,
};
use std::fmt;
use std::io::Write;
use std::panic::Location;

/// Leveled logger writing one formatted line per call to its sink.
///
/// The logger performs no locking of its own. Level operations take `&self`
/// and rely on the [`LineWriter`] to keep each line intact; mutators take
/// `&mut self`, so sharing a logger while reconfiguring it requires the
/// caller's own synchronization.
///
/// # Example
///
/// ```
/// use rust_leveled_logger::{Logger, SharedBuffer, SinkFlags};
///
/// let buffer = SharedBuffer::new();
/// let mut logger = Logger::new(false, buffer.clone());
/// logger.set_flags(SinkFlags::NONE);
///
/// logger.info("Test", format_args!("hello {}", 1));
/// logger.debug("Test", "skipped, debug is off");
///
/// assert_eq!(buffer.contents(), "[INFO][Test] hello 1\n");
/// ```
#[derive(Debug)]
pub struct Logger {
    debug: bool,
    mode: LogMode,
    format: LineFormat,
    labels: LevelLabels,
    writer: LineWriter,
}

impl Logger {
    /// Standard mode logger with a date + time sink header
    pub fn new<W: Write + Send + 'static>(debug: bool, out: W) -> Self {
        Self::with_mode(debug, LogMode::Standard, LineWriter::new(out, "", SinkFlags::STD))
    }

    /// Datadog compatible logger; the sink header is cleared because each
    /// line carries its own UTC timestamp
    pub fn new_datadog<W: Write + Send + 'static>(debug: bool, out: W) -> Self {
        Self::with_mode(debug, LogMode::Datadog, LineWriter::new(out, "", SinkFlags::NONE))
    }

    fn with_mode(debug: bool, mode: LogMode, writer: LineWriter) -> Self {
        Self {
            debug,
            mode,
            format: mode.line_format(),
            labels: LevelLabels::default(),
            writer,
        }
    }

    /// Replace the whole sink primitive, including its flags and prefix
    pub fn set_line_writer(&mut self, writer: LineWriter) {
        self.writer = writer;
    }

    pub fn line_writer(&self) -> &LineWriter {
        &self.writer
    }

    /// Redirect subsequent output
    pub fn set_output<W: Write + Send + 'static>(&mut self, out: W) {
        self.writer.set_output(out);
    }

    pub fn set_flags(&mut self, flags: SinkFlags) {
        self.writer.set_flags(flags);
    }

    pub fn flags(&self) -> SinkFlags {
        self.writer.flags()
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.writer.set_prefix(prefix);
    }

    pub fn prefix(&self) -> &str {
        self.writer.prefix()
    }

    pub fn set_labels(&mut self, labels: LevelLabels) {
        self.labels = labels;
    }

    pub fn set_label(&mut self, level: LogLevel, label: impl Into<String>) {
        self.labels.set(level, label);
    }

    pub fn labels(&self) -> &LevelLabels {
        &self.labels
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Switch to Datadog mode and clear the sink header flags
    pub fn set_datadog_mode(&mut self) {
        self.mode = LogMode::Datadog;
        self.format = LineFormat::Datadog;
        self.writer.set_flags(SinkFlags::NONE);
    }

    /// Switch to Standard mode and restore the date + time sink header
    pub fn set_standard_mode(&mut self) {
        self.mode = LogMode::Standard;
        self.format = LineFormat::Standard;
        self.writer.set_flags(SinkFlags::STD);
    }

    pub fn set_mode(&mut self, mode: LogMode) {
        match mode {
            LogMode::Datadog => self.set_datadog_mode(),
            LogMode::Standard => self.set_standard_mode(),
        }
    }

    pub fn mode(&self) -> LogMode {
        self.mode
    }

    fn line_prefix(&self) -> String {
        match self.mode {
            LogMode::Datadog => timestamp::datadog_now(),
            LogMode::Standard => String::new(),
        }
    }

    /// Render and write one leveled line; write failures are dropped
    #[track_caller]
    pub fn log(&self, level: LogLevel, title: &str, message: impl fmt::Display) {
        if level == LogLevel::Debug && !self.debug {
            return;
        }

        let line = self.format.render(
            self.labels.get(level),
            &self.line_prefix(),
            title,
            message,
        );
        let _ = self.writer.write_line(Location::caller(), &line);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, title: &str, message: impl fmt::Display) {
        self.log(LogLevel::Info, title, message);
    }

    #[inline]
    #[track_caller]
    pub fn warning(&self, title: &str, message: impl fmt::Display) {
        self.log(LogLevel::Warn, title, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, title: &str, message: impl fmt::Display) {
        self.log(LogLevel::Error, title, message);
    }

    /// Log with the fatal label; the process keeps running
    #[inline]
    #[track_caller]
    pub fn fatal(&self, title: &str, message: impl fmt::Display) {
        self.log(LogLevel::Fatal, title, message);
    }

    /// Log only when debug output is enabled
    #[inline]
    #[track_caller]
    pub fn debug(&self, title: &str, message: impl fmt::Display) {
        self.log(LogLevel::Debug, title, message);
    }

    #[track_caller]
    pub fn print(&self, message: impl fmt::Display) {
        self.writer.print(message);
    }

    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.writer.printf(args);
    }

    #[track_caller]
    pub fn println(&self, message: impl fmt::Display) {
        self.writer.println(message);
    }

    /// Unformatted write that reports sink failures
    #[track_caller]
    pub fn output(&self, call_depth: usize, line: &str) -> Result<()> {
        self.writer.output(call_depth, line)
    }

    pub fn flush(&self) -> Result<()> {
        self.writer.flush()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_leveled_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .debug(true)
    ///     .mode(LogMode::Datadog)
    ///     .build(std::io::stdout());
    /// assert_eq!(logger.mode(), LogMode::Datadog);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Flags default to what the chosen mode implies; an explicit
/// [`flags`](LoggerBuilder::flags) call overrides that.
#[derive(Debug, Clone, Default)]
pub struct LoggerBuilder {
    debug: bool,
    mode: LogMode,
    labels: LevelLabels,
    flags: Option<SinkFlags>,
    prefix: String,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn mode(mut self, mode: LogMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn labels(mut self, labels: LevelLabels) -> Self {
        self.labels = labels;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn label(mut self, level: LogLevel, label: impl Into<String>) -> Self {
        self.labels.set(level, label);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn flags(mut self, flags: SinkFlags) -> Self {
        self.flags = Some(flags);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Build the Logger over `out`
    pub fn build<W: Write + Send + 'static>(self, out: W) -> Logger {
        let mut logger = match self.mode {
            LogMode::Datadog => Logger::new_datadog(self.debug, out),
            LogMode::Standard => Logger::new(self.debug, out),
        };

        logger.set_labels(self.labels);
        logger.set_prefix(self.prefix);
        if let Some(flags) = self.flags {
            logger.set_flags(flags);
        }

        logger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::SharedBuffer;

    fn plain_logger(debug: bool) -> (Logger, SharedBuffer) {
        let buffer = SharedBuffer::new();
        let mut logger = Logger::new(debug, buffer.clone());
        logger.set_flags(SinkFlags::NONE);
        (logger, buffer)
    }

    #[test]
    fn test_new_logger_defaults() {
        let logger = Logger::new(true, std::io::sink());
        assert_eq!(logger.mode(), LogMode::Standard);
        assert_eq!(logger.flags(), SinkFlags::STD);
        assert_eq!(logger.labels(), &LevelLabels::default());
        assert!(logger.is_debug());
    }

    #[test]
    fn test_new_datadog_defaults() {
        let logger = Logger::new_datadog(false, std::io::sink());
        assert_eq!(logger.mode(), LogMode::Datadog);
        assert!(logger.flags().is_empty());
        assert!(!logger.is_debug());
    }

    #[test]
    fn test_standard_line() {
        let (logger, buffer) = plain_logger(false);
        logger.info("Test", format_args!("hello {}", 1));
        assert_eq!(buffer.contents(), "[INFO][Test] hello 1\n");
    }

    #[test]
    fn test_default_labels_per_level() {
        let (logger, buffer) = plain_logger(true);
        logger.info("T", "m");
        logger.debug("T", "m");
        logger.warning("T", "m");
        logger.fatal("T", "m");
        logger.error("T", "m");
        assert_eq!(
            buffer.contents(),
            "[INFO][T] m\n[DEBUG][T] m\n[WARN][T] m\n[FATAL][T] m\n[ERROR][T] m\n"
        );
    }

    #[test]
    fn test_debug_gated_by_flag() {
        let (mut logger, buffer) = plain_logger(false);
        logger.debug("Test", "hidden");
        assert!(buffer.contents().is_empty());

        logger.set_debug(true);
        logger.debug("Test", "shown");
        assert_eq!(buffer.contents(), "[DEBUG][Test] shown\n");
    }

    #[test]
    fn test_set_labels() {
        let (mut logger, buffer) = plain_logger(true);
        logger.set_labels(LevelLabels::new("info", "debug", "warn", "fatal", "error"));
        logger.warning("Test", "x");
        logger.set_label(LogLevel::Error, "E");
        logger.error("Test", "y");
        assert_eq!(buffer.contents(), "[warn][Test] x\n[E][Test] y\n");
    }

    #[test]
    fn test_switch_mode_resets_flags_and_keeps_labels() {
        let mut logger = Logger::new_datadog(true, std::io::sink());
        logger.set_label(LogLevel::Info, "I");

        logger.set_standard_mode();
        assert_eq!(logger.mode(), LogMode::Standard);
        assert_eq!(logger.flags(), SinkFlags::STD);

        logger.set_mode(LogMode::Datadog);
        assert_eq!(logger.mode(), LogMode::Datadog);
        assert!(logger.flags().is_empty());
        assert_eq!(logger.labels().info, "I");
    }

    #[test]
    fn test_datadog_line_shape() {
        let buffer = SharedBuffer::new();
        let logger = Logger::new_datadog(false, buffer.clone());
        logger.error("Test", "boom");

        let contents = buffer.contents();
        let fields: Vec<&str> = contents.trim_end_matches('\n').split('\t').collect();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], "[ERROR]");
        assert_eq!(fields[1].len(), "2020-03-25T07:49:06.648Z".len());
        assert!(fields[1].ends_with('Z'));
        assert_eq!(fields[2], "[Test] boom");
    }

    #[test]
    fn test_fatal_does_not_exit() {
        let (logger, buffer) = plain_logger(false);
        logger.fatal("Test", "still running");
        logger.info("Test", "after fatal");
        assert_eq!(buffer.contents().lines().count(), 2);
    }

    #[test]
    fn test_passthroughs() {
        let (logger, buffer) = plain_logger(true);
        logger.print("ok");
        logger.printf(format_args!("{}", 1));
        logger.println("ok");
        assert!(logger.output(1, "ok").is_ok());
        assert_eq!(buffer.contents(), "ok\n1\nok\nok\n");
    }

    #[test]
    fn test_set_output() {
        let (mut logger, first) = plain_logger(false);
        let second = SharedBuffer::new();
        logger.info("A", "1");
        logger.set_output(second.clone());
        logger.info("B", "2");
        assert_eq!(first.contents(), "[INFO][A] 1\n");
        assert_eq!(second.contents(), "[INFO][B] 2\n");
    }

    #[test]
    fn test_set_line_writer() {
        let (mut logger, _) = plain_logger(false);
        let replacement = SharedBuffer::new();
        logger.set_line_writer(LineWriter::new(replacement.clone(), "svc ", SinkFlags::NONE));
        logger.info("Test", "x");
        assert_eq!(replacement.contents(), "svc [INFO][Test] x\n");
    }

    #[test]
    fn test_builder_full_configuration() {
        let buffer = SharedBuffer::new();
        let logger = Logger::builder()
            .debug(true)
            .mode(LogMode::Standard)
            .label(LogLevel::Debug, "DBG")
            .flags(SinkFlags::NONE)
            .prefix("api ")
            .build(buffer.clone());

        logger.debug("Test", "x");
        assert_eq!(buffer.contents(), "api [DBG][Test] x\n");
    }

    #[test]
    fn test_builder_mode_implies_flags() {
        let logger = Logger::builder().mode(LogMode::Datadog).build(std::io::sink());
        assert!(logger.flags().is_empty());

        let logger = LoggerBuilder::default().build(std::io::sink());
        assert_eq!(logger.flags(), SinkFlags::STD);
        assert!(!logger.is_debug());
    }
}
