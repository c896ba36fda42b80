//! Request/response logging through a [`Logger`]

use super::dump::{canonical_name, proto_version, HttpDumper, WireDumper};
use crate::core::{Logger, Result};
use http::header::{HeaderName, HOST, TRAILER, TRANSFER_ENCODING};
use http::{Request, Response};
use std::borrow::Cow;
use std::io::Write;

/// Default title for request lines
pub const REQUEST_TAG: &str = "http::Request";
/// Default title for response lines
pub const RESPONSE_TAG: &str = "http::Response";
/// Default title for lines reporting that a dump failed
pub const FAILURE_TAG: &str = "Logger";

/// Headers left out of the non-debug request summary
const SUMMARY_EXCLUDED_HEADERS: [HeaderName; 3] = [HOST, TRANSFER_ENCODING, TRAILER];

/// Dumps HTTP traffic into a [`Logger`]
///
/// With debug enabled on the logger, requests are dumped in full (body
/// included) at Debug level. Otherwise only the request line and a filtered,
/// sorted header block are logged at Info level. Responses are always logged
/// at Info level, with the body only in debug.
///
/// Failures to serialize never reach the caller; they become a Warning line,
/// or a Fatal-labelled line when writing the header summary fails.
///
/// # Example
///
/// ```
/// use rust_leveled_logger::{HttpTrafficLogger, Logger, SharedBuffer, SinkFlags};
///
/// let buffer = SharedBuffer::new();
/// let mut logger = Logger::new(false, buffer.clone());
/// logger.set_flags(SinkFlags::NONE);
///
/// let request = http::Request::get("http://example.com/health")
///     .header("accept", "*/*")
///     .body(Vec::<u8>::new())
///     .unwrap();
///
/// HttpTrafficLogger::new()
///     .with_request_tag("inbound")
///     .log_request(&logger, &request);
///
/// assert_eq!(
///     buffer.contents(),
///     "[INFO][inbound] Request GET http://example.com/health HTTP/1.1\nAccept: */*\r\n\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct HttpTrafficLogger<D = WireDumper> {
    dumper: D,
    request_tag: Cow<'static, str>,
    response_tag: Cow<'static, str>,
    failure_tag: Cow<'static, str>,
}

impl HttpTrafficLogger<WireDumper> {
    pub fn new() -> Self {
        Self::with_dumper(WireDumper)
    }
}

impl Default for HttpTrafficLogger<WireDumper> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: HttpDumper> HttpTrafficLogger<D> {
    /// Use a custom serializer
    pub fn with_dumper(dumper: D) -> Self {
        Self {
            dumper,
            request_tag: Cow::Borrowed(REQUEST_TAG),
            response_tag: Cow::Borrowed(RESPONSE_TAG),
            failure_tag: Cow::Borrowed(FAILURE_TAG),
        }
    }

    #[must_use]
    pub fn with_request_tag(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        self.request_tag = tag.into();
        self
    }

    #[must_use]
    pub fn with_response_tag(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        self.response_tag = tag.into();
        self
    }

    #[must_use]
    pub fn with_failure_tag(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        self.failure_tag = tag.into();
        self
    }

    pub fn dumper(&self) -> &D {
        &self.dumper
    }

    #[track_caller]
    pub fn log_request<B: AsRef<[u8]>>(&self, logger: &Logger, request: &Request<B>) {
        if logger.is_debug() {
            match self.dumper.dump_request(request, true) {
                Ok(text) => logger.debug(
                    &self.request_tag,
                    format_args!("Request {}", String::from_utf8_lossy(&text)),
                ),
                Err(e) => logger.warning(
                    &self.failure_tag,
                    format_args!("Failed to log request, err: {}", e),
                ),
            }
            return;
        }

        match request_summary(request) {
            Ok(summary) => logger.info(&self.request_tag, format_args!("Request {}", summary)),
            Err(e) => logger.fatal(
                &self.failure_tag,
                format_args!("Failed to log request, err: {}", e),
            ),
        }
    }

    #[track_caller]
    pub fn log_response<B: AsRef<[u8]>>(&self, logger: &Logger, response: &Response<B>) {
        match self.dumper.dump_response(response, logger.is_debug()) {
            Ok(text) => logger.info(
                &self.response_tag,
                format_args!("Response {}", String::from_utf8_lossy(&text)),
            ),
            Err(e) => logger.warning(
                &self.failure_tag,
                format_args!("Failed to log response, err: {}", e),
            ),
        }
    }
}

/// Request line plus header block, without Host, Transfer-Encoding or Trailer
///
/// Headers are sorted by name and written as `Name: value\r\n`; the request
/// line ends with a bare `\n`. Values that are not valid UTF-8 are decoded
/// lossily. The only failure is a write error from `out`.
pub fn write_request_summary<B, W: Write>(request: &Request<B>, out: &mut W) -> Result<()> {
    let (major, minor) = proto_version(request.version());
    let method = Some(request.method().as_str())
        .filter(|m| !m.is_empty())
        .unwrap_or("GET");

    writeln!(out, "{} {} HTTP/{}.{}", method, request.uri(), major, minor)?;

    let headers = request.headers();
    let mut names: Vec<(String, &HeaderName)> = headers
        .keys()
        .filter(|name| !SUMMARY_EXCLUDED_HEADERS.contains(*name))
        .map(|name| (canonical_name(name), name))
        .collect();
    names.sort_by(|a, b| a.0.cmp(&b.0));

    for (display, name) in names {
        for value in headers.get_all(name) {
            let value = String::from_utf8_lossy(value.as_bytes());
            write!(out, "{}: {}\r\n", display, value.replace(['\r', '\n'], " ").trim())?;
        }
    }

    Ok(())
}

/// [`write_request_summary`] into a fresh string
pub fn request_summary<B>(request: &Request<B>) -> Result<String> {
    let mut out = Vec::with_capacity(256);
    write_request_summary(request, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Log `request` with the default dumper and tags
#[track_caller]
pub fn log_request<B: AsRef<[u8]>>(logger: &Logger, request: &Request<B>) {
    HttpTrafficLogger::new().log_request(logger, request);
}

/// Log `response` with the default dumper and tags
#[track_caller]
pub fn log_response<B: AsRef<[u8]>>(logger: &Logger, response: &Response<B>) {
    HttpTrafficLogger::new().log_response(logger, response);
}
