//! HTTP message serialization
//!
//! [`HttpDumper`] is the seam between the traffic logger and whatever turns a
//! request or response into text. [`WireDumper`] renders HTTP/1.x wire form:
//!
//! ```text
//! POST /upload?id=7 HTTP/1.1
//! Host: example.com
//! Content-Type: text/plain
//!
//! Payload...
//! ```

use crate::core::Result;
use http::header::{HeaderMap, HeaderName, HOST};
use http::{Request, Response, Version};

/// Serializes HTTP messages, optionally including the body
pub trait HttpDumper {
    fn dump_request<B: AsRef<[u8]>>(&self, request: &Request<B>, body: bool) -> Result<Vec<u8>>;

    fn dump_response<B: AsRef<[u8]>>(&self, response: &Response<B>, body: bool)
        -> Result<Vec<u8>>;
}

/// HTTP/1.x wire-format dumper with CRLF line endings
#[derive(Debug, Clone, Copy, Default)]
pub struct WireDumper;

impl HttpDumper for WireDumper {
    fn dump_request<B: AsRef<[u8]>>(&self, request: &Request<B>, body: bool) -> Result<Vec<u8>> {
        let uri = request.uri();
        let target = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

        let mut out = Vec::with_capacity(256);
        out.extend_from_slice(
            format!(
                "{} {} {}\r\n",
                request.method(),
                target,
                version_str(request.version())
            )
            .as_bytes(),
        );

        let headers = request.headers();
        match headers.get(HOST) {
            Some(host) => write_header(&mut out, "Host", host.as_bytes()),
            None => {
                if let Some(authority) = uri.authority() {
                    write_header(&mut out, "Host", authority.as_str().as_bytes());
                }
            }
        }
        write_headers(&mut out, headers, |name| name == HOST);

        out.extend_from_slice(b"\r\n");
        if body {
            out.extend_from_slice(request.body().as_ref());
        }
        Ok(out)
    }

    fn dump_response<B: AsRef<[u8]>>(
        &self,
        response: &Response<B>,
        body: bool,
    ) -> Result<Vec<u8>> {
        let status = response.status();

        let mut out = Vec::with_capacity(256);
        let version = version_str(response.version());
        let status_line = match status.canonical_reason() {
            Some(reason) => format!("{} {} {}\r\n", version, status.as_str(), reason),
            None => format!("{} {}\r\n", version, status.as_str()),
        };
        out.extend_from_slice(status_line.as_bytes());
        write_headers(&mut out, response.headers(), |_| false);

        out.extend_from_slice(b"\r\n");
        if body {
            out.extend_from_slice(response.body().as_ref());
        }
        Ok(out)
    }
}

fn write_headers(out: &mut Vec<u8>, headers: &HeaderMap, skip: impl Fn(&HeaderName) -> bool) {
    for (name, value) in headers.iter() {
        if skip(name) {
            continue;
        }
        write_header(out, &canonical_name(name), value.as_bytes());
    }
}

fn write_header(out: &mut Vec<u8>, name: &str, value: &[u8]) {
    out.extend_from_slice(name.as_bytes());
    out.extend_from_slice(b": ");
    out.extend_from_slice(value);
    out.extend_from_slice(b"\r\n");
}

/// `content-type` → `Content-Type`
pub fn canonical_name(name: &HeaderName) -> String {
    let mut upper = true;
    name.as_str()
        .chars()
        .map(|c| {
            let c = if upper { c.to_ascii_uppercase() } else { c };
            upper = c == '-';
            c
        })
        .collect()
}

/// Protocol major and minor version numbers
pub fn proto_version(version: Version) -> (u8, u8) {
    match version {
        Version::HTTP_09 => (0, 9),
        Version::HTTP_10 => (1, 0),
        Version::HTTP_2 => (2, 0),
        Version::HTTP_3 => (3, 0),
        _ => (1, 1),
    }
}

fn version_str(version: Version) -> String {
    let (major, minor) = proto_version(version);
    format!("HTTP/{}.{}", major, minor)
}
