//! HTTP traffic logging

pub mod dump;
pub mod traffic_logger;

pub use dump::{HttpDumper, WireDumper};
pub use traffic_logger::{
    log_request, log_response, request_summary, write_request_summary, HttpTrafficLogger,
    FAILURE_TAG, REQUEST_TAG, RESPONSE_TAG,
};
