//! HTTP traffic logging example
//!
//! Shows how the logger's debug flag switches between request summaries and
//! full dumps.
//!
//! Run with: cargo run --example http_logging

use rust_leveled_logger::prelude::*;
use std::error::Error;

fn main() -> std::result::Result<(), Box<dyn Error>> {
    println!("=== Rust Leveled Logger - HTTP Logging Example ===\n");

    let request = http::Request::post("http://127.0.0.1:3000/orders")
        .header("authorization", "some-token-here")
        .header("content-type", "text/plain")
        .header("transfer-encoding", "chunked")
        .body("Payload...")?;

    let response = http::Response::builder()
        .status(201)
        .header("date", "Wed, 19 Jul 1972 19:00:00 GMT")
        .body("created\n")?;

    println!("1. Summary (debug off):");
    let quiet = Logger::new(false, std::io::stdout());
    log_request(&quiet, &request);
    log_response(&quiet, &response);

    println!("\n2. Full dump (debug on, custom tags):");
    let verbose = Logger::new_datadog(true, std::io::stdout());
    let traffic = HttpTrafficLogger::new()
        .with_request_tag("orders-in")
        .with_response_tag("orders-out");
    traffic.log_request(&verbose, &request);
    traffic.log_response(&verbose, &response);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
