//! File logging example
//!
//! Demonstrates logging into an append-mode file chosen from a JSON config.
//!
//! Run with: cargo run --example file_logging

use rust_leveled_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Leveled Logger - File Logging Example ===\n");

    let config = LoggerConfig::from_json_str(
        r#"{
            "debug": true,
            "mode": "datadog",
            "labels": { "warn": "WARNING" }
        }"#,
    )?;

    let logger = config.build(open_log_file("application.log")?);

    logger.info("App", "Application started");
    logger.debug("Config", "Loading configuration...");
    logger.warning("Config", "Using default settings for some options");
    logger.error("Plugins", "Failed to load optional plugin");

    for i in 1..=5 {
        logger.info("Worker", format_args!("Processing item {}/5", i));
    }

    logger.info("App", "All operations completed");
    logger.flush()?;

    println!("Check 'application.log' for the full log output");

    Ok(())
}
