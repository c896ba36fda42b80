//! Basic logger usage example
//!
//! Demonstrates both display modes, debug gating and label overrides.
//!
//! Run with: cargo run --example basic_usage

use rust_leveled_logger::prelude::*;
use rust_leveled_logger::{info, warning};

fn main() -> Result<()> {
    println!("=== Rust Leveled Logger - Basic Usage Example ===\n");

    // Standard mode: date + time header from the sink
    let mut logger = Logger::new(true, std::io::stdout());

    println!("1. Logging at different levels (standard mode):");
    logger.info("Startup", "This is an info message");
    logger.debug("Startup", "This is a debug message");
    logger.warning("Startup", "This is a warning message");
    logger.error("Startup", "This is an error message");
    logger.fatal("Startup", "This is a fatal message (the process keeps running)");

    println!("\n2. Formatted messages:");
    let port = 8080;
    info!(logger, "Server", "listening on port {}", port);
    warning!(logger, "Server", "{} of {} workers ready", 3, 4);

    println!("\n3. Debug disabled:");
    logger.set_debug(false);
    logger.debug("Startup", "Debug message (hidden)");
    logger.info("Startup", "Info message (visible)");

    println!("\n4. Datadog compatible mode with custom labels:");
    logger.set_datadog_mode();
    logger.set_labels(LevelLabels::new("info", "debug", "warn", "fatal", "error"));
    logger.info("Startup", "Tab separated line with a UTC timestamp");

    println!("\n5. Raw passthroughs:");
    logger.set_standard_mode();
    logger.print("unformatted line");
    logger.output(1, "adapter line")?;

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
