//! Basic logger usage example
//!
//! Demonstrates console logging, level gating and bound fields.
//!
//! Run with: cargo run --example basic_usage

use rust_field_logger::prelude::*;
use rust_field_logger::{caller_field, debug, info, trace_field, warn};

fn main() -> Result<()> {
    println!("=== Rust Field Logger - Basic Usage Example ===\n");

    // Verbosity comes from the VERBOSITY environment variable (INFO if unset)
    let mut logger = Logger::console();
    println!("Verbosity from environment: {}\n", logger.log_level());

    // Log messages at different levels
    println!("1. Logging at different levels:");
    logger.set_log_level(LogLevel::Debug);
    logger.debug("This is a debug message", &[]);
    logger.info("This is an info message", &[Field::new("number", 12)]);
    logger.warn("This is a warning message", &[Field::new("ratio", 0.75)]);
    logger.error("This is an error message", &[Field::new("retry", false)]);

    println!("\n2. Logging with a lower verbosity:");
    logger.set_log_level(LogLevel::Info);
    println!("   Verbosity set to INFO - debug won't show:");
    logger.debug("Debug message (hidden)", &[]);
    logger.info("Info message (visible)", &[]);

    println!("\n3. Logging a single value:");
    logger.info_object("just a string");
    logger.warn_object(404);

    println!("\n4. Bound fields:");
    let request = logger.with(&[Field::new("service", "billing"), Field::new("request_id", 7)]);
    request.info("Request received", &[Field::new("path", "/invoices")]);
    let attempt = request.with(&[Field::new("attempt", 2)]);
    warn!(attempt, "Retrying upstream", "upstream" => "ledger");

    println!("\n5. Macros and call-site fields:");
    info!(logger, "Server started", "port" => 8080, "tls" => true);
    debug!(logger, "Not shown at INFO");
    logger.info("Located", &[trace_field!(), caller_field!()]);

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");
    Ok(())
}
