//! Compile-time verbosity example
//!
//! Demonstrates loggers whose verbosity is part of their type, and a FATAL
//! hook that replaces process termination.
//!
//! Run with: cargo run --example static_logging

use rust_field_logger::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Field Logger - Static Logging Example ===\n");

    println!("1. WARN-level logger:");
    let logger = WarnLogger::new(ConsoleDriver::stdout());
    logger.debug("Compiled out", &[]);
    logger.info("Compiled out", &[]);
    logger.warn("Disk usage high", &[Field::new("percent", 91)]);
    logger.error("Write failed", &[Field::new("errno", 28)]);
    println!("   Enabled: {:?}", LogLevel::ALL.map(|level| logger.is_enabled(level)));

    println!("\n2. Bound fields on a DEBUG-level logger:");
    let debug = DebugLogger::new(ConsoleDriver::stdout()).with(&[Field::new("worker", 3)]);
    debug.debug("Polling queue", &[Field::new("depth", 0)]);

    println!("\n3. FATAL with a hook instead of exiting:");
    let hook: FatalHook = Arc::new(|| println!("   (fatal hook ran, process keeps going)"));
    let guarded = FatalLogger::with_fatal_hook(ConsoleDriver::stdout(), hook);
    guarded.error("Compiled out", &[]);
    guarded.fatal("Unrecoverable state", &[Field::new("code", 1)]);

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
