//! JSON logging example
//!
//! Demonstrates one-object-per-line output to stdout and to a file.
//!
//! Run with: cargo run --example json_logging

use rust_field_logger::prelude::*;
use std::fs::File;

fn main() -> Result<()> {
    println!("=== Rust Field Logger - JSON Logging Example ===\n");

    println!("1. JSON records on stdout:");
    let logger = Logger::json().with(&[Field::new("service", "ingest")]);
    logger.info("Batch accepted", &[Field::new("records", 128u32), Field::new("ok", true)]);
    logger.warn_object(0.25);

    println!("\n2. Escaping strings that need it:");
    let escaped = Logger::new(JsonDriver::stdout().with_escaping(true), LogLevel::Info);
    escaped.info("Quoted \"name\"\tand a tab", &[Field::new("path", "C:\\data")]);

    println!("\n3. Millisecond timestamps and numeric timestamps:");
    let millis = Logger::new(
        JsonDriver::stdout().with_timestamp_format(TimestampFormat::Iso8601Millis),
        LogLevel::Info,
    );
    millis.info("Precise", &[]);
    let unix = Logger::new(
        JsonDriver::stdout().with_timestamp_format(TimestampFormat::UnixMillis),
        LogLevel::Info,
    );
    unix.info("Numeric", &[]);

    println!("\n4. Writing to a file:");
    let path = std::env::temp_dir().join("rust_field_logger_demo.jsonl");
    let file = File::create(&path)?;
    let file_logger = Logger::new(JsonDriver::new(&file), LogLevel::Debug);
    for i in 0..3 {
        file_logger.debug("Iteration", &[Field::new("i", i)]);
    }
    file_logger.flush()?;
    println!("   Wrote 3 records to {}", path.display());
    print!("{}", std::fs::read_to_string(&path)?);

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
