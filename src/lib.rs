//! # Rust Field Logger
//!
//! A structured logging library: leveled records carrying a message (or a
//! single value) plus an ordered list of typed key/value fields, rendered
//! through a pluggable driver.
//!
//! ## Features
//!
//! - **Typed Fields**: integers, floats, strings and booleans; anything else is a compile error
//! - **Bound Fields**: `with` derives a logger that repeats fields on every record
//! - **Drivers**: colored console output or one JSON object per line
//! - **Static Gating**: `StaticLogger` fixes the verbosity at compile time
//!
//! ```
//! use rust_field_logger::prelude::*;
//! use rust_field_logger::info;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new(JsonDriver::new(&sink), LogLevel::Info);
//!
//! info!(logger, "hello", "n" => 12);
//! assert!(sink.contents().ends_with("\"level\":\"INFO\",\"msg\":\"hello\",\"n\":12}\n"));
//! ```

pub mod core;
pub mod drivers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        BoundFields, DebugLogger, Driver, ErrorLogger, FatalHook, FatalLogger, Field, FieldValue,
        InfoLogger, LogLevel, Logger, LoggerBuilder, LoggerError, MemorySink, Result,
        StaticLogger, TimestampFormat, WarnLogger,
    };
    pub use crate::drivers::{ConsoleDriver, JsonDriver};
}

pub use crate::core::{
    BoundFields, Clock, DebugLogger, Driver, ErrorLogger, FatalHook, FatalLogger, Field,
    FieldValue, InfoLogger, LogLevel, Logger, LoggerBuilder, LoggerError, MemorySink, Result,
    StaticLogger, TimestampFormat, WarnLogger, FATAL_EXIT_CODE, VERBOSITY_ENV,
};
pub use drivers::{ConsoleDriver, JsonDriver};
