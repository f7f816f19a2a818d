//! Logging macros for ergonomic field lists.
//!
//! Fields are written as `"key" => value` pairs after the message and are
//! converted with [`Field::new`](crate::Field::new), so any type with a
//! `FieldValue` conversion is accepted.
//!
//! # Examples
//!
//! ```
//! use rust_field_logger::prelude::*;
//! use rust_field_logger::{info, warn};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new(ConsoleDriver::new(&sink).with_colors(false), LogLevel::Info);
//!
//! // Message only
//! info!(logger, "Server started");
//!
//! // Message with fields
//! let port = 8080;
//! info!(logger, "Listening", "port" => port, "tls" => false);
//! warn!(logger, "Slow request", "path" => "/health", "ms" => 812.5);
//!
//! assert_eq!(sink.lines().len(), 3);
//! ```

/// Log a message with `"key" => value` fields at the given level.
///
/// # Examples
///
/// ```
/// # use rust_field_logger::prelude::*;
/// # let sink = MemorySink::new();
/// # let logger = Logger::new(JsonDriver::new(&sink), LogLevel::Info);
/// use rust_field_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Request failed", "status" => 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {
        $logger.log($level, $message, &[$($crate::Field::new($key, $value)),*])
    };
}

/// Log a fatal-level message, then terminate (or run the logger's FATAL hook).
///
/// # Examples
///
/// ```
/// # use rust_field_logger::prelude::*;
/// # use std::sync::Arc;
/// # let sink = MemorySink::new();
/// # let logger = Logger::builder(JsonDriver::new(&sink)).on_fatal(Arc::new(|| {})).build();
/// use rust_field_logger::fatal;
/// fatal!(logger, "Unable to recover", "reason" => "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Build an array of fields from `"key" => value` pairs.
///
/// # Examples
///
/// ```
/// use rust_field_logger::fields;
///
/// let fields = fields!["user" => "ada", "attempt" => 3];
/// assert_eq!(fields.len(), 2);
/// assert_eq!(fields[1].header(), "attempt");
/// ```
#[macro_export]
macro_rules! fields {
    ($($key:expr => $value:expr),* $(,)?) => {
        [$($crate::Field::new($key, $value)),*]
    };
}

/// Field named `trace` holding the call site as `file:line`.
#[macro_export]
macro_rules! trace_field {
    () => {
        $crate::Field::new("trace", concat!(file!(), ":", line!()))
    };
}

/// Field named `caller` holding the calling module path.
#[macro_export]
macro_rules! caller_field {
    () => {
        $crate::Field::new("caller", module_path!())
    };
}
