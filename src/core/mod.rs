//! Core logger types and traits

pub mod bound;
pub mod config;
pub mod driver;
pub mod error;
pub mod field;
pub mod log_level;
pub mod logger;
pub mod pipeline;
pub mod sink;
pub mod static_logger;
pub mod timestamp;

pub use bound::BoundFields;
pub use config::{parse_verbosity, verbosity_from, verbosity_from_env, VERBOSITY_ENV};
pub use driver::{Driver, LEVEL_KEY, MESSAGE_KEY, TIMESTAMP_KEY};
pub use error::{LoggerError, Result};
pub use field::{Field, FieldValue};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use pipeline::{FatalHook, FATAL_EXIT_CODE};
pub use sink::MemorySink;
pub use static_logger::{
    DebugLogger, ErrorLogger, FatalLogger, InfoLogger, StaticLogger, WarnLogger,
};
pub use timestamp::{system_clock, Clock, TimestampFormat};
