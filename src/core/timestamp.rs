//! Timestamp formatting utilities
//!
//! Drivers stamp every record with the time read from a [`Clock`] at the
//! moment `print_timestamp` is called. The default rendering is RFC 3339 in UTC
//! at second resolution, e.g. `2025-01-08T10:30:45Z`.

use super::error::{LoggerError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Source of the current time for a driver
///
/// Drivers default to [`system_clock`]; tests pin the time with a fixed
/// function instead.
pub type Clock = fn() -> DateTime<Utc>;

/// Read the system clock
pub fn system_clock() -> DateTime<Utc> {
    Utc::now()
}

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use rust_field_logger::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// let rendered = TimestampFormat::default().format(&at).unwrap();
/// assert_eq!(rendered, "2025-01-08T10:30:45Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 UTC at second resolution: `2025-01-08T10:30:45Z`
    #[default]
    Rfc3339Seconds,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601Millis,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// Patterns chrono cannot interpret produce a formatter error when a
    /// record is written.
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    pub fn format(&self, datetime: &DateTime<Utc>) -> Result<String> {
        let rendered = match self {
            TimestampFormat::Rfc3339Seconds => datetime.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            TimestampFormat::Iso8601Millis => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(pattern) => {
                let mut out = String::new();
                write!(out, "{}", datetime.format(pattern)).map_err(|_| {
                    LoggerError::formatter(
                        "timestamp",
                        format!("invalid strftime pattern '{}'", pattern),
                    )
                })?;
                out
            }
        };
        Ok(rendered)
    }

    /// Check if this is a Unix-based numeric format
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::Unix | TimestampFormat::UnixMillis)
    }
}
