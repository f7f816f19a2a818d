//! Driver trait: the formatting primitives a logger renders records through

use super::error::Result;
use super::field::FieldValue;
use super::log_level::LogLevel;

/// Key of the timestamp in structured formats
pub const TIMESTAMP_KEY: &str = "ts";
/// Key of the level in structured formats
pub const LEVEL_KEY: &str = "level";
/// Key of the message (or bare object) in structured formats
pub const MESSAGE_KEY: &str = "msg";

/// Wire format of a log record
///
/// A logger drives one record as `begin_message`, timestamp, level, optional
/// message, fields or a bare object, `end_message` and `newline`, with
/// `separator` between columns and `field_separator` between fields.
///
/// Every call writes straight to the sink. Implementations must not buffer
/// across calls.
pub trait Driver {
    fn begin_message(&self) -> Result<()>;
    fn end_message(&self) -> Result<()>;

    /// Write the current time read from the driver's clock
    fn print_timestamp(&self) -> Result<()>;
    fn print_level(&self, level: LogLevel) -> Result<()>;
    fn print_message(&self, message: &str) -> Result<()>;
    fn print_field(&self, header: &str, value: &FieldValue) -> Result<()>;

    /// Write a bare value logged without a message
    fn print_object(&self, value: &FieldValue) -> Result<()>;

    /// Token between the timestamp, level, message and field columns
    fn separator(&self) -> Result<()>;

    /// Token between two consecutive fields
    fn field_separator(&self) -> Result<()>;

    /// Line terminator written after `end_message`
    fn newline(&self) -> Result<()>;

    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}
