//! JSON driver for structured logging
//!
//! Writes each record as a single-line JSON object (JSONL), compatible with
//! log aggregation tools like ELK and Loki:
//!
//! ```text
//! {"ts":"2025-01-08T10:30:45Z","level":"INFO","msg":"hello","n":12}
//! ```
//!
//! Keys, the message and string values are quoted verbatim by default, so a
//! value containing `"` or control characters breaks the line. Enable
//! [`JsonDriver::with_escaping`] when values are not trusted.

use crate::core::{
    sink, system_clock, Clock, Driver, FieldValue, LogLevel, Logger, Result, TimestampFormat,
    LEVEL_KEY, MESSAGE_KEY, TIMESTAMP_KEY,
};
use std::io::{Stdout, Write};

pub struct JsonDriver<'a, W: ?Sized> {
    out: &'a W,
    escape: bool,
    timestamp_format: TimestampFormat,
    clock: Clock,
}

impl<'a, W: ?Sized> JsonDriver<'a, W>
where
    &'a W: Write,
{
    pub fn new(out: &'a W) -> Self {
        Self {
            out,
            escape: false,
            timestamp_format: TimestampFormat::default(),
            clock: system_clock,
        }
    }

    /// Escape quotes and control characters in keys and strings
    ///
    /// # Example
    ///
    /// ```
    /// use rust_field_logger::{Field, JsonDriver, Logger, LogLevel, MemorySink};
    ///
    /// let sink = MemorySink::new();
    /// let logger = Logger::new(JsonDriver::new(&sink).with_escaping(true), LogLevel::Info);
    /// logger.info("quote \" inside", &[]);
    ///
    /// let parsed: serde_json::Value = serde_json::from_str(sink.contents().trim_end()).unwrap();
    /// assert_eq!(parsed["msg"], "quote \" inside");
    /// ```
    #[must_use]
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// Set the timestamp format; numeric formats are written unquoted
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Read the time from `clock` instead of the system clock
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    fn write_quoted(&self, s: &str) -> Result<()> {
        let mut out = self.out;
        if self.escape {
            serde_json::to_writer(&mut out, s)?;
        } else {
            write!(out, "\"{}\"", s)?;
        }
        Ok(())
    }

    fn write_key(&self, key: &str) -> Result<()> {
        self.write_quoted(key)?;
        let mut out = self.out;
        out.write_all(b":")?;
        Ok(())
    }

    fn write_value(&self, value: &FieldValue) -> Result<()> {
        let mut out = self.out;
        match value {
            FieldValue::Int(i) => write!(out, "{}", i)?,
            FieldValue::UInt(u) => write!(out, "{}", u)?,
            // Non-finite floats are encoded as null
            FieldValue::Float(f) => serde_json::to_writer(&mut out, f)?,
            FieldValue::Str(s) => self.write_quoted(s)?,
            FieldValue::Bool(b) => write!(out, "{}", b)?,
        }
        Ok(())
    }
}

impl JsonDriver<'static, Stdout> {
    /// JSON driver writing to standard output
    pub fn stdout() -> Self {
        Self::new(sink::stdout())
    }
}

impl Logger<JsonDriver<'static, Stdout>> {
    /// JSON logger on standard output, verbosity read from `VERBOSITY`
    pub fn json() -> Self {
        Logger::from_env(JsonDriver::stdout())
    }
}

impl<'a, W: ?Sized> Clone for JsonDriver<'a, W> {
    fn clone(&self) -> Self {
        Self {
            out: self.out,
            escape: self.escape,
            timestamp_format: self.timestamp_format.clone(),
            clock: self.clock,
        }
    }
}

impl<'a, W: ?Sized> Driver for JsonDriver<'a, W>
where
    &'a W: Write,
{
    fn begin_message(&self) -> Result<()> {
        let mut out = self.out;
        out.write_all(b"{")?;
        Ok(())
    }

    fn end_message(&self) -> Result<()> {
        let mut out = self.out;
        out.write_all(b"}")?;
        Ok(())
    }

    fn print_timestamp(&self) -> Result<()> {
        let rendered = self.timestamp_format.format(&(self.clock)())?;
        self.write_key(TIMESTAMP_KEY)?;
        if self.timestamp_format.is_numeric() {
            let mut out = self.out;
            out.write_all(rendered.as_bytes())?;
            Ok(())
        } else {
            self.write_quoted(&rendered)
        }
    }

    fn print_level(&self, level: LogLevel) -> Result<()> {
        self.write_key(LEVEL_KEY)?;
        self.write_quoted(level.to_str())
    }

    fn print_message(&self, message: &str) -> Result<()> {
        self.write_key(MESSAGE_KEY)?;
        self.write_quoted(message)
    }

    fn print_field(&self, header: &str, value: &FieldValue) -> Result<()> {
        self.write_key(header)?;
        self.write_value(value)
    }

    fn print_object(&self, value: &FieldValue) -> Result<()> {
        self.write_key(MESSAGE_KEY)?;
        self.write_value(value)
    }

    fn separator(&self) -> Result<()> {
        let mut out = self.out;
        out.write_all(b",")?;
        Ok(())
    }

    fn field_separator(&self) -> Result<()> {
        let mut out = self.out;
        out.write_all(b",")?;
        Ok(())
    }

    fn newline(&self) -> Result<()> {
        let mut out = self.out;
        out.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let mut out = self.out;
        out.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json"
    }
}
