//! Console driver: human-readable, tab-separated records

use crate::core::{
    sink, system_clock, Clock, Driver, FieldValue, LogLevel, Logger, Result, TimestampFormat,
};
use std::io::{Stdout, Write};

/// Writes records as `<ts>\t<LEVEL>\t<message>\t<k: v, k: v>`
///
/// Levels are wrapped in ANSI color codes unless colors are disabled.
/// Strings are written raw, never quoted.
pub struct ConsoleDriver<'a, W: ?Sized> {
    out: &'a W,
    use_colors: bool,
    timestamp_format: TimestampFormat,
    clock: Clock,
}

impl<'a, W: ?Sized> ConsoleDriver<'a, W>
where
    &'a W: Write,
{
    pub fn new(out: &'a W) -> Self {
        Self {
            out,
            use_colors: true,
            timestamp_format: TimestampFormat::default(),
            clock: system_clock,
        }
    }

    /// Enable or disable ANSI colors on the level column
    ///
    /// # Example
    ///
    /// ```
    /// use rust_field_logger::{ConsoleDriver, MemorySink};
    ///
    /// let sink = MemorySink::new();
    /// let driver = ConsoleDriver::new(&sink).with_colors(false);
    /// ```
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

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

    fn write_str(&self, s: &str) -> Result<()> {
        let mut out = self.out;
        out.write_all(s.as_bytes())?;
        Ok(())
    }
}

impl ConsoleDriver<'static, Stdout> {
    /// Console driver writing to standard output
    pub fn stdout() -> Self {
        Self::new(sink::stdout())
    }
}

impl Logger<ConsoleDriver<'static, Stdout>> {
    /// Console logger on standard output, verbosity read from `VERBOSITY`
    pub fn console() -> Self {
        Logger::from_env(ConsoleDriver::stdout())
    }
}

impl<'a, W: ?Sized> Clone for ConsoleDriver<'a, W> {
    fn clone(&self) -> Self {
        Self {
            out: self.out,
            use_colors: self.use_colors,
            timestamp_format: self.timestamp_format.clone(),
            clock: self.clock,
        }
    }
}

impl<'a, W: ?Sized> Driver for ConsoleDriver<'a, W>
where
    &'a W: Write,
{
    fn begin_message(&self) -> Result<()> {
        Ok(())
    }

    fn end_message(&self) -> Result<()> {
        Ok(())
    }

    fn print_timestamp(&self) -> Result<()> {
        let now = (self.clock)();
        self.write_str(&self.timestamp_format.format(&now)?)
    }

    fn print_level(&self, level: LogLevel) -> Result<()> {
        let mut out = self.out;
        if self.use_colors {
            write!(out, "\x1b[{}m{}\x1b[0m", level.color().to_fg_str(), level.to_str())?;
        } else {
            out.write_all(level.to_str().as_bytes())?;
        }
        Ok(())
    }

    fn print_message(&self, message: &str) -> Result<()> {
        self.write_str(message)
    }

    fn print_field(&self, header: &str, value: &FieldValue) -> Result<()> {
        let mut out = self.out;
        write!(out, "{}: {}", header, value)?;
        Ok(())
    }

    fn print_object(&self, value: &FieldValue) -> Result<()> {
        let mut out = self.out;
        write!(out, "{}", value)?;
        Ok(())
    }

    fn separator(&self) -> Result<()> {
        self.write_str("\t")
    }

    fn field_separator(&self) -> Result<()> {
        self.write_str(", ")
    }

    fn newline(&self) -> Result<()> {
        self.write_str("\n")
    }

    fn flush(&self) -> Result<()> {
        let mut out = self.out;
        out.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
