//! Output sinks
//!
//! Drivers borrow their sink as `&'a W` and write through `&'a W: Write`,
//! which std implements for `Stdout`, `Stderr`, `File`, `TcpStream` and
//! `io::Sink`. The sink therefore has to outlive every driver (and every
//! logger) writing to it.

use std::cell::RefCell;
use std::io::{self, Stdout, Write};
use std::sync::OnceLock;

/// Process-wide handle to standard output, usable as a `'static` sink
pub fn stdout() -> &'static Stdout {
    static STDOUT: OnceLock<Stdout> = OnceLock::new();
    STDOUT.get_or_init(io::stdout)
}

/// In-memory sink collecting everything written to it
///
/// Not `Sync`: like any shared sink, concurrent use has to be serialized by
/// the caller.
///
/// # Example
///
/// ```
/// use rust_field_logger::{ConsoleDriver, Logger, LogLevel, MemorySink};
///
/// let sink = MemorySink::new();
/// let logger = Logger::new(ConsoleDriver::new(&sink).with_colors(false), LogLevel::Info);
/// logger.info("ready", &[]);
///
/// assert!(sink.contents().ends_with("\tINFO\tready\n"));
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    buffer: RefCell<Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.borrow()).into_owned()
    }

    /// Written output split into lines, without terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.borrow_mut().clear();
    }

    /// Drain the raw bytes, leaving the sink empty
    pub fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.buffer.borrow_mut())
    }
}

impl Write for &MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
