//! Record pipeline shared by [`Logger`](super::Logger) and
//! [`StaticLogger`](super::StaticLogger)
//!
//! Both loggers hold a [`Pipeline`] and differ only in how they decide
//! whether a level is open, so their output is identical by construction.

use super::bound::BoundFields;
use super::driver::Driver;
use super::error::{LoggerError, Result};
use super::field::{Field, FieldValue};
use super::log_level::LogLevel;
use std::sync::Arc;

/// Exit status used when a FATAL record terminates the process
pub const FATAL_EXIT_CODE: i32 = 1;

/// Callback run after a FATAL record instead of exiting the process
pub type FatalHook = Arc<dyn Fn() + Send + Sync>;

/// Payload of a single record
#[derive(Debug, Clone, Copy)]
pub(crate) enum Body<'a> {
    Message { message: &'a str, fields: &'a [Field] },
    Object(&'a FieldValue),
}

/// Drive `driver` through one complete record
///
/// Message form: `ts SEP level SEP msg [SEP f1 FSEP f2 ...]`, where bound
/// fields precede call-site fields and no separator trails the last column.
/// Object form: `ts SEP level SEP [b1 FSEP b2 FSEP ...] object`.
/// Every JSON record must parse, so that takes precedence over emitting a
/// separator after the message or after the last bound field.
pub(crate) fn write_record<D: Driver + ?Sized>(
    driver: &D,
    level: LogLevel,
    bound: &BoundFields,
    body: Body<'_>,
) -> Result<()> {
    driver.begin_message()?;
    driver.print_timestamp()?;
    driver.separator()?;
    driver.print_level(level)?;
    driver.separator()?;

    match body {
        Body::Message { message, fields } => {
            driver.print_message(message)?;

            let mut all = bound.iter().chain(fields.iter()).peekable();
            if all.peek().is_some() {
                driver.separator()?;
            }
            for (idx, field) in all.enumerate() {
                if idx > 0 {
                    driver.field_separator()?;
                }
                driver.print_field(field.header(), field.value())?;
            }
        }
        Body::Object(value) => {
            for field in bound.iter() {
                driver.print_field(field.header(), field.value())?;
                driver.field_separator()?;
            }
            driver.print_object(value)?;
        }
    }

    driver.end_message()?;
    driver.newline()
}

/// Driver, bound fields and FATAL policy of a logger
pub(crate) struct Pipeline<D> {
    driver: D,
    bound: BoundFields,
    on_fatal: Option<FatalHook>,
}

impl<D: Driver> Pipeline<D> {
    pub(crate) fn new(driver: D, bound: BoundFields, on_fatal: Option<FatalHook>) -> Self {
        Self {
            driver,
            bound,
            on_fatal,
        }
    }

    pub(crate) fn driver(&self) -> &D {
        &self.driver
    }

    pub(crate) fn bound(&self) -> &BoundFields {
        &self.bound
    }

    /// Write a record and return the write result, then run the FATAL
    /// policy if `level` is FATAL
    ///
    /// The result only reaches the caller at FATAL when a hook is installed.
    pub(crate) fn try_emit(&self, level: LogLevel, body: Body<'_>) -> Result<()> {
        let written = write_record(&self.driver, level, &self.bound, body);
        if level == LogLevel::Fatal {
            self.terminate();
        }
        written
    }

    /// Write a record, reporting failures on stderr, then run the FATAL
    /// policy if `level` is FATAL
    pub(crate) fn emit(&self, level: LogLevel, body: Body<'_>) {
        if let Err(e) = write_record(&self.driver, level, &self.bound, body) {
            self.report(&e);
        }
        if level == LogLevel::Fatal {
            self.terminate();
        }
    }

    pub(crate) fn terminate(&self) {
        match &self.on_fatal {
            Some(hook) => hook(),
            None => {
                // Stdout may be a pipe; make sure the fatal record is out before exiting
                let _ = self.driver.flush();
                std::process::exit(FATAL_EXIT_CODE);
            }
        }
    }

    pub(crate) fn flush(&self) -> Result<()> {
        self.driver.flush()
    }

    fn report(&self, err: &LoggerError) {
        eprintln!("[LOGGER ERROR] Driver '{}' failed: {}", self.driver.name(), err);
    }
}

impl<D: Driver + Clone> Pipeline<D> {
    /// Derive a pipeline whose bound fields are extended by `fields`
    pub(crate) fn with(&self, fields: &[Field]) -> Self {
        Self {
            driver: self.driver.clone(),
            bound: self.bound.with(fields),
            on_fatal: self.on_fatal.clone(),
        }
    }
}
