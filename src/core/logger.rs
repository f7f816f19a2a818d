//! Main logger implementation

use super::{
    bound::BoundFields,
    config,
    driver::Driver,
    error::Result,
    field::{Field, FieldValue},
    log_level::LogLevel,
    pipeline::{Body, FatalHook, Pipeline},
};

/// Logger with a runtime verbosity ceiling
///
/// A record at `level` is written iff `level <= verbosity`. Every record is
/// written synchronously through the driver; nothing is buffered or queued.
/// The logger has no internal locking, so sharing one sink between threads
/// requires the caller to serialize emits.
///
/// # Example
///
/// ```
/// use rust_field_logger::{Field, JsonDriver, Logger, LogLevel, MemorySink};
///
/// let sink = MemorySink::new();
/// let logger = Logger::new(JsonDriver::new(&sink), LogLevel::Info)
///     .with(&[Field::new("service", "api")]);
///
/// logger.info("hello", &[Field::new("n", 12)]);
/// logger.debug("hidden", &[]);
///
/// let line = sink.contents();
/// assert!(line.ends_with("\"level\":\"INFO\",\"msg\":\"hello\",\"service\":\"api\",\"n\":12}\n"));
/// ```
pub struct Logger<D: Driver> {
    pipeline: Pipeline<D>,
    verbosity: LogLevel,
}

impl<D: Driver> Logger<D> {
    #[must_use]
    pub fn new(driver: D, verbosity: LogLevel) -> Self {
        Self {
            pipeline: Pipeline::new(driver, BoundFields::new(), None),
            verbosity,
        }
    }

    /// Create a logger whose verbosity comes from the `VERBOSITY` variable
    #[must_use]
    pub fn from_env(driver: D) -> Self {
        Self::new(driver, config::verbosity_from_env())
    }

    /// Create a builder for Logger
    pub fn builder(driver: D) -> LoggerBuilder<D> {
        LoggerBuilder::new(driver)
    }

    pub fn set_log_level(&mut self, level: LogLevel) {
        self.verbosity = level;
    }

    pub fn log_level(&self) -> LogLevel {
        self.verbosity
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.is_enabled_at(self.verbosity)
    }

    pub fn driver(&self) -> &D {
        self.pipeline.driver()
    }

    pub fn bound_fields(&self) -> &BoundFields {
        self.pipeline.bound()
    }

    /// Log `message` followed by `fields` at `level`
    ///
    /// Write failures are reported on stderr. A FATAL record terminates the
    /// process afterwards unless an `on_fatal` hook was installed.
    pub fn log(&self, level: LogLevel, message: &str, fields: &[Field]) {
        if !self.is_enabled(level) {
            return;
        }
        self.pipeline.emit(level, Body::Message { message, fields });
    }

    /// Log a single value at `level`
    pub fn log_object(&self, level: LogLevel, object: impl Into<FieldValue>) {
        if !self.is_enabled(level) {
            return;
        }
        self.pipeline.emit(level, Body::Object(&object.into()));
    }

    /// Log like [`Logger::log`] but return write failures to the caller
    ///
    /// FATAL still runs the termination policy after the write; the result
    /// is returned only when a FATAL hook replaces the exit.
    pub fn try_log(&self, level: LogLevel, message: &str, fields: &[Field]) -> Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }
        self.pipeline.try_emit(level, Body::Message { message, fields })
    }

    /// Log like [`Logger::log_object`] but return write failures to the caller
    pub fn try_log_object(&self, level: LogLevel, object: impl Into<FieldValue>) -> Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }
        self.pipeline.try_emit(level, Body::Object(&object.into()))
    }

    /// Log at FATAL and terminate
    #[inline]
    pub fn fatal(&self, message: &str, fields: &[Field]) {
        self.log(LogLevel::Fatal, message, fields);
    }

    #[inline]
    pub fn error(&self, message: &str, fields: &[Field]) {
        self.log(LogLevel::Error, message, fields);
    }

    #[inline]
    pub fn warn(&self, message: &str, fields: &[Field]) {
        self.log(LogLevel::Warn, message, fields);
    }

    #[inline]
    pub fn info(&self, message: &str, fields: &[Field]) {
        self.log(LogLevel::Info, message, fields);
    }

    #[inline]
    pub fn debug(&self, message: &str, fields: &[Field]) {
        self.log(LogLevel::Debug, message, fields);
    }

    /// Log a value at FATAL and terminate
    #[inline]
    pub fn fatal_object(&self, object: impl Into<FieldValue>) {
        self.log_object(LogLevel::Fatal, object);
    }

    #[inline]
    pub fn error_object(&self, object: impl Into<FieldValue>) {
        self.log_object(LogLevel::Error, object);
    }

    #[inline]
    pub fn warn_object(&self, object: impl Into<FieldValue>) {
        self.log_object(LogLevel::Warn, object);
    }

    #[inline]
    pub fn info_object(&self, object: impl Into<FieldValue>) {
        self.log_object(LogLevel::Info, object);
    }

    #[inline]
    pub fn debug_object(&self, object: impl Into<FieldValue>) {
        self.log_object(LogLevel::Debug, object);
    }

    pub fn flush(&self) -> Result<()> {
        self.pipeline.flush()
    }
}

impl<D: Driver + Clone> Logger<D> {
    /// Return a logger that also emits `fields` on every record
    ///
    /// The new logger shares the driver configuration, verbosity and FATAL
    /// policy. `self` is left unchanged.
    #[must_use]
    pub fn with(&self, fields: &[Field]) -> Self {
        Self {
            pipeline: self.pipeline.with(fields),
            verbosity: self.verbosity,
        }
    }
}

impl<D: Driver + Clone> Clone for Logger<D> {
    fn clone(&self) -> Self {
        self.with(&[])
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_field_logger::prelude::*;
/// use std::sync::Arc;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder(ConsoleDriver::new(&sink))
///     .verbosity(LogLevel::Debug)
///     .fields(&[Field::new("service", "billing")])
///     .on_fatal(Arc::new(|| eprintln!("fatal record written")))
///     .build();
///
/// assert_eq!(logger.log_level(), LogLevel::Debug);
/// assert_eq!(logger.bound_fields().len(), 1);
/// ```
pub struct LoggerBuilder<D: Driver> {
    driver: D,
    verbosity: LogLevel,
    bound: BoundFields,
    on_fatal: Option<FatalHook>,
}

impl<D: Driver> LoggerBuilder<D> {
    /// Create a new builder with default values
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            verbosity: LogLevel::default(),
            bound: BoundFields::new(),
            on_fatal: None,
        }
    }

    /// Set the verbosity ceiling
    #[must_use = "builder methods return a new value"]
    pub fn verbosity(mut self, level: LogLevel) -> Self {
        self.verbosity = level;
        self
    }

    /// Read the verbosity ceiling from the `VERBOSITY` variable
    #[must_use = "builder methods return a new value"]
    pub fn verbosity_from_env(mut self) -> Self {
        self.verbosity = config::verbosity_from_env();
        self
    }

    /// Bind fields emitted on every record
    ///
    /// May be called repeatedly; groups keep their call order.
    #[must_use = "builder methods return a new value"]
    pub fn fields(mut self, fields: &[Field]) -> Self {
        self.bound = self.bound.with(fields);
        self
    }

    /// Run `hook` after FATAL records instead of exiting the process
    #[must_use = "builder methods return a new value"]
    pub fn on_fatal(mut self, hook: FatalHook) -> Self {
        self.on_fatal = Some(hook);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger<D> {
        Logger {
            pipeline: Pipeline::new(self.driver, self.bound, self.on_fatal),
            verbosity: self.verbosity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sink::MemorySink;
    use crate::drivers::ConsoleDriver;
    use chrono::{DateTime, TimeZone, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn plain(sink: &MemorySink) -> ConsoleDriver<'_, MemorySink> {
        ConsoleDriver::new(sink).with_colors(false).with_clock(fixed_clock)
    }

    fn counting_hook() -> (FatalHook, Arc<AtomicUsize>) {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let hook: FatalHook = Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (hook, fired)
    }

    #[test]
    fn test_set_and_get_level() {
        let sink = MemorySink::new();
        let mut logger = Logger::new(plain(&sink), LogLevel::Info);
        for level in LogLevel::ALL {
            logger.set_log_level(level);
            assert_eq!(logger.log_level(), level);
        }
    }

    #[test]
    fn test_gate_suppresses_verbose_levels() {
        let sink = MemorySink::new();
        let logger = Logger::new(plain(&sink), LogLevel::Warn);

        logger.info("hidden", &[]);
        logger.debug_object(1);
        assert!(sink.is_empty());

        logger.warn("shown", &[]);
        assert_eq!(sink.contents(), "2024-03-01T12:00:00Z\tWARN\tshown\n");
    }

    #[test]
    fn test_message_and_fields() {
        let sink = MemorySink::new();
        let logger = Logger::new(plain(&sink), LogLevel::Info);

        logger.info("hello", &[Field::new("n", 12), Field::new("s", "text")]);
        assert_eq!(sink.contents(), "2024-03-01T12:00:00Z\tINFO\thello\tn: 12, s: text\n");
    }

    #[test]
    fn test_with_does_not_mutate_parent() {
        let sink = MemorySink::new();
        let parent = Logger::new(plain(&sink), LogLevel::Info);
        let child = parent.with(&[Field::new("req", 7)]);

        parent.info_object("p");
        child.info_object("c");

        assert_eq!(
            sink.lines(),
            vec![
                "2024-03-01T12:00:00Z\tINFO\tp",
                "2024-03-01T12:00:00Z\tINFO\treq: 7, c",
            ]
        );
        assert!(parent.bound_fields().is_empty());
    }

    #[test]
    fn test_with_keeps_verbosity() {
        let sink = MemorySink::new();
        let parent = Logger::new(plain(&sink), LogLevel::Error);
        let child = parent.with(&[Field::new("a", 1)]);
        assert_eq!(child.log_level(), LogLevel::Error);
    }

    #[test]
    fn test_fatal_runs_hook_once() {
        let sink = MemorySink::new();
        let (hook, fired) = counting_hook();
        let logger = Logger::builder(plain(&sink))
            .verbosity(LogLevel::Fatal)
            .on_fatal(hook)
            .build();

        logger.error("suppressed", &[]);
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        logger.fatal("boom", &[Field::new("code", 3)]);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(sink.contents(), "2024-03-01T12:00:00Z\tFATAL\tboom\tcode: 3\n");
    }

    #[test]
    fn test_fatal_hook_survives_with() {
        let sink = MemorySink::new();
        let (hook, fired) = counting_hook();
        let logger = Logger::builder(plain(&sink)).on_fatal(hook).build();

        logger.with(&[Field::new("a", 1)]).fatal_object("x");
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_try_log_respects_gate() {
        let sink = MemorySink::new();
        let logger = Logger::new(plain(&sink), LogLevel::Info);

        assert!(logger.try_log(LogLevel::Debug, "hidden", &[]).is_ok());
        assert!(sink.is_empty());
        assert!(logger.try_log_object(LogLevel::Info, 5).is_ok());
        assert_eq!(sink.contents(), "2024-03-01T12:00:00Z\tINFO\t5\n");
    }

    #[test]
    fn test_builder_fields_precede_with_fields() {
        let sink = MemorySink::new();
        let logger = Logger::builder(plain(&sink))
            .fields(&[Field::new("a", 1)])
            .fields(&[Field::new("b", 2)])
            .build()
            .with(&[Field::new("c", 3)]);

        logger.info("m", &[Field::new("d", 4)]);
        assert_eq!(
            sink.contents(),
            "2024-03-01T12:00:00Z\tINFO\tm\ta: 1, b: 2, c: 3, d: 4\n"
        );
    }
}
