//! Logger whose verbosity is fixed at compile time
//!
//! `StaticLogger<D, V>` renders exactly what a [`Logger`](super::Logger) with
//! verbosity ordinal `V` renders. The per-level methods test associated
//! constants, so closed levels compile to nothing.

use super::{
    bound::BoundFields,
    driver::Driver,
    error::Result,
    field::{Field, FieldValue},
    log_level::LogLevel,
    pipeline::{Body, FatalHook, Pipeline},
};

/// Logger specialized for the verbosity ordinal `VERBOSITY`
///
/// Use the aliases ([`InfoLogger`] etc.) rather than raw ordinals.
/// Ordinals above 4 are rejected when the type is constructed.
///
/// # Example
///
/// ```
/// use rust_field_logger::{ConsoleDriver, InfoLogger, MemorySink};
///
/// let sink = MemorySink::new();
/// let logger = InfoLogger::new(ConsoleDriver::new(&sink).with_colors(false));
///
/// logger.debug("compiled out", &[]);
/// assert!(sink.is_empty());
///
/// logger.warn("written", &[]);
/// assert!(sink.contents().ends_with("\tWARN\twritten\n"));
/// ```
pub struct StaticLogger<D: Driver, const VERBOSITY: u8> {
    pipeline: Pipeline<D>,
}

pub type FatalLogger<D> = StaticLogger<D, { LogLevel::Fatal as u8 }>;
pub type ErrorLogger<D> = StaticLogger<D, { LogLevel::Error as u8 }>;
pub type WarnLogger<D> = StaticLogger<D, { LogLevel::Warn as u8 }>;
pub type InfoLogger<D> = StaticLogger<D, { LogLevel::Info as u8 }>;
pub type DebugLogger<D> = StaticLogger<D, { LogLevel::Debug as u8 }>;

impl<D: Driver, const VERBOSITY: u8> StaticLogger<D, VERBOSITY> {
    const VALID: () = assert!(
        VERBOSITY <= LogLevel::Debug as u8,
        "verbosity ordinal must be between 0 (FATAL) and 4 (DEBUG)"
    );

    const ERROR_ENABLED: bool = LogLevel::Error.is_enabled_at(Self::VERBOSITY_LEVEL);
    const WARN_ENABLED: bool = LogLevel::Warn.is_enabled_at(Self::VERBOSITY_LEVEL);
    const INFO_ENABLED: bool = LogLevel::Info.is_enabled_at(Self::VERBOSITY_LEVEL);
    const DEBUG_ENABLED: bool = LogLevel::Debug.is_enabled_at(Self::VERBOSITY_LEVEL);

    const VERBOSITY_LEVEL: LogLevel = match LogLevel::from_ordinal(VERBOSITY) {
        Some(level) => level,
        None => LogLevel::Debug,
    };

    #[must_use]
    pub fn new(driver: D) -> Self {
        Self::from_parts(driver, BoundFields::new(), None)
    }

    /// Create a logger that runs `hook` after FATAL records instead of exiting
    #[must_use]
    pub fn with_fatal_hook(driver: D, hook: FatalHook) -> Self {
        Self::from_parts(driver, BoundFields::new(), Some(hook))
    }

    fn from_parts(driver: D, bound: BoundFields, on_fatal: Option<FatalHook>) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID;
        Self {
            pipeline: Pipeline::new(driver, bound, on_fatal),
        }
    }

    pub fn log_level(&self) -> LogLevel {
        Self::VERBOSITY_LEVEL
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.is_enabled_at(Self::VERBOSITY_LEVEL)
    }

    pub fn driver(&self) -> &D {
        self.pipeline.driver()
    }

    pub fn bound_fields(&self) -> &BoundFields {
        self.pipeline.bound()
    }

    /// Log `message` and `fields` at a level chosen at runtime
    pub fn log(&self, level: LogLevel, message: &str, fields: &[Field]) {
        if self.is_enabled(level) {
            self.pipeline.emit(level, Body::Message { message, fields });
        }
    }

    pub fn log_object(&self, level: LogLevel, object: impl Into<FieldValue>) {
        if self.is_enabled(level) {
            self.pipeline.emit(level, Body::Object(&object.into()));
        }
    }

    pub fn try_log(&self, level: LogLevel, message: &str, fields: &[Field]) -> Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }
        self.pipeline.try_emit(level, Body::Message { message, fields })
    }

    pub fn try_log_object(&self, level: LogLevel, object: impl Into<FieldValue>) -> Result<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }
        self.pipeline.try_emit(level, Body::Object(&object.into()))
    }

    /// FATAL is open at every verbosity
    #[inline]
    pub fn fatal(&self, message: &str, fields: &[Field]) {
        self.pipeline
            .emit(LogLevel::Fatal, Body::Message { message, fields });
    }

    #[inline]
    pub fn error(&self, message: &str, fields: &[Field]) {
        if Self::ERROR_ENABLED {
            self.pipeline
                .emit(LogLevel::Error, Body::Message { message, fields });
        }
    }

    #[inline]
    pub fn warn(&self, message: &str, fields: &[Field]) {
        if Self::WARN_ENABLED {
            self.pipeline
                .emit(LogLevel::Warn, Body::Message { message, fields });
        }
    }

    #[inline]
    pub fn info(&self, message: &str, fields: &[Field]) {
        if Self::INFO_ENABLED {
            self.pipeline
                .emit(LogLevel::Info, Body::Message { message, fields });
        }
    }

    #[inline]
    pub fn debug(&self, message: &str, fields: &[Field]) {
        if Self::DEBUG_ENABLED {
            self.pipeline
                .emit(LogLevel::Debug, Body::Message { message, fields });
        }
    }

    #[inline]
    pub fn fatal_object(&self, object: impl Into<FieldValue>) {
        self.pipeline.emit(LogLevel::Fatal, Body::Object(&object.into()));
    }

    #[inline]
    pub fn error_object(&self, object: impl Into<FieldValue>) {
        if Self::ERROR_ENABLED {
            self.pipeline.emit(LogLevel::Error, Body::Object(&object.into()));
        }
    }

    #[inline]
    pub fn warn_object(&self, object: impl Into<FieldValue>) {
        if Self::WARN_ENABLED {
            self.pipeline.emit(LogLevel::Warn, Body::Object(&object.into()));
        }
    }

    #[inline]
    pub fn info_object(&self, object: impl Into<FieldValue>) {
        if Self::INFO_ENABLED {
            self.pipeline.emit(LogLevel::Info, Body::Object(&object.into()));
        }
    }

    #[inline]
    pub fn debug_object(&self, object: impl Into<FieldValue>) {
        if Self::DEBUG_ENABLED {
            self.pipeline.emit(LogLevel::Debug, Body::Object(&object.into()));
        }
    }

    pub fn flush(&self) -> Result<()> {
        self.pipeline.flush()
    }
}

impl<D: Driver + Clone, const VERBOSITY: u8> StaticLogger<D, VERBOSITY> {
    /// Return a logger of the same type that also emits `fields`
    #[must_use]
    pub fn with(&self, fields: &[Field]) -> Self {
        Self {
            pipeline: self.pipeline.with(fields),
        }
    }
}

impl<D: Driver + Clone, const VERBOSITY: u8> Clone for StaticLogger<D, VERBOSITY> {
    fn clone(&self) -> Self {
        self.with(&[])
    }
}
