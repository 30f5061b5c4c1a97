//! Named logger fanning events out to its appenders

use super::{
    appender::{Appender, AppenderId},
    error::Result,
    log_event::LogEvent,
    log_level::LogLevel,
};
use parking_lot::RwLock;
use std::sync::Arc;

/// A named, threshold-gated fan-out point.
///
/// Appenders are held by shared reference and keyed by [`AppenderId`], so the
/// same appender can be attached to several loggers and adding it twice to
/// one logger is a no-op. Dispatch order is insertion order.
pub struct Logger {
    name: Arc<str>,
    min_level: RwLock<LogLevel>,
    appenders: RwLock<Vec<Arc<Appender>>>,
}

impl Logger {
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self::with_level(name, LogLevel::Debug)
    }

    #[must_use]
    pub fn with_level(name: impl Into<Arc<str>>, level: LogLevel) -> Self {
        Self {
            name: name.into(),
            min_level: RwLock::new(level),
            appenders: RwLock::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        *self.min_level.read()
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    /// Attach `appender`; attaching one that is already present changes nothing
    pub fn add_appender(&self, appender: Arc<Appender>) {
        let mut appenders = self.appenders.write();
        if !appenders.iter().any(|a| a.id() == appender.id()) {
            appenders.push(appender);
        }
    }

    /// Detach `appender`; detaching one that is not attached changes nothing
    pub fn del_appender(&self, appender: &Appender) {
        self.remove_appender(appender.id());
    }

    pub fn remove_appender(&self, id: AppenderId) {
        self.appenders.write().retain(|a| a.id() != id);
    }

    pub fn clear_appenders(&self) {
        self.appenders.write().clear();
    }

    /// Replace the whole appender set
    pub fn set_appenders(&self, appenders: Vec<Arc<Appender>>) {
        let mut unique: Vec<Arc<Appender>> = Vec::with_capacity(appenders.len());
        for appender in appenders {
            if !unique.iter().any(|a| a.id() == appender.id()) {
                unique.push(appender);
            }
        }
        *self.appenders.write() = unique;
    }

    /// Snapshot of the attached appenders in dispatch order
    pub fn appenders(&self) -> Vec<Arc<Appender>> {
        self.appenders.read().clone()
    }

    pub fn appender_count(&self) -> usize {
        self.appenders.read().len()
    }

    /// Would an event at `level` pass this logger's threshold
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    /// Dispatch `event` to every appender when `level` passes the threshold.
    ///
    /// Each appender applies its own threshold as well. The appender set is
    /// snapshotted first so slow sinks do not hold up `add_appender`.
    pub fn log(&self, level: LogLevel, event: &LogEvent) {
        if !self.enabled(level) {
            return;
        }

        let appenders = self.appenders();
        for appender in &appenders {
            appender.log(&self.name, level, event);
        }
    }

    #[inline]
    pub fn debug(&self, event: &LogEvent) {
        self.log(LogLevel::Debug, event);
    }

    #[inline]
    pub fn info(&self, event: &LogEvent) {
        self.log(LogLevel::Info, event);
    }

    #[inline]
    pub fn warn(&self, event: &LogEvent) {
        self.log(LogLevel::Warn, event);
    }

    #[inline]
    pub fn error(&self, event: &LogEvent) {
        self.log(LogLevel::Error, event);
    }

    #[inline]
    pub fn fatal(&self, event: &LogEvent) {
        self.log(LogLevel::Fatal, event);
    }

    pub fn flush(&self) -> Result<()> {
        for appender in self.appenders().iter() {
            appender.flush()?;
        }
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new("root")
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("appenders", &self.appender_count())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_pattern_logger::prelude::*;
/// use std::sync::Arc;
///
/// let console = Arc::new(Appender::console(LogLevel::Warn, Formatter::default()));
/// let logger = Logger::builder("system")
///     .min_level(LogLevel::Info)
///     .appender(console)
///     .build();
/// assert_eq!(logger.appender_count(), 1);
/// ```
pub struct LoggerBuilder {
    name: Arc<str>,
    min_level: LogLevel,
    appenders: Vec<Arc<Appender>>,
}

impl LoggerBuilder {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            min_level: LogLevel::Debug,
            appenders: Vec::new(),
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Add an appender
    #[must_use = "builder methods return a new value"]
    pub fn appender(mut self, appender: Arc<Appender>) -> Self {
        self.appenders.push(appender);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let logger = Logger::with_level(self.name, self.min_level);
        logger.set_appenders(self.appenders);
        logger
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder(name: impl Into<Arc<str>>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }
}
