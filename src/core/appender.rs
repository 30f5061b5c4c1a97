//! Threshold-gated appenders for log output destinations

use super::{
    error::{LoggerError, Result},
    formatter::Formatter,
    log_event::LogEvent,
    log_level::LogLevel,
    metrics::AppenderMetrics,
};
use crate::appenders::{ConsoleSink, FileMode, FileSink};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_APPENDER_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of an appender, used for set membership on loggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AppenderId(u64);

impl AppenderId {
    fn next() -> Self {
        AppenderId(NEXT_APPENDER_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AppenderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Output destinations an appender can write to
#[derive(Debug)]
pub enum Sink {
    Console(ConsoleSink),
    File(FileSink),
}

impl Sink {
    pub fn kind(&self) -> &'static str {
        match self {
            Sink::Console(_) => "console",
            Sink::File(_) => "file",
        }
    }

    fn is_ready(&self) -> bool {
        match self {
            Sink::Console(_) => true,
            Sink::File(sink) => sink.is_open(),
        }
    }

    fn write_event(
        &mut self,
        formatter: &Formatter,
        logger_name: &str,
        level: LogLevel,
        event: &LogEvent,
    ) -> std::io::Result<()> {
        match self {
            Sink::Console(sink) => sink.write_event(formatter, logger_name, level, event),
            Sink::File(sink) => sink.write_event(formatter, logger_name, level, event),
        }
    }

    fn reopen(&mut self) -> bool {
        match self {
            Sink::Console(_) => true,
            Sink::File(sink) => sink.reopen(),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Sink::Console(sink) => sink.flush(),
            Sink::File(sink) => sink.flush(),
        }
    }
}

impl From<ConsoleSink> for Sink {
    fn from(sink: ConsoleSink) -> Self {
        Sink::Console(sink)
    }
}

impl From<FileSink> for Sink {
    fn from(sink: FileSink) -> Self {
        Sink::File(sink)
    }
}

/// A sink with its own threshold and formatter.
///
/// The sink lock is held while an event is rendered and written, so at most
/// one thread touches a given sink at a time and a rendered line is never
/// split by another thread's output. `reopen` takes the same lock.
pub struct Appender {
    id: AppenderId,
    level: RwLock<LogLevel>,
    formatter: RwLock<Formatter>,
    sink: Mutex<Sink>,
    metrics: AppenderMetrics,
}

impl Appender {
    pub fn new(sink: impl Into<Sink>, level: LogLevel, formatter: Formatter) -> Self {
        Self {
            id: AppenderId::next(),
            level: RwLock::new(level),
            formatter: RwLock::new(formatter),
            sink: Mutex::new(sink.into()),
            metrics: AppenderMetrics::new(),
        }
    }

    /// Appender writing to standard output
    pub fn console(level: LogLevel, formatter: Formatter) -> Self {
        Self::new(ConsoleSink::new(), level, formatter)
    }

    /// Appender writing to `path` in append mode
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rust_pattern_logger::{Appender, Formatter, LogLevel};
    ///
    /// let appender = Appender::file(
    ///     "/var/log/app.log",
    ///     LogLevel::Info,
    ///     Formatter::new("%d %p %m%n").unwrap(),
    /// )
    /// .unwrap();
    /// ```
    pub fn file(path: impl Into<PathBuf>, level: LogLevel, formatter: Formatter) -> Result<Self> {
        Self::file_with_mode(path, FileMode::Append, level, formatter)
    }

    pub fn file_with_mode(
        path: impl Into<PathBuf>,
        mode: FileMode,
        level: LogLevel,
        formatter: Formatter,
    ) -> Result<Self> {
        let sink = FileSink::open(path, mode)?;
        Ok(Self::new(sink, level, formatter))
    }

    pub fn id(&self) -> AppenderId {
        self.id
    }

    pub fn kind(&self) -> &'static str {
        self.sink.lock().kind()
    }

    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    pub fn formatter_pattern(&self) -> String {
        self.formatter.read().pattern().to_string()
    }

    pub fn set_formatter(&self, formatter: Formatter) {
        *self.formatter.write() = formatter;
    }

    /// Recompile this appender's formatter from `pattern`
    pub fn set_pattern(&self, pattern: &str) -> Result<()> {
        self.formatter.write().reset(pattern)
    }

    pub fn metrics(&self) -> &AppenderMetrics {
        &self.metrics
    }

    /// Render `event` and write it, unless `level` is below this appender's threshold.
    ///
    /// Never fails: a closed sink drops the event silently and a failed write
    /// is reported on stderr. Both are counted in [`Appender::metrics`].
    pub fn log(&self, logger_name: &str, level: LogLevel, event: &LogEvent) {
        if level < self.level() {
            self.metrics.record_filtered();
            return;
        }

        let mut sink = self.sink.lock();
        if !sink.is_ready() {
            self.metrics.record_dropped();
            return;
        }

        let formatter = self.formatter.read();
        match sink.write_event(&formatter, logger_name, level, event) {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(e) => {
                let dropped = self.metrics.record_dropped();
                // Report the first failure and every thousandth after it
                if dropped == 0 || (dropped + 1) % 1000 == 0 {
                    eprintln!(
                        "[LOGGER ERROR] Appender {} ({}) failed to write: {}",
                        self.id,
                        sink.kind(),
                        e
                    );
                }
            }
        }
    }

    /// Reopen the underlying file. Console appenders always report success.
    pub fn reopen(&self) -> bool {
        self.sink.lock().reopen()
    }

    pub fn flush(&self) -> Result<()> {
        let mut sink = self.sink.lock();
        sink.flush().map_err(|err| {
            LoggerError::io_operation(
                "flushing log sink",
                format!("appender {} ({})", self.id, sink.kind()),
                err,
            )
        })
    }
}

impl fmt::Debug for Appender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Appender")
            .field("id", &self.id)
            .field("level", &self.level())
            .field("pattern", &self.formatter_pattern())
            .field("sink", &*self.sink.lock())
            .finish()
    }
}
