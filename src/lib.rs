//! # Rust Pattern Logger
//!
//! A synchronous logging core: log events are rendered through printf-style
//! format patterns and routed to console and file appenders.
//!
//! ## Features
//!
//! - **Format Patterns**: `%d{%H:%M:%S} [%p] %c %f:%l %m%n` style layouts
//! - **Two-Level Filtering**: per-logger and per-appender thresholds
//! - **Thread Safe**: appender sets and sinks are guarded; lines never interleave
//! - **Configurable**: loggers and appenders described as JSON
//!
//! ```
//! use rust_pattern_logger::prelude::*;
//! use std::sync::Arc;
//!
//! let logger = Logger::with_level("root", LogLevel::Info);
//! logger.add_appender(Arc::new(Appender::console(
//!     LogLevel::Warn,
//!     Formatter::new("[%p] %m%n").unwrap(),
//! )));
//!
//! let event = LogEvent::here(file!(), line!()).with_content("boom");
//! logger.error(&event); // prints "[ERROR] boom"
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleSink, FileMode, FileSink};
    pub use crate::core::{
        Appender, AppenderId, AppenderMetrics, Formatter, LogEvent, LogLevel, Logger,
        LoggerBuilder, LoggerError, LoggerRegistry, LoggingConfig, Result, Sink,
        DEFAULT_PATTERN,
    };
}

pub use crate::appenders::{ConsoleSink, FileMode, FileSink};
pub use crate::core::{
    Appender, AppenderDefine, AppenderId, AppenderKind, AppenderMetrics, DateTimeFormat,
    FormatItem, Formatter, LogEvent, LogLevel, Logger, LoggerBuilder, LoggerDefine,
    LoggerError, LoggerRegistry, LoggingConfig, Result, Sink, DEFAULT_DATETIME_FORMAT,
    DEFAULT_PATTERN, ROOT_LOGGER_NAME, UNKNOWN_LEVEL_NAME,
};
