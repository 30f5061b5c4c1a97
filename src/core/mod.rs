//! Core logger types

pub mod appender;
pub mod config;
pub mod error;
pub mod format_item;
pub mod formatter;
pub mod log_event;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod pattern;
pub mod registry;

pub use appender::{Appender, AppenderId, Sink};
pub use config::{AppenderDefine, AppenderKind, LoggerDefine, LoggingConfig};
pub use error::{LoggerError, Result};
pub use format_item::{DateTimeFormat, FormatItem, DEFAULT_DATETIME_FORMAT};
pub use formatter::{Formatter, DEFAULT_PATTERN};
pub use log_event::LogEvent;
pub use log_level::{LogLevel, UNKNOWN_LEVEL_NAME};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::AppenderMetrics;
pub use registry::{LoggerRegistry, ROOT_LOGGER_NAME};
