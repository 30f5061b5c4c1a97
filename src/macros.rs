//! Logging macros that capture the call site.
//!
//! Each macro builds a [`LogEvent`](crate::LogEvent) stamped with `file!()`,
//! `line!()`, the elapsed time, the calling thread and the wall clock, formats
//! the message like `format!`, and hands the event to the logger.
//!
//! # Examples
//!
//! ```
//! use rust_pattern_logger::prelude::*;
//! use rust_pattern_logger::log_info;
//!
//! let logger = Logger::new("server");
//!
//! log_info!(logger, "Server started");
//!
//! let port = 8080;
//! log_info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level.
///
/// The event body is only built when the logger's threshold lets `level` through.
///
/// # Examples
///
/// ```
/// # use rust_pattern_logger::prelude::*;
/// # let logger = Logger::new("root");
/// use rust_pattern_logger::log_event;
/// log_event!(logger, LogLevel::Info, "Simple message");
/// log_event!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log_event {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.enabled(level) {
            let event = $crate::LogEvent::here(file!(), line!())
                .with_logger_name(logger.name())
                .with_content(format!($($arg)+));
            logger.log(level, &event);
        }
    }};
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_pattern_logger::prelude::*;
/// # let logger = Logger::new("root");
/// use rust_pattern_logger::log_debug;
/// log_debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_event!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_event!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_event!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_pattern_logger::prelude::*;
/// # let logger = Logger::new("root");
/// use rust_pattern_logger::log_error;
/// let code = 503;
/// log_error!(logger, "upstream returned {}", code);
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_event!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_event!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
