//! Pattern-driven formatter

use super::error::Result;
use super::format_item::FormatItem;
use super::log_event::LogEvent;
use super::log_level::LogLevel;
use super::pattern;
use std::io::{self, Write};

/// Pattern used when nothing else is configured:
/// time, thread id, thread name, fiber id, `[level]`, `[logger]`, `file:line`, message.
pub const DEFAULT_PATTERN: &str =
    "%d{%Y-%m-%d %H:%M:%S}%T%t%T%N%T%F%T[%p]%T[%c]%T%f:%l%T%m%n";

/// A compiled pattern.
///
/// Compilation happens once; every call to [`Formatter::format`] walks the
/// same item list, so a formatter can be shared read-only across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    pattern: String,
    items: Vec<FormatItem>,
}

impl Formatter {
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        let items = pattern::compile(&pattern)?;
        Ok(Self { pattern, items })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn items(&self) -> &[FormatItem] {
        &self.items
    }

    /// Recompile from `pattern`, discarding every previously compiled item.
    ///
    /// If `pattern` is malformed the error is returned and the formatter keeps
    /// its current pattern.
    pub fn reset(&mut self, pattern: impl Into<String>) -> Result<()> {
        let pattern = pattern.into();
        let items = pattern::compile(&pattern)?;
        self.pattern = pattern;
        self.items = items;
        Ok(())
    }

    /// Render `event` into a new string
    pub fn format(&self, logger_name: &str, level: LogLevel, event: &LogEvent) -> String {
        let mut buf = Vec::with_capacity(128);
        // Writing into a Vec cannot fail
        let _ = self.format_to(&mut buf, logger_name, level, event);
        match String::from_utf8(buf) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }

    /// Render `event` straight into `out` without building an intermediate string
    pub fn format_to<W: Write + ?Sized>(
        &self,
        out: &mut W,
        logger_name: &str,
        level: LogLevel,
        event: &LogEvent,
    ) -> io::Result<()> {
        for item in &self.items {
            item.render(out, logger_name, level, event)?;
        }
        Ok(())
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            items: pattern::compile(DEFAULT_PATTERN).unwrap_or_default(),
        }
    }
}

impl std::str::FromStr for Formatter {
    type Err = super::error::LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        Formatter::new(s)
    }
}
