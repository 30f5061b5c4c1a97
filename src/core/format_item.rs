//! Rendering units a compiled pattern is made of

use super::log_event::LogEvent;
use super::log_level::LogLevel;
use chrono::format::{Item, StrftimeItems};
use chrono::{Local, TimeZone};
use std::fmt::Write as _;
use std::io::{self, Write};

/// Sub-format used by `%d` when no argument (or an empty one) is given
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// strftime sub-format owned by a `%d` item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeFormat {
    format: String,
    valid: bool,
}

impl DateTimeFormat {
    pub fn new(format: &str) -> Self {
        let format = if format.is_empty() {
            DEFAULT_DATETIME_FORMAT
        } else {
            format
        };
        let valid = !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
            && Self::formats_cleanly(format);
        Self {
            format: format.to_string(),
            valid,
        }
    }

    // Parse-only specifiers such as `%#z` parse fine but fail when formatting
    fn formats_cleanly(format: &str) -> bool {
        let mut trial = String::new();
        write!(trial, "{}", Local::now().format(format)).is_ok()
    }

    pub fn as_str(&self) -> &str {
        &self.format
    }

    /// Whether chrono accepts the sub-format; invalid ones render as plain text
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    fn render<W: Write + ?Sized>(&self, out: &mut W, time: i64) -> io::Result<()> {
        if !self.valid {
            return out.write_all(self.format.as_bytes());
        }
        match Local.timestamp_opt(time, 0).earliest() {
            Some(local) => {
                let mut text = String::with_capacity(32);
                if write!(text, "{}", local.format(&self.format)).is_err() {
                    return out.write_all(self.format.as_bytes());
                }
                out.write_all(text.as_bytes())
            }
            None => write!(out, "{}", time),
        }
    }
}

impl Default for DateTimeFormat {
    fn default() -> Self {
        Self::new(DEFAULT_DATETIME_FORMAT)
    }
}

/// One field of a formatted log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatItem {
    /// Fixed text copied verbatim
    Literal(String),
    /// `%m`
    Message,
    /// `%p`
    Level,
    /// `%r` milliseconds since start
    Elapsed,
    /// `%c`
    LoggerName,
    /// `%t`
    ThreadId,
    /// `%n`
    NewLine,
    /// `%d{...}`
    DateTime(DateTimeFormat),
    /// `%f`
    FileName,
    /// `%l`
    LineNumber,
    /// `%T`
    Tab,
    /// `%F`
    FiberId,
    /// `%N`
    ThreadName,
}

impl FormatItem {
    /// Write this item's part of the line for `event`.
    ///
    /// `logger_name` is used by `%c` when the event does not carry the name
    /// of the logger that emitted it.
    pub fn render<W: Write + ?Sized>(
        &self,
        out: &mut W,
        logger_name: &str,
        level: LogLevel,
        event: &LogEvent,
    ) -> io::Result<()> {
        match self {
            FormatItem::Literal(text) => out.write_all(text.as_bytes()),
            FormatItem::Message => out.write_all(event.content().as_bytes()),
            FormatItem::Level => out.write_all(level.to_str().as_bytes()),
            FormatItem::Elapsed => write!(out, "{}", event.elapsed_ms()),
            FormatItem::LoggerName => {
                let name = event.logger_name().unwrap_or(logger_name);
                out.write_all(name.as_bytes())
            }
            FormatItem::ThreadId => write!(out, "{}", event.thread_id()),
            FormatItem::NewLine => out.write_all(b"\n"),
            FormatItem::DateTime(format) => format.render(out, event.time()),
            FormatItem::FileName => out.write_all(event.file_name().as_bytes()),
            FormatItem::LineNumber => write!(out, "{}", event.line()),
            FormatItem::Tab => out.write_all(b"\t"),
            FormatItem::FiberId => write!(out, "{}", event.fiber_id()),
            FormatItem::ThreadName => out.write_all(event.thread_name().as_bytes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(item: &FormatItem, level: LogLevel, event: &LogEvent) -> String {
        let mut buf = Vec::new();
        item.render(&mut buf, "root", level, event).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn event() -> LogEvent {
        LogEvent::new("src/main.rs", 42, 1234, 7, 3, 1_736_332_245)
            .with_thread_name("main")
            .with_content("hello")
    }

    #[test]
    fn test_scalar_items() {
        let e = event();
        assert_eq!(render(&FormatItem::Message, LogLevel::Info, &e), "hello");
        assert_eq!(render(&FormatItem::Level, LogLevel::Warn, &e), "WARN");
        assert_eq!(render(&FormatItem::Elapsed, LogLevel::Info, &e), "1234");
        assert_eq!(render(&FormatItem::ThreadId, LogLevel::Info, &e), "7");
        assert_eq!(render(&FormatItem::FiberId, LogLevel::Info, &e), "3");
        assert_eq!(render(&FormatItem::FileName, LogLevel::Info, &e), "src/main.rs");
        assert_eq!(render(&FormatItem::LineNumber, LogLevel::Info, &e), "42");
        assert_eq!(render(&FormatItem::ThreadName, LogLevel::Info, &e), "main");
        assert_eq!(render(&FormatItem::NewLine, LogLevel::Info, &e), "\n");
        assert_eq!(render(&FormatItem::Tab, LogLevel::Info, &e), "\t");
        assert_eq!(
            render(&FormatItem::Literal("[x]".into()), LogLevel::Info, &e),
            "[x]"
        );
    }

    #[test]
    fn test_logger_name_prefers_event_origin() {
        let e = event();
        assert_eq!(render(&FormatItem::LoggerName, LogLevel::Info, &e), "root");

        let e = event().with_logger_name("system");
        assert_eq!(render(&FormatItem::LoggerName, LogLevel::Info, &e), "system");
    }

    #[test]
    fn test_datetime_uses_local_time() {
        let e = event();
        let expected = Local
            .timestamp_opt(e.time(), 0)
            .earliest()
            .unwrap()
            .format("%Y/%m/%d")
            .to_string();
        let item = FormatItem::DateTime(DateTimeFormat::new("%Y/%m/%d"));
        assert_eq!(render(&item, LogLevel::Info, &e), expected);
    }

    #[test]
    fn test_datetime_empty_argument_uses_default() {
        let format = DateTimeFormat::new("");
        assert_eq!(format.as_str(), DEFAULT_DATETIME_FORMAT);
        assert!(format.is_valid());
        assert_eq!(format, DateTimeFormat::default());
    }

    #[test]
    fn test_datetime_invalid_subformat_renders_text() {
        let format = DateTimeFormat::new("%Q!");
        assert!(!format.is_valid());
        let item = FormatItem::DateTime(format);
        assert_eq!(render(&item, LogLevel::Info, &event()), "%Q!");
    }

    #[test]
    fn test_datetime_format_only_specifier_renders_text() {
        let format = DateTimeFormat::new("%#z");
        assert!(!format.is_valid());
        let item = FormatItem::DateTime(format);
        assert_eq!(render(&item, LogLevel::Info, &event()), "%#z");
    }

    #[test]
    fn test_datetime_out_of_range_renders_raw_seconds() {
        let e = LogEvent::new("src/main.rs", 1, 0, 1, 0, i64::MAX);
        let item = FormatItem::DateTime(DateTimeFormat::default());
        assert_eq!(render(&item, LogLevel::Info, &e), i64::MAX.to_string());
    }
}
