//! Console sink implementation

use crate::core::{Formatter, LogEvent, LogLevel};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::{self, Write};

enum ConsoleTarget {
    Stdout,
    Stderr,
    Writer(Box<dyn Write + Send>),
}

/// Writes rendered events to the process console.
///
/// The standard streams are locked for the whole event, so lines from
/// different threads never interleave.
pub struct ConsoleSink {
    target: ConsoleTarget,
    use_colors: bool,
}

impl ConsoleSink {
    /// Console sink on standard output
    pub fn new() -> Self {
        Self {
            target: ConsoleTarget::Stdout,
            use_colors: false,
        }
    }

    pub fn stderr() -> Self {
        Self {
            target: ConsoleTarget::Stderr,
            use_colors: false,
        }
    }

    /// Console sink that writes into `writer` instead of a standard stream
    ///
    /// # Example
    ///
    /// ```
    /// use rust_pattern_logger::appenders::ConsoleSink;
    ///
    /// let sink = ConsoleSink::with_writer(Vec::<u8>::new());
    /// ```
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            target: ConsoleTarget::Writer(Box::new(writer)),
            use_colors: false,
        }
    }

    /// Color each rendered line by its level
    ///
    /// # Example
    ///
    /// ```
    /// use rust_pattern_logger::appenders::ConsoleSink;
    ///
    /// let sink = ConsoleSink::new().with_colors(true);
    /// ```
    #[cfg(feature = "console")]
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub(crate) fn write_event(
        &mut self,
        formatter: &Formatter,
        logger_name: &str,
        level: LogLevel,
        event: &LogEvent,
    ) -> io::Result<()> {
        if self.use_colors {
            let text = formatter.format(logger_name, level, event);
            return self.write_colored(&text, level);
        }

        match &mut self.target {
            ConsoleTarget::Stdout => {
                let mut out = io::stdout().lock();
                formatter.format_to(&mut out, logger_name, level, event)?;
                out.flush()
            }
            ConsoleTarget::Stderr => {
                let mut out = io::stderr().lock();
                formatter.format_to(&mut out, logger_name, level, event)?;
                out.flush()
            }
            ConsoleTarget::Writer(writer) => {
                formatter.format_to(writer, logger_name, level, event)?;
                writer.flush()
            }
        }
    }

    #[cfg(feature = "console")]
    fn write_colored(&mut self, text: &str, level: LogLevel) -> io::Result<()> {
        // Keep the line terminator outside the escape codes
        let body = text.trim_end_matches('\n');
        let tail = &text[body.len()..];
        let colored = body.color(level.color_code());
        self.write_raw(format!("{}{}", colored, tail).as_bytes())
    }

    #[cfg(not(feature = "console"))]
    fn write_colored(&mut self, text: &str, _level: LogLevel) -> io::Result<()> {
        self.write_raw(text.as_bytes())
    }

    fn write_raw(&mut self, bytes: &[u8]) -> io::Result<()> {
        match &mut self.target {
            ConsoleTarget::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(bytes)?;
                out.flush()
            }
            ConsoleTarget::Stderr => {
                let mut out = io::stderr().lock();
                out.write_all(bytes)?;
                out.flush()
            }
            ConsoleTarget::Writer(writer) => {
                writer.write_all(bytes)?;
                writer.flush()
            }
        }
    }

    pub(crate) fn flush(&mut self) -> io::Result<()> {
        match &mut self.target {
            ConsoleTarget::Stdout => io::stdout().flush(),
            ConsoleTarget::Stderr => io::stderr().flush(),
            ConsoleTarget::Writer(writer) => writer.flush(),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let target = match self.target {
            ConsoleTarget::Stdout => "stdout",
            ConsoleTarget::Stderr => "stderr",
            ConsoleTarget::Writer(_) => "writer",
        };
        f.debug_struct("ConsoleSink")
            .field("target", &target)
            .field("use_colors", &self.use_colors)
            .finish()
    }
}
