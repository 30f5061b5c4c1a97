//! File sink implementation

use crate::core::{Formatter, LogEvent, LogLevel, LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// How the log file is opened (at construction and on every reopen)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileMode {
    /// Keep existing content and write at the end
    #[default]
    Append,
    /// Discard existing content
    Truncate,
}

/// Writes rendered events to a file kept open between calls
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    mode: FileMode,
    writer: Option<BufWriter<File>>,
}

impl FileSink {
    /// Sink bound to `path` that has not been opened yet; see [`FileSink::reopen`]
    pub fn new(path: impl Into<PathBuf>, mode: FileMode) -> Self {
        Self {
            path: path.into(),
            mode,
            writer: None,
        }
    }

    /// Open `path` right away, failing if the file cannot be opened
    pub fn open(path: impl Into<PathBuf>, mode: FileMode) -> Result<Self> {
        let mut sink = Self::new(path, mode);
        sink.try_reopen().map_err(|err| {
            LoggerError::file_appender(sink.path.display().to_string(), err.to_string())
        })?;
        Ok(sink)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> FileMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.writer.is_some()
    }

    /// Close the current handle (if any) and open the path again.
    ///
    /// The file is opened with the sink's [`FileMode`]: `Append` keeps what is
    /// already there, `Truncate` empties it on every reopen.
    ///
    /// Returns `false` when the file could not be opened; the sink then stays
    /// closed and drops events until a later reopen succeeds.
    pub fn reopen(&mut self) -> bool {
        match self.try_reopen() {
            Ok(()) => true,
            Err(err) => {
                eprintln!(
                    "[LOGGER WARNING] Failed to reopen log file '{}': {}",
                    self.path.display(),
                    err
                );
                false
            }
        }
    }

    fn try_reopen(&mut self) -> io::Result<()> {
        if let Some(mut writer) = self.writer.take() {
            let _ = writer.flush();
        }

        let mut options = OpenOptions::new();
        options.create(true);
        match self.mode {
            FileMode::Append => options.append(true),
            FileMode::Truncate => options.write(true).truncate(true),
        };
        let file = options.open(&self.path)?;
        self.writer = Some(BufWriter::new(file));
        Ok(())
    }

    /// Render one event; the buffer is flushed before returning so each event
    /// reaches the file in a single write.
    pub(crate) fn write_event(
        &mut self,
        formatter: &Formatter,
        logger_name: &str,
        level: LogLevel,
        event: &LogEvent,
    ) -> io::Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "log file is not open"))?;
        formatter.format_to(writer, logger_name, level, event)?;
        writer.flush()
    }

    pub(crate) fn flush(&mut self) -> io::Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
