//! Declarative logger configuration
//!
//! Describes loggers and their appenders as data (JSON via serde) and applies
//! the description to a [`LoggerRegistry`].
//!
//! ```
//! use rust_pattern_logger::{LoggerRegistry, LoggingConfig};
//!
//! let config = LoggingConfig::from_json_str(r#"{
//!     "loggers": [{
//!         "name": "system",
//!         "level": "INFO",
//!         "formatter": "%d%T%m%n",
//!         "appenders": [{ "type": "console", "level": "WARN" }]
//!     }]
//! }"#).unwrap();
//!
//! let registry = LoggerRegistry::new();
//! registry.apply_config(&config).unwrap();
//! assert_eq!(registry.get("system").appender_count(), 1);
//! ```

use super::{
    appender::Appender,
    error::{LoggerError, Result},
    formatter::{Formatter, DEFAULT_PATTERN},
    log_level::LogLevel,
    registry::LoggerRegistry,
};
use crate::appenders::{ConsoleSink, FileMode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppenderKind {
    Console,
    File,
}

/// One appender attached to a configured logger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppenderDefine {
    #[serde(rename = "type")]
    pub kind: AppenderKind,

    /// Threshold; everything the logger passes when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,

    /// Pattern; falls back to the logger's, then to [`DEFAULT_PATTERN`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,

    /// Target path, required for file appenders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    #[serde(default)]
    pub mode: FileMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerDefine {
    pub name: String,

    #[serde(default)]
    pub level: LogLevel,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,

    #[serde(default)]
    pub appenders: Vec<AppenderDefine>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub loggers: Vec<LoggerDefine>,
}

impl LoggingConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LoggingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the structural rules serde cannot express
    pub fn validate(&self) -> Result<()> {
        for logger in &self.loggers {
            if logger.name.trim().is_empty() {
                return Err(LoggerError::config("logger", "name must not be empty"));
            }
            for appender in &logger.appenders {
                if appender.kind == AppenderKind::File && appender.file.is_none() {
                    return Err(LoggerError::config(
                        format!("logger '{}'", logger.name),
                        "file appender requires a 'file' path",
                    ));
                }
            }
        }
        Ok(())
    }
}

impl AppenderDefine {
    fn build(&self, logger_pattern: Option<&str>) -> Result<Arc<Appender>> {
        let pattern = self
            .formatter
            .as_deref()
            .or(logger_pattern)
            .unwrap_or(DEFAULT_PATTERN);
        let formatter = Formatter::new(pattern)?;
        let level = self.level.unwrap_or(LogLevel::Debug);

        let appender = match self.kind {
            AppenderKind::Console => Appender::new(ConsoleSink::new(), level, formatter),
            AppenderKind::File => {
                let path = self.file.clone().ok_or_else(|| {
                    LoggerError::config("file appender", "missing 'file' path")
                })?;
                Appender::file_with_mode(path, self.mode, level, formatter)?
            }
        };
        Ok(Arc::new(appender))
    }
}

impl LoggerDefine {
    fn build_appenders(&self) -> Result<Vec<Arc<Appender>>> {
        self.appenders
            .iter()
            .map(|define| define.build(self.formatter.as_deref()))
            .collect()
    }
}

impl LoggerRegistry {
    /// Apply `config`, replacing the level and appender set of every logger it names.
    ///
    /// All appenders are built before any logger is touched, so a bad pattern
    /// or an unopenable file leaves the registry unchanged.
    pub fn apply_config(&self, config: &LoggingConfig) -> Result<()> {
        config.validate()?;

        let mut prepared = Vec::with_capacity(config.loggers.len());
        for define in &config.loggers {
            prepared.push((define, define.build_appenders()?));
        }

        for (define, appenders) in prepared {
            let logger = self.get(&define.name);
            logger.set_level(define.level);
            logger.set_appenders(appenders);
        }
        Ok(())
    }
}
