//! Name to logger mapping

use super::{
    appender::Appender, formatter::Formatter, log_level::LogLevel, logger::Logger,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

pub const ROOT_LOGGER_NAME: &str = "root";

static GLOBAL: OnceLock<LoggerRegistry> = OnceLock::new();

/// Hands out loggers by name.
///
/// A registry always owns a `"root"` logger. Unknown names are created on
/// first request with no appenders and the root logger's threshold. Tests
/// build their own registry; applications that want one process-wide
/// instance use [`LoggerRegistry::global`].
pub struct LoggerRegistry {
    root: Arc<Logger>,
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    /// Registry whose root logger prints everything to stdout with the default pattern
    pub fn new() -> Self {
        let root = Logger::new(ROOT_LOGGER_NAME);
        root.add_appender(Arc::new(Appender::console(
            LogLevel::Debug,
            Formatter::default(),
        )));
        Self::with_root(Arc::new(root))
    }

    /// Registry around an already configured root logger
    pub fn with_root(root: Arc<Logger>) -> Self {
        Self {
            root,
            loggers: RwLock::new(HashMap::new()),
        }
    }

    /// Process-wide registry, created by the first call
    pub fn global() -> &'static LoggerRegistry {
        GLOBAL.get_or_init(LoggerRegistry::new)
    }

    pub fn root(&self) -> Arc<Logger> {
        Arc::clone(&self.root)
    }

    /// Logger called `name`, created if it does not exist yet
    pub fn get(&self, name: &str) -> Arc<Logger> {
        if let Some(logger) = self.lookup(name) {
            return logger;
        }

        let mut loggers = self.loggers.write();
        let logger = loggers.entry(name.to_string()).or_insert_with(|| {
            Arc::new(Logger::with_level(name, self.root.level()))
        });
        Arc::clone(logger)
    }

    /// Logger called `name` if it already exists
    pub fn lookup(&self, name: &str) -> Option<Arc<Logger>> {
        if name == ROOT_LOGGER_NAME {
            return Some(self.root());
        }
        self.loggers.read().get(name).cloned()
    }

    /// Registered names, root first, the rest sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.read().keys().cloned().collect();
        names.sort();
        names.insert(0, ROOT_LOGGER_NAME.to_string());
        names
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
