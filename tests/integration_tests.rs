//! Integration tests for the logging core
//!
//! These tests verify:
//! - End-to-end rendering through loggers and appenders
//! - File appenders, reopen, and failure handling
//! - Appender set semantics
//! - Registry and configuration wiring
//! - Thread safety

use rust_pattern_logger::appenders::{ConsoleSink, FileMode, FileSink};
use rust_pattern_logger::core::log_level::LogLevel;
use rust_pattern_logger::core::logger::Logger;
use rust_pattern_logger::{
    log_error, log_info, Appender, Formatter, LogEvent, LoggerRegistry, LoggingConfig,
    DEFAULT_PATTERN,
};
use std::fs;
use std::io::{self, Write};
use std::sync::Arc;
use tempfile::TempDir;

#[derive(Clone, Default)]
struct Capture(Arc<parking_lot::Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Capture {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("utf-8 output")
    }
}

fn event(content: &str) -> LogEvent {
    LogEvent::new("tests/integration_tests.rs", 40, 15, 2, 0, 1_736_332_245)
        .with_thread_name("main")
        .with_content(content)
}

#[test]
fn test_root_console_end_to_end() {
    let capture = Capture::default();
    let logger = Logger::with_level("root", LogLevel::Info);
    let console = Appender::new(
        ConsoleSink::with_writer(capture.clone()),
        LogLevel::Warn,
        Formatter::new("[%p] %m%n").expect("valid pattern"),
    );
    logger.add_appender(Arc::new(console));

    logger.debug(&event("x"));
    assert_eq!(capture.text(), "");

    logger.error(&event("boom"));
    assert_eq!(capture.text(), "[ERROR] boom\n");
}

#[test]
fn test_file_appender_levels() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("levels_test.log");

    let logger = Logger::with_level("levels", LogLevel::Warn);
    let appender = Appender::file(&log_file, LogLevel::Debug, Formatter::new("%p %m%n").unwrap())
        .expect("Failed to create appender");
    logger.add_appender(Arc::new(appender));

    logger.debug(&event("Debug message"));
    logger.info(&event("Info message"));
    logger.warn(&event("Warn message"));
    logger.error(&event("Error message"));
    logger.fatal(&event("Fatal message"));

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(
        content,
        "WARN Warn message\nERROR Error message\nFATAL Fatal message\n"
    );
}

#[test]
fn test_multiple_appenders_with_own_thresholds() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let all_file = temp_dir.path().join("all.log");
    let errors_file = temp_dir.path().join("errors.log");

    let logger = Logger::new("multi");
    let formatter = Formatter::new("%m%n").unwrap();
    logger.add_appender(Arc::new(
        Appender::file(&all_file, LogLevel::Debug, formatter.clone()).unwrap(),
    ));
    logger.add_appender(Arc::new(
        Appender::file(&errors_file, LogLevel::Error, formatter).unwrap(),
    ));

    logger.info(&event("routine"));
    logger.error(&event("broken"));

    assert_eq!(fs::read_to_string(&all_file).unwrap(), "routine\nbroken\n");
    assert_eq!(fs::read_to_string(&errors_file).unwrap(), "broken\n");
}

#[test]
fn test_default_pattern_in_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("default.log");

    let logger = Logger::new("system");
    logger.add_appender(Arc::new(
        Appender::file(&log_file, LogLevel::Debug, Formatter::default()).unwrap(),
    ));
    logger.info(&LogEvent::new("main.rs", 12, 5, 77, 4, 1_736_332_245)
        .with_thread_name("worker")
        .with_content("ready"));

    let content = fs::read_to_string(&log_file).unwrap();
    let fields: Vec<&str> = content.trim_end().split('\t').collect();
    assert_eq!(fields.len(), 8, "unexpected layout: {:?}", content);
    assert_eq!(
        &fields[1..],
        &["77", "worker", "4", "[INFO]", "[system]", "main.rs:12", "ready"]
    );
    assert_eq!(fields[0].len(), "2025-01-08 10:30:45".len());
}

#[test]
fn test_reopen_recovers_after_rotation() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("rotate.log");
    let rotated = temp_dir.path().join("rotate.log.1");

    let appender = Arc::new(
        Appender::file(&log_file, LogLevel::Debug, Formatter::new("%m%n").unwrap()).unwrap(),
    );
    let logger = Logger::new("rotate");
    logger.add_appender(Arc::clone(&appender));

    logger.info(&event("old"));
    fs::rename(&log_file, &rotated).unwrap();
    assert!(appender.reopen());
    logger.info(&event("new"));

    assert_eq!(fs::read_to_string(&rotated).unwrap(), "old\n");
    assert_eq!(fs::read_to_string(&log_file).unwrap(), "new\n");
}

#[test]
fn test_unopenable_file_drops_without_panicking() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let bad_path = temp_dir.path().join("missing").join("app.log");

    assert!(Appender::file(&bad_path, LogLevel::Debug, Formatter::default()).is_err());

    let appender = Arc::new(Appender::new(
        FileSink::new(&bad_path, FileMode::Append),
        LogLevel::Debug,
        Formatter::default(),
    ));
    let logger = Logger::new("broken");
    logger.add_appender(Arc::clone(&appender));

    logger.fatal(&event("nowhere to go"));
    assert!(!appender.reopen());
    assert_eq!(appender.metrics().dropped_count(), 1);
    assert_eq!(appender.metrics().written_count(), 0);
}

#[test]
fn test_add_same_appender_twice() {
    let capture = Capture::default();
    let appender = Arc::new(Appender::new(
        ConsoleSink::with_writer(capture.clone()),
        LogLevel::Debug,
        Formatter::new("%m\n").unwrap(),
    ));
    let logger = Logger::new("dup");
    logger.add_appender(Arc::clone(&appender));
    logger.add_appender(Arc::clone(&appender));

    logger.info(&event("single"));
    assert_eq!(capture.text(), "single\n");

    let other = Appender::console(LogLevel::Debug, Formatter::default());
    logger.del_appender(&other);
    assert_eq!(logger.appender_count(), 1);
}

#[test]
fn test_set_pattern_rerenders() {
    let capture = Capture::default();
    let appender = Arc::new(Appender::new(
        ConsoleSink::with_writer(capture.clone()),
        LogLevel::Debug,
        Formatter::new("old:%m;").unwrap(),
    ));
    let logger = Logger::new("reset");
    logger.add_appender(Arc::clone(&appender));

    logger.info(&event("a"));
    appender.set_pattern("new:%p;").unwrap();
    logger.info(&event("b"));

    assert_eq!(capture.text(), "old:a;new:INFO;");
}

#[test]
fn test_macros_through_registry() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("macros.log");

    let registry = LoggerRegistry::new();
    let logger = registry.get("app");
    logger.set_level(LogLevel::Info);
    logger.add_appender(Arc::new(
        Appender::file(&log_file, LogLevel::Debug, Formatter::new("%c %p %m%n").unwrap())
            .unwrap(),
    ));

    log_info!(logger, "user {} logged in", 42);
    log_error!(logger, "request {} failed", "abc");

    let content = fs::read_to_string(&log_file).unwrap();
    assert_eq!(
        content,
        "app INFO user 42 logged in\napp ERROR request abc failed\n"
    );
}

#[test]
fn test_config_loaded_logger() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("configured.log");

    let json = format!(
        r#"{{
            "loggers": [{{
                "name": "system",
                "level": "info",
                "formatter": "[%p] %c %m%n",
                "appenders": [
                    {{ "type": "file", "file": {:?}, "level": "WARN" }}
                ]
            }}]
        }}"#,
        log_file.to_str().unwrap()
    );
    let config = LoggingConfig::from_json_str(&json).expect("valid config");

    let registry = LoggerRegistry::new();
    registry.apply_config(&config).expect("config applies");

    let logger = registry.get("system");
    logger.info(&event("quiet"));
    logger.warn(&event("loud"));

    assert_eq!(fs::read_to_string(&log_file).unwrap(), "[WARN] system loud\n");
}

#[test]
fn test_unterminated_pattern_rejected_everywhere() {
    assert!(Formatter::new("%d{").is_err());

    let config = LoggingConfig::from_json_str(
        r#"{"loggers":[{"name":"x","formatter":"%d{%Y","appenders":[{"type":"console"}]}]}"#,
    )
    .expect("structurally valid");
    let registry = LoggerRegistry::new();
    assert!(registry.apply_config(&config).is_err());
    assert!(registry.lookup("x").is_none());
}

#[test]
fn test_format_only_datetime_specifier_does_not_panic() {
    let capture = Capture::default();
    let logger = Logger::new("tz");
    logger.add_appender(Arc::new(Appender::new(
        ConsoleSink::with_writer(capture.clone()),
        LogLevel::Debug,
        Formatter::new("%d{%#z} %m%n").expect("pattern compiles"),
    )));

    logger.info(&event("still logged"));
    assert_eq!(capture.text(), "%#z still logged\n");
}

#[test]
fn test_default_pattern_constant() {
    assert_eq!(
        DEFAULT_PATTERN,
        "%d{%Y-%m-%d %H:%M:%S}%T%t%T%N%T%F%T[%p]%T[%c]%T%f:%l%T%m%n"
    );
}

#[test]
fn test_concurrent_logging() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("concurrent_test.log");

    let logger = Arc::new(Logger::with_level("concurrent", LogLevel::Info));
    logger.add_appender(Arc::new(
        Appender::file(&log_file, LogLevel::Debug, Formatter::new("%t %m%n").unwrap()).unwrap(),
    ));

    let mut handles = vec![];
    for thread_id in 0..5u32 {
        let logger_clone = Arc::clone(&logger);
        handles.push(std::thread::spawn(move || {
            for i in 0..10 {
                let e = LogEvent::new("t.rs", 1, 0, thread_id, 0, 0)
                    .with_content(format!("Thread {} - Message {}", thread_id, i));
                logger_clone.info(&e);
            }
        }));
    }
    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 50, "Should have 50 log entries from 5 threads * 10 messages");
    for line in lines {
        let (tid, rest) = line.split_once(' ').expect("thread id prefix");
        assert!(rest.starts_with(&format!("Thread {} -", tid)), "torn line: {}", line);
    }
}
