//! File logging example
//!
//! Demonstrates logging to both console and file appenders, and reopening the
//! file after it has been moved away.
//!
//! Run with: cargo run --example file_logging

use rust_pattern_logger::prelude::*;
use rust_pattern_logger::{log_info, log_warn};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Pattern Logger - File Logging Example ===\n");

    let logger = Logger::with_level("app", LogLevel::Info);
    logger.add_appender(Arc::new(Appender::console(
        LogLevel::Warn,
        Formatter::new("[%p] %m%n")?,
    )));
    let file = Arc::new(Appender::file(
        "application.log",
        LogLevel::Info,
        Formatter::default(),
    )?);
    logger.add_appender(Arc::clone(&file));

    println!("1. Logging to both console (WARN+) and file (INFO+):");
    log_info!(logger, "Application started");
    log_info!(logger, "Configuration loaded successfully");
    log_warn!(logger, "Using default settings for some options");

    println!("\n2. Rotating the file by hand and reopening:");
    std::fs::rename("application.log", "application.log.1")?;
    if !file.reopen() {
        eprintln!("could not reopen application.log");
    }

    for i in 1..=3 {
        log_info!(logger, "Processing item {}/3", i);
    }
    log_warn!(logger, "All operations completed");

    logger.flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log.1' and 'application.log' for the file output");

    Ok(())
}
