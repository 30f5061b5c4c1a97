//! Basic logger usage example
//!
//! Demonstrates console logging with a custom pattern and the two threshold levels.
//!
//! Run with: cargo run --example basic_usage

use rust_pattern_logger::prelude::*;
use rust_pattern_logger::{log_debug, log_error, log_info, log_warn};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Pattern Logger - Basic Usage Example ===\n");

    let logger = Logger::with_level("root", LogLevel::Debug);
    let console = Arc::new(Appender::console(
        LogLevel::Debug,
        Formatter::new("%d{%H:%M:%S} [%p] %c %f:%l - %m%n")?,
    ));
    logger.add_appender(Arc::clone(&console));

    println!("1. Logging at different levels:");
    log_debug!(logger, "This is a debug message");
    log_info!(logger, "This is an info message");
    log_warn!(logger, "This is a warning message");
    log_error!(logger, "This is an error message");

    println!("\n2. Raising the logger threshold to WARN:");
    logger.set_level(LogLevel::Warn);
    log_info!(logger, "Info message (hidden)");
    log_warn!(logger, "Warning message (visible)");

    println!("\n3. Raising the appender threshold to ERROR:");
    console.set_level(LogLevel::Error);
    log_warn!(logger, "Warning message (hidden by appender)");
    log_error!(logger, "Error message (visible)");

    println!("\n4. The default pattern:");
    console.set_formatter(Formatter::default());
    log_error!(logger, "Rendered with {}", DEFAULT_PATTERN);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
