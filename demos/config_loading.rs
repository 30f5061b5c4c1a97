//! Configuration example
//!
//! Builds loggers from a JSON description and looks them up by name.
//!
//! Run with: cargo run --example config_loading

use rust_pattern_logger::prelude::*;
use rust_pattern_logger::{log_error, log_info};

const CONFIG: &str = r#"{
    "loggers": [
        {
            "name": "root",
            "level": "INFO",
            "appenders": [{ "type": "console" }]
        },
        {
            "name": "system",
            "level": "DEBUG",
            "formatter": "%d%T[%c]%T%p%T%m%n",
            "appenders": [
                { "type": "console", "level": "ERROR" },
                { "type": "file", "file": "system.log", "mode": "truncate" }
            ]
        }
    ]
}"#;

fn main() -> Result<()> {
    println!("=== Rust Pattern Logger - Configuration Example ===\n");

    let registry = LoggerRegistry::new();
    registry.apply_config(&LoggingConfig::from_json_str(CONFIG)?)?;
    println!("Configured loggers: {:?}\n", registry.names());

    let root = registry.root();
    let system = registry.get("system");

    log_info!(root, "root logger uses the default pattern");
    log_info!(system, "only written to system.log");
    log_error!(system, "written to system.log and the console");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
