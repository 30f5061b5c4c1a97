//! Sink implementations

pub mod console;
pub mod file;

pub use console::ConsoleSink;
pub use file::{FileMode, FileSink};

pub use crate::core::{Appender, Sink};
