//! Log event structure

use std::cell::Cell;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Instant;

static PROCESS_START: OnceLock<Instant> = OnceLock::new();
static NEXT_THREAD_ID: AtomicU32 = AtomicU32::new(1);

// Thread-local cache so every thread is numbered once
thread_local! {
    static THREAD_ID_CACHE: Cell<u32> = const { Cell::new(0) };
}

/// Milliseconds elapsed since the logging core was first used in this process
pub fn process_elapsed_ms() -> u64 {
    let start = PROCESS_START.get_or_init(Instant::now);
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Small sequential id for the calling thread, assigned on first access
pub fn current_thread_id() -> u32 {
    THREAD_ID_CACHE.with(|cache| {
        let id = cache.get();
        if id != 0 {
            return id;
        }
        let id = NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed);
        cache.set(id);
        id
    })
}

/// Name of the calling thread, empty when the thread is unnamed
pub fn current_thread_name() -> String {
    std::thread::current().name().unwrap_or_default().to_string()
}

/// Wall-clock time in whole seconds since the unix epoch
pub fn unix_time_now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// One log occurrence.
///
/// The identity fields (location, ids, time) are fixed at construction; only
/// the message content can grow, through the setters or through
/// [`std::fmt::Write`], before the event is handed to a logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    file_name: String,
    line: u32,
    elapsed_ms: u64,
    thread_id: u32,
    fiber_id: u32,
    time: i64,
    thread_name: String,
    content: String,
    logger_name: Option<Arc<str>>,
}

impl LogEvent {
    pub fn new(
        file_name: impl Into<String>,
        line: u32,
        elapsed_ms: u64,
        thread_id: u32,
        fiber_id: u32,
        time: i64,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            line,
            elapsed_ms,
            thread_id,
            fiber_id,
            time,
            thread_name: String::new(),
            content: String::new(),
            logger_name: None,
        }
    }

    /// Event stamped with the calling thread and the current clock
    pub fn here(file_name: impl Into<String>, line: u32) -> Self {
        Self::new(
            file_name,
            line,
            process_elapsed_ms(),
            current_thread_id(),
            0,
            unix_time_now(),
        )
        .with_thread_name(current_thread_name())
    }

    #[must_use]
    pub fn with_thread_name(mut self, thread_name: impl Into<String>) -> Self {
        self.thread_name = thread_name.into();
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Record the name of the logger that emitted this event
    #[must_use]
    pub fn with_logger_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.logger_name = Some(name.into());
        self
    }

    pub fn push_content(&mut self, text: &str) {
        self.content.push_str(text);
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn thread_id(&self) -> u32 {
        self.thread_id
    }

    pub fn fiber_id(&self) -> u32 {
        self.fiber_id
    }

    pub fn time(&self) -> i64 {
        self.time
    }

    pub fn thread_name(&self) -> &str {
        &self.thread_name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn logger_name(&self) -> Option<&str> {
        self.logger_name.as_deref()
    }
}

impl fmt::Write for LogEvent {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.content.push_str(s);
        Ok(())
    }
}
