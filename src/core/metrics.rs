//! Appender metrics for observability
//!
//! Counters for how many events an appender wrote, filtered out by its
//! threshold, or dropped because the sink could not take them.

use std::sync::atomic::{AtomicU64, Ordering};

/// Per-appender counters
///
/// # Example
///
/// ```
/// use rust_pattern_logger::AppenderMetrics;
///
/// let metrics = AppenderMetrics::new();
/// metrics.record_written();
/// metrics.record_dropped();
///
/// assert_eq!(metrics.written_count(), 1);
/// assert_eq!(metrics.dropped_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct AppenderMetrics {
    /// Events rendered and handed to the sink
    written: AtomicU64,

    /// Events below the appender threshold
    filtered: AtomicU64,

    /// Events lost to a closed sink or a failed write
    dropped: AtomicU64,
}

impl AppenderMetrics {
    pub const fn new() -> Self {
        Self {
            written: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn written_count(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Record a written event, returning the previous count
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a dropped event, returning the previous count
    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of attempted writes that were dropped, as a percentage (0.0 - 100.0)
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.dropped_count();
        let total = dropped + self.written_count();
        if total == 0 {
            0.0
        } else {
            (dropped as f64 / total as f64) * 100.0
        }
    }
}
