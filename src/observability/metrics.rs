//! Query metrics tracking.
//!
//! Counters for the two query flows plus a timer that reports durations
//! through `tracing`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Counters shared by every clone of the tracker.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    lookups_total: Arc<AtomicU64>,
    searches_total: Arc<AtomicU64>,
    empty_results_total: Arc<AtomicU64>,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            lookups_total: Arc::new(AtomicU64::new(0)),
            searches_total: Arc::new(AtomicU64::new(0)),
            empty_results_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a translation lookup.
    pub fn track_lookup(&self, duration_ms: u128, result_count: usize) {
        self.lookups_total.fetch_add(1, Ordering::Relaxed);
        self.track_empty(result_count);

        tracing::debug!(
            duration_ms = duration_ms,
            result_count = result_count,
            "Lookup completed"
        );
    }

    /// Track a subtitle search.
    pub fn track_search(&self, duration_ms: u128, result_count: usize) {
        self.searches_total.fetch_add(1, Ordering::Relaxed);
        self.track_empty(result_count);

        tracing::info!(
            duration_ms = duration_ms,
            result_count = result_count,
            "Search query completed"
        );
    }

    fn track_empty(&self, result_count: usize) {
        if result_count == 0 {
            self.empty_results_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get the total number of lookups.
    pub fn lookups_total(&self) -> u64 {
        self.lookups_total.load(Ordering::Relaxed)
    }

    /// Get the total number of searches.
    pub fn searches_total(&self) -> u64 {
        self.searches_total.load(Ordering::Relaxed)
    }

    /// Get the number of queries that returned nothing.
    pub fn empty_results_total(&self) -> u64 {
        self.empty_results_total.load(Ordering::Relaxed)
    }

    /// Share of queries that returned nothing (0.0 to 1.0).
    pub fn miss_rate(&self) -> f64 {
        let total = (self.lookups_total() + self.searches_total()) as f64;

        if total == 0.0 {
            0.0
        } else {
            self.empty_results_total() as f64 / total
        }
    }

    /// A human-readable summary of all counters.
    pub fn summary(&self) -> String {
        format!(
            "Metrics Summary:\n\
             Lookups: {}\n\
             Searches: {}\n\
             Empty Results: {} ({:.2}% miss rate)",
            self.lookups_total(),
            self.searches_total(),
            self.empty_results_total(),
            self.miss_rate() * 100.0,
        )
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }

    /// Finish the timer and return the elapsed time in milliseconds.
    pub fn finish(self) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        tracing::trace!(
            operation = %self.operation,
            duration_ms = duration_ms,
            "Operation completed"
        );

        duration_ms
    }
}
