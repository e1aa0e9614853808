//! Observability module for monitoring query activity.
//!
//! This module provides query counters and duration tracking on top of
//! structured `tracing` logs.

pub mod metrics;

pub use metrics::{MetricsTracker, Timer};
