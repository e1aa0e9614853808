//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for query settings. These value
//! objects validate at construction time so invalid settings never reach the
//! engine.

pub mod errors;
pub mod match_mode;
pub mod threshold;

pub use errors::ValidationError;
pub use match_mode::MatchMode;
pub use threshold::ConfidenceThreshold;
