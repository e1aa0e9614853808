//! Data models for the subtitle dictionary.
//!
//! This module contains the dataset row type and the result types handed to
//! the presentation layer.

pub mod annotated;
pub mod record;

pub use annotated::{AnnotatedRecord, Translation};
pub use record::{parse_score, sanitize_score, Record, RecordRef};
