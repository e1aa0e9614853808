//! Msone Dictionary - an English-Malayalam subtitle dictionary served over the
//! Model Context Protocol.
//!
//! Given an English word, the library finds matching word pairs in an
//! in-memory dataset of aligned subtitles, filters them by attention score,
//! and marks the query and its Malayalam translation inside the subtitle
//! excerpts.
//!
//! # Architecture
//!
//! - **models**: Dataset records and query result types
//! - **domain**: Validated value objects (thresholds, match modes)
//! - **error**: Error types for configuration and dataset loading
//! - **config**: Configuration management from environment variables
//! - **store**: In-memory record store and dataset loader
//! - **matching**: Literal whole-word / substring term matching
//! - **highlight**: Span-based highlighting and rendering
//! - **engine**: Lookup and search flows
//! - **observability**: Query metrics
//! - **server**: MCP protocol server

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod highlight;
pub mod matching;
pub mod models;
pub mod observability;
pub mod server;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use domain::{ConfidenceThreshold, MatchMode};
pub use engine::{DictionaryEngine, EngineOptions, LookupOutcome, SearchOptions};
pub use error::{ConfigError, DatasetError};
pub use highlight::{highlight, HighlightedText, Markup, Segment};
pub use matching::TermMatcher;
pub use models::{AnnotatedRecord, Record, Translation};
pub use observability::MetricsTracker;
pub use server::DictionaryMcpServer;
pub use store::{KeyField, RecordStore};
