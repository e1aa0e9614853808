//! Match-and-highlight engine.
//!
//! Combines the record store, the confidence filter, and the highlighter into
//! the translation lookup and subtitle search flows.

pub mod dictionary_engine;
pub mod filters;

pub use dictionary_engine::{
    DictionaryEngine, EngineOptions, LookupOutcome, SearchOptions,
};
pub use filters::{dedupe_preserve_order, filter_by_confidence};
