//! Result types produced by the query flows.

use crate::highlight::HighlightedText;
use crate::models::record::RecordRef;
use serde::Serialize;

/// A deduplicated translation returned by the lookup flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    /// Canonical Malayalam word
    pub base_word: String,
}

/// A search hit with its subtitle excerpts split into highlight segments.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedRecord {
    /// The matched record
    pub record: RecordRef,

    /// English excerpt with the query term marked (`None` if the record has no excerpt)
    pub english_context: Option<HighlightedText>,

    /// Malayalam excerpt with the query term and the Malayalam word marked
    pub translated_context: Option<HighlightedText>,
}
