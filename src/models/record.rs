//! Record model representing one row of the subtitle dictionary dataset.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared reference to a Record.
///
/// Search results hand out records from the read-only store; wrapping them in
/// `Arc` lets results outlive a query without deep-copying subtitle text.
pub type RecordRef = Arc<Record>;

/// A single English/Malayalam word pair together with the subtitle excerpt
/// it was aligned from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Record {
    /// English word (lookup key, compared case-insensitively)
    pub english_word: String,

    /// Malayalam word as it appears in the subtitle
    pub malayalam_word: String,

    /// Canonical/root Malayalam translation, may repeat across records
    pub base_word: String,

    /// Relevance weight, always finite and non-negative
    pub attention_score: f64,

    /// Subtitle source identifier
    pub source_id: String,

    /// Section (episode/scene) identifier within the source
    pub section_id: String,

    /// Timestamp of the English subtitle line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub english_timestamp: Option<String>,

    /// English subtitle excerpt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub english_context: Option<String>,

    /// Timestamp of the Malayalam subtitle line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_timestamp: Option<String>,

    /// Malayalam subtitle excerpt, usually containing `malayalam_word`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_context: Option<String>,
}

impl Record {
    /// Create a record with the word fields and a score.
    ///
    /// The score is passed through [`sanitize_score`], so a NaN or negative
    /// input ends up as `0.0`.
    pub fn new(
        english_word: impl Into<String>,
        malayalam_word: impl Into<String>,
        base_word: impl Into<String>,
        attention_score: f64,
    ) -> Self {
        Self {
            english_word: english_word.into(),
            malayalam_word: malayalam_word.into(),
            base_word: base_word.into(),
            attention_score: sanitize_score(attention_score),
            ..Default::default()
        }
    }

    /// Set the provenance fields.
    pub fn with_source(mut self, source_id: impl Into<String>, section_id: impl Into<String>) -> Self {
        self.source_id = source_id.into();
        self.section_id = section_id.into();
        self
    }

    /// Set both subtitle excerpts.
    pub fn with_contexts(
        mut self,
        english_context: Option<&str>,
        translated_context: Option<&str>,
    ) -> Self {
        self.english_context = english_context.map(str::to_string);
        self.translated_context = translated_context.map(str::to_string);
        self
    }
}

/// Clamp an attention score into the finite, non-negative range.
pub fn sanitize_score(score: f64) -> f64 {
    if score.is_finite() && score > 0.0 {
        score
    } else {
        0.0
    }
}

/// Parse a raw attention score cell.
///
/// Missing, blank, and non-numeric values become `0.0`.
pub fn parse_score(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .map(sanitize_score)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new_sanitizes_score() {
        let record = Record::new("run", "ഓടുക", "ഓടുക", f64::NAN);
        assert_eq!(record.attention_score, 0.0);

        let record = Record::new("run", "ഓടുക", "ഓടുക", -2.0);
        assert_eq!(record.attention_score, 0.0);

        let record = Record::new("run", "ഓടുക", "ഓടുക", 0.6);
        assert_eq!(record.attention_score, 0.6);
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score(Some("0.75")), 0.75);
        assert_eq!(parse_score(Some(" 1 ")), 1.0);
        assert_eq!(parse_score(Some("high")), 0.0);
        assert_eq!(parse_score(Some("")), 0.0);
        assert_eq!(parse_score(Some("inf")), 0.0);
        assert_eq!(parse_score(None), 0.0);
    }

    #[test]
    fn test_record_serialization_skips_missing_contexts() {
        let record = Record::new("cat", "പൂച്ച", "പൂച്ച", 0.9);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["english_word"], "cat");
        assert!(json.get("english_context").is_none());
    }

    #[test]
    fn test_record_deserialization_defaults() {
        let record: Record = serde_json::from_str(r#"{"english_word": "cat"}"#).unwrap();
        assert_eq!(record.english_word, "cat");
        assert_eq!(record.attention_score, 0.0);
        assert!(record.translated_context.is_none());
    }

    #[test]
    fn test_with_contexts() {
        let record = Record::new("cat", "പൂച്ച", "പൂച്ച", 0.9)
            .with_source("S01", "E02")
            .with_contexts(Some("The cat sat"), None);
        assert_eq!(record.source_id, "S01");
        assert_eq!(record.english_context.as_deref(), Some("The cat sat"));
        assert!(record.translated_context.is_none());
    }
}
