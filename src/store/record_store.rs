//! In-memory, read-only record store.

use crate::domain::MatchMode;
use crate::matching::TermMatcher;
use crate::models::{Record, RecordRef};
use std::sync::Arc;

/// A record field that lookups can be run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyField {
    /// `english_word`
    #[default]
    EnglishWord,
    /// `malayalam_word`
    MalayalamWord,
    /// `base_word`
    BaseWord,
}

impl KeyField {
    /// Read this field from a record.
    pub fn value<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            Self::EnglishWord => &record.english_word,
            Self::MalayalamWord => &record.malayalam_word,
            Self::BaseWord => &record.base_word,
        }
    }
}

/// The loaded dataset, in ingestion order.
///
/// Lookups are linear scans that keep the original order of the records.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<RecordRef>,
}

impl RecordStore {
    /// Create a store from loaded records.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: records.into_iter().map(Arc::new).collect(),
        }
    }

    /// All records in ingestion order.
    pub fn records(&self) -> &[RecordRef] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// A window of records for browsing the raw dataset.
    pub fn page(&self, offset: usize, limit: usize) -> &[RecordRef] {
        let start = offset.min(self.records.len());
        let end = start.saturating_add(limit).min(self.records.len());
        &self.records[start..end]
    }

    /// Records whose `field` equals `query`, ignoring case.
    ///
    /// An empty query returns nothing.
    pub fn find_exact(&self, field: KeyField, query: &str) -> Vec<RecordRef> {
        match TermMatcher::exact(query) {
            Some(matcher) => self.find_matching(field, &matcher),
            None => Vec::new(),
        }
    }

    /// Records whose `field` contains `query`, ignoring case.
    ///
    /// With [`MatchMode::WholeWord`] the query must sit between
    /// non-alphanumeric characters (or the field edges); with
    /// [`MatchMode::Substring`] any occurrence counts.
    pub fn find_containing(&self, field: KeyField, query: &str, mode: MatchMode) -> Vec<RecordRef> {
        match TermMatcher::new(query, mode) {
            Some(matcher) => self.find_matching(field, &matcher),
            None => Vec::new(),
        }
    }

    /// Records whose `field` is matched by a precompiled matcher.
    pub fn find_matching(&self, field: KeyField, matcher: &TermMatcher) -> Vec<RecordRef> {
        self.records
            .iter()
            .filter(|record| matcher.is_match(field.value(record)))
            .cloned()
            .collect()
    }
}

impl From<Vec<Record>> for RecordStore {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}
