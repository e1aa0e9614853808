//! The match-and-highlight engine behind both query flows.
//!
//! - **Lookup**: exact word match, confidence filter, deduplicated base words
//! - **Search**: whole-word or substring match, optional confidence filter,
//!   subtitle excerpts annotated with highlight segments
//!
//! The engine only reads from the shared [`RecordStore`]; every query is
//! independent of the ones before it.

use crate::config::Config;
use crate::domain::{ConfidenceThreshold, MatchMode};
use crate::engine::filters::{dedupe_preserve_order, filter_by_confidence};
use crate::highlight::HighlightedText;
use crate::matching::TermMatcher;
use crate::models::{AnnotatedRecord, RecordRef, Translation};
use crate::observability::{MetricsTracker, Timer};
use crate::store::{KeyField, RecordStore};
use serde::Serialize;
use std::sync::Arc;

/// Tunables for the two query flows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineOptions {
    /// Minimum score for the lookup flow (default: 0.5)
    pub lookup_threshold: ConfidenceThreshold,

    /// Minimum score for the search flow (default: 0.0, no filtering)
    pub search_threshold: ConfidenceThreshold,

    /// How the Malayalam word is highlighted in the Malayalam excerpt
    /// (default: substring, since inflected forms carry suffixes)
    pub translation_match_mode: MatchMode,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            lookup_threshold: ConfidenceThreshold::LOOKUP_DEFAULT,
            search_threshold: ConfidenceThreshold::NONE,
            translation_match_mode: MatchMode::Substring,
        }
    }
}

impl From<&Config> for EngineOptions {
    fn from(config: &Config) -> Self {
        Self {
            lookup_threshold: config.lookup_confidence_threshold,
            search_threshold: config.search_confidence_threshold,
            ..Default::default()
        }
    }
}

/// Outcome of a translation lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupOutcome {
    /// Confident translations, deduplicated in first-seen order
    Found { translations: Vec<Translation> },

    /// The word exists but no record reaches the lookup threshold
    BelowThreshold { candidates: usize },

    /// Confident records exist but none carries a base word
    Untranslated { candidates: usize },

    /// No record has this English word
    NotFound,
}

impl LookupOutcome {
    /// The translations, empty unless [`LookupOutcome::Found`].
    pub fn translations(&self) -> &[Translation] {
        match self {
            Self::Found { translations } => translations.as_slice(),
            _ => &[],
        }
    }

    /// Consume the outcome and keep only the translations.
    pub fn into_translations(self) -> Vec<Translation> {
        match self {
            Self::Found { translations } => translations,
            _ => Vec::new(),
        }
    }
}

/// Per-call search settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// Word-boundary mode for matching and for highlighting the query
    pub mode: MatchMode,

    /// Minimum attention score for returned records
    pub threshold: ConfidenceThreshold,
}

/// Query engine over a read-only record store.
#[derive(Debug, Clone)]
pub struct DictionaryEngine {
    store: Arc<RecordStore>,
    options: EngineOptions,
    metrics: MetricsTracker,
}

impl DictionaryEngine {
    /// Create an engine over `store`.
    pub fn new(store: Arc<RecordStore>, options: EngineOptions) -> Self {
        Self {
            store,
            options,
            metrics: MetricsTracker::new(),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// The active options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Query counters.
    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }

    /// Look up the translations of an English word.
    ///
    /// Matches `english_word` exactly (ignoring case), keeps records at or
    /// above the lookup threshold, and returns their base words without
    /// duplicates. Base words are compared as written; blank ones are skipped.
    pub fn lookup(&self, word: &str) -> LookupOutcome {
        let timer = Timer::new("lookup");

        let candidates = self.store.find_exact(KeyField::EnglishWord, word);
        let outcome = if candidates.is_empty() {
            LookupOutcome::NotFound
        } else {
            let candidate_count = candidates.len();
            let confident = filter_by_confidence(candidates, self.options.lookup_threshold);

            if confident.is_empty() {
                LookupOutcome::BelowThreshold {
                    candidates: candidate_count,
                }
            } else {
                let translations: Vec<Translation> = dedupe_preserve_order(
                    confident
                        .iter()
                        .map(|record| record.base_word.as_str())
                        .filter(|base| !base.trim().is_empty()),
                )
                .into_iter()
                .map(|base| Translation {
                    base_word: base.to_string(),
                })
                .collect();

                if translations.is_empty() {
                    LookupOutcome::Untranslated {
                        candidates: confident.len(),
                    }
                } else {
                    LookupOutcome::Found { translations }
                }
            }
        };

        tracing::debug!(word = %word, outcome = ?outcome, "Lookup");
        self.metrics
            .track_lookup(timer.finish(), outcome.translations().len());
        outcome
    }

    /// Translations of an English word (see [`lookup`](Self::lookup)).
    pub fn lookup_exact(&self, word: &str) -> Vec<Translation> {
        self.lookup(word).into_translations()
    }

    /// Search subtitle records whose English word contains `word`.
    ///
    /// `strict_word_boundary` selects whole-word matching; otherwise any
    /// substring matches. Records are filtered at the search threshold.
    pub fn search_substring(&self, word: &str, strict_word_boundary: bool) -> Vec<AnnotatedRecord> {
        self.search_with(
            word,
            SearchOptions {
                mode: MatchMode::from_strict(strict_word_boundary),
                threshold: self.options.search_threshold,
            },
        )
    }

    /// Search with explicit per-call options.
    pub fn search_with(&self, word: &str, options: SearchOptions) -> Vec<AnnotatedRecord> {
        let timer = Timer::new("search");

        let Some(matcher) = TermMatcher::new(word, options.mode) else {
            self.metrics.track_search(timer.finish(), 0);
            return Vec::new();
        };

        let matches = self.store.find_matching(KeyField::EnglishWord, &matcher);
        let matches = filter_by_confidence(matches, options.threshold);

        let results: Vec<AnnotatedRecord> = matches
            .into_iter()
            .map(|record| self.annotate(record, &matcher))
            .collect();

        tracing::debug!(
            word = %word,
            mode = %options.mode,
            threshold = %options.threshold,
            "Search matched {} records",
            results.len()
        );
        self.metrics.track_search(timer.finish(), results.len());
        results
    }

    /// Highlight a record's excerpts for a query.
    ///
    /// The English excerpt gets the query term. The Malayalam excerpt gets the
    /// query term first, then the record's Malayalam word in the remaining
    /// unhighlighted text.
    pub fn annotate(&self, record: RecordRef, query: &TermMatcher) -> AnnotatedRecord {
        let english_context = record
            .english_context
            .as_deref()
            .map(|text| HighlightedText::plain(text).highlight_with(query));

        let translated_context = record.translated_context.as_deref().map(|text| {
            HighlightedText::plain(text)
                .highlight_with(query)
                .highlight(&record.malayalam_word, self.options.translation_match_mode)
        });

        AnnotatedRecord {
            record,
            english_context,
            translated_context,
        }
    }
}
