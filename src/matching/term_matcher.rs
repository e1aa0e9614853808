//! Literal, case-insensitive term matching.
//!
//! A [`TermMatcher`] finds occurrences of a query term inside a text:
//! - The term is always searched literally (regex metacharacters are escaped)
//! - Comparison is case-insensitive
//! - In [`MatchMode::WholeWord`] an occurrence only counts when the characters
//!   on both sides are non-alphanumeric or the text edge
//!
//! Occurrences are reported as byte ranges into the searched text and never
//! overlap each other.

use crate::domain::MatchMode;
use regex::{Regex, RegexBuilder};
use std::ops::Range;

/// A compiled matcher for one search term.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    regex: Regex,
    mode: MatchMode,
}

impl TermMatcher {
    /// Compile a matcher for `term`.
    ///
    /// Returns `None` for an empty term, which matches nothing. A term too
    /// large for the regex engine is logged and also treated as matching nothing.
    pub fn new(term: &str, mode: MatchMode) -> Option<Self> {
        Self::build(term, &regex::escape(term), mode)
    }

    /// Compile a matcher that only accepts a text equal to `term`, ignoring case.
    ///
    /// Uses the same case folding as [`TermMatcher::new`], so an exact match
    /// is always also a containing match.
    pub fn exact(term: &str) -> Option<Self> {
        let pattern = format!("^(?:{})$", regex::escape(term));
        Self::build(term, &pattern, MatchMode::Substring)
    }

    fn build(term: &str, pattern: &str, mode: MatchMode) -> Option<Self> {
        if term.is_empty() {
            return None;
        }

        match RegexBuilder::new(pattern).case_insensitive(true).build() {
            Ok(regex) => Some(Self { regex, mode }),
            Err(e) => {
                tracing::warn!(term_len = term.len(), "Cannot compile search term: {}", e);
                None
            }
        }
    }

    /// The boundary mode this matcher was built with.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Whether `text` contains at least one accepted occurrence.
    pub fn is_match(&self, text: &str) -> bool {
        let mut found = false;
        self.scan(text, |_| true, |_| {
            found = true;
            false
        });
        found
    }

    /// All accepted occurrences in `text`, left to right.
    pub fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        self.find_spans_where(text, |_| true)
    }

    /// All occurrences in `text` that also satisfy `accept`.
    ///
    /// A rejected candidate does not consume its characters: scanning resumes
    /// one character after its start, so an overlapping later occurrence can
    /// still be found.
    pub fn find_spans_where<F>(&self, text: &str, accept: F) -> Vec<Range<usize>>
    where
        F: FnMut(&Range<usize>) -> bool,
    {
        let mut spans = Vec::new();
        self.scan(text, accept, |range| {
            spans.push(range);
            true
        });
        spans
    }

    /// Drive the search loop. `on_hit` returns `false` to stop early.
    fn scan<A, H>(&self, text: &str, mut accept: A, mut on_hit: H)
    where
        A: FnMut(&Range<usize>) -> bool,
        H: FnMut(Range<usize>) -> bool,
    {
        let mut start = 0;

        while start <= text.len() {
            let Some(m) = self.regex.find_at(text, start) else {
                break;
            };
            let range = m.range();
            if range.is_empty() {
                break;
            }

            if self.respects_boundaries(text, &range) && accept(&range) {
                start = range.end;
                if !on_hit(range) {
                    break;
                }
            } else {
                start = next_char_boundary(text, range.start);
            }
        }
    }

    fn respects_boundaries(&self, text: &str, range: &Range<usize>) -> bool {
        if !self.mode.is_strict() {
            return true;
        }

        let before = text[..range.start].chars().next_back();
        let after = text[range.end..].chars().next();

        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    }
}

/// Characters that extend a word. Everything else is a delimiter.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

fn next_char_boundary(text: &str, index: usize) -> usize {
    text[index..]
        .chars()
        .next()
        .map(|c| index + c.len_utf8())
        .unwrap_or(text.len() + 1)
}
