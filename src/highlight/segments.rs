//! Span-aware highlighted text.
//!
//! Text is kept as an ordered list of segments, each either plain or
//! highlighted. A highlight pass only searches the plain regions and splits
//! them, so later passes can never land inside (or wrap) an earlier match.
//! Concatenating the segment texts always yields the original text.

use crate::domain::MatchMode;
use crate::matching::TermMatcher;
use serde::Serialize;
use std::ops::Range;

/// A run of text that is either highlighted or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// The text of this run
    pub text: String,

    /// Whether the run is a highlighted match
    pub highlighted: bool,
}

impl Segment {
    fn new(text: &str, highlighted: bool) -> Self {
        Self {
            text: text.to_string(),
            highlighted,
        }
    }
}

/// Text annotated with highlight segments.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct HighlightedText {
    segments: Vec<Segment>,
}

impl HighlightedText {
    /// Wrap `text` without any highlights.
    pub fn plain(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        Self {
            segments: vec![Segment::new(text, false)],
        }
    }

    /// Build from the full text and sorted, non-overlapping highlight ranges.
    fn from_spans(text: &str, spans: &[Range<usize>]) -> Self {
        let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
        let mut cursor = 0;

        for span in spans {
            if span.start > cursor {
                segments.push(Segment::new(&text[cursor..span.start], false));
            }
            segments.push(Segment::new(&text[span.clone()], true));
            cursor = span.end;
        }
        if cursor < text.len() {
            segments.push(Segment::new(&text[cursor..], false));
        }

        Self { segments }
    }

    /// Apply another highlight pass for `term`.
    ///
    /// An empty term leaves the text unchanged.
    pub fn highlight(&self, term: &str, mode: MatchMode) -> Self {
        match TermMatcher::new(term, mode) {
            Some(matcher) => self.highlight_with(&matcher),
            None => self.clone(),
        }
    }

    /// Apply another highlight pass with a precompiled matcher.
    ///
    /// Word boundaries are judged against the full text, while a match is
    /// only accepted when it lies entirely inside one plain segment.
    pub fn highlight_with(&self, matcher: &TermMatcher) -> Self {
        let text = self.plain_text();
        let free = self.ranges(false);

        let hits = matcher.find_spans_where(&text, |candidate| {
            free.iter()
                .any(|f| f.start <= candidate.start && candidate.end <= f.end)
        });
        if hits.is_empty() {
            return self.clone();
        }

        let mut spans = self.ranges(true);
        spans.extend(hits);
        spans.sort_by_key(|r| r.start);

        Self::from_spans(&text, &spans)
    }

    /// The segments in text order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The original text, without any highlight information.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Byte ranges of the highlighted segments within [`plain_text`](Self::plain_text).
    pub fn spans(&self) -> Vec<Range<usize>> {
        self.ranges(true)
    }

    /// Texts of the highlighted segments, in order.
    pub fn highlighted_terms(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter(|s| s.highlighted)
            .map(|s| s.text.as_str())
            .collect()
    }

    /// Whether any segment is highlighted.
    pub fn has_highlights(&self) -> bool {
        self.segments.iter().any(|s| s.highlighted)
    }

    fn ranges(&self, highlighted: bool) -> Vec<Range<usize>> {
        let mut offset = 0;
        let mut ranges = Vec::new();
        for segment in &self.segments {
            let end = offset + segment.text.len();
            if segment.highlighted == highlighted {
                ranges.push(offset..end);
            }
            offset = end;
        }
        ranges
    }
}

/// Highlight every occurrence of `term` in `text`.
///
/// A missing text stays missing; an empty term returns the text unmarked.
pub fn highlight(text: Option<&str>, term: &str, mode: MatchMode) -> Option<HighlightedText> {
    let text = text?;
    Some(HighlightedText::plain(text).highlight(term, mode))
}
