//! Highlighting of matched terms inside subtitle excerpts.
//!
//! Highlights are kept as segment lists rather than inline markup; rendering
//! to HTML or Markdown happens only at the display edge.

pub mod markup;
pub mod segments;

pub use markup::{escape_html, Markup};
pub use segments::{highlight, HighlightedText, Segment};
