//! Term matching utilities.
//!
//! This module provides literal, case-insensitive matching of a search term
//! against text, with an optional whole-word restriction.

pub mod term_matcher;

pub use term_matcher::{is_word_char, TermMatcher};
