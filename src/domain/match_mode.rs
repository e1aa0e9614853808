//! MatchMode value object.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a term must sit inside a text to count as a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// The occurrence must be bounded by non-alphanumeric characters or the
    /// edges of the text ("cat" matches "the cat" but not "category").
    #[default]
    WholeWord,

    /// Any case-insensitive occurrence counts.
    Substring,
}

impl MatchMode {
    /// Map the `strict_word_boundary` flag onto a mode.
    pub fn from_strict(strict_word_boundary: bool) -> Self {
        if strict_word_boundary {
            Self::WholeWord
        } else {
            Self::Substring
        }
    }

    /// Whether this mode enforces word boundaries.
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::WholeWord)
    }
}

impl FromStr for MatchMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "whole_word" | "whole-word" | "word" | "strict" => Ok(Self::WholeWord),
            "substring" | "partial" | "legacy" => Ok(Self::Substring),
            other => Err(ValidationError::UnknownMatchMode(other.to_string())),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WholeWord => write!(f, "whole_word"),
            Self::Substring => write!(f, "substring"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_strict() {
        assert_eq!(MatchMode::from_strict(true), MatchMode::WholeWord);
        assert_eq!(MatchMode::from_strict(false), MatchMode::Substring);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("strict".parse::<MatchMode>().unwrap(), MatchMode::WholeWord);
        assert_eq!("Legacy".parse::<MatchMode>().unwrap(), MatchMode::Substring);
        assert!("fuzzy".parse::<MatchMode>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for mode in [MatchMode::WholeWord, MatchMode::Substring] {
            assert_eq!(mode.to_string().parse::<MatchMode>().unwrap(), mode);
        }
    }
}
