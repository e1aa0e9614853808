//! ConfidenceThreshold value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A minimum attention score a record must reach to be kept.
///
/// Always finite and non-negative, so comparisons against sanitized
/// attention scores are well defined.
///
/// # Example
///
/// ```
/// use msone_dictionary::domain::ConfidenceThreshold;
///
/// let threshold = ConfidenceThreshold::new(0.5).unwrap();
/// assert!(threshold.accepts(0.5));
/// assert!(!threshold.accepts(0.49));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ConfidenceThreshold(f64);

impl ConfidenceThreshold {
    /// Threshold used by the translation lookup flow.
    pub const LOOKUP_DEFAULT: Self = Self(0.5);

    /// Threshold that keeps every record.
    pub const NONE: Self = Self(0.0);

    /// Create a new threshold, rejecting NaN, infinities and negatives.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteThreshold);
        }
        if value < 0.0 {
            return Err(ValidationError::NegativeThreshold(value));
        }
        Ok(Self(value))
    }

    /// Get the raw threshold value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whether a score passes this threshold (inclusive).
    pub fn accepts(&self, score: f64) -> bool {
        score >= self.0
    }
}

impl Default for ConfidenceThreshold {
    fn default() -> Self {
        Self::NONE
    }
}

impl Serialize for ConfidenceThreshold {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ConfidenceThreshold {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        ConfidenceThreshold::new(value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ConfidenceThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
