//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The threshold is NaN or infinite.
    NonFiniteThreshold,

    /// The threshold is below zero.
    NegativeThreshold(f64),

    /// The match mode name is not recognised.
    UnknownMatchMode(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteThreshold => write!(f, "Threshold must be a finite number"),
            Self::NegativeThreshold(value) => {
                write!(f, "Threshold cannot be negative: {}", value)
            }
            Self::UnknownMatchMode(mode) => write!(f, "Unknown match mode: {}", mode),
        }
    }
}

impl std::error::Error for ValidationError {}
