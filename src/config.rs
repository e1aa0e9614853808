//! Configuration management for the Msone dictionary server.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured; dotenvy never writes to
//! stdout, which MCP uses for communication.

use crate::domain::ConfidenceThreshold;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the Msone dictionary server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the merged dataset (CSV or JSON)
    pub dataset_path: PathBuf,

    /// Minimum attention score for translation lookups (default: 0.5)
    pub lookup_confidence_threshold: ConfidenceThreshold,

    /// Minimum attention score for subtitle searches (default: 0.0)
    pub search_confidence_threshold: ConfidenceThreshold,

    /// Whether searches match whole words unless told otherwise (default: true)
    pub strict_word_boundary: bool,

    /// Maximum number of records rendered per search response (default: 50)
    pub max_search_results: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `MSONE_DATASET_PATH`: Path to the dataset file
    ///
    /// Optional environment variables:
    /// - `LOOKUP_CONFIDENCE_THRESHOLD`: Lookup threshold (default: 0.5)
    /// - `SEARCH_CONFIDENCE_THRESHOLD`: Search threshold (default: 0.0)
    /// - `STRICT_WORD_BOUNDARY`: Default search mode (default: true)
    /// - `MAX_SEARCH_RESULTS`: Records per search response (default: 50)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let dataset_path = env::var("MSONE_DATASET_PATH")
            .map_err(|_| ConfigError::MissingVar("MSONE_DATASET_PATH".to_string()))?;

        if dataset_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "MSONE_DATASET_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let lookup_confidence_threshold = Self::parse_env_threshold(
            "LOOKUP_CONFIDENCE_THRESHOLD",
            ConfidenceThreshold::LOOKUP_DEFAULT,
        )?;
        let search_confidence_threshold =
            Self::parse_env_threshold("SEARCH_CONFIDENCE_THRESHOLD", ConfidenceThreshold::NONE)?;
        let strict_word_boundary = Self::parse_env_bool("STRICT_WORD_BOUNDARY", true)?;
        let max_search_results = Self::parse_env_usize("MAX_SEARCH_RESULTS", 50)?;

        if max_search_results == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MAX_SEARCH_RESULTS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            dataset_path: PathBuf::from(dataset_path),
            lookup_confidence_threshold,
            search_confidence_threshold,
            strict_word_boundary,
            max_search_results,
            log_level,
        })
    }

    /// Parse an environment variable as a confidence threshold with a default value.
    fn parse_env_threshold(
        var_name: &str,
        default: ConfidenceThreshold,
    ) -> ConfigResult<ConfidenceThreshold> {
        match env::var(var_name) {
            Ok(val) => {
                let value = val.trim().parse::<f64>().map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a number, got: {}", val),
                })?;
                ConfidenceThreshold::new(value).map_err(|e| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: e.to_string(),
                })
            }
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dataset_path: PathBuf::from("merged_data_inner_join.csv"),
            lookup_confidence_threshold: ConfidenceThreshold::LOOKUP_DEFAULT,
            search_confidence_threshold: ConfidenceThreshold::NONE,
            strict_word_boundary: true,
            max_search_results: 50,
            log_level: "error".to_string(),
        }
    }
}
