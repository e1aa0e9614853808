//! Dataset ingestion.
//!
//! Reads the merged subtitle dataset from CSV (or a JSON array of objects with
//! the same keys) and turns each row into a [`Record`]:
//! - Attention scores that are missing or not numeric become `0.0`
//! - Word fields are kept exactly as written; they are lookup and dedup keys
//! - Subtitle excerpts lose their formatting tags (`<i>`, `<b>`, `<u>`,
//!   `<font …>`) and collapse runs of whitespace; blank excerpts become `None`

use crate::error::{DatasetError, DatasetResult};
use crate::models::{parse_score, sanitize_score, Record};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Header of the English word column.
pub const COL_ENGLISH_WORD: &str = "English Word";
/// Header of the Malayalam word column.
pub const COL_MALAYALAM_WORD: &str = "Malayalam Word";
/// Header of the base word column.
pub const COL_BASE_WORD: &str = "Base word";
/// Header of the attention score column.
pub const COL_ATTENTION_SCORE: &str = "Hypothetical Attention Score";
/// Source identifier.
pub const COL_SOURCE_ID: &str = "column_1";
/// Section identifier.
pub const COL_SECTION_ID: &str = "column_2";
/// English subtitle timestamp.
pub const COL_ENGLISH_TIMESTAMP: &str = "column_3";
/// English subtitle excerpt.
pub const COL_ENGLISH_CONTEXT: &str = "column_4";
/// Malayalam subtitle timestamp.
pub const COL_TRANSLATED_TIMESTAMP: &str = "column_5";
/// Malayalam subtitle excerpt.
pub const COL_TRANSLATED_CONTEXT: &str = "column_6";

const REQUIRED_COLUMNS: [&str; 3] = [COL_ENGLISH_WORD, COL_MALAYALAM_WORD, COL_BASE_WORD];

/// Supported dataset file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Csv,
    Json,
}

impl DatasetFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> DatasetResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(DatasetError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Load the dataset at `path`, choosing the parser by extension.
pub fn load_dataset(path: impl AsRef<Path>) -> DatasetResult<Vec<Record>> {
    let path = path.as_ref();
    let format = DatasetFormat::from_path(path)?;

    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let reader = BufReader::new(file);

    let records = match format {
        DatasetFormat::Csv => load_csv(reader)?,
        DatasetFormat::Json => load_json(reader)?,
    };

    tracing::info!(
        path = %path.display(),
        records = records.len(),
        "Dataset loaded"
    );
    Ok(records)
}

/// Parse CSV data with the dataset header.
///
/// The three word columns are required; every other column is optional.
/// Rows may have fewer cells than the header.
pub fn load_csv<R: Read>(reader: R) -> DatasetResult<Vec<Record>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let position = |name: &str| headers.iter().position(|h| h == name);

    for column in REQUIRED_COLUMNS {
        if position(column).is_none() {
            return Err(DatasetError::MissingColumn(column.to_string()));
        }
    }

    let columns = ColumnIndex {
        english_word: position(COL_ENGLISH_WORD),
        malayalam_word: position(COL_MALAYALAM_WORD),
        base_word: position(COL_BASE_WORD),
        attention_score: position(COL_ATTENTION_SCORE),
        source_id: position(COL_SOURCE_ID),
        section_id: position(COL_SECTION_ID),
        english_timestamp: position(COL_ENGLISH_TIMESTAMP),
        english_context: position(COL_ENGLISH_CONTEXT),
        translated_timestamp: position(COL_TRANSLATED_TIMESTAMP),
        translated_context: position(COL_TRANSLATED_CONTEXT),
    };

    let mut records = Vec::new();
    let mut coerced = 0usize;

    for row in csv_reader.records() {
        let row = row?;
        let cell = |idx: Option<usize>| idx.and_then(|i| row.get(i));

        let raw_score = cell(columns.attention_score);
        if !is_numeric(raw_score) {
            coerced += 1;
        }

        records.push(Record {
            english_word: raw_word(cell(columns.english_word)),
            malayalam_word: raw_word(cell(columns.malayalam_word)),
            base_word: raw_word(cell(columns.base_word)),
            attention_score: parse_score(raw_score),
            source_id: clean_word(cell(columns.source_id)),
            section_id: clean_word(cell(columns.section_id)),
            english_timestamp: clean_optional(cell(columns.english_timestamp)),
            english_context: clean_context(cell(columns.english_context)),
            translated_timestamp: clean_optional(cell(columns.translated_timestamp)),
            translated_context: clean_context(cell(columns.translated_context)),
        });
    }

    log_coerced(coerced, records.len());
    Ok(records)
}

/// Parse a JSON array of row objects keyed by the dataset headers.
///
/// Scalar values of any JSON type are accepted for text columns; `null`
/// counts as missing.
pub fn load_json<R: Read>(reader: R) -> DatasetResult<Vec<Record>> {
    let rows: Vec<Map<String, Value>> = serde_json::from_reader(reader)?;

    if let Some(first) = rows.first() {
        for column in REQUIRED_COLUMNS {
            if !first.contains_key(column) {
                return Err(DatasetError::MissingColumn(column.to_string()));
            }
        }
    }

    let mut coerced = 0usize;
    let records: Vec<Record> = rows
        .iter()
        .map(|row| {
            let text = |key: &str| row.get(key).and_then(value_to_text);

            let attention_score = match row.get(COL_ATTENTION_SCORE) {
                Some(Value::Number(n)) => n.as_f64().map(sanitize_score).unwrap_or(0.0),
                other => {
                    let raw = other.and_then(value_to_text);
                    if !is_numeric(raw.as_deref()) {
                        coerced += 1;
                    }
                    parse_score(raw.as_deref())
                }
            };

            Record {
                english_word: raw_word(text(COL_ENGLISH_WORD).as_deref()),
                malayalam_word: raw_word(text(COL_MALAYALAM_WORD).as_deref()),
                base_word: raw_word(text(COL_BASE_WORD).as_deref()),
                attention_score,
                source_id: clean_word(text(COL_SOURCE_ID).as_deref()),
                section_id: clean_word(text(COL_SECTION_ID).as_deref()),
                english_timestamp: clean_optional(text(COL_ENGLISH_TIMESTAMP).as_deref()),
                english_context: clean_context(text(COL_ENGLISH_CONTEXT).as_deref()),
                translated_timestamp: clean_optional(text(COL_TRANSLATED_TIMESTAMP).as_deref()),
                translated_context: clean_context(text(COL_TRANSLATED_CONTEXT).as_deref()),
            }
        })
        .collect();

    log_coerced(coerced, records.len());
    Ok(records)
}

/// Column positions resolved from the CSV header.
struct ColumnIndex {
    english_word: Option<usize>,
    malayalam_word: Option<usize>,
    base_word: Option<usize>,
    attention_score: Option<usize>,
    source_id: Option<usize>,
    section_id: Option<usize>,
    english_timestamp: Option<usize>,
    english_context: Option<usize>,
    translated_timestamp: Option<usize>,
    translated_context: Option<usize>,
}

fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

fn is_numeric(raw: Option<&str>) -> bool {
    raw.map(str::trim)
        .is_some_and(|s| s.parse::<f64>().is_ok_and(f64::is_finite))
}

fn log_coerced(coerced: usize, total: usize) {
    if coerced > 0 {
        tracing::warn!(
            coerced = coerced,
            total = total,
            "Rows with missing or non-numeric attention scores set to 0.0"
        );
    }
}

fn raw_word(raw: Option<&str>) -> String {
    raw.unwrap_or_default().to_string()
}

fn clean_word(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().to_string()
}

fn clean_optional(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Strip subtitle formatting tags and collapse whitespace.
///
/// Only `i`, `b`, `u` and `font` tags are removed; any other angle brackets
/// are part of the subtitle text.
pub fn clean_context(raw: Option<&str>) -> Option<String> {
    static MARKUP_TAG_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)</?(?:i|b|u|font)\b[^<>]*>").unwrap());

    let raw = raw?;
    let text = MARKUP_TAG_RE.replace_all(raw, "");
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
