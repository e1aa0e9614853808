//! MCP tool handlers for the dictionary server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::domain::{ConfidenceThreshold, MatchMode};
use crate::engine::{DictionaryEngine, LookupOutcome, SearchOptions};
use crate::highlight::Markup;
use crate::models::AnnotatedRecord;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{json, Value};
use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;

/// Default page size for `browse_dataset`.
const DEFAULT_BROWSE_LIMIT: usize = 20;

/// Largest page `browse_dataset` will return.
const MAX_BROWSE_LIMIT: usize = 500;

/// The MCP server that exposes the dictionary query flows.
#[derive(Clone)]
pub struct DictionaryMcpServer {
    engine: Arc<DictionaryEngine>,
    dataset_path: PathBuf,
    strict_word_boundary: bool,
    max_search_results: usize,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for DictionaryMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "msone-dictionary".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("English-Malayalam subtitle dictionary - look up Malayalam translations of English words and search aligned subtitle excerpts with the matched words highlighted.".into()),
        }
    }
}

/// Parameters for `lookup_translation`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct LookupTranslationParams {
    /// English word to translate
    pub word: String,
}

/// Parameters for `search_subtitles`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchSubtitlesParams {
    /// English word to search for
    pub word: String,
    /// Match whole words only (defaults to the server setting)
    #[serde(default)]
    pub strict_word_boundary: Option<bool>,
    /// Minimum attention score (defaults to the server setting)
    #[serde(default)]
    pub min_score: Option<f64>,
    /// Maximum number of records to return
    #[serde(default)]
    pub max_results: Option<usize>,
    /// Highlight rendering: "html", "markdown" or "plain"
    #[serde(default)]
    pub markup: Option<String>,
}

/// Parameters for `browse_dataset`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct BrowseDatasetParams {
    /// Index of the first record
    #[serde(default)]
    pub offset: Option<usize>,
    /// Number of records to return
    #[serde(default)]
    pub limit: Option<usize>,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn invalid_params(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: &Value) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(value).map_err(to_mcp_error)?,
    )]))
}

// Tool router implementation
#[tool_router]
impl DictionaryMcpServer {
    /// Create a new dictionary MCP server.
    pub fn new(
        engine: Arc<DictionaryEngine>,
        dataset_path: PathBuf,
        strict_word_boundary: bool,
        max_search_results: usize,
    ) -> Self {
        Self {
            engine,
            dataset_path,
            strict_word_boundary,
            max_search_results: max_search_results.max(1),
            tool_router: Self::tool_router(),
        }
    }

    /// Look up the Malayalam translations of an English word.
    #[tool(
        description = "Look up the Malayalam translations of an English word. Matches the word exactly (case-insensitive), keeps only confident entries, and returns each base word once."
    )]
    pub async fn lookup_translation(
        &self,
        params: Parameters<LookupTranslationParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        tracing::info!("MCP Handler: lookup_translation called");

        let outcome = self.engine.lookup(&params.word);
        json_result(&lookup_response(&params.word, &outcome))
    }

    /// Search subtitle excerpts for an English word.
    #[tool(
        description = "Search the subtitle dataset for records whose English word contains the query, as a whole word or as any substring. Returns each record with its English and Malayalam subtitle excerpts, the query and the Malayalam word highlighted."
    )]
    pub async fn search_subtitles(
        &self,
        params: Parameters<SearchSubtitlesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        tracing::info!("MCP Handler: search_subtitles called");

        let markup = match params.markup.as_deref() {
            Some(name) => name.parse::<Markup>().map_err(invalid_params)?,
            None => Markup::default(),
        };
        let threshold = match params.min_score {
            Some(score) => ConfidenceThreshold::new(score).map_err(invalid_params)?,
            None => self.engine.options().search_threshold,
        };
        let mode =
            MatchMode::from_strict(params.strict_word_boundary.unwrap_or(self.strict_word_boundary));
        let max_results = params
            .max_results
            .unwrap_or(self.max_search_results)
            .clamp(1, self.max_search_results);

        let results = self
            .engine
            .search_with(&params.word, SearchOptions { mode, threshold });

        json_result(&search_response(
            &params.word,
            mode,
            &results,
            max_results,
            markup,
        ))
    }

    /// Page through the raw dataset.
    #[tool(description = "Page through the raw dataset records in their original order")]
    pub async fn browse_dataset(
        &self,
        params: Parameters<BrowseDatasetParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let offset = params.offset.unwrap_or(0);
        let limit = params
            .limit
            .unwrap_or(DEFAULT_BROWSE_LIMIT)
            .min(MAX_BROWSE_LIMIT);

        let store = self.engine.store();
        let page = store.page(offset, limit);

        json_result(&json!({
            "total_records": store.len(),
            "offset": offset,
            "count": page.len(),
            "records": page.iter().map(|r| r.as_ref()).collect::<Vec<_>>(),
        }))
    }

    /// Describe the loaded dataset and the active settings.
    #[tool(description = "Describe the loaded dataset, the active confidence thresholds and query statistics")]
    pub async fn dataset_info(&self) -> Result<CallToolResult, McpError> {
        let options = self.engine.options();
        let metrics = self.engine.metrics();

        json_result(&json!({
            "dataset_path": self.dataset_path.display().to_string(),
            "total_records": self.engine.store().len(),
            "lookup_confidence_threshold": options.lookup_threshold,
            "search_confidence_threshold": options.search_threshold,
            "strict_word_boundary": self.strict_word_boundary,
            "max_search_results": self.max_search_results,
            "queries": {
                "lookups": metrics.lookups_total(),
                "searches": metrics.searches_total(),
                "empty_results": metrics.empty_results_total(),
            },
        }))
    }
}

/// JSON body for a lookup outcome.
pub(crate) fn lookup_response(word: &str, outcome: &LookupOutcome) -> Value {
    let message = match outcome {
        LookupOutcome::Found { translations } => {
            format!("Found {} translation(s) for '{}'", translations.len(), word)
        }
        LookupOutcome::BelowThreshold { .. } => format!(
            "No translations with sufficient attention score found for '{}'",
            word
        ),
        LookupOutcome::Untranslated { .. } => format!(
            "Entries for '{}' exist but none has a base word",
            word
        ),
        LookupOutcome::NotFound => format!("No translation found for '{}'", word),
    };

    json!({
        "word": word,
        "outcome": outcome,
        "message": message,
    })
}

/// JSON body for search results, truncated to `max_results` records.
pub(crate) fn search_response(
    word: &str,
    mode: MatchMode,
    results: &[AnnotatedRecord],
    max_results: usize,
    markup: Markup,
) -> Value {
    let message = if results.is_empty() {
        format!("No results found for '{}'", word)
    } else {
        format!("Found {} results for '{}'", results.len(), word)
    };

    let shown: Vec<Value> = results
        .iter()
        .take(max_results)
        .map(|result| {
            let record = &result.record;
            json!({
                "english_word": record.english_word,
                "malayalam_word": record.malayalam_word,
                "base_word": record.base_word,
                "attention_score": record.attention_score,
                "source": record.source_id,
                "section": record.section_id,
                "english_timestamp": record.english_timestamp,
                "malayalam_timestamp": record.translated_timestamp,
                "english_subtitle": result.english_context.as_ref().map(|t| markup.render(t)),
                "malayalam_subtitle": result.translated_context.as_ref().map(|t| markup.render(t)),
                "english_segments": result.english_context,
                "malayalam_segments": result.translated_context,
            })
        })
        .collect();

    json!({
        "query": word,
        "mode": mode,
        "markup": markup,
        "result_count": results.len(),
        "shown": shown.len(),
        "message": message,
        "results": shown,
    })
}
