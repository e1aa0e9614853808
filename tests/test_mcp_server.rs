//! Tests for the MCP tool implementations.
//!
//! The tools are called directly on the server, without a transport, and the
//! JSON body of each tool result is checked.

use msone_dictionary::engine::{DictionaryEngine, EngineOptions};
use msone_dictionary::server::{
    BrowseDatasetParams, DictionaryMcpServer, LookupTranslationParams, SearchSubtitlesParams,
};
use msone_dictionary::store::RecordStore;
use msone_dictionary::Record;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, ErrorCode};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

mod fixtures;
use fixtures::*;

/// Server over the sample records, strict by default, at most 2 results.
fn server() -> DictionaryMcpServer {
    DictionaryMcpServer::new(
        Arc::new(sample_engine()),
        PathBuf::from("merged_data_inner_join.csv"),
        true,
        2,
    )
}

fn search_params(word: &str) -> SearchSubtitlesParams {
    SearchSubtitlesParams {
        word: word.to_string(),
        strict_word_boundary: None,
        min_score: None,
        max_results: None,
        markup: None,
    }
}

/// Parse the JSON text carried by a tool result.
fn body(result: &CallToolResult) -> Value {
    assert_ne!(result.is_error, Some(true));
    let raw = serde_json::to_value(result).unwrap();
    let text = raw["content"][0]["text"].as_str().unwrap();
    serde_json::from_str(text).unwrap()
}

fn result_words(body: &Value) -> Vec<String> {
    body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["english_word"].as_str().unwrap().to_string())
        .collect()
}

async fn search(server: &DictionaryMcpServer, params: SearchSubtitlesParams) -> Value {
    let result = server.search_subtitles(Parameters(params)).await.unwrap();
    body(&result)
}

// ============================================================================
// lookup_translation
// ============================================================================

#[tokio::test]
async fn test_tool_lookup_translation() {
    let result = server()
        .lookup_translation(Parameters(LookupTranslationParams {
            word: "run".to_string(),
        }))
        .await
        .unwrap();

    let body = body(&result);
    assert_eq!(body["outcome"]["status"], "found");
    assert_eq!(body["outcome"]["translations"][0]["base_word"], "ഓടുക");
    assert_eq!(
        body["outcome"]["translations"].as_array().unwrap().len(),
        1
    );
}

#[tokio::test]
async fn test_tool_lookup_unknown_word() {
    let result = server()
        .lookup_translation(Parameters(LookupTranslationParams {
            word: "dog".to_string(),
        }))
        .await
        .unwrap();

    let body = body(&result);
    assert_eq!(body["outcome"]["status"], "not_found");
    assert_eq!(body["message"], "No translation found for 'dog'");
}

// ============================================================================
// search_subtitles
// ============================================================================

#[tokio::test]
async fn test_tool_search_uses_server_defaults() {
    let body = search(&server(), search_params("cat")).await;

    assert_eq!(body["mode"], "whole_word");
    assert_eq!(body["markup"], "markdown");
    assert_eq!(body["result_count"], 2);
    assert_eq!(body["shown"], 2);
    assert_eq!(result_words(&body), vec!["cat", "Cat"]);
    assert_eq!(
        body["results"][0]["english_subtitle"],
        "The **cat** sat on the **cat** mat."
    );
}

#[tokio::test]
async fn test_tool_search_strict_override() {
    let mut params = search_params("cat");
    params.strict_word_boundary = Some(false);
    let body = search(&server(), params).await;

    assert_eq!(body["mode"], "substring");
    assert_eq!(body["result_count"], 3);
    // Capped at the server's max_search_results.
    assert_eq!(body["shown"], 2);
    assert_eq!(result_words(&body), vec!["category", "cat"]);
}

#[tokio::test]
async fn test_tool_search_min_score() {
    let mut params = search_params("run");
    params.min_score = Some(0.5);
    let body = search(&server(), params).await;

    assert_eq!(body["result_count"], 2);
    assert_eq!(result_words(&body), vec!["run", "run away"]);
    for record in body["results"].as_array().unwrap() {
        assert!(record["attention_score"].as_f64().unwrap() >= 0.5);
    }
}

#[tokio::test]
async fn test_tool_search_max_results() {
    let mut params = search_params("run");
    params.max_results = Some(1);
    let body = search(&server(), params).await;
    assert_eq!(body["result_count"], 3);
    assert_eq!(body["shown"], 1);
    assert_eq!(result_words(&body), vec!["run"]);

    let mut params = search_params("run");
    params.max_results = Some(100);
    let body = search(&server(), params).await;
    assert_eq!(body["shown"], 2);
}

#[tokio::test]
async fn test_tool_search_html_markup() {
    let mut params = search_params("cat");
    params.markup = Some("html".to_string());
    let body = search(&server(), params).await;

    let malayalam = body["results"][0]["malayalam_subtitle"].as_str().unwrap();
    assert_eq!(malayalam.matches("<span").count(), 2);
    assert_eq!(body["results"][0]["malayalam_segments"][0]["highlighted"], true);
}

#[tokio::test]
async fn test_tool_search_rejects_unknown_markup() {
    let mut params = search_params("cat");
    params.markup = Some("latex".to_string());

    let err = server()
        .search_subtitles(Parameters(params))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
}

#[tokio::test]
async fn test_tool_search_rejects_negative_score() {
    let mut params = search_params("cat");
    params.min_score = Some(-1.0);

    let err = server()
        .search_subtitles(Parameters(params))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
}

// ============================================================================
// browse_dataset / dataset_info
// ============================================================================

#[tokio::test]
async fn test_tool_browse_dataset_window() {
    let result = server()
        .browse_dataset(Parameters(BrowseDatasetParams {
            offset: Some(4),
            limit: Some(10),
        }))
        .await
        .unwrap();

    let body = body(&result);
    assert_eq!(body["total_records"], 6);
    assert_eq!(body["offset"], 4);
    assert_eq!(body["count"], 2);
    assert_eq!(body["records"][0]["english_word"], "Cat");
    assert_eq!(body["records"][1]["english_word"], "run away");
}

#[tokio::test]
async fn test_tool_browse_dataset_default_and_max_limit() {
    let records = (0..600)
        .map(|i| Record::new(format!("word{}", i), "വാക്ക്", "വാക്ക്", 0.5))
        .collect();
    let engine = DictionaryEngine::new(Arc::new(RecordStore::new(records)), EngineOptions::default());
    let server = DictionaryMcpServer::new(Arc::new(engine), PathBuf::from("big.csv"), true, 50);

    let result = server
        .browse_dataset(Parameters(BrowseDatasetParams {
            offset: None,
            limit: None,
        }))
        .await
        .unwrap();
    let default_page = body(&result);
    assert_eq!(default_page["count"], 20);
    assert_eq!(default_page["records"][0]["english_word"], "word0");

    let result = server
        .browse_dataset(Parameters(BrowseDatasetParams {
            offset: Some(0),
            limit: Some(10_000),
        }))
        .await
        .unwrap();
    assert_eq!(body(&result)["count"], 500);
}

#[tokio::test]
async fn test_tool_dataset_info() {
    let server = server();
    let _ = server.search_subtitles(Parameters(search_params("cat"))).await;

    let result = server.dataset_info().await.unwrap();
    let body = body(&result);

    assert_eq!(body["total_records"], 6);
    assert_eq!(body["dataset_path"], "merged_data_inner_join.csv");
    assert_eq!(body["lookup_confidence_threshold"], 0.5);
    assert_eq!(body["search_confidence_threshold"], 0.0);
    assert_eq!(body["strict_word_boundary"], true);
    assert_eq!(body["max_search_results"], 2);
    assert_eq!(body["queries"]["searches"], 1);
}
