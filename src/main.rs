//! Msone dictionary server - Main entry point
//!
//! Loads the subtitle dataset once and serves lookups and searches over the
//! Model Context Protocol on stdio.

use anyhow::Result;
use msone_dictionary::engine::{DictionaryEngine, EngineOptions};
use msone_dictionary::store::{load_dataset, RecordStore};
use msone_dictionary::{Config, DictionaryMcpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let fallback_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));

    // Logging goes to stderr; stdout carries MCP traffic
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let records = match load_dataset(&config.dataset_path) {
        Ok(records) => records,
        Err(e) => {
            error!("Failed to load dataset: {}", e);
            return Err(e.into());
        }
    };

    let store = Arc::new(RecordStore::new(records));
    let engine = Arc::new(DictionaryEngine::new(store, EngineOptions::from(&config)));

    info!(
        "Dictionary ready: {} records, lookup threshold {}, search threshold {}",
        engine.store().len(),
        config.lookup_confidence_threshold,
        config.search_confidence_threshold
    );

    let server = DictionaryMcpServer::new(
        engine.clone(),
        config.dataset_path.clone(),
        config.strict_word_boundary,
        config.max_search_results,
    );

    info!("Starting MCP server with stdio transport");
    msone_dictionary::server::run_server(server).await?;

    info!("{}", engine.metrics().summary());
    info!("Msone dictionary server shutdown complete");
    Ok(())
}
