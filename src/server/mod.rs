//! MCP server for the subtitle dictionary.
//!
//! This module provides the MCP protocol server that exposes the lookup and
//! search flows to AI assistants through the Model Context Protocol.

pub mod handlers;

pub use handlers::{
    BrowseDatasetParams, DictionaryMcpServer, LookupTranslationParams, SearchSubtitlesParams,
};

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the dictionary MCP server with stdio transport.
///
/// This function starts the MCP server and runs it until completion.
/// It communicates via stdin/stdout using the MCP protocol.
pub async fn run_server(server: DictionaryMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    // Wait for completion
    service.waiting().await?;

    Ok(())
}
