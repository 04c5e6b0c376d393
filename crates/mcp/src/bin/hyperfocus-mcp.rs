// Standalone MCP server binary

use anyhow::Result;
use hyperfocus_core::store::JsonFileStore;
use hyperfocus_mcp::server::{McpServer, SERVER_INSTRUCTIONS};
use hyperfocus_mcp::tools::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries protocol frames
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Hyperfocus MCP Server starting...");

    // Backing states document (states.json in the working directory by default)
    let states_file =
        std::env::var("HYPERFOCUS_STATES_FILE").unwrap_or_else(|_| "states.json".to_string());
    tracing::info!("Using states file: {}", states_file);

    let store = Arc::new(JsonFileStore::new(states_file));

    // Create tool registry
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(ListFocusStatesTool::new(store.clone())));
    registry.register(Arc::new(ListPersonalitiesTool::new(store.clone())));
    registry.register(Arc::new(LoadFocusTool::new(store.clone())));
    registry.register(Arc::new(LoadPersonalityTool::new(store)));

    tracing::info!("Registered {} tools", registry.list_schemas().len());

    // Start MCP server
    let server = McpServer::new(registry).with_instructions(SERVER_INSTRUCTIONS);
    server.start().await?;

    Ok(())
}
