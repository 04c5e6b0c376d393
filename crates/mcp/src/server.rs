// MCP server implementation (JSON-RPC 2.0 over newline-delimited stdio)

use crate::protocol::{
    CallToolParams, InitializeParams, InitializeResult, JsonRpcError, JsonRpcRequest,
    JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo, ToolsCapability,
};
use crate::tools::{InvalidArguments, ToolRegistry};
use anyhow::Result;
use futures::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::{FramedRead, FramedWrite, LinesCodec};

/// MCP protocol revision this server speaks
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Usage guidance advertised to clients in the initialize result
pub const SERVER_INSTRUCTIONS: &str = "Cognitive state optimization server. Loads pre-configured focus states or personalities that concentrate attention and reward mechanisms on specific cognitive tasks. Uses narrative anchoring to align processing priorities with desired outcomes.\n\nWarning: States persist within conversation context and may significantly alter response patterns.";

pub struct McpServer {
    registry: ToolRegistry,
    instructions: Option<String>,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry,
            instructions: None,
        }
    }

    /// Attach instructions text to advertise in the initialize result
    pub fn with_instructions(mut self, text: impl Into<String>) -> Self {
        self.instructions = Some(text.into());
        self
    }

    /// Serve on stdin/stdout until the host closes the channel
    pub async fn start(self) -> Result<()> {
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve newline-delimited JSON-RPC frames on an arbitrary channel
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut frames_in = FramedRead::new(reader, LinesCodec::new());
        let mut frames_out = FramedWrite::new(writer, LinesCodec::new());

        tracing::info!("MCP server listening");

        while let Some(line) = frames_in.next().await {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_line(&line).await {
                frames_out.send(serde_json::to_string(&response)?).await?;
            }
        }

        tracing::info!("Input channel closed, shutting down");
        Ok(())
    }

    /// Parse one frame and produce at most one response
    ///
    /// A frame that is not JSON gets a parse error with a null id; JSON that
    /// is not a request object gets an invalid-request error.
    async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let value: serde_json::Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Discarding unparseable frame: {}", e);
                return Some(JsonRpcResponse::error(
                    serde_json::Value::Null,
                    JsonRpcError::parse_error(),
                ));
            }
        };

        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!("Frame is not a JSON-RPC request: {}", e);
                return Some(JsonRpcResponse::error(
                    serde_json::Value::Null,
                    JsonRpcError::invalid_request(),
                ));
            }
        };

        self.handle_request(request).await
    }

    /// Route a request to its handler; notifications produce no response
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let Some(id) = request.id else {
            tracing::debug!("Ignoring notification: {}", request.method);
            return None;
        };

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(id, request.params),
            "ping" => JsonRpcResponse::success(id, serde_json::json!({})),
            "tools/list" => JsonRpcResponse::success(
                id,
                ListToolsResult {
                    tools: self.registry.list_schemas(),
                },
            ),
            "tools/call" => self.handle_tools_call(id, request.params).await,
            method => JsonRpcResponse::error(id, JsonRpcError::method_not_found(method)),
        };

        Some(response)
    }

    fn handle_initialize(
        &self,
        id: serde_json::Value,
        params: Option<serde_json::Value>,
    ) -> JsonRpcResponse {
        if let Some(params) = params {
            match serde_json::from_value::<InitializeParams>(params) {
                Ok(init) => {
                    let client = init
                        .client_info
                        .map(|c| format!("{} {}", c.name, c.version))
                        .unwrap_or_else(|| "unknown client".to_string());
                    tracing::info!(
                        "Initializing for {} (requested protocol {})",
                        client,
                        init.protocol_version
                    );
                }
                Err(e) => tracing::debug!("Unreadable initialize params: {}", e),
            }
        }

        JsonRpcResponse::success(
            id,
            InitializeResult {
                protocol_version: PROTOCOL_VERSION.to_string(),
                capabilities: ServerCapabilities {
                    tools: Some(ToolsCapability {
                        list_changed: false,
                    }),
                },
                server_info: ServerInfo {
                    name: "hyperfocus".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
                instructions: self.instructions.clone(),
            },
        )
    }

    async fn handle_tools_call(
        &self,
        id: serde_json::Value,
        params: Option<serde_json::Value>,
    ) -> JsonRpcResponse {
        let params = match params {
            Some(params) => params,
            None => {
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params("Missing params for tools/call"),
                )
            }
        };

        let params: CallToolParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(e) => {
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params(format!("Invalid tools/call params: {}", e)),
                )
            }
        };

        let Some(tool) = self.registry.get(&params.name) else {
            return JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_params(format!("Unknown tool: {}", params.name)),
            );
        };

        tracing::debug!("Calling tool: {}", params.name);

        match tool.execute(params.arguments).await {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(e) if e.downcast_ref::<InvalidArguments>().is_some() => {
                tracing::warn!("Tool {} rejected arguments: {:#}", params.name, e);
                JsonRpcResponse::error(id, JsonRpcError::invalid_params(format!("{:#}", e)))
            }
            Err(e) => {
                tracing::error!("Tool {} failed: {:#}", params.name, e);
                JsonRpcResponse::error(id, JsonRpcError::internal_error(format!("{:#}", e)))
            }
        }
    }
}
