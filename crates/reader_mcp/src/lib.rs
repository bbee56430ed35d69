//! MCP (Model Context Protocol) server implementation
//!
//! This crate provides the JSON-RPC server that exposes the Reader
//! document list as a templated resource to an agent host.
//!
//! CRITICAL: stdout is reserved EXCLUSIVELY for JSON-RPC responses.
//! All logs (Info/Warn/Error) MUST go to stderr to avoid protocol corruption.

pub mod resources;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use reader_common::{ReaderError, Result};
use reader_core::Session;

/// Server name reported to the host.
pub const SERVER_NAME: &str = "reader-api";

/// MCP protocol revision this server speaks.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC request
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub method: String,
    pub params: Option<Value>,
}

/// JSON-RPC response
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error object
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    /// Convert ReaderError to a JSON-RPC error
    pub fn from_reader_error(err: &ReaderError) -> Self {
        let code = match err {
            ReaderError::Upstream(_) => 1001,
            ReaderError::Config(_) => 1002,
            ReaderError::ValidationError(_) => -32602, // Invalid params
            ReaderError::JsonError(_) => -32700,       // Parse error
            _ => -32603, // Internal error
        };

        let message = err.to_string();

        // Surface the upstream HTTP status when there is one
        let data = match err {
            ReaderError::Upstream(e) => e
                .status()
                .map(|status| json!({ "status": status.as_u16() })),
            _ => None,
        };

        Self { code, message, data }
    }
}

/// The MCP server: holds the one process-wide Reader session.
///
/// The session is injected at construction rather than held globally, so
/// tests can point the server at a mock upstream.
pub struct McpServer {
    session: Session,
}

impl McpServer {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Handle a single JSON-RPC request.
    ///
    /// Returns `None` for notifications, which get no response.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        tracing::info!(target: "mcp", method = %request.method, "Handling MCP request");

        if request.method.starts_with("notifications/") {
            return None;
        }

        let result = match request.method.as_str() {
            "initialize" => self.handle_initialize(),
            "ping" => Ok(json!({})),
            "resources/list" => Ok(json!({ "resources": [] })),
            "resources/templates/list" => Ok(resources::list_templates()),
            "resources/read" => resources::handle_read(&self.session, request.params).await,
            _ => Err(ReaderError::ValidationError(format!(
                "Unknown method: {}",
                request.method
            ))),
        };

        Some(match result {
            Ok(value) => JsonRpcResponse {
                jsonrpc: "2.0".to_string(),
                id: request.id,
                result: Some(value),
                error: None,
            },
            Err(e) => JsonRpcResponse {
                jsonrpc: "2.0".to_string(),
                id: request.id,
                result: None,
                error: Some(JsonRpcError::from_reader_error(&e)),
            },
        })
    }

    fn handle_initialize(&self) -> Result<Value> {
        Ok(json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "resources": {}
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION")
            }
        }))
    }
}
