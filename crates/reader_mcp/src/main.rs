//! MCP Server Binary Entry Point
//!
//! This binary implements a JSON-RPC 2.0 server over stdin/stdout
//! following the Model Context Protocol (MCP) specification.

use std::io::{self, BufRead, Write};

use tokio::runtime::Runtime;

use reader_common::EXIT_CONFIG_ERROR;
use reader_config::Config;
use reader_core::Session;
use reader_mcp::McpServer;

fn main() {
    // Pick up a .env file if present (development convenience)
    let _ = dotenv::dotenv();

    // Initialize tracing to stderr only (stdout reserved for JSON-RPC)
    reader_common::telemetry::init_tracing(false, false);

    tracing::info!("Reader MCP server starting...");

    // The credential is required; without it the process must not serve
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };

    let session = match Session::new(&config) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("Failed to create Reader API client: {}", e);
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };

    let server = McpServer::new(session);

    // Create tokio runtime for async request handling
    let rt = Runtime::new().expect("Failed to create Tokio runtime");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut stdout_lock = stdout.lock();

    // Read requests from stdin line by line
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::error!("Error reading stdin: {}", e);
                break;
            }
        };

        // Skip empty lines
        if line.trim().is_empty() {
            continue;
        }

        tracing::debug!("Received: {}", line);

        // Parse JSON-RPC request
        let request: reader_mcp::JsonRpcRequest = match serde_json::from_str(&line) {
            Ok(req) => req,
            Err(e) => {
                tracing::error!("Failed to parse request: {}", e);
                let error_response = serde_json::json!({
                    "jsonrpc": "2.0",
                    "id": null,
                    "error": {
                        "code": -32700,
                        "message": format!("Parse error: {}", e)
                    }
                });
                if let Err(e) = writeln!(stdout_lock, "{}", error_response) {
                    tracing::error!("Failed to write error response: {}", e);
                    break;
                }
                if let Err(e) = stdout_lock.flush() {
                    tracing::error!("Failed to flush stdout: {}", e);
                    break;
                }
                continue;
            }
        };

        // Handle request asynchronously
        let response = rt.block_on(server.handle_request(request));

        // Write response if not None (notifications don't get responses)
        if let Some(resp) = response {
            let response_json = match serde_json::to_string(&resp) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to serialize response: {}", e);
                    continue;
                }
            };

            tracing::debug!("Sending: {}", response_json);

            if let Err(e) = writeln!(stdout_lock, "{}", response_json) {
                tracing::error!("Failed to write response: {}", e);
                break;
            }

            if let Err(e) = stdout_lock.flush() {
                tracing::error!("Failed to flush stdout: {}", e);
                break;
            }
        }
    }

    // Dropping the session here closes the pooled upstream connections
    tracing::info!("Reader MCP server shutting down");
}
