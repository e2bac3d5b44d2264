//! The gateway: REST operations over the tool registry.
//!
//! `Gateway` is cheap to clone and holds no mutable state; every request is
//! handled independently. It reports request failures as
//! [`ToolError`] values which the transport folds into outcome envelopes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::delegate::{McpDelegate, WebDelegate};
use crate::domains::tools::{
    self, ToolDescriptor, ToolError, ToolInvocation, ToolRegistry,
    definitions::{FetchContentParams, FetchContentTool, SearchParams, SearchTool},
};

/// Liveness report returned by `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub timestamp: String,
    pub tools: Vec<String>,
}

/// Tool listing returned by `GET /tools/list`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolCatalog {
    pub success: bool,
    pub tools: &'static [ToolDescriptor],
}

/// The HTTP-facing gateway.
#[derive(Clone)]
pub struct Gateway {
    /// Server configuration.
    config: Arc<Config>,

    /// Catalog and dispatch.
    registry: ToolRegistry,
}

impl Gateway {
    /// Create a gateway backed by the DuckDuckGo MCP delegate.
    pub fn new(config: Config) -> Self {
        let delegate = Arc::new(McpDelegate::new(config.delegate.clone()));
        info!("Delegate: {}", delegate.command_line());
        Self::with_delegate(config, delegate)
    }

    /// Create a gateway over any delegate.
    pub fn with_delegate(config: Config, delegate: Arc<dyn WebDelegate>) -> Self {
        Self {
            config: Arc::new(config),
            registry: ToolRegistry::new(delegate),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Report liveness and the registered tools. Never contacts the delegate.
    pub fn health(&self) -> HealthReport {
        HealthReport {
            status: "healthy".to_string(),
            timestamp: tools::now(),
            tools: ToolRegistry::tool_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// List the static tool catalog.
    pub fn list_tools(&self) -> ToolCatalog {
        ToolCatalog {
            success: true,
            tools: ToolRegistry::descriptors(),
        }
    }

    /// Call a tool by name.
    #[instrument(skip_all, fields(tool = %invocation.name))]
    pub async fn call_tool(&self, invocation: &ToolInvocation) -> Result<String, ToolError> {
        self.registry.call_tool(invocation).await
    }

    /// Direct search, equivalent to calling the `search` tool with `arguments`.
    #[instrument(skip_all)]
    pub async fn search(&self, arguments: &Map<String, Value>) -> Result<String, ToolError> {
        info!("Search request: {}", serde_json::Value::Object(arguments.clone()));

        let result = match SearchParams::from_arguments(arguments) {
            Ok(params) => self.registry.search(&params).await,
            Err(e) => Err(e),
        };

        tools::log_failure(SearchTool::NAME, &result);
        result
    }

    /// Direct fetch, equivalent to calling the `fetch_content` tool with `arguments`.
    #[instrument(skip_all)]
    pub async fn fetch_content(&self, arguments: &Map<String, Value>) -> Result<String, ToolError> {
        info!("Fetch request: {}", serde_json::Value::Object(arguments.clone()));

        let result = match FetchContentParams::from_arguments(arguments) {
            Ok(params) => self.registry.fetch_content(&params).await,
            Err(e) => Err(e),
        };

        tools::log_failure(FetchContentTool::NAME, &result);
        result
    }

    /// Static service metadata for `GET /`.
    pub fn info(&self) -> Value {
        serde_json::json!({
            "name": self.name(),
            "description": self.config.server.description,
            "version": self.version(),
            "endpoints": {
                "health": "/health",
                "tools": "/tools/list",
                "call_tool": "/tools/call",
                "search": "/search",
                "fetch": "/fetch"
            },
            "tools": ToolRegistry::tool_names()
        })
    }
}
