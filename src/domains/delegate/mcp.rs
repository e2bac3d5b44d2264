//! MCP delegate backed by `duckduckgo-mcp-server`.
//!
//! The server is spawned as a child process on first use and driven over
//! stdio with the rmcp client. Its `search` and `fetch_content` tools are the
//! capabilities the gateway exposes. If the child goes away the connection is
//! dropped and the next call spawns a fresh one.

use std::sync::Arc;

use rmcp::{
    RoleClient, ServiceExt,
    model::{CallToolRequestParam, CallToolResult, JsonObject, RawContent},
    service::{RunningService, ServiceError},
    transport::{ConfigureCommandExt, TokioChildProcess},
};
use tokio::{process::Command, sync::RwLock};
use tracing::{debug, info, instrument, warn};

use super::{DelegateError, DelegateResult, WebDelegate};
use crate::core::config::DelegateConfig;

/// Remote tool names on the DuckDuckGo MCP server.
const REMOTE_SEARCH: &str = "search";
const REMOTE_FETCH_CONTENT: &str = "fetch_content";

type Client = Arc<RunningService<RoleClient, ()>>;

/// Delegate that forwards calls to an MCP server over a child process.
pub struct McpDelegate {
    config: DelegateConfig,
    client: RwLock<Option<Client>>,
}

impl McpDelegate {
    /// Create a delegate. No process is spawned until the first call.
    pub fn new(config: DelegateConfig) -> Self {
        Self {
            config,
            client: RwLock::new(None),
        }
    }

    /// Human readable command line, for logs.
    pub fn command_line(&self) -> String {
        std::iter::once(self.config.command.as_str())
            .chain(self.config.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Get the connected client, spawning the server if needed.
    ///
    /// A failed attempt leaves the slot empty so the next request tries again.
    async fn client(&self) -> DelegateResult<Client> {
        if let Some(client) = self.client.read().await.as_ref() {
            return Ok(client.clone());
        }

        let mut slot = self.client.write().await;
        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }

        let client = Arc::new(self.connect().await?);
        *slot = Some(client.clone());
        Ok(client)
    }

    /// Forget `stale` so the next call reconnects. A newer client is kept.
    async fn discard(&self, stale: &Client) {
        let mut slot = self.client.write().await;
        if slot.as_ref().is_some_and(|current| Arc::ptr_eq(current, stale)) {
            warn!("Delegate connection lost, will respawn on next call");
            *slot = None;
        }
    }

    async fn connect(&self) -> DelegateResult<RunningService<RoleClient, ()>> {
        info!("Spawning delegate: {}", self.command_line());

        let args = self.config.args.clone();
        let transport = TokioChildProcess::new(Command::new(&self.config.command).configure(
            move |cmd| {
                cmd.args(&args);
            },
        ))
        .map_err(|e| {
            DelegateError::connection(format!("failed to spawn '{}': {}", self.command_line(), e))
        })?;

        let client = ()
            .serve(transport)
            .await
            .map_err(|e| DelegateError::connection(e.to_string()))?;

        if let Some(peer) = client.peer_info() {
            info!(
                "Connected to delegate {} v{}",
                peer.server_info.name, peer.server_info.version
            );
        }

        Ok(client)
    }

    #[instrument(skip(self, arguments))]
    async fn call(&self, tool: &'static str, arguments: JsonObject) -> DelegateResult<String> {
        let client = self.client().await?;

        let request = CallToolRequestParam {
            name: tool.into(),
            arguments: Some(arguments),
        };

        let result = match self.config.timeout() {
            Some(limit) => tokio::time::timeout(limit, client.call_tool(request))
                .await
                .map_err(|_| DelegateError::Timeout {
                    tool: tool.to_string(),
                    secs: limit.as_secs(),
                })?,
            None => client.call_tool(request).await,
        };

        match result {
            Ok(result) => into_text(result),
            Err(e) => {
                // A JSON-RPC error reply means the server is still talking to us
                if !matches!(e, ServiceError::McpError(_)) {
                    self.discard(&client).await;
                }
                Err(DelegateError::call(tool, e.to_string()))
            }
        }
    }
}

#[async_trait::async_trait]
impl WebDelegate for McpDelegate {
    async fn search(&self, query: &str, max_results: u32) -> DelegateResult<String> {
        let mut arguments = JsonObject::new();
        arguments.insert("query".into(), query.into());
        arguments.insert("max_results".into(), max_results.into());
        self.call(REMOTE_SEARCH, arguments).await
    }

    async fn fetch_content(&self, url: &str) -> DelegateResult<String> {
        let mut arguments = JsonObject::new();
        arguments.insert("url".into(), url.into());
        self.call(REMOTE_FETCH_CONTENT, arguments).await
    }
}

/// Flatten a tool result into its text, turning `isError` results into errors.
fn into_text(result: CallToolResult) -> DelegateResult<String> {
    let text = result
        .content
        .iter()
        .filter_map(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n");

    if result.is_error.unwrap_or(false) {
        warn!("Delegate reported tool error: {}", text);
        return Err(DelegateError::remote(text));
    }

    debug!("Delegate returned {} bytes", text.len());
    Ok(text)
}
