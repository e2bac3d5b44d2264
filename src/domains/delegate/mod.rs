//! Delegate domain.
//!
//! The gateway performs no search or page extraction itself. Both
//! capabilities live behind [`WebDelegate`], which the tool definitions await
//! exactly once per request.
//!
//! - `mcp.rs` - the production delegate, an MCP client talking to
//!   `duckduckgo-mcp-server` over a spawned child process
//! - `error.rs` - delegate error types

mod error;
pub mod mcp;

#[cfg(test)]
pub mod testing;

pub use error::{DelegateError, DelegateResult};
pub use mcp::McpDelegate;

/// External web capability the gateway forwards to.
///
/// Implementations return plain text ready to be handed to the chatbot.
#[async_trait::async_trait]
pub trait WebDelegate: Send + Sync {
    /// Run a web search and return the formatted results.
    async fn search(&self, query: &str, max_results: u32) -> DelegateResult<String>;

    /// Fetch a webpage and return its readable text.
    async fn fetch_content(&self, url: &str) -> DelegateResult<String>;
}
