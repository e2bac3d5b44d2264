//! DuckDuckGo Gateway Library
//!
//! An HTTP façade exposing web search and webpage fetching as REST tools for
//! a chatbot client. Both capabilities are delegated to the DuckDuckGo MCP
//! server; the gateway only validates, dispatches and wraps results.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the [`Gateway`] and its HTTP transport
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the tool catalog, argument validation and the outcome envelope
//!   - **delegate**: the external search/fetch capability
//!
//! # Example
//!
//! ```rust,no_run
//! use duckduckgo_gateway::core::{Config, Gateway, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let gateway = Gateway::new(config.clone());
//!     TransportService::new(config.transport).run(gateway).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, Gateway, Result};
