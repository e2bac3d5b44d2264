//! Configuration management for the gateway.
//!
//! Everything is read once at startup from environment variables, with a
//! `.env` file honoured when present.

use super::error::{Error, Result};
use super::transport::HttpConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// Main configuration structure for the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP listener configuration.
    pub transport: HttpConfig,

    /// How to reach the search/fetch delegate.
    pub delegate: DelegateConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// One-line description reported by the root endpoint.
    pub description: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the MCP delegate process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelegateConfig {
    /// Program to spawn.
    pub command: String,

    /// Arguments passed to the program.
    pub args: Vec<String>,

    /// Per-call timeout in seconds. Zero disables it.
    pub timeout_secs: u64,
}

impl DelegateConfig {
    /// The per-call timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for DelegateConfig {
    fn default() -> Self {
        Self {
            command: "uvx".to_string(),
            args: vec!["duckduckgo-mcp-server".to_string()],
            timeout_secs: 60,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "DuckDuckGo MCP Server".to_string(),
                description: "HTTP wrapper for DuckDuckGo MCP server providing web search capabilities".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: HttpConfig::default(),
            delegate: DelegateConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_PORT`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = HttpConfig::from_env();

        if let Ok(command) = std::env::var("MCP_DELEGATE_COMMAND") {
            config.delegate.command = command;
        }

        if let Ok(args) = std::env::var("MCP_DELEGATE_ARGS") {
            config.delegate.args = args.split_whitespace().map(str::to_string).collect();
        }

        if let Ok(timeout) = std::env::var("MCP_DELEGATE_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.delegate.timeout_secs = secs,
                Err(_) => warn!(
                    "Ignoring invalid MCP_DELEGATE_TIMEOUT_SECS={:?}, using {}s",
                    timeout, config.delegate.timeout_secs
                ),
            }
        }

        config
    }

    /// Check the configuration for values that cannot work.
    pub fn validate(&self) -> Result<()> {
        if self.transport.host.trim().is_empty() {
            return Err(Error::config("listen host must not be empty"));
        }
        if self.delegate.command.trim().is_empty() {
            return Err(Error::config("delegate command must not be empty"));
        }
        Ok(())
    }
}
