//! Error types and handling for the gateway.
//!
//! Request-level failures never reach this type: they are folded into the
//! outcome envelope. `Error` covers startup and serving failures.

use thiserror::Error;

use super::transport::TransportError;

/// A specialized Result type for gateway operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the gateway process.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The HTTP transport failed to bind or serve.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
