//! Delegate error types.

use thiserror::Error;

/// Result type for delegate calls.
pub type DelegateResult<T> = Result<T, DelegateError>;

/// Errors raised at the delegate boundary.
///
/// The gateway never branches on these variants; they exist for diagnostics
/// and are flattened to text in the outcome envelope.
#[derive(Debug, Error)]
pub enum DelegateError {
    /// The delegate process could not be spawned or the MCP handshake failed.
    #[error("Failed to connect to delegate: {0}")]
    Connection(String),

    /// The request to the delegate failed at the protocol level.
    #[error("Delegate call '{tool}' failed: {message}")]
    Call { tool: String, message: String },

    /// The delegate ran the tool and reported an error.
    #[error("{0}")]
    Remote(String),

    /// The delegate did not answer within the configured limit.
    #[error("Delegate call '{tool}' timed out after {secs}s")]
    Timeout { tool: String, secs: u64 },
}

impl DelegateError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Create a call error for the given tool.
    pub fn call(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Call {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a remote tool error.
    pub fn remote(msg: impl Into<String>) -> Self {
        Self::Remote(msg.into())
    }
}
