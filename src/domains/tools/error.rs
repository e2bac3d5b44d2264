//! Tool-specific error types.

use thiserror::Error;

use crate::domains::delegate::DelegateError;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not in the catalog.
    #[error("Tool '{0}' not found")]
    NotFound(String),

    /// A required argument is missing or an argument has the wrong type.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The delegate failed while running the tool.
    #[error(transparent)]
    Delegate(#[from] DelegateError),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Whether the caller sent a bad request, as opposed to the delegate failing.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Delegate(_))
    }
}
