//! Tool data model.
//!
//! Descriptors are static catalog entries, invocations arrive with each
//! request, and every call ends in a [`ToolOutcome`] envelope.

use serde::{Deserialize, Serialize};

use super::ToolError;

/// Catalog entry describing a tool and its parameter schema.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    /// The name clients use to call the tool.
    pub name: &'static str,

    /// Description shown to clients.
    pub description: &'static str,

    /// JSON schema of the accepted arguments.
    pub parameters: serde_json::Value,
}

/// A request to run a named tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInvocation {
    /// The name of the tool to execute.
    pub name: String,

    /// The arguments to pass to the tool.
    #[serde(default)]
    pub arguments: serde_json::Map<String, serde_json::Value>,
}

impl ToolInvocation {
    /// Create an invocation from a name and a JSON object of arguments.
    ///
    /// Non-object values are treated as an empty argument map.
    pub fn new(name: impl Into<String>, arguments: serde_json::Value) -> Self {
        let arguments = match arguments {
            serde_json::Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// Uniform response envelope for every tool call.
///
/// Exactly one of `result` and `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutcome {
    pub success: bool,
    pub result: Option<String>,
    pub error: Option<String>,
    /// RFC 3339 time at which the outcome was built.
    pub timestamp: String,
}

impl ToolOutcome {
    /// Create a successful outcome.
    pub fn success(result: impl Into<String>) -> Self {
        Self {
            success: true,
            result: Some(result.into()),
            error: None,
            timestamp: now(),
        }
    }

    /// Create a failed outcome.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(error.into()),
            timestamp: now(),
        }
    }

    /// Wrap the result of a dispatch.
    pub fn from_result(result: &Result<String, ToolError>) -> Self {
        match result {
            Ok(text) => Self::success(text.as_str()),
            Err(e) => Self::failure(e.to_string()),
        }
    }

    /// Whether this outcome carries the same payload as `other`, ignoring time.
    pub fn same_payload(&self, other: &Self) -> bool {
        self.success == other.success && self.result == other.result && self.error == other.error
    }
}

/// Current time as an RFC 3339 string.
pub fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}
