//! Tool definitions module.
//!
//! One file per tool. Each tool defines its name, description, parameter
//! schema, argument parsing and `execute()`.

pub mod fetch_content;
pub mod search;

pub use fetch_content::{FetchContentParams, FetchContentTool};
pub use search::{SearchParams, SearchTool};

use super::ToolError;

/// Read a required, non-empty string argument.
///
/// Absent, `null` and `""` all count as missing.
fn required_str<'a>(
    arguments: &'a serde_json::Map<String, serde_json::Value>,
    key: &str,
) -> Result<&'a str, ToolError> {
    match arguments.get(key) {
        None | Some(serde_json::Value::Null) => Err(missing(key)),
        Some(serde_json::Value::String(s)) if s.is_empty() => Err(missing(key)),
        Some(serde_json::Value::String(s)) => Ok(s),
        Some(_) => Err(ToolError::invalid_arguments(format!(
            "'{}' parameter must be a string",
            key
        ))),
    }
}

fn missing(key: &str) -> ToolError {
    ToolError::invalid_arguments(format!("'{}' parameter is required", key))
}
