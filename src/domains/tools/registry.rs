//! Tool Registry - the static catalog and dispatch for all tools.
//!
//! The catalog is built once and never changes for the life of the process.
//! Dispatch resolves a tool name, validates its arguments and awaits the
//! delegate.

use std::sync::{Arc, LazyLock};

use tracing::{error, info, warn};

use super::definitions::{FetchContentParams, FetchContentTool, SearchParams, SearchTool};
use super::{ToolDescriptor, ToolError, ToolInvocation};
use crate::domains::delegate::WebDelegate;

/// Every registered tool, in listing order.
static CATALOG: LazyLock<Vec<ToolDescriptor>> =
    LazyLock::new(|| vec![SearchTool::descriptor(), FetchContentTool::descriptor()]);

/// Tool registry - lists tools and dispatches calls to the delegate.
#[derive(Clone)]
pub struct ToolRegistry {
    delegate: Arc<dyn WebDelegate>,
}

impl ToolRegistry {
    /// Create a new tool registry over the given delegate.
    pub fn new(delegate: Arc<dyn WebDelegate>) -> Self {
        Self { delegate }
    }

    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        CATALOG.iter().map(|t| t.name).collect()
    }

    /// Get the full catalog.
    pub fn descriptors() -> &'static [ToolDescriptor] {
        &CATALOG
    }

    /// Dispatch a tool call by name.
    pub async fn call_tool(&self, invocation: &ToolInvocation) -> Result<String, ToolError> {
        info!(
            "Calling tool: {} with args: {}",
            invocation.name,
            serde_json::Value::Object(invocation.arguments.clone())
        );

        let result = match invocation.name.as_str() {
            SearchTool::NAME => match SearchParams::from_arguments(&invocation.arguments) {
                Ok(params) => self.search(&params).await,
                Err(e) => Err(e),
            },
            FetchContentTool::NAME => {
                match FetchContentParams::from_arguments(&invocation.arguments) {
                    Ok(params) => self.fetch_content(&params).await,
                    Err(e) => Err(e),
                }
            }
            _ => Err(ToolError::not_found(&invocation.name)),
        };

        log_failure(&invocation.name, &result);
        result
    }

    /// Run the search tool with already validated parameters.
    pub async fn search(&self, params: &SearchParams) -> Result<String, ToolError> {
        SearchTool::execute(params, self.delegate.as_ref()).await
    }

    /// Run the fetch content tool with already validated parameters.
    pub async fn fetch_content(&self, params: &FetchContentParams) -> Result<String, ToolError> {
        FetchContentTool::execute(params, self.delegate.as_ref()).await
    }
}

/// Log a failed call: client mistakes at warn, delegate failures at error.
pub(crate) fn log_failure(tool: &str, result: &Result<String, ToolError>) {
    match result {
        Err(e) if e.is_client_error() => warn!("Rejected call to tool {}: {}", tool, e),
        Err(e) => error!("Error calling tool {}: {}", tool, e),
        Ok(_) => {}
    }
}
