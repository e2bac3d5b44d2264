//! Web search tool definition.
//!
//! Forwards a query to the delegate and returns its formatted result list.

use serde_json::{Map, Value, json};
use tracing::{info, instrument};

use super::required_str;
use crate::domains::delegate::WebDelegate;
use crate::domains::tools::{ToolDescriptor, ToolError};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the search tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Search query string.
    pub query: String,

    /// Maximum number of results to return.
    pub max_results: u32,
}

impl SearchParams {
    /// Result count used when the caller does not ask for one.
    pub const DEFAULT_MAX_RESULTS: u32 = 10;

    /// Build validated parameters.
    pub fn new(query: impl Into<String>, max_results: Option<u32>) -> Result<Self, ToolError> {
        let query = query.into();
        if query.is_empty() {
            return Err(ToolError::invalid_arguments("'query' parameter is required"));
        }
        Ok(Self {
            query,
            max_results: max_results.unwrap_or(Self::DEFAULT_MAX_RESULTS),
        })
    }

    /// Parse parameters from a tool call's argument map.
    pub fn from_arguments(arguments: &Map<String, Value>) -> Result<Self, ToolError> {
        let query = required_str(arguments, "query")?;

        let max_results = match arguments.get("max_results") {
            None | Some(Value::Null) => None,
            Some(value) => Some(
                value
                    .as_u64()
                    .and_then(|n| u32::try_from(n).ok())
                    .ok_or_else(|| {
                        ToolError::invalid_arguments(
                            "'max_results' parameter must be a non-negative integer",
                        )
                    })?,
            ),
        };

        Self::new(query, max_results)
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Search tool - runs a DuckDuckGo web search through the delegate.
pub struct SearchTool;

impl SearchTool {
    /// Tool name as registered in the catalog.
    pub const NAME: &'static str = "search";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search DuckDuckGo for web results";

    /// Execute the search.
    #[instrument(skip_all, fields(query = %params.query, max_results = params.max_results))]
    pub async fn execute(
        params: &SearchParams,
        delegate: &dyn WebDelegate,
    ) -> Result<String, ToolError> {
        info!("Search tool called");
        let results = delegate.search(&params.query, params.max_results).await?;
        Ok(results)
    }

    /// Create the catalog entry for this tool.
    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor {
            name: Self::NAME,
            description: Self::DESCRIPTION,
            parameters: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query string"
                    },
                    "max_results": {
                        "type": "integer",
                        "description": "Maximum number of results to return (default: 10)",
                        "default": SearchParams::DEFAULT_MAX_RESULTS
                    }
                },
                "required": ["query"]
            }),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
