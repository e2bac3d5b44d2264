//! Fetch content tool definition.
//!
//! Asks the delegate to download a webpage and return its readable text.

use serde_json::{Map, Value, json};
use tracing::{info, instrument};

use super::required_str;
use crate::domains::delegate::WebDelegate;
use crate::domains::tools::{ToolDescriptor, ToolError};

/// Parameters for the fetch content tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchContentParams {
    /// The webpage URL to fetch content from.
    pub url: String,
}

impl FetchContentParams {
    /// Build validated parameters.
    pub fn new(url: impl Into<String>) -> Result<Self, ToolError> {
        let url = url.into();
        if url.is_empty() {
            return Err(ToolError::invalid_arguments("'url' parameter is required"));
        }
        Ok(Self { url })
    }

    /// Parse parameters from a tool call's argument map.
    pub fn from_arguments(arguments: &Map<String, Value>) -> Result<Self, ToolError> {
        Self::new(required_str(arguments, "url")?)
    }
}

/// Fetch content tool - retrieves a webpage through the delegate.
pub struct FetchContentTool;

impl FetchContentTool {
    /// Tool name as registered in the catalog.
    pub const NAME: &'static str = "fetch_content";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch and parse content from a webpage";

    /// Execute the fetch. The URL is passed through untouched.
    #[instrument(skip_all, fields(url = %params.url))]
    pub async fn execute(
        params: &FetchContentParams,
        delegate: &dyn WebDelegate,
    ) -> Result<String, ToolError> {
        info!("Fetch content tool called");
        Ok(delegate.fetch_content(&params.url).await?)
    }

    /// Create the catalog entry for this tool.
    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor {
            name: Self::NAME,
            description: Self::DESCRIPTION,
            parameters: json!({
                "type": "object",
                "properties": {
                    "url": {
                        "type": "string",
                        "description": "The webpage URL to fetch content from"
                    }
                },
                "required": ["url"]
            }),
        }
    }
}
