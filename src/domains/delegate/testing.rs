//! Scripted delegate used by unit tests.

use std::sync::Mutex;

use super::{DelegateError, DelegateResult, WebDelegate};

/// A recorded delegate call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Search { query: String, max_results: u32 },
    FetchContent { url: String },
}

/// Delegate returning canned text, or failing with a fixed message.
pub struct ScriptedDelegate {
    failure: Option<String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedDelegate {
    /// A delegate whose calls all succeed.
    pub fn succeeding() -> Self {
        Self {
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A delegate whose calls all fail with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls received so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: RecordedCall, text: String) -> DelegateResult<String> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(message) => Err(DelegateError::remote(message.clone())),
            None => Ok(text),
        }
    }
}

#[async_trait::async_trait]
impl WebDelegate for ScriptedDelegate {
    async fn search(&self, query: &str, max_results: u32) -> DelegateResult<String> {
        self.answer(
            RecordedCall::Search {
                query: query.to_string(),
                max_results,
            },
            format!("Found {} results for '{}'", max_results, query),
        )
    }

    async fn fetch_content(&self, url: &str) -> DelegateResult<String> {
        self.answer(
            RecordedCall::FetchContent {
                url: url.to_string(),
            },
            format!("Content of {}", url),
        )
    }
}
