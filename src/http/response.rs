//! Wire payload for error replies.

use serde::{Deserialize, Serialize};

/// Body written for every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,

    /// The error's full text, present only when raw errors are echoed.
    #[serde(rename = "rawError", default, skip_serializing_if = "Option::is_none")]
    pub raw_error: Option<String>,
}

impl ErrorResponse {
    /// Body with only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            raw_error: None,
        }
    }

    /// Attach the error's full text as `rawError`.
    pub fn with_raw_error(mut self, raw_error: impl Into<String>) -> Self {
        self.raw_error = Some(raw_error.into());
        self
    }
}
