//! Error types shared by the hooks, the menu form, and their callers.
//!
//! ERROR HANDLING
//! ==============
//! Network failures are values, never panics: hooks record the message into
//! their state and, for mutations, hand the error back so the caller can
//! alert. Validation failures carry their user-facing alert text as
//! `Display`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A failed REST call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, aborted fetch).
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("request encoding failed: {0}")]
    Encode(String),
}

impl ApiError {
    /// Text stored in a hook's `error` field and shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Build a status error, falling back to a generic message when the
    /// backend body carried none.
    #[must_use]
    pub fn status(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("request failed with status {status}"));
        Self::Status { status, message }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Client-side validation failure in the menu form. No request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MenuFormError {
    #[error("Please enter a menu name.")]
    EmptyName,

    #[error("Please enter a valid price.")]
    InvalidPrice,
}
