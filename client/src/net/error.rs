//! Error type for REST calls and the user-facing message rule.
//!
//! ERROR HANDLING
//! ==============
//! Every backend failure is reduced at the call site to one string: the
//! payload's `error` field, else its `detail` field, else a per-form default.
//! Network and validation failures are not distinguished in the UI.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("backend returned {status}")]
    Status { status: u16, message: Option<String> },
    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// HTTP is only wired up in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, pulling the message out of the response body.
    pub fn from_status(status: u16, body: &serde_json::Value) -> Self {
        Self::Status { status, message: extract_error_message(body) }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message to display, falling back to `fallback` when the backend gave none.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Pull `error`, then `detail`, out of a backend error payload.
///
/// Empty strings count as absent; a non-string `detail` (e.g. a list of field
/// errors) is ignored.
pub fn extract_error_message(body: &serde_json::Value) -> Option<String> {
    ["error", "detail"].into_iter().find_map(|key| {
        body.get(key)
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .map(str::to_owned)
    })
}
