//! Errors surfaced by [`crate::ApiClient`] calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use http::StatusCode;

use crate::http::TransportError;

/// Failure of a single API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a non-2xx status.
    #[error("server returned {status}")]
    Status { status: StatusCode, body: String },

    /// A 2xx body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The stored token cannot be sent as a header value.
    #[error("stored token is not a valid header value")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),
}

impl ApiError {
    /// HTTP status of the failed call, if the server answered.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body of a non-2xx answer.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Whether this failure was an authorization rejection.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// The `message` field of a JSON error body, when the server sent one.
    #[must_use]
    pub fn server_message(&self) -> Option<String> {
        let body = self.body()?;
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        let message = value.get("message")?.as_str()?.trim();
        if message.is_empty() {
            None
        } else {
            Some(message.to_owned())
        }
    }

    /// Message to show a user: the server's own message, else `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or_else(|| fallback.to_owned())
    }
}
