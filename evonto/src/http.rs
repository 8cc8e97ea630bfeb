//! Transport seam between the API client and a concrete HTTP stack.
//!
//! The browser client plugs in `gloo-net`, the CLI plugs in `reqwest`. A
//! transport only moves bytes: it must not interpret status codes, retry,
//! or touch the session. That all happens in [`crate::api::ApiClient`].

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use async_trait::async_trait;
use http::header::{AUTHORIZATION, HeaderMap};
use http::{Method, StatusCode};

/// Failure before an HTTP response was received (DNS, connect, CORS, ...).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// One outgoing request, fully resolved against the base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    /// JSON body, sent with `Content-Type: application/json`.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    #[must_use]
    pub fn new(method: Method, url: String) -> Self {
        Self { method, url, headers: HeaderMap::new(), body: None }
    }

    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// The `Authorization` header as sent, if any.
    #[must_use]
    pub fn authorization(&self) -> Option<&str> {
        self.headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok())
    }
}

/// A received response with its body already read as text.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self { status, headers: HeaderMap::new(), body: body.into() }
    }

    /// Rotated token carried in the `authorization` response header.
    #[must_use]
    pub fn rotated_token(&self) -> Option<&str> {
        self.headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .filter(|token| !token.is_empty())
    }

    /// The body as JSON; a body that is not JSON becomes a JSON string.
    #[must_use]
    pub fn body_as_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap_or_else(|_| serde_json::Value::String(self.body.clone()))
    }
}

/// Sends a single request and reads the whole response.
///
/// Futures are not `Send`: the browser transport runs on the single WASM
/// thread.
#[async_trait(?Send)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns [`TransportError`] only when no response was received; any
    /// status code, including 4xx/5xx, is a successful send.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
