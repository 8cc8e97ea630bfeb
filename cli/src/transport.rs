//! `reqwest` implementation of the core HTTP transport.

use async_trait::async_trait;
use evonto::http::{HttpRequest, HttpResponse, Transport, TransportError};

/// Native HTTPS transport (rustls).
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("evonto-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.client.request(request.method, &request.url).headers(request.headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| TransportError::new(e.to_string()))?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(|e| TransportError::new(e.to_string()))?;

        Ok(HttpResponse { status, headers, body })
    }
}
