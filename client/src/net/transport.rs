//! `gloo-net` implementation of the core HTTP transport.
//!
//! Client-side (csr): real `fetch` calls via `gloo-net`.
//! Native builds (tests, tooling): a stub that fails every request, since
//! there is no browser to talk to.
//!
//! ERROR HANDLING
//! ==============
//! Only "no response at all" is a transport error. Any HTTP status, including
//! 4xx/5xx, is returned as a response so the core interceptors see it.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;
use evonto::http::{HttpRequest, HttpResponse, Transport, TransportError};
use http::Method;

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

fn transport_failed_message(method: &Method, url: &str, detail: &str) -> String {
    format!("{method} {url} failed: {detail}")
}

#[cfg(any(test, feature = "csr"))]
fn unsupported_method_message(method: &Method) -> String {
    format!("unsupported method: {method}")
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            send_fetch(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(TransportError::new(transport_failed_message(
                &request.method,
                &request.url,
                "no browser fetch available",
            )))
        }
    }
}

#[cfg(feature = "csr")]
async fn send_fetch(request: HttpRequest) -> Result<HttpResponse, TransportError> {
    use gloo_net::http::Request;
    use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};

    let fail = |detail: &dyn std::fmt::Display| {
        TransportError::new(transport_failed_message(&request.method, &request.url, &detail.to_string()))
    };

    let mut builder = match request.method {
        Method::GET => Request::get(&request.url),
        Method::POST => Request::post(&request.url),
        Method::PUT => Request::put(&request.url),
        Method::PATCH => Request::patch(&request.url),
        Method::DELETE => Request::delete(&request.url),
        ref other => return Err(TransportError::new(unsupported_method_message(other))),
    };
    for (name, value) in &request.headers {
        if let Ok(value) = value.to_str() {
            builder = builder.header(name.as_str(), value);
        }
    }
    let outgoing = match &request.body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| fail(&e))?;

    let response = outgoing.send().await.map_err(|e| fail(&e))?;

    let status = StatusCode::from_u16(response.status()).map_err(|e| fail(&e))?;
    let mut headers = HeaderMap::new();
    for (name, value) in response.headers().entries() {
        if let (Ok(name), Ok(value)) = (HeaderName::from_bytes(name.as_bytes()), HeaderValue::from_str(&value)) {
            headers.append(name, value);
        }
    }
    let body = response.text().await.map_err(|e| fail(&e))?;

    Ok(HttpResponse { status, headers, body })
}
