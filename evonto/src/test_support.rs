//! Scripted transport and fixtures shared by unit tests.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use http::header::AUTHORIZATION;
use http::{HeaderValue, StatusCode};
use parking_lot::Mutex;

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::http::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::session::SessionStore;
use crate::storage::MemoryStorage;

pub const BASE_URL: &str = "https://api.test/api";

/// Replays queued responses in order and records every request it sees.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, TransportError>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl RecordingTransport {
    pub fn push(&self, response: HttpResponse) {
        self.responses.lock().push_back(Ok(response));
    }

    pub fn push_status(&self, status: u16, body: &str) {
        self.push(HttpResponse::new(StatusCode::from_u16(status).unwrap(), body));
    }

    pub fn push_json(&self, body: &serde_json::Value) {
        self.push(HttpResponse::new(StatusCode::OK, body.to_string()));
    }

    pub fn push_failure(&self, message: &str) {
        self.responses.lock().push_back(Err(TransportError::new(message)));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests.lock().last().cloned().unwrap()
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no scripted response")))
    }
}

/// A 200 response carrying a rotated token.
pub fn with_rotated_token(token: &str, body: &serde_json::Value) -> HttpResponse {
    let mut response = HttpResponse::new(StatusCode::OK, body.to_string());
    response.headers.insert(AUTHORIZATION, HeaderValue::from_str(token).unwrap());
    response
}

/// A client over fresh in-memory storage plus handles to its transport.
pub fn client() -> (ApiClient<RecordingTransport>, RecordingTransport, Arc<SessionStore>) {
    client_with(ApiConfig::new(BASE_URL))
}

pub fn client_with(config: ApiConfig) -> (ApiClient<RecordingTransport>, RecordingTransport, Arc<SessionStore>) {
    let transport = RecordingTransport::default();
    let session = Arc::new(SessionStore::new(Arc::new(MemoryStorage::new())));
    let client = ApiClient::new(transport.clone(), config, session.clone());
    (client, transport, session)
}

pub fn event_json(event_id: i64, title: &str) -> serde_json::Value {
    serde_json::json!({
        "eventId": event_id,
        "title": title,
        "description": "desc",
        "startDateTime": "2025-06-01T18:00:00",
        "endDateTime": "2025-06-01T23:00:00",
        "location": "Home",
        "createdByUsername": "a",
        "createdAt": "2025-05-01T10:00:00"
    })
}

pub fn invitation_json(invitation_id: i64, name: &str, email: Option<&str>, status: &str) -> serde_json::Value {
    serde_json::json!({
        "invitationId": invitation_id,
        "eventId": 3,
        "guestName": name,
        "guestEmail": email,
        "guestPhone": null,
        "rsvpStatus": status,
        "invitationSentAt": "2025-05-01T10:00:00",
        "respondedAt": null
    })
}
