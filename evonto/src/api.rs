//! REST client for the Evonto API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every call goes through [`ApiClient::send`], which plays the role of the
//! request/response interceptors:
//!
//! - outgoing: the stored token is attached verbatim as `Authorization`;
//! - incoming: an `authorization` response header rotates the stored token
//!   (and, per [`crate::ProfileCapture`], replaces the cached profile with
//!   the response body);
//! - any 401 clears the session before the error reaches the caller.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here retries. Callers receive [`ApiError`] and decide what to
//! show; the only side effects on failure are the 401 logout and the logout
//! performed by [`ApiClient::validate_token`].

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use http::header::AUTHORIZATION;
use http::{HeaderValue, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::session::{SessionStore, UserProfile};
use crate::types::{
    Event, EventDetails, EventRef, Invitation, InvitationLookup, InvitationRef, InvitationWithEvent, LoginRequest,
    NewEvent, RegisterRequest, RsvpStatus, RsvpUpdate, SendInvitation,
};

/// Prefix of a `/check-token` body that accepts the token.
pub const TOKEN_VALID_MARKER: &str = "Token is valid for user:";

/// Outcome of asking the server about the stored token.
#[derive(Debug)]
pub enum TokenCheck {
    /// No token stored; the server was not contacted.
    Missing,
    Valid { username: String },
    /// The server answered and rejected the token.
    Invalid,
    /// The server could not be reached or sent an unreadable answer.
    Unreachable(ApiError),
}

impl TokenCheck {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}

/// Configured API client sharing one [`SessionStore`] with the rest of the app.
pub struct ApiClient<T> {
    transport: T,
    config: ApiConfig,
    session: Arc<SessionStore>,
}

impl<T> std::fmt::Debug for ApiClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("config", &self.config).finish_non_exhaustive()
    }
}

impl<T: Transport> ApiClient<T> {
    #[must_use]
    pub fn new(transport: T, config: ApiConfig, session: Arc<SessionStore>) -> Self {
        Self { transport, config, session }
    }

    #[must_use]
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issue one request through the interceptors.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when no response arrived,
    /// [`ApiError::Status`] for any non-2xx answer, and
    /// [`ApiError::InvalidHeader`] if the stored token cannot be sent.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<HttpResponse, ApiError> {
        let mut request = HttpRequest::new(method, self.config.url(path));
        request.body = body;
        if let Some(token) = self.session.token() {
            let mut value = HeaderValue::from_str(&token)?;
            value.set_sensitive(true);
            request.headers.insert(AUTHORIZATION, value);
        }

        tracing::debug!(method = %request.method, path, "api request");
        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(path, error = %e, "api request failed");
                return Err(e.into());
            }
        };
        tracing::debug!(path, status = response.status.as_u16(), "api response");

        self.capture_rotated_token(path, &response);

        if response.status == StatusCode::UNAUTHORIZED {
            tracing::warn!(path, "authentication error, logging out");
            self.session.logout();
        }
        if !response.status.is_success() {
            return Err(ApiError::Status { status: response.status, body: response.body });
        }
        Ok(response)
    }

    fn capture_rotated_token(&self, path: &str, response: &HttpResponse) {
        let Some(token) = response.rotated_token() else {
            return;
        };
        let user = self
            .config
            .captures_profile_from(path)
            .then(|| UserProfile::new(response.body_as_json()));
        let stored = match user {
            Some(user) => self.session.establish(token, user),
            None => self.session.rotate_token(token, None),
        };
        if let Err(e) = stored {
            tracing::warn!(path, error = %e, "failed to persist rotated token");
        }
    }

    async fn fetch_json<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<R, ApiError> {
        let response = self.send(method, path, body).await?;
        Ok(serde_json::from_str(&response.body)?)
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// `POST /register`. Returns the response body as JSON.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the call.
    pub async fn register(&self, request: &RegisterRequest) -> Result<serde_json::Value, ApiError> {
        let response = self.send(Method::POST, "/register", Some(to_body(request)?)).await?;
        Ok(response.body_as_json())
    }

    /// `POST /login`. The session is established by the rotated-token
    /// header on the response, not by this method.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the call.
    pub async fn login(&self, request: &LoginRequest) -> Result<serde_json::Value, ApiError> {
        let response = self.send(Method::POST, "/login", Some(to_body(request)?)).await?;
        if response.rotated_token().is_none() {
            tracing::warn!("login succeeded without an authorization header; session not established");
        }
        Ok(response.body_as_json())
    }

    /// `GET /ping`; any 2xx means the server is up.
    ///
    /// # Errors
    ///
    /// Returns an error if the server is unreachable or answers non-2xx.
    pub async fn ping(&self) -> Result<(), ApiError> {
        self.send(Method::GET, "/ping", None).await.map(|_| ())
    }

    /// Ask the server whether the stored token is valid, without logging
    /// out on rejection (a 401 still clears the session via [`Self::send`]).
    pub async fn check_token(&self) -> TokenCheck {
        if self.session.token().is_none() {
            return TokenCheck::Missing;
        }
        match self.send(Method::POST, "/check-token", None).await {
            Ok(response) => {
                let body = response.body_as_json();
                match body.as_str().and_then(|text| text.strip_prefix(TOKEN_VALID_MARKER)) {
                    Some(username) => TokenCheck::Valid { username: username.trim().to_owned() },
                    None => TokenCheck::Invalid,
                }
            }
            Err(ApiError::Status { .. }) => TokenCheck::Invalid,
            Err(e) => TokenCheck::Unreachable(e),
        }
    }

    /// `true` only when the server accepts the stored token.
    ///
    /// Anything else logs the session out before returning `false`, except
    /// when no token is stored (no network call, no mutation).
    pub async fn validate_token(&self) -> bool {
        match self.check_token().await {
            TokenCheck::Missing => false,
            TokenCheck::Valid { .. } => true,
            rejected => {
                tracing::warn!(reason = ?rejected, "token validation failed, logging out");
                self.session.logout();
                false
            }
        }
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    /// `GET /events/my`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the call or body decoding.
    pub async fn my_events(&self) -> Result<Vec<Event>, ApiError> {
        self.fetch_json(Method::GET, "/events/my", None).await
    }

    /// `POST /events`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the call or body decoding.
    pub async fn create_event(&self, event: &NewEvent) -> Result<Event, ApiError> {
        self.fetch_json(Method::POST, "/events", Some(to_body(event)?)).await
    }

    /// `DELETE /events/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the call.
    pub async fn delete_event(&self, event_id: i64) -> Result<(), ApiError> {
        self.send(Method::DELETE, &format!("/events/{event_id}"), None).await.map(|_| ())
    }

    /// `GET /events/{id}/details`: the event plus its guest list.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the call or body decoding.
    pub async fn event_details(&self, event_id: i64) -> Result<EventDetails, ApiError> {
        self.fetch_json(Method::GET, &format!("/events/{event_id}/details"), None).await
    }

    // =========================================================================
    // INVITATIONS
    // =========================================================================

    /// `POST /invitations/send`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`]; a duplicate guest arrives as a 400.
    pub async fn send_invitation(&self, invitation: &SendInvitation) -> Result<Invitation, ApiError> {
        self.fetch_json(Method::POST, "/invitations/send", Some(to_body(invitation)?)).await
    }

    /// `POST /invitations/list` for one event.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the call or body decoding.
    pub async fn list_invitations(&self, event_id: i64) -> Result<Vec<Invitation>, ApiError> {
        let body = to_body(&EventRef { event_id: event_id.to_string() })?;
        self.fetch_json(Method::POST, "/invitations/list", Some(body)).await
    }

    /// `POST /invitations/info`: a guest's invitation plus its event.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`]; an unknown guest arrives as a 404.
    pub async fn invitation_info(&self, lookup: &InvitationLookup) -> Result<InvitationWithEvent, ApiError> {
        self.fetch_json(Method::POST, "/invitations/info", Some(to_body(lookup)?)).await
    }

    /// `POST /invitations/respond`.
    ///
    /// The HTTP success is the commit signal. The server's echo of the
    /// updated invitation is returned when it decodes, for reconciliation.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the call.
    pub async fn respond_to_invitation(
        &self,
        invitation_id: i64,
        status: RsvpStatus,
    ) -> Result<Option<Invitation>, ApiError> {
        let body = to_body(&RsvpUpdate { invitation_id: invitation_id.to_string(), rsvp_status: status })?;
        let response = self.send(Method::POST, "/invitations/respond", Some(body)).await?;
        Ok(serde_json::from_str(&response.body).ok())
    }

    /// `DELETE /invitations/delete`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the call.
    pub async fn delete_invitation(&self, invitation_id: i64) -> Result<(), ApiError> {
        let body = to_body(&InvitationRef { invitation_id: invitation_id.to_string() })?;
        self.send(Method::DELETE, "/invitations/delete", Some(body)).await.map(|_| ())
    }
}

fn to_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    Ok(serde_json::to_value(body)?)
}
