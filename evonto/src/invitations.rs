//! Guest invitation flow: form validation, duplicate pre-check, links.
//!
//! DESIGN
//! ======
//! The server is the authority on guest uniqueness. The client-side check
//! against a freshly fetched guest list is only a fast path: when the list
//! cannot be fetched the send still goes out, and a server-side conflict is
//! always reported as a duplicate.

#[cfg(test)]
#[path = "invitations_test.rs"]
mod invitations_test;

use std::fmt;

use http::StatusCode;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{Invitation, InvitationLookup, SendInvitation};

pub const INVITATION_SENT: &str = "Invitation sent successfully!";
pub const MISSING_INVITATION_PARAMS: &str = "Missing required invitation parameters.";
pub const LOAD_INVITATION_FAILED: &str = "Could not fetch invitation details.";

/// Which guest attribute collided with an existing invitation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DuplicateGuest {
    Name,
    Email,
    /// Reported by the server; the colliding field is unknown.
    Server,
}

impl fmt::Display for DuplicateGuest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "A guest with this name has already been invited.",
            Self::Email => "A guest with this email has already been invited.",
            Self::Server => "This guest has already been invited.",
        })
    }
}

/// Why an invitation was not sent.
#[derive(Debug, thiserror::Error)]
pub enum InviteError {
    #[error("Guest name is required.")]
    NameRequired,
    #[error("You must provide either an email or phone number.")]
    ContactRequired,
    #[error("{0}")]
    Duplicate(DuplicateGuest),
    #[error("Failed to send invitation.")]
    Api(#[source] ApiError),
}

/// Invite-guest form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InviteForm {
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
}

impl InviteForm {
    /// Validate and build the `/invitations/send` body.
    ///
    /// # Errors
    ///
    /// Returns [`InviteError::NameRequired`] or
    /// [`InviteError::ContactRequired`].
    pub fn to_request(&self, event_id: i64) -> Result<SendInvitation, InviteError> {
        let guest_name = self.guest_name.trim();
        if guest_name.is_empty() {
            return Err(InviteError::NameRequired);
        }
        let guest_email = non_blank(&self.guest_email);
        let guest_phone = non_blank(&self.guest_phone);
        if guest_email.is_none() && guest_phone.is_none() {
            return Err(InviteError::ContactRequired);
        }
        Ok(SendInvitation {
            event_id: event_id.to_string(),
            guest_name: guest_name.to_owned(),
            guest_email,
            guest_phone,
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Comparison key for guest names and emails.
#[must_use]
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// First collision of `candidate` with an already-invited guest.
#[must_use]
pub fn find_duplicate(existing: &[Invitation], candidate: &SendInvitation) -> Option<DuplicateGuest> {
    let name = normalize(&candidate.guest_name);
    let email = candidate.guest_email.as_deref().map(normalize).filter(|e| !e.is_empty());

    existing.iter().find_map(|inv| {
        if normalize(&inv.guest_name) == name {
            return Some(DuplicateGuest::Name);
        }
        let existing_email = inv.guest_email.as_deref().map(normalize);
        match (&email, existing_email) {
            (Some(new), Some(old)) if *new == old => Some(DuplicateGuest::Email),
            _ => None,
        }
    })
}

/// Whether a failed send means "guest already invited".
#[must_use]
pub fn is_duplicate_response(err: &ApiError) -> bool {
    err.status() == Some(StatusCode::BAD_REQUEST)
        || err.body().is_some_and(|body| body.to_lowercase().contains("already invited"))
}

/// Validate, pre-check against the current guest list, then send.
///
/// # Errors
///
/// Returns a validation error, [`InviteError::Duplicate`] from either the
/// pre-check or the server, or [`InviteError::Api`] for other failures.
pub async fn send_invitation<T: Transport>(
    client: &ApiClient<T>,
    event_id: i64,
    form: &InviteForm,
) -> Result<Invitation, InviteError> {
    let request = form.to_request(event_id)?;

    match client.list_invitations(event_id).await {
        Ok(existing) => {
            if let Some(duplicate) = find_duplicate(&existing, &request) {
                tracing::debug!(event_id, ?duplicate, "duplicate guest rejected before send");
                return Err(InviteError::Duplicate(duplicate));
            }
        }
        Err(e) => tracing::warn!(event_id, error = %e, "guest list unavailable, skipping duplicate pre-check"),
    }

    client.send_invitation(&request).await.map_err(|e| {
        if is_duplicate_response(&e) {
            InviteError::Duplicate(DuplicateGuest::Server)
        } else {
            tracing::error!(event_id, error = %e, "invitation failed");
            InviteError::Api(e)
        }
    })
}

/// Relative link a guest opens to view and answer an invitation.
#[must_use]
pub fn invitation_link(event_id: i64, guest_name: &str, guest_email: Option<&str>) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    query.append_pair("eventId", &event_id.to_string());
    query.append_pair("guestName", guest_name);
    if let Some(email) = guest_email.filter(|e| !e.is_empty()) {
        query.append_pair("guestEmail", email);
    }
    format!("/invitation?{}", query.finish())
}

/// Build an info lookup from invitation-link query parameters.
///
/// # Errors
///
/// Returns [`MISSING_INVITATION_PARAMS`] when the event id or guest name is
/// absent or the event id is not a number.
pub fn lookup_from_query(
    event_id: Option<&str>,
    guest_name: Option<&str>,
    guest_email: Option<&str>,
) -> Result<InvitationLookup, &'static str> {
    let event_id = event_id
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .ok_or(MISSING_INVITATION_PARAMS)?;
    let guest_name = guest_name.filter(|n| !n.trim().is_empty()).ok_or(MISSING_INVITATION_PARAMS)?;
    Ok(InvitationLookup::new(event_id, guest_name, guest_email.filter(|e| !e.is_empty())))
}
