//! Wire DTOs for the Evonto REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the server's camelCase JSON. Timestamps stay as the
//! server's ISO-8601 local date-time strings; the client only displays them
//! and never does arithmetic on them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// An event as returned by the events endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Server-assigned identifier.
    pub event_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Local date-time string, e.g. `"2025-06-01T18:00:00"`.
    pub start_date_time: String,
    pub end_date_time: String,
    #[serde(default)]
    pub location: Option<String>,
    /// Username of the event owner.
    pub created_by_username: String,
    pub created_at: String,
}

/// Guest response state for an invitation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RsvpStatus {
    Yes,
    No,
    Maybe,
    /// The guest has not answered yet.
    #[default]
    NoResponse,
}

impl RsvpStatus {
    /// Wire spelling (`"YES"`, `"NO_RESPONSE"`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "YES",
            Self::No => "NO",
            Self::Maybe => "MAYBE",
            Self::NoResponse => "NO_RESPONSE",
        }
    }

    /// Parse a status case-insensitively, the way the server accepts it.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "YES" => Some(Self::Yes),
            "NO" => Some(Self::No),
            "MAYBE" => Some(Self::Maybe),
            "NO_RESPONSE" => Some(Self::NoResponse),
            _ => None,
        }
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A guest invitation for one event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub invitation_id: i64,
    #[serde(default)]
    pub event_id: Option<i64>,
    pub guest_name: String,
    #[serde(default)]
    pub guest_email: Option<String>,
    #[serde(default)]
    pub guest_phone: Option<String>,
    /// Absent or `null` on the wire means the guest has not responded.
    #[serde(default, deserialize_with = "deserialize_rsvp_status")]
    pub rsvp_status: RsvpStatus,
    pub invitation_sent_at: String,
    #[serde(default)]
    pub responded_at: Option<String>,
}

fn deserialize_rsvp_status<'de, D>(deserializer: D) -> Result<RsvpStatus, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<RsvpStatus>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response of `GET /events/{id}/details`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventDetails {
    pub event: Event,
    #[serde(default)]
    pub invitations: Vec<Invitation>,
}

/// Response of `POST /invitations/info`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvitationWithEvent {
    pub event: Event,
    pub invitation: Invitation,
}

/// Body of `POST /register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /events`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub start_date_time: String,
    pub end_date_time: String,
    pub location: String,
}

// The invitation endpoints read their body as a string map, so ids travel
// as decimal strings.

/// Body of `POST /invitations/send`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendInvitation {
    pub event_id: String,
    pub guest_name: String,
    pub guest_email: Option<String>,
    pub guest_phone: Option<String>,
}

/// Body of `POST /invitations/info`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationLookup {
    pub event_id: String,
    pub guest_name: String,
    pub guest_email: Option<String>,
}

impl InvitationLookup {
    /// Build a lookup for a guest of `event_id`.
    #[must_use]
    pub fn new(event_id: i64, guest_name: &str, guest_email: Option<&str>) -> Self {
        Self {
            event_id: event_id.to_string(),
            guest_name: guest_name.to_owned(),
            guest_email: guest_email.map(str::to_owned),
        }
    }
}

/// Body of `POST /invitations/respond`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpUpdate {
    pub invitation_id: String,
    pub rsvp_status: RsvpStatus,
}

/// Body of `POST /invitations/list`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRef {
    pub event_id: String,
}

/// Body of `DELETE /invitations/delete`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationRef {
    pub invitation_id: String,
}
