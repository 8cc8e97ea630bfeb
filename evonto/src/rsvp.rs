//! Guest RSVP: optimistic update, then reconciliation against the server.
//!
//! DESIGN
//! ======
//! A successful `/invitations/respond` is applied to the displayed
//! invitation immediately ([`submit`]). A follow-up [`confirm`] re-fetches
//! the invitation and reports whether the server agrees; on disagreement the
//! server state wins.

#[cfg(test)]
#[path = "rsvp_test.rs"]
mod rsvp_test;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{Invitation, InvitationLookup, RsvpStatus};

pub const RSVP_FAILED: &str = "Failed to update RSVP.";
pub const RSVP_NOT_CONFIRMED: &str = "Your RSVP could not be confirmed by the server.";

/// Statuses a guest can choose.
pub const CHOICES: [RsvpStatus; 3] = [RsvpStatus::Yes, RsvpStatus::No, RsvpStatus::Maybe];

#[must_use]
pub fn updated_message(status: RsvpStatus) -> String {
    format!("RSVP updated to: {status}")
}

/// Record `status` locally as if the server had already confirmed it.
pub fn apply_optimistic(invitation: &mut Invitation, status: RsvpStatus, now: &str) {
    invitation.rsvp_status = status;
    invitation.responded_at = Some(now.to_owned());
}

/// Result of comparing the optimistic state with the server's.
#[derive(Clone, Debug, PartialEq)]
pub enum RsvpOutcome {
    /// The server holds the same status; carries the server copy.
    Confirmed(Invitation),
    /// The server holds a different status; carries the server copy.
    Diverged(Invitation),
    /// The re-fetch failed; the optimistic state stays on screen.
    Unverified,
}

impl RsvpOutcome {
    /// The invitation to display after reconciliation, if it changed.
    #[must_use]
    pub fn server_state(&self) -> Option<&Invitation> {
        match self {
            Self::Confirmed(inv) | Self::Diverged(inv) => Some(inv),
            Self::Unverified => None,
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        matches!(self, Self::Diverged(_)).then_some(RSVP_NOT_CONFIRMED)
    }
}

#[must_use]
pub fn reconcile(local: &Invitation, server: &Invitation) -> RsvpOutcome {
    if local.rsvp_status == server.rsvp_status {
        RsvpOutcome::Confirmed(server.clone())
    } else {
        RsvpOutcome::Diverged(server.clone())
    }
}

/// Send the response and return the optimistically updated invitation.
///
/// # Errors
///
/// Propagates the [`ApiError`]; `invitation` is left untouched.
pub async fn submit<T: Transport>(
    client: &ApiClient<T>,
    invitation: &Invitation,
    status: RsvpStatus,
    now: &str,
) -> Result<Invitation, ApiError> {
    let echo = client.respond_to_invitation(invitation.invitation_id, status).await?;
    tracing::info!(invitation_id = invitation.invitation_id, %status, echoed = echo.is_some(), "rsvp submitted");

    let mut updated = invitation.clone();
    apply_optimistic(&mut updated, status, now);
    Ok(updated)
}

/// Re-fetch the invitation and compare it with the optimistic copy.
pub async fn confirm<T: Transport>(
    client: &ApiClient<T>,
    lookup: &InvitationLookup,
    local: &Invitation,
) -> RsvpOutcome {
    match client.invitation_info(lookup).await {
        Ok(fetched) => {
            let outcome = reconcile(local, &fetched.invitation);
            if let RsvpOutcome::Diverged(server) = &outcome {
                tracing::warn!(
                    invitation_id = local.invitation_id,
                    local = %local.rsvp_status,
                    server = %server.rsvp_status,
                    "rsvp diverged from server"
                );
            }
            outcome
        }
        Err(e) => {
            tracing::warn!(invitation_id = local.invitation_id, error = %e, "rsvp reconciliation skipped");
            RsvpOutcome::Unverified
        }
    }
}
