use super::*;
use crate::test_support::{client, event_json, invitation_json};

fn pending() -> Invitation {
    serde_json::from_value(invitation_json(7, "Jane", Some("jane@example.com"), "NO_RESPONSE")).unwrap()
}

fn info_json(status: &str) -> serde_json::Value {
    serde_json::json!({
        "event": event_json(3, "Party"),
        "invitation": invitation_json(7, "Jane", Some("jane@example.com"), status),
    })
}

// =============================================================
// Pure helpers
// =============================================================

#[test]
fn optimistic_update_sets_status_and_time() {
    let mut inv = pending();
    apply_optimistic(&mut inv, RsvpStatus::Maybe, "2025-06-01T10:00:00Z");
    assert_eq!(inv.rsvp_status, RsvpStatus::Maybe);
    assert_eq!(inv.responded_at.as_deref(), Some("2025-06-01T10:00:00Z"));
}

#[test]
fn matching_status_is_confirmed() {
    let mut local = pending();
    apply_optimistic(&mut local, RsvpStatus::Yes, "now");
    let server: Invitation = serde_json::from_value(invitation_json(7, "Jane", None, "YES")).unwrap();

    let outcome = reconcile(&local, &server);
    assert_eq!(outcome, RsvpOutcome::Confirmed(server));
    assert_eq!(outcome.message(), None);
}

#[test]
fn differing_status_adopts_server() {
    let mut local = pending();
    apply_optimistic(&mut local, RsvpStatus::Yes, "now");

    let outcome = reconcile(&local, &pending());
    assert_eq!(outcome.server_state().map(|i| i.rsvp_status), Some(RsvpStatus::NoResponse));
    assert_eq!(outcome.message(), Some(RSVP_NOT_CONFIRMED));
}

#[test]
fn updated_message_uses_wire_name() {
    assert_eq!(updated_message(RsvpStatus::Yes), "RSVP updated to: YES");
}

// =============================================================
// submit / confirm
// =============================================================

#[tokio::test]
async fn submit_updates_without_refetch() {
    let (api, transport, _) = client();
    transport.push_json(&invitation_json(7, "Jane", None, "YES"));

    let updated = submit(&api, &pending(), RsvpStatus::Yes, "2025-06-01T10:00:00Z").await.unwrap();

    assert_eq!(updated.rsvp_status, RsvpStatus::Yes);
    assert_eq!(updated.responded_at.as_deref(), Some("2025-06-01T10:00:00Z"));
    assert_eq!(transport.request_count(), 1);
    let request = transport.last_request();
    assert!(request.url.ends_with("/invitations/respond"));
    let body = request.body.unwrap();
    assert_eq!(body["invitationId"], "7");
    assert_eq!(body["rsvpStatus"], "YES");
}

#[tokio::test]
async fn submit_accepts_non_json_success() {
    let (api, transport, _) = client();
    transport.push_status(200, "ok");

    let updated = submit(&api, &pending(), RsvpStatus::No, "t").await.unwrap();
    assert_eq!(updated.rsvp_status, RsvpStatus::No);
}

#[tokio::test]
async fn submit_failure_leaves_state() {
    let (api, transport, _) = client();
    transport.push_status(500, "Error updating RSVP");

    let inv = pending();
    assert!(submit(&api, &inv, RsvpStatus::Yes, "t").await.is_err());
    assert_eq!(inv.rsvp_status, RsvpStatus::NoResponse);
}

#[tokio::test]
async fn confirm_reports_divergence() {
    let (api, transport, _) = client();
    transport.push_json(&info_json("NO"));

    let mut local = pending();
    apply_optimistic(&mut local, RsvpStatus::Yes, "t");
    let lookup = InvitationLookup::new(3, "Jane", Some("jane@example.com"));

    let outcome = confirm(&api, &lookup, &local).await;
    assert!(matches!(outcome, RsvpOutcome::Diverged(ref inv) if inv.rsvp_status == RsvpStatus::No));
    assert!(transport.last_request().url.ends_with("/invitations/info"));
}

#[tokio::test]
async fn confirm_fetch_failure_is_unverified() {
    let (api, transport, _) = client();
    transport.push_failure("offline");

    let lookup = InvitationLookup::new(3, "Jane", None);
    assert_eq!(confirm(&api, &lookup, &pending()).await, RsvpOutcome::Unverified);
}
