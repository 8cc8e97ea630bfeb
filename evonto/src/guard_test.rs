use super::*;
use crate::session::UserProfile;
use crate::test_support::client;

// =============================================================
// GuardState
// =============================================================

#[test]
fn guard_starts_loading() {
    assert!(GuardState::default().is_loading());
    assert_eq!(GuardState::default().redirect_target(), None);
}

#[test]
fn only_unauthorized_redirects_to_login() {
    assert_eq!(GuardState::Unauthorized.redirect_target(), Some("/login"));
    assert_eq!(GuardState::Authorized.redirect_target(), None);
}

#[test]
fn from_validation_maps_bool() {
    assert_eq!(GuardState::from_validation(true), GuardState::Authorized);
    assert_eq!(GuardState::from_validation(false), GuardState::Unauthorized);
}

// =============================================================
// authorize
// =============================================================

#[tokio::test]
async fn authorize_without_token_skips_network() {
    let (api, transport, _) = client();

    assert_eq!(authorize(&api).await, GuardState::Unauthorized);
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn authorize_with_valid_token() {
    let (api, transport, session) = client();
    session.establish("tok", UserProfile::new(serde_json::json!({ "username": "a" }))).unwrap();
    transport.push_status(200, "Token is valid for user: a");

    assert_eq!(authorize(&api).await, GuardState::Authorized);
    assert_eq!(session.token().as_deref(), Some("tok"));
}

#[tokio::test]
async fn authorize_rejected_token_clears_session() {
    let (api, transport, session) = client();
    session.establish("tok", UserProfile::new(serde_json::json!({ "username": "a" }))).unwrap();
    transport.push_status(200, "Invalid token");

    let state = authorize(&api).await;

    assert_eq!(state, GuardState::Unauthorized);
    assert_eq!(state.redirect_target(), Some(LOGIN_PATH));
    assert_eq!(session.snapshot().user, None);
}

#[tokio::test]
async fn unreachable_server_unauthorizes() {
    let (api, transport, session) = client();
    session.establish("tok", UserProfile::new(serde_json::json!({}))).unwrap();
    transport.push_failure("offline");

    assert_eq!(authorize(&api).await, GuardState::Unauthorized);
    assert_eq!(session.token(), None);
}

#[tokio::test]
async fn any_401_then_guard_redirects_to_login() {
    let (api, transport, session) = client();
    session.establish("tok", UserProfile::new(serde_json::json!({ "username": "a" }))).unwrap();
    transport.push_status(401, "");

    assert!(api.my_events().await.is_err());
    assert_eq!(session.token(), None);
    assert_eq!(session.user(), None);

    let state = authorize(&api).await;
    assert_eq!(state.redirect_target(), Some("/login"));
    assert_eq!(transport.request_count(), 1);
}
