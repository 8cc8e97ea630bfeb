use clap::CommandFactory;
use reqwest::StatusCode;

use super::*;

// =============================================================
// Argument parsing
// =============================================================

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn invite_send_parses_guest_flags() {
    let cli = Cli::try_parse_from([
        "evonto-cli",
        "invite",
        "send",
        "3",
        "--name",
        "Jane Doe",
        "--phone",
        "555",
    ])
    .unwrap();
    let Command::Invite(InviteCommand { command: InviteSubcommand::Send { guest, phone } }) = cli.command else {
        panic!("expected invite send");
    };
    assert_eq!(guest.event_id, 3);
    assert_eq!(guest.name, "Jane Doe");
    assert_eq!(guest.email, None);
    assert_eq!(phone.as_deref(), Some("555"));
}

#[test]
fn explicit_base_url_and_default_capture() {
    let cli = Cli::try_parse_from(["evonto-cli", "--base-url", DEFAULT_BASE_URL, "ping"]).unwrap();
    assert_eq!(cli.base_url, DEFAULT_BASE_URL);
    assert_eq!(cli.profile_capture, "any");
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn rsvp_choice_accepts_guest_answers_only() {
    assert_eq!(parse_choice("yes").unwrap(), RsvpStatus::Yes);
    assert_eq!(parse_choice("MAYBE").unwrap(), RsvpStatus::Maybe);
    assert!(matches!(parse_choice("no_response"), Err(CliError::InvalidStatus(_))));
    assert!(matches!(parse_choice("sure"), Err(CliError::InvalidStatus(_))));
}

#[test]
fn api_error_prefers_server_message() {
    let err = ApiError::Status {
        status: StatusCode::BAD_REQUEST,
        body: r#"{"message":"Email already in use"}"#.to_owned(),
    };
    assert_eq!(api_error_message(&err), "Email already in use");
}

#[test]
fn api_error_falls_back_to_plain_body() {
    let err = ApiError::Status { status: StatusCode::NOT_FOUND, body: "Invitation not found".to_owned() };
    assert_eq!(api_error_message(&err), "server returned 404 Not Found: Invitation not found");
}

#[test]
fn guest_lookup_stringifies_event_id() {
    let guest = GuestArgs { event_id: 9, name: "Bob".to_owned(), email: Some("b@x.com".to_owned()) };
    let lookup = guest_lookup(&guest);
    assert_eq!(lookup.event_id, "9");
    assert_eq!(lookup.guest_email.as_deref(), Some("b@x.com"));
}

#[test]
fn signed_in_label_shows_email_when_cached() {
    let full = UserProfile::new(serde_json::json!({ "username": "jane.doe42", "email": "jane@example.com" }));
    assert_eq!(signed_in_label(&full), "jane.doe42 <jane@example.com>");
    let bare = UserProfile::new(serde_json::json!({ "username": "jane.doe42" }));
    assert_eq!(signed_in_label(&bare), "jane.doe42");
}
