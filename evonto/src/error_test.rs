use super::*;

fn status_error(status: u16, body: &str) -> ApiError {
    ApiError::Status {
        status: StatusCode::from_u16(status).unwrap(),
        body: body.to_owned(),
    }
}

#[test]
fn server_message_reads_json_message_field() {
    let err = status_error(400, r#"{"message":"Email already registered"}"#);
    assert_eq!(err.server_message().as_deref(), Some("Email already registered"));
    assert_eq!(err.user_message("Registration failed."), "Email already registered");
}

#[test]
fn plain_text_body_falls_back() {
    let err = status_error(500, "Error creating event: boom");
    assert_eq!(err.server_message(), None);
    assert_eq!(err.user_message("Failed to create event."), "Failed to create event.");
}

#[test]
fn blank_message_falls_back() {
    let err = status_error(400, r#"{"message":"   "}"#);
    assert_eq!(err.user_message("Login failed."), "Login failed.");
}

#[test]
fn transport_error_has_no_status() {
    let err = ApiError::Transport(TransportError::new("connection refused"));
    assert_eq!(err.status(), None);
    assert!(!err.is_unauthorized());
    assert_eq!(err.user_message("Login failed."), "Login failed.");
}

#[test]
fn unauthorized_is_detected() {
    assert!(status_error(401, "").is_unauthorized());
    assert!(!status_error(403, "").is_unauthorized());
}
