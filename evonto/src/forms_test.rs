use super::*;

// =============================================================
// generate_username
// =============================================================

#[test]
fn username_is_lowercased_dotted_with_suffix() {
    assert_eq!(generate_username(" Jane ", "DOE", 42), "jane.doe42");
}

#[test]
fn username_suffix_stays_below_100() {
    assert_eq!(generate_username("a", "b", 250), "a.b50");
    assert_eq!(generate_username("a", "b", 0), "a.b0");
}

// =============================================================
// RegisterForm
// =============================================================

fn register_form() -> RegisterForm {
    RegisterForm {
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        email: " jane@example.com ".to_owned(),
        password: "secret".to_owned(),
    }
}

#[test]
fn register_builds_request() {
    let request = register_form().to_request(7).unwrap();
    assert_eq!(request.username, "jane.doe7");
    assert_eq!(request.email, "jane@example.com");
    assert_eq!(request.password, "secret");
}

#[test]
fn register_requires_names() {
    let mut form = register_form();
    form.last_name = "  ".to_owned();
    assert_eq!(form.to_request(1), Err(FormError::Required("Last name")));
}

#[test]
fn register_rejects_bad_email() {
    let mut form = register_form();
    form.email = "jane.example.com".to_owned();
    assert_eq!(form.to_request(1), Err(FormError::InvalidEmail));
}

// =============================================================
// LoginForm
// =============================================================

#[test]
fn login_requires_password() {
    let form = LoginForm { email: "a@b.com".to_owned(), password: String::new() };
    assert_eq!(form.to_request(), Err(FormError::Required("Password")));
    assert_eq!(FormError::Required("Password").to_string(), "Password is required.");
}

#[test]
fn login_keeps_password_verbatim() {
    let form = LoginForm { email: "a@b.com".to_owned(), password: " x ".to_owned() };
    assert_eq!(form.to_request().unwrap().password, " x ");
}

#[test]
fn login_requires_email() {
    let form = LoginForm { email: String::new(), password: "x".to_owned() };
    assert_eq!(form.to_request(), Err(FormError::Required("Email")));
}

// =============================================================
// validate_new_event
// =============================================================

#[test]
fn new_event_requires_every_field() {
    let mut form = NewEvent {
        title: "Party".to_owned(),
        description: "Cake".to_owned(),
        start_date_time: "2025-06-01T18:00".to_owned(),
        end_date_time: "2025-06-01T23:00".to_owned(),
        location: "Home".to_owned(),
    };
    assert!(validate_new_event(&form).is_ok());

    form.location = String::new();
    assert_eq!(validate_new_event(&form), Err(FormError::Required("Location")));
}

#[test]
fn new_event_trims_fields() {
    let form = NewEvent {
        title: "  Party ".to_owned(),
        description: "Cake".to_owned(),
        start_date_time: "2025-06-01T18:00".to_owned(),
        end_date_time: "2025-06-01T23:00".to_owned(),
        location: " Home".to_owned(),
    };
    let cleaned = validate_new_event(&form).unwrap();
    assert_eq!(cleaned.title, "Party");
    assert_eq!(cleaned.location, "Home");
}
