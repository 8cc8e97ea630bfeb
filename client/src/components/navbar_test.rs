use super::*;

#[test]
fn login_hidden_on_login_page() {
    assert!(!shows_login("/login"));
    assert!(!shows_login("/login/"));
}

#[test]
fn login_shown_elsewhere() {
    assert!(shows_login("/"));
    assert!(shows_login("/register"));
    assert!(shows_login("/invitation"));
}
