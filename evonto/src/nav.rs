//! Header navigation model derived from the session.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::session::Session;

/// What the header shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavView {
    /// A profile is cached: greet the user and offer logout.
    Authenticated { greeting: String },
    /// No profile: optionally offer a login action.
    Anonymous { show_login: bool },
}

impl NavView {
    /// Derive the header from a session snapshot.
    ///
    /// Driven by the cached profile, like the header always was; a profile
    /// without a username still counts as signed in.
    #[must_use]
    pub fn from_session(session: &Session, show_login: bool) -> Self {
        match &session.user {
            Some(user) => Self::Authenticated { greeting: format!("Hi, {}", user.username().unwrap_or("there")) },
            None => Self::Anonymous { show_login },
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}
