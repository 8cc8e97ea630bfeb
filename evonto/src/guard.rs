//! Protected-route decision logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical unauthenticated redirect behavior: start
//! in [`GuardState::Loading`], resolve once via [`authorize`], then either
//! render the protected view or replace the location with [`LOGIN_PATH`].
//! There is no retry and no distinction between "server unreachable" and
//! "token rejected".

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::api::{ApiClient, TokenCheck};
use crate::http::Transport;

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// Placeholder text while the guard is resolving.
pub const CHECKING_MESSAGE: &str = "Checking authentication...";

/// Route guard lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    #[default]
    Loading,
    Authorized,
    Unauthorized,
}

impl GuardState {
    #[must_use]
    pub fn from_validation(valid: bool) -> Self {
        if valid { Self::Authorized } else { Self::Unauthorized }
    }

    /// Location to replace the current one with, if any.
    #[must_use]
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Unauthorized => Some(LOGIN_PATH),
            Self::Loading | Self::Authorized => None,
        }
    }

    #[must_use]
    pub fn is_loading(self) -> bool {
        self == Self::Loading
    }
}

/// Resolve the guard for the current session.
///
/// The guard owns the logout decision: any result other than a valid token
/// clears the session before returning [`GuardState::Unauthorized`].
pub async fn authorize<T: Transport>(client: &ApiClient<T>) -> GuardState {
    let check = client.check_token().await;
    let state = GuardState::from_validation(check.is_valid());
    if state == GuardState::Unauthorized {
        if !matches!(check, TokenCheck::Missing) {
            tracing::warn!(reason = ?check, "invalid token detected, logging out");
        }
        client.session().logout();
    }
    state
}
