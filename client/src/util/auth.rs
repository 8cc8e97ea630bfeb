//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes and the header apply identical redirect behavior: a
//! replace-navigation to the login page, with no return-to deep link.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use evonto::guard::{GuardState, LOGIN_PATH};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

/// Navigation options that replace the current history entry.
pub fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect whenever the guard settles on a redirect target.
pub fn install_guard_redirect<F>(guard: RwSignal<GuardState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = guard.get().redirect_target() {
            navigate(target, replace_options());
        }
    });
}

/// Clear the session and go to the login page.
pub fn logout_and_redirect<F>(api: &crate::app::Api, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    api.session().logout();
    navigate(LOGIN_PATH, NavigateOptions::default());
}
