//! Top navigation bar.
//!
//! Re-renders from the session signal, so a logout anywhere (including a
//! 401 deep inside a page request) updates the header immediately.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use evonto::Session;
use evonto::nav::NavView;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::Api;
use crate::util::auth::logout_and_redirect;

/// The login action is hidden on the login page itself.
fn shows_login(pathname: &str) -> bool {
    pathname.trim_end_matches('/') != "/login"
}

#[component]
pub fn NavBar() -> impl IntoView {
    let api = expect_context::<Api>();
    let session = expect_context::<RwSignal<Session>>();
    let location = use_location();
    let navigate = use_navigate();

    let nav = Memo::new(move |_| NavView::from_session(&session.get(), shows_login(&location.pathname.get())));

    let on_logout = move |_| logout_and_redirect(&api, &navigate);

    view! {
        <header class="navbar" class:signed-in=move || nav.get().is_authenticated()>
            <A href="/" attr:class="navbar__brand">"Evonto"</A>
            <nav class="navbar__links">
                <A href="/create-event">"Create Event"</A>
                <A href="/my-events">"My Events"</A>
            </nav>
            <span class="navbar__spacer"></span>
            {move || match nav.get() {
                NavView::Authenticated { greeting } => view! {
                    <span class="navbar__greeting">{greeting}</span>
                    <button class="btn navbar__logout" on:click=on_logout.clone()>"Logout"</button>
                }
                .into_any(),
                NavView::Anonymous { show_login: true } => view! {
                    <A href="/login" attr:class="btn navbar__login">"Login"</A>
                }
                .into_any(),
                NavView::Anonymous { show_login: false } => ().into_any(),
            }}
        </header>
    }
}
