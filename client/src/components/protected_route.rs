//! Route wrapper that only renders its children for a valid session.

use evonto::guard::{self, CHECKING_MESSAGE, GuardState};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::Api;
use crate::util::auth::install_guard_redirect;

/// Validate the stored token once on mount, then render `children`,
/// or replace the location with the login page.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let api = expect_context::<Api>();
    let state = RwSignal::new(GuardState::Loading);

    install_guard_redirect(state, use_navigate());

    leptos::task::spawn_local(async move {
        state.set(guard::authorize(&api).await);
    });

    view! {
        <Show
            when=move || state.get() == GuardState::Authorized
            fallback=move || {
                view! {
                    <Show when=move || state.get().is_loading()>
                        <p class="page__status">{CHECKING_MESSAGE}</p>
                    </Show>
                }
            }
        >
            {children()}
        </Show>
    }
}
