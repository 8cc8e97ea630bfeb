//! Login page: email + password against `/login`.
//!
//! The session itself is established by the API client's response
//! interceptor (rotated token header + profile body); this page only
//! submits and navigates.

use evonto::forms::{LOGIN_FAILED, LoginForm};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::Api;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = LoginForm { email: email.get_untracked(), password: password.get_untracked() };
        let request = match form.to_request() {
            Ok(request) => request,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.login(&request).await {
                Ok(_) => {
                    tracing::info!(email = %request.email, "logged in");
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => {
                    info.set(e.user_message(LOGIN_FAILED));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Login"</h1>
                <form class="form" on:submit=on_submit>
                    <input
                        class="form__input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="form__input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="form__error">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "No account yet? "
                    <A href="/register">"Register"</A>
                </p>
            </div>
        </div>
    }
}
