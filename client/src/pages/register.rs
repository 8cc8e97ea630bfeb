//! Registration page. The username is generated, not typed.

use evonto::forms::{REGISTER_FAILED, RegisterForm};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::Api;
use crate::util::browser::random_suffix;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let navigate = use_navigate();
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = RegisterForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let request = match form.to_request(random_suffix()) {
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
            match api.register(&request).await {
                Ok(_) => {
                    tracing::info!(username = %request.username, "registered");
                    navigate("/login", NavigateOptions::default());
                }
                Err(e) => {
                    info.set(e.user_message(REGISTER_FAILED));
                    busy.set(false);
                }
            }
        });
    };

    let field = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <input
                class="form__input"
                type=kind
                placeholder=label
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <form class="form" on:submit=on_submit>
                    {field("First name", "text", first_name)}
                    {field("Last name", "text", last_name)}
                    {field("Email", "email", email)}
                    {field("Password", "password", password)}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="form__error">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? "
                    <A href="/login">"Login"</A>
                </p>
            </div>
        </div>
    }
}
