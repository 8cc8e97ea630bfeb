//! Modal for inviting a guest to an event.

use evonto::invitations::{self, InviteForm};
use evonto::types::Invitation;
use leptos::prelude::*;

use crate::app::Api;

/// Invite-guest dialog. Validation and the duplicate pre-check run before
/// anything is sent; `on_invited` fires with the created invitation.
#[component]
pub fn InviteGuestModal(event_id: i64, on_close: Callback<()>, on_invited: Callback<Invitation>) -> impl IntoView {
    let api = expect_context::<Api>();
    let guest_name = RwSignal::new(String::new());
    let guest_email = RwSignal::new(String::new());
    let guest_phone = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = InviteForm {
            guest_name: guest_name.get_untracked(),
            guest_email: guest_email.get_untracked(),
            guest_phone: guest_phone.get_untracked(),
        };
        error.set(None);
        busy.set(true);

        let api = api.clone();
        leptos::task::spawn_local(async move {
            match invitations::send_invitation(&api, event_id, &form).await {
                Ok(invitation) => {
                    on_invited.run(invitation);
                    on_close.run(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    };

    let on_backdrop = move |_| on_close.run(());
    let on_cancel = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--invite"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>"Invite Guest"</h2>
                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "Guest name"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || guest_name.get()
                            on:input=move |ev| guest_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Email"
                        <input
                            class="form__input"
                            type="email"
                            prop:value=move || guest_email.get()
                            on:input=move |ev| guest_email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Phone"
                        <input
                            class="form__input"
                            type="tel"
                            prop:value=move || guest_phone.get()
                            on:input=move |ev| guest_phone.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=on_cancel>"Cancel"</button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Sending..." } else { "Send Invitation" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
