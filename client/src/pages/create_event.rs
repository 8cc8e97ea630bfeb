//! Create-event form (protected).

use evonto::forms::{CREATE_EVENT_FAILED, EVENT_CREATED, validate_new_event};
use evonto::types::NewEvent;
use leptos::prelude::*;

use crate::app::Api;

/// Outcome line under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Notice {
    None,
    Success(String),
    Error(String),
}

#[component]
pub fn CreateEventPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let form = RwSignal::new(NewEvent::default());
    let notice = RwSignal::new(Notice::None);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let event = match validate_new_event(&form.get_untracked()) {
            Ok(event) => event,
            Err(e) => {
                notice.set(Notice::Error(e.to_string()));
                return;
            }
        };
        busy.set(true);
        notice.set(Notice::None);

        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.create_event(&event).await {
                Ok(created) => {
                    tracing::info!(event_id = created.event_id, "event created");
                    form.set(NewEvent::default());
                    notice.set(Notice::Success(EVENT_CREATED.to_owned()));
                }
                Err(e) => notice.set(Notice::Error(e.user_message(CREATE_EVENT_FAILED))),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="form-page">
            <h1>"Create Event"</h1>
            <form class="form" on:submit=on_submit>
                <label class="form__label">
                    "Title"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Description"
                    <textarea
                        class="form__input"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="form__label">
                    "Starts"
                    <input
                        class="form__input"
                        type="datetime-local"
                        prop:value=move || form.with(|f| f.start_date_time.clone())
                        on:input=move |ev| form.update(|f| f.start_date_time = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Ends"
                    <input
                        class="form__input"
                        type="datetime-local"
                        prop:value=move || form.with(|f| f.end_date_time.clone())
                        on:input=move |ev| form.update(|f| f.end_date_time = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Location"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || form.with(|f| f.location.clone())
                        on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating..." } else { "Create Event" }}
                </button>
            </form>
            {move || match notice.get() {
                Notice::None => ().into_any(),
                Notice::Success(text) => view! { <p class="form__success">{text}</p> }.into_any(),
                Notice::Error(text) => view! { <p class="form__error">{text}</p> }.into_any(),
            }}
        </div>
    }
}
