//! Events owned by the current user (protected).
//!
//! The list is server-owned: after a delete the page re-fetches instead of
//! editing its local copy.

#[cfg(test)]
#[path = "my_events_test.rs"]
mod my_events_test;

use evonto::forms::{DELETE_EVENT_FAILED, LOAD_EVENTS_FAILED};
use evonto::invitations::INVITATION_SENT;
use evonto::types::{Event, Invitation};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::Api;
use crate::components::invite_guest_modal::InviteGuestModal;
use crate::util::browser::confirm;
use crate::util::time::format_date_time;

const DELETE_CONFIRM: &str = "Are you sure you want to delete this event?";

/// `start - end` in display form.
fn schedule_label(event: &Event) -> String {
    format!("{} - {}", format_date_time(&event.start_date_time), format_date_time(&event.end_date_time))
}

fn details_href(event: &Event) -> String {
    format!("/events/{}", event.event_id)
}

/// Display fields for one row of the list, owned so the view can move them.
#[derive(Debug, PartialEq)]
struct EventCard {
    event_id: i64,
    href: String,
    title: String,
    when: String,
    location: String,
}

impl From<Event> for EventCard {
    fn from(event: Event) -> Self {
        Self {
            event_id: event.event_id,
            href: details_href(&event),
            when: schedule_label(&event),
            title: event.title,
            location: event.location.unwrap_or_default(),
        }
    }
}

#[component]
pub fn MyEventsPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let events = RwSignal::new(Vec::<Event>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let invite_for = RwSignal::new(None::<i64>);

    let reload = {
        let api = api.clone();
        Callback::new(move |()| {
            let api = api.clone();
            loading.set(true);
            leptos::task::spawn_local(async move {
                match api.my_events().await {
                    Ok(list) => {
                        events.set(list);
                        error.set(None);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "loading events failed");
                        error.set(Some(e.user_message(LOAD_EVENTS_FAILED)));
                    }
                }
                loading.set(false);
            });
        })
    };
    reload.run(());

    let on_delete = Callback::new(move |event_id: i64| {
        if !confirm(DELETE_CONFIRM) {
            return;
        }
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.delete_event(event_id).await {
                Ok(()) => tracing::info!(event_id, "event deleted"),
                Err(e) => error.set(Some(e.user_message(DELETE_EVENT_FAILED))),
            }
            reload.run(());
        });
    });

    let on_invite_close = Callback::new(move |()| invite_for.set(None));
    let on_invited = Callback::new(move |invitation: Invitation| {
        tracing::info!(invitation_id = invitation.invitation_id, "guest invited");
        notice.set(Some(INVITATION_SENT.to_owned()));
    });

    view! {
        <div class="events-page">
            <header class="events-page__header">
                <h1>"My Events"</h1>
                <A href="/create-event" attr:class="btn btn--primary">"+ New Event"</A>
            </header>
            <Show when=move || error.get().is_some()>
                <p class="form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || notice.get().is_some()>
                <p class="form__success">{move || notice.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page__status">"Loading events..."</p> }>
                <Show
                    when=move || !events.get().is_empty()
                    fallback=|| view! { <p class="page__status">"You have not created any events yet."</p> }
                >
                    <ul class="event-list">
                        <For
                            each=move || events.get()
                            key=|event| event.event_id
                            children=move |event: Event| {
                                let EventCard { event_id, href, title, when, location } = EventCard::from(event);
                                view! {
                                    <li class="event-card">
                                        <A href=href attr:class="event-card__title">
                                            {title}
                                        </A>
                                        <p class="event-card__when">{when}</p>
                                        <p class="event-card__where">{location}</p>
                                        <button class="btn event-card__invite" on:click=move |_| invite_for.set(Some(event_id))>
                                            "Invite Guest"
                                        </button>
                                        <button
                                            class="btn btn--danger event-card__delete"
                                            on:click=move |_| on_delete.run(event_id)
                                        >
                                            "Delete"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </Show>
            {move || {
                invite_for
                    .get()
                    .map(|event_id| {
                        view! { <InviteGuestModal event_id=event_id on_close=on_invite_close on_invited=on_invited/> }
                    })
            }}
        </div>
    }
}
