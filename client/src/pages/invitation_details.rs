//! Public invitation page reached from a shared link.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route `/invitation?eventId=&guestName=&guestEmail=`. No login required:
//! the guest is identified by the query parameters alone.
//!
//! DESIGN
//! ======
//! An RSVP is shown as soon as the server accepts it, then checked against a
//! fresh `/invitations/info` read. If the server disagrees its state replaces
//! the optimistic one and the guest is told.

#[cfg(test)]
#[path = "invitation_details_test.rs"]
mod invitation_details_test;

use evonto::invitations::{LOAD_INVITATION_FAILED, lookup_from_query};
use evonto::rsvp::{self, CHOICES, RSVP_FAILED};
use evonto::types::{InvitationWithEvent, RsvpStatus};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::app::Api;
use crate::util::browser::now_iso;
use crate::util::time::format_date_time;

fn status_label(status: RsvpStatus) -> &'static str {
    match status {
        RsvpStatus::Yes => "Attending",
        RsvpStatus::No => "Not attending",
        RsvpStatus::Maybe => "Maybe",
        RsvpStatus::NoResponse => "Not responded yet",
    }
}

fn choice_class(current: RsvpStatus, choice: RsvpStatus) -> &'static str {
    if current == choice { "btn btn--primary rsvp__choice" } else { "btn rsvp__choice" }
}

#[component]
pub fn InvitationDetailsPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let query = use_query_map();
    let view_state = RwSignal::new(None::<InvitationWithEvent>);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let lookup = Memo::new(move |_| {
        let q = query.read();
        lookup_from_query(q.get_str("eventId"), q.get_str("guestName"), q.get_str("guestEmail"))
    });

    {
        let api = api.clone();
        Effect::new(move || {
            let lookup = match lookup.get() {
                Ok(lookup) => lookup,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.invitation_info(&lookup).await {
                    Ok(loaded) => {
                        view_state.set(Some(loaded));
                        error.set(None);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "loading invitation failed");
                        error.set(Some(e.user_message(LOAD_INVITATION_FAILED)));
                    }
                }
            });
        });
    }

    let on_rsvp = Callback::new(move |status: RsvpStatus| {
        if busy.get_untracked() {
            return;
        }
        let (Some(current), Ok(lookup)) = (view_state.get_untracked(), lookup.get_untracked()) else {
            return;
        };
        busy.set(true);
        error.set(None);
        notice.set(None);

        let api = api.clone();
        leptos::task::spawn_local(async move {
            match rsvp::submit(&api, &current.invitation, status, &now_iso()).await {
                Ok(updated) => {
                    view_state.update(|v| {
                        if let Some(v) = v {
                            v.invitation = updated.clone();
                        }
                    });
                    notice.set(Some(rsvp::updated_message(status)));

                    let outcome = rsvp::confirm(&api, &lookup, &updated).await;
                    if let Some(server) = outcome.server_state() {
                        let server = server.clone();
                        view_state.update(|v| {
                            if let Some(v) = v {
                                v.invitation = server;
                            }
                        });
                    }
                    if let Some(message) = outcome.message() {
                        notice.set(None);
                        error.set(Some(message.to_owned()));
                    }
                }
                Err(e) => error.set(Some(e.user_message(RSVP_FAILED))),
            }
            busy.set(false);
        });
    });

    view! {
        <div class="invitation-page">
            <Show when=move || error.get().is_some()>
                <p class="form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || notice.get().is_some()>
                <p class="form__success">{move || notice.get().unwrap_or_default()}</p>
            </Show>
            {move || {
                view_state
                    .get()
                    .map(|loaded| {
                        let event = loaded.event;
                        let invitation = loaded.invitation;
                        let current = invitation.rsvp_status;
                        let buttons = CHOICES
                            .into_iter()
                            .map(|choice| {
                                view! {
                                    <button
                                        class=choice_class(current, choice)
                                        disabled=move || busy.get()
                                        on:click=move |_| on_rsvp.run(choice)
                                    >
                                        {choice.to_string()}
                                    </button>
                                }
                            })
                            .collect_view();
                        view! {
                            <section class="invitation-card">
                                <p class="invitation-card__greeting">
                                    "Hi " {invitation.guest_name.clone()} ", you're invited to"
                                </p>
                                <h1>{event.title}</h1>
                                <p>{event.description.unwrap_or_default()}</p>
                                <p>
                                    {format_date_time(&event.start_date_time)}
                                    " - "
                                    {format_date_time(&event.end_date_time)}
                                </p>
                                <p>{event.location.unwrap_or_default()}</p>
                                <p class="invitation-card__host">"Hosted by " {event.created_by_username}</p>
                                <p class="invitation-card__status">
                                    "Your RSVP: " {status_label(current)}
                                    {invitation.responded_at.map(|at| format!(" ({})", format_date_time(&at)))}
                                </p>
                                <div class="rsvp">{buttons}</div>
                            </section>
                        }
                    })
            }}
        </div>
    }
}
