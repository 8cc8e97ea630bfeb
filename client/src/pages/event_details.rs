//! Event details with the guest list (protected).
//!
//! SYSTEM CONTEXT
//! ==============
//! Route `/events/:id`. Guests are listed with their RSVP status and a
//! shareable invitation link. Inviting or removing a guest re-fetches the
//! whole details payload.

#[cfg(test)]
#[path = "event_details_test.rs"]
mod event_details_test;

use evonto::forms::LOAD_EVENT_DETAILS_FAILED;
use evonto::invitations::{INVITATION_SENT, invitation_link};
use evonto::types::{EventDetails, Invitation};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::app::Api;
use crate::components::invite_guest_modal::InviteGuestModal;
use crate::util::browser::{after, confirm, copy_to_clipboard, origin};
use crate::util::time::format_date_time;

const LINK_COPIED: &str = "Link copied to clipboard!";
const COPY_FAILED: &str = "Failed to copy link.";
const REMOVE_CONFIRM: &str = "Remove this guest from the event?";
const REMOVE_FAILED: &str = "Failed to remove guest.";

/// Transient success banner; cleared after [`NOTICE_MILLIS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Notice {
    Copied,
    Invited,
}

impl Notice {
    fn text(self) -> &'static str {
        match self {
            Self::Copied => LINK_COPIED,
            Self::Invited => INVITATION_SENT,
        }
    }
}

const NOTICE_MILLIS: u32 = 2000;

/// Banner for a copy attempt: a notice on success, an error otherwise.
fn copy_feedback(copied: bool) -> Result<Notice, &'static str> {
    if copied { Ok(Notice::Copied) } else { Err(COPY_FAILED) }
}

fn parse_event_id(raw: Option<String>) -> Option<i64> {
    raw?.trim().parse().ok()
}

/// Email, phone, or both, for the guest table.
fn guest_contact(invitation: &Invitation) -> String {
    let parts: Vec<&str> = [invitation.guest_email.as_deref(), invitation.guest_phone.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() { "-".to_owned() } else { parts.join(" / ") }
}

fn guest_link(event_id: i64, invitation: &Invitation) -> String {
    invitation_link(event_id, &invitation.guest_name, invitation.guest_email.as_deref())
}

fn absolute_link(origin: &str, path: &str) -> String {
    format!("{}{path}", origin.trim_end_matches('/'))
}

#[component]
pub fn EventDetailsPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let params = use_params_map();
    let details = RwSignal::new(None::<EventDetails>);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<Notice>);
    let show_invite = RwSignal::new(false);

    let event_id = Memo::new(move |_| parse_event_id(params.read().get("id")));

    let reload = {
        let api = api.clone();
        Callback::new(move |()| {
            let Some(id) = event_id.get_untracked() else {
                error.set(Some(LOAD_EVENT_DETAILS_FAILED.to_owned()));
                return;
            };
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.event_details(id).await {
                    Ok(loaded) => {
                        details.set(Some(loaded));
                        error.set(None);
                    }
                    Err(e) => {
                        tracing::warn!(event_id = id, error = %e, "loading event details failed");
                        error.set(Some(e.user_message(LOAD_EVENT_DETAILS_FAILED)));
                    }
                }
            });
        })
    };
    Effect::new(move || {
        event_id.track();
        reload.run(());
    });

    let show_notice = move |shown: Notice| {
        notice.set(Some(shown));
        after(NOTICE_MILLIS, move || {
            if notice.get_untracked() == Some(shown) {
                notice.set(None);
            }
        });
    };

    let on_copy = Callback::new(move |path: String| match copy_feedback(copy_to_clipboard(&absolute_link(&origin(), &path))) {
        Ok(shown) => show_notice(shown),
        Err(message) => {
            tracing::warn!(%path, "copying invitation link failed");
            error.set(Some(message.to_owned()));
        }
    });

    let on_remove = Callback::new(move |invitation_id: i64| {
        if !confirm(REMOVE_CONFIRM) {
            return;
        }
        let api = api.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = api.delete_invitation(invitation_id).await {
                error.set(Some(e.user_message(REMOVE_FAILED)));
            }
            reload.run(());
        });
    });

    let on_invite_close = Callback::new(move |()| show_invite.set(false));
    let on_invited = Callback::new(move |invitation: Invitation| {
        tracing::info!(invitation_id = invitation.invitation_id, "guest invited");
        show_notice(Notice::Invited);
        reload.run(());
    });

    let guest_row = move |id: i64, invitation: Invitation| {
        let link = guest_link(id, &invitation);
        let copy_link = link.clone();
        let invitation_id = invitation.invitation_id;
        view! {
            <tr class="guest-table__row">
                <td>{invitation.guest_name.clone()}</td>
                <td>{guest_contact(&invitation)}</td>
                <td class="guest-table__status">{invitation.rsvp_status.to_string()}</td>
                <td class="guest-table__actions">
                    <A href=link>"View Invitation"</A>
                    <button class="btn" on:click=move |_| on_copy.run(copy_link.clone())>"Copy Link"</button>
                    <button class="btn btn--danger" on:click=move |_| on_remove.run(invitation_id)>
                        "Remove"
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <div class="details-page">
            <Show when=move || error.get().is_some()>
                <p class="form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || notice.get().is_some()>
                <p class="form__success">{move || notice.get().map(Notice::text).unwrap_or_default()}</p>
            </Show>
            {move || {
                details
                    .get()
                    .map(|loaded| {
                        let id = loaded.event.event_id;
                        let event = loaded.event;
                        let rows = loaded
                            .invitations
                            .into_iter()
                            .map(|invitation| guest_row(id, invitation))
                            .collect_view();
                        view! {
                            <section class="details-page__event">
                                <h1>{event.title}</h1>
                                <p>{event.description.unwrap_or_default()}</p>
                                <p>
                                    {format_date_time(&event.start_date_time)}
                                    " - "
                                    {format_date_time(&event.end_date_time)}
                                </p>
                                <p>{event.location.unwrap_or_default()}</p>
                            </section>
                            <section class="details-page__guests">
                                <header class="details-page__guests-header">
                                    <h2>"Guests"</h2>
                                    <button class="btn btn--primary" on:click=move |_| show_invite.set(true)>
                                        "Invite Guest"
                                    </button>
                                </header>
                                <table class="guest-table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Contact"</th>
                                            <th>"RSVP"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>{rows}</tbody>
                                </table>
                            </section>
                            <Show when=move || show_invite.get()>
                                <InviteGuestModal event_id=id on_close=on_invite_close on_invited=on_invited/>
                            </Show>
                        }
                    })
            }}
        </div>
    }
}
