//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use evonto::config::DEFAULT_BASE_URL;
use evonto::{ApiClient, ApiConfig, ProfileCapture, Session, SessionStore};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::NavBar;
use crate::components::protected_route::ProtectedRoute;
use crate::net::transport::GlooTransport;
use crate::pages::{
    create_event::CreateEventPage, event_details::EventDetailsPage, invitation_details::InvitationDetailsPage,
    landing::LandingPage, login::LoginPage, my_events::MyEventsPage, register::RegisterPage,
};
use crate::util::storage::BrowserStorage;

/// API client shared through context.
pub type Api = Arc<ApiClient<GlooTransport>>;

/// Build the API config from build-time overrides.
///
/// An unknown capture mode falls back to the default with a warning rather
/// than failing the whole app.
pub fn build_config(base_url: Option<&str>, profile_capture: Option<&str>) -> ApiConfig {
    let config = ApiConfig::new(base_url.filter(|url| !url.trim().is_empty()).unwrap_or(DEFAULT_BASE_URL));
    match profile_capture.map(ProfileCapture::parse) {
        Some(Ok(capture)) => config.with_profile_capture(capture),
        Some(Err(e)) => {
            tracing::warn!(error = %e, "ignoring profile capture override");
            config
        }
        None => config,
    }
}

/// Root application component.
///
/// Provides the API client and a session signal kept in sync with the
/// session store, then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = Arc::new(SessionStore::new(Arc::new(BrowserStorage)));
    let config = build_config(option_env!("EVONTO_API_BASE_URL"), option_env!("EVONTO_PROFILE_CAPTURE"));
    let api: Api = Arc::new(ApiClient::new(GlooTransport, config, store.clone()));

    let session = RwSignal::new(store.snapshot());
    let subscription = store.subscribe(move |next: &Session| session.set(next.clone()));
    on_cleanup(move || store.unsubscribe(subscription));

    provide_context(api);
    provide_context(session);

    view! {
        <Title text="Evonto"/>

        <Router>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("invitation") view=InvitationDetailsPage/>
                    <Route
                        path=StaticSegment("create-event")
                        view=|| view! { <ProtectedRoute><CreateEventPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("my-events")
                        view=|| view! { <ProtectedRoute><MyEventsPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("events"), ParamSegment("id"))
                        view=|| view! { <ProtectedRoute><EventDetailsPage/></ProtectedRoute> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
