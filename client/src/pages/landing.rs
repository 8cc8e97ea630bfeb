//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero__title">"Plan events. Invite guests. Track RSVPs."</h1>
            <p class="hero__subtitle">
                "Evonto keeps your guest list and their responses in one place."
            </p>
            <A href="/register" attr:class="btn btn--primary hero__cta">"Get Started"</A>
        </section>
    }
}
