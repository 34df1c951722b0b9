//! Landing page with sign-up and sign-in entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public root route. Signed-in visitors are forwarded to the dashboard once
//! the session resolves; everyone else gets the two entry actions, which hand
//! off to the external auth provider through the host.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::components::loading_indicator::LoadingIndicator;
use crate::state::session::{Session, SessionStatus};
use crate::util::auth::{RedirectGate, Route, install_redirect, use_route_navigator};

/// What the landing page renders for a given session status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandingView {
    Loading,
    /// A redirect to the dashboard is in flight; render nothing.
    Redirecting,
    EntryActions,
}

#[must_use]
pub fn landing_view(status: SessionStatus) -> LandingView {
    match status {
        SessionStatus::Loading => LandingView::Loading,
        SessionStatus::Authenticated => LandingView::Redirecting,
        SessionStatus::Unauthenticated => LandingView::EntryActions,
    }
}

/// Landing page. Redirects to `/dashboard` if the user is signed in.
#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    install_redirect(session, RedirectGate::landing(), use_route_navigator());

    let current = Memo::new(move |_| landing_view(session.get().status));

    move || match current.get() {
        LandingView::Loading => view! { <LoadingIndicator/> }.into_any(),
        LandingView::Redirecting => ().into_any(),
        LandingView::EntryActions => view! { <EntryActions/> }.into_any(),
    }
}

#[component]
fn EntryActions() -> impl IntoView {
    view! {
        <div class="landing-page">
            <div class="landing-page__hero">
                <h1>"Welcome to Auth App"</h1>
                <p class="landing-page__tagline">
                    "A secure and modern authentication system built with Rust, Leptos and Axum"
                </p>
            </div>

            <div class="card landing-card">
                <div class="card__header">
                    <h2 class="card__title">"Get Started"</h2>
                    <p class="card__description">"Choose an option to continue"</p>
                </div>
                <div class="card__content landing-card__actions">
                    <a href={Route::Register.path()} rel="external" class="btn btn--primary btn--block">
                        "Create Account"
                    </a>
                    <a href={Route::Login.path()} rel="external" class="btn btn--outline btn--block">
                        "Sign In"
                    </a>
                </div>
            </div>

            <div class="landing-page__features">
                <FeatureTile title="Secure" blurb="Industry-standard encryption" tone="blue"/>
                <FeatureTile title="Protected" blurb="Your data is safe with us" tone="green"/>
                <FeatureTile title="Simple" blurb="Easy to use interface" tone="purple"/>
            </div>
        </div>
    }
}

#[component]
fn FeatureTile(title: &'static str, blurb: &'static str, tone: &'static str) -> impl IntoView {
    view! {
        <div class="feature-tile">
            <div class=format!("feature-tile__icon feature-tile__icon--{tone}") aria-hidden="true"></div>
            <h3 class="feature-tile__title">{title}</h3>
            <p class="feature-tile__blurb">{blurb}</p>
        </div>
    }
}
