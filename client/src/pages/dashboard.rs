//! Dashboard page showing the signed-in user's profile and account status.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Signed-out visitors are sent to
//! the login hand-off once the session resolves. The security rows are fixed
//! presentation values, not results of any verification.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::loading_indicator::LoadingIndicator;
use crate::components::security_badge::SecurityBadgeRow;
use crate::state::session::{Session, SessionStatus};
use crate::util::auth::{Navigator, RedirectGate, Route, install_redirect, use_route_navigator};
use crate::util::profile::{Avatar, ProfileCard, SECURITY_BADGES};

/// What the dashboard renders for a given session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardView {
    Loading,
    /// A redirect to login is in flight; render nothing.
    Redirecting,
    Profile(ProfileCard),
}

#[must_use]
pub fn dashboard_view(session: &Session) -> DashboardView {
    match session.status {
        SessionStatus::Loading => DashboardView::Loading,
        SessionStatus::Unauthenticated => DashboardView::Redirecting,
        SessionStatus::Authenticated => DashboardView::Profile(ProfileCard::from_user(session.user.as_ref())),
    }
}

/// Dashboard page. Redirects to `/login` if the user is not signed in.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    install_redirect(session, RedirectGate::dashboard(), use_route_navigator());

    let current = Memo::new(move |_| dashboard_view(&session.get()));

    move || match current.get() {
        DashboardView::Loading => view! { <LoadingIndicator/> }.into_any(),
        DashboardView::Redirecting => ().into_any(),
        DashboardView::Profile(card) => view! { <DashboardContent card=card/> }.into_any(),
    }
}

#[component]
fn DashboardContent(card: ProfileCard) -> impl IntoView {
    let ProfileCard { heading, label, email, .. } = card.clone();
    let image_failed = RwSignal::new(false);
    let avatar = move || match card.avatar(image_failed.get()) {
        Avatar::Image(src) => {
            view! { <img class="avatar__image" src=src alt="" on:error=move |_| image_failed.set(true)/> }
                .into_any()
        }
        Avatar::Initial(initial) => view! { <span class="avatar__fallback">{initial}</span> }.into_any(),
    };

    // Sign-out only leaves the dashboard; the session itself is the auth
    // provider's to revoke.
    let navigator = use_route_navigator();
    let on_sign_out = move |_| navigator.navigate(Route::Landing);

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <button class="btn btn--outline" on:click=on_sign_out>
                    "Sign Out"
                </button>
            </header>

            <div class="dashboard-page__grid">
                <section class="card">
                    <div class="card__header">
                        <h2 class="card__title">"Profile Information"</h2>
                        <p class="card__description">"Your account details and information"</p>
                    </div>
                    <div class="card__content">
                        <div class="profile">
                            <div class="avatar">{avatar}</div>
                            <div>
                                <h3 class="profile__name">{heading}</h3>
                                <p class="profile__email">{email.clone()}</p>
                            </div>
                        </div>
                        <dl class="profile__details">
                            <div class="profile__row">
                                <dt>"Email:"</dt>
                                <dd>{email}</dd>
                            </div>
                            <div class="profile__row">
                                <dt>"Status:"</dt>
                                <dd><span class="badge badge--secondary">"Active"</span></dd>
                            </div>
                        </dl>
                    </div>
                </section>

                <section class="card">
                    <div class="card__header">
                        <h2 class="card__title">"Welcome Back!"</h2>
                        <p class="card__description">"Here's what's happening with your account"</p>
                    </div>
                    <div class="card__content">
                        <div class="welcome">
                            <h2 class="welcome__greeting">{format!("Hello, {label}!")}</h2>
                            <p>"Welcome to your dashboard. You're successfully logged in."</p>
                        </div>
                        <div class="stat-grid">
                            <div class="stat stat--blue">
                                <div class="stat__value">"1"</div>
                                <div class="stat__label">"Account"</div>
                            </div>
                            <div class="stat stat--green">
                                <div class="stat__value">"100%"</div>
                                <div class="stat__label">"Secure"</div>
                            </div>
                        </div>
                    </div>
                </section>

                <section class="card card--wide">
                    <div class="card__header">
                        <h2 class="card__title">"Account Security"</h2>
                        <p class="card__description">"Your account security status and recommendations"</p>
                    </div>
                    <div class="card__content security-list">
                        {SECURITY_BADGES
                            .into_iter()
                            .map(|badge| view! { <SecurityBadgeRow badge=badge/> })
                            .collect::<Vec<_>>()}
                    </div>
                </section>
            </div>
        </div>
    }
}
