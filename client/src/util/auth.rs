//! Session-gated route redirects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both pages send the visitor elsewhere when the session contradicts the
//! page: the landing page forwards signed-in users to the dashboard, the
//! dashboard sends signed-out users to the login hand-off.
//!
//! DESIGN
//! ======
//! The session signal can be set repeatedly with the same status (refreshes,
//! re-renders). A redirect must fire once per status transition, so the
//! effect feeds each status through a [`RedirectGate`] that remembers the
//! last status it saw.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{Session, SessionStatus};

/// Routes the views navigate between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Landing,
    Dashboard,
    Login,
    Register,
}

impl Route {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Dashboard => "/dashboard",
            Self::Login => "/login",
            Self::Register => "/register",
        }
    }

    /// Served by the host (which hands off to the auth provider) rather than
    /// the client router, so reaching it needs a full page load.
    #[must_use]
    pub const fn is_external(self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }
}

/// Something that can move the browser to a route.
pub trait Navigator {
    fn navigate(&self, route: Route);
}

/// Remembers the last observed status and reports a redirect target only on a
/// transition into `trigger`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectGate {
    trigger: SessionStatus,
    target: Route,
    last_seen: Option<SessionStatus>,
}

impl RedirectGate {
    #[must_use]
    pub const fn new(trigger: SessionStatus, target: Route) -> Self {
        Self { trigger, target, last_seen: None }
    }

    /// Signed-in visitors leave the landing page for the dashboard.
    #[must_use]
    pub const fn landing() -> Self {
        Self::new(SessionStatus::Authenticated, Route::Dashboard)
    }

    /// Signed-out visitors leave the dashboard for the login hand-off.
    #[must_use]
    pub const fn dashboard() -> Self {
        Self::new(SessionStatus::Unauthenticated, Route::Login)
    }

    /// Record `status`; return the target when this is a fresh transition into
    /// the trigger status. The first observation counts as a transition.
    pub fn observe(&mut self, status: SessionStatus) -> Option<Route> {
        let changed = self.last_seen != Some(status);
        self.last_seen = Some(status);
        (changed && status == self.trigger).then_some(self.target)
    }
}

/// Feed one status through the gate and navigate if it reports a target.
pub fn redirect_on_transition<N: Navigator>(gate: &RefCell<RedirectGate>, status: SessionStatus, navigator: &N) {
    let route = gate.borrow_mut().observe(status);
    if let Some(route) = route {
        navigator.navigate(route);
    }
}

/// Install a reactive redirect for the current page.
///
/// The effect depends on a status memo, so it only re-runs when the status
/// value changes; the gate additionally suppresses repeats of the same status.
pub fn install_redirect<N>(session: RwSignal<Session>, gate: RedirectGate, navigator: N)
where
    N: Navigator + 'static,
{
    let status = Memo::new(move |_| session.get().status);
    let gate = RefCell::new(gate);
    Effect::new(move || {
        redirect_on_transition(&gate, status.get(), &navigator);
    });
}

/// [`Navigator`] backed by the Leptos router, falling back to a full page
/// load for external routes.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, route: Route) {
        if route.is_external() {
            load_page(route.path());
        } else {
            (self.navigate)(route.path(), NavigateOptions::default());
        }
    }
}

/// Router-backed navigator for the current component.
pub fn use_route_navigator() -> RouterNavigator<impl Fn(&str, NavigateOptions) + Clone + 'static> {
    RouterNavigator::new(use_navigate())
}

fn load_page(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
