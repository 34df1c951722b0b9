//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session signal is the single reactive source every route reads to
//! decide between "loading", "signed in" and "signed out". Only the accessor
//! in this module writes it; pages hold the signal and never mutate it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use leptos::prelude::*;

use crate::net::types::{SessionPayload, SessionUser};

/// Seconds between background session refreshes while the app is mounted.
pub const SESSION_REFRESH_SECS: u64 = 300;

/// Where the session lookup currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Current session as seen by the views.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub status: SessionStatus,
    /// Present only while `status` is `Authenticated`.
    pub user: Option<SessionUser>,
}

impl Session {
    #[must_use]
    pub fn loading() -> Self {
        Self { status: SessionStatus::Loading, user: None }
    }

    #[must_use]
    pub fn unauthenticated() -> Self {
        Self { status: SessionStatus::Unauthenticated, user: None }
    }

    #[must_use]
    pub fn authenticated(user: SessionUser) -> Self {
        Self { status: SessionStatus::Authenticated, user: Some(user) }
    }

    /// A payload is a live session iff it carries a user.
    #[must_use]
    pub fn from_payload(payload: SessionPayload) -> Self {
        payload.user.map_or_else(Self::unauthenticated, Self::authenticated)
    }

    /// Resolve a session lookup result; a failed lookup reads as signed out.
    #[must_use]
    pub fn from_lookup(result: Result<SessionPayload, String>) -> Self {
        result.map_or_else(|_| Self::unauthenticated(), Self::from_payload)
    }
}

/// Orders overlapping session lookups so a slower, older reply never
/// overwrites the result of a newer one.
#[derive(Clone, Debug, Default)]
pub struct LookupSequence(Arc<AtomicU64>);

impl LookupSequence {
    /// Claim a ticket for a lookup that is about to start.
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `ticket` belongs to the most recently started lookup.
    #[must_use]
    pub fn is_latest(&self, ticket: u64) -> bool {
        self.0.load(Ordering::SeqCst) == ticket
    }

    /// Session to store for a finished lookup, or `None` when the reply is
    /// stale or would not change `current`.
    #[must_use]
    pub fn resolve(&self, ticket: u64, current: &Session, result: Result<SessionPayload, String>) -> Option<Session> {
        if !self.is_latest(ticket) {
            return None;
        }
        let next = Session::from_lookup(result);
        (next != *current).then_some(next)
    }
}

/// Keeps background refreshes running until [`RefreshGuard::stop`].
///
/// Holds a liveness flag for loops and teardown callbacks (event listener
/// removal) run once on stop.
pub struct RefreshGuard {
    alive: Arc<AtomicBool>,
    teardown: Vec<Box<dyn FnOnce() + Send + Sync>>,
}

impl RefreshGuard {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)), teardown: Vec::new() }
    }

    /// Flag that stays `true` until the guard is stopped.
    #[must_use]
    pub fn alive(&self) -> Arc<AtomicBool> {
        self.alive.clone()
    }

    pub fn on_stop(&mut self, teardown: impl FnOnce() + Send + Sync + 'static) {
        self.teardown.push(Box::new(teardown));
    }

    /// Clear the liveness flag and run every teardown callback.
    pub fn stop(self) {
        self.alive.store(false, Ordering::Relaxed);
        for teardown in self.teardown {
            teardown();
        }
    }
}

impl Default for RefreshGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the session signal, provide it as context and start keeping it fresh.
///
/// The signal starts in `Loading`. In the browser it resolves from
/// `/api/auth/session`, then refetches on window focus and every
/// [`SESSION_REFRESH_SECS`]. A refresh never drops back to `Loading`, and only
/// the newest of overlapping lookups is applied.
pub fn provide_session_accessor() -> RwSignal<Session> {
    let session = RwSignal::new(Session::loading());
    provide_context(session);

    #[cfg(feature = "hydrate")]
    {
        let sequence = LookupSequence::default();
        let mut guard = RefreshGuard::new();

        leptos::task::spawn_local(refresh_session(session, sequence.clone()));

        let poll_alive = guard.alive();
        let poll_sequence = sequence.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(SESSION_REFRESH_SECS)).await;
                if !poll_alive.load(Ordering::Relaxed) {
                    break;
                }
                refresh_session(session, poll_sequence.clone()).await;
            }
        });

        let focus = window_event_listener(leptos::ev::focus, move |_| {
            leptos::task::spawn_local(refresh_session(session, sequence.clone()));
        });
        guard.on_stop(move || focus.remove());

        on_cleanup(move || guard.stop());
    }

    session
}

#[cfg(feature = "hydrate")]
async fn refresh_session(session: RwSignal<Session>, sequence: LookupSequence) {
    let ticket = sequence.begin();
    let result = crate::net::api::fetch_session().await;
    if let Err(e) = &result {
        log::warn!("session lookup failed: {e}");
    }
    let Some(current) = session.try_get_untracked() else {
        return;
    };
    if let Some(next) = sequence.resolve(ticket, &current, result) {
        session.set(next);
    }
}
