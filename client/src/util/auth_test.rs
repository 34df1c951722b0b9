use std::rc::Rc;

use any_spawner::Executor;
use reactive_graph::owner::Owner;

use super::*;
use crate::net::types::SessionUser;
use crate::state::session::SessionStatus::{Authenticated, Loading, Unauthenticated};

#[derive(Default)]
struct RecordingNavigator {
    visits: RefCell<Vec<Route>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.visits.borrow_mut().push(route);
    }
}

fn drive(gate: RedirectGate, statuses: &[SessionStatus]) -> Vec<Route> {
    let gate = RefCell::new(gate);
    let navigator = RecordingNavigator::default();
    for status in statuses {
        redirect_on_transition(&gate, *status, &navigator);
    }
    navigator.visits.into_inner()
}

// =============================================================
// Route
// =============================================================

#[test]
fn route_paths() {
    assert_eq!(Route::Landing.path(), "/");
    assert_eq!(Route::Dashboard.path(), "/dashboard");
    assert_eq!(Route::Login.path(), "/login");
    assert_eq!(Route::Register.path(), "/register");
}

#[test]
fn login_and_register_are_external() {
    assert!(Route::Login.is_external());
    assert!(Route::Register.is_external());
    assert!(!Route::Landing.is_external());
    assert!(!Route::Dashboard.is_external());
}

// =============================================================
// Landing gate
// =============================================================

#[test]
fn landing_redirects_once_when_authenticated() {
    assert_eq!(drive(RedirectGate::landing(), &[Authenticated]), vec![Route::Dashboard]);
}

#[test]
fn landing_does_not_redirect_while_loading_or_signed_out() {
    assert!(drive(RedirectGate::landing(), &[Loading, Loading, Unauthenticated]).is_empty());
}

#[test]
fn landing_redirects_after_loading_resolves() {
    assert_eq!(drive(RedirectGate::landing(), &[Loading, Authenticated]), vec![Route::Dashboard]);
}

#[test]
fn landing_unchanged_status_does_not_redirect_twice() {
    let visits = drive(RedirectGate::landing(), &[Authenticated, Authenticated, Authenticated]);
    assert_eq!(visits, vec![Route::Dashboard]);
}

// =============================================================
// Dashboard gate
// =============================================================

#[test]
fn dashboard_redirects_once_when_unauthenticated() {
    let visits = drive(RedirectGate::dashboard(), &[Loading, Unauthenticated, Unauthenticated]);
    assert_eq!(visits, vec![Route::Login]);
}

#[test]
fn dashboard_does_not_redirect_while_loading() {
    assert!(drive(RedirectGate::dashboard(), &[Loading, Loading]).is_empty());
}

#[test]
fn dashboard_does_not_redirect_when_authenticated() {
    assert!(drive(RedirectGate::dashboard(), &[Authenticated, Authenticated]).is_empty());
}

#[test]
fn dashboard_redirects_again_after_genuine_transition() {
    let visits = drive(
        RedirectGate::dashboard(),
        &[Unauthenticated, Authenticated, Unauthenticated],
    );
    assert_eq!(visits, vec![Route::Login, Route::Login]);
}

#[test]
fn session_expiring_on_dashboard_redirects_to_login() {
    let visits = drive(RedirectGate::dashboard(), &[Loading, Authenticated, Authenticated, Unauthenticated]);
    assert_eq!(visits, vec![Route::Login]);
}

// =============================================================
// Gate internals
// =============================================================

#[test]
fn observe_reports_target_only_for_trigger() {
    let mut gate = RedirectGate::new(Loading, Route::Landing);
    assert_eq!(gate.observe(Loading), Some(Route::Landing));
    assert_eq!(gate.observe(Loading), None);
    assert_eq!(gate.observe(Authenticated), None);
    assert_eq!(gate.observe(Loading), Some(Route::Landing));
}

// =============================================================
// Installed redirect (reactive wiring)
// =============================================================

#[derive(Clone, Default)]
struct SharedNavigator {
    visits: Rc<RefCell<Vec<Route>>>,
}

impl Navigator for SharedNavigator {
    fn navigate(&self, route: Route) {
        self.visits.borrow_mut().push(route);
    }
}

fn signed_in_as(name: &str) -> Session {
    Session::authenticated(SessionUser { name: Some(name.to_owned()), ..SessionUser::default() })
}

/// Run `body` inside a reactive owner on a local tokio executor.
async fn with_reactive_runtime<F: Future<Output = ()>>(body: F) {
    let _ = Executor::init_tokio();
    let owner = Owner::new();
    owner.set();
    tokio::task::LocalSet::new().run_until(body).await;
}

#[tokio::test]
async fn installed_landing_redirect_fires_once_across_session_updates() {
    with_reactive_runtime(async {
        let session = RwSignal::new(Session::loading());
        let navigator = SharedNavigator::default();
        install_redirect(session, RedirectGate::landing(), navigator.clone());
        Executor::tick().await;
        assert!(navigator.visits.borrow().is_empty());

        for name in ["Ada", "Grace", "Linus"] {
            session.set(signed_in_as(name));
            Executor::tick().await;
        }

        assert_eq!(*navigator.visits.borrow(), vec![Route::Dashboard]);
    })
    .await;
}

#[tokio::test]
async fn installed_dashboard_redirect_fires_again_after_sign_in_and_out() {
    with_reactive_runtime(async {
        let session = RwSignal::new(Session::loading());
        let navigator = SharedNavigator::default();
        install_redirect(session, RedirectGate::dashboard(), navigator.clone());
        Executor::tick().await;

        for next in [
            Session::unauthenticated(),
            Session::unauthenticated(),
            signed_in_as("Ada"),
            Session::unauthenticated(),
        ] {
            session.set(next);
            Executor::tick().await;
        }

        assert_eq!(*navigator.visits.borrow(), vec![Route::Login, Route::Login]);
    })
    .await;
}
