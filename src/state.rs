//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds only immutable collaborators: the session source and the auth
//! provider URLs. Nothing here is mutated after startup.

use std::sync::Arc;

use crate::config::AuthProviderConfig;
use crate::services::session::SessionSource;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<dyn SessionSource>,
    pub auth: Arc<AuthProviderConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(session: Arc<dyn SessionSource>, auth: AuthProviderConfig) -> Self {
        Self { session, auth: Arc::new(auth) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
