//! REST helpers for talking to the host.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since the session is only resolved in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` instead of panics so a failed session
//! lookup degrades to "signed out" without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::SessionPayload;

/// Host endpoint backing the session accessor.
pub const SESSION_ENDPOINT: &str = "/api/auth/session";

#[cfg(any(test, feature = "hydrate"))]
fn session_failed_message(status: u16) -> String {
    format!("session request failed: {status}")
}

/// Fetch the current session from `GET /api/auth/session`.
///
/// # Errors
///
/// Returns an error string if the request fails, the host answers with a
/// non-OK status, or the body is not a session object.
pub async fn fetch_session() -> Result<SessionPayload, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SESSION_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(session_failed_message(resp.status()));
        }
        let body = resp.text().await.map_err(|e| e.to_string())?;
        SessionPayload::parse(&body).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
