//! Auth routes: session lookup and the sign-in / sign-up hand-off.

use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Json, Redirect, Response};

use crate::state::AppState;

/// `GET /api/auth/session`: current session as seen by the auth provider.
///
/// Answers `{}` when signed out. The browser's cookies are forwarded as-is.
pub async fn session(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let cookie = headers.get(header::COOKIE).and_then(|v| v.to_str().ok());

    match state.session.lookup(cookie).await {
        Ok(payload) => {
            let mut response = Json(payload).into_response();
            response
                .headers_mut()
                .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
            response
        }
        Err(e) => {
            tracing::error!(error = %e, "session lookup failed");
            (StatusCode::BAD_GATEWAY, "session lookup failed").into_response()
        }
    }
}

/// `GET /login`: redirect to the provider's sign-in page.
pub async fn login(State(state): State<AppState>) -> Response {
    hand_off(state.auth.login_url.as_deref())
}

/// `GET /register`: redirect to the provider's sign-up page.
pub async fn register(State(state): State<AppState>) -> Response {
    hand_off(state.auth.register_url.as_deref())
}

fn hand_off(target: Option<&str>) -> Response {
    match target {
        Some(url) => Redirect::temporary(url).into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "sign-in provider not configured").into_response(),
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
