use std::sync::{Arc, Mutex};

use axum::body::to_bytes;
use client::net::types::{SessionPayload, SessionUser};

use super::*;
use crate::services::session::{SessionError, SessionSource};
use crate::state::test_helpers;

// =========================================================================
// MockSource
// =========================================================================

/// Records the cookie it was asked about and replies with a canned result.
struct MockSource {
    reply: fn() -> Result<SessionPayload, SessionError>,
    seen: Mutex<Vec<Option<String>>>,
}

impl MockSource {
    fn new(reply: fn() -> Result<SessionPayload, SessionError>) -> Arc<Self> {
        Arc::new(Self { reply, seen: Mutex::new(Vec::new()) })
    }
}

#[async_trait::async_trait]
impl SessionSource for MockSource {
    async fn lookup(&self, cookie: Option<&str>) -> Result<SessionPayload, SessionError> {
        self.seen.lock().unwrap().push(cookie.map(str::to_owned));
        (self.reply)()
    }
}

fn signed_in() -> Result<SessionPayload, SessionError> {
    Ok(SessionPayload {
        user: Some(SessionUser {
            name: Some("Ada".to_owned()),
            email: Some("ada@example.com".to_owned()),
            image: None,
        }),
        expires: Some("2026-11-18T00:00:00Z".to_owned()),
    })
}

fn signed_out() -> Result<SessionPayload, SessionError> {
    Ok(SessionPayload::empty())
}

fn upstream_down() -> Result<SessionPayload, SessionError> {
    Err(SessionError::Request("connection refused".to_owned()))
}

async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =========================================================================
// session
// =========================================================================

#[tokio::test]
async fn session_returns_payload_and_forwards_cookie() {
    let source = MockSource::new(signed_in);
    let state = test_helpers::test_app_state(source.clone());
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_static("next-auth.session-token=abc"));

    let response = session(State(state), headers).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(header::CACHE_CONTROL).unwrap(), "no-store");

    let payload: SessionPayload = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(payload.user.unwrap().email.as_deref(), Some("ada@example.com"));
    assert_eq!(
        *source.seen.lock().unwrap(),
        vec![Some("next-auth.session-token=abc".to_owned())]
    );
}

#[tokio::test]
async fn session_without_cookie_passes_none() {
    let source = MockSource::new(signed_out);
    let state = test_helpers::test_app_state(source.clone());

    let response = session(State(state), HeaderMap::new()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "{}");
    assert_eq!(*source.seen.lock().unwrap(), vec![None]);
}

#[tokio::test]
async fn session_upstream_failure_is_bad_gateway() {
    let state = test_helpers::test_app_state(MockSource::new(upstream_down));
    let response = session(State(state), HeaderMap::new()).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

// =========================================================================
// hand-off
// =========================================================================

#[tokio::test]
async fn login_redirects_to_provider() {
    let state = test_helpers::test_app_state(MockSource::new(signed_out));
    let response = login(State(state)).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "https://auth.example.test/login");
}

#[tokio::test]
async fn register_redirects_to_provider() {
    let state = test_helpers::test_app_state(MockSource::new(signed_out));
    let response = register(State(state)).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "https://auth.example.test/register");
}

#[tokio::test]
async fn unconfigured_hand_off_is_unavailable() {
    let mut auth = test_helpers::test_auth_config();
    auth.login_url = None;
    let state = AppState::new(MockSource::new(signed_out), auth);

    let response = login(State(state)).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_string(response).await, "sign-in provider not configured");
}
