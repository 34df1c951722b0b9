//! Session lookup against the external auth provider.
//!
//! DESIGN
//! ======
//! The host never mints or verifies session tokens. It forwards the browser's
//! `Cookie` header to the provider's session endpoint and relays the answer.
//! `SessionSource` is the seam: the HTTP implementation in production, a
//! fixed "signed out" source when no provider is configured, mocks in tests.
//! Pure response handling lives in `interpret_response` for testability.

use std::sync::Arc;
use std::time::Duration;

use client::net::types::SessionPayload;

use crate::config::{AuthProviderConfig, AuthTimeouts};

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request to the provider failed (connect, timeout, body read).
    #[error("session request failed: {0}")]
    Request(String),

    /// The provider returned an unexpected HTTP status.
    #[error("session provider responded with status {status}")]
    Status { status: u16 },

    /// The provider's body is not a session object.
    #[error("session body parse failed: {0}")]
    Parse(String),
}

// =============================================================================
// SOURCE TRAIT
// =============================================================================

/// Resolves the session for one browser request. Enables mocking in tests.
#[async_trait::async_trait]
pub trait SessionSource: Send + Sync {
    /// Look up the session carried by `cookie` (the raw `Cookie` header).
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] when the provider cannot be reached or
    /// answers with something other than a session.
    async fn lookup(&self, cookie: Option<&str>) -> Result<SessionPayload, SessionError>;
}

/// Source used when no provider is configured: nobody is ever signed in.
pub struct SignedOutSource;

#[async_trait::async_trait]
impl SessionSource for SignedOutSource {
    async fn lookup(&self, _cookie: Option<&str>) -> Result<SessionPayload, SessionError> {
        Ok(SessionPayload::empty())
    }
}

// =============================================================================
// HTTP SOURCE
// =============================================================================

pub struct HttpSessionSource {
    http: reqwest::Client,
    url: String,
}

impl HttpSessionSource {
    /// # Errors
    ///
    /// Returns [`SessionError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(url: String, timeouts: AuthTimeouts) -> Result<Self, SessionError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| SessionError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url })
    }
}

#[async_trait::async_trait]
impl SessionSource for HttpSessionSource {
    async fn lookup(&self, cookie: Option<&str>) -> Result<SessionPayload, SessionError> {
        // Without cookies there is nothing for the provider to recognize.
        let Some(cookie) = cookie.filter(|c| !c.trim().is_empty()) else {
            return Ok(SessionPayload::empty());
        };

        let response = self
            .http
            .get(&self.url)
            .header(reqwest::header::COOKIE, cookie)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| SessionError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SessionError::Request(e.to_string()))?;

        interpret_response(status, &body)
    }
}

/// Map a provider response to a session payload.
///
/// `200` carries the session body; `401`/`403` mean "no session"; any other
/// status is an error.
pub fn interpret_response(status: u16, body: &str) -> Result<SessionPayload, SessionError> {
    match status {
        200 => SessionPayload::parse(body).map_err(|e| SessionError::Parse(e.to_string())),
        401 | 403 => Ok(SessionPayload::empty()),
        status => Err(SessionError::Status { status }),
    }
}

/// Pick the session source for the configured provider.
///
/// # Errors
///
/// Returns [`SessionError::HttpClientBuild`] if the HTTP client fails to build.
pub fn source_from_config(auth: &AuthProviderConfig) -> Result<Arc<dyn SessionSource>, SessionError> {
    match &auth.session_url {
        Some(url) => Ok(Arc::new(HttpSessionSource::new(url.clone(), auth.timeouts)?)),
        None => Ok(Arc::new(SignedOutSource)),
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
