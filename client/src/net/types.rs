//! Shared wire DTOs for the client/host boundary.
//!
//! DESIGN
//! ======
//! The session body mirrors the next-auth `/api/auth/session` shape so the
//! host can forward an upstream provider's response without reshaping it:
//! `{}` means "no session", `{ "user": { .. }, "expires": ".." }` means signed in.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Identity fields of the signed-in user. Every field is optional upstream.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Session body returned by `GET /api/auth/session`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
    /// Expiry timestamp as reported by the auth provider (ISO-8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
}

impl SessionPayload {
    /// Payload for "no session".
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decode a session body, treating an empty body or JSON `null` as "no session".
    ///
    /// # Errors
    ///
    /// Returns the serde error when the body is neither empty, `null`, nor a
    /// session object.
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        let body = body.trim();
        if body.is_empty() {
            return Ok(Self::empty());
        }
        let parsed: Option<Self> = serde_json::from_str(body)?;
        Ok(parsed.unwrap_or_default())
    }
}
