//! Host configuration parsed from environment variables.
//!
//! A `.env` file is loaded first (see `main`), so every value below can also
//! come from there.

use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_AUTH_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_AUTH_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but does not parse.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Where the external auth provider lives. Any URL may be absent; the matching
/// feature then degrades (no session, or a 503 hand-off).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthProviderConfig {
    pub session_url: Option<String>,
    pub login_url: Option<String>,
    pub register_url: Option<String>,
    pub timeouts: AuthTimeouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub auth: AuthProviderConfig,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `AUTH_SESSION_URL`: upstream session endpoint (next-auth style)
    /// - `AUTH_LOGIN_URL`, `AUTH_REGISTER_URL`: upstream sign-in / sign-up pages
    /// - `AUTH_REQUEST_TIMEOUT_SECS`: default 10
    /// - `AUTH_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a numeric variable does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
        let timeouts = AuthTimeouts {
            request_secs: parse_or(
                "AUTH_REQUEST_TIMEOUT_SECS",
                get("AUTH_REQUEST_TIMEOUT_SECS"),
                DEFAULT_AUTH_REQUEST_TIMEOUT_SECS,
            )?,
            connect_secs: parse_or(
                "AUTH_CONNECT_TIMEOUT_SECS",
                get("AUTH_CONNECT_TIMEOUT_SECS"),
                DEFAULT_AUTH_CONNECT_TIMEOUT_SECS,
            )?,
        };
        let auth = AuthProviderConfig {
            session_url: get("AUTH_SESSION_URL"),
            login_url: get("AUTH_LOGIN_URL"),
            register_url: get("AUTH_REGISTER_URL"),
            timeouts,
        };

        Ok(Self { port, auth })
    }
}

fn parse_or<T: FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
