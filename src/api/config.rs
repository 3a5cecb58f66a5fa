//! API Layer - Configuration and Session Context
//!
//! Session state (token, role) is injected per client instance rather than
//! read from ambient global state, so two admin sessions in one process
//! cannot bleed into each other.

use std::time::Duration;

/// Connection settings for the backend REST API
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL without a trailing slash, e.g. `https://api.example.com/v1`
    pub base_url: String,
    pub request_timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, request_timeout: Duration::from_secs(30) }
    }
}

/// Request-scoped session context
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Bearer token; `None` for endpoints reachable before login
    pub token: Option<String>,
    /// Role the backend reported at login (e.g. "admin", "teacher")
    pub role: Option<String>,
}

impl Session {
    pub fn authenticated(token: impl Into<String>, role: impl Into<String>) -> Self {
        Self { token: Some(token.into()), role: Some(role.into()) }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }
}
