//! HTTP API handlers.

use std::sync::Arc;

use axum::{extract::State, http::header, response::IntoResponse};

/// Environment variable holding the identity of the serving host.
pub const HOSTNAME_VAR: &str = "HOSTNAME";

/// Host label reported when the hostname variable is unset or empty.
pub const FALLBACK_HOST: &str = "Local Machine";

/// Prefix of the `/data` response body.
pub const DATA_PREFIX: &str = "Microservicio corriendo en el Host: ";

/// Body of the `/health` response.
pub const HEALTH_BODY: &str = r#"{"status": "UP"}"#;

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Name of the environment variable read by `/data`.
    pub hostname_var: Arc<str>,
}

impl AppState {
    /// Create new app state reading `HOSTNAME`.
    pub fn new() -> Self {
        Self::with_hostname_var(HOSTNAME_VAR)
    }

    /// Create app state reading the host identity from another variable.
    pub fn with_hostname_var(name: &str) -> Self {
        Self {
            hostname_var: Arc::from(name),
        }
    }

    /// Current host identity. Read from the environment on every call.
    pub fn hostname(&self) -> String {
        host_label(std::env::var(&*self.hostname_var).ok())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply the `Local Machine` fallback to a raw hostname value.
pub fn host_label(raw: Option<String>) -> String {
    match raw {
        Some(host) if !host.is_empty() => host,
        _ => FALLBACK_HOST.to_string(),
    }
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], HEALTH_BODY)
}

/// Host identity handler - reports which instance served the request.
pub async fn data(State(state): State<AppState>) -> String {
    let host = state.hostname();
    tracing::debug!(host = %host, "Serving host identity");
    format!("{DATA_PREFIX}{host}")
}
