//! Access Gate: a single shared secret in front of the API.
//!
//! `POST /api/v1/access` checks a password for the login screen. Every other
//! gated route expects the same secret in the `x-access-key` header. There is no
//! session or token; the browser keeps the secret and resends it.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;

pub const ACCESS_HEADER: &str = "x-access-key";

#[derive(Clone)]
pub struct AccessGate {
    secret: Arc<str>,
}

impl AccessGate {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Exact, case-sensitive comparison with no trimming.
    pub fn check(&self, password: &str) -> bool {
        password == &*self.secret
    }
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate").finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
pub struct AccessRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AccessResponse {
    pub granted: bool,
}

/// POST /api/v1/access
pub async fn handle_access(
    State(state): State<AppState>,
    Json(request): Json<AccessRequest>,
) -> Result<Json<AccessResponse>, AppError> {
    if state.gate.check(&request.password) {
        Ok(Json(AccessResponse { granted: true }))
    } else {
        warn!("Rejected access attempt");
        Err(AppError::Unauthorized)
    }
}

/// Middleware for gated routes: requires `x-access-key` to match the secret.
pub async fn require_access(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let supplied = request
        .headers()
        .get(ACCESS_HEADER)
        .and_then(|v| v.to_str().ok());

    match supplied {
        Some(key) if state.gate.check(key) => Ok(next.run(request).await),
        _ => Err(AppError::Unauthorized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        let gate = AccessGate::new("rahasia-sekolah");
        assert!(gate.check("rahasia-sekolah"));
        assert!(!gate.check("Rahasia-Sekolah"));
        assert!(!gate.check(" rahasia-sekolah"));
        assert!(!gate.check(""));
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let gate = AccessGate::new("rahasia-sekolah");
        assert!(!format!("{gate:?}").contains("rahasia"));
    }
}
