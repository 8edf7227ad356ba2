//! Client configuration resolved at compile time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the backend
//! authority is baked in from `BACKEND_URL` / `AUTH_BASE_URL` when the crate
//! is built. Auth routes default to same-origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Backend authority used when `BACKEND_URL` is not set at build time.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Pause before redirecting to `/login` after signup verification or logout.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// Where each side of the REST API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Authority of the school REST backend (accounts, announcements).
    pub backend_url: String,
    /// Prefix for the `/api/auth/*` routes; empty means same-origin.
    pub auth_base: String,
}

impl ApiConfig {
    #[must_use]
    pub fn new(backend_url: &str, auth_base: &str) -> Self {
        Self {
            backend_url: normalize_base(backend_url),
            auth_base: normalize_base(auth_base),
        }
    }

    /// Build from the compile-time environment.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL),
            option_env!("AUTH_BASE_URL").unwrap_or(""),
        )
    }

    /// Absolute URL for a path on the school backend.
    #[must_use]
    pub fn backend(&self, path: &str) -> String {
        format!("{}{path}", self.backend_url)
    }

    /// URL for a path on the auth routes.
    #[must_use]
    pub fn auth(&self, path: &str) -> String {
        format!("{}{path}", self.auth_base)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
