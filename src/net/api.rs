//! REST API helpers for the school backend and the auth routes.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; callers decide whether a failure
//! is shown inline (auth flows) or degrades silently (profile, badge).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::http::{HttpRequest, HttpResponse, Transport, TransportError};
use super::types::{
    Announcement, EmailRequest, LoginRequest, LoginResponse, MessageResponse, ResetPasswordRequest,
    UserSummary, VerifyEmailRequest, server_message,
};
use crate::config::ApiConfig;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const FORGOT_PASSWORD_PATH: &str = "/api/auth/forgot-password";
pub const RESET_PASSWORD_PATH: &str = "/api/auth/reset-password";
pub const RESEND_RESET_CODE_PATH: &str = "/api/auth/resend-reset-code";
pub const VERIFY_EMAIL_PATH: &str = "/api/accounts/users/verify_email/";
pub const ANNOUNCEMENTS_PATH: &str = "/api/announcements/";

fn user_profile_path(user_id: &str) -> String {
    format!("/api/accounts/user/{user_id}/")
}

/// Failure of a single backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        /// Message from a structured `{error}` / `{message}` body, if any.
        message: Option<String>,
    },
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// A 2xx body that does not match the expected schema.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether the bearer token was refused.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Rejected { status: 401 | 403, .. })
    }
}

/// Typed access to every endpoint the client consumes.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    transport: T,
    config: ApiConfig,
}

#[cfg(feature = "hydrate")]
impl ApiClient<super::http::BrowserTransport> {
    /// Client over `fetch` using the build-time configuration.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(super::http::BrowserTransport, ApiConfig::from_build_env())
    }
}

impl<T: Transport> ApiClient<T> {
    #[must_use]
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or a body
    /// without an access token.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = self.config.auth(LOGIN_PATH);
        self.post(url, &LoginRequest { email, password }).await
    }

    /// `POST {backend}/api/accounts/users/verify_email/`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-2xx status.
    pub async fn verify_email(&self, email: &str, otp: &str) -> Result<MessageResponse, ApiError> {
        let url = self.config.backend(VERIFY_EMAIL_PATH);
        self.post(url, &VerifyEmailRequest { email, otp }).await
    }

    /// `POST /api/auth/forgot-password`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-2xx status.
    pub async fn forgot_password(&self, email: &str) -> Result<MessageResponse, ApiError> {
        let url = self.config.auth(FORGOT_PASSWORD_PATH);
        self.post(url, &EmailRequest { email }).await
    }

    /// `POST /api/auth/reset-password`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-2xx status.
    pub async fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ApiError> {
        let url = self.config.auth(RESET_PASSWORD_PATH);
        let body = ResetPasswordRequest {
            email,
            code,
            new_password,
        };
        self.post(url, &body).await
    }

    /// `POST /api/auth/resend-reset-code`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-2xx status.
    pub async fn resend_reset_code(&self, email: &str) -> Result<MessageResponse, ApiError> {
        let url = self.config.auth(RESEND_RESET_CODE_PATH);
        self.post(url, &EmailRequest { email }).await
    }

    /// `GET {backend}/api/accounts/user/{id}/` with the bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or a body
    /// that is not a user profile.
    pub async fn fetch_user(&self, user_id: &str, token: &str) -> Result<UserSummary, ApiError> {
        let url = self.config.backend(&user_profile_path(user_id));
        self.get_authorized(url, token).await
    }

    /// `GET {backend}/api/announcements/` with the bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, or a body
    /// that is not an announcement list.
    pub async fn fetch_announcements(&self, token: &str) -> Result<Vec<Announcement>, ApiError> {
        let url = self.config.backend(ANNOUNCEMENTS_PATH);
        self.get_authorized(url, token).await
    }

    async fn post<B, R>(&self, url: String, body: &B) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let payload = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = self.transport.send(HttpRequest::post_json(url, payload)).await?;
        decode(&resp)
    }

    async fn get_authorized<R: DeserializeOwned>(&self, url: String, token: &str) -> Result<R, ApiError> {
        let resp = self
            .transport
            .send(HttpRequest::get(url).with_bearer(token))
            .await?;
        decode(&resp)
    }
}

fn decode<R: DeserializeOwned>(resp: &HttpResponse) -> Result<R, ApiError> {
    if !resp.is_success() {
        return Err(ApiError::Rejected {
            status: resp.status,
            message: server_message(&resp.body),
        });
    }
    // Some acknowledgements come back with an empty body.
    let body = if resp.body.trim().is_empty() { "{}" } else { resp.body.as_str() };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
