//! Auth flows: login, signup verification, password reset, logout.
//!
//! DESIGN
//! ======
//! Each flow is one request/response exchange driven by a page through
//! [`FlowState`] (`Idle -> Submitting -> Success | Failed`). Flows are the
//! only writers of the token store. Every failure is converted to a
//! [`FlowError`] whose `Display` is the message shown to the user; nothing
//! escapes to a global handler.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod forms;
pub mod login;
pub mod logout;
pub mod password;
pub mod signup;

use std::time::Duration;

use crate::net::api::ApiError;
use crate::session::storage::StorageError;

/// Shown when no structured server message is available.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Shown when the session could not be written to or removed from storage.
pub const STORAGE_ERROR_MESSAGE: &str = "Could not update your saved session. Please try again.";

/// User-facing failure of a flow.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    /// Client-side form check failed; no request was sent.
    #[error("{0}")]
    Validation(String),
    /// The backend rejected the request.
    #[error("{0}")]
    Auth(String),
    /// No usable response arrived.
    #[error("{0}")]
    Network(String),
    /// Local session storage failed.
    #[error("{0}")]
    Storage(String),
}

impl From<ApiError> for FlowError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Rejected {
                message: Some(message),
                ..
            } => FlowError::Auth(message),
            ApiError::Rejected { status, message: None } => {
                log::warn!("request rejected with status {status} and no message");
                FlowError::Auth(NETWORK_ERROR_MESSAGE.to_owned())
            }
            ApiError::Transport(e) => {
                log::warn!("{e}");
                FlowError::Network(NETWORK_ERROR_MESSAGE.to_owned())
            }
            ApiError::Decode(e) => {
                log::warn!("unexpected response: {e}");
                FlowError::Network(NETWORK_ERROR_MESSAGE.to_owned())
            }
        }
    }
}

impl From<StorageError> for FlowError {
    fn from(err: StorageError) -> Self {
        log::warn!("session storage failed: {err}");
        FlowError::Storage(STORAGE_ERROR_MESSAGE.to_owned())
    }
}

/// Lifecycle of one submit control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FlowState {
    #[default]
    Idle,
    Submitting,
    /// Finished; carries the confirmation to display (may be empty).
    Success(String),
    Failed(FlowError),
}

impl FlowState {
    /// Enter `Submitting`. Returns `false` if a submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = FlowState::Submitting;
        true
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, FlowState::Submitting)
    }

    /// Settle from a flow result, keeping the error for display.
    pub fn settle<T>(&mut self, result: &Result<T, FlowError>, success_message: &str) {
        *self = match result {
            Ok(_) => FlowState::Success(success_message.to_owned()),
            Err(e) => FlowState::Failed(e.clone()),
        };
    }

    /// Message to render under the form, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            FlowState::Success(message) if !message.is_empty() => Some(message.clone()),
            FlowState::Failed(e) => Some(e.to_string()),
            _ => None,
        }
    }
}

/// Where to go after a flow succeeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub path: String,
    /// Pause before navigating, so a confirmation can be read.
    pub delay: Option<Duration>,
}

impl Navigation {
    #[must_use]
    pub fn now(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            delay: None,
        }
    }

    #[must_use]
    pub fn after(path: impl Into<String>, delay: Duration) -> Self {
        Self {
            path: path.into(),
            delay: Some(delay),
        }
    }
}
