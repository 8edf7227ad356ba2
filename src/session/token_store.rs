//! Persisted session tokens.
//!
//! Four string keys in one storage namespace: `accessToken`, `refreshToken`,
//! `user` (JSON) and `role`. Writes replace the whole session so concurrent
//! tabs can only ever observe last-write-wins, never a field-level merge.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use super::role::Role;
use super::storage::{KeyValueStore, StorageError};
use crate::net::api::ApiError;
use crate::net::types::UserSummary;

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub const USER_KEY: &str = "user";
pub const ROLE_KEY: &str = "role";

/// Every key the store owns, in removal order.
pub const SESSION_KEYS: [&str; 4] = [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY, ROLE_KEY];

/// Client-held proof of authentication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub role: Option<Role>,
    pub user: Option<UserSummary>,
}

/// The backend refused the stored access token and the session was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("access token rejected by the backend")]
pub struct SessionRevoked;

/// Single owner of the persisted session keys.
#[derive(Clone, Debug, Default)]
pub struct TokenStore<S> {
    storage: S,
}

impl TokenStore<super::storage::BrowserStorage> {
    /// Store over `window.localStorage`; empty and read-only outside the browser.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(super::storage::BrowserStorage)
    }
}

impl<S: KeyValueStore> TokenStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persist `session`, replacing whatever was stored.
    ///
    /// # Errors
    ///
    /// Returns the first [`StorageError`]; keys written before it stay written.
    pub fn set(&self, session: &Session) -> Result<(), StorageError> {
        self.storage.set_item(ACCESS_TOKEN_KEY, &session.access_token)?;
        self.storage.set_item(REFRESH_TOKEN_KEY, &session.refresh_token)?;
        match &session.user {
            Some(user) => {
                let raw = serde_json::to_string(user).map_err(|_| StorageError::WriteFailed {
                    key: USER_KEY.to_owned(),
                })?;
                self.storage.set_item(USER_KEY, &raw)?;
            }
            None => self.storage.remove_item(USER_KEY)?,
        }
        match session.role {
            Some(role) => self.storage.set_item(ROLE_KEY, role.as_str()),
            None => self.storage.remove_item(ROLE_KEY),
        }
    }

    /// Read the stored session; `None` unless a non-empty access token exists.
    pub fn get(&self) -> Option<Session> {
        let access_token = self.access_token()?;
        let refresh_token = self.storage.get_item(REFRESH_TOKEN_KEY).unwrap_or_default();
        let user = self.storage.get_item(USER_KEY).and_then(|raw| {
            serde_json::from_str::<UserSummary>(&raw)
                .map_err(|e| log::debug!("ignoring malformed stored user: {e}"))
                .ok()
        });
        let role = self.storage.get_item(ROLE_KEY).as_deref().and_then(Role::parse);
        Some(Session {
            access_token,
            refresh_token,
            role,
            user,
        })
    }

    pub fn access_token(&self) -> Option<String> {
        self.storage
            .get_item(ACCESS_TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    /// Remove every session key.
    ///
    /// Removal is attempted for all keys even after a failure.
    ///
    /// # Errors
    ///
    /// Returns the first [`StorageError`] encountered.
    pub fn clear(&self) -> Result<(), StorageError> {
        let mut first_error = None;
        for key in SESSION_KEYS {
            if let Err(e) = self.storage.remove_item(key) {
                log::warn!("failed to remove {key} from storage: {e}");
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Drop the session when `err` means the bearer token was refused.
    ///
    /// Any other failure leaves the session alone: the token stays valid until
    /// an authenticated request is rejected for authorization.
    ///
    /// # Errors
    ///
    /// [`SessionRevoked`] once the token was refused; the caller signs out.
    pub fn revoke_on_unauthorized(&self, err: &ApiError) -> Result<(), SessionRevoked> {
        if !err.is_unauthorized() {
            return Ok(());
        }
        log::info!("access token rejected, clearing session");
        if let Err(e) = self.clear() {
            log::warn!("rejected session could not be fully cleared: {e}");
        }
        Err(SessionRevoked)
    }
}
