//! Local logout: drop the persisted session.

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;

use super::{FlowError, Navigation};
use crate::config::REDIRECT_DELAY;
use crate::routes;
use crate::session::storage::KeyValueStore;
use crate::session::token_store::TokenStore;

/// What the user picked on the logout failure screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoutChoice {
    Retry,
    Cancel,
}

/// Clear the session and head to login after a pause.
///
/// Works from any prior state, including no session at all.
///
/// # Errors
///
/// [`FlowError::Storage`] when a key could not be removed; the page then
/// offers [`LogoutChoice::Retry`] or [`LogoutChoice::Cancel`].
pub fn logout<S: KeyValueStore>(store: &TokenStore<S>) -> Result<Navigation, FlowError> {
    store.clear()?;
    log::info!("signed out");
    Ok(Navigation::after(routes::LOGIN, REDIRECT_DELAY))
}

/// Resolve a choice made after a failed logout.
///
/// # Errors
///
/// Retrying can fail again the same way as [`logout`].
pub fn resolve_failure<S: KeyValueStore>(
    store: &TokenStore<S>,
    choice: LogoutChoice,
) -> Result<Navigation, FlowError> {
    match choice {
        LogoutChoice::Retry => logout(store),
        LogoutChoice::Cancel => Ok(Navigation::now(routes::DASHBOARD)),
    }
}
