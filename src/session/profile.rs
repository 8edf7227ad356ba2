//! User profile lookup keyed by the decoded identity.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use super::claims::{AuthorizedIdentity, DecodedClaims};
use super::storage::KeyValueStore;
use super::token_store::{SessionRevoked, TokenStore};
use crate::net::api::ApiClient;
use crate::net::http::Transport;

/// Fetch the profile for `claims` once, authenticating with `token`.
///
/// Any failure yields `Ok(None)` and is logged; there is no retry. Re-fetch
/// timing belongs to the caller (once per mount).
///
/// # Errors
///
/// [`SessionRevoked`] when the backend refused `token`; the stored session
/// has already been cleared.
pub async fn fetch_profile<T, S>(
    api: &ApiClient<T>,
    store: &TokenStore<S>,
    claims: &DecodedClaims,
    token: &str,
) -> Result<Option<AuthorizedIdentity>, SessionRevoked>
where
    T: Transport,
    S: KeyValueStore,
{
    match api.fetch_user(&claims.user_id, token).await {
        Ok(user) => Ok(Some(AuthorizedIdentity::confirmed(user))),
        Err(e) => {
            log::warn!("profile fetch for user {} failed: {e}", claims.user_id);
            store.revoke_on_unauthorized(&e)?;
            Ok(None)
        }
    }
}
