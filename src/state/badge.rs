//! Unread-announcement badge.
//!
//! Polled once per mount with the session's bearer token. Failures read as
//! zero unread; the badge never surfaces an error. A refused token is the one
//! failure that also ends the session.

#[cfg(test)]
#[path = "badge_test.rs"]
mod badge_test;

use super::session::SessionState;
use crate::net::api::ApiClient;
use crate::net::http::Transport;
use crate::net::types::Announcement;
use crate::session::storage::KeyValueStore;
use crate::session::token_store::{SessionRevoked, TokenStore};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BadgeState {
    pub count: usize,
    pub loading: bool,
}

impl BadgeState {
    /// Initial state while the poll is in flight.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            count: 0,
            loading: true,
        }
    }

    /// Text for the badge bubble; `None` hides it.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        match self.count {
            0 => None,
            1..=99 => Some(self.count.to_string()),
            _ => Some("99+".to_owned()),
        }
    }
}

/// Announcements explicitly flagged unread; a missing flag does not count.
#[must_use]
pub fn unread_count(items: &[Announcement]) -> usize {
    items.iter().filter(|item| item.is_read == Some(false)).count()
}

/// What the badge should do for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PollPlan {
    /// Stored session not read yet.
    Wait,
    /// No token to poll with; settle at zero.
    Skip,
    Poll(String),
}

#[must_use]
pub fn plan_poll(session: &SessionState) -> PollPlan {
    if session.loading {
        return PollPlan::Wait;
    }
    match session.access_token() {
        Some(token) => PollPlan::Poll(token.to_owned()),
        None => PollPlan::Skip,
    }
}

/// Fetch announcements once and count the unread ones.
///
/// # Errors
///
/// [`SessionRevoked`] when the backend refused `token`; the stored session has
/// been cleared. Every other failure reads as zero unread.
pub async fn poll_unread<T, S>(
    api: &ApiClient<T>,
    store: &TokenStore<S>,
    token: Option<&str>,
) -> Result<BadgeState, SessionRevoked>
where
    T: Transport,
    S: KeyValueStore,
{
    let Some(token) = token else {
        return Ok(BadgeState::default());
    };
    match api.fetch_announcements(token).await {
        Ok(items) => Ok(BadgeState {
            count: unread_count(&items),
            loading: false,
        }),
        Err(e) => {
            log::warn!("announcement poll failed: {e}");
            store.revoke_on_unauthorized(&e)?;
            Ok(BadgeState::default())
        }
    }
}
