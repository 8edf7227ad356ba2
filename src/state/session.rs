//! Session context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` as `RwSignal<SessionState>`. Auth flows are the only
//! writers (through `signed_in` / `signed_out`), plus a backend refusal of the
//! token, which signs out. Route guards, the nav menu and the badge read it to
//! decide what to render and which token to send. Role decisions go through
//! the role gate in `session::role`, not through this state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::UserSummary;
use crate::session::claims::{AuthorizedIdentity, DecodedClaims, read_identity};
use crate::session::storage::KeyValueStore;
use crate::session::token_store::{Session, SessionRevoked, TokenStore};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    /// Unverified claims decoded from the access token; display only.
    pub claims: Option<DecodedClaims>,
    /// Profile the backend returned for this session, if fetched.
    pub profile: Option<UserSummary>,
    pub profile_loading: bool,
    /// True until the stored session has been read.
    pub loading: bool,
}

impl SessionState {
    /// State before storage has been read.
    #[must_use]
    pub fn pending() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Restore from storage. An undecodable token reads as signed out.
    pub fn load<S: KeyValueStore>(store: &TokenStore<S>) -> Self {
        store.get().map_or_else(Self::signed_out, Self::signed_in)
    }

    #[must_use]
    pub fn signed_in(session: Session) -> Self {
        let Some(claims) = read_identity(&session.access_token) else {
            return Self::signed_out();
        };
        let profile = session.user.clone();
        Self {
            session: Some(session),
            claims: Some(claims),
            profile,
            profile_loading: false,
            loading: false,
        }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.access_token.as_str())
    }

    /// Mark the profile fetch as in flight.
    pub fn begin_profile_fetch(&mut self) {
        self.profile_loading = true;
    }

    /// Record the profile fetch outcome; loading ends either way. A refused
    /// token signs the session out.
    pub fn finish_profile_fetch(&mut self, outcome: Result<Option<AuthorizedIdentity>, SessionRevoked>) {
        match outcome {
            Ok(identity) => {
                if let Some(identity) = identity {
                    self.profile = Some(identity.into_user());
                }
                self.profile_loading = false;
            }
            Err(SessionRevoked) => *self = Self::signed_out(),
        }
    }

    /// Name for the header: profile name, then token email, then a generic label.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(profile) = &self.profile {
            return profile.display_name();
        }
        self.claims
            .as_ref()
            .and_then(|c| c.email.clone())
            .unwrap_or_else(|| "Guest".to_owned())
    }
}
