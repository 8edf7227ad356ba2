//! Client-held session: persisted tokens, decoded claims, and role gating.
//!
//! SYSTEM CONTEXT
//! ==============
//! `token_store` is the only module that touches the four persisted keys.
//! `claims` decodes identity for display; `profile` is the only path to a
//! server-confirmed identity. Authorization itself stays server-side: every
//! request carries the bearer token and the backend decides.

pub mod claims;
pub mod profile;
pub mod role;
pub mod storage;
pub mod token_store;

pub use claims::{AuthorizedIdentity, ClaimsError, DecodedClaims};
pub use role::Role;
pub use storage::{BrowserStorage, KeyValueStore, MemoryStorage, StorageError};
pub use token_store::{Session, SessionRevoked, TokenStore};
