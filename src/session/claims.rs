//! Structural decoding of access-token claims.
//!
//! The payload segment is base64url-decoded and parsed as JSON. The signature
//! is never checked, so [`DecodedClaims`] is fit for display and for picking
//! which profile to fetch, nothing more. [`AuthorizedIdentity`] can only be
//! built from a profile the backend returned for an authenticated request.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::Deserialize;

use super::role::Role;
use crate::net::types::UserSummary;

/// base64url that accepts payloads with or without `=` padding.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, thiserror::Error)]
pub enum ClaimsError {
    #[error("token is not three dot-separated segments")]
    Malformed,
    #[error("payload is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not a JSON object: {0}")]
    Json(#[from] serde_json::Error),
    #[error("payload carries no user_id or id claim")]
    MissingIdentity,
}

/// Unverified claims read from an access token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedClaims {
    pub user_id: String,
    pub role: Option<Role>,
    pub email: Option<String>,
    /// Expiry in seconds since the epoch; informational only.
    pub exp: Option<i64>,
}

#[derive(Deserialize)]
struct RawClaims {
    user_id: Option<serde_json::Value>,
    id: Option<serde_json::Value>,
    role: Option<String>,
    email: Option<String>,
    exp: Option<i64>,
}

/// Decode the payload of `token` without verifying it.
///
/// # Errors
///
/// Returns [`ClaimsError`] when the token is not JWT-shaped, the payload is
/// not base64url JSON, or neither `user_id` nor `id` is present.
pub fn decode_claims(token: &str) -> Result<DecodedClaims, ClaimsError> {
    let mut segments = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(ClaimsError::Malformed);
    };
    if payload.is_empty() {
        return Err(ClaimsError::Malformed);
    }

    let bytes = PAYLOAD_ENGINE.decode(payload)?;
    let raw: RawClaims = serde_json::from_slice(&bytes)?;
    let user_id = [raw.user_id, raw.id]
        .into_iter()
        .flatten()
        .find_map(claim_to_id)
        .ok_or(ClaimsError::MissingIdentity)?;

    Ok(DecodedClaims {
        user_id,
        role: raw.role.as_deref().and_then(Role::from_wire),
        email: raw.email,
        exp: raw.exp,
    })
}

/// Identity for display, or `None` meaning "no session".
pub fn read_identity(token: &str) -> Option<DecodedClaims> {
    match decode_claims(token) {
        Ok(claims) => Some(claims),
        Err(e) => {
            log::debug!("treating undecodable access token as signed out: {e}");
            None
        }
    }
}

fn claim_to_id(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Identity the backend confirmed by answering an authenticated request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizedIdentity {
    user: UserSummary,
}

impl AuthorizedIdentity {
    /// Only the profile fetcher constructs this, from a 2xx response body.
    pub(crate) fn confirmed(user: UserSummary) -> Self {
        Self { user }
    }

    #[must_use]
    pub fn user(&self) -> &UserSummary {
        &self.user
    }

    #[must_use]
    pub fn into_user(self) -> UserSummary {
        self.user
    }
}
