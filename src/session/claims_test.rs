use serde_json::json;

use super::*;
use crate::testing::token_with;

#[test]
fn decodes_user_id_claim() {
    let token = token_with(&json!({"user_id": 42, "role": "teacher", "exp": 1_900_000_000}));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.user_id, "42");
    assert_eq!(claims.role, Some(Role::Teacher));
    assert_eq!(claims.exp, Some(1_900_000_000));
}

#[test]
fn falls_back_to_id_claim() {
    let token = token_with(&json!({"id": "abc-123", "email": "a@b.com"}));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.user_id, "abc-123");
    assert_eq!(claims.email.as_deref(), Some("a@b.com"));
    assert_eq!(claims.role, None);
}

#[test]
fn user_id_wins_over_id() {
    let token = token_with(&json!({"user_id": "primary", "id": "secondary"}));
    assert_eq!(decode_claims(&token).unwrap().user_id, "primary");
}

#[test]
fn padded_payload_is_accepted() {
    // {"id":1} is 8 bytes, so standard base64 pads it.
    let token = "eyJhbGciOiJub25lIn0.eyJpZCI6MX0=.sig";
    assert_eq!(decode_claims(token).unwrap().user_id, "1");
}

#[test]
fn wrong_segment_count_is_malformed() {
    assert!(matches!(decode_claims("not-a-token"), Err(ClaimsError::Malformed)));
    assert!(matches!(decode_claims("a.b"), Err(ClaimsError::Malformed)));
    assert!(matches!(decode_claims("a.b.c.d"), Err(ClaimsError::Malformed)));
    assert!(matches!(decode_claims("a..c"), Err(ClaimsError::Malformed)));
}

#[test]
fn non_base64_payload_is_rejected() {
    assert!(matches!(decode_claims("a.!!!.c"), Err(ClaimsError::Base64(_))));
}

#[test]
fn non_json_payload_is_rejected() {
    // "hello" in base64url
    assert!(matches!(decode_claims("a.aGVsbG8.c"), Err(ClaimsError::Json(_))));
}

#[test]
fn payload_without_identity_is_rejected() {
    let token = token_with(&json!({"role": "admin"}));
    assert!(matches!(decode_claims(&token), Err(ClaimsError::MissingIdentity)));
}

#[test]
fn read_identity_swallows_decode_errors() {
    assert_eq!(read_identity("garbage"), None);
    assert_eq!(read_identity(""), None);
}

#[test]
fn read_identity_returns_claims_for_valid_token() {
    let token = token_with(&json!({"user_id": 9}));
    assert_eq!(read_identity(&token).map(|c| c.user_id), Some("9".to_owned()));
}

#[test]
fn authorized_identity_exposes_confirmed_user() {
    let user = UserSummary {
        id: "9".to_owned(),
        email: "a@b.com".to_owned(),
        first_name: String::new(),
        last_name: String::new(),
        role: Some(Role::Admin),
        profile_image: None,
    };
    let identity = AuthorizedIdentity::confirmed(user.clone());
    assert_eq!(identity.user().role, Some(Role::Admin));
    assert_eq!(identity.into_user(), user);
}
