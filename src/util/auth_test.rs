use serde_json::json;

use super::*;
use crate::session::token_store::Session;
use crate::testing::token_with;

#[test]
fn should_redirect_unauth_when_not_loading_and_session_missing() {
    assert!(should_redirect_unauth(&SessionState::signed_out()));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&SessionState::pending()));
}

#[test]
fn should_not_redirect_when_session_exists() {
    let state = SessionState::signed_in(Session {
        access_token: token_with(&json!({"user_id": "u1"})),
        refresh_token: String::new(),
        role: None,
        user: None,
    });
    assert!(!should_redirect_unauth(&state));
}
