use futures::executor::block_on;

use super::*;
use crate::session::role::Role;
use crate::session::storage::MemoryStorage;
use crate::session::token_store::Session;
use crate::testing::{FakeTransport, client};

fn claims(user_id: &str) -> DecodedClaims {
    DecodedClaims {
        user_id: user_id.to_owned(),
        role: None,
        email: None,
        exp: None,
    }
}

fn signed_in_store() -> TokenStore<MemoryStorage> {
    let store = TokenStore::new(MemoryStorage::new());
    store
        .set(&Session {
            access_token: "tok".to_owned(),
            refresh_token: "r".to_owned(),
            role: Some(Role::Admin),
            user: None,
        })
        .unwrap();
    store
}

#[test]
fn success_returns_confirmed_identity() {
    let api = client(FakeTransport::default().respond(
        200,
        r#"{"id":3,"email":"t@school.test","first_name":"Tom","last_name":"Ray","role":"teacher","profile_image":"/m/t.png"}"#,
    ));
    let store = signed_in_store();
    let identity = block_on(fetch_profile(&api, &store, &claims("3"), "tok"))
        .unwrap()
        .unwrap();
    assert_eq!(identity.user().display_name(), "Tom Ray");
    assert_eq!(identity.user().role, Some(Role::Teacher));
}

#[test]
fn issues_exactly_one_authorized_get() {
    let api = client(FakeTransport::default().respond(200, r#"{"id":3,"email":"t@school.test"}"#));
    let store = signed_in_store();
    block_on(fetch_profile(&api, &store, &claims("3"), "tok")).unwrap();
    let requests = api.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, "http://backend.test/api/accounts/user/3/");
    assert_eq!(requests[0].authorization().as_deref(), Some("Bearer tok"));
}

#[test]
fn non_2xx_yields_no_profile_without_retry() {
    let api = client(
        FakeTransport::default()
            .respond(404, r#"{"detail":"Not found."}"#)
            .respond(200, r#"{"id":3,"email":"t@school.test"}"#),
    );
    let store = signed_in_store();
    assert_eq!(block_on(fetch_profile(&api, &store, &claims("3"), "tok")), Ok(None));
    assert_eq!(api.transport().requests().len(), 1);
    assert!(store.get().is_some());
}

#[test]
fn refused_token_ends_the_stored_session() {
    let api = client(FakeTransport::default().respond(401, r#"{"detail":"Token expired"}"#));
    let store = signed_in_store();

    let outcome = block_on(fetch_profile(&api, &store, &claims("3"), "tok"));

    assert_eq!(outcome, Err(SessionRevoked));
    assert_eq!(store.get(), None);
    assert_eq!(api.transport().requests().len(), 1);
}

#[test]
fn transport_failure_yields_no_profile() {
    let api = client(FakeTransport::default().fail("offline"));
    let store = signed_in_store();
    assert_eq!(block_on(fetch_profile(&api, &store, &claims("3"), "tok")), Ok(None));
    assert!(store.get().is_some());
}
