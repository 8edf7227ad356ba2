use serde_json::json;

use super::*;
use crate::session::storage::MemoryStorage;
use crate::session::token_store::{ROLE_KEY, Session};
use crate::testing::token_with;

fn visits(role: Option<Role>, href: &str) -> bool {
    menu_for(role).iter().any(|entry| entry.href == href)
}

fn signed_in() -> SessionState {
    SessionState::signed_in(Session {
        access_token: token_with(&json!({"user_id": 5})),
        refresh_token: String::new(),
        role: None,
        user: None,
    })
}

fn store_with_role(role: &str) -> MemoryStorage {
    let store = MemoryStorage::new();
    store.set_item(ROLE_KEY, role).unwrap();
    store
}

// =============================================================
// menu_for
// =============================================================

#[test]
fn admin_sees_every_list() {
    let hrefs: Vec<_> = menu_for(Some(Role::Admin)).iter().map(|i| i.href).collect();
    for href in ["/list/teachers", "/list/students", "/list/parents", "/list/classes"] {
        assert!(hrefs.contains(&href), "admin missing {href}");
    }
}

#[test]
fn students_cannot_browse_teachers_or_parents() {
    assert!(!visits(Some(Role::Student), "/list/teachers"));
    assert!(!visits(Some(Role::Student), "/list/parents"));
    assert!(visits(Some(Role::Student), "/list/attendance"));
}

#[test]
fn parent_sees_students_but_not_classes() {
    assert!(visits(Some(Role::Parent), "/list/students"));
    assert!(!visits(Some(Role::Parent), "/list/classes"));
}

#[test]
fn every_role_can_reach_home_and_logout() {
    for role in Role::ALL {
        assert!(visits(Some(role), routes::DASHBOARD), "{role}");
        assert!(visits(Some(role), routes::LOGOUT), "{role}");
    }
}

#[test]
fn guest_only_sees_public_links() {
    assert!(visits(None, routes::LOGIN));
    assert!(!visits(None, routes::DASHBOARD));
    assert!(!visits(None, "/list/announcements"));
}

// =============================================================
// session_role / shortcuts
// =============================================================

#[test]
fn session_role_reads_the_stored_role() {
    assert_eq!(session_role(&signed_in(), &store_with_role("teacher")), Some(Role::Teacher));
}

#[test]
fn session_role_is_none_until_signed_in() {
    let store = store_with_role("admin");
    assert_eq!(session_role(&SessionState::pending(), &store), None);
    assert_eq!(session_role(&SessionState::signed_out(), &store), None);
}

#[test]
fn each_role_gets_its_own_shortcut() {
    let cases = [
        ("admin", "/list/teachers"),
        ("teacher", "/list/attendance"),
        ("student", "/list/classes"),
        ("parent", "/list/students"),
    ];
    for (role, href) in cases {
        let found = shortcuts(&signed_in(), &store_with_role(role));
        assert_eq!(found.len(), 1, "{role}");
        assert_eq!(found[0].href, href, "{role}");
    }
}

#[test]
fn unknown_or_missing_role_has_no_shortcuts() {
    assert!(shortcuts(&signed_in(), &store_with_role("janitor")).is_empty());
    assert!(shortcuts(&signed_in(), &MemoryStorage::new()).is_empty());
    assert!(shortcuts(&SessionState::signed_out(), &store_with_role("admin")).is_empty());
}
