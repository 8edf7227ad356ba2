//! Role-gated navigation menu.
//!
//! Every role maps to its own fixed menu via an exhaustive match; adding a
//! role fails to compile until it gets one. Guests see nothing but the
//! public links. The role itself always comes from the role gate, and only
//! once a session has been loaded.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::routes;
use crate::session::role::{Role, current_role, is_admin, is_parent, is_student, is_teacher};
use crate::session::storage::KeyValueStore;
use crate::state::session::SessionState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

const fn item(label: &'static str, href: &'static str) -> NavItem {
    NavItem { label, href }
}

const HOME: NavItem = item("Home", routes::DASHBOARD);
const TEACHERS: NavItem = item("Teachers", "/list/teachers");
const STUDENTS: NavItem = item("Students", "/list/students");
const PARENTS: NavItem = item("Parents", "/list/parents");
const CLASSES: NavItem = item("Classes", "/list/classes");
const ATTENDANCE: NavItem = item("Attendance", "/list/attendance");
const ANNOUNCEMENTS: NavItem = item("Announcements", "/list/announcements");
const PROFILE: NavItem = item("Profile", "/profile");
const LOGOUT: NavItem = item("Logout", routes::LOGOUT);

const ADMIN_MENU: &[NavItem] = &[
    HOME,
    TEACHERS,
    STUDENTS,
    PARENTS,
    CLASSES,
    ATTENDANCE,
    ANNOUNCEMENTS,
    PROFILE,
    LOGOUT,
];
const TEACHER_MENU: &[NavItem] = &[HOME, STUDENTS, CLASSES, ATTENDANCE, ANNOUNCEMENTS, PROFILE, LOGOUT];
const STUDENT_MENU: &[NavItem] = &[HOME, CLASSES, ATTENDANCE, ANNOUNCEMENTS, PROFILE, LOGOUT];
const PARENT_MENU: &[NavItem] = &[HOME, STUDENTS, ATTENDANCE, ANNOUNCEMENTS, PROFILE, LOGOUT];
const GUEST_MENU: &[NavItem] = &[item("Login", routes::LOGIN), item("Forgot password", routes::FORGOT_PASSWORD)];

/// Menu for the session's role; `None` is a guest.
#[must_use]
pub fn menu_for(role: Option<Role>) -> &'static [NavItem] {
    match role {
        Some(Role::Admin) => ADMIN_MENU,
        Some(Role::Teacher) => TEACHER_MENU,
        Some(Role::Student) => STUDENT_MENU,
        Some(Role::Parent) => PARENT_MENU,
        None => GUEST_MENU,
    }
}

/// Role to render for: the gate's stored role while a session is signed in.
pub fn session_role<S: KeyValueStore + ?Sized>(state: &SessionState, store: &S) -> Option<Role> {
    if state.loading || !state.is_authenticated() {
        return None;
    }
    current_role(store)
}

/// Dashboard shortcut buttons the stored role is allowed to see.
pub fn shortcuts<S: KeyValueStore + ?Sized>(state: &SessionState, store: &S) -> Vec<NavItem> {
    if session_role(state, store).is_none() {
        return Vec::new();
    }
    let gated: [(fn(&S) -> bool, NavItem); 4] = [
        (is_admin::<S>, item("Manage teachers", "/list/teachers")),
        (is_teacher::<S>, item("Take attendance", "/list/attendance")),
        (is_student::<S>, item("My classes", "/list/classes")),
        (is_parent::<S>, item("My children", "/list/students")),
    ];
    gated
        .into_iter()
        .filter(|(allowed, _)| allowed(store))
        .map(|(_, shortcut)| shortcut)
        .collect()
}
