//! Account roles and the role gate.
//!
//! DESIGN
//! ======
//! Roles form a closed set; render decisions match on [`Role`] exhaustively
//! instead of comparing strings. The gate below is the single role authority:
//! it re-reads the stored `role` key on every call, so a logout in this tab is
//! reflected immediately.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use super::storage::KeyValueStore;
use super::token_store::ROLE_KEY;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    Student,
    Parent,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Teacher, Role::Student, Role::Parent];

    /// Lowercase wire/storage spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Student => "student",
            Role::Parent => "parent",
        }
    }

    /// Exact match against the four stored spellings.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.as_str() == raw)
    }

    /// Lenient parse for backend payloads and token claims, which may differ in
    /// case or padding. Stored values always use [`Role::as_str`].
    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Role> {
        Role::parse(&raw.trim().to_ascii_lowercase())
    }

    /// Human label for headers and menus.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Teacher => "Teacher",
            Role::Student => "Student",
            Role::Parent => "Parent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role currently stored for this browser, if it is one of the known roles.
pub fn current_role<S: KeyValueStore + ?Sized>(store: &S) -> Option<Role> {
    store.get_item(ROLE_KEY).as_deref().and_then(Role::parse)
}

/// Stored role string, or `""` when it is missing or not a known role.
pub fn user_role<S: KeyValueStore + ?Sized>(store: &S) -> String {
    current_role(store).map(Role::as_str).unwrap_or_default().to_owned()
}

pub fn is_admin<S: KeyValueStore + ?Sized>(store: &S) -> bool {
    current_role(store) == Some(Role::Admin)
}

pub fn is_teacher<S: KeyValueStore + ?Sized>(store: &S) -> bool {
    current_role(store) == Some(Role::Teacher)
}

pub fn is_student<S: KeyValueStore + ?Sized>(store: &S) -> bool {
    current_role(store) == Some(Role::Student)
}

pub fn is_parent<S: KeyValueStore + ?Sized>(store: &S) -> bool {
    current_role(store) == Some(Role::Parent)
}
