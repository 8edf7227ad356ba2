//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome while reading the shared
//! `RwSignal<SessionState>` from Leptos context.

pub mod announcement_badge;
pub mod role_menu;
