//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns one auth flow's `FlowState` and delegates the exchange to
//! `crate::flows`; rendering details live in `components`.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod dashboard;
pub mod forgot_password;
pub mod login;
pub mod logout;
pub mod reset_password;
pub mod verify_email;

use leptos_router::NavigateOptions;

use crate::flows::{FlowState, Navigation};

/// Submit button text for the current flow state.
pub(crate) fn submit_label(state: &FlowState, idle: &'static str, busy: &'static str) -> &'static str {
    if state.is_submitting() { busy } else { idle }
}

/// CSS modifier for the form message line.
pub(crate) fn message_class(state: &FlowState) -> &'static str {
    match state {
        FlowState::Failed(_) => "auth-message auth-message--error",
        _ => "auth-message",
    }
}

/// Navigate to `next.path`, waiting out its delay first in the browser.
pub(crate) async fn follow<F>(navigate: F, next: Navigation)
where
    F: Fn(&str, NavigateOptions),
{
    #[cfg(feature = "hydrate")]
    {
        if let Some(delay) = next.delay {
            gloo_timers::future::sleep(delay).await;
        }
    }
    navigate(&next.path, NavigateOptions::default());
}
