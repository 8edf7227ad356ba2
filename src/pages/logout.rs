//! Logout page: clears the stored session on mount, then returns to login.
//!
//! If storage refuses to drop a key the page stays put and offers Retry or
//! Cancel (back to the dashboard) instead of pretending the user is out.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;

use crate::flows::logout::{LogoutChoice, logout, resolve_failure};
use crate::flows::{FlowError, Navigation};
use crate::routes;
use crate::session::TokenStore;
use crate::state::session::SessionState;

#[derive(Clone, Debug, PartialEq, Eq)]
enum LogoutView {
    Working,
    Done,
    Failed(FlowError),
}

#[component]
pub fn LogoutPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let status = RwSignal::new(LogoutView::Working);

    let apply = move |result: Result<Navigation, FlowError>| match result {
        Ok(next) => {
            if next.path == routes::LOGIN {
                session.set(SessionState::signed_out());
                status.set(LogoutView::Done);
            }
            let navigate = navigate.clone();
            leptos::task::spawn_local(super::follow(navigate, next));
        }
        Err(e) => status.set(LogoutView::Failed(e)),
    };

    // Runs once on mount; nothing here is tracked.
    let apply_mount = apply.clone();
    Effect::new(move || apply_mount(logout(&TokenStore::browser())));

    let choose = move |choice: LogoutChoice| {
        status.set(LogoutView::Working);
        apply(resolve_failure(&TokenStore::browser(), choice));
    };
    let choose_cancel = choose.clone();

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign out"</h1>
                {move || match status.get() {
                    LogoutView::Working => view! { <p class="auth-message">"Signing out..."</p> }.into_any(),
                    LogoutView::Done => {
                        view! { <p class="auth-message">"You have been signed out. Redirecting to login..."</p> }
                            .into_any()
                    }
                    LogoutView::Failed(e) => {
                        let retry = choose.clone();
                        let cancel = choose_cancel.clone();
                        view! {
                            <p class="auth-message auth-message--error">{e.to_string()}</p>
                            <div class="auth-actions">
                                <button class="auth-button" on:click=move |_| retry(LogoutChoice::Retry)>
                                    "Retry"
                                </button>
                                <button class="auth-link" on:click=move |_| cancel(LogoutChoice::Cancel)>
                                    "Cancel"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
