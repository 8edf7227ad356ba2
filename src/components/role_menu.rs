//! Sidebar links for the signed-in role.

use leptos::prelude::*;

use crate::session::BrowserStorage;
use crate::state::session::SessionState;
use crate::util::nav::{menu_for, session_role};

#[component]
pub fn RoleMenu() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    // Re-evaluated whenever the session changes; the role itself is read from storage.
    let items = move || menu_for(session.with(|state| session_role(state, &BrowserStorage)));

    view! {
        <nav class="role-menu">
            <ul>
                {move || {
                    items()
                        .iter()
                        .map(|item| {
                            view! {
                                <li class="role-menu__item">
                                    <a href=item.href>{item.label}</a>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}
