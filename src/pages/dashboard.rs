//! Dashboard landing page for signed-in users.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It bounces guests to `/login`,
//! fetches the server-confirmed profile once the stored session is known, and
//! renders the role menu and the announcement badge.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::announcement_badge::AnnouncementBadge;
use crate::components::role_menu::RoleMenu;
use crate::session::BrowserStorage;
use crate::session::role::user_role;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::nav::{session_role, shortcuts};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    let requested_profile = RwSignal::new(false);
    Effect::new(move || {
        if requested_profile.get() {
            return;
        }
        let Some((claims, token)) = session.with(|s| {
            let token = s.access_token()?.to_owned();
            s.claims.clone().map(|claims| (claims, token))
        }) else {
            return;
        };
        requested_profile.set(true);
        session.update(SessionState::begin_profile_fetch);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::ApiClient::browser();
            let store = crate::session::TokenStore::browser();
            let outcome = crate::session::profile::fetch_profile(&api, &store, &claims, &token).await;
            // A refused token signs out here, and the redirect guard takes over.
            session.update(|s| s.finish_profile_fetch(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (claims, token);
            session.update(|s| s.finish_profile_fetch(Ok(None)));
        }
    });

    let role_label = move || session.with(|s| session_role(s, &BrowserStorage).map(|role| role.label()));
    let role_attr = move || {
        if session.with(SessionState::is_authenticated) {
            user_role(&BrowserStorage)
        } else {
            String::new()
        }
    };
    let shortcut_links = move || {
        session.with(|s| shortcuts(s, &BrowserStorage))
            .into_iter()
            .map(|shortcut| {
                view! {
                    <a class="dashboard-page__shortcut" href=shortcut.href>
                        {shortcut.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <div class="dashboard-page" data-role=role_attr>
            <aside class="dashboard-page__sidebar">
                <RoleMenu/>
            </aside>
            <main class="dashboard-page__main">
                <header class="dashboard-page__header">
                    <div class="dashboard-page__identity">
                        <span class="dashboard-page__name">
                            {move || {
                                if session.with(|s| s.profile_loading) {
                                    "Loading...".to_owned()
                                } else {
                                    session.with(SessionState::display_name)
                                }
                            }}
                        </span>
                        <Show when=move || role_label().is_some()>
                            <span class="dashboard-page__role">{role_label}</span>
                        </Show>
                    </div>
                    <AnnouncementBadge/>
                </header>
                <section class="dashboard-page__shortcuts">{shortcut_links}</section>
            </main>
        </div>
    }
}
