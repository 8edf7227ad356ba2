//! Unread-announcement bubble for the dashboard header.

use leptos::prelude::*;

use crate::state::badge::{BadgeState, PollPlan, plan_poll};
use crate::state::session::SessionState;

/// Polls the announcements endpoint once per mount, as soon as a token exists.
#[component]
pub fn AnnouncementBadge() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let badge = RwSignal::new(BadgeState::loading());

    let polled = RwSignal::new(false);
    Effect::new(move || {
        if polled.get() {
            return;
        }
        let token = match session.with(plan_poll) {
            PollPlan::Wait => return,
            PollPlan::Skip => {
                badge.set(BadgeState::default());
                return;
            }
            PollPlan::Poll(token) => token,
        };
        polled.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::ApiClient::browser();
            let store = crate::session::TokenStore::browser();
            match crate::state::badge::poll_unread(&api, &store, Some(&token)).await {
                Ok(state) => badge.set(state),
                Err(_revoked) => {
                    badge.set(BadgeState::default());
                    session.set(SessionState::signed_out());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            badge.set(BadgeState::default());
        }
    });

    let badge_class = move || {
        if badge.get().loading {
            "announcement-badge announcement-badge--loading"
        } else {
            "announcement-badge"
        }
    };

    view! {
        <a class=badge_class href="/list/announcements" title="Announcements">
            <span class="announcement-badge__icon">"🔔"</span>
            <Show when=move || badge.get().label().is_some()>
                <span class="announcement-badge__count">{move || badge.get().label()}</span>
            </Show>
        </a>
    }
}
