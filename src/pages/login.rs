//! Login page: email + password against the auth route.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::{message_class, submit_label};
use crate::flows::FlowState;
use crate::flows::forms::LoginForm;
use crate::routes;
use crate::state::session::SessionState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let flow = RwSignal::new(FlowState::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !flow.try_update(FlowState::begin).unwrap_or(false) {
            return;
        }
        let form = LoginForm::new(&email.get_untracked(), &password.get_untracked());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::ApiClient::browser();
                let store = crate::session::TokenStore::browser();
                let result = crate::flows::login::login(&api, &store, &form).await;
                flow.update(|f| f.settle(&result, ""));
                if let Ok(outcome) = result {
                    session.set(SessionState::signed_in(outcome.session));
                    super::follow(navigate, outcome.next).await;
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (form, session, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@school.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || flow.get().is_submitting()>
                        {move || submit_label(&flow.get(), "Sign in", "Signing in...")}
                    </button>
                </form>
                <Show when=move || flow.get().message().is_some()>
                    <p class=move || message_class(&flow.get())>{move || flow.get().message()}</p>
                </Show>
                <a class="auth-link" href=routes::FORGOT_PASSWORD>"Forgot password?"</a>
            </div>
        </div>
    }
}
