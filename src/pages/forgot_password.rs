//! Forgot-password request page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::{message_class, submit_label};
use crate::flows::FlowState;
use crate::flows::forms::ForgotPasswordForm;
use crate::routes;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let flow = RwSignal::new(FlowState::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !flow.try_update(FlowState::begin).unwrap_or(false) {
            return;
        }
        let form = ForgotPasswordForm::new(&email.get_untracked());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::ApiClient::browser();
                let result = crate::flows::password::request_reset(&api, &form).await;
                flow.update(|f| f.settle(&result, ""));
                if let Ok(next) = result {
                    super::follow(navigate, next).await;
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (form, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Forgot password"</h1>
                <p class="auth-card__subtitle">"We will email you a reset code."</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@school.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || flow.get().is_submitting()>
                        {move || submit_label(&flow.get(), "Send code", "Sending...")}
                    </button>
                </form>
                <Show when=move || flow.get().message().is_some()>
                    <p class=move || message_class(&flow.get())>{move || flow.get().message()}</p>
                </Show>
                <a class="auth-link" href=routes::LOGIN>"Back to sign in"</a>
            </div>
        </div>
    }
}
