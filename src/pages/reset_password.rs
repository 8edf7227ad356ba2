//! Forgot-password verify step: code + new password, with a resend action.
//!
//! The reset submission and "resend code" each own a `FlowState`, so a failed
//! resend never blocks the reset form and vice versa.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use super::{message_class, submit_label};
use crate::flows::FlowState;
use crate::flows::forms::{ResetPasswordForm, normalize_otp_input};

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();
    let email = RwSignal::new(query.read_untracked().get("email").unwrap_or_default());
    let code = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let flow = RwSignal::new(FlowState::Idle);
    let resend = RwSignal::new(FlowState::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !flow.try_update(FlowState::begin).unwrap_or(false) {
            return;
        }
        let form = ResetPasswordForm::new(
            &email.get_untracked(),
            &code.get_untracked(),
            &new_password.get_untracked(),
        );

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::ApiClient::browser();
                let result = crate::flows::password::reset_password(&api, &form).await;
                flow.update(|f| f.settle(&result, "Password updated. Redirecting to login..."));
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

    let on_resend = move |_| {
        if !resend.try_update(FlowState::begin).unwrap_or(false) {
            return;
        }
        let email_value = email.get_untracked();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::ApiClient::browser();
            match crate::flows::password::resend_code(&api, &email_value).await {
                Ok(message) => resend.set(FlowState::Success(message)),
                Err(e) => resend.set(FlowState::Failed(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email_value;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset password"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@school.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input auth-input--code"
                        type="text"
                        inputmode="numeric"
                        maxlength="6"
                        placeholder="Reset code"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(normalize_otp_input(&event_target_value(&ev)))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="New password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || flow.get().is_submitting()>
                        {move || submit_label(&flow.get(), "Reset password", "Resetting...")}
                    </button>
                </form>
                <Show when=move || flow.get().message().is_some()>
                    <p class=move || message_class(&flow.get())>{move || flow.get().message()}</p>
                </Show>
                <button
                    class="auth-link"
                    type="button"
                    disabled=move || resend.get().is_submitting()
                    on:click=on_resend
                >
                    {move || submit_label(&resend.get(), "Resend code", "Resending...")}
                </button>
                <Show when=move || resend.get().message().is_some()>
                    <p class=move || message_class(&resend.get())>{move || resend.get().message()}</p>
                </Show>
            </div>
        </div>
    }
}
