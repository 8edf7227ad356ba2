//! Signup verification page reached from the emailed link (`?email=`).

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use super::{message_class, submit_label};
use crate::flows::FlowState;
use crate::flows::forms::{OTP_LEN, VerifyEmailForm, normalize_otp_input};

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();
    let email = RwSignal::new(query.read_untracked().get("email").unwrap_or_default());
    let otp = RwSignal::new(String::new());
    let flow = RwSignal::new(FlowState::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !flow.try_update(FlowState::begin).unwrap_or(false) {
            return;
        }
        let form = VerifyEmailForm::new(&email.get_untracked(), &otp.get_untracked());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::ApiClient::browser();
                match crate::flows::signup::verify_signup(&api, &form).await {
                    Ok(outcome) => {
                        flow.set(FlowState::Success(outcome.message));
                        super::follow(navigate, outcome.next).await;
                    }
                    Err(e) => flow.set(FlowState::Failed(e)),
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
                <h1>"Verify your email"</h1>
                <p class="auth-card__subtitle">
                    {move || format!("Enter the {OTP_LEN}-digit code sent to {}", email.get())}
                </p>
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
                        placeholder="123456"
                        prop:value=move || otp.get()
                        on:input=move |ev| otp.set(normalize_otp_input(&event_target_value(&ev)))
                    />
                    <button
                        class="auth-button"
                        type="submit"
                        disabled=move || {
                            let state = flow.get();
                            state.is_submitting() || matches!(state, FlowState::Success(_))
                        }
                    >
                        {move || submit_label(&flow.get(), "Verify", "Verifying...")}
                    </button>
                </form>
                <Show when=move || flow.get().message().is_some()>
                    <p class=move || message_class(&flow.get())>{move || flow.get().message()}</p>
                </Show>
            </div>
        </div>
    }
}
