//! Signup email verification with a one-time code.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use super::forms::VerifyEmailForm;
use super::{FlowError, Navigation};
use crate::config::REDIRECT_DELAY;
use crate::net::api::ApiClient;
use crate::net::http::Transport;
use crate::routes;

const VERIFIED_MESSAGE: &str = "Email verified successfully. Redirecting to login...";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedOutcome {
    pub message: String,
    pub next: Navigation,
}

/// Submit the OTP for `form.email`; on success, head to login after a pause.
///
/// # Errors
///
/// [`FlowError::Validation`] without any request when the email or code is
/// malformed; otherwise the server's `{error}` message or a network error.
pub async fn verify_signup<T: Transport>(
    api: &ApiClient<T>,
    form: &VerifyEmailForm,
) -> Result<VerifiedOutcome, FlowError> {
    form.check()?;
    let resp = api.verify_email(&form.email, &form.otp).await?;
    log::info!("email verified for {}", form.email);
    Ok(VerifiedOutcome {
        message: resp.message.unwrap_or_else(|| VERIFIED_MESSAGE.to_owned()),
        next: Navigation::after(routes::LOGIN, REDIRECT_DELAY),
    })
}
