//! Forgot-password: request a code, then verify it and set a new password.
//!
//! Resending the code is a separate action with its own success and failure,
//! independent of the reset submission.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

use super::forms::{ForgotPasswordForm, ResetPasswordForm};
use super::{FlowError, Navigation};
use crate::net::api::ApiClient;
use crate::net::http::Transport;
use crate::routes;

const CODE_RESENT_MESSAGE: &str = "A new code has been sent to your email.";

/// Ask the backend to email a reset code, then move to the verify screen.
///
/// # Errors
///
/// [`FlowError::Validation`] without any request for a malformed email;
/// otherwise the server or network failure.
pub async fn request_reset<T: Transport>(
    api: &ApiClient<T>,
    form: &ForgotPasswordForm,
) -> Result<Navigation, FlowError> {
    form.check()?;
    api.forgot_password(&form.email).await?;
    Ok(Navigation::now(routes::forgot_password_verify(&form.email)))
}

/// Verify the emailed code and set the new password, then go to login.
///
/// # Errors
///
/// [`FlowError::Validation`] without any request for an invalid form;
/// otherwise the server or network failure.
pub async fn reset_password<T: Transport>(
    api: &ApiClient<T>,
    form: &ResetPasswordForm,
) -> Result<Navigation, FlowError> {
    form.check()?;
    api.reset_password(&form.email, &form.code, &form.new_password)
        .await?;
    log::info!("password reset for {}", form.email);
    Ok(Navigation::now(routes::LOGIN))
}

/// Send another reset code to `email`; returns the confirmation to show.
///
/// # Errors
///
/// [`FlowError::Validation`] without any request for a malformed email;
/// otherwise the server or network failure.
pub async fn resend_code<T: Transport>(api: &ApiClient<T>, email: &str) -> Result<String, FlowError> {
    let form = ForgotPasswordForm::new(email);
    form.check()?;
    let resp = api.resend_reset_code(&form.email).await?;
    Ok(resp.message.unwrap_or_else(|| CODE_RESENT_MESSAGE.to_owned()))
}
