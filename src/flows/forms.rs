//! Form inputs and their client-side schema checks.
//!
//! Checks run before any request. Only the first failing field, in
//! declaration order, is reported.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors};

use super::FlowError;

pub const OTP_LEN: usize = 6;

const INVALID_OTP: &str = "Enter the 6-digit code.";

#[derive(Clone, Debug, Default, PartialEq, Eq, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters."))]
    pub password: String,
}

impl LoginForm {
    #[must_use]
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_owned(),
            password: password.to_owned(),
        }
    }

    /// # Errors
    ///
    /// Returns [`FlowError::Validation`] for the first invalid field.
    pub fn check(&self) -> Result<(), FlowError> {
        self.validate()
            .map_err(|e| first_error(&e, &["email", "password"]))
    }
}

/// Signup verification: email carried in the link plus the emailed OTP.
#[derive(Clone, Debug, Default, PartialEq, Eq, Validate)]
pub struct VerifyEmailForm {
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[validate(custom(function = "validate_otp"))]
    pub otp: String,
}

impl VerifyEmailForm {
    #[must_use]
    pub fn new(email: &str, otp: &str) -> Self {
        Self {
            email: email.trim().to_owned(),
            otp: otp.trim().to_owned(),
        }
    }

    /// # Errors
    ///
    /// Returns [`FlowError::Validation`] for the first invalid field.
    pub fn check(&self) -> Result<(), FlowError> {
        self.validate().map_err(|e| first_error(&e, &["email", "otp"]))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Validate)]
pub struct ForgotPasswordForm {
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
}

impl ForgotPasswordForm {
    #[must_use]
    pub fn new(email: &str) -> Self {
        Self {
            email: email.trim().to_owned(),
        }
    }

    /// # Errors
    ///
    /// Returns [`FlowError::Validation`] when the email is malformed.
    pub fn check(&self) -> Result<(), FlowError> {
        self.validate().map_err(|e| first_error(&e, &["email"]))
    }
}

/// Reset step: email from the query, emailed code, and the new password.
#[derive(Clone, Debug, Default, PartialEq, Eq, Validate)]
pub struct ResetPasswordForm {
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[validate(custom(function = "validate_otp"))]
    pub code: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters."))]
    pub new_password: String,
}

impl ResetPasswordForm {
    #[must_use]
    pub fn new(email: &str, code: &str, new_password: &str) -> Self {
        Self {
            email: email.trim().to_owned(),
            code: code.trim().to_owned(),
            new_password: new_password.to_owned(),
        }
    }

    /// # Errors
    ///
    /// Returns [`FlowError::Validation`] for the first invalid field.
    pub fn check(&self) -> Result<(), FlowError> {
        self.validate()
            .map_err(|e| first_error(&e, &["email", "code", "new_password"]))
    }
}

/// Keep only ASCII digits and cap at the OTP length, for live input filtering.
#[must_use]
pub fn normalize_otp_input(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(OTP_LEN).collect()
}

fn validate_otp(value: &str) -> Result<(), ValidationError> {
    if value.len() == OTP_LEN && value.chars().all(|c| c.is_ascii_digit()) {
        return Ok(());
    }
    let mut err = ValidationError::new("otp");
    err.message = Some(Cow::Borrowed(INVALID_OTP));
    Err(err)
}

fn first_error(errors: &ValidationErrors, field_order: &[&str]) -> FlowError {
    let by_field = errors.field_errors();
    let message = field_order
        .iter()
        .filter_map(|field| by_field.get(*field))
        .find_map(|errs| errs.first())
        .map_or_else(
            || errors.to_string(),
            |err| {
                err.message
                    .as_ref()
                    .map_or_else(|| err.code.to_string(), ToString::to_string)
            },
        );
    FlowError::Validation(message)
}
