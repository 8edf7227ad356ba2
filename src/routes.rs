//! Client route paths and the query-carrying links between flows.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const LOGIN: &str = "/login";
pub const DASHBOARD: &str = "/dashboard";
pub const LOGOUT: &str = "/logout";
pub const SIGNUP_VERIFY: &str = "/signup/verify";
pub const FORGOT_PASSWORD: &str = "/forgot-password";
pub const FORGOT_PASSWORD_VERIFY: &str = "/forgot-password/verify";

/// Reset-code screen for `email`, e.g. `/forgot-password/verify?email=user%40x.com`.
#[must_use]
pub fn forgot_password_verify(email: &str) -> String {
    with_email(FORGOT_PASSWORD_VERIFY, email)
}

/// Signup verification link target for `email`.
#[must_use]
pub fn signup_verify(email: &str) -> String {
    with_email(SIGNUP_VERIFY, email)
}

fn with_email(path: &str, email: &str) -> String {
    format!("{path}?email={}", urlencoding::encode(email))
}
