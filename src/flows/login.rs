//! Email + password login.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::forms::LoginForm;
use super::{FlowError, NETWORK_ERROR_MESSAGE, Navigation};
use crate::net::api::ApiClient;
use crate::net::http::Transport;
use crate::net::types::LoginResponse;
use crate::routes;
use crate::session::claims::read_identity;
use crate::session::role::Role;
use crate::session::storage::KeyValueStore;
use crate::session::token_store::{Session, TokenStore};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginOutcome {
    /// Session as persisted; hand it to the session context.
    pub session: Session,
    pub next: Navigation,
}

/// Validate, authenticate, persist the session, and point at the dashboard.
///
/// # Errors
///
/// [`FlowError::Validation`] without any request when the form is invalid;
/// otherwise the server, network or storage failure.
pub async fn login<T, S>(
    api: &ApiClient<T>,
    store: &TokenStore<S>,
    form: &LoginForm,
) -> Result<LoginOutcome, FlowError>
where
    T: Transport,
    S: KeyValueStore,
{
    form.check()?;
    let resp = api.login(&form.email, &form.password).await?;
    let session = session_from_response(resp)?;
    store.set(&session)?;
    log::info!(
        "signed in as {}",
        session.role.map_or("unknown role", Role::as_str)
    );
    Ok(LoginOutcome {
        session,
        next: Navigation::now(routes::DASHBOARD),
    })
}

fn session_from_response(resp: LoginResponse) -> Result<Session, FlowError> {
    if resp.access_token.trim().is_empty() {
        log::warn!("login response carried an empty access token");
        return Err(FlowError::Auth(NETWORK_ERROR_MESSAGE.to_owned()));
    }
    // Role precedence: explicit field, then the embedded user, then the token claim.
    let role = resp
        .role
        .or_else(|| resp.user.as_ref().and_then(|user| user.role))
        .or_else(|| read_identity(&resp.access_token).and_then(|claims| claims.role));
    Ok(Session {
        access_token: resp.access_token,
        refresh_token: resp.refresh_token,
        role,
        user: resp.user,
    })
}
