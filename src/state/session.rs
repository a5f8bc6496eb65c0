//! Session operations over the shared `RwSignal<AuthState>` context.
//!
//! Pages call these free functions instead of touching the signal directly,
//! so every state transition goes through [`AuthFlow`]. Signal writes use
//! `try_update`: a response arriving after the reactive owner is torn down
//! is dropped instead of panicking.

use leptos::prelude::{RwSignal, Update};

use crate::net::auth_api::HttpAuthApi;
use crate::net::types::{ApiError, User};
use crate::state::auth::{AuthFlow, AuthOutcome, AuthState, RestoreOutcome};
use crate::util::token::BrowserTokens;

fn flow() -> AuthFlow<HttpAuthApi, BrowserTokens> {
    AuthFlow::new(HttpAuthApi, BrowserTokens)
}

fn apply_user(auth: RwSignal<AuthState>, user: Option<User>) {
    let _ = auth.try_update(|s| {
        s.user = user;
        s.loading = false;
    });
}

/// Run the startup restore and settle the loading flag.
///
/// A failed restore is indistinguishable from no session here: the visitor
/// just sees the login page. The distinction only survives in the log.
pub async fn restore(auth: RwSignal<AuthState>) {
    let user = match flow().restore().await {
        RestoreOutcome::Restored(user) => Some(user),
        RestoreOutcome::NoSession | RestoreOutcome::Failed(_) => None,
    };
    apply_user(auth, user);
}

/// Sign in. Updates the shared state only when a session was granted; an
/// MFA challenge leaves it untouched for the verify page to complete.
pub async fn login(
    auth: RwSignal<AuthState>,
    login: &str,
    password: &str,
) -> Result<AuthOutcome, ApiError> {
    let outcome = flow().login(login, password).await?;
    if let AuthOutcome::SignedIn { user, .. } = &outcome {
        apply_user(auth, Some(user.clone()));
    }
    Ok(outcome)
}

/// Create an account; symmetric to [`login`].
pub async fn register(
    auth: RwSignal<AuthState>,
    username: &str,
    email: &str,
    password: &str,
    enable_mfa: bool,
) -> Result<AuthOutcome, ApiError> {
    let outcome = flow()
        .register(username, email, password, enable_mfa.then_some(true))
        .await?;
    if let AuthOutcome::SignedIn { user, .. } = &outcome {
        apply_user(auth, Some(user.clone()));
    }
    Ok(outcome)
}

/// Complete a pending MFA challenge. Returns `true` when a session was
/// granted and the shared state now holds the user.
pub async fn verify_mfa(
    auth: RwSignal<AuthState>,
    email: &str,
    code: &str,
) -> Result<bool, ApiError> {
    match flow().verify_mfa(email, code).await? {
        Some(user) => {
            apply_user(auth, Some(user));
            Ok(true)
        }
        None => Ok(false),
    }
}

/// End the session. Local state always ends up signed out, whatever the
/// server said.
pub async fn logout(auth: RwSignal<AuthState>) {
    flow().logout().await;
    apply_user(auth, None);
}

/// Re-run the restore procedure, e.g. after the token changed externally.
pub async fn refresh_user(auth: RwSignal<AuthState>) {
    restore(auth).await;
}
