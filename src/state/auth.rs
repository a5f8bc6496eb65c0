//! Authentication state and the session lifecycle flow.
//!
//! `AuthState` is the single source of truth for "who is signed in" within
//! one tab; it is provided as an `RwSignal` context and only mutated through
//! the operations in [`crate::state::session`]. `AuthFlow` holds the actual
//! transition logic against the [`AuthApi`] and [`TokenStore`] seams so it
//! can be exercised without a browser.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::auth_api::AuthApi;
use crate::net::types::{
    ApiError, AuthResponse, LoginRequest, MfaVerifyRequest, RegisterRequest, User,
};
use crate::util::token::TokenStore;

/// Authentication state tracking the current user and loading status.
///
/// `loading` is true only while the initial restore is in flight; pages wait
/// for it to settle before redirecting unauthenticated visitors.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        // Restore has not run yet.
        Self { user: None, loading: true }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Interpreted result of a register or login call.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthOutcome {
    /// The backend wants an MFA code before granting a session. Carries the
    /// identifier the challenge was issued for so the caller can thread it
    /// into [`AuthFlow::verify_mfa`].
    MfaRequired {
        identifier: String,
        message: Option<String>,
    },
    /// A session was granted immediately.
    SignedIn {
        user: User,
        message: Option<String>,
    },
    /// The backend accepted the request without granting a session or
    /// raising a challenge (e.g. confirmation pending).
    Accepted { message: Option<String> },
}

/// Result of the startup restore procedure.
///
/// `NoSession` and `Failed` both land on the login page; they are kept
/// apart here because a transient profile-fetch failure silently signing
/// the user out is worth being able to see in a log.
#[derive(Debug)]
pub enum RestoreOutcome {
    Restored(User),
    /// No persisted token; the profile endpoint was never called.
    NoSession,
    /// Token present but the profile fetch failed; the token was cleared.
    Failed(ApiError),
}

/// Session lifecycle mediator: the only writer of the persisted token.
pub struct AuthFlow<A, T> {
    api: A,
    tokens: T,
}

impl<A: AuthApi, T: TokenStore> AuthFlow<A, T> {
    pub fn new(api: A, tokens: T) -> Self {
        Self { api, tokens }
    }

    /// Reconstruct the session from the persisted token, if any.
    ///
    /// Never propagates an error: a failed restore clears the stale token
    /// and reports `Failed`, which callers render as signed-out.
    pub async fn restore(&self) -> RestoreOutcome {
        if self.tokens.get().is_none() {
            return RestoreOutcome::NoSession;
        }
        match self.api.get_profile().await {
            Ok(user) => RestoreOutcome::Restored(user),
            Err(err) => {
                leptos::logging::warn!("session restore failed: {err}");
                self.tokens.clear();
                RestoreOutcome::Failed(err)
            }
        }
    }

    /// Create an account. May come back with an MFA challenge instead of a
    /// session when the user opted in.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        enable_mfa: Option<bool>,
    ) -> Result<AuthOutcome, ApiError> {
        let resp = self
            .api
            .register(&RegisterRequest {
                username: username.to_owned(),
                email: email.to_owned(),
                password: password.to_owned(),
                enable_mfa,
            })
            .await?;
        Ok(self.interpret(resp, email))
    }

    /// Sign in with a username-or-email identifier and password.
    pub async fn login(&self, login: &str, password: &str) -> Result<AuthOutcome, ApiError> {
        let resp = self
            .api
            .login(&LoginRequest {
                login: login.to_owned(),
                password: password.to_owned(),
            })
            .await?;
        Ok(self.interpret(resp, login))
    }

    /// Complete a pending MFA challenge. Returns the now-authenticated user,
    /// or `None` when the backend accepted the code without a user payload.
    pub async fn verify_mfa(&self, email: &str, code: &str) -> Result<Option<User>, ApiError> {
        let resp = self
            .api
            .verify_mfa(&MfaVerifyRequest {
                email: email.to_owned(),
                code: code.to_owned(),
            })
            .await?;
        if let Some(token) = &resp.access_token {
            self.tokens.set(token);
        }
        Ok(resp.user)
    }

    /// End the session. The server-side invalidation is best-effort; local
    /// state and the persisted token are cleared regardless of its outcome.
    pub async fn logout(&self) {
        if let Err(err) = self.api.logout().await {
            leptos::logging::warn!("server-side logout failed: {err}");
        }
        self.tokens.clear();
    }

    fn interpret(&self, resp: AuthResponse, identifier: &str) -> AuthOutcome {
        if resp.mfa_challenge_required() {
            // A user or token bundled with a challenge is not trusted.
            return AuthOutcome::MfaRequired {
                identifier: identifier.to_owned(),
                message: resp.message,
            };
        }
        if let Some(token) = &resp.access_token {
            self.tokens.set(token);
        }
        match resp.user {
            Some(user) => AuthOutcome::SignedIn { user, message: resp.message },
            None => AuthOutcome::Accepted { message: resp.message },
        }
    }
}
