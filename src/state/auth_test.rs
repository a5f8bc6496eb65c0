use super::*;

use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use crate::net::types::MessageResponse;

fn user(name: &str) -> User {
    User {
        id: 1,
        username: name.to_owned(),
        email: format!("{name}@example.com"),
        full_name: None,
        bio: None,
        profile_picture_url: None,
        mfa_enabled: false,
        created_at: None,
    }
}

/// In-memory token store; the flow borrows it so tests can inspect it after.
#[derive(Default)]
struct MemoryTokens(RefCell<Option<String>>);

impl TokenStore for &MemoryTokens {
    fn get(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}

/// Scripted auth backend recording how it was called.
#[derive(Default)]
struct MockApi {
    register_resp: RefCell<Option<Result<AuthResponse, ApiError>>>,
    login_resp: RefCell<Option<Result<AuthResponse, ApiError>>>,
    verify_resp: RefCell<Option<Result<AuthResponse, ApiError>>>,
    profile_resp: RefCell<Option<Result<User, ApiError>>>,
    logout_resp: RefCell<Option<Result<(), ApiError>>>,
    profile_calls: Cell<usize>,
    logout_calls: Cell<usize>,
}

fn take<T>(slot: &RefCell<Option<Result<T, ApiError>>>) -> Result<T, ApiError> {
    slot.borrow_mut()
        .take()
        .unwrap_or_else(|| Err(ApiError::network("unscripted call")))
}

impl AuthApi for &MockApi {
    async fn register(&self, _req: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        take(&self.register_resp)
    }

    async fn login(&self, _req: &LoginRequest) -> Result<AuthResponse, ApiError> {
        take(&self.login_resp)
    }

    async fn verify_mfa(&self, _req: &MfaVerifyRequest) -> Result<AuthResponse, ApiError> {
        take(&self.verify_resp)
    }

    async fn resend_mfa(&self, _email: &str) -> Result<MessageResponse, ApiError> {
        Ok(MessageResponse::default())
    }

    async fn request_password_reset(&self, _email: &str) -> Result<MessageResponse, ApiError> {
        Ok(MessageResponse::default())
    }

    async fn reset_password(
        &self,
        _req: &crate::net::types::PasswordResetRequest,
    ) -> Result<MessageResponse, ApiError> {
        Ok(MessageResponse::default())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.logout_calls.set(self.logout_calls.get() + 1);
        take(&self.logout_resp)
    }

    async fn get_profile(&self) -> Result<User, ApiError> {
        self.profile_calls.set(self.profile_calls.get() + 1);
        take(&self.profile_resp)
    }
}

fn flow<'a>(api: &'a MockApi, tokens: &'a MemoryTokens) -> AuthFlow<&'a MockApi, &'a MemoryTokens> {
    AuthFlow::new(api, tokens)
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_starts_loading_with_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

// =============================================================
// Restore
// =============================================================

#[test]
fn restore_without_token_skips_profile_fetch() {
    let api = MockApi::default();
    let tokens = MemoryTokens::default();

    let outcome = block_on(flow(&api, &tokens).restore());

    assert!(matches!(outcome, RestoreOutcome::NoSession));
    assert_eq!(api.profile_calls.get(), 0);
}

#[test]
fn restore_with_valid_token_yields_user() {
    let api = MockApi::default();
    *api.profile_resp.borrow_mut() = Some(Ok(user("jo")));
    let tokens = MemoryTokens::default();
    (&tokens).set("tok-1");

    let outcome = block_on(flow(&api, &tokens).restore());

    assert!(matches!(outcome, RestoreOutcome::Restored(u) if u.username == "jo"));
    // A successful restore keeps the token.
    assert_eq!((&tokens).get().as_deref(), Some("tok-1"));
}

#[test]
fn restore_failure_clears_stored_token() {
    let api = MockApi::default();
    *api.profile_resp.borrow_mut() = Some(Err(ApiError::http(401, None)));
    let tokens = MemoryTokens::default();
    (&tokens).set("stale");

    let outcome = block_on(flow(&api, &tokens).restore());

    assert!(matches!(outcome, RestoreOutcome::Failed(_)));
    assert!((&tokens).get().is_none());
}

// =============================================================
// Login / register interpretation
// =============================================================

#[test]
fn login_mfa_challenge_stores_nothing() {
    let api = MockApi::default();
    // A hostile/buggy backend bundling a user and token with the challenge.
    *api.login_resp.borrow_mut() = Some(Ok(AuthResponse {
        message: Some("code sent".to_owned()),
        access_token: Some("untrusted".to_owned()),
        user: Some(user("jo")),
        requires_mfa: Some(true),
        mfa_required: None,
    }));
    let tokens = MemoryTokens::default();

    let outcome = block_on(flow(&api, &tokens).login("jo@example.com", "pw")).unwrap();

    match outcome {
        AuthOutcome::MfaRequired { identifier, message } => {
            assert_eq!(identifier, "jo@example.com");
            assert_eq!(message.as_deref(), Some("code sent"));
        }
        other => panic!("expected MfaRequired, got {other:?}"),
    }
    assert!((&tokens).get().is_none());
}

#[test]
fn login_mfa_challenge_alternate_spelling() {
    let api = MockApi::default();
    *api.login_resp.borrow_mut() = Some(Ok(AuthResponse {
        mfa_required: Some(true),
        ..AuthResponse::default()
    }));
    let tokens = MemoryTokens::default();

    let outcome = block_on(flow(&api, &tokens).login("jo", "pw")).unwrap();
    assert!(matches!(outcome, AuthOutcome::MfaRequired { .. }));
}

#[test]
fn login_success_stores_token_and_returns_user() {
    let api = MockApi::default();
    *api.login_resp.borrow_mut() = Some(Ok(AuthResponse {
        access_token: Some("tok-2".to_owned()),
        user: Some(user("jo")),
        ..AuthResponse::default()
    }));
    let tokens = MemoryTokens::default();

    let outcome = block_on(flow(&api, &tokens).login("jo", "pw")).unwrap();

    assert!(matches!(outcome, AuthOutcome::SignedIn { user: u, .. } if u.username == "jo"));
    assert_eq!((&tokens).get().as_deref(), Some("tok-2"));
}

#[test]
fn login_failure_propagates_backend_message() {
    let api = MockApi::default();
    *api.login_resp.borrow_mut() =
        Some(Err(ApiError::http(401, Some("Invalid credentials".to_owned()))));
    let tokens = MemoryTokens::default();

    let err = block_on(flow(&api, &tokens).login("jo", "pw")).unwrap_err();
    assert_eq!(err.status, Some(401));
    assert_eq!(err.display_or("Login failed"), "Invalid credentials");
}

#[test]
fn register_without_session_is_accepted() {
    let api = MockApi::default();
    *api.register_resp.borrow_mut() = Some(Ok(AuthResponse {
        message: Some("confirmation sent".to_owned()),
        ..AuthResponse::default()
    }));
    let tokens = MemoryTokens::default();

    let outcome =
        block_on(flow(&api, &tokens).register("jo", "jo@example.com", "pw", None)).unwrap();

    assert!(matches!(outcome, AuthOutcome::Accepted { message } if message.is_some()));
    assert!((&tokens).get().is_none());
}

#[test]
fn register_challenge_carries_email_identifier() {
    let api = MockApi::default();
    *api.register_resp.borrow_mut() = Some(Ok(AuthResponse {
        requires_mfa: Some(true),
        ..AuthResponse::default()
    }));
    let tokens = MemoryTokens::default();

    let outcome =
        block_on(flow(&api, &tokens).register("jo", "jo@example.com", "pw", Some(true))).unwrap();

    assert!(
        matches!(outcome, AuthOutcome::MfaRequired { identifier, .. } if identifier == "jo@example.com")
    );
}

// =============================================================
// MFA verification
// =============================================================

#[test]
fn verify_mfa_success_grants_session() {
    let api = MockApi::default();
    *api.verify_resp.borrow_mut() = Some(Ok(AuthResponse {
        access_token: Some("tok-3".to_owned()),
        user: Some(user("jo")),
        ..AuthResponse::default()
    }));
    let tokens = MemoryTokens::default();

    let verified = block_on(flow(&api, &tokens).verify_mfa("jo@example.com", "123456")).unwrap();

    assert_eq!(verified.unwrap().username, "jo");
    assert_eq!((&tokens).get().as_deref(), Some("tok-3"));
}

#[test]
fn verify_mfa_without_user_yields_none() {
    let api = MockApi::default();
    *api.verify_resp.borrow_mut() = Some(Ok(AuthResponse::default()));
    let tokens = MemoryTokens::default();

    let verified = block_on(flow(&api, &tokens).verify_mfa("jo@example.com", "123456")).unwrap();
    assert!(verified.is_none());
}

#[test]
fn verify_mfa_rejected_code_propagates() {
    let api = MockApi::default();
    *api.verify_resp.borrow_mut() = Some(Err(ApiError::http(400, Some("expired".to_owned()))));
    let tokens = MemoryTokens::default();

    assert!(block_on(flow(&api, &tokens).verify_mfa("jo@example.com", "000000")).is_err());
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_token_even_when_server_call_fails() {
    let api = MockApi::default();
    *api.logout_resp.borrow_mut() = Some(Err(ApiError::network("connection reset")));
    let tokens = MemoryTokens::default();
    (&tokens).set("tok-4");

    block_on(flow(&api, &tokens).logout());

    assert_eq!(api.logout_calls.get(), 1);
    assert!((&tokens).get().is_none());
}
