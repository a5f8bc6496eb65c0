//! REST client for the authentication endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning errors since these endpoints are only meaningful in the
//! browser.
//!
//! The `AuthApi` trait is the seam between the session flow and the
//! transport: the flow only ever sees `AuthResponse`/`ApiError`, so tests
//! drive it with an in-memory implementation.

#![allow(clippy::unused_async)]

use super::types::{
    ApiError, AuthResponse, LoginRequest, MessageResponse, MfaVerifyRequest, PasswordResetRequest,
    RegisterRequest, User,
};

/// Auth endpoints the session flow depends on.
///
/// Not `Send`: everything here runs on the browser's single thread.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, ApiError>;
    async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, ApiError>;
    async fn verify_mfa(&self, req: &MfaVerifyRequest) -> Result<AuthResponse, ApiError>;
    async fn resend_mfa(&self, email: &str) -> Result<MessageResponse, ApiError>;
    async fn request_password_reset(&self, email: &str) -> Result<MessageResponse, ApiError>;
    async fn reset_password(&self, req: &PasswordResetRequest) -> Result<MessageResponse, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
    async fn get_profile(&self) -> Result<User, ApiError>;
}

/// `gloo-net` implementation against the configured API base.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthApi;

impl AuthApi for HttpAuthApi {
    async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        post_json("/auth/register", req).await
    }

    async fn login(&self, req: &LoginRequest) -> Result<AuthResponse, ApiError> {
        post_json("/auth/login", req).await
    }

    async fn verify_mfa(&self, req: &MfaVerifyRequest) -> Result<AuthResponse, ApiError> {
        post_json("/auth/verify-mfa", req).await
    }

    async fn resend_mfa(&self, email: &str) -> Result<MessageResponse, ApiError> {
        post_json("/auth/resend-mfa", &serde_json::json!({ "email": email })).await
    }

    async fn request_password_reset(&self, email: &str) -> Result<MessageResponse, ApiError> {
        post_json("/auth/request-password-reset", &serde_json::json!({ "email": email })).await
    }

    async fn reset_password(&self, req: &PasswordResetRequest) -> Result<MessageResponse, ApiError> {
        post_json("/auth/reset-password", req).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = bearer(gloo_net::http::Request::post(&super::api::api_url("/auth/logout")))
                .send()
                .await
                .map_err(|e| ApiError::network(e.to_string()))?;
            if resp.ok() {
                Ok(())
            } else {
                Err(error_from(&resp).await)
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(server_side())
        }
    }

    async fn get_profile(&self) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = bearer(gloo_net::http::Request::get(&super::api::api_url("/auth/me")))
                .send()
                .await
                .map_err(|e| ApiError::network(e.to_string()))?;
            if resp.ok() {
                resp.json::<User>()
                    .await
                    .map_err(|e| ApiError::network(e.to_string()))
            } else {
                Err(error_from(&resp).await)
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(server_side())
        }
    }
}

/// POST a JSON body and decode a JSON response.
#[cfg(feature = "hydrate")]
async fn post_json<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
    B: serde::Serialize,
{
    let resp = gloo_net::http::Request::post(&super::api::api_url(path))
        .json(body)
        .map_err(|e| ApiError::network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::network(e.to_string()))?;

    if resp.ok() {
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::network(e.to_string()))
    } else {
        Err(error_from(&resp).await)
    }
}

#[cfg(not(feature = "hydrate"))]
async fn post_json<T, B>(_path: &str, _body: &B) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
    B: serde::Serialize,
{
    Err(server_side())
}

/// Attach the stored access token as a bearer header, if present.
#[cfg(feature = "hydrate")]
fn bearer(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    use crate::util::token::{BrowserTokens, TokenStore};

    match BrowserTokens.get() {
        Some(token) => req.header("Authorization", &format!("Bearer {token}")),
        None => req,
    }
}

/// Map a non-2xx response into the structural error contract, surfacing the
/// backend's message when the body carries one.
#[cfg(feature = "hydrate")]
async fn error_from(resp: &gloo_net::http::Response) -> ApiError {
    let message = resp
        .json::<MessageResponse>()
        .await
        .ok()
        .and_then(|m| m.message);
    ApiError::http(resp.status(), message)
}

#[cfg(not(feature = "hydrate"))]
fn server_side() -> ApiError {
    ApiError::network("not available on server")
}
