//! Wire types shared with the REST backend.
//!
//! Field names follow the backend's snake_case JSON. Optional fields are
//! `Option` so older or partial responses still deserialize.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user's identity and profile.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    #[serde(default)]
    pub mfa_enabled: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Response shape of the auth endpoints (register, login, verify-mfa).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub requires_mfa: Option<bool>,
    // Older backend builds spell the flag differently.
    #[serde(default)]
    pub mfa_required: Option<bool>,
}

impl AuthResponse {
    /// True when the backend is asking for an MFA code before granting a
    /// session, under either spelling of the flag.
    pub fn mfa_challenge_required(&self) -> bool {
        self.requires_mfa.unwrap_or(false) || self.mfa_required.unwrap_or(false)
    }
}

/// Generic `{ "message": ... }` response body.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_mfa: Option<bool>,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    /// Username or email.
    pub login: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct MfaVerifyRequest {
    pub email: String,
    pub code: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct PasswordResetRequest {
    pub token: String,
    pub password: String,
}

/// A photo taken at a show, as returned by `GET /photos`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Photo {
    pub id: i64,
    pub show_id: i64,
    #[serde(default)]
    pub caption: Option<String>,
    pub filename: String,
    #[serde(default)]
    pub artist_name: Option<String>,
    #[serde(default)]
    pub venue_name: Option<String>,
    #[serde(default)]
    pub show_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Envelope of the photo listing endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PhotoList {
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// Structural error contract at the transport boundary.
///
/// Any real transport maps its failures into this shape; callers fall back
/// to a generic message when the backend supplied none.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", .message.as_deref().unwrap_or("request failed"))]
pub struct ApiError {
    /// HTTP status, when the request reached the server.
    pub status: Option<u16>,
    /// Backend-supplied message, when the body carried one.
    pub message: Option<String>,
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        Self { status: None, message: Some(message.into()) }
    }

    pub fn http(status: u16, message: Option<String>) -> Self {
        Self { status: Some(status), message }
    }

    /// The backend's message, or `fallback` when it supplied none.
    pub fn display_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message.as_deref().filter(|m| !m.is_empty()).unwrap_or(fallback)
    }
}
