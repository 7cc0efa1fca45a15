//! Endpoint calls against the backend REST API.
//!
//! Every call goes through the shared [`HttpGateway`], which owns credential
//! attachment and 401 handling; this module only knows paths and payloads.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::http::{ApiError, HttpGateway};
use crate::net::types::{NokAudit, TokenResponse, UserProfile};

/// Form fields for the OAuth2 password login. The backend expects the email
/// in the `username` field.
pub fn login_form<'a>(email: &'a str, password: &'a str) -> [(&'static str, &'a str); 2] {
    [("username", email), ("password", password)]
}

/// Exchange email + password for a bearer token via `POST /auth/token`.
///
/// # Errors
///
/// `ApiError::Unauthorized` on bad credentials, otherwise the transport or
/// decode error.
pub async fn login(gateway: &HttpGateway, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
    gateway.post_form("/auth/token", &login_form(email, password)).await
}

/// Resolve the current identity via `GET /auth/me`.
///
/// # Errors
///
/// `ApiError::Unauthorized` on an invalid or missing credential.
pub async fn fetch_me(gateway: &HttpGateway) -> Result<UserProfile, ApiError> {
    gateway.get_json("/auth/me").await
}

/// Fetch all nonconformity audits via `GET /neshody/`.
///
/// # Errors
///
/// Propagates the gateway error unchanged.
pub async fn fetch_audits(gateway: &HttpGateway) -> Result<Vec<NokAudit>, ApiError> {
    gateway.get_json("/neshody/").await
}

/// Fetch every user account via `GET /users/` (admin only; the server
/// answers 403 for other roles).
///
/// # Errors
///
/// Propagates the gateway error unchanged.
pub async fn fetch_users(gateway: &HttpGateway) -> Result<Vec<UserProfile>, ApiError> {
    gateway.get_json("/users/").await
}
