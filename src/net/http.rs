//! Shared HTTP gateway: one outbound request path, one response inspection.
//!
//! Every request attaches the persisted bearer credential when one exists.
//! Every response is checked for authentication failure: a 401 clears the
//! credential store, resets the session, and (unless the user is already on
//! the entry screen) redirects there — all *before* the error reaches the
//! caller, so a navigation decision made immediately after observes a
//! cleared credential. The error itself is always propagated; the gateway
//! never swallows failures and never retries.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use leptos::prelude::{LocalStorage, StoredValue};
#[cfg(any(test, feature = "hydrate"))]
use leptos::prelude::WithValue;
use thiserror::Error;

#[cfg(any(test, feature = "hydrate"))]
use crate::session::credentials;

/// Error taxonomy for API calls.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure (connection refused, DNS, aborted request).
    #[error("request failed: {0}")]
    Network(String),
    /// The server rejected the credential (HTTP 401).
    #[error("not authenticated")]
    Unauthorized,
    /// Any other non-success HTTP status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The body could not be decoded as the expected type.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Whether an HTTP status means the credential is invalid or missing.
pub fn is_auth_failure(status: u16) -> bool {
    status == 401
}

/// Map a non-success status to its error variant.
pub fn error_for_status(status: u16) -> ApiError {
    if is_auth_failure(status) {
        ApiError::Unauthorized
    } else {
        ApiError::Status(status)
    }
}

/// A 401 should only trigger a redirect when the user is not already on the
/// entry screen.
pub fn should_return_to_entry(current_path: &str, entry_path: &str) -> bool {
    current_path != entry_path
}

/// The bearer header for an outbound request. Every request kind goes
/// through here so the attachment step cannot diverge between them.
#[cfg(any(test, feature = "hydrate"))]
fn authorization(credential: Option<credentials::Credential>) -> Option<(&'static str, String)> {
    credential.map(|cred| ("Authorization", cred.bearer()))
}

/// Current location pathname, `"/"` outside the browser.
pub fn current_pathname() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "/".to_owned()
    }
}

/// Shared HTTP client for all backend calls.
///
/// Cloning is cheap; clones share the invalidation callback, which the root
/// component wires to session teardown and the entry-screen redirect. The
/// callback captures router handles and is not `Sync`, so it lives in the
/// local arena and the gateway handle itself can cross into view closures.
#[derive(Clone)]
pub struct HttpGateway {
    base_url: Arc<str>,
    on_invalidated: StoredValue<Box<dyn Fn()>, LocalStorage>,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>, on_invalidated: impl Fn() + 'static) -> Self {
        let base: String = base_url.into();
        Self {
            base_url: Arc::from(base.trim_end_matches('/')),
            on_invalidated: StoredValue::new_local(Box::new(on_invalidated)),
        }
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Credential teardown on authentication failure. The store is cleared
    /// first so callers resuming after the failed await see no credential.
    #[cfg(any(test, feature = "hydrate"))]
    fn invalidate(&self) {
        credentials::clear();
        self.on_invalidated.with_value(|callback| callback());
    }

    /// Inspect a response status; 401 triggers invalidation before the error
    /// is returned.
    #[cfg(any(test, feature = "hydrate"))]
    fn check(&self, status: u16) -> Result<(), ApiError> {
        if (200..300).contains(&status) {
            return Ok(());
        }
        let err = error_for_status(status);
        if err == ApiError::Unauthorized {
            self.invalidate();
        }
        Err(err)
    }

    /// `GET` a JSON resource.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode error; 401 additionally
    /// tears the session down before this returns.
    pub async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let mut req = gloo_net::http::Request::get(&self.url(path));
            if let Some((name, value)) = authorization(credentials::read()) {
                req = req.header(name, &value);
            }
            let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            self.check(resp.status())?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }

    /// `POST` a JSON body and decode a JSON response.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::get_json`].
    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        #[cfg(feature = "hydrate")]
        {
            let mut req = gloo_net::http::Request::post(&self.url(path));
            if let Some((name, value)) = authorization(credentials::read()) {
                req = req.header(name, &value);
            }
            let resp = req
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            self.check(resp.status())?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }

    /// `POST` an `application/x-www-form-urlencoded` body and decode a JSON
    /// response. Used by the OAuth2 password login endpoint.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::get_json`].
    pub async fn post_form<T>(&self, path: &str, fields: &[(&str, &str)]) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        #[cfg(feature = "hydrate")]
        {
            let params = web_sys::UrlSearchParams::new()
                .map_err(|_| ApiError::Network("UrlSearchParams unavailable".to_owned()))?;
            for (key, value) in fields {
                params.append(key, value);
            }
            let body = String::from(params.to_string());

            let mut req = gloo_net::http::Request::post(&self.url(path))
                .header("Content-Type", "application/x-www-form-urlencoded");
            if let Some((name, value)) = authorization(credentials::read()) {
                req = req.header(name, &value);
            }
            let resp = req
                .body(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            self.check(resp.status())?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, fields);
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }
}
