//! Persisted bearer credential and cached display hints.
//!
//! Backed by `localStorage`; synchronous get/set/clear with no validation —
//! the token is an opaque value only the server can judge. The cached hints
//! (name, email, role) exist for instant UI rendering before identity
//! resolution completes and are never used for authorization decisions.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use crate::net::types::UserProfile;

pub const TOKEN_KEY: &str = "access_token";
#[cfg(feature = "hydrate")]
const USER_ID_KEY: &str = "user_id";
#[cfg(feature = "hydrate")]
const USER_NAME_KEY: &str = "user_name";
#[cfg(feature = "hydrate")]
const USER_EMAIL_KEY: &str = "user_email";
#[cfg(feature = "hydrate")]
const USER_ROLE_KEY: &str = "user_role";

/// A bearer token plus optional cached display hints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credential {
    pub token: String,
    pub hints: DisplayHints,
}

/// Cached identity hints from the last successful login.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayHints {
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into(), hints: DisplayHints::default() }
    }

    /// A credential carrying hints copied from a resolved profile.
    pub fn with_profile(token: impl Into<String>, profile: &UserProfile) -> Self {
        Self {
            token: token.into(),
            hints: DisplayHints {
                user_id: Some(profile.id.to_string()),
                name: Some(profile.display_name.clone()),
                email: Some(profile.email.clone()),
                role: Some(profile.role.clone()),
            },
        }
    }

    /// Value of the `Authorization` header for this credential.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the persisted credential, if any.
pub fn read() -> Option<Credential> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        let get = |key: &str| storage.get_item(key).ok().flatten();
        Some(Credential {
            token,
            hints: DisplayHints {
                user_id: get(USER_ID_KEY),
                name: get(USER_NAME_KEY),
                email: get(USER_EMAIL_KEY),
                role: get(USER_ROLE_KEY),
            },
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a credential and its hints.
pub fn write(credential: &Credential) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, &credential.token);
        let set = |key: &str, value: &Option<String>| match value {
            Some(v) => {
                let _ = storage.set_item(key, v);
            }
            None => {
                let _ = storage.remove_item(key);
            }
        };
        set(USER_ID_KEY, &credential.hints.user_id);
        set(USER_NAME_KEY, &credential.hints.name);
        set(USER_EMAIL_KEY, &credential.hints.email);
        set(USER_ROLE_KEY, &credential.hints.role);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credential;
    }
}

/// Remove the credential and every cached hint.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            for key in [TOKEN_KEY, USER_ID_KEY, USER_NAME_KEY, USER_EMAIL_KEY, USER_ROLE_KEY] {
                let _ = storage.remove_item(key);
            }
        }
    }
}
