//! Application configuration provided as context from the root component.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::session::idle::DEFAULT_TIMEOUT_MINUTES;

/// Runtime configuration for the client.
///
/// The entry and landing paths are deliberately configuration rather than
/// literals: every auth failure redirects to `entry_path`, while
/// authenticated-but-under-privileged users land on `landing_path`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the backend API.
    pub api_base_url: String,
    /// Unauthenticated entry screen (the login page).
    pub entry_path: String,
    /// Default screen for authenticated users.
    pub landing_path: String,
    /// Role string granting access to admin-only routes.
    pub admin_role: String,
    /// Minutes of inactivity before the session is force-terminated.
    pub idle_timeout_minutes: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_owned(),
            entry_path: "/".to_owned(),
            landing_path: "/dashboard".to_owned(),
            admin_role: "admin".to_owned(),
            idle_timeout_minutes: DEFAULT_TIMEOUT_MINUTES,
        }
    }
}
