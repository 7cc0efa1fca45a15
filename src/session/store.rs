//! Single source of truth for "who is the current user".
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionState` is a plain, synchronously-testable state machine; the only
//! mutators are `login`, `begin_fetch`/`finish_fetch`, and `logout`.
//! `SessionContext` wraps it in a signal, adds the de-duplicated identity
//! fetch, and is constructed once at application start and passed down via
//! context — never accessed as an ambient global.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use leptos::prelude::{LocalStorage, RwSignal, StoredValue, Update, With, WithUntracked, WithValue};

use crate::net::api;
use crate::net::http::{ApiError, HttpGateway};
use crate::net::types::UserProfile;
use crate::session::credentials::{self, DisplayHints};
use crate::session::resolver::{self, IdentityResolver, Join, Resolution};

/// In-memory identity cache.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Resolved profile; `None` means unauthenticated.
    pub user: Option<UserProfile>,
    /// An identity fetch is outstanding.
    pub loading: bool,
    /// Last resolution failure, kept for display.
    pub error: Option<ApiError>,
    /// An identity resolution has completed since the last logout; a `None`
    /// user with `resolved` set means the credential is stale or invalid.
    pub resolved: bool,
}

impl SessionState {
    /// Populate the identity directly from a completed login flow; no
    /// network call.
    pub fn login(&mut self, profile: UserProfile) {
        self.user = Some(profile);
        self.loading = false;
        self.error = None;
        self.resolved = true;
    }

    /// Mark a resolution as outstanding.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a resolution outcome. Failures leave the session
    /// unauthenticated and keep the error for display.
    pub fn finish_fetch(&mut self, outcome: &Resolution) {
        match outcome {
            Ok(profile) => {
                self.user = Some(profile.clone());
                self.error = None;
            }
            Err(err) => {
                self.user = None;
                self.error = Some(err.clone());
            }
        }
        self.loading = false;
        self.resolved = true;
    }

    /// Drop the identity. Idempotent.
    pub fn logout(&mut self) {
        self.user = None;
        self.loading = false;
        self.error = None;
        self.resolved = false;
    }

    /// Authentication predicate: a present user, nothing else.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Current role, empty when unauthenticated. A recorded error never
    /// yields a role — fail closed.
    pub fn role(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.role.as_str())
    }

    /// Display name, empty when unauthenticated.
    pub fn display_name(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.display_name.as_str())
    }

    /// Display name for the chrome: the resolved profile wins, cached
    /// credential hints fill in while resolution is pending.
    pub fn display_name_or_hint<'a>(&'a self, hints: Option<&'a DisplayHints>) -> &'a str {
        if self.user.is_some() {
            return self.display_name();
        }
        hints.and_then(|h| h.name.as_deref()).unwrap_or("")
    }

    /// Role for the chrome, with the same hint fallback. Used only to pick
    /// which links to render; the gate never reads hints.
    pub fn role_or_hint<'a>(&'a self, hints: Option<&'a DisplayHints>) -> &'a str {
        if self.user.is_some() {
            return self.role();
        }
        hints.and_then(|h| h.role.as_deref()).unwrap_or("")
    }

    /// Whether the authenticated chrome (nav bar) should render: a resolved
    /// user, or a credential still being resolved.
    pub fn chrome_visible(&self, has_credential: bool) -> bool {
        self.is_authenticated() || (!self.resolved && has_credential)
    }
}

/// Session authority handed to the gate, the idle guard, and the pages.
///
/// The resolver holds oneshot senders and is not `Sync`, so it lives in the
/// local arena; the handle itself stays cheap to clone into view closures.
#[derive(Clone)]
pub struct SessionContext {
    pub state: RwSignal<SessionState>,
    resolver: StoredValue<IdentityResolver, LocalStorage>,
}

impl SessionContext {
    /// Construct the session at application start.
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            resolver: StoredValue::new_local(IdentityResolver::new()),
        }
    }

    /// Set the identity from a completed login flow.
    pub fn login(&self, profile: UserProfile) {
        self.state.update(|s| s.login(profile));
    }

    /// Terminate the session and clear the persisted credential. Idempotent;
    /// both the idle guard and the 401 path funnel through here.
    pub fn logout(&self) {
        self.state.update(SessionState::logout);
        credentials::clear();
    }

    /// Reactive authentication predicate.
    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    /// Resolve the identity if it is not already cached.
    ///
    /// Concurrent callers share one outstanding request and observe the same
    /// outcome. A 401 during the fetch clears the credential through the
    /// gateway's invalidation path before this returns.
    ///
    /// # Errors
    ///
    /// Returns the fetch failure; the session is left unauthenticated with
    /// the error recorded.
    pub async fn ensure_user(&self, gateway: &HttpGateway) -> Resolution {
        if let Some(user) = self.state.with_untracked(|s| s.user.clone()) {
            return Ok(user);
        }

        match self.resolver.with_value(IdentityResolver::begin) {
            Join::Waiter(rx) => match rx.await {
                Ok(outcome) => outcome,
                Err(_) => resolver::cancelled(),
            },
            Join::Owner => {
                self.state.update(SessionState::begin_fetch);
                let outcome = api::fetch_me(gateway).await;
                self.resolver.with_value(|r| r.complete(&outcome));
                self.state.update(|s| s.finish_fetch(&outcome));
                outcome
            }
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
