//! Navigation gate: the authorization checkpoint evaluated before a screen
//! transition commits.
//!
//! DESIGN
//! ======
//! `evaluate` and `evaluate_entry` are pure functions over the route
//! requirement, credential presence, and the session snapshot. The async
//! drivers (`decide`, `decide_entry`) run the full state machine: when the
//! pure evaluation asks for identity resolution they await the shared fetch
//! (de-duplicated in `SessionContext`) and re-evaluate, so a decision is
//! never committed while resolution is pending and concurrent navigations
//! never trigger duplicate requests.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use leptos::prelude::WithUntracked;

use crate::config::AppConfig;
use crate::net::http::HttpGateway;
use crate::session::credentials;
use crate::session::store::{SessionContext, SessionState};

/// Static per-route authorization metadata.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteRequirement {
    pub requires_auth: bool,
    pub requires_admin: bool,
}

impl RouteRequirement {
    pub const PUBLIC: Self = Self { requires_auth: false, requires_admin: false };
    pub const AUTHENTICATED: Self = Self { requires_auth: true, requires_admin: false };
    pub const ADMIN: Self = Self { requires_auth: true, requires_admin: true };
}

/// Outcome of one gate evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    /// Commit the navigation.
    Allow,
    /// Unauthenticated; go to the entry screen.
    RedirectToEntry,
    /// Authenticated but under-privileged; go to the landing screen with an
    /// access-denied notice. Deliberately not the entry screen — the user
    /// stays logged in.
    RedirectToLanding,
    /// A credential exists but the identity is not yet resolved; the driver
    /// must await the shared fetch and re-evaluate.
    AwaitIdentity,
}

/// Outcome of evaluating a visit to the entry screen itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Show the entry screen (no credential, or a stale one).
    Stay,
    /// Already authenticated; bounce to the landing screen.
    RedirectToLanding,
    /// A credential exists but is unresolved; resolve first.
    AwaitIdentity,
}

/// Pure gate decision for a protected-or-public route.
pub fn evaluate(
    requirement: RouteRequirement,
    has_credential: bool,
    session: &SessionState,
    admin_role: &str,
) -> GateOutcome {
    if !requirement.requires_auth {
        return GateOutcome::Allow;
    }
    if !has_credential {
        return GateOutcome::RedirectToEntry;
    }
    match &session.user {
        // Resolution already ran and failed: fail closed.
        None if session.resolved => GateOutcome::RedirectToEntry,
        None => GateOutcome::AwaitIdentity,
        Some(user) => {
            if requirement.requires_admin && user.role != admin_role {
                GateOutcome::RedirectToLanding
            } else {
                GateOutcome::Allow
            }
        }
    }
}

/// Pure gate decision for the entry screen.
pub fn evaluate_entry(has_credential: bool, session: &SessionState) -> EntryOutcome {
    if session.is_authenticated() {
        return EntryOutcome::RedirectToLanding;
    }
    if has_credential && !session.resolved {
        return EntryOutcome::AwaitIdentity;
    }
    EntryOutcome::Stay
}

/// Run the gate for a protected route to a final outcome, awaiting identity
/// resolution when needed. Never returns [`GateOutcome::AwaitIdentity`].
pub async fn decide(
    requirement: RouteRequirement,
    session: &SessionContext,
    gateway: &HttpGateway,
    config: &AppConfig,
) -> GateOutcome {
    let snapshot = |s: &SessionState| evaluate(requirement, credentials::read().is_some(), s, &config.admin_role);

    match session.state.with_untracked(snapshot) {
        GateOutcome::AwaitIdentity => {
            // Outcome lands in the session either way; re-evaluate from it.
            let _ = session.ensure_user(gateway).await;
            match session.state.with_untracked(snapshot) {
                // Unreachable once resolution completed; fail closed anyway.
                GateOutcome::AwaitIdentity => GateOutcome::RedirectToEntry,
                settled => settled,
            }
        }
        settled => settled,
    }
}

/// Run the entry-screen gate to a final outcome. Never returns
/// [`EntryOutcome::AwaitIdentity`].
pub async fn decide_entry(session: &SessionContext, gateway: &HttpGateway) -> EntryOutcome {
    let snapshot = |s: &SessionState| evaluate_entry(credentials::read().is_some(), s);

    match session.state.with_untracked(snapshot) {
        EntryOutcome::AwaitIdentity => {
            let _ = session.ensure_user(gateway).await;
            match session.state.with_untracked(snapshot) {
                EntryOutcome::AwaitIdentity | EntryOutcome::Stay => EntryOutcome::Stay,
                EntryOutcome::RedirectToLanding => EntryOutcome::RedirectToLanding,
            }
        }
        settled => settled,
    }
}
