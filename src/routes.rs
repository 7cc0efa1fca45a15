//! Static route table with per-screen authorization requirements.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::session::gate::RouteRequirement;

/// One navigable screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    /// Label used in the navigation bar; empty for screens without a link.
    pub label: &'static str,
    pub requirement: RouteRequirement,
}

/// Every navigable screen, entry screen first.
pub const ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry { path: "/", label: "", requirement: RouteRequirement::PUBLIC },
    RouteEntry { path: "/dashboard", label: "Přehled", requirement: RouteRequirement::AUTHENTICATED },
    RouteEntry { path: "/audits", label: "Neshody", requirement: RouteRequirement::AUTHENTICATED },
    RouteEntry { path: "/admin", label: "Administrace", requirement: RouteRequirement::ADMIN },
];

/// Requirement for a path. Unknown paths require authentication — an
/// unregistered screen must never render to an anonymous user.
pub fn requirement_for(path: &str) -> RouteRequirement {
    ROUTE_TABLE
        .iter()
        .find(|entry| entry.path == path)
        .map_or(RouteRequirement::AUTHENTICATED, |entry| entry.requirement)
}

/// Navigation links visible for a role: labelled, authenticated screens,
/// with admin-only screens filtered out for everyone else.
pub fn links_for_role(role: &str, admin_role: &str) -> Vec<&'static RouteEntry> {
    ROUTE_TABLE
        .iter()
        .filter(|entry| !entry.label.is_empty())
        .filter(|entry| !entry.requirement.requires_admin || role == admin_role)
        .collect()
}
