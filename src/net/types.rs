//! Wire DTOs for the backend API.
//!
//! DESIGN
//! ======
//! Field renames mirror the backend's Czech column names (`jmeno`, `termin`,
//! `zavaznost`, ...) so serde round-trips stay lossless against the deployed
//! API while the Rust side keeps English identifiers.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user's profile as returned by `GET /auth/me`.
///
/// Also the row shape of the admin user list (`GET /users/`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    /// Display name (`jmeno` on the wire).
    #[serde(rename = "jmeno")]
    pub display_name: String,
    pub email: String,
    /// Role string, e.g. `"admin"`, `"auditor"`, `"solver"`.
    pub role: String,
}

/// Response of `POST /auth/token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Lifecycle status of a nonconformity audit finding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    #[default]
    Open,
    Assigned,
    InProgress,
    Resolved,
    Closed,
    /// Forward-compatible catch-all for statuses this client predates.
    #[serde(other)]
    Unknown,
}

impl AuditStatus {
    /// Czech display label shown in list views.
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Otevřené",
            Self::Assigned => "Přiřazené",
            Self::InProgress => "V řešení",
            Self::Resolved => "Vyřešené",
            Self::Closed => "Uzavřené",
            Self::Unknown => "Neznámý",
        }
    }

    /// CSS utility classes for the status badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Open => "bg-red-100 text-red-800",
            Self::Assigned => "bg-orange-100 text-orange-800",
            Self::InProgress => "bg-blue-100 text-blue-800",
            Self::Resolved => "bg-green-100 text-green-800",
            Self::Closed | Self::Unknown => "bg-gray-100 text-gray-800",
        }
    }

    /// Whether the finding is finished; finished audits are never overdue.
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Resolved | Self::Closed)
    }
}

/// A nonconformity audit finding from `GET /neshody/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NokAudit {
    pub id: i64,
    pub status: AuditStatus,
    /// Severity (`zavaznost` on the wire).
    #[serde(rename = "zavaznost")]
    pub severity: Option<String>,
    /// Finding description (`popis` on the wire).
    #[serde(rename = "popis")]
    pub description: Option<String>,
    /// Free-form note (`poznamka` on the wire).
    #[serde(rename = "poznamka")]
    pub note: Option<String>,
    pub solver_id: Option<i64>,
    /// Resolution deadline as an ISO-8601 date (`termin` on the wire).
    #[serde(rename = "termin")]
    pub deadline: Option<String>,
    /// ISO-8601 timestamp of when the finding was recorded.
    pub created_at: Option<String>,
    pub line_name: String,
    pub category_name: String,
    pub picture_url: Option<String>,
}
