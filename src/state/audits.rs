//! Derived views over the fetched nonconformity audit list.

#[cfg(test)]
#[path = "audits_test.rs"]
mod audits_test;

use std::collections::BTreeMap;

use crate::net::types::{AuditStatus, NokAudit};
use crate::util::format::is_overdue;

/// Per-status counts for the dashboard cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuditStats {
    pub total: usize,
    pub open: usize,
    pub assigned: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub closed: usize,
    pub overdue: usize,
}

/// Count audits per status and past-deadline findings. `today` is an
/// ISO-8601 date (`YYYY-MM-DD`).
pub fn stats(audits: &[NokAudit], today: &str) -> AuditStats {
    let count = |status: AuditStatus| audits.iter().filter(|a| a.status == status).count();
    AuditStats {
        total: audits.len(),
        open: count(AuditStatus::Open),
        assigned: count(AuditStatus::Assigned),
        in_progress: count(AuditStatus::InProgress),
        resolved: count(AuditStatus::Resolved),
        closed: count(AuditStatus::Closed),
        overdue: audits
            .iter()
            .filter(|a| is_overdue(a.deadline.as_deref(), a.status, today))
            .count(),
    }
}

/// Group audits by production line, sorted by line name.
pub fn by_line(audits: &[NokAudit]) -> BTreeMap<&str, Vec<&NokAudit>> {
    let mut grouped: BTreeMap<&str, Vec<&NokAudit>> = BTreeMap::new();
    for audit in audits {
        grouped.entry(audit.line_name.as_str()).or_default().push(audit);
    }
    grouped
}

/// Group audits by checklist category, sorted by category name.
pub fn by_category(audits: &[NokAudit]) -> BTreeMap<&str, Vec<&NokAudit>> {
    let mut grouped: BTreeMap<&str, Vec<&NokAudit>> = BTreeMap::new();
    for audit in audits {
        grouped.entry(audit.category_name.as_str()).or_default().push(audit);
    }
    grouped
}
