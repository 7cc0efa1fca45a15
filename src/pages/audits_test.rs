use super::*;
use crate::net::types::AuditStatus;

fn audit(id: i64) -> NokAudit {
    NokAudit {
        id,
        status: AuditStatus::Open,
        severity: None,
        description: Some("Chybí kryt".to_owned()),
        note: None,
        solver_id: None,
        deadline: Some("2026-09-01".to_owned()),
        created_at: Some("2026-08-20T10:15:00".to_owned()),
        line_name: "Linka 3".to_owned(),
        category_name: "Bezpečnost".to_owned(),
        picture_url: None,
    }
}

#[test]
fn export_rows_match_the_header_arity() {
    let rows = export_rows(&[audit(1), audit(2)]);
    assert_eq!(rows.len(), 2);
    for row in &rows {
        assert_eq!(row.len(), EXPORT_HEADERS.len());
    }
}

#[test]
fn export_rows_use_labels_and_blank_out_missing_fields() {
    let mut second = audit(2);
    second.description = None;
    second.deadline = None;

    let rows = export_rows(&[audit(1), second]);
    assert_eq!(rows[0], vec!["1", "Linka 3", "Bezpečnost", "Otevřené", "Chybí kryt", "2026-09-01"]);
    assert_eq!(rows[1][4], "");
    assert_eq!(rows[1][5], "");
}
