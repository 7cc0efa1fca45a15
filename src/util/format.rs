//! Czech-locale display formatting for API strings.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::AuditStatus;

/// Render an ISO-8601 date or datetime as a Czech date, e.g.
/// `"2026-09-01"` → `"1. 9. 2026"`. Empty or unparsable input renders `"-"`.
pub fn format_date(value: &str) -> String {
    match split_iso(value) {
        Some((day, month, year, _)) => format!("{day}. {month}. {year}"),
        None => "-".to_owned(),
    }
}

/// Render an ISO-8601 datetime as a Czech date and time, e.g.
/// `"2026-09-01T07:30:00"` → `"1. 9. 2026 07:30:00"`.
pub fn format_date_time(value: &str) -> String {
    match split_iso(value) {
        Some((day, month, year, Some(time))) => format!("{day}. {month}. {year} {time}"),
        Some((day, month, year, None)) => format!("{day}. {month}. {year}"),
        None => "-".to_owned(),
    }
}

/// Split `YYYY-MM-DD[Thh:mm:ss]` into day, month, year, and the optional
/// time part, with leading zeros stripped from day and month.
fn split_iso(value: &str) -> Option<(u32, u32, i32, Option<&str>)> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let (date, time) = match value.split_once(['T', ' ']) {
        Some((date, time)) => (date, Some(time)),
        None => (value, None),
    };
    let mut parts = date.splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    let time = time.map(|t| t.split('.').next().unwrap_or(t));
    Some((day, month, year, time))
}

/// Whether a deadline has passed. Date-only lexicographic comparison against
/// `today` (`YYYY-MM-DD`); settled audits are never overdue.
pub fn is_overdue(deadline: Option<&str>, status: AuditStatus, today: &str) -> bool {
    if status.is_settled() || today.is_empty() {
        return false;
    }
    match deadline {
        Some(deadline) if !deadline.is_empty() => {
            let date = deadline.split_once(['T', ' ']).map_or(deadline, |(d, _)| d);
            date < today
        }
        _ => false,
    }
}

/// Truncate to `max` characters with an ellipsis; char-aware so multi-byte
/// text never splits mid-character.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let mut out: String = text.chars().take(max).collect();
    out.push_str("...");
    out
}

/// Today's date as `YYYY-MM-DD`, empty outside the browser.
pub fn today_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format!(
            "{:04}-{:02}-{:02}",
            now.get_full_year(),
            now.get_month() + 1,
            now.get_date()
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
