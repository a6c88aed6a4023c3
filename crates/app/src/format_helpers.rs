//! Display formatting for dates coming from the backend.

use chrono::{NaiveDate, NaiveDateTime};

/// Format `YYYY-MM-DD` (or an ISO datetime) as "Jan 20, 2026".
///
/// Anything unparseable is returned unchanged.
pub fn format_date_human(date_str: &str) -> String {
    let date_part = date_str.get(..10).unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Format an ISO datetime as "Jan 20, 2026 9:35 PM". Falls back to the
/// date alone when there is no time part.
pub fn format_datetime_human(date_str: &str) -> String {
    let trimmed = date_str.trim_end_matches('Z');
    let trimmed = trimmed.get(..16).unwrap_or(trimmed);
    match NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M") {
        Ok(dt) => dt.format("%b %-d, %Y %-I:%M %p").to_string(),
        Err(_) => format_date_human(date_str),
    }
}

/// Appointment date column. Missing dates render as a dash.
pub fn appointment_date(date: Option<&str>) -> String {
    match date.filter(|d| !d.trim().is_empty()) {
        Some(d) if d.len() > 10 => format_datetime_human(d),
        Some(d) => format_date_human(d),
        None => "-".to_string(),
    }
}
