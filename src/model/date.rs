//! # Date Parsing
//!
//! Flexible parsing for caller-supplied and dataset date strings.
//!
//! A date-only value parses to midnight UTC of that day; there is no
//! implicit end-of-day extension for range upper bounds. Callers that
//! want an inclusive end-of-day must supply a time component.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a date or datetime string into a UTC timestamp
///
/// Accepted forms, tried in order: RFC 3339, `YYYY-MM-DDTHH:MM:SS`,
/// `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD`, `MM/DD/YYYY`.
/// Returns `None` for anything else.
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.and_utc());
        }
    }
    for format in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(value, format) {
            return Some(d.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }
    None
}
