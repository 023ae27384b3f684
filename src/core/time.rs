// src/core/time.rs
// Timestamp parsing for the handful of layouts the summaries and the
// Alfresco listing actually use. Everything normalizes to
// `%Y-%m-%dT%H:%M:%S` so plain string comparison orders correctly.

use chrono::{NaiveDate, NaiveDateTime};

const LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    // Alfresco listing long form, e.g. "14 October 2019 10:20"
    "%d %B %Y %H:%M:%S",
    "%d %B %Y %H:%M",
    "%d %b %Y %H:%M",
];

const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d %B %Y", "%d %b %Y"];

pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim().trim_end_matches('Z');
    if s.is_empty() {
        return None;
    }
    for layout in LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, layout) {
            return Some(dt);
        }
    }
    for layout in DATE_LAYOUTS {
        if let Ok(d) = NaiveDate::parse_from_str(s, layout) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Canonical text form used throughout the tables.
pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Parse and reformat in one step; `None` when the input is unusable.
pub fn normalize_datetime(s: &str) -> Option<String> {
    parse_datetime(s).map(|dt| format_datetime(&dt))
}

/// `YYYY-MM` of a (normalized or raw) timestamp.
pub fn year_month(s: &str) -> Option<String> {
    parse_datetime(s).map(|dt| dt.format("%Y-%m").to_string())
}
