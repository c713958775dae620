//! Publication date formatting
//!
//! Dates are displayed as `dd Mon yyyy` with Brazilian Portuguese month
//! abbreviations, evaluated in UTC.

use chrono::{DateTime, Datelike, FixedOffset, Utc};

/// Brazilian Portuguese month abbreviations, January first
pub const PT_BR_MONTHS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// Parse a CMS timestamp.
///
/// Accepts RFC 3339 (`2021-03-15T00:00:00Z`) and the `+0000` offset form the
/// CMS emits (`2021-03-25T19:25:28+0000`).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::<FixedOffset>::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z"))
        .or_else(|_| DateTime::<FixedOffset>::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Format a date as `dd Mon yyyy`
pub fn format_display_date(date: &DateTime<Utc>) -> String {
    let month = PT_BR_MONTHS[date.month0() as usize];
    format!("{:02} {month} {:04}", date.day(), date.year())
}

/// Normalize an optional raw timestamp; unparseable input yields `None`
pub fn normalize_timestamp(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    match parse_timestamp(raw) {
        Some(date) => Some(format_display_date(&date)),
        None => {
            tracing::warn!(timestamp = %raw, "unparseable publication date");
            None
        }
    }
}
