//! Timestamp and file name helpers shared by the store and the gate.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Formats a timestamp for display.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Parses a persisted timestamp.
///
/// RFC 3339 strings carry their own offset and are converted to UTC. Strings
/// without an offset (`2024-01-31T18:04:05.123456`) are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

/// Returns true when `file_name` ends with `extension`, ignoring ASCII case.
pub fn has_extension(file_name: &str, extension: &str) -> bool {
    if extension.is_empty() || file_name.len() < extension.len() {
        return false;
    }
    file_name
        .get(file_name.len() - extension.len()..)
        .is_some_and(|tail| tail.eq_ignore_ascii_case(extension))
}
