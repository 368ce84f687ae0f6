//! Lenient and strict timestamp parsing, normalized to UTC.
//!
//! The backend stores spans as strings and the dashboards pass them through
//! untouched, so this layer has to take what it gets: RFC 3339, naive
//! datetimes, or bare dates. The lenient parser answers `None` for anything
//! else; the strict variant reports the rejected input.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{Result, SpanError};

/// Parse a timestamp leniently.
///
/// Accepted formats, tried in order:
/// - RFC 3339 (`2024-01-01T00:00:00Z`, any offset)
/// - Naive datetime `2024-01-01T00:00:00` (read as UTC)
/// - Naive datetime `2024-01-01 00:00:00` (read as UTC)
/// - Bare date `2024-01-01` (midnight UTC)
///
/// Anything else — including empty or whitespace-only input — is `None`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}

/// Strict variant of [`parse_timestamp`]: same grammar, but a rejected input
/// becomes [`SpanError::InvalidTimestamp`] instead of a silent `None`.
pub fn parse_timestamp_strict(raw: &str) -> Result<DateTime<Utc>> {
    parse_timestamp(raw).ok_or_else(|| SpanError::InvalidTimestamp(raw.to_string()))
}
