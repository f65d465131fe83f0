//! Stable value formatting.

use chrono::DateTime;

/// Formats an RFC 3339 timestamp for display: `YYYY-MM-DD HH:MM`.
///
/// Locale-independent and deterministic: the same persisted string always
/// formats the same way, and the raw value is never re-parsed lossily.
/// Returns `None` for strings that are not valid RFC 3339; callers fall
/// back to raw passthrough.
#[must_use]
pub fn format_datetime(raw: &str) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(raw).ok()?;
    Some(parsed.format("%Y-%m-%d %H:%M").to_string())
}
