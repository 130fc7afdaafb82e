// ABOUTME: Date fallback for RSS date fields.
// ABOUTME: Picks the first set timestamp and formats it as RFC 1123 with a numeric zone.

use chrono::{DateTime, FixedOffset};

/// RFC 1123 with numeric zone: "Mon, 02 Jan 2006 15:04:05 -0700".
pub const RFC1123Z: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Formats a timestamp in its own offset using [`RFC1123Z`].
pub fn format_rfc1123z(dt: &DateTime<FixedOffset>) -> String {
    dt.format(RFC1123Z).to_string()
}

/// Returns the first set timestamp formatted with [`RFC1123Z`], or an empty
/// string when every candidate is unset.
pub fn first_timestamp(candidates: &[Option<DateTime<FixedOffset>>]) -> String {
    candidates
        .iter()
        .flatten()
        .next()
        .map(format_rfc1123z)
        .unwrap_or_default()
}
