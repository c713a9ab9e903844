//! Derivation of display values from examination records.
//!
//! These are small pure functions: the 24-hour uptime percentage, the
//! ISO-8601 seconds-to-milliseconds conversion, and timestamp parsing and
//! formatting. The current time is always passed in explicitly so results
//! are deterministic for a fixed input.

use anyhow::{bail, Result};
use time::format_description::well_known::Rfc3339;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Duration, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use super::history::ExaminationRecord;

/// Display format: `HH:MM:SS DD-MM-YY`, all fields zero-padded.
const TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour]:[minute]:[second] [day]-[month]-[year repr:last_two]");

/// Upstream timestamps without an offset, with fractional seconds.
const NAIVE_SUBSEC_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");

/// Upstream timestamps without an offset or fractional seconds.
const NAIVE_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Compute the uptime percentage over the trailing 24-hour window.
///
/// Only records whose timestamp parsed and falls in `[now - 24h, now]`
/// count; within the window, exactly status 200 is "up" and everything
/// else is "down". Returns `None` when the window is empty, which the
/// rendering layer maps to its not-available placeholder. Otherwise the
/// percentage is formatted to exactly two decimal places.
pub fn uptime_24h(records: &[ExaminationRecord], now: OffsetDateTime) -> Option<String> {
    let cutoff = now - Duration::hours(24);

    let window: Vec<&ExaminationRecord> =
        records.iter().filter(|r| r.time.is_some_and(|t| t >= cutoff)).collect();

    if window.is_empty() {
        return None;
    }

    let up = window.iter().filter(|r| r.status_code == 200).count();
    Some(format!("{:.2}", up as f64 / window.len() as f64 * 100.0))
}

/// Convert an ISO-8601 seconds duration (`PT<seconds>S`) to milliseconds,
/// formatted to exactly three decimal places (`"PT0.456S"` -> `"456.000"`).
pub fn iso_seconds_to_ms(iso: &str) -> Result<String> {
    let Some(body) = iso.strip_prefix("PT").and_then(|s| s.strip_suffix('S')) else {
        bail!("unknown duration format: {}", iso);
    };

    let seconds: f64 = body.parse()?;
    Ok(format!("{:.3}", seconds * 1000.0))
}

/// Format a timestamp as `HH:MM:SS DD-MM-YY` using its own wall-clock
/// fields. Convert with [`to_local`] first for machine-local display.
pub fn format_timestamp(t: OffsetDateTime) -> String {
    t.format(TIMESTAMP_FORMAT).unwrap_or_else(|_| "Invalid date".to_string())
}

/// Shift a timestamp to the machine-local offset.
///
/// The local offset cannot always be determined (the lookup refuses to run
/// once the process has multiple threads); the timestamp is returned
/// unchanged in that case.
pub fn to_local(t: OffsetDateTime) -> OffsetDateTime {
    match UtcOffset::current_local_offset() {
        Ok(offset) => t.to_offset(offset),
        Err(_) => t,
    }
}

/// Parse an examination timestamp.
///
/// The API emits both RFC 3339 and naive `YYYY-MM-DDTHH:MM:SS[.ffffff]`
/// forms; naive values are read as UTC.
pub fn parse_examination_time(s: &str) -> Option<OffsetDateTime> {
    if let Ok(t) = OffsetDateTime::parse(s, &Rfc3339) {
        return Some(t);
    }
    if let Ok(t) = PrimitiveDateTime::parse(s, NAIVE_SUBSEC_FORMAT) {
        return Some(t.assume_utc());
    }
    PrimitiveDateTime::parse(s, NAIVE_FORMAT).ok().map(|t| t.assume_utc())
}
