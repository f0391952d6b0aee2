//! UTC instant conversions at the library boundary.
//!
//! The engine works on Julian Dates (UTC) as `f64`. These helpers convert
//! to and from `chrono::DateTime<Utc>` and parse the date strings callers
//! hand in.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::error::DashaError;

/// Julian Date of the Unix epoch, 1970-01-01T00:00:00Z.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a UTC instant to a Julian Date.
pub fn datetime_to_jd(dt: DateTime<Utc>) -> f64 {
    let seconds = dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) * 1e-9;
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}

/// Convert a Julian Date to a UTC instant, rounded to the millisecond.
///
/// Returns `None` for non-finite input or dates chrono cannot represent.
pub fn jd_to_datetime(jd: f64) -> Option<DateTime<Utc>> {
    let millis = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round();
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
}

/// Format a Julian Date as RFC 3339 with milliseconds, or `"JD <value>"`
/// when it cannot be represented.
pub fn format_jd(jd: f64) -> String {
    match jd_to_datetime(jd) {
        Some(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => format!("JD {jd}"),
    }
}

/// Parse a UTC date/time.
///
/// Accepts RFC 3339 (`2026-01-03T00:00:00Z`, `...+05:45`),
/// `YYYY-MM-DDThh:mm:ss` without offset (taken as UTC), and a bare
/// `YYYY-MM-DD` (midnight UTC).
pub fn parse_utc(s: &str) -> Result<DateTime<Utc>, DashaError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    let naive = s.trim_end_matches('Z');
    if let Ok(ndt) = NaiveDateTime::parse_from_str(naive, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(ndt.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(naive, "%Y-%m-%d") {
        if let Some(ndt) = date.and_hms_opt(0, 0, 0) {
            return Ok(ndt.and_utc());
        }
    }
    Err(DashaError::InvalidDate(format!(
        "expected YYYY-MM-DDThh:mm:ssZ, got {s}"
    )))
}

/// Parse a UTC date/time straight to a Julian Date.
pub fn parse_utc_jd(s: &str) -> Result<f64, DashaError> {
    parse_utc(s).map(datetime_to_jd)
}
