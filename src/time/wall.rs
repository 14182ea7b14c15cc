//! Wall-clock conversions for calendar formatting.
//!
//! All conversions in this crate use a single UTC-fixed policy: timestamps
//! carrying an explicit offset are normalized to UTC, and naive timestamps
//! are interpreted as UTC. Day bucketing, display strings, and boundary
//! checks all read the same clock, so a record never lands in different
//! days depending on which helper inspected it.

use chrono::{DateTime, Datelike, Duration, NaiveDateTime, TimeZone, Timelike, Utc};

use crate::core::error::{CalendarError, CalendarResult};

/// Parse an ISO-8601 start timestamp into an absolute UTC instant.
///
/// Accepts RFC 3339 (`2025-08-20T09:00:00Z`, `2025-08-20T09:00:00+02:00`)
/// and naive timestamps without an offset (`2025-08-20T09:00:00`, optional
/// fractional seconds), the form the practice feed actually delivers.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use clinic_rust::time::parse_start_instant;
///
/// let naive = parse_start_instant("2025-08-20T09:00:00").unwrap();
/// assert_eq!(naive, Utc.with_ymd_and_hms(2025, 8, 20, 9, 0, 0).unwrap());
///
/// let offset = parse_start_instant("2025-08-20T11:00:00+02:00").unwrap();
/// assert_eq!(offset, naive);
/// ```
pub fn parse_start_instant(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// End instant of an appointment: `start + duration_minutes`.
pub fn end_instant(start: DateTime<Utc>, duration_minutes: u32) -> DateTime<Utc> {
    start + Duration::minutes(i64::from(duration_minutes))
}

/// Zero-padded 24-hour `HH:MM`, used for grid positioning.
pub fn format_24h(instant: DateTime<Utc>) -> String {
    instant.format("%H:%M").to_string()
}

/// 12-hour clock string without a leading zero, e.g. `"9:05 AM"`.
pub fn format_12h(instant: DateTime<Utc>) -> String {
    let (is_pm, hour) = instant.hour12();
    format!(
        "{}:{:02} {}",
        hour,
        instant.minute(),
        if is_pm { "PM" } else { "AM" }
    )
}

/// Human-readable 12-hour range, e.g. `"9:00 AM - 10:20 AM"`.
pub fn time_display(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    format!("{} - {}", format_12h(start), format_12h(end))
}

/// True iff both instants fall on the same UTC calendar day.
pub fn is_same_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// Parse a zero-padded `HH:MM` wall-clock string into minutes past midnight.
pub fn wall_minutes(value: &str) -> CalendarResult<u32> {
    let invalid = || CalendarError::WallClockParse {
        value: value.to_string(),
    };

    let (hours, minutes) = value.split_once(':').ok_or_else(invalid)?;
    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    if hours >= 24 || minutes >= 60 {
        return Err(invalid());
    }
    Ok(hours * 60 + minutes)
}
