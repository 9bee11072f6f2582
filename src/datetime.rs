//! ISO-8601 handling for chat timestamps.
//!
//! Timestamps are stored without a zone. A trailing `Z` or numeric offset is
//! dropped and the wall-clock time kept as written. Precision is kept to the
//! microsecond.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// Parse an ISO-8601 date or date-time string.
pub fn parse_iso8601(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();
    let s = trimmed.strip_suffix(['Z', 'z']).unwrap_or(trimmed);

    let parsed = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            OFFSET_FORMATS
                .iter()
                .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.naive_local())
        })
        .or_else(|| parse_hour_only(s))
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    Some(truncate_to_micros(parsed))
}

// `YYYY-MM-DDTHH`; chrono's parser always wants minutes.
fn parse_hour_only(s: &str) -> Option<NaiveDateTime> {
    let (date, hour) = s.split_once(['T', ' '])?;
    if hour.len() != 2 || !hour.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u32 = hour.parse().ok()?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()?
        .and_hms_opt(hour, 0, 0)
}

/// Render as `YYYY-MM-DDTHH:MM:SS`, with `.ffffff` only when there are microseconds.
pub fn to_iso8601(dt: &NaiveDateTime) -> String {
    let base = dt.format("%Y-%m-%dT%H:%M:%S");
    let micros = (dt.nanosecond() % 1_000_000_000) / 1_000;
    if micros == 0 {
        base.to_string()
    } else {
        format!("{base}.{micros:06}")
    }
}

/// Current UTC time at the precision timestamps are stored with.
pub fn now_utc() -> NaiveDateTime {
    truncate_to_micros(Utc::now().naive_utc())
}

fn truncate_to_micros(dt: NaiveDateTime) -> NaiveDateTime {
    let nanos = dt.nanosecond();
    dt.with_nanosecond(nanos - nanos % 1_000).unwrap_or(dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        parse_iso8601(s).unwrap_or_else(|| panic!("expected {s} to parse"))
    }

    #[test]
    fn whole_seconds_render_unchanged() {
        assert_eq!(to_iso8601(&at("2024-01-01T10:00:00")), "2024-01-01T10:00:00");
    }

    #[test]
    fn fractional_seconds_render_as_micros() {
        assert_eq!(
            to_iso8601(&at("2024-01-01T10:00:00.5")),
            "2024-01-01T10:00:00.500000"
        );
        assert_eq!(
            to_iso8601(&at("2024-01-01T10:00:00.123456789")),
            "2024-01-01T10:00:00.123456"
        );
    }

    #[test]
    fn accepts_space_separator_and_short_forms() {
        assert_eq!(to_iso8601(&at("2024-01-01 10:00:00")), "2024-01-01T10:00:00");
        assert_eq!(to_iso8601(&at("2024-01-01T10:30")), "2024-01-01T10:30:00");
        assert_eq!(to_iso8601(&at("2024-01-01")), "2024-01-01T00:00:00");
    }

    #[test]
    fn offsets_are_dropped_keeping_wall_clock() {
        assert_eq!(
            to_iso8601(&at("2024-01-01T12:00:00+02:00")),
            "2024-01-01T12:00:00"
        );
        assert_eq!(
            to_iso8601(&at("2024-01-01T12:00-05:00")),
            "2024-01-01T12:00:00"
        );
        assert_eq!(to_iso8601(&at("2024-01-01T10:00:00Z")), "2024-01-01T10:00:00");
        assert_eq!(to_iso8601(&at("2024-01-01T10:00Z")), "2024-01-01T10:00:00");
    }

    #[test]
    fn accepts_hour_precision() {
        assert_eq!(to_iso8601(&at("2024-01-01T10")), "2024-01-01T10:00:00");
        assert_eq!(to_iso8601(&at("2024-01-01 07")), "2024-01-01T07:00:00");
        assert!(parse_iso8601("2024-01-01T24").is_none());
        assert!(parse_iso8601("2024-01-01T1").is_none());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_iso8601("yesterday").is_none());
        assert!(parse_iso8601("").is_none());
        assert!(parse_iso8601("2024-13-01T10:00:00").is_none());
        assert!(parse_iso8601("2024-01-01T25:00:00").is_none());
    }
}
