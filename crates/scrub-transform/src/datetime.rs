//! Best-effort timestamp parsing and canonical ISO 8601 rendering.
//!
//! Recency columns arrive in whatever format the upstream system produced.
//! Parsing tries an ordered list of formats and preserves date vs. datetime
//! precision; rendering always yields ISO 8601 extended form, so canonical
//! values also sort chronologically as plain strings.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A parsed timestamp, preserving the precision of the source value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// Date and time of day: YYYY-MM-DDTHH:MM:SS
    DateTime(NaiveDateTime),
    /// Date only: YYYY-MM-DD
    Date(NaiveDate),
}

impl Timestamp {
    /// Canonical ISO 8601 rendering, preserving precision.
    pub fn canonical(&self) -> String {
        match self {
            Timestamp::DateTime(dt) => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
            Timestamp::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }

    /// The instant used for recency comparison; dates count as midnight.
    pub fn as_datetime(&self) -> NaiveDateTime {
        match self {
            Timestamp::DateTime(dt) => *dt,
            Timestamp::Date(d) => d.and_time(NaiveTime::MIN),
        }
    }
}

/// Parses a timestamp with best-effort format inference.
///
/// Datetime formats are tried before date-only formats; day-first numeric
/// orders are tried before month-first. Returns `None` for empty or
/// unparseable input.
pub fn parse_timestamp(value: &str) -> Option<Timestamp> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(dt) = try_parse_datetime(trimmed) {
        return Some(Timestamp::DateTime(dt));
    }
    if let Some(d) = try_parse_date(trimmed) {
        return Some(Timestamp::Date(d));
    }
    None
}

fn try_parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.f", // With fractional seconds
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%d-%b-%Y %H:%M:%S", // 15-Jan-2024 10:30:00
        "%d/%m/%Y %H:%M:%S", // European
        "%m/%d/%Y %H:%M:%S", // US
    ];

    for fmt in &formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt);
        }
    }

    None
}

fn try_parse_date(value: &str) -> Option<NaiveDate> {
    let formats = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%d-%b-%Y",  // 15-Jan-2024
        "%d-%B-%Y",  // 15-January-2024
        "%d/%m/%Y",  // European: 15/01/2024
        "%m/%d/%Y",  // US: 01/15/2024
        "%d.%m.%Y",  // German: 15.01.2024
        "%Y%m%d",    // Compact: 20240115
        "%b %d, %Y", // Jan 15, 2024
        "%B %d, %Y", // January 15, 2024
        "%d %b %Y",  // 15 Jan 2024
        "%d %B %Y",  // 15 January 2024
    ];

    for fmt in &formats {
        if let Ok(d) = NaiveDate::parse_from_str(value, fmt) {
            return Some(d);
        }
    }

    None
}
