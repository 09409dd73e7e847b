//! Conversions between local wall-clock strings and unix timestamps.

use std::fmt::{Display, Write};

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

mod tests;

pub const DEFAULT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses `val` as a local wall-clock time in `format` and returns the unix timestamp in seconds.
///
/// Returns `None` if the text doesn't match the format or names a local time that doesn't exist,
/// such as one skipped by a DST transition. An ambiguous time resolves to its earlier instant.
pub fn local_time_to_unix_timestamp(val: &str, format: &str) -> Option<i64> {
    let naive = NaiveDateTime::parse_from_str(val, format).ok()?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|time| time.timestamp())
}

pub fn timestamp_to_local(timestamp: i64) -> Option<DateTime<Local>> {
    DateTime::from_timestamp(timestamp, 0).map(|utc| utc.with_timezone(&Local))
}

/// Formats `time` with a strftime-style `format`. Returns `None` if the format is invalid.
pub fn format_time<Tz>(time: &DateTime<Tz>, format: &str) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    write!(out, "{}", time.format(format)).ok()?;
    Some(out)
}
