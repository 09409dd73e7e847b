#![cfg(test)]

use chrono::Utc;

use super::*;

#[test]
fn test_local_round_trip() {
    let timestamp = 1_751_800_000;

    let local = timestamp_to_local(timestamp).unwrap();
    let text = format_time(&local, DEFAULT_FORMAT).unwrap();

    assert_eq!(local_time_to_unix_timestamp(&text, DEFAULT_FORMAT), Some(timestamp));
}

#[test]
fn test_custom_format() {
    let utc = DateTime::<Utc>::from_timestamp(0, 0).unwrap();
    assert_eq!(format_time(&utc, "%Y/%m/%d %H:%M").as_deref(), Some("1970/01/01 00:00"));

    let parsed = local_time_to_unix_timestamp("2025/07/06 12:30", "%Y/%m/%d %H:%M").unwrap();
    let back = format_time(&timestamp_to_local(parsed).unwrap(), "%Y/%m/%d %H:%M");
    assert_eq!(back.as_deref(), Some("2025/07/06 12:30"));
}

#[test]
fn test_rejects_bad_input() {
    assert_eq!(local_time_to_unix_timestamp("2025-13-01 00:00:00", DEFAULT_FORMAT), None);
    assert_eq!(local_time_to_unix_timestamp("yesterday", DEFAULT_FORMAT), None);
    assert_eq!(format_time(&Utc::now(), "%Q"), None, "Unknown specifiers should not panic.");
}
