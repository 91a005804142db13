//! Text and time transforms for station boards and search results.
//!
//! The rail API reports instants as compact UTC strings
//! (`20240601T080000`). These helpers turn them into timestamps and turn
//! timestamps and place names into the French labels shown to riders.

use jiff::{civil::DateTime, tz::TimeZone, Timestamp};

use crate::error::TimestampError;


/// Label shown when a train runs exactly on schedule.
pub const ON_TIME_LABEL: &str = "À l'heure";

const COMPACT_LEN: usize = 15;
const SEPARATOR_INDEX: usize = 8;

/// Parses a compact `YYYYMMDDThhmmss` timestamp, interpreted as UTC.
///
/// # Errors
///
/// Rejects anything that is not exactly fifteen characters with `T` at
/// position 8 and ASCII digits elsewhere, and digit groups that do not form
/// a real calendar date and time.
///
/// # Examples
///
/// ```rust
/// use gare_core::format::parse_timestamp;
///
/// let ts = parse_timestamp("20240601T080000").unwrap();
/// assert_eq!(ts.to_string(), "2024-06-01T08:00:00Z");
/// assert!(parse_timestamp("2024-06-01").is_err());
/// ```
pub fn parse_timestamp(compact: &str) -> Result<Timestamp, TimestampError> {
    let len = compact.chars().count();
    if len != COMPACT_LEN {
        return Err(TimestampError::Length(len));
    }
    for (i, c) in compact.chars().enumerate() {
        if i == SEPARATOR_INDEX {
            if c != 'T' {
                return Err(TimestampError::MissingSeparator);
            }
        } else if !c.is_ascii_digit() {
            return Err(TimestampError::NotADigit(i));
        }
    }

    // Validated as ASCII above, so byte offsets match character positions.
    let bytes = compact.as_bytes();
    let field = |range: std::ops::Range<usize>| -> i32 {
        bytes[range]
            .iter()
            .fold(0, |acc, b| acc * 10 + i32::from(b - b'0'))
    };

    let datetime = DateTime::new(
        field(0..4) as i16,
        field(4..6) as i8,
        field(6..8) as i8,
        field(9..11) as i8,
        field(11..13) as i8,
        field(13..15) as i8,
        0,
    )
    .map_err(|e| TimestampError::OutOfRange(e.to_string()))?;

    datetime
        .to_zoned(TimeZone::UTC)
        .map(|zoned| zoned.timestamp())
        .map_err(|e| TimestampError::OutOfRange(e.to_string()))
}

/// Describes how late `actual` is compared to `scheduled`.
///
/// Equal instants give [`ON_TIME_LABEL`]. Otherwise the difference is
/// counted in whole minutes (truncated toward zero) and rendered as
/// `Retard : N min`, or `Retard : H h MM min` from one hour up. An early
/// train yields a negative minute count.
pub fn delay_label(scheduled: Timestamp, actual: Timestamp) -> String {
    if scheduled == actual {
        return ON_TIME_LABEL.to_string();
    }

    let minutes = (actual.as_second() - scheduled.as_second()) / 60;
    if minutes >= 60 {
        format!("Retard : {} h {:02} min", minutes / 60, minutes % 60)
    } else {
        format!("Retard : {minutes} min")
    }
}

/// Collapses `"<main> (<paren>)"` to `<main>` when both parts match
/// case-insensitively; returns `name` unchanged otherwise.
///
/// ```rust
/// use gare_core::format::dedupe_parenthetical;
///
/// assert_eq!(dedupe_parenthetical("Thionville (Thionville)"), "Thionville");
/// assert_eq!(dedupe_parenthetical("Paris (Gare du Nord)"), "Paris (Gare du Nord)");
/// ```
pub fn dedupe_parenthetical(name: &str) -> String {
    split_parenthetical(name)
        .filter(|(main, paren)| main.to_lowercase() == paren.to_lowercase())
        .map(|(main, _)| main.to_string())
        .unwrap_or_else(|| name.to_string())
}

fn split_parenthetical(name: &str) -> Option<(&str, &str)> {
    let inner = name.strip_suffix(')')?;
    let (main, paren) = inner.rsplit_once(" (")?;
    if main.is_empty() || paren.contains(['(', ')']) {
        return None;
    }
    Some((main, paren))
}

/// Formats `timestamp` as a 24-hour `HH:MM` clock reading in `tz`.
pub fn clock_time(timestamp: Timestamp, tz: &TimeZone) -> String {
    timestamp.to_zoned(tz.clone()).strftime("%H:%M").to_string()
}

/// Formats the time between two instants as `45 min` or `1 h 05`.
///
/// Durations under a minute round down to `0 min`; a negative span is
/// treated as its absolute value.
pub fn journey_duration(departure: Timestamp, arrival: Timestamp) -> String {
    let minutes = (arrival.as_second() - departure.as_second()).abs() / 60;
    if minutes >= 60 {
        format!("{} h {:02}", minutes / 60, minutes % 60)
    } else {
        format!("{minutes} min")
    }
}
