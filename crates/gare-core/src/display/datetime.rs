//! DateTime display utilities.
//!
//! Favorites record when they were added; these wrappers print such instants
//! at minute precision in a given zone, or in the system zone by default.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

const PATTERN: &str = "%Y-%m-%d %H:%M %Z";

/// Formats a `Timestamp` in an explicit time zone as `YYYY-MM-DD HH:MM TZ`.
pub struct ZonedDateTime<'a> {
    pub timestamp: &'a Timestamp,
    pub tz: &'a TimeZone,
}

impl<'a> fmt::Display for ZonedDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.timestamp.to_zoned(self.tz.clone()).strftime(PATTERN))
    }
}

/// Formats a `Timestamp` in the system time zone.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tz = TimeZone::system();
        let zoned = ZonedDateTime {
            timestamp: self.0,
            tz: &tz,
        };
        fmt::Display::fmt(&zoned, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoned_datetime() {
        let ts: Timestamp = "2024-06-15T12:34:56Z".parse().unwrap();
        let rendered = ZonedDateTime {
            timestamp: &ts,
            tz: &TimeZone::UTC,
        }
        .to_string();
        assert_eq!(rendered, "2024-06-15 12:34 UTC");
    }

    #[test]
    fn test_local_datetime_shape() {
        let ts: Timestamp = "2024-06-15T12:00:00Z".parse().unwrap();
        let rendered = LocalDateTime(&ts).to_string();
        assert!(rendered.starts_with("2024-06-1"));
        assert_eq!(rendered.split(' ').count(), 3);
    }
}
