//! Timetable time handling.
//!
//! Schedule entries carry arrival and departure times as "HH:MM" strings.
//! The store keeps them verbatim; this module provides the parser used to
//! check them at the HTTP boundary.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day as published in a timetable.
///
/// Unlike a full timestamp, a timetable time has no date attached: the
/// `days` of a schedule entry say which days it applies to.
///
/// # Examples
///
/// ```
/// use schedule_server::domain::ScheduleTime;
///
/// let time = ScheduleTime::parse_hhmm("14:30").unwrap();
/// assert_eq!(time.to_string(), "14:30");
///
/// assert!(ScheduleTime::parse_hhmm("1430").is_err());
/// assert!(ScheduleTime::parse_hhmm("25:00").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleTime(NaiveTime);

impl ScheduleTime {
    /// Parse a time from "HH:MM" (24-hour) format.
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl fmt::Debug for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScheduleTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        let t = ScheduleTime::parse_hhmm("00:00").unwrap();
        assert_eq!(t.hour(), 0);
        assert_eq!(t.minute(), 0);

        let t = ScheduleTime::parse_hhmm("23:59").unwrap();
        assert_eq!(t.hour(), 23);
        assert_eq!(t.minute(), 59);

        let t = ScheduleTime::parse_hhmm("06:05").unwrap();
        assert_eq!(t.hour(), 6);
        assert_eq!(t.minute(), 5);
    }

    #[test]
    fn parse_invalid_format() {
        // Wrong length
        assert!(ScheduleTime::parse_hhmm("").is_err());
        assert!(ScheduleTime::parse_hhmm("1430").is_err());
        assert!(ScheduleTime::parse_hhmm("6:30").is_err());
        assert!(ScheduleTime::parse_hhmm("14:30:00").is_err());

        // Missing colon
        assert!(ScheduleTime::parse_hhmm("14-30").is_err());
        assert!(ScheduleTime::parse_hhmm("14.30").is_err());

        // Non-digit characters
        assert!(ScheduleTime::parse_hhmm("ab:cd").is_err());
        assert!(ScheduleTime::parse_hhmm("1a:30").is_err());
    }

    #[test]
    fn parse_invalid_values() {
        assert!(ScheduleTime::parse_hhmm("24:00").is_err());
        assert!(ScheduleTime::parse_hhmm("12:60").is_err());
    }

    #[test]
    fn error_message() {
        let err = ScheduleTime::parse_hhmm("24:00").unwrap_err();
        assert_eq!(err.to_string(), "invalid time: hour must be 0-23");
    }

    #[test]
    fn debug() {
        let t = ScheduleTime::parse_hhmm("07:45").unwrap();
        assert_eq!(format!("{:?}", t), "ScheduleTime(07:45)");
    }
}
