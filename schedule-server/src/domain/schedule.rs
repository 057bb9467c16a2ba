//! Schedule entries: when a train calls at a station.

use serde::{Deserialize, Serialize};

use super::{DomainError, ScheduleTime, parse_weekday};

/// A train's timetabled call at one station.
///
/// Times and day names are kept exactly as supplied. An origin stop often
/// has no arrival and a terminus no departure, so both are optional when
/// reading documents; absent times are omitted when writing.
///
/// Older `stations.json` files spell the departure field `deprature`; it is
/// accepted on input and always written back as `departure`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Arrival time, "HH:MM"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival: Option<String>,

    /// Departure time, "HH:MM"
    #[serde(
        default,
        alias = "deprature",
        skip_serializing_if = "Option::is_none"
    )]
    pub departure: Option<String>,

    /// Weekday names this call runs on
    #[serde(default)]
    pub days: Vec<String>,
}

impl ScheduleEntry {
    /// Create an entry with both times set.
    pub fn new(arrival: impl Into<String>, departure: impl Into<String>, days: Vec<String>) -> Self {
        Self {
            arrival: Some(arrival.into()),
            departure: Some(departure.into()),
            days,
        }
    }

    /// Check that the times are HH:MM and every day is a weekday name.
    ///
    /// The store never calls this; it is applied to client input only.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_time("arrival", self.arrival.as_deref())?;
        validate_time("departure", self.departure.as_deref())?;
        for day in &self.days {
            parse_weekday(day)?;
        }
        Ok(())
    }
}

fn validate_time(field: &'static str, value: Option<&str>) -> Result<(), DomainError> {
    let Some(value) = value else {
        return Ok(());
    };
    ScheduleTime::parse_hhmm(value)
        .map(|_| ())
        .map_err(|source| DomainError::InvalidTime {
            field,
            value: value.to_string(),
            source,
        })
}
