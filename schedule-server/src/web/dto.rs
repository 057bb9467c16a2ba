//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Route, ScheduleEntry};
use crate::store::{SearchMatch, TrainSummary};

/// Generic confirmation body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Request to add or update a train's schedule at a station.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationScheduleRequest {
    /// Train calling at the station
    pub train_id: String,

    /// Arrival time, HH:MM
    pub arrival: String,

    /// Departure time, HH:MM
    #[serde(alias = "deprature")]
    pub departure: String,

    /// Weekday names
    pub days: Vec<String>,
}

impl StationScheduleRequest {
    /// The schedule entry this request would store.
    pub fn to_entry(&self) -> ScheduleEntry {
        ScheduleEntry::new(&self.arrival, &self.departure, self.days.clone())
    }
}

/// Response for a station schedule update.
#[derive(Debug, Serialize)]
pub struct StationScheduleResponse {
    pub message: String,

    /// The accepted request, echoed back
    pub schedule: StationScheduleRequest,
}

/// A train in the train list.
#[derive(Debug, Serialize)]
pub struct TrainSummaryResult {
    pub train_id: String,

    /// Station names in calling order
    pub stations: Vec<String>,
}

impl From<TrainSummary> for TrainSummaryResult {
    fn from(summary: TrainSummary) -> Self {
        Self {
            train_id: summary.train_id.into(),
            stations: summary.stations,
        }
    }
}

/// Request to register a new train.
///
/// Both fields are optional here so a missing one is reported as a
/// validation failure rather than a JSON error.
#[derive(Debug, Deserialize)]
pub struct AddTrainRequest {
    pub train_id: Option<String>,

    /// Station name to schedule entry, in calling order
    pub schedule: Option<Route>,
}

/// Response for a registered train.
#[derive(Debug, Serialize)]
pub struct AddTrainResponse {
    pub message: String,
    pub train_id: String,
    pub schedule: Route,
}

/// Query for point-to-point search.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Origin station name
    pub from_station: String,

    /// Destination station name
    pub to_station: String,
}

/// A train in search results.
#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub train_id: String,

    /// Stops from origin through destination
    pub segment: Route,

    /// Days the train runs from the origin
    pub days: Vec<String>,
}

impl From<SearchMatch> for SearchResult {
    fn from(m: SearchMatch) -> Self {
        Self {
            train_id: m.train_id.into(),
            segment: m.segment,
            days: m.days,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
