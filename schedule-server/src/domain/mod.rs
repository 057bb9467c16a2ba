//! Domain types for the schedule service.
//!
//! Schedule data is stored as supplied by clients and documents; the
//! validating parsers here (`ScheduleTime`, `parse_weekday`) are applied at
//! the HTTP boundary only.

mod error;
mod route;
mod schedule;
mod time;
mod train_id;
mod weekday;

use indexmap::IndexMap;

pub use error::DomainError;
pub use route::{Route, RouteStop};
pub use schedule::ScheduleEntry;
pub use time::{ScheduleTime, TimeError};
pub use train_id::TrainId;
pub use weekday::parse_weekday;

/// The trains calling at one station, keyed by train id.
///
/// Keys are unique; iteration follows insertion order.
pub type StationTimetable = IndexMap<String, ScheduleEntry>;
