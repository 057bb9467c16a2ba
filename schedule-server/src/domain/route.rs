//! A train's route: its stops in calling order.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ScheduleEntry;

/// One stop on a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStop {
    /// Station name
    pub station: String,
    /// When the train calls there
    pub entry: ScheduleEntry,
}

impl RouteStop {
    pub fn new(station: impl Into<String>, entry: ScheduleEntry) -> Self {
        Self {
            station: station.into(),
            entry,
        }
    }
}

/// The ordered stops of a train.
///
/// Stop order is the calling order and is what segment search relies on.
/// Station names are unique within a route.
///
/// On the wire a route is a JSON object from station name to schedule entry,
/// with key order giving the calling order. When a document names a station
/// twice, the station keeps its first position and takes the last entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    stops: Vec<RouteStop>,
}

impl Route {
    /// Create an empty route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stop, or replace the entry of a station already on the route.
    pub fn insert(&mut self, station: impl Into<String>, entry: ScheduleEntry) {
        let station = station.into();
        match self.position(&station) {
            Some(idx) => self.stops[idx].entry = entry,
            None => self.stops.push(RouteStop::new(station, entry)),
        }
    }

    /// Index of a station in calling order.
    pub fn position(&self, station: &str) -> Option<usize> {
        self.stops.iter().position(|s| s.station == station)
    }

    /// The schedule entry for a station, if the train calls there.
    pub fn entry(&self, station: &str) -> Option<&ScheduleEntry> {
        self.stops
            .iter()
            .find(|s| s.station == station)
            .map(|s| &s.entry)
    }

    /// All stops in calling order.
    pub fn stops(&self) -> &[RouteStop] {
        &self.stops
    }

    /// Station names in calling order.
    pub fn station_names(&self) -> impl Iterator<Item = &str> {
        self.stops.iter().map(|s| s.station.as_str())
    }

    /// The sub-route from `from` through `to` inclusive.
    ///
    /// Returns `None` unless `from < to` and both are in bounds.
    pub fn slice(&self, from: usize, to: usize) -> Option<Route> {
        if from >= to || to >= self.stops.len() {
            return None;
        }
        Some(Route {
            stops: self.stops[from..=to].to_vec(),
        })
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, ScheduleEntry)> for Route {
    fn from_iter<I: IntoIterator<Item = (S, ScheduleEntry)>>(iter: I) -> Self {
        let mut route = Route::new();
        for (station, entry) in iter {
            route.insert(station, entry);
        }
        route
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.stops.len()))?;
        for stop in &self.stops {
            map.serialize_entry(&stop.station, &stop.entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Route {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RouteVisitor)
    }
}

struct RouteVisitor;

impl<'de> Visitor<'de> for RouteVisitor {
    type Value = Route;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping station names to schedule entries")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut route = Route::new();
        while let Some((station, entry)) = map.next_entry::<String, ScheduleEntry>()? {
            route.insert(station, entry);
        }
        Ok(route)
    }
}
