//! In-memory schedule store.
//!
//! Holds two independent mappings: trains by id (each an ordered [`Route`])
//! and stations by name (each a [`StationTimetable`]). Writing to one never
//! updates the other.
//!
//! The store is plain data with `&self` reads and `&mut self` writes; the web
//! layer wraps it in a lock so each operation is atomic.

mod error;
mod loader;
mod search;

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::info;

use crate::domain::{Route, ScheduleEntry, StationTimetable, TrainId};

pub use error::StoreError;
pub use loader::{LoadError, LoadPolicy};
pub use search::{SearchMatch, find_segment, search_routes};

/// A train and the names of its stations in calling order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainSummary {
    pub train_id: TrainId,
    pub stations: Vec<String>,
}

/// Trains and station timetables, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ScheduleStore {
    trains: IndexMap<TrainId, Route>,
    stations: IndexMap<String, StationTimetable>,
}

impl ScheduleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from already-loaded mappings.
    pub fn from_parts(
        trains: IndexMap<TrainId, Route>,
        stations: IndexMap<String, StationTimetable>,
    ) -> Self {
        Self { trains, stations }
    }

    /// All station names.
    pub fn list_stations(&self) -> Vec<String> {
        self.stations.keys().cloned().collect()
    }

    /// The timetable of one station.
    pub fn get_station(&self, name: &str) -> Result<&StationTimetable, StoreError> {
        self.stations
            .get(name)
            .ok_or_else(|| StoreError::StationNotFound(name.to_string()))
    }

    /// Set `train_id`'s entry at station `name`, creating the station if needed.
    ///
    /// Overwrites any existing entry for the same train. Returns the stored entry.
    pub fn upsert_station_schedule(
        &mut self,
        name: &str,
        train_id: &str,
        arrival: &str,
        departure: &str,
        days: Vec<String>,
    ) -> &ScheduleEntry {
        let timetable = self.stations.entry(name.to_string()).or_default();
        let entry = ScheduleEntry::new(arrival, departure, days);
        timetable.insert(train_id.to_string(), entry);
        info!(station = name, train_id, "station schedule updated");
        &timetable[train_id]
    }

    /// Every train with its station names in calling order.
    pub fn list_trains(&self) -> Vec<TrainSummary> {
        self.trains
            .iter()
            .map(|(train_id, route)| TrainSummary {
                train_id: train_id.clone(),
                stations: route.station_names().map(str::to_string).collect(),
            })
            .collect()
    }

    /// The route of one train.
    pub fn get_train(&self, train_id: &str) -> Result<&Route, StoreError> {
        self.trains
            .get(train_id)
            .ok_or_else(|| StoreError::TrainNotFound(train_id.to_string()))
    }

    /// Register a new train.
    ///
    /// Fails with `InvalidArgument` when the id or the schedule is empty and
    /// with `Conflict` when the id is taken. The store is unchanged on failure.
    pub fn add_train(&mut self, train_id: &str, schedule: Route) -> Result<&Route, StoreError> {
        let id = TrainId::new(train_id).map_err(|_| StoreError::missing_train_fields())?;
        if schedule.is_empty() {
            return Err(StoreError::missing_train_fields());
        }

        match self.trains.entry(id) {
            Entry::Occupied(_) => Err(StoreError::Conflict(train_id.to_string())),
            Entry::Vacant(slot) => {
                info!(train_id, stops = schedule.len(), "train added");
                Ok(&*slot.insert(schedule))
            }
        }
    }

    /// Find trains that call at `from` and later at `to`.
    pub fn search(&self, from: &str, to: &str) -> Vec<SearchMatch> {
        search_routes(&self.trains, from, to)
    }

    pub fn train_count(&self) -> usize {
        self.trains.len()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days(names: &[&str]) -> Vec<String> {
        names.iter().map(|d| d.to_string()).collect()
    }

    fn route(stations: &[&str]) -> Route {
        stations
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let dep = format!("{:02}:00", 8 + i);
                let d = if i == 0 { days(&["Mon", "Fri"]) } else { vec![] };
                (*s, ScheduleEntry::new("", dep, d))
            })
            .collect()
    }

    #[test]
    fn unknown_station_not_found() {
        let store = ScheduleStore::new();
        assert_eq!(
            store.get_station("Nowhere"),
            Err(StoreError::StationNotFound("Nowhere".into()))
        );
    }

    #[test]
    fn unknown_train_not_found() {
        let store = ScheduleStore::new();
        assert_eq!(
            store.get_train("T0"),
            Err(StoreError::TrainNotFound("T0".into()))
        );
    }

    #[test]
    fn upsert_creates_station() {
        let mut store = ScheduleStore::new();
        store.upsert_station_schedule("York", "T1", "10:00", "10:05", days(&["Mon"]));

        assert_eq!(store.list_stations(), vec!["York"]);
        let timetable = store.get_station("York").unwrap();
        assert_eq!(
            timetable.get("T1"),
            Some(&ScheduleEntry::new("10:00", "10:05", days(&["Mon"])))
        );
    }

    #[test]
    fn upsert_overwrites_latest_wins() {
        let mut store = ScheduleStore::new();
        store.upsert_station_schedule("York", "T1", "10:00", "10:05", days(&["Mon"]));
        let stored =
            store.upsert_station_schedule("York", "T1", "11:00", "11:05", days(&["Sat", "Sun"]));
        assert_eq!(stored.arrival.as_deref(), Some("11:00"));

        let timetable = store.get_station("York").unwrap();
        assert_eq!(timetable.len(), 1);
        assert_eq!(
            timetable["T1"],
            ScheduleEntry::new("11:00", "11:05", days(&["Sat", "Sun"]))
        );
    }

    #[test]
    fn upsert_keeps_other_trains() {
        let mut store = ScheduleStore::new();
        store.upsert_station_schedule("York", "T1", "10:00", "10:05", vec![]);
        store.upsert_station_schedule("York", "T2", "12:00", "12:05", vec![]);

        let timetable = store.get_station("York").unwrap();
        let ids: Vec<&str> = timetable.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["T1", "T2"]);
    }

    #[test]
    fn upsert_does_not_touch_trains() {
        let mut store = ScheduleStore::new();
        store.upsert_station_schedule("York", "T1", "10:00", "10:05", vec![]);
        assert_eq!(store.train_count(), 0);
        assert!(store.get_train("T1").is_err());
    }

    #[test]
    fn add_then_get_train() {
        let mut store = ScheduleStore::new();
        let added = store.add_train("T9", route(&["Stn1", "Stn2"])).unwrap().clone();

        assert_eq!(store.get_train("T9").unwrap(), &added);
        assert_eq!(store.train_count(), 1);
        // Stations mapping is independent
        assert_eq!(store.station_count(), 0);
    }

    #[test]
    fn add_duplicate_conflicts_and_leaves_store_unchanged() {
        let mut store = ScheduleStore::new();
        store.add_train("T9", route(&["Stn1", "Stn2"])).unwrap();
        let before = store.get_train("T9").unwrap().clone();

        let err = store.add_train("T9", route(&["Other"])).unwrap_err();
        assert_eq!(err, StoreError::Conflict("T9".into()));
        assert_eq!(store.get_train("T9").unwrap(), &before);
        assert_eq!(store.train_count(), 1);
    }

    #[test]
    fn add_requires_id_and_schedule() {
        let mut store = ScheduleStore::new();

        let err = store.add_train("", route(&["Stn1"])).unwrap_err();
        assert!(matches!(err, StoreError::InvalidArgument(_)));

        let err = store.add_train("T9", Route::new()).unwrap_err();
        assert!(matches!(err, StoreError::InvalidArgument(_)));

        assert_eq!(store.train_count(), 0);
    }

    #[test]
    fn list_trains_preserves_route_and_insertion_order() {
        let mut store = ScheduleStore::new();
        store.add_train("T2", route(&["C", "A"])).unwrap();
        store.add_train("T9", route(&["Stn1", "Stn2"])).unwrap();

        assert_eq!(
            store.list_trains(),
            vec![
                TrainSummary {
                    train_id: TrainId::new("T2").unwrap(),
                    stations: vec!["C".into(), "A".into()],
                },
                TrainSummary {
                    train_id: TrainId::new("T9").unwrap(),
                    stations: vec!["Stn1".into(), "Stn2".into()],
                },
            ]
        );
    }

    #[test]
    fn search_over_store() {
        let mut store = ScheduleStore::new();
        store.add_train("T1", route(&["A", "X", "B", "Y"])).unwrap();
        store.add_train("T2", route(&["B", "X", "A"])).unwrap();

        let results = store.search("A", "B");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].train_id.as_str(), "T1");
        let segment: Vec<&str> = results[0].segment.station_names().collect();
        assert_eq!(segment, vec!["A", "X", "B"]);
        assert_eq!(results[0].days, days(&["Mon", "Fri"]));

        assert!(store.search("A", "A").is_empty());
        assert!(store.search("A", "Nowhere").is_empty());
    }
}
