//! Point-to-point segment search.
//!
//! A train matches a query when it calls at the origin strictly before the
//! destination. The match carries the part of the route between the two,
//! inclusive, so callers can show every intermediate stop.

use crate::domain::{Route, TrainId};

/// A train that can carry a passenger from the origin to the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    /// The matching train
    pub train_id: TrainId,

    /// Stops from origin through destination, in calling order
    pub segment: Route,

    /// Days the train runs, taken from its origin stop
    pub days: Vec<String>,
}

/// Extract the forward segment of `route` from `from` to `to`.
///
/// Uses the first occurrence of each station. Returns `None` when either
/// station is missing or `to` does not come after `from`, which includes
/// `from == to`.
pub fn find_segment(route: &Route, from: &str, to: &str) -> Option<Route> {
    let from_idx = route.position(from)?;
    let to_idx = route.position(to)?;
    route.slice(from_idx, to_idx)
}

/// Search `trains` in iteration order for forward journeys from `from` to `to`.
///
/// Results keep the iteration order of `trains`; there is no ranking and no
/// limit.
pub fn search_routes<'a>(
    trains: impl IntoIterator<Item = (&'a TrainId, &'a Route)>,
    from: &str,
    to: &str,
) -> Vec<SearchMatch> {
    trains
        .into_iter()
        .filter_map(|(train_id, route)| {
            let segment = find_segment(route, from, to)?;
            let days = route
                .entry(from)
                .map(|e| e.days.clone())
                .unwrap_or_default();
            Some(SearchMatch {
                train_id: train_id.clone(),
                segment,
                days,
            })
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::ScheduleEntry;
    use proptest::prelude::*;

    /// Routes over a small alphabet of stations so queries often hit.
    fn arb_route() -> impl Strategy<Value = Route> {
        proptest::collection::vec("[A-F]", 0..8).prop_map(|stations| {
            stations
                .into_iter()
                .map(|s| (s, ScheduleEntry::default()))
                .collect()
        })
    }

    proptest! {
        /// A found segment starts at the origin, ends at the destination,
        /// and contains each of them exactly once.
        #[test]
        fn segment_endpoints(route in arb_route(), from in "[A-F]", to in "[A-F]") {
            if let Some(seg) = find_segment(&route, &from, &to) {
                let names: Vec<&str> = seg.station_names().collect();
                prop_assert!(names.len() >= 2);
                prop_assert_eq!(names[0], from.as_str());
                prop_assert_eq!(names[names.len() - 1], to.as_str());
                prop_assert_eq!(names.iter().filter(|n| **n == from).count(), 1);
                prop_assert_eq!(names.iter().filter(|n| **n == to).count(), 1);
            }
        }

        /// A segment is found in at most one direction.
        #[test]
        fn at_most_one_direction(route in arb_route(), a in "[A-F]", b in "[A-F]") {
            let forward = find_segment(&route, &a, &b).is_some();
            let backward = find_segment(&route, &b, &a).is_some();
            prop_assert!(!(forward && backward));
        }

        /// A segment is a contiguous slice of the route.
        #[test]
        fn segment_is_contiguous(route in arb_route(), from in "[A-F]", to in "[A-F]") {
            if let Some(seg) = find_segment(&route, &from, &to) {
                let start = route.position(&from).unwrap();
                prop_assert_eq!(seg.stops(), &route.stops()[start..start + seg.len()]);
            }
        }
    }
}
