//! Landfall detection over parsed storm tracks.
//!
//! Two independent algorithms share a per-storm iteration skeleton:
//! group track points by storm id, sort each group chronologically,
//! then scan from the second point onward (a storm's genesis point is
//! never itself a landfall).
//!
//! - `path`: infers landfalls from outside-to-inside boundary crossings
//! - `indicator`: trusts the dataset's official "L" landfall marker

mod indicator;
mod path;

pub use indicator::detect_by_indicator;
pub use path::detect_by_path;

use crate::track::{StormStatus, TrackPoint, TrackTable};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One detected landfall, carrying the triggering fix's full field set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandfallEvent {
    pub storm_id: String,
    pub name: String,
    pub timestamp: NaiveDateTime,
    pub latitude: f64,
    pub longitude: f64,
    pub wind: i32,
    pub status: StormStatus,
    pub landfall_indicator: String,
}

impl LandfallEvent {
    fn from_point(point: &TrackPoint) -> Self {
        Self {
            storm_id: point.storm_id.clone(),
            name: point.name.clone(),
            timestamp: point.timestamp,
            latitude: point.latitude,
            longitude: point.longitude,
            wind: point.wind,
            status: point.status.clone(),
            landfall_indicator: point.landfall_indicator.clone(),
        }
    }
}

/// Groups the table by storm id and sorts each group by timestamp.
///
/// The grouping map is transient; it lives only for the duration of a
/// single detection pass.
fn storm_groups(table: &TrackTable) -> Vec<(&str, Vec<&TrackPoint>)> {
    let mut groups: BTreeMap<&str, Vec<&TrackPoint>> = BTreeMap::new();
    for point in table.iter() {
        groups.entry(point.storm_id.as_str()).or_default().push(point);
    }

    groups
        .into_iter()
        .map(|(storm_id, mut points)| {
            points.sort_by_key(|p| p.timestamp);
            (storm_id, points)
        })
        .collect()
}

/// Orders events ascending by timestamp; landfalls from different
/// storms may interleave chronologically.
fn sort_events(events: &mut [LandfallEvent]) {
    events.sort_by_key(|e| e.timestamp);
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_groups_sorted_by_timestamp_within_storm() {
        let table = table_of(vec![
            fix("AL02", 12, 0.5, 0.5, StormStatus::Hurricane, ""),
            fix("AL02", 0, 2.0, 2.0, StormStatus::TropicalStorm, ""),
            fix("AL01", 6, 0.5, 0.5, StormStatus::Hurricane, ""),
        ]);

        let groups = storm_groups(&table);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "AL01");
        assert_eq!(groups[1].0, "AL02");

        let al02 = &groups[1].1;
        assert!(al02[0].timestamp < al02[1].timestamp);
    }

    #[test]
    fn test_event_carries_point_fields() {
        let point = fix("AL09", 9, 24.5, -81.3, StormStatus::Hurricane, "L");
        let event = LandfallEvent::from_point(&point);

        assert_eq!(event.storm_id, point.storm_id);
        assert_eq!(event.name, point.name);
        assert_eq!(event.timestamp, point.timestamp);
        assert_eq!(event.latitude, point.latitude);
        assert_eq!(event.longitude, point.longitude);
        assert_eq!(event.wind, point.wind);
        assert_eq!(event.status, point.status);
        assert_eq!(event.landfall_indicator, point.landfall_indicator);
    }
}
