//! Path-crossing landfall inference.

use crate::detect::{sort_events, storm_groups, LandfallEvent};
use crate::error::LandfallError;
use crate::geo::RegionPolygon;
use crate::track::TrackTable;
use log::debug;

/// Detects landfalls by watching each storm's path cross from outside
/// the region boundary to inside while at hurricane intensity.
///
/// Each storm is scanned chronologically with a single `was_inside`
/// flag, starting false; only transitions from the second point onward
/// can fire, since the first point has no "before" state. The flag is
/// updated on every point whether or not a landfall fired, so a storm
/// that exits and re-enters the region can land more than once.
///
/// Fails with `EmptyTrackTable` on an empty table. Returns events
/// sorted ascending by timestamp across all storms.
pub fn detect_by_path(
    table: &TrackTable,
    region: &RegionPolygon,
) -> Result<Vec<LandfallEvent>, LandfallError> {
    if table.is_empty() {
        return Err(LandfallError::EmptyTrackTable);
    }

    let mut events = Vec::new();

    for (storm_id, points) in storm_groups(table) {
        let mut was_inside = false;

        for point in points.iter().skip(1) {
            let is_inside = region.contains(point.latitude, point.longitude);

            if !was_inside && is_inside && point.status.is_hurricane() {
                debug!("{} crosses into region at {}", storm_id, point.timestamp);
                events.push(LandfallEvent::from_point(point));
            }

            was_inside = is_inside;
        }
    }

    sort_events(&mut events);
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::test_support::*;
    use crate::track::StormStatus;

    const IN: (f64, f64) = (0.5, 0.5);
    const OUT: (f64, f64) = (5.0, 5.0);

    #[test]
    fn test_single_transition_fires_once() {
        let table = table_of(vec![
            fix("AL01", 0, OUT.0, OUT.1, StormStatus::TropicalStorm, ""),
            fix("AL01", 6, IN.0, IN.1, StormStatus::Hurricane, ""),
            fix("AL01", 12, IN.0, IN.1, StormStatus::Hurricane, ""),
        ]);

        let events = detect_by_path(&table, &unit_region()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].timestamp, fix("AL01", 6, 0.0, 0.0, StormStatus::Low, "").timestamp);
    }

    #[test]
    fn test_genesis_point_never_fires() {
        // A storm born inside the region at hurricane intensity: the
        // first point has no "before" state and is skipped entirely.
        let table = table_of(vec![fix("AL01", 0, IN.0, IN.1, StormStatus::Hurricane, "")]);

        let events = detect_by_path(&table, &unit_region()).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_non_hurricane_entry_consumes_the_transition() {
        // The storm enters as a tropical storm; by the time it reaches
        // hurricane intensity it is already inside, so no transition
        // remains to fire on.
        let table = table_of(vec![
            fix("AL01", 0, OUT.0, OUT.1, StormStatus::TropicalStorm, ""),
            fix("AL01", 6, IN.0, IN.1, StormStatus::TropicalStorm, ""),
            fix("AL01", 12, IN.0, IN.1, StormStatus::Hurricane, ""),
        ]);

        let events = detect_by_path(&table, &unit_region()).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_exit_and_reentry_fires_again() {
        let table = table_of(vec![
            fix("AL01", 0, OUT.0, OUT.1, StormStatus::Hurricane, ""),
            fix("AL01", 6, IN.0, IN.1, StormStatus::Hurricane, ""),
            fix("AL01", 12, OUT.0, OUT.1, StormStatus::Hurricane, ""),
            fix("AL01", 18, IN.0, IN.1, StormStatus::Hurricane, ""),
        ]);

        let events = detect_by_path(&table, &unit_region()).unwrap();
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_unsorted_input_is_sorted_per_storm() {
        // Same track as the single-transition case, appended backwards.
        let table = table_of(vec![
            fix("AL01", 12, IN.0, IN.1, StormStatus::Hurricane, ""),
            fix("AL01", 6, IN.0, IN.1, StormStatus::Hurricane, ""),
            fix("AL01", 0, OUT.0, OUT.1, StormStatus::TropicalStorm, ""),
        ]);

        let events = detect_by_path(&table, &unit_region()).unwrap();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_events_across_storms_are_globally_ordered() {
        // AL01 lands at hour 18, ZZ99 at hour 6; storm grouping order
        // (alphabetical) must not leak into the result order.
        let table = table_of(vec![
            fix("AL01", 12, OUT.0, OUT.1, StormStatus::Hurricane, ""),
            fix("AL01", 18, IN.0, IN.1, StormStatus::Hurricane, ""),
            fix("ZZ99", 0, OUT.0, OUT.1, StormStatus::Hurricane, ""),
            fix("ZZ99", 6, IN.0, IN.1, StormStatus::Hurricane, ""),
        ]);

        let events = detect_by_path(&table, &unit_region()).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].storm_id, "ZZ99");
        assert_eq!(events[1].storm_id, "AL01");
        assert!(events[0].timestamp < events[1].timestamp);
    }

    #[test]
    fn test_degenerate_point_skipped_without_aborting_storm() {
        let table = table_of(vec![
            fix("AL01", 0, OUT.0, OUT.1, StormStatus::Hurricane, ""),
            fix("AL01", 6, f64::NAN, f64::NAN, StormStatus::Hurricane, ""),
            fix("AL01", 12, IN.0, IN.1, StormStatus::Hurricane, ""),
        ]);

        let events = detect_by_path(&table, &unit_region()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].storm_id, "AL01");
    }

    #[test]
    fn test_empty_table_is_an_error() {
        let err = detect_by_path(&table_of(vec![]), &unit_region()).unwrap_err();
        assert_eq!(err, LandfallError::EmptyTrackTable);
    }
}
