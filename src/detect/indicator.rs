//! Official-indicator landfall detection.

use crate::detect::{sort_events, storm_groups, LandfallEvent};
use crate::error::LandfallError;
use crate::geo::RegionPolygon;
use crate::track::TrackTable;
use log::debug;

/// Detects landfalls from the dataset's official "L" record indicator.
///
/// A stateless per-point predicate: a fix fires iff it carries the
/// indicator, lies inside the region boundary, and is at hurricane
/// intensity. The scan starts at each storm's second point, matching
/// the path algorithm's range - a genesis fix never fires.
///
/// Fails with `EmptyTrackTable` on an empty table. Returns events
/// sorted ascending by timestamp across all storms.
pub fn detect_by_indicator(
    table: &TrackTable,
    region: &RegionPolygon,
) -> Result<Vec<LandfallEvent>, LandfallError> {
    if table.is_empty() {
        return Err(LandfallError::EmptyTrackTable);
    }

    let mut events = Vec::new();

    for (storm_id, points) in storm_groups(table) {
        for point in points.iter().skip(1) {
            let inside = region.contains(point.latitude, point.longitude);

            if point.has_landfall_indicator() && inside && point.status.is_hurricane() {
                debug!("{} flagged landfall at {}", storm_id, point.timestamp);
                events.push(LandfallEvent::from_point(point));
            }
        }
    }

    sort_events(&mut events);
    Ok(events)
}
