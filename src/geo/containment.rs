//! Point-in-region containment predicate.

use geo::Contains;
use geo_types::{MultiPolygon, Point, Polygon};

/// A region's land boundary, loaded once per session and shared
/// read-only across detection calls.
///
/// The boundary is held as a multi-polygon so that regions with
/// disconnected parts (barrier islands, keys) are covered by a single
/// containment test.
#[derive(Debug, Clone)]
pub struct RegionPolygon {
    boundary: MultiPolygon<f64>,
}

impl RegionPolygon {
    pub fn new(boundary: MultiPolygon<f64>) -> Self {
        Self { boundary }
    }

    pub fn from_polygon(polygon: Polygon<f64>) -> Self {
        Self {
            boundary: MultiPolygon::new(vec![polygon]),
        }
    }

    /// Tests whether a (lat, lon) point lies within the region boundary.
    ///
    /// The point is constructed as (x = lon, y = lat). Never panics:
    /// non-finite coordinates report false, since an unresolvable point
    /// cannot be a landfall.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        if !lat.is_finite() || !lon.is_finite() {
            return false;
        }
        self.boundary.contains(&Point::new(lon, lat))
    }
}
