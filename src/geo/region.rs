//! Region boundary loading from a shapefile.
//!
//! Reads a boundary shapefile (e.g., the Census Bureau's state
//! boundaries), finds the record whose `NAME` attribute matches the
//! requested region, and converts its polygon into a `RegionPolygon`.

use crate::error::LandfallError;
use crate::geo::containment::RegionPolygon;
use geo_types::{Coord, LineString, MultiPolygon, Polygon};
use shapefile::dbase::FieldValue;
use shapefile::PolygonRing;
use std::path::Path;

/// Loads the boundary polygon for a named region from a shapefile.
///
/// The shapefile's `.dbf` companion must sit next to the `.shp` file;
/// records are matched on their `NAME` character field.
pub fn load_region(
    shp_path: impl AsRef<Path>,
    region_name: &str,
) -> Result<RegionPolygon, LandfallError> {
    let mut reader = shapefile::Reader::from_path(shp_path.as_ref())
        .map_err(|e| LandfallError::ShapefileRead(e.to_string()))?;

    let mut saw_name_field = false;

    for result in reader.iter_shapes_and_records() {
        let (shape, record) = result.map_err(|e| LandfallError::ShapefileRead(e.to_string()))?;

        let name = match record.get("NAME") {
            Some(FieldValue::Character(Some(s))) => {
                saw_name_field = true;
                s.trim().to_string()
            }
            Some(FieldValue::Character(None)) => {
                saw_name_field = true;
                continue;
            }
            _ => continue,
        };

        if name != region_name {
            continue;
        }

        if let shapefile::Shape::Polygon(polygon) = shape {
            if let Some(region) = convert_polygon(&polygon) {
                return Ok(region);
            }
        }
    }

    if saw_name_field {
        Err(LandfallError::RegionNotFound(region_name.to_string()))
    } else {
        Err(LandfallError::MissingNameField)
    }
}

/// Converts a shapefile polygon into a region boundary, separating
/// outer rings from holes.
fn convert_polygon(polygon: &shapefile::Polygon) -> Option<RegionPolygon> {
    let mut outer_rings: Vec<Vec<Coord<f64>>> = Vec::new();
    let mut holes: Vec<Vec<Coord<f64>>> = Vec::new();

    for ring in polygon.rings() {
        let coords: Vec<Coord<f64>> = ring
            .points()
            .iter()
            .map(|p| Coord { x: p.x, y: p.y })
            .collect();

        match ring {
            PolygonRing::Outer(_) => outer_rings.push(coords),
            PolygonRing::Inner(_) => holes.push(coords),
        }
    }

    rings_to_region(outer_rings, holes)
}

/// Builds a `RegionPolygon` from separated outer rings and holes.
///
/// A single outer ring keeps its holes. Multiple outer rings become a
/// multi-polygon without hole re-association; state boundary shapefiles
/// do not carry holes across disconnected parts in practice.
fn rings_to_region(
    mut outer_rings: Vec<Vec<Coord<f64>>>,
    holes: Vec<Vec<Coord<f64>>>,
) -> Option<RegionPolygon> {
    if outer_rings.is_empty() {
        return None;
    }

    if outer_rings.len() == 1 {
        let exterior = LineString::from(outer_rings.remove(0));
        let interiors: Vec<LineString<f64>> = holes.into_iter().map(LineString::from).collect();
        return Some(RegionPolygon::from_polygon(Polygon::new(exterior, interiors)));
    }

    let polygons: Vec<Polygon<f64>> = outer_rings
        .into_iter()
        .map(|ring| Polygon::new(LineString::from(ring), Vec::new()))
        .collect();
    Some(RegionPolygon::new(MultiPolygon::new(polygons)))
}
