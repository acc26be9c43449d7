//! Region geometry: the boundary polygon and its containment predicate.

mod containment;
mod region;

pub use containment::RegionPolygon;
pub use region::load_region;
