//! HURDAT2 hurricane track parsing and state landfall detection.
//!
//! This crate ingests NOAA's HURDAT2 best-track dataset, reconstructs
//! storm tracks, and determines when a storm crossed into a region's
//! land boundary at hurricane intensity.
//!
//! ## Pipeline
//!
//! 1. `track::parse_file` turns the raw text format into a [`TrackTable`]
//! 2. `geo::load_region` extracts a region boundary from a shapefile
//! 3. `detect::detect_by_path` / `detect::detect_by_indicator` produce
//!    chronologically ordered [`LandfallEvent`] lists
//! 4. `report::write_csv` exports the events
//!
//! Detection runs are pure over `(&TrackTable, &RegionPolygon)`; the
//! polygon is loaded once and shared read-only, so both algorithms can
//! run in any order (or in parallel) against the same inputs.

pub mod detect;
pub mod error;
pub mod geo;
pub mod report;
pub mod track;

pub use detect::{detect_by_indicator, detect_by_path, LandfallEvent};
pub use error::LandfallError;
pub use geo::{load_region, RegionPolygon};
pub use track::{parse_file, parse_lines, StormStatus, TrackPoint, TrackTable};
