//! HURDAT2 track parsing and track-point types.
//!
//! - `types`: `TrackPoint`, `TrackTable`, and the `StormStatus` codes
//! - `parser`: best-effort line parser for the HURDAT2 text format

pub mod parser;
pub mod types;

pub use parser::{parse_file, parse_lines};
pub use types::{StormStatus, TrackPoint, TrackTable};
