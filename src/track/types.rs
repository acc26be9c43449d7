//! Core types for HURDAT2 storm tracks.
//!
//! These types model the parsed form of NOAA's best-track dataset:
//! - `StormStatus`: the two-letter system-status code of a fix
//! - `TrackPoint`: one 6-hourly fix along a storm's path
//! - `TrackTable`: the full parsed dataset, in file-encounter order

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// System status of a storm at a given fix.
///
/// HURDAT2 uses a fixed set of two-letter codes. Codes outside that set
/// appear occasionally in older records and are preserved as
/// `Other` rather than rejected, since the parser is best-effort.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StormStatus {
    /// HU - hurricane intensity
    Hurricane,
    /// TS - tropical storm
    TropicalStorm,
    /// TD - tropical depression
    TropicalDepression,
    /// EX - extratropical cyclone
    Extratropical,
    /// SD - subtropical depression
    SubtropicalDepression,
    /// SS - subtropical storm
    SubtropicalStorm,
    /// LO - low pressure system
    Low,
    /// WV - tropical wave
    TropicalWave,
    /// DB - disturbance
    Disturbance,
    /// Any code outside the documented set, kept verbatim.
    Other(String),
}

impl StormStatus {
    /// Parses a trimmed HURDAT2 status code.
    pub fn from_code(code: &str) -> Self {
        match code {
            "HU" => StormStatus::Hurricane,
            "TS" => StormStatus::TropicalStorm,
            "TD" => StormStatus::TropicalDepression,
            "EX" => StormStatus::Extratropical,
            "SD" => StormStatus::SubtropicalDepression,
            "SS" => StormStatus::SubtropicalStorm,
            "LO" => StormStatus::Low,
            "WV" => StormStatus::TropicalWave,
            "DB" => StormStatus::Disturbance,
            other => StormStatus::Other(other.to_string()),
        }
    }

    /// Returns the two-letter HURDAT2 code for this status.
    pub fn as_code(&self) -> &str {
        match self {
            StormStatus::Hurricane => "HU",
            StormStatus::TropicalStorm => "TS",
            StormStatus::TropicalDepression => "TD",
            StormStatus::Extratropical => "EX",
            StormStatus::SubtropicalDepression => "SD",
            StormStatus::SubtropicalStorm => "SS",
            StormStatus::Low => "LO",
            StormStatus::TropicalWave => "WV",
            StormStatus::Disturbance => "DB",
            StormStatus::Other(code) => code,
        }
    }

    /// True for fixes at hurricane intensity.
    pub fn is_hurricane(&self) -> bool {
        matches!(self, StormStatus::Hurricane)
    }
}

impl fmt::Display for StormStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

// Statuses serialize as their bare code ("HU") rather than as an enum
// variant, so exported events match the source dataset's vocabulary.
impl Serialize for StormStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_code())
    }
}

impl<'de> Deserialize<'de> for StormStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(StormStatus::from_code(&code))
    }
}

/// One fix along a storm's path, at 6-hour synoptic resolution.
///
/// Created once per valid data line during parsing and immutable
/// afterwards. Points are stored in file-encounter order; consumers
/// needing chronological order per storm must sort by `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    /// Stable identifier for the storm's entire life (e.g., "AL092017").
    pub storm_id: String,
    /// Storm's common name, shared by all points of the storm.
    pub name: String,
    /// Fix time, combined from the record's date and time fields.
    pub timestamp: NaiveDateTime,
    /// Cache of the timestamp's year, used for filtering.
    pub year: i32,
    /// Latitude in signed decimal degrees, positive = North.
    pub latitude: f64,
    /// Longitude in signed decimal degrees, positive = East.
    pub longitude: f64,
    /// Maximum sustained wind in knots.
    pub wind: i32,
    /// System status at this fix.
    pub status: StormStatus,
    /// Record identifier; "L" marks an official NOAA landfall fix.
    pub landfall_indicator: String,
}

impl TrackPoint {
    /// True if this fix carries the official landfall indicator.
    pub fn has_landfall_indicator(&self) -> bool {
        self.landfall_indicator == "L"
    }
}

/// The parsed HURDAT2 dataset: every accepted fix, grouped by storm only
/// implicitly via `storm_id`. Built once per parse and never mutated by
/// the detection algorithms.
#[derive(Debug, Clone, Default)]
pub struct TrackTable {
    points: Vec<TrackPoint>,
}

impl TrackTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a point in file-encounter order.
    pub fn push(&mut self, point: TrackPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackPoint> {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_round_trip() {
        for code in ["HU", "TS", "TD", "EX", "SD", "SS", "LO", "WV", "DB"] {
            assert_eq!(StormStatus::from_code(code).as_code(), code);
        }
    }

    #[test]
    fn test_unknown_status_preserved() {
        let status = StormStatus::from_code("XX");
        assert_eq!(status, StormStatus::Other("XX".to_string()));
        assert_eq!(status.as_code(), "XX");
        assert!(!status.is_hurricane());
    }

    #[test]
    fn test_only_hu_is_hurricane() {
        assert!(StormStatus::Hurricane.is_hurricane());
        assert!(!StormStatus::TropicalStorm.is_hurricane());
        assert!(!StormStatus::Extratropical.is_hurricane());
    }

    #[test]
    fn test_status_serializes_as_code() {
        let json = serde_json::to_string(&StormStatus::Hurricane).unwrap();
        assert_eq!(json, "\"HU\"");

        let parsed: StormStatus = serde_json::from_str("\"TS\"").unwrap();
        assert_eq!(parsed, StormStatus::TropicalStorm);
    }
}
