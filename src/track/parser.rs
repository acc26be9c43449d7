//! HURDAT2 best-track parser.
//!
//! The source file interleaves storm header lines and track-fix lines
//! with no marker other than field count: a line with exactly 4
//! comma-separated fields is a header carrying the storm id and name;
//! anything else is a data line parsed positionally. Parsing is
//! best-effort per line; only a fully-empty result is a hard failure.

use crate::error::LandfallError;
use crate::track::types::{StormStatus, TrackPoint, TrackTable};
use chrono::NaiveDateTime;
use log::warn;
use std::path::Path;

/// Field count that distinguishes a storm header from a data line.
const HEADER_FIELD_COUNT: usize = 4;

/// Records before this year are excluded; track quality in the early
/// dataset is too poor for landfall analysis.
const MIN_YEAR: i32 = 1900;

/// Reads and parses a HURDAT2 file from disk.
///
/// Fails with `SourceUnavailable` if the file cannot be read, and with
/// `NoValidRecords` if no line in the file parses into a track point.
pub fn parse_file(path: impl AsRef<Path>) -> Result<TrackTable, LandfallError> {
    let contents = std::fs::read_to_string(path.as_ref())
        .map_err(|e| LandfallError::SourceUnavailable(format!("{}: {}", path.as_ref().display(), e)))?;
    parse_lines(contents.lines())
}

/// Parses raw HURDAT2 lines into a track table.
///
/// Lines are consumed in order; header lines update the current storm
/// context and data lines append one `TrackPoint` each. Malformed lines
/// are logged and skipped. Output preserves file-encounter order - the
/// detection algorithms sort per storm themselves.
pub fn parse_lines<'a, I>(lines: I) -> Result<TrackTable, LandfallError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut table = TrackTable::new();
    let mut current_storm: Option<(String, String)> = None;

    for line in lines {
        let trimmed = line.trim();
        let parts: Vec<&str> = trimmed.split(',').collect();

        // Header line: storm id, name, fix count, trailing field.
        if parts.len() == HEADER_FIELD_COUNT {
            current_storm = Some((parts[0].trim().to_string(), parts[1].trim().to_string()));
            continue;
        }

        match parse_data_line(&parts, current_storm.as_ref()) {
            Ok(Some(point)) => table.push(point),
            Ok(None) => {} // pre-1900 record, excluded silently
            Err(_) => warn!("Skipping malformed line: {}", trimmed),
        }
    }

    if table.is_empty() {
        return Err(LandfallError::NoValidRecords);
    }

    Ok(table)
}

/// Parses one data line into a track point.
///
/// Returns `Ok(None)` for records excluded by the year cutoff and
/// `Err(())` for anything the caller should log and skip.
fn parse_data_line(
    parts: &[&str],
    current_storm: Option<&(String, String)>,
) -> Result<Option<TrackPoint>, ()> {
    let (storm_id, name) = current_storm.ok_or(())?;

    let date = parts.first().ok_or(())?.trim();
    let time = parts.get(1).ok_or(())?.trim();

    let year: i32 = date.get(..4).ok_or(())?.parse().map_err(|_| ())?;
    if year < MIN_YEAR {
        return Ok(None);
    }

    let landfall_indicator = parts.get(2).ok_or(())?.trim().to_string();
    let status = StormStatus::from_code(parts.get(3).ok_or(())?.trim());
    // Hemisphere signs are deliberately lenient, mirroring the upstream
    // dataset policy: any letter other than 'N' reads as South, and any
    // letter other than 'W' reads as East.
    let (lat_magnitude, lat_hemisphere) = split_hemisphere(parts.get(4).ok_or(())?)?;
    let latitude = if lat_hemisphere == 'N' {
        lat_magnitude
    } else {
        -lat_magnitude
    };

    let (lon_magnitude, lon_hemisphere) = split_hemisphere(parts.get(5).ok_or(())?)?;
    let longitude = if lon_hemisphere == 'W' {
        -lon_magnitude
    } else {
        lon_magnitude
    };
    let wind: i32 = parts.get(6).ok_or(())?.trim().parse().map_err(|_| ())?;

    let timestamp = NaiveDateTime::parse_from_str(&format!("{}{}", date, time), "%Y%m%d%H%M")
        .map_err(|_| ())?;

    Ok(Some(TrackPoint {
        storm_id: storm_id.clone(),
        name: name.clone(),
        timestamp,
        year,
        latitude,
        longitude,
        wind,
        status,
        landfall_indicator,
    }))
}

/// Splits a coordinate token of the form `<number><hemisphere letter>`,
/// e.g. "28.0N" or " 80.5W", into its magnitude and trailing letter.
fn split_hemisphere(token: &str) -> Result<(f64, char), ()> {
    let token = token.trim();
    let mut chars = token.chars();
    let hemisphere = chars.next_back().ok_or(())?;
    let magnitude: f64 = chars.as_str().parse().map_err(|_| ())?;
    Ok((magnitude, hemisphere))
}
