//! CSV export of detected landfall events.
//!
//! The report format matches the detection output column-for-column:
//! one row per event, ordered as the detector returned them.

use crate::detect::LandfallEvent;
use crate::error::LandfallError;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const CSV_HEADER: &str = "storm_id,name,datetime,lat,lon,wind,status,landfall_indicator";

/// Report file name for a region label, e.g.
/// `florida_hurricane_landfall_report.csv`.
pub fn report_file_name(region_label: &str) -> String {
    format!("{}_hurricane_landfall_report.csv", region_label.to_lowercase())
}

/// Writes the events to `<out_dir>/<region>_hurricane_landfall_report.csv`
/// and returns the written path.
///
/// An empty event list is an error; an all-water analysis run should be
/// reported by the caller, not as a headers-only file.
pub fn write_csv(
    events: &[LandfallEvent],
    region_label: &str,
    out_dir: &Path,
) -> Result<PathBuf, LandfallError> {
    if events.is_empty() {
        return Err(LandfallError::NoEvents);
    }

    let path = out_dir.join(report_file_name(region_label));
    let file = File::create(&path).map_err(|e| LandfallError::ReportWrite(e.to_string()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", CSV_HEADER).map_err(|e| LandfallError::ReportWrite(e.to_string()))?;
    for event in events {
        writeln!(writer, "{}", csv_line(event))
            .map_err(|e| LandfallError::ReportWrite(e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| LandfallError::ReportWrite(e.to_string()))?;

    info!("Report saved to {}", path.display());
    Ok(path)
}

fn csv_line(event: &LandfallEvent) -> String {
    format!(
        "{},{},{},{},{},{},{},{}",
        event.storm_id,
        event.name,
        event.timestamp.format("%Y-%m-%d %H:%M:%S"),
        event.latitude,
        event.longitude,
        event.wind,
        event.status,
        event.landfall_indicator
    )
}
