//! Error types shared across the crate.
//!
//! Only structural failures are surfaced through `LandfallError`:
//! an unreadable source, a parse that produced nothing usable, or a
//! detection run over an empty table. Content-level anomalies (one bad
//! line, one degenerate coordinate) are logged and skipped where they
//! occur and never reach this type.

/// Errors that can occur while parsing tracks, loading a region
/// boundary, detecting landfalls, or writing a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LandfallError {
    /// The track-data source could not be opened or read.
    SourceUnavailable(String),
    /// Parsing completed but yielded zero usable records.
    NoValidRecords,
    /// A detection algorithm was invoked on an empty track table.
    EmptyTrackTable,
    /// The boundary shapefile could not be read.
    ShapefileRead(String),
    /// No record in the shapefile carries a `NAME` attribute.
    MissingNameField,
    /// The requested region was not found in the shapefile.
    RegionNotFound(String),
    /// A report was requested for an empty event list.
    NoEvents,
    /// The report file could not be written.
    ReportWrite(String),
}

impl std::fmt::Display for LandfallError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LandfallError::SourceUnavailable(msg) => {
                write!(f, "Track data source unavailable: {}", msg)
            }
            LandfallError::NoValidRecords => {
                write!(f, "No valid track records found; check the file format")
            }
            LandfallError::EmptyTrackTable => {
                write!(f, "Track table is empty; cannot detect landfalls")
            }
            LandfallError::ShapefileRead(msg) => write!(f, "Failed to read shapefile: {}", msg),
            LandfallError::MissingNameField => {
                write!(f, "Shapefile records carry no NAME attribute")
            }
            LandfallError::RegionNotFound(name) => {
                write!(f, "Region '{}' not found in shapefile", name)
            }
            LandfallError::NoEvents => write!(f, "No landfall events to report"),
            LandfallError::ReportWrite(msg) => write!(f, "Failed to write report: {}", msg),
        }
    }
}

impl std::error::Error for LandfallError {}
