use crate::errors::{AppError, AppResult};
use crate::models::{RawRow, SegmentField};
use csv::StringRecord;

/// Positions of the columns we read, resolved once from the header.
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    fix_quality: usize,
    satellites: usize,
    session_time: Option<usize>,
    date_time: usize,
    latitude: usize,
    longitude: usize,
    altitude_ft: usize,
    hobbs: usize,
}

impl ColumnIndex {
    /// Map header names to positions.
    ///
    /// `Session Time` is only required when it drives segmentation.
    pub fn resolve(headers: &StringRecord, segment_field: SegmentField) -> AppResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| find(name).ok_or_else(|| AppError::MissingColumn(name.into()));

        let session_time = match segment_field {
            SegmentField::SessionTime => Some(require("Session Time")?),
            SegmentField::GpsDateTime => find("Session Time"),
        };

        Ok(Self {
            fix_quality: require("GPS Fix Quality")?,
            satellites: require("Number of Satellites")?,
            session_time,
            date_time: require("GPS Date & Time")?,
            latitude: require("Latitude (deg)")?,
            longitude: require("Longitude (deg)")?,
            altitude_ft: require("GPS Altitude (feet)")?,
            hobbs: require("Hobbs Time")?,
        })
    }

    pub fn row(&self, record: &StringRecord) -> RawRow {
        let cell = |idx: usize| RawRow::cell(record.get(idx));

        RawRow {
            fix_quality: cell(self.fix_quality),
            satellites: cell(self.satellites),
            session_time: self.session_time.and_then(cell),
            date_time: cell(self.date_time),
            latitude: cell(self.latitude),
            longitude: cell(self.longitude),
            altitude_ft: cell(self.altitude_ft),
            hobbs: cell(self.hobbs),
        }
    }
}
