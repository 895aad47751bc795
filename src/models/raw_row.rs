use crate::models::segment_field::SegmentField;

/// One row of the GPS user data log, as read from the CSV.
///
/// Every cell is kept as the raw string found in the file; blank or
/// whitespace-only cells are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    pub fix_quality: Option<String>,  // ⇔ "GPS Fix Quality"
    pub satellites: Option<String>,   // ⇔ "Number of Satellites"
    pub session_time: Option<String>, // ⇔ "Session Time"
    pub date_time: Option<String>,    // ⇔ "GPS Date & Time"
    pub latitude: Option<String>,     // ⇔ "Latitude (deg)"
    pub longitude: Option<String>,    // ⇔ "Longitude (deg)"
    pub altitude_ft: Option<String>,  // ⇔ "GPS Altitude (feet)"
    pub hobbs: Option<String>,        // ⇔ "Hobbs Time"
}

impl RawRow {
    /// Normalizza una cella: stringa vuota o solo spazi → None.
    pub fn cell(value: Option<&str>) -> Option<String> {
        match value {
            Some(v) if !v.trim().is_empty() => Some(v.to_string()),
            _ => None,
        }
    }

    /// Timestamp used by the session segmenter.
    pub fn segment_key(&self, field: SegmentField) -> Option<&str> {
        match field {
            SegmentField::SessionTime => self.session_time.as_deref(),
            SegmentField::GpsDateTime => self.date_time.as_deref(),
        }
    }
}
