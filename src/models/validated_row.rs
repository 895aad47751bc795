/// Feet → meters.
pub const METERS_PER_FOOT: f64 = 0.3048;

/// A row that passed the row filter.
///
/// Latitude, longitude and Hobbs time keep the exact text of the log so the
/// output (and the waypoint fallback label) reproduces them unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRow {
    pub latitude: String,
    pub longitude: String,
    pub altitude_m: f64,
    pub hobbs: String,
    pub date_time: String,
}

pub fn feet_to_meters(feet: f64) -> f64 {
    feet * METERS_PER_FOOT
}
