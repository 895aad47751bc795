use serde::Deserialize;

/// A named reference location from the user waypoint table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Waypoint {
    #[serde(rename = "Short Name")]
    pub name: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

impl Waypoint {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}
