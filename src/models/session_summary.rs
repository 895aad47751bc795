use serde::{Deserialize, Serialize};

/// Struttura “piatta” di un singolo trip, pronta per l'export.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SessionSummary {
    pub start_date_time: String,
    pub end_date_time: String,
    pub end_of_trip_hobbs_time: String,
    pub start_waypoint: String,
    pub end_waypoint: String,
}

/// Header per CSV / JSON / table
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "start_date_time",
        "end_date_time",
        "end_of_trip_hobbs_time",
        "start_waypoint",
        "end_waypoint",
    ]
}

impl SessionSummary {
    pub fn as_row(&self) -> Vec<String> {
        vec![
            self.start_date_time.clone(),
            self.end_date_time.clone(),
            self.end_of_trip_hobbs_time.clone(),
            self.start_waypoint.clone(),
            self.end_waypoint.clone(),
        ]
    }
}
