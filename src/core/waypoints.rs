//! Waypoint table and coordinate → name resolution.

use crate::core::filter::parse_real;
use crate::errors::AppResult;
use crate::models::Waypoint;
use crate::utils::geo::haversine_m;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Distance (meters) under which a position counts as "at" a waypoint.
pub const DEFAULT_TOLERANCE_M: f64 = 1000.0;

/// Read-only set of user waypoints, kept in file order.
#[derive(Debug, Clone, Default)]
pub struct WaypointTable {
    waypoints: Vec<Waypoint>,
}

impl WaypointTable {
    pub fn new(waypoints: Vec<Waypoint>) -> Self {
        Self { waypoints }
    }

    /// Load a `Latitude, Longitude, Short Name` CSV file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;
        Self::from_csv(rdr)
    }

    pub fn from_reader<R: Read>(reader: R) -> AppResult<Self> {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        Self::from_csv(rdr)
    }

    fn from_csv<R: Read>(mut rdr: csv::Reader<R>) -> AppResult<Self> {
        let mut waypoints: Vec<Waypoint> = Vec::new();
        for wp in rdr.deserialize() {
            waypoints.push(wp?);
        }
        debug!(count = waypoints.len(), "waypoint table loaded");
        Ok(Self { waypoints })
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.iter()
    }
}

/// Resolves coordinates against a [`WaypointTable`].
///
/// The table is scanned in file order and the *first* waypoint closer than
/// the tolerance wins, even if a later one is nearer.
#[derive(Debug, Clone, Copy)]
pub struct WaypointResolver<'a> {
    table: &'a WaypointTable,
    tolerance_m: f64,
}

impl<'a> WaypointResolver<'a> {
    pub fn new(table: &'a WaypointTable, tolerance_m: f64) -> Self {
        Self { table, tolerance_m }
    }

    /// First waypoint strictly within tolerance of `position`, if any.
    pub fn find(&self, position: (f64, f64)) -> Option<&'a Waypoint> {
        self.table
            .iter()
            .find(|wp| haversine_m(wp.position(), position) < self.tolerance_m)
    }

    /// Label for a log position: the waypoint short name, or `"{lat}/{lon}"`
    /// built from the untouched log strings.
    pub fn resolve(&self, lat: &str, lon: &str) -> AppResult<String> {
        let position = (
            parse_real("Latitude (deg)", lat)?,
            parse_real("Longitude (deg)", lon)?,
        );

        match self.find(position) {
            Some(wp) => {
                debug!(lat, lon, waypoint = %wp.name, "waypoint matched");
                Ok(wp.name.clone())
            }
            None => Ok(format!("{lat}/{lon}")),
        }
    }
}
