//! Row filter: decides whether a single log row is usable for a trip.

use crate::errors::{AppError, AppResult};
use crate::models::validated_row::feet_to_meters;
use crate::models::{RawRow, ValidatedRow};
use std::fmt;

pub const DEFAULT_MIN_FIX_QUALITY: i64 = 1;
pub const DEFAULT_MIN_SATELLITES: i64 = 4;

/// Why a row was left out of its session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RejectReason {
    /// Fix quality, satellite count or GPS date & time is blank.
    MissingQuality,
    LowFixQuality(i64),
    TooFewSatellites(i64),
    /// A position / Hobbs / date field is blank (column name).
    MissingField(&'static str),
}

impl RejectReason {
    /// Short label without the offending value, used to group counts.
    pub fn kind(&self) -> &'static str {
        match self {
            RejectReason::MissingQuality => "missing quality",
            RejectReason::LowFixQuality(_) => "low fix quality",
            RejectReason::TooFewSatellites(_) => "too few satellites",
            RejectReason::MissingField(_) => "missing field",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::MissingQuality => {
                write!(f, "fix quality, satellite count or date/time missing")
            }
            RejectReason::LowFixQuality(q) => write!(f, "fix quality {q} too low"),
            RejectReason::TooFewSatellites(n) => write!(f, "only {n} satellites"),
            RejectReason::MissingField(name) => write!(f, "'{name}' missing"),
        }
    }
}

/// Outcome of filtering one row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowVerdict {
    Accepted(ValidatedRow),
    Rejected(RejectReason),
}

impl RowVerdict {
    /// The validated row, or `None` for a rejected one.
    pub fn accepted(&self) -> Option<&ValidatedRow> {
        match self {
            RowVerdict::Accepted(row) => Some(row),
            RowVerdict::Rejected(_) => None,
        }
    }

    /// True when the row will take part in its session summary.
    pub fn is_accepted(&self) -> bool {
        matches!(self, RowVerdict::Accepted(_))
    }
}

/// Fix-quality gate applied to every row.
#[derive(Debug, Clone, Copy)]
pub struct RowFilter {
    min_fix_quality: i64,
    min_satellites: i64,
}

impl Default for RowFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_FIX_QUALITY, DEFAULT_MIN_SATELLITES)
    }
}

impl RowFilter {
    pub fn new(min_fix_quality: i64, min_satellites: i64) -> Self {
        Self {
            min_fix_quality,
            min_satellites,
        }
    }

    /// Validate one row.
    ///
    /// Blank or low-quality rows are `Rejected`, which is routine and never an
    /// error. A value that is present but not a number is `MalformedNumeric`.
    pub fn filter(&self, row: &RawRow) -> AppResult<RowVerdict> {
        let (Some(fix), Some(sats), Some(_)) = (&row.fix_quality, &row.satellites, &row.date_time)
        else {
            return Ok(RowVerdict::Rejected(RejectReason::MissingQuality));
        };

        // fix quality prima: una riga già scartata non legge i satelliti
        let fix = parse_int("GPS Fix Quality", fix)?;
        if fix < self.min_fix_quality {
            return Ok(RowVerdict::Rejected(RejectReason::LowFixQuality(fix)));
        }

        let sats = parse_int("Number of Satellites", sats)?;
        if sats < self.min_satellites {
            return Ok(RowVerdict::Rejected(RejectReason::TooFewSatellites(sats)));
        }

        let (Some(latitude), Some(longitude), Some(altitude), Some(hobbs), Some(date_time)) = (
            &row.latitude,
            &row.longitude,
            &row.altitude_ft,
            &row.hobbs,
            &row.date_time,
        ) else {
            return Ok(RowVerdict::Rejected(RejectReason::MissingField(
                first_missing(row),
            )));
        };

        parse_real("Latitude (deg)", latitude)?;
        parse_real("Longitude (deg)", longitude)?;
        parse_real("Hobbs Time", hobbs)?;
        let altitude_m = feet_to_meters(parse_real("GPS Altitude (feet)", altitude)?);

        Ok(RowVerdict::Accepted(ValidatedRow {
            latitude: latitude.clone(),
            longitude: longitude.clone(),
            altitude_m,
            hobbs: hobbs.clone(),
            date_time: date_time.clone(),
        }))
    }
}

/// Nome della prima colonna vuota fra quelle di posizione.
fn first_missing(row: &RawRow) -> &'static str {
    [
        ("Latitude (deg)", &row.latitude),
        ("Longitude (deg)", &row.longitude),
        ("GPS Altitude (feet)", &row.altitude_ft),
        ("Hobbs Time", &row.hobbs),
        ("GPS Date & Time", &row.date_time),
    ]
    .into_iter()
    .find(|(_, v)| v.is_none())
    .map(|(name, _)| name)
    .unwrap_or("GPS Date & Time")
}

fn parse_int(field: &str, value: &str) -> AppResult<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::malformed(field, value))
}

pub(crate) fn parse_real(field: &str, value: &str) -> AppResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| AppError::malformed(field, value))
}
