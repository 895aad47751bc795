//! Time utilities: turn log timestamps into comparable numbers.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDateTime};

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S%.f",
];

/// Prova a interpretare un timestamp del log come numero reale.
///
/// Plain numbers (`Session Time`, seconds) are used as they are; date-times
/// (`GPS Date & Time`) become seconds since the Unix epoch, so both kinds
/// order the same way the log does.
pub fn parse_timestamp(s: &str) -> Option<f64> {
    let s = s.trim();

    if let Ok(v) = s.parse::<f64>() {
        return v.is_finite().then_some(v);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(epoch_seconds(&dt.naive_utc()));
    }

    for fmt in DATE_TIME_FORMATS.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(epoch_seconds(&dt));
        }
    }

    None
}

/// Come `parse_timestamp`, ma un valore illeggibile è un errore fatale.
pub fn require_timestamp(field: &str, s: &str) -> AppResult<f64> {
    parse_timestamp(s).ok_or_else(|| AppError::malformed(field, s))
}

fn epoch_seconds(dt: &NaiveDateTime) -> f64 {
    let utc = dt.and_utc();
    utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_nanos()) / 1e9
}
