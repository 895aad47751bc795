//! Session segmentation.
//!
//! The log carries no session id: a new session is inferred only when the
//! timestamp goes backwards.

use crate::errors::AppResult;
use crate::utils::time::require_timestamp;
use tracing::debug;

/// Compute session boundaries from the ordered timestamp column.
///
/// Returns the raw row indices where a session starts, strictly increasing,
/// followed by a sentinel equal to `timestamps.len()` that closes the last
/// session. An empty input gives an empty list.
///
/// Blank timestamps are skipped: they neither open a session nor move the
/// reference time. Equal consecutive timestamps stay in the same session.
pub fn segment<S: AsRef<str>>(field: &str, timestamps: &[Option<S>]) -> AppResult<Vec<usize>> {
    let mut boundaries = Vec::new();

    if timestamps.is_empty() {
        return Ok(boundaries);
    }

    let mut last_time = f64::NEG_INFINITY;
    let mut seen_any = false;

    for (i, ts) in timestamps.iter().enumerate() {
        let Some(ts) = ts else {
            continue;
        };
        let ts: &str = ts.as_ref();
        if ts.trim().is_empty() {
            continue;
        }

        let t = require_timestamp(field, ts)?;

        // prima riga con timestamp, oppure il tempo è tornato indietro
        if !seen_any || t < last_time {
            debug!(row = i, time = t, previous = last_time, "session start");
            boundaries.push(i);
        }

        seen_any = true;
        last_time = t;
    }

    // sentinella: non è l'inizio di una nuova sessione
    boundaries.push(timestamps.len());
    Ok(boundaries)
}

/// Consecutive `[start, end)` spans described by a boundary list.
pub fn spans(boundaries: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    boundaries.windows(2).map(|w| (w[0], w[1]))
}
