use crate::errors::{AppError, AppResult};
use crate::models::SessionSummary;
use crate::models::session_summary::get_headers;
use std::io::Write;

/// Scrive i trip in CSV: header + una riga per sessione.
pub fn write_csv<W: Write>(out: W, sessions: &[SessionSummary]) -> AppResult<()> {
    let mut wtr = ::csv::Writer::from_writer(out);

    // header esplicito: presente anche quando non ci sono sessioni
    wtr.write_record(get_headers())?;

    for s in sessions {
        wtr.write_record(s.as_row())?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    Ok(())
}
