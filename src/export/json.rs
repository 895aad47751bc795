use crate::errors::AppResult;
use crate::models::SessionSummary;
use std::io::Write;

/// Scrive i trip in JSON formattato (array di oggetti, valori stringa).
pub fn write_json<W: Write>(mut out: W, sessions: &[SessionSummary]) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, sessions)?;
    writeln!(out)?;
    Ok(())
}
