// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::{OutputFormat, notify_export_success, render_table, write_csv, write_json};
use crate::models::SessionSummary;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::Path;

/// Logica di alto livello per l'export del trip log.
pub struct ExportLogic;

impl ExportLogic {
    /// Serialize `sessions` in `format`.
    ///
    /// - `output = None` → stdout (the table is coloured only on a terminal)
    /// - `output = Some(path)` → file, asking before overwriting unless `force`
    pub fn export(
        sessions: &[SessionSummary],
        format: OutputFormat,
        output: Option<&Path>,
        force: bool,
    ) -> AppResult<()> {
        match output {
            None => {
                let stdout = io::stdout();
                let color = stdout.is_terminal();
                Self::write(stdout.lock(), sessions, format, color)
            }
            Some(path) => {
                ensure_writable(path, force)?;
                info(format!(
                    "Exporting to {}: {}",
                    format.as_str().to_uppercase(),
                    path.display()
                ));

                let file = BufWriter::new(File::create(path)?);
                Self::write(file, sessions, format, false)?;

                notify_export_success(&format.as_str().to_uppercase(), path);
                Ok(())
            }
        }
    }

    /// Write to any sink; `color` only affects the table format.
    pub fn write<W: Write>(
        mut out: W,
        sessions: &[SessionSummary],
        format: OutputFormat,
        color: bool,
    ) -> AppResult<()> {
        match format {
            OutputFormat::Csv => write_csv(&mut out, sessions)?,
            OutputFormat::Json => write_json(&mut out, sessions)?,
            OutputFormat::Table => out.write_all(render_table(sessions, color).as_bytes())?,
        }
        out.flush()?;
        Ok(())
    }

    /// Render to a string (tests, previews).
    pub fn render(sessions: &[SessionSummary], format: OutputFormat) -> AppResult<String> {
        let mut buf = Vec::new();
        Self::write(&mut buf, sessions, format, false)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
