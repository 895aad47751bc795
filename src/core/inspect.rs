use crate::config::Config;
use crate::core::aggregator::{SpanStats, span_stats};
use crate::core::convert::ConvertLogic;
use crate::datalog;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{GREEN, RED, YELLOW, colorize_count};
use crate::utils::table::Table;
use ansi_term::Colour;
use std::path::Path;

/// Session breakdown of a data log, without waypoint resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct LogReport {
    pub rows_read: usize,
    pub boundaries: Vec<usize>,
    pub spans: Vec<SpanStats>,
}

impl LogReport {
    pub fn trips(&self) -> usize {
        self.spans.iter().filter(|s| s.has_trip()).count()
    }
}

pub struct InspectLogic;

impl InspectLogic {
    pub fn run(log: &Path, cfg: &Config) -> AppResult<LogReport> {
        if !log.exists() {
            return Err(AppError::InputMissing(log.to_path_buf()));
        }

        let rows = datalog::read_log(log, cfg.segment_field)?;
        let boundaries = ConvertLogic::boundaries(&rows, cfg)?;
        if boundaries.is_empty() {
            return Err(AppError::EmptyInput);
        }

        let verdicts = ConvertLogic::filter_rows(&rows, cfg)?;
        Ok(LogReport {
            rows_read: rows.len(),
            spans: span_stats(&verdicts, &boundaries),
            boundaries,
        })
    }

    pub fn render(report: &LogReport, cfg: &Config) -> String {
        let mut table = Table::with_headers(&[
            "#", "rows", "range", "valid", "rejected", "first", "last", "reasons",
        ]);

        for (i, s) in report.spans.iter().enumerate() {
            let reasons = s
                .rejected
                .iter()
                .map(|(k, n)| format!("{k}: {n}"))
                .collect::<Vec<_>>()
                .join(", ");

            table.add_row(vec![
                (i + 1).to_string(),
                s.raw_rows().to_string(),
                format!("{}..{}", s.start, s.end),
                colorize_count(s.accepted, GREEN),
                colorize_count(s.rejected_total(), if s.has_trip() { YELLOW } else { RED }),
                s.first_date_time.clone().unwrap_or_else(|| "--".into()),
                s.last_date_time.clone().unwrap_or_else(|| "--".into()),
                reasons,
            ]);
        }

        let mut out = format!(
            "{} {} rows, segmented on '{}', {} session(s), {} trip(s)\n\n",
            Colour::Blue.bold().paint("Data log:"),
            report.rows_read,
            cfg.segment_field,
            report.spans.len(),
            report.trips()
        );
        out.push_str(&table.render());
        out
    }
}
