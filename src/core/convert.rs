use crate::config::Config;
use crate::core::aggregator::SessionAggregator;
use crate::core::filter::RowVerdict;
use crate::core::segmenter::segment;
use crate::core::waypoints::{WaypointResolver, WaypointTable};
use crate::datalog;
use crate::errors::{AppError, AppResult};
use crate::models::{RawRow, SessionSummary};
use std::path::Path;
use tracing::{debug, info};

/// Result of one conversion run.
#[derive(Debug, Clone, PartialEq)]
pub struct TripLog {
    pub sessions: Vec<SessionSummary>,
    pub boundaries: Vec<usize>,
    pub rows_read: usize,
    pub rows_accepted: usize,
}

/// High-level business logic for the `convert` command.
pub struct ConvertLogic;

impl ConvertLogic {
    /// Filter every row, keeping one verdict per raw row index.
    pub fn filter_rows(rows: &[RawRow], cfg: &Config) -> AppResult<Vec<RowVerdict>> {
        let filter = cfg.row_filter();
        rows.iter()
            .enumerate()
            .map(|(i, row)| {
                let verdict = filter.filter(row)?;
                if let RowVerdict::Rejected(reason) = &verdict {
                    debug!(row = i, %reason, "row rejected");
                }
                Ok(verdict)
            })
            .collect()
    }

    /// Boundaries over the configured segmentation column.
    pub fn boundaries(rows: &[RawRow], cfg: &Config) -> AppResult<Vec<usize>> {
        let field = cfg.segment_field;
        let timestamps: Vec<Option<&str>> = rows.iter().map(|r| r.segment_key(field)).collect();
        segment(field.column(), &timestamps)
    }

    /// In-memory pipeline: rows → verdicts + boundaries → trip records.
    ///
    /// An input with no rows is `AppError::EmptyInput`.
    pub fn build(rows: &[RawRow], table: &WaypointTable, cfg: &Config) -> AppResult<TripLog> {
        let boundaries = Self::boundaries(rows, cfg)?;
        if boundaries.is_empty() {
            return Err(AppError::EmptyInput);
        }

        let verdicts = Self::filter_rows(rows, cfg)?;
        let resolver = WaypointResolver::new(table, cfg.waypoint_tolerance_m);
        let sessions = SessionAggregator::new(resolver).aggregate(&verdicts, &boundaries)?;

        Ok(TripLog {
            rows_read: rows.len(),
            rows_accepted: verdicts.iter().filter(|v| v.is_accepted()).count(),
            sessions,
            boundaries,
        })
    }

    /// Read both input tables and run the pipeline.
    pub fn run(log: &Path, waypoints: &Path, cfg: &Config) -> AppResult<TripLog> {
        for p in [log, waypoints] {
            if !p.exists() {
                return Err(AppError::InputMissing(p.to_path_buf()));
            }
        }

        info!(segment_field = %cfg.segment_field, "segmenting sessions");

        let rows = datalog::read_log(log, cfg.segment_field)?;
        let table = WaypointTable::from_path(waypoints)?;
        let trip_log = Self::build(&rows, &table, cfg)?;

        info!(
            rows = trip_log.rows_read,
            accepted = trip_log.rows_accepted,
            sessions = trip_log.sessions.len(),
            "conversion done"
        );
        Ok(trip_log)
    }
}
