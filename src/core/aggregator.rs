//! Session aggregation: one summary per non-empty session span.

use crate::core::filter::{RejectReason, RowVerdict};
use crate::core::segmenter::spans;
use crate::core::waypoints::WaypointResolver;
use crate::errors::AppResult;
use crate::models::{SessionSummary, ValidatedRow};
use std::collections::BTreeMap;
use tracing::debug;

/// Builds [`SessionSummary`] records from filtered rows and boundaries.
pub struct SessionAggregator<'a> {
    resolver: WaypointResolver<'a>,
}

impl<'a> SessionAggregator<'a> {
    pub fn new(resolver: WaypointResolver<'a>) -> Self {
        Self { resolver }
    }

    /// `rows` holds one verdict per raw log row, index-aligned with the
    /// rows that produced `boundaries`.
    ///
    /// Each `[b_i, b_{i+1})` span yields a summary from its first and last
    /// accepted rows; spans where every row was rejected yield nothing.
    pub fn aggregate(
        &self,
        rows: &[RowVerdict],
        boundaries: &[usize],
    ) -> AppResult<Vec<SessionSummary>> {
        let mut sessions = Vec::new();

        for (start, end) in spans(boundaries) {
            let span = &rows[start.min(rows.len())..end.min(rows.len())];
            let mut accepted = span.iter().filter_map(RowVerdict::accepted);

            let Some(first) = accepted.next() else {
                debug!(start, end, "session without valid rows skipped");
                continue;
            };
            let last = accepted.last().unwrap_or(first);

            sessions.push(self.summarize(first, last)?);
        }

        Ok(sessions)
    }

    fn summarize(&self, first: &ValidatedRow, last: &ValidatedRow) -> AppResult<SessionSummary> {
        Ok(SessionSummary {
            start_date_time: first.date_time.clone(),
            end_date_time: last.date_time.clone(),
            end_of_trip_hobbs_time: last.hobbs.clone(),
            start_waypoint: self.resolver.resolve(&first.latitude, &first.longitude)?,
            end_waypoint: self.resolver.resolve(&last.latitude, &last.longitude)?,
        })
    }
}

/// Row counts for one session span, used by `inspect`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpanStats {
    pub start: usize,
    pub end: usize,
    pub accepted: usize,
    pub rejected: BTreeMap<&'static str, usize>,
    pub first_date_time: Option<String>,
    pub last_date_time: Option<String>,
}

impl SpanStats {
    pub fn raw_rows(&self) -> usize {
        self.end - self.start
    }

    pub fn rejected_total(&self) -> usize {
        self.rejected.values().sum()
    }

    /// True when the span would produce a trip record.
    pub fn has_trip(&self) -> bool {
        self.accepted > 0
    }
}

/// Per-span diagnostics without touching the waypoint table.
pub fn span_stats(rows: &[RowVerdict], boundaries: &[usize]) -> Vec<SpanStats> {
    spans(boundaries)
        .map(|(start, end)| {
            let mut stats = SpanStats {
                start,
                end,
                ..Default::default()
            };

            for verdict in &rows[start.min(rows.len())..end.min(rows.len())] {
                match verdict {
                    RowVerdict::Accepted(row) => {
                        stats.accepted += 1;
                        if stats.first_date_time.is_none() {
                            stats.first_date_time = Some(row.date_time.clone());
                        }
                        stats.last_date_time = Some(row.date_time.clone());
                    }
                    RowVerdict::Rejected(reason) => {
                        *stats.rejected.entry(RejectReason::kind(reason)).or_insert(0) += 1;
                    }
                }
            }

            stats
        })
        .collect()
}
