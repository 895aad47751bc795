use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which log column drives session segmentation.
///
/// Only one column is ever authoritative for a run: `Session Time` restarts
/// when the unit starts a new leg, while `GPS Date & Time` is the wall clock
/// copied into the output. The two are not guaranteed to move together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SegmentField {
    #[default]
    SessionTime,
    GpsDateTime,
}

impl SegmentField {
    /// Column name in the data log header.
    pub fn column(&self) -> &'static str {
        match self {
            SegmentField::SessionTime => "Session Time",
            SegmentField::GpsDateTime => "GPS Date & Time",
        }
    }
}

impl fmt::Display for SegmentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}
