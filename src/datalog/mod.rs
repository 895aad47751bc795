//! Reading the GPS user data log.

mod columns;

pub use columns::ColumnIndex;

use crate::errors::AppResult;
use crate::models::{RawRow, SegmentField};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Load every row of a user data log, in file order.
pub fn read_log<P: AsRef<Path>>(path: P, segment_field: SegmentField) -> AppResult<Vec<RawRow>> {
    let rdr = reader_builder().from_path(path)?;
    read_rows(rdr, segment_field)
}

/// Same as [`read_log`], from any reader (stdin, in-memory buffers).
pub fn read_log_from<R: Read>(reader: R, segment_field: SegmentField) -> AppResult<Vec<RawRow>> {
    read_rows(reader_builder().from_reader(reader), segment_field)
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    // righe corte ammesse: le celle mancanti sono vuote
    builder.flexible(true);
    builder
}

fn read_rows<R: Read>(mut rdr: csv::Reader<R>, segment_field: SegmentField) -> AppResult<Vec<RawRow>> {
    let columns = ColumnIndex::resolve(rdr.headers()?, segment_field)?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        rows.push(columns.row(&record?));
    }

    debug!(rows = rows.len(), "data log loaded");
    Ok(rows)
}
