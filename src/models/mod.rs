pub mod raw_row;
pub mod segment_field;
pub mod session_summary;
pub mod validated_row;
pub mod waypoint;

pub use raw_row::RawRow;
pub use segment_field::SegmentField;
pub use session_summary::SessionSummary;
pub use validated_row::ValidatedRow;
pub use waypoint::Waypoint;
