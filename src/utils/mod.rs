pub mod colors;
pub mod geo;
pub mod path;
pub mod table;
pub mod time;

pub use geo::haversine_m;
pub use time::parse_timestamp;
