pub mod aggregator;
pub mod config;
pub mod convert;
pub mod filter;
pub mod inspect;
pub mod segmenter;
pub mod waypoints;
