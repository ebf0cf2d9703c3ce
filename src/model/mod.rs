pub mod baseline;
pub mod calendar;
pub mod constants;
pub mod data_processing;
pub mod dedup;
pub mod global_rank;
pub mod placement;
pub mod stats;
pub mod structures;
pub mod window_selector;
