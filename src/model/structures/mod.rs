pub mod entity_key;
pub mod game_mode;
pub mod leaderboard_row;
pub mod placement_estimate;
pub mod rating_snapshot;
pub mod rating_stats;
pub mod region;
pub mod window;
pub mod window_kind;
