/// Time-to-live of cached store reads
pub const DEFAULT_CACHE_TTL_SECS: u64 = 5 * 60;
/// Rows fetched per region and day for leaderboard views
pub const DEFAULT_LEADERBOARD_SIZE: u32 = 200;
/// Rows per keyset page when reading rating history
pub const HISTORY_PAGE_SIZE: i64 = 1000;
/// Lower bound, in unix seconds, for "everything before" history reads
pub const HISTORY_EPOCH_SECS: i64 = 0;
/// First lookback span when searching for the start of the rating run before a window.
/// Doubled until a different rating or the epoch is reached.
pub const BOUNDARY_LOOKBACK_DAYS: i64 = 30;
