// Placement model constants
pub const PLACEMENTS: [f64; 13] = [1.0, 2.0, 3.0, 3.5, 4.0, 4.5, 5.0, 5.5, 6.0, 6.5, 7.0, 7.5, 8.0];
pub const LOBBY_SIZE: f64 = 8.0;
/// Rating-change percentile points covered by one placement step
pub const PLACEMENT_STEP: f64 = 200.0 / (LOBBY_SIZE - 1.0);
pub const PERCENTILE_SCALE: f64 = 100.0;
pub const OPPONENT_RATING_SCALE: f64 = 148.1181435;
// Matchmaking compression at the top of the ladder
pub const DAMPING_THRESHOLD: i32 = 8200;
pub const DAMPING_PIVOT: f64 = 8500.0;
pub const DAMPING_FACTOR: f64 = 0.85;
