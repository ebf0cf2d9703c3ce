use crate::model::structures::{
    entity_key::EntityKey, game_mode::GameMode, leaderboard_row::LeaderboardRow, rating_snapshot::RatingSnapshot,
    region::Region
};
use chrono::{DateTime, Duration, FixedOffset};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub fn base_time() -> DateTime<FixedOffset> {
    "2024-04-01T00:00:00+00:00".parse().unwrap()
}

pub fn test_key() -> EntityKey {
    EntityKey::new("beterbabbit", Region::Us, GameMode::Solo)
}

/// Builds a series for [`test_key`] from `(hours after base_time, rating)` pairs.
pub fn snapshots_from(points: &[(i64, i32)]) -> Vec<RatingSnapshot> {
    let key = test_key();

    points
        .iter()
        .map(|(hours, rating)| RatingSnapshot::new(key.clone(), base_time() + Duration::hours(*hours), *rating))
        .collect()
}

/// A seeded random walk where roughly a third of readings repeat the previous rating.
pub fn generate_snapshots(key: &EntityKey, n: usize, seed: u64) -> Vec<RatingSnapshot> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut timestamp = base_time();
    let mut rating = rng.random_range(6000..=9000);
    let mut snapshots = Vec::with_capacity(n);

    for _ in 0..n {
        snapshots.push(RatingSnapshot::new(key.clone(), timestamp, rating));

        timestamp += Duration::minutes(rng.random_range(1..=90));
        if !rng.random_bool(0.35) {
            rating += rng.random_range(-150..=150);
        }
    }

    snapshots
}

/// Rows ranked 1..N in the given order.
pub fn generate_leaderboard(region: Region, mode: GameMode, rows: &[(&str, i32)]) -> Vec<LeaderboardRow> {
    rows.iter()
        .enumerate()
        .map(|(i, (player, rating))| {
            LeaderboardRow::new(EntityKey::new(*player, region, mode), *rating, i as u32 + 1, 20 + i as u32)
        })
        .collect()
}
