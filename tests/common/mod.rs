use std::sync::Once;

use bg_ratings::model::{
    calendar::PeriodCalendar,
    structures::{
        entity_key::EntityKey, game_mode::GameMode, leaderboard_row::LeaderboardRow, rating_snapshot::RatingSnapshot,
        region::Region
    }
};
use chrono::{DateTime, FixedOffset, NaiveDate, Weekday};

static INIT: Once = Once::new();

/// Initialize test environment with RUST_LOG=WARN
pub fn init_test_env() {
    INIT.call_once(|| {
        std::env::set_var("RUST_LOG", "warn");
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

pub fn at(s: &str) -> DateTime<FixedOffset> {
    s.parse().unwrap()
}

pub fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

/// A Wednesday, mid-day
pub fn now() -> DateTime<FixedOffset> {
    at("2024-04-03T12:00:00+00:00")
}

pub fn utc_calendar() -> PeriodCalendar {
    PeriodCalendar::new(FixedOffset::east_opt(0).unwrap(), Weekday::Mon, vec![])
}

pub fn snapshot(key: &EntityKey, timestamp: &str, rating: i32) -> RatingSnapshot {
    RatingSnapshot::new(key.clone(), at(timestamp), rating)
}

pub fn board(region: Region, rows: &[(&str, i32)]) -> Vec<LeaderboardRow> {
    rows.iter()
        .enumerate()
        .map(|(i, (player, rating))| {
            LeaderboardRow::new(EntityKey::new(*player, region, GameMode::Solo), *rating, i as u32 + 1, 30)
        })
        .collect()
}
