use std::collections::HashMap;

use crate::model::structures::{entity_key::EntityKey, leaderboard_row::LeaderboardRow};

/// Applies the delta fields of `current` against the same entity's row from the
/// previous period.
///
/// An entity absent from the baseline keeps a rating delta of 0. Rank deltas are
/// only meaningful within one region, so they are set only when both rows share it.
pub fn apply_baseline(mut current: LeaderboardRow, baseline: Option<&LeaderboardRow>) -> LeaderboardRow {
    let baseline_rating = baseline.map_or(current.rating, |b| b.rating);
    current.rating_delta = current.rating - baseline_rating;

    current.rank_delta = baseline
        .filter(|b| b.entity.region == current.entity.region)
        .map(|b| b.rank as i32 - current.rank as i32);

    current
}

/// Differences a whole region list against its baseline list.
pub fn diff_leaderboard(current: Vec<LeaderboardRow>, baseline: &[LeaderboardRow]) -> Vec<LeaderboardRow> {
    let lookup: HashMap<&EntityKey, &LeaderboardRow> = baseline.iter().map(|row| (&row.entity, row)).collect();

    current
        .into_iter()
        .map(|row| {
            let previous = lookup.get(&row.entity).copied();
            apply_baseline(row, previous)
        })
        .collect()
}
