use itertools::Itertools;

use crate::model::structures::leaderboard_row::LeaderboardRow;

/// Merges per-region leaderboards into one list ranked by rating.
///
/// Lists are concatenated in the order given and stable-sorted, so ties keep
/// region-then-fetch order. Ranks are reassigned densely and rank deltas are
/// cleared since they compare against region-local ranks. Rating deltas are
/// kept as computed per region.
pub fn merge_regions(lists: Vec<Vec<LeaderboardRow>>) -> Vec<LeaderboardRow> {
    let merged = lists
        .into_iter()
        .flatten()
        .sorted_by(|a, b| b.rating.cmp(&a.rating))
        .collect_vec();

    rerank(merged)
}

fn rerank(rows: Vec<LeaderboardRow>) -> Vec<LeaderboardRow> {
    rows.into_iter()
        .enumerate()
        .map(|(i, mut row)| {
            row.rank = i as u32 + 1;
            row.rank_delta = None;
            row
        })
        .collect()
}
