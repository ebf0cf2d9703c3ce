use serde::{Deserialize, Serialize};

use crate::model::structures::entity_key::EntityKey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    #[serde(flatten)]
    pub entity: EntityKey,
    pub rating: i32,
    /// Dense 1..N position within the list this row belongs to
    pub rank: u32,
    pub games_played: u32,
    /// Rating change against the baseline period. 0 for entities new to the leaderboard.
    pub rating_delta: i32,
    /// Positive when the entity climbed. Only present for single-region lists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_delta: Option<i32>
}

impl LeaderboardRow {
    /// A freshly fetched row with no baseline applied yet.
    pub fn new(entity: EntityKey, rating: i32, rank: u32, games_played: u32) -> LeaderboardRow {
        LeaderboardRow {
            entity,
            rating,
            rank,
            games_played,
            rating_delta: 0,
            rank_delta: None
        }
    }
}
