use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingStats {
    pub games_played: u32,
    /// `None` when there are no ratings at all
    pub net_change: Option<i32>,
    pub max: Option<i32>,
    pub min: Option<i32>
}
