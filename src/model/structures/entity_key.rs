use serde::{Deserialize, Serialize};

use crate::model::structures::{game_mode::GameMode, region::Region};

/// Identifies one rating partition: a player within a region and game mode.
///
/// Player names are only unique inside a region, so all three parts take part
/// in equality and hashing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityKey {
    pub player: String,
    pub region: Region,
    pub mode: GameMode
}

impl EntityKey {
    pub fn new(player: impl Into<String>, region: Region, mode: GameMode) -> EntityKey {
        EntityKey {
            player: player.into(),
            region,
            mode
        }
    }
}
