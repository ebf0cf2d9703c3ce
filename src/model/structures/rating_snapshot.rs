use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::model::structures::entity_key::EntityKey;

/// One observed rating for an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSnapshot {
    pub key: EntityKey,
    pub timestamp: DateTime<FixedOffset>,
    pub rating: i32
}

impl RatingSnapshot {
    pub fn new(key: EntityKey, timestamp: DateTime<FixedOffset>, rating: i32) -> RatingSnapshot {
        RatingSnapshot { key, timestamp, rating }
    }
}
