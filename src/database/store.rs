use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::{
    error::Result,
    model::structures::{
        entity_key::EntityKey, game_mode::GameMode, leaderboard_row::LeaderboardRow, rating_snapshot::RatingSnapshot,
        region::Region
    }
};

/// Reads from the external time-series store.
///
/// Implementations return [`Error::SourceUnavailable`](crate::error::Error) (or a
/// wrapped database error) when a read fails. An empty vector or `None` always
/// means the store legitimately holds no matching data.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Snapshots of `key` with `start <= timestamp < end`, in time order.
    async fn query_range(
        &self,
        key: &EntityKey,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>
    ) -> Result<Vec<RatingSnapshot>>;

    /// The most recent snapshot of `key` strictly before `instant`.
    async fn query_latest_before(
        &self,
        key: &EntityKey,
        instant: DateTime<FixedOffset>
    ) -> Result<Option<RatingSnapshot>>;

    /// The top `limit` rows of a region's leaderboard as recorded for `day`, ordered by rank.
    async fn query_top_n(
        &self,
        region: Region,
        mode: GameMode,
        day: NaiveDate,
        limit: u32
    ) -> Result<Vec<LeaderboardRow>>;
}

#[async_trait]
impl<S: SnapshotStore + ?Sized> SnapshotStore for Arc<S> {
    async fn query_range(
        &self,
        key: &EntityKey,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>
    ) -> Result<Vec<RatingSnapshot>> {
        (**self).query_range(key, start, end).await
    }

    async fn query_latest_before(
        &self,
        key: &EntityKey,
        instant: DateTime<FixedOffset>
    ) -> Result<Option<RatingSnapshot>> {
        (**self).query_latest_before(key, instant).await
    }

    async fn query_top_n(
        &self,
        region: Region,
        mode: GameMode,
        day: NaiveDate,
        limit: u32
    ) -> Result<Vec<LeaderboardRow>> {
        (**self).query_top_n(region, mode, day, limit).await
    }
}
