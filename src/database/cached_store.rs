use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::{
    cache::{Cache, CacheKey, CacheScope, TtlCache},
    database::store::SnapshotStore,
    error::Result,
    model::structures::{
        entity_key::EntityKey, game_mode::GameMode, leaderboard_row::LeaderboardRow, rating_snapshot::RatingSnapshot,
        region::Region
    }
};

/// Read-through cache in front of another [`SnapshotStore`].
///
/// A value is cached only after the inner read succeeded; errors pass through
/// untouched and the next call goes back to the store.
pub struct CachedStore<S> {
    inner: S,
    ranges: Arc<dyn Cache<Vec<RatingSnapshot>>>,
    latest: Arc<dyn Cache<Option<RatingSnapshot>>>,
    leaderboards: Arc<dyn Cache<Vec<LeaderboardRow>>>
}

impl<S: SnapshotStore> CachedStore<S> {
    /// Wraps `inner` with in-memory caches that expire after `ttl`.
    pub fn new(inner: S, ttl: Duration) -> CachedStore<S> {
        CachedStore::with_caches(
            inner,
            Arc::new(TtlCache::new(ttl)),
            Arc::new(TtlCache::new(ttl)),
            Arc::new(TtlCache::new(ttl))
        )
    }

    pub fn with_caches(
        inner: S,
        ranges: Arc<dyn Cache<Vec<RatingSnapshot>>>,
        latest: Arc<dyn Cache<Option<RatingSnapshot>>>,
        leaderboards: Arc<dyn Cache<Vec<LeaderboardRow>>>
    ) -> CachedStore<S> {
        CachedStore {
            inner,
            ranges,
            latest,
            leaderboards
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: SnapshotStore> SnapshotStore for CachedStore<S> {
    async fn query_range(
        &self,
        key: &EntityKey,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>
    ) -> Result<Vec<RatingSnapshot>> {
        let cache_key = CacheKey {
            date: end.date_naive(),
            scope: CacheScope::Range {
                key: key.clone(),
                start,
                end
            }
        };

        if let Some(snapshots) = self.ranges.get(&cache_key).await {
            return Ok(snapshots);
        }

        let snapshots = self.inner.query_range(key, start, end).await?;
        self.ranges.set(cache_key, snapshots.clone()).await;

        Ok(snapshots)
    }

    async fn query_latest_before(
        &self,
        key: &EntityKey,
        instant: DateTime<FixedOffset>
    ) -> Result<Option<RatingSnapshot>> {
        let cache_key = CacheKey {
            date: instant.date_naive(),
            scope: CacheScope::LatestBefore {
                key: key.clone(),
                instant
            }
        };

        if let Some(snapshot) = self.latest.get(&cache_key).await {
            return Ok(snapshot);
        }

        let snapshot = self.inner.query_latest_before(key, instant).await?;
        self.latest.set(cache_key, snapshot.clone()).await;

        Ok(snapshot)
    }

    async fn query_top_n(
        &self,
        region: Region,
        mode: GameMode,
        day: NaiveDate,
        limit: u32
    ) -> Result<Vec<LeaderboardRow>> {
        let cache_key = CacheKey {
            date: day,
            scope: CacheScope::TopN { region, mode, limit }
        };

        if let Some(rows) = self.leaderboards.get(&cache_key).await {
            return Ok(rows);
        }

        let rows = self.inner.query_top_n(region, mode, day, limit).await?;
        self.leaderboards.set(cache_key, rows.clone()).await;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use chrono::NaiveDate;

    use crate::{
        database::{cached_store::CachedStore, memory_store::MemoryStore, store::SnapshotStore},
        model::structures::{game_mode::GameMode, region::Region},
        utils::test_utils::{base_time, generate_leaderboard, snapshots_from, test_key}
    };

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
    }

    #[tokio::test]
    async fn test_successful_read_is_cached() {
        let store = Arc::new(MemoryStore::new());
        store
            .insert_leaderboard(
                day(),
                Region::Us,
                GameMode::Solo,
                generate_leaderboard(Region::Us, GameMode::Solo, &[("a", 9000)])
            )
            .await;
        let cached = CachedStore::new(store.clone(), Duration::from_secs(300));

        let first = cached.query_top_n(Region::Us, GameMode::Solo, day(), 10).await.unwrap();
        let second = cached.query_top_n(Region::Us, GameMode::Solo, day(), 10).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(store.reads(), 1);
    }

    #[tokio::test]
    async fn test_empty_result_is_cached() {
        let store = Arc::new(MemoryStore::new());
        let cached = CachedStore::new(store.clone(), Duration::from_secs(300));

        assert!(cached.query_latest_before(&test_key(), base_time()).await.unwrap().is_none());
        assert!(cached.query_latest_before(&test_key(), base_time()).await.unwrap().is_none());
        assert_eq!(store.reads(), 1);
    }

    #[tokio::test]
    async fn test_failed_read_is_not_cached() {
        let store = Arc::new(MemoryStore::new());
        store.insert_snapshots(snapshots_from(&[(0, 1000)])).await;
        let cached = CachedStore::new(store.clone(), Duration::from_secs(300));
        let end = base_time() + chrono::Duration::hours(1);

        store.set_unavailable(true);
        let failed = cached.query_range(&test_key(), base_time(), end).await;
        assert!(failed.unwrap_err().is_source_unavailable());

        store.set_unavailable(false);
        let recovered = cached.query_range(&test_key(), base_time(), end).await.unwrap();
        assert_eq!(recovered.len(), 1);
        assert_eq!(store.reads(), 2);
    }

    #[tokio::test]
    async fn test_expired_entries_are_refetched() {
        let store = Arc::new(MemoryStore::new());
        let cached = CachedStore::new(store.clone(), Duration::ZERO);

        cached.query_top_n(Region::Ap, GameMode::Duo, day(), 10).await.unwrap();
        cached.query_top_n(Region::Ap, GameMode::Duo, day(), 10).await.unwrap();

        assert_eq!(store.reads(), 2);
    }
}
