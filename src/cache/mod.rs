//! Read-through cache used in front of snapshot store reads.
//!
//! Entries are keyed by the logical date they describe plus a typed scope, and
//! expire after a fixed TTL. Writers only insert values from fully successful
//! reads; see [`CachedStore`](crate::database::cached_store::CachedStore).

use std::{collections::HashMap, sync::Arc, time::Duration};

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate};
use tokio::{sync::RwLock, time::Instant};
use tracing::debug;

use crate::model::structures::{entity_key::EntityKey, game_mode::GameMode, region::Region};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub date: NaiveDate,
    pub scope: CacheScope
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheScope {
    Range {
        key: EntityKey,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>
    },
    LatestBefore {
        key: EntityKey,
        instant: DateTime<FixedOffset>
    },
    TopN {
        region: Region,
        mode: GameMode,
        limit: u32
    }
}

#[async_trait]
pub trait Cache<V>: Send + Sync {
    async fn get(&self, key: &CacheKey) -> Option<V>;

    async fn set(&self, key: CacheKey, value: V);
}

/// In-memory cache where every entry lives for `ttl` after being written.
pub struct TtlCache<V> {
    ttl: Duration,
    entries: Arc<RwLock<HashMap<CacheKey, (Instant, V)>>>
}

impl<V> Clone for TtlCache<V> {
    fn clone(&self) -> Self {
        TtlCache {
            ttl: self.ttl,
            entries: self.entries.clone()
        }
    }
}

impl<V: Clone + Send + Sync> TtlCache<V> {
    pub fn new(ttl: Duration) -> TtlCache<V> {
        TtlCache {
            ttl,
            entries: Arc::new(RwLock::new(HashMap::new()))
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl<V: Clone + Send + Sync> Cache<V> for TtlCache<V> {
    async fn get(&self, key: &CacheKey) -> Option<V> {
        let entries = self.entries.read().await;
        let (written, value) = entries.get(key)?;

        if written.elapsed() < self.ttl {
            debug!(?key, "Cache hit");
            Some(value.clone())
        } else {
            None
        }
    }

    /// Expired entries are evicted on every write, so the map holds at most
    /// what was written within the last `ttl`.
    async fn set(&self, key: CacheKey, value: V) {
        let ttl = self.ttl;
        let mut entries = self.entries.write().await;

        entries.retain(|_, (written, _)| written.elapsed() < ttl);
        entries.insert(key, (Instant::now(), value));
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::NaiveDate;

    use crate::{
        cache::{Cache, CacheKey, CacheScope, TtlCache},
        model::structures::{game_mode::GameMode, region::Region}
    };

    fn key(day: u32, region: Region) -> CacheKey {
        CacheKey {
            date: NaiveDate::from_ymd_opt(2024, 4, day).unwrap(),
            scope: CacheScope::TopN {
                region,
                mode: GameMode::Solo,
                limit: 25
            }
        }
    }

    #[tokio::test]
    async fn test_get_after_set() {
        let cache: TtlCache<Vec<i32>> = TtlCache::new(Duration::from_secs(300));
        cache.set(key(1, Region::Us), vec![1, 2, 3]).await;

        assert_eq!(cache.get(&key(1, Region::Us)).await, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_keys_are_scoped_by_date_and_scope() {
        let cache: TtlCache<i32> = TtlCache::new(Duration::from_secs(300));
        cache.set(key(1, Region::Us), 1).await;

        assert_eq!(cache.get(&key(2, Region::Us)).await, None);
        assert_eq!(cache.get(&key(1, Region::Eu)).await, None);
    }

    #[tokio::test]
    async fn test_expired_entries_are_not_served() {
        let cache: TtlCache<i32> = TtlCache::new(Duration::ZERO);
        cache.set(key(1, Region::Us), 1).await;

        assert_eq!(cache.get(&key(1, Region::Us)).await, None);
    }

    #[tokio::test]
    async fn test_writes_evict_expired_entries() {
        let cache: TtlCache<i32> = TtlCache::new(Duration::ZERO);

        for day in 1..=10 {
            cache.set(key(day, Region::Us), day as i32).await;
            assert_eq!(cache.len().await, 1);
        }
    }

    #[tokio::test]
    async fn test_live_entries_survive_eviction() {
        let cache: TtlCache<i32> = TtlCache::new(Duration::from_secs(300));
        cache.set(key(1, Region::Us), 1).await;
        cache.set(key(2, Region::Us), 2).await;

        assert_eq!(cache.len().await, 2);
        assert_eq!(cache.get(&key(1, Region::Us)).await, Some(1));
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let cache: TtlCache<i32> = TtlCache::new(Duration::from_secs(300));
        let clone = cache.clone();
        clone.set(key(3, Region::Ap), 7).await;

        assert_eq!(cache.get(&key(3, Region::Ap)).await, Some(7));
    }
}
