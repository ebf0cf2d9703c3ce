use std::{
    collections::HashMap,
    sync::atomic::{AtomicBool, AtomicUsize, Ordering}
};

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate};
use tokio::sync::RwLock;

use crate::{
    database::store::SnapshotStore,
    error::{Error, Result},
    model::structures::{
        entity_key::EntityKey, game_mode::GameMode, leaderboard_row::LeaderboardRow, rating_snapshot::RatingSnapshot,
        region::Region
    }
};

/// In-process snapshot store. Series are kept in insertion order per entity.
///
/// Can be switched into an unavailable state to exercise failure paths.
#[derive(Default)]
pub struct MemoryStore {
    snapshots: RwLock<HashMap<EntityKey, Vec<RatingSnapshot>>>,
    leaderboards: RwLock<HashMap<(NaiveDate, Region, GameMode), Vec<LeaderboardRow>>>,
    unavailable: AtomicBool,
    reads: AtomicUsize
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    pub async fn insert_snapshots(&self, snapshots: impl IntoIterator<Item = RatingSnapshot>) {
        let mut series = self.snapshots.write().await;

        for snapshot in snapshots {
            series.entry(snapshot.key.clone()).or_default().push(snapshot);
        }
    }

    pub async fn insert_leaderboard(&self, day: NaiveDate, region: Region, mode: GameMode, rows: Vec<LeaderboardRow>) {
        self.leaderboards.write().await.insert((day, region, mode), rows);
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of reads served so far, failed ones included.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn begin_read(&self) -> Result<()> {
        self.reads.fetch_add(1, Ordering::SeqCst);

        if self.unavailable.load(Ordering::SeqCst) {
            return Err(Error::SourceUnavailable("memory store is offline".to_string()));
        }

        Ok(())
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn query_range(
        &self,
        key: &EntityKey,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>
    ) -> Result<Vec<RatingSnapshot>> {
        self.begin_read()?;

        let series = self.snapshots.read().await;
        Ok(series
            .get(key)
            .map(|snapshots| {
                snapshots
                    .iter()
                    .filter(|s| start <= s.timestamp && s.timestamp < end)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn query_latest_before(
        &self,
        key: &EntityKey,
        instant: DateTime<FixedOffset>
    ) -> Result<Option<RatingSnapshot>> {
        self.begin_read()?;

        let series = self.snapshots.read().await;
        Ok(series
            .get(key)
            .and_then(|snapshots| snapshots.iter().filter(|s| s.timestamp < instant).last().cloned()))
    }

    async fn query_top_n(
        &self,
        region: Region,
        mode: GameMode,
        day: NaiveDate,
        limit: u32
    ) -> Result<Vec<LeaderboardRow>> {
        self.begin_read()?;

        let leaderboards = self.leaderboards.read().await;
        Ok(leaderboards
            .get(&(day, region, mode))
            .map(|rows| rows.iter().take(limit as usize).cloned().collect())
            .unwrap_or_default())
    }
}
