use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate};
use tokio_postgres::{Client, NoTls, Row};
use tracing::{debug, error, info, warn};

use crate::{
    constants::HISTORY_PAGE_SIZE,
    database::store::SnapshotStore,
    error::Result,
    model::structures::{
        entity_key::EntityKey, game_mode::GameMode, leaderboard_row::LeaderboardRow, rating_snapshot::RatingSnapshot,
        region::Region
    }
};

// Keyset pagination over (recorded_at, id). The cursor starts at (start, i64::MIN).
const RANGE_PAGE_SQL: &str = "
    SELECT id, recorded_at, rating
    FROM rating_snapshots
    WHERE player_name = $1 AND region = $2 AND mode = $3
      AND recorded_at IS NOT NULL
      AND (recorded_at, id) > ($4, $5)
      AND recorded_at < $6
    ORDER BY recorded_at, id
    LIMIT $7";

const LATEST_BEFORE_SQL: &str = "
    SELECT id, recorded_at, rating
    FROM rating_snapshots
    WHERE player_name = $1 AND region = $2 AND mode = $3
      AND recorded_at < $4
      AND rating IS NOT NULL
    ORDER BY recorded_at DESC, id DESC
    LIMIT 1";

const TOP_N_SQL: &str = "
    SELECT player_name, rank, rating, games_played
    FROM leaderboard_snapshots
    WHERE day = $1 AND region = $2 AND mode = $3
    ORDER BY rank
    LIMIT $4";

#[derive(Clone)]
pub struct DbClient {
    client: Arc<Client>,
    page_size: i64
}

impl DbClient {
    // Connect to the database and return a DbClient instance
    pub async fn connect(connection_str: &str) -> Result<Self> {
        let (client, connection) = tokio_postgres::connect(connection_str, NoTls).await?;

        // Spawn the connection object to run in the background
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("connection error: {}", e);
            }
        });

        info!("Connected to snapshot database");

        Ok(DbClient {
            client: Arc::new(client),
            page_size: HISTORY_PAGE_SIZE
        })
    }

    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Builds a snapshot from a row, or `None` if the row is unusable.
    fn snapshot_from_row(key: &EntityKey, row: &Row) -> Option<RatingSnapshot> {
        let timestamp = row.try_get::<_, DateTime<FixedOffset>>("recorded_at");
        let rating = row.try_get::<_, Option<i32>>("rating");

        match (timestamp, rating) {
            (Ok(timestamp), Ok(Some(rating))) => Some(RatingSnapshot::new(key.clone(), timestamp, rating)),
            _ => {
                warn!(
                    player = %key.player,
                    region = %key.region,
                    id = ?row.try_get::<_, i64>("id").ok(),
                    "Skipping malformed rating snapshot row"
                );
                None
            }
        }
    }

    fn leaderboard_row_from_row(region: Region, mode: GameMode, row: &Row) -> Option<LeaderboardRow> {
        let player = row.try_get::<_, String>("player_name");
        let rank = row.try_get::<_, i32>("rank");
        let rating = row.try_get::<_, i32>("rating");
        let games_played = row.try_get::<_, Option<i32>>("games_played");

        match (player, rank, rating, games_played) {
            (Ok(player), Ok(rank), Ok(rating), Ok(games_played)) if rank >= 1 => Some(LeaderboardRow::new(
                EntityKey::new(player, region, mode),
                rating,
                rank as u32,
                games_played.unwrap_or(0).max(0) as u32
            )),
            _ => {
                warn!(%region, %mode, "Skipping malformed leaderboard row");
                None
            }
        }
    }
}

#[async_trait]
impl SnapshotStore for DbClient {
    async fn query_range(
        &self,
        key: &EntityKey,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>
    ) -> Result<Vec<RatingSnapshot>> {
        let region = i16::from(key.region);
        let mode = i16::from(key.mode);

        let mut snapshots = Vec::new();
        let mut cursor: (DateTime<FixedOffset>, i64) = (start, i64::MIN);
        let mut pages = 0;

        loop {
            let rows = self
                .client
                .query(
                    RANGE_PAGE_SQL,
                    &[&key.player, &region, &mode, &cursor.0, &cursor.1, &end, &self.page_size]
                )
                .await?;
            pages += 1;

            let fetched = rows.len() as i64;
            for row in &rows {
                if let (Ok(recorded_at), Ok(id)) = (
                    row.try_get::<_, DateTime<FixedOffset>>("recorded_at"),
                    row.try_get::<_, i64>("id")
                ) {
                    cursor = (recorded_at, id);
                }

                if let Some(snapshot) = Self::snapshot_from_row(key, row) {
                    snapshots.push(snapshot);
                }
            }

            if fetched < self.page_size {
                break;
            }
        }

        debug!(
            player = %key.player,
            region = %key.region,
            pages,
            count = snapshots.len(),
            "Fetched rating history"
        );

        Ok(snapshots)
    }

    async fn query_latest_before(
        &self,
        key: &EntityKey,
        instant: DateTime<FixedOffset>
    ) -> Result<Option<RatingSnapshot>> {
        let row = self
            .client
            .query_opt(
                LATEST_BEFORE_SQL,
                &[&key.player, &i16::from(key.region), &i16::from(key.mode), &instant]
            )
            .await?;

        Ok(row.and_then(|row| Self::snapshot_from_row(key, &row)))
    }

    async fn query_top_n(
        &self,
        region: Region,
        mode: GameMode,
        day: NaiveDate,
        limit: u32
    ) -> Result<Vec<LeaderboardRow>> {
        info!(%region, %mode, %day, limit, "Fetching leaderboard");

        let rows = self
            .client
            .query(
                TOP_N_SQL,
                &[&day, &i16::from(region), &i16::from(mode), &(limit as i64)]
            )
            .await?;

        Ok(rows
            .iter()
            .filter_map(|row| Self::leaderboard_row_from_row(region, mode, row))
            .collect())
    }
}
