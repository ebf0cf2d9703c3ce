//! Consumer-facing views built from store reads and the pure rating model.

pub mod views;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone, Utc};
use futures::future::try_join_all;
use indexmap::IndexSet;
use itertools::Itertools;
use tracing::{debug, info};

use crate::{
    constants::{BOUNDARY_LOOKBACK_DAYS, HISTORY_EPOCH_SECS},
    database::store::SnapshotStore,
    error::Result,
    model::{
        baseline::diff_leaderboard,
        calendar::PeriodCalendar,
        data_processing::drop_out_of_order,
        dedup::dedup,
        global_rank::merge_regions,
        structures::{
            entity_key::EntityKey, game_mode::GameMode, leaderboard_row::LeaderboardRow,
            rating_snapshot::RatingSnapshot, region::Region, window_kind::WindowKind
        },
        window_selector::select_window
    }
};

use self::views::{HistoryView, Leaderboard, PlacementView};

pub struct RatingService<S> {
    store: S,
    calendar: PeriodCalendar,
    leaderboard_size: u32
}

impl<S: SnapshotStore> RatingService<S> {
    pub fn new(store: S, calendar: PeriodCalendar, leaderboard_size: u32) -> RatingService<S> {
        RatingService {
            store,
            calendar,
            leaderboard_size
        }
    }

    pub fn calendar(&self) -> &PeriodCalendar {
        &self.calendar
    }

    /// # Rating history
    ///
    /// 1. Resolve the period into a window.
    /// 2. Read the native points of the window. With none, only the latest earlier
    ///    snapshot is needed to carry the rating forward. Otherwise the earlier
    ///    history is read too, so the boundary point can be placed at the start
    ///    of the rating's trailing run.
    ///
    /// The leading point differs between the two cases. A carried rating is the
    /// latest snapshot before the window. A boundary point is the first snapshot
    /// of the equal-rating run that enters the window.
    /// 3. Sanitize, deduplicate and select, then summarise.
    pub async fn history(
        &self,
        key: &EntityKey,
        kind: WindowKind,
        offset: u32,
        now: &DateTime<FixedOffset>
    ) -> Result<HistoryView> {
        let Some(window) = self.calendar.window(kind, offset, now) else {
            info!(%kind, offset, "Period cannot be resolved, returning empty history");
            return Ok(HistoryView::from_series(None, Vec::new()));
        };

        let inside = self.store.query_range(key, window.start, window.end).await?;

        let snapshots = if inside.is_empty() {
            self.store
                .query_latest_before(key, window.start)
                .await?
                .into_iter()
                .collect_vec()
        } else {
            let mut history = self.boundary_history(key, window.start).await?;
            history.extend(inside);
            history
        };

        let series = select_window(&window, &dedup(&drop_out_of_order(snapshots)));
        debug!(
            player = %key.player,
            region = %key.region,
            %kind,
            offset,
            points = series.len(),
            "Selected rating history"
        );

        Ok(HistoryView::from_series(Some(window), series))
    }

    /// Reads enough history before `start` to contain the whole trailing run of
    /// the rating in effect at `start`.
    ///
    /// The lookback doubles from [`BOUNDARY_LOOKBACK_DAYS`] until the range holds
    /// a different rating or reaches the history epoch, so a rating that changes
    /// often never pulls the full history.
    async fn boundary_history(&self, key: &EntityKey, start: DateTime<FixedOffset>) -> Result<Vec<RatingSnapshot>> {
        let Some(latest) = self.store.query_latest_before(key, start).await? else {
            return Ok(Vec::new());
        };

        let epoch = history_epoch();
        let mut span = Duration::days(BOUNDARY_LOOKBACK_DAYS);

        loop {
            let from = start
                .checked_sub_signed(span)
                .filter(|from| *from > epoch)
                .unwrap_or(epoch);
            let history = self.store.query_range(key, from, start).await?;

            if from == epoch || history.iter().any(|s| s.rating != latest.rating) {
                debug!(player = %key.player, %from, points = history.len(), "Read boundary history");
                return Ok(history);
            }

            span = span * 2;
        }
    }

    /// # Leaderboard
    ///
    /// Each region's current and baseline top-N lists are read concurrently and
    /// differenced within the region. A single region keeps its own ranks and
    /// rank deltas. Several regions are merged into one global ranking in the
    /// order they were requested, independent of which read finished first.
    pub async fn leaderboard(
        &self,
        mode: GameMode,
        regions: &[Region],
        kind: WindowKind,
        offset: u32,
        now: &DateTime<FixedOffset>
    ) -> Result<Leaderboard> {
        let Some(window) = self.calendar.window(kind, offset, now) else {
            info!(%kind, offset, "Period cannot be resolved, returning empty leaderboard");
            return Ok(Leaderboard::empty());
        };
        let baseline_window = self.calendar.window(kind, offset.saturating_add(1), now);

        let day = self.calendar.snapshot_day(&window, now);
        let baseline_day = baseline_window.as_ref().map(|w| self.calendar.snapshot_day(w, now));

        let regions: IndexSet<Region> = regions.iter().copied().collect();
        let lists = try_join_all(
            regions
                .iter()
                .map(|region| self.region_leaderboard(*region, mode, day, baseline_day))
        )
        .await?;

        let rows = if regions.len() == 1 {
            lists.into_iter().flatten().collect()
        } else {
            merge_regions(lists)
        };

        Ok(Leaderboard {
            window: Some(window),
            baseline_window,
            rows
        })
    }

    async fn region_leaderboard(
        &self,
        region: Region,
        mode: GameMode,
        day: NaiveDate,
        baseline_day: Option<NaiveDate>
    ) -> Result<Vec<LeaderboardRow>> {
        let current = self.store.query_top_n(region, mode, day, self.leaderboard_size);
        let baseline = async {
            match baseline_day {
                Some(baseline_day) => {
                    self.store
                        .query_top_n(region, mode, baseline_day, self.leaderboard_size)
                        .await
                }
                None => Ok(Vec::new())
            }
        };

        let (current, baseline) = futures::try_join!(current, baseline)?;
        debug!(%region, %mode, %day, current = current.len(), baseline = baseline.len(), "Fetched region leaderboard");

        Ok(diff_leaderboard(current, &baseline))
    }

    pub fn placements(&self, ratings: &[i32]) -> PlacementView {
        PlacementView::from_ratings(ratings)
    }
}

fn history_epoch() -> DateTime<FixedOffset> {
    Utc.timestamp_nanos(HISTORY_EPOCH_SECS * 1_000_000_000).fixed_offset()
}
