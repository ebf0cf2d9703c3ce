use serde::Serialize;

use crate::model::{
    placement::{average_placement, calculate_placements},
    stats::aggregate,
    structures::{
        leaderboard_row::LeaderboardRow, placement_estimate::PlacementEstimate, rating_snapshot::RatingSnapshot,
        rating_stats::RatingStats, window::Window
    }
};

/// A windowed rating series for one entity, ready for charting.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryView {
    /// `None` when the requested period could not be resolved
    pub window: Option<Window>,
    pub series: Vec<RatingSnapshot>,
    pub stats: RatingStats,
    #[serde(flatten)]
    pub placements: PlacementView
}

impl HistoryView {
    pub fn from_series(window: Option<Window>, series: Vec<RatingSnapshot>) -> HistoryView {
        let ratings: Vec<i32> = series.iter().map(|s| s.rating).collect();

        HistoryView {
            window,
            stats: aggregate(&series),
            placements: PlacementView::from_ratings(&ratings),
            series
        }
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub window: Option<Window>,
    pub baseline_window: Option<Window>,
    pub rows: Vec<LeaderboardRow>
}

impl Leaderboard {
    pub fn empty() -> Leaderboard {
        Leaderboard {
            window: None,
            baseline_window: None,
            rows: Vec::new()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementView {
    pub placements: Vec<PlacementEstimate>,
    pub average_placement: Option<f64>
}

impl PlacementView {
    pub fn from_ratings(ratings: &[i32]) -> PlacementView {
        let placements = calculate_placements(ratings);

        PlacementView {
            average_placement: average_placement(&placements),
            placements
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::{
        service::views::{HistoryView, PlacementView},
        utils::test_utils::snapshots_from
    };

    #[test]
    fn test_history_view_summarises_series() {
        let view = HistoryView::from_series(None, snapshots_from(&[(0, 8000), (1, 8050), (2, 8150)]));

        assert_eq!(view.stats.games_played, 2);
        assert_eq!(view.stats.net_change, Some(150));
        assert_eq!(view.placements.placements.len(), 2);
        assert_abs_diff_eq!(view.placements.average_placement.unwrap(), 2.0);
    }

    #[test]
    fn test_placement_view_needs_two_ratings() {
        let view = PlacementView::from_ratings(&[8000]);

        assert!(view.placements.is_empty());
        assert_eq!(view.average_placement, None);
    }

    #[test]
    fn test_serialized_field_names() {
        let view = HistoryView::from_series(None, snapshots_from(&[(0, 8000), (1, 8100)]));
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["stats"]["gamesPlayed"], 1);
        assert_eq!(json["averagePlacement"], 1.0);
        assert_eq!(json["series"][0]["key"]["region"], 1);
    }
}
