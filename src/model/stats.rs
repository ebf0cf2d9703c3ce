use crate::model::structures::{rating_snapshot::RatingSnapshot, rating_stats::RatingStats};

/// Summary of a windowed, deduplicated series.
///
/// Every point after the first stands for one game. A single point yields no
/// games and a net change of 0; an empty series yields no change at all.
pub fn aggregate(series: &[RatingSnapshot]) -> RatingStats {
    let (first, last) = match (series.first(), series.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return RatingStats::default()
    };

    RatingStats {
        games_played: series.len().saturating_sub(1) as u32,
        net_change: Some(last.rating - first.rating),
        max: series.iter().map(|s| s.rating).max(),
        min: series.iter().map(|s| s.rating).min()
    }
}
