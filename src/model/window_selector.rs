use crate::model::{
    dedup::dedup,
    structures::{rating_snapshot::RatingSnapshot, window::Window}
};

/// Selects the snapshots of `window` out of a time-ordered series.
///
/// - Native points inside `[start, end)` are kept. If earlier history exists, the
///   first snapshot of the trailing equal-rating run before `start` is prepended
///   as the boundary value and the result is deduplicated again.
/// - With no native points, the most recent snapshot before `start` is carried
///   forward as a single flat point.
/// - With no earlier history either, the result is empty.
pub fn select_window(window: &Window, snapshots: &[RatingSnapshot]) -> Vec<RatingSnapshot> {
    let first_inside = snapshots.partition_point(|s| s.timestamp < window.start);
    let (prior, rest) = snapshots.split_at(first_inside);

    let inside: Vec<RatingSnapshot> = rest
        .iter()
        .take_while(|s| s.timestamp < window.end)
        .cloned()
        .collect();

    if inside.is_empty() {
        return prior.last().cloned().into_iter().collect();
    }

    match trailing_run_start(prior) {
        Some(boundary) => {
            let mut combined = Vec::with_capacity(inside.len() + 1);
            combined.push(boundary.clone());
            combined.extend(inside);

            dedup(&combined)
        }
        None => inside
    }
}

/// The earliest snapshot of the run of equal ratings that ends `prior`.
fn trailing_run_start(prior: &[RatingSnapshot]) -> Option<&RatingSnapshot> {
    let last = prior.last()?;

    prior.iter().rev().take_while(|s| s.rating == last.rating).last()
}
