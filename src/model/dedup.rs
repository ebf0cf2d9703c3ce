use crate::model::structures::rating_snapshot::RatingSnapshot;

/// Collapses runs of consecutive equal ratings, keeping the first snapshot of each run.
///
/// The result never has two adjacent snapshots with the same rating, and
/// `dedup(&dedup(x)) == dedup(x)`.
pub fn dedup(snapshots: &[RatingSnapshot]) -> Vec<RatingSnapshot> {
    let mut result: Vec<RatingSnapshot> = Vec::with_capacity(snapshots.len());

    for snapshot in snapshots {
        if result.last().is_some_and(|last| last.rating == snapshot.rating) {
            continue;
        }

        result.push(snapshot.clone());
    }

    result
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::{
        model::dedup::dedup,
        utils::test_utils::{generate_snapshots, snapshots_from, test_key}
    };

    #[test]
    fn test_dedup_empty() {
        assert!(dedup(&[]).is_empty());
    }

    #[test]
    fn test_dedup_keeps_first_of_run() {
        let snapshots = snapshots_from(&[(0, 1000), (1, 1000), (2, 1500), (3, 1500), (4, 1000)]);
        let deduped = dedup(&snapshots);

        let timestamps = deduped.iter().map(|s| s.timestamp).collect_vec();
        let ratings = deduped.iter().map(|s| s.rating).collect_vec();

        assert_eq!(ratings, vec![1000, 1500, 1000]);
        assert_eq!(
            timestamps,
            vec![snapshots[0].timestamp, snapshots[2].timestamp, snapshots[4].timestamp]
        );
    }

    #[test]
    fn test_dedup_no_adjacent_equal_ratings() {
        for seed in 0..20 {
            let snapshots = generate_snapshots(&test_key(), 200, seed);
            let deduped = dedup(&snapshots);

            assert!(deduped.len() <= snapshots.len());
            assert!(deduped.iter().tuple_windows().all(|(a, b)| a.rating != b.rating));
        }
    }

    #[test]
    fn test_dedup_idempotent() {
        for seed in 0..20 {
            let snapshots = generate_snapshots(&test_key(), 200, seed);
            let once = dedup(&snapshots);
            let twice = dedup(&once);

            assert_eq!(once, twice);
        }
    }
}
