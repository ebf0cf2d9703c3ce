use tracing::warn;

use crate::model::structures::rating_snapshot::RatingSnapshot;

/// Drops snapshots whose timestamp goes backwards relative to the last kept
/// snapshot of the same series. Each dropped entry is logged and skipped.
pub fn drop_out_of_order(snapshots: Vec<RatingSnapshot>) -> Vec<RatingSnapshot> {
    let mut kept: Vec<RatingSnapshot> = Vec::with_capacity(snapshots.len());

    for snapshot in snapshots {
        if let Some(last) = kept.last() {
            if snapshot.timestamp < last.timestamp {
                warn!(
                    player = %snapshot.key.player,
                    region = %snapshot.key.region,
                    timestamp = %snapshot.timestamp,
                    previous = %last.timestamp,
                    "Skipping out-of-order rating snapshot"
                );
                continue;
            }
        }

        kept.push(snapshot);
    }

    kept
}
