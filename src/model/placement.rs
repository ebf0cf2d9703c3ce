use itertools::Itertools;

use crate::model::{
    constants::{
        DAMPING_FACTOR, DAMPING_PIVOT, DAMPING_THRESHOLD, OPPONENT_RATING_SCALE, PERCENTILE_SCALE, PLACEMENTS,
        PLACEMENT_STEP
    },
    structures::placement_estimate::PlacementEstimate
};

/// # Placement inversion
///
/// Infers the most likely finishing placement for one match from the rating
/// before (`start`) and after (`end`) it.
///
/// A fixed linear model maps each placement to a percentile-scaled rating change.
/// Inverting it for a candidate placement gives the average opponent rating that
/// would have produced the observed gain. The candidate whose implied opponent
/// average lies closest to the player's own (damped) rating wins.
///
/// There is no closed-form inverse, so all 13 candidates are scanned in ascending
/// order and the first minimum is kept.
pub fn estimate_placement(start: i32, end: i32) -> PlacementEstimate {
    let s = start as f64;
    let gain = end as f64 - s;
    let reference = damped_rating(start);

    let mut best = PlacementEstimate {
        placement: PLACEMENTS[0],
        deviation: f64::INFINITY
    };

    for placement in PLACEMENTS {
        let deviation = (reference - implied_opponent_average(s, gain, placement)).abs();

        if deviation < best.deviation {
            best = PlacementEstimate { placement, deviation };
        }
    }

    best
}

/// Above the threshold lobbies get compressed, so the reference rating is pulled
/// toward the pivot.
fn damped_rating(rating: i32) -> f64 {
    let r = rating as f64;

    if rating < DAMPING_THRESHOLD {
        r
    } else {
        r - DAMPING_FACTOR * (r - DAMPING_PIVOT)
    }
}

fn implied_opponent_average(start: f64, gain: f64, placement: f64) -> f64 {
    start - OPPONENT_RATING_SCALE * (PERCENTILE_SCALE - ((placement - 1.0) * PLACEMENT_STEP + gain))
}

/// One estimate per consecutive pair of ratings (n ratings give n - 1 estimates).
pub fn calculate_placements(ratings: &[i32]) -> Vec<PlacementEstimate> {
    ratings
        .iter()
        .tuple_windows()
        .map(|(before, after)| estimate_placement(*before, *after))
        .collect()
}

/// Mean estimated placement, or `None` with fewer than two ratings.
pub fn calculate_average_placement(ratings: &[i32]) -> Option<f64> {
    average_placement(&calculate_placements(ratings))
}

pub fn average_placement(estimates: &[PlacementEstimate]) -> Option<f64> {
    if estimates.is_empty() {
        return None;
    }

    let sum: f64 = estimates.iter().map(|e| e.placement).sum();
    Some(sum / estimates.len() as f64)
}
