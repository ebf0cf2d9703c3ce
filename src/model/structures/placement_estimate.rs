use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacementEstimate {
    /// One of 1, 2, 3, 3.5, ..., 7.5, 8
    pub placement: f64,
    /// Distance between the damped reference rating and the implied opponent average
    pub deviation: f64
}
