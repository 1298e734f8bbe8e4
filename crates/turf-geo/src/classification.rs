//! Nearest-point classification.
//!
//! Distances are compared in the default unit; only their order matters.

use crate::measurement::distance;
use turf_core::models::{Point, Unit};

/// Candidate closest to `target`; `target` itself when there are no candidates.
///
/// Ties keep the earliest candidate.
pub fn nearest(target: &Point, points: &[Point]) -> Point {
    let mut closest = *target;
    let mut min_dist = f64::INFINITY;
    for point in points {
        let dist = distance(target, point, Unit::default());
        if dist < min_dist {
            closest = *point;
            min_dist = dist;
        }
    }
    closest
}
