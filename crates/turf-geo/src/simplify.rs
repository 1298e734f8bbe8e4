//! Douglas-Peucker line simplification with an optional radial-distance pre-pass.
//!
//! Distances are planar, measured in coordinate degrees.

use turf_core::config::TurfDefaults;
use turf_core::models::Point;

fn squared_distance(p1: &Point, p2: &Point) -> f64 {
    let dx = p2.longitude() - p1.longitude();
    let dy = p2.latitude() - p1.latitude();
    dx * dx + dy * dy
}

// Squared distance from `point` to the closest point of the segment.
fn squared_segment_distance(point: &Point, start: &Point, end: &Point) -> f64 {
    let mut x = start.latitude();
    let mut y = start.longitude();
    let dx = end.latitude() - x;
    let dy = end.longitude() - y;

    if dx != 0.0 || dy != 0.0 {
        let t = ((point.latitude() - x) * dx + (point.longitude() - y) * dy) / (dx * dx + dy * dy);
        if t > 1.0 {
            x = end.latitude();
            y = end.longitude();
        } else if t > 0.0 {
            x += dx * t;
            y += dy * t;
        }
    }

    let dx = point.latitude() - x;
    let dy = point.longitude() - y;
    dx * dx + dy * dy
}

fn simplify_radial(points: &[Point], squared_tolerance: f64) -> Vec<Point> {
    let Some((first, rest)) = points.split_first() else {
        return Vec::new();
    };

    let mut kept = vec![*first];
    let mut prev = first;
    let mut last_kept = 0;
    for (offset, point) in rest.iter().enumerate() {
        if squared_distance(point, prev) > squared_tolerance {
            kept.push(*point);
            prev = point;
            last_kept = offset + 1;
        }
    }

    if last_kept != points.len() - 1 {
        kept.push(points[points.len() - 1]);
    }
    kept
}

fn simplify_douglas_peucker(points: &[Point], squared_tolerance: f64) -> Vec<Point> {
    let last = points.len() - 1;
    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[last] = true;

    let mut ranges = vec![(0, last)];
    while let Some((start, end)) = ranges.pop() {
        let mut max_squared_distance = squared_tolerance;
        let mut index = start;

        for i in start + 1..end {
            let d = squared_segment_distance(&points[i], &points[start], &points[end]);
            if d > max_squared_distance {
                index = i;
                max_squared_distance = d;
            }
        }

        if max_squared_distance > squared_tolerance {
            keep[index] = true;
            if index - start > 1 {
                ranges.push((start, index));
            }
            if end - index > 1 {
                ranges.push((index, end));
            }
        }
    }

    points.iter().zip(keep).filter(|(_, kept)| *kept).map(|(p, _)| *p).collect()
}

/// Simplify a point sequence, keeping its first and last point.
///
/// Without `high_quality` a radial-distance pass runs first and discards points
/// closer than `tolerance` to the previously kept point. Sequences of two points
/// or fewer come back unchanged.
pub fn simplify(points: &[Point], tolerance: f64, high_quality: bool) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let squared_tolerance = tolerance * tolerance;
    let candidates = if high_quality {
        points.to_vec()
    } else {
        simplify_radial(points, squared_tolerance)
    };
    let simplified = if candidates.len() <= 2 {
        candidates
    } else {
        simplify_douglas_peucker(&candidates, squared_tolerance)
    };

    tracing::trace!(
        input = points.len(),
        output = simplified.len(),
        tolerance,
        high_quality,
        "simplified line"
    );
    simplified
}

/// [`simplify`] using the configured tolerance and quality flag.
pub fn simplify_with(points: &[Point], defaults: &TurfDefaults) -> Vec<Point> {
    simplify(points, defaults.simplify_tolerance, defaults.simplify_high_quality)
}
