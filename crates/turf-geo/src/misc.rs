//! Line processing: segment intersection, nearest point on a line and line slicing.

use crate::assertions::feature_of;
use crate::measurement::{bearing, destination, distance};
use serde_json::json;
use std::collections::HashSet;
use turf_core::models::{Feature, Geometry, JsonObject, LineString, Point, Unit};
use turf_core::{Result, TurfError};

/// Intersection of the infinite lines through two segments.
///
/// `ua` and `ub` are the intersection parameters along the first and second segment:
/// 0 at the segment start, 1 at its end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineIntersectsResult {
    pub point: Point,
    pub ua: f64,
    pub ub: f64,
}

impl LineIntersectsResult {
    /// Intersection lies strictly inside the first segment.
    pub fn on_line1(&self) -> bool {
        self.ua > 0.0 && self.ua < 1.0
    }

    /// Intersection lies strictly inside the second segment.
    pub fn on_line2(&self) -> bool {
        self.ub > 0.0 && self.ub < 1.0
    }

    /// Intersection lies on both segments, endpoints included.
    pub fn touches_both(&self) -> bool {
        (0.0..=1.0).contains(&self.ua) && (0.0..=1.0).contains(&self.ub)
    }
}

/// Intersect segment `a1`-`a2` with segment `b1`-`b2`, treating coordinates as planar.
///
/// Parallel and collinear segments yield `None`, except two degenerate segments
/// collapsed onto the same point.
pub fn line_intersects(
    a1: &Point,
    a2: &Point,
    b1: &Point,
    b2: &Point,
) -> Option<LineIntersectsResult> {
    let (a1x, a1y, a2x, a2y) = (a1.longitude(), a1.latitude(), a2.longitude(), a2.latitude());
    let (b1x, b1y, b2x, b2y) = (b1.longitude(), b1.latitude(), b2.longitude(), b2.latitude());

    let denominator = (b2y - b1y) * (a2x - a1x) - (b2x - b1x) * (a2y - a1y);
    if denominator == 0.0 {
        if a1 == a2 && b1 == b2 && a1 == b1 {
            return Some(LineIntersectsResult { point: *a1, ua: 0.0, ub: 0.0 });
        }
        return None;
    }

    let var_a = a1y - b1y;
    let var_b = a1x - b1x;
    let ua = ((b2x - b1x) * var_a - (b2y - b1y) * var_b) / denominator;
    let ub = ((a2x - a1x) * var_a - (a2y - a1y) * var_b) / denominator;

    Some(LineIntersectsResult {
        point: Point::new(a1x + ua * (a2x - a1x), a1y + ua * (a2y - a1y)),
        ua,
        ub,
    })
}

fn push_segments(path: &[Point], out: &mut Vec<(Point, Point)>) {
    out.extend(path.windows(2).map(|pair| (pair[0], pair[1])));
}

fn segments(geometry: &Geometry) -> Vec<(Point, Point)> {
    let mut out = Vec::new();
    let mut stack = vec![geometry];
    while let Some(geometry) = stack.pop() {
        match geometry {
            Geometry::LineString(line) => push_segments(line.coordinates(), &mut out),
            Geometry::MultiLineString(multi) => {
                for line in multi.line_strings() {
                    push_segments(line.coordinates(), &mut out);
                }
            }
            Geometry::Polygon(polygon) => {
                for ring in polygon.coordinates() {
                    push_segments(ring, &mut out);
                }
            }
            Geometry::MultiPolygon(multi) => {
                for ring in multi.polygons().iter().flat_map(|p| p.coordinates()) {
                    push_segments(ring, &mut out);
                }
            }
            Geometry::GeometryCollection(gc) => stack.extend(gc.geometries().iter().rev()),
            Geometry::Point(_) | Geometry::MultiPoint(_) => {
                tracing::trace!("lineIntersect: point geometry has no segments");
            }
        }
    }
    out
}

/// Every point where a segment of `line1` meets a segment of `line2`.
///
/// Brute force over all segment pairs; segment endpoints count as intersections and
/// each point is reported once, in discovery order.
pub fn line_intersect(line1: &Geometry, line2: &Geometry) -> Vec<Point> {
    let first = segments(line1);
    let second = segments(line2);

    let mut seen = HashSet::new();
    let mut points = Vec::new();
    for (a1, a2) in &first {
        for (b1, b2) in &second {
            let Some(hit) = line_intersects(a1, a2, b1, b2) else {
                continue;
            };
            if hit.touches_both() && seen.insert(hit.point) {
                points.push(hit.point);
            }
        }
    }
    points
}

/// Closest point on a line to some query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPointOnLine {
    pub point: Point,
    /// Distance from the query point, in the unit requested.
    pub distance: f64,
    /// Index of the segment the point lies on.
    pub index: usize,
}

impl NearestPointOnLine {
    /// Point feature carrying `dist` and `index` properties.
    pub fn into_feature(self) -> Feature {
        let mut properties = JsonObject::new();
        properties.insert("dist".to_string(), json!(self.distance));
        properties.insert("index".to_string(), json!(self.index));
        Feature::from_geometry(self.point).with_properties(properties)
    }
}

/// Snap `pt` onto the line through `coords`.
///
/// For each segment the start vertex, the end vertex and the foot of the perpendicular
/// from `pt` are candidates; the first strictly closer candidate wins.
pub fn nearest_point_on_line(pt: &Point, coords: &[Point], unit: Unit) -> Result<NearestPointOnLine> {
    if coords.len() < 2 {
        return Err(TurfError::TooFewCoordinates {
            operation: "nearestPointOnLine",
            required: 2,
            found: coords.len(),
        });
    }

    let mut closest = NearestPointOnLine {
        point: Point::new(f64::INFINITY, f64::INFINITY),
        distance: f64::INFINITY,
        index: 0,
    };

    for (i, pair) in coords.windows(2).enumerate() {
        let (start, stop) = (&pair[0], &pair[1]);
        let start_dist = distance(pt, start, unit);
        let stop_dist = distance(pt, stop, unit);

        let height = start_dist.max(stop_dist);
        let direction = bearing(start, stop);
        let perpendicular1 = destination(pt, height, direction + 90.0, unit);
        let perpendicular2 = destination(pt, height, direction - 90.0, unit);

        let foot = line_intersects(&perpendicular1, &perpendicular2, start, stop)
            .filter(|hit| hit.on_line1() && hit.on_line2())
            .map(|hit| (hit.point, distance(pt, &hit.point, unit)));

        if start_dist < closest.distance {
            closest = NearestPointOnLine { point: *start, distance: start_dist, index: i };
        }
        if stop_dist < closest.distance {
            closest = NearestPointOnLine { point: *stop, distance: stop_dist, index: i };
        }
        if let Some((point, foot_dist)) = foot {
            if foot_dist < closest.distance {
                closest = NearestPointOnLine { point, distance: foot_dist, index: i };
            }
        }
    }

    Ok(closest)
}

/// Section of the line between the points nearest to `start_pt` and `stop_pt`.
pub fn line_slice(start_pt: &Point, stop_pt: &Point, coords: &[Point]) -> Result<LineString> {
    if coords.len() < 2 {
        return Err(TurfError::TooFewCoordinates {
            operation: "lineSlice",
            required: 2,
            found: coords.len(),
        });
    }
    if start_pt == stop_pt {
        return Err(TurfError::SliceEndpointsEqual);
    }

    let start_vertex = nearest_point_on_line(start_pt, coords, Unit::default())?;
    let stop_vertex = nearest_point_on_line(stop_pt, coords, Unit::default())?;
    let (first, last) = if start_vertex.index <= stop_vertex.index {
        (start_vertex, stop_vertex)
    } else {
        (stop_vertex, start_vertex)
    };

    let mut points = Vec::with_capacity(last.index - first.index + 2);
    points.push(first.point);
    points.extend_from_slice(&coords[first.index + 1..last.index + 1]);
    points.push(last.point);
    Ok(LineString::new(points))
}

/// [`line_slice`] on a feature whose geometry must be a LineString.
pub fn line_slice_feature(start_pt: &Point, stop_pt: &Point, line: &Feature) -> Result<LineString> {
    feature_of(Some(line), "LineString", "lineSlice")?;
    match line.geometry() {
        Some(Geometry::LineString(ls)) => line_slice(start_pt, stop_pt, ls.coordinates()),
        _ => Err(TurfError::FeatureRequired { name: "lineSlice".to_string() }),
    }
}

/// Per-segment distances of a line, computed once and reused across slices.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentDistances {
    distances: Vec<f64>,
    unit: Unit,
}

impl SegmentDistances {
    /// Measure every segment of `coords` in `unit`.
    pub fn compute(coords: &[Point], unit: Unit) -> Self {
        let distances =
            coords.windows(2).map(|pair| distance(&pair[0], &pair[1], unit)).collect();
        Self { distances, unit }
    }

    /// Wrap distances measured elsewhere. Entry `i` is the length of segment `i`.
    pub fn from_distances(distances: Vec<f64>, unit: Unit) -> Self {
        Self { distances, unit }
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Total line length.
    pub fn total(&self) -> f64 {
        self.distances.iter().sum()
    }
}

/// Section of the line between two distances measured from its start.
pub fn line_slice_along(
    coords: &[Point],
    start_dist: f64,
    stop_dist: f64,
    unit: Unit,
) -> Result<LineString> {
    line_slice_along_with(coords, start_dist, stop_dist, &SegmentDistances::compute(coords, unit))
}

/// [`line_slice_along`] with precomputed segment distances, in the segments' unit.
///
/// Distances are not reordered: a stop distance before the start distance is
/// rejected with [`TurfError::SliceDistancesReversed`].
pub fn line_slice_along_with(
    coords: &[Point],
    start_dist: f64,
    stop_dist: f64,
    segments: &SegmentDistances,
) -> Result<LineString> {
    let n = coords.len();
    if n < 2 {
        return Err(TurfError::TooFewCoordinates {
            operation: "lineSliceAlong",
            required: 2,
            found: n,
        });
    }
    if segments.len() != n - 1 {
        return Err(TurfError::DistanceCountMismatch { expected: n - 1, found: segments.len() });
    }
    if start_dist == stop_dist {
        return Err(TurfError::SliceDistancesEqual);
    }
    if start_dist < 0.0 {
        return Err(TurfError::NegativeDistance { distance: start_dist });
    }
    if stop_dist < 0.0 {
        return Err(TurfError::NegativeDistance { distance: stop_dist });
    }
    if stop_dist < start_dist {
        return Err(TurfError::SliceDistancesReversed { start: start_dist, stop: stop_dist });
    }
    let length = segments.total();
    if start_dist >= length {
        return Err(TurfError::StartBeyondLine { start: start_dist, length });
    }

    let unit = segments.unit();
    let mut slice = Vec::with_capacity(2);
    let mut travelled = 0.0;

    for i in 0..n {
        if travelled > start_dist && slice.is_empty() {
            let overshot = start_dist - travelled;
            let direction = bearing(&coords[i], &coords[i - 1]) - 180.0;
            slice.push(destination(&coords[i], overshot, direction, unit));
        }

        if travelled >= stop_dist {
            let overshot = stop_dist - travelled;
            if overshot == 0.0 {
                slice.push(coords[i]);
            } else {
                let direction = bearing(&coords[i], &coords[i - 1]) - 180.0;
                slice.push(destination(&coords[i], overshot, direction, unit));
            }
            return Ok(LineString::new(slice));
        }

        if travelled >= start_dist {
            slice.push(coords[i]);
        }

        if i == n - 1 {
            break;
        }
        travelled += segments.distances()[i];
    }

    Ok(LineString::new(slice))
}

/// [`line_slice_along`] on a feature whose geometry must be a LineString.
pub fn line_slice_along_feature(
    line: &Feature,
    start_dist: f64,
    stop_dist: f64,
    unit: Unit,
) -> Result<LineString> {
    feature_of(Some(line), "LineString", "lineSliceAlong")?;
    match line.geometry() {
        Some(Geometry::LineString(ls)) => {
            line_slice_along(ls.coordinates(), start_dist, stop_dist, unit)
        }
        _ => Err(TurfError::FeatureRequired { name: "lineSliceAlong".to_string() }),
    }
}
