//! Coordinate extraction.
//!
//! Flattens any geometry, feature or collection into its ordered list of points.

use turf_core::models::{
    Feature, FeatureCollection, GeoJson, Geometry, GeometryCollection, LineString,
    MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};
use turf_core::{Result, TurfError};

/// Values whose coordinates can be flattened into a point list.
pub trait CoordAll {
    /// Append every reachable point to `out`, in order.
    ///
    /// With `exclude_wrap_coord` the closing vertex of each polygon ring is dropped.
    fn collect_coords(&self, exclude_wrap_coord: bool, out: &mut Vec<Point>);

    fn coord_all(&self, exclude_wrap_coord: bool) -> Vec<Point> {
        let mut out = Vec::new();
        self.collect_coords(exclude_wrap_coord, &mut out);
        out
    }
}

/// Ordered list of every point reachable from `value`.
pub fn coord_all<T: CoordAll + ?Sized>(value: &T, exclude_wrap_coord: bool) -> Vec<Point> {
    value.coord_all(exclude_wrap_coord)
}

fn push_rings(rings: &[Vec<Point>], exclude_wrap_coord: bool, out: &mut Vec<Point>) {
    for ring in rings {
        let keep = if exclude_wrap_coord { ring.len().saturating_sub(1) } else { ring.len() };
        out.extend_from_slice(&ring[..keep]);
    }
}

impl CoordAll for Point {
    fn collect_coords(&self, _exclude_wrap_coord: bool, out: &mut Vec<Point>) {
        out.push(*self);
    }
}

impl CoordAll for MultiPoint {
    fn collect_coords(&self, _exclude_wrap_coord: bool, out: &mut Vec<Point>) {
        out.extend_from_slice(self.coordinates());
    }
}

impl CoordAll for LineString {
    fn collect_coords(&self, _exclude_wrap_coord: bool, out: &mut Vec<Point>) {
        out.extend_from_slice(self.coordinates());
    }
}

impl CoordAll for MultiLineString {
    fn collect_coords(&self, _exclude_wrap_coord: bool, out: &mut Vec<Point>) {
        for line in self.line_strings() {
            out.extend_from_slice(line.coordinates());
        }
    }
}

impl CoordAll for Polygon {
    fn collect_coords(&self, exclude_wrap_coord: bool, out: &mut Vec<Point>) {
        push_rings(self.coordinates(), exclude_wrap_coord, out);
    }
}

impl CoordAll for MultiPolygon {
    fn collect_coords(&self, exclude_wrap_coord: bool, out: &mut Vec<Point>) {
        for polygon in self.polygons() {
            push_rings(polygon.coordinates(), exclude_wrap_coord, out);
        }
    }
}

impl CoordAll for GeometryCollection {
    fn collect_coords(&self, exclude_wrap_coord: bool, out: &mut Vec<Point>) {
        // Explicit stack so deeply nested collections cannot overflow the call stack.
        let mut stack: Vec<&Geometry> = self.geometries().iter().rev().collect();
        while let Some(geometry) = stack.pop() {
            match geometry {
                Geometry::GeometryCollection(gc) => stack.extend(gc.geometries().iter().rev()),
                other => other.collect_coords(exclude_wrap_coord, out),
            }
        }
    }
}

impl CoordAll for Geometry {
    fn collect_coords(&self, exclude_wrap_coord: bool, out: &mut Vec<Point>) {
        match self {
            Geometry::Point(g) => g.collect_coords(exclude_wrap_coord, out),
            Geometry::MultiPoint(g) => g.collect_coords(exclude_wrap_coord, out),
            Geometry::LineString(g) => g.collect_coords(exclude_wrap_coord, out),
            Geometry::MultiLineString(g) => g.collect_coords(exclude_wrap_coord, out),
            Geometry::Polygon(g) => g.collect_coords(exclude_wrap_coord, out),
            Geometry::MultiPolygon(g) => g.collect_coords(exclude_wrap_coord, out),
            Geometry::GeometryCollection(g) => g.collect_coords(exclude_wrap_coord, out),
        }
    }
}

impl CoordAll for Feature {
    fn collect_coords(&self, exclude_wrap_coord: bool, out: &mut Vec<Point>) {
        if let Some(geometry) = self.geometry() {
            geometry.collect_coords(exclude_wrap_coord, out);
        }
    }
}

impl CoordAll for FeatureCollection {
    fn collect_coords(&self, exclude_wrap_coord: bool, out: &mut Vec<Point>) {
        for feature in self.features() {
            feature.collect_coords(exclude_wrap_coord, out);
        }
    }
}

impl CoordAll for GeoJson {
    fn collect_coords(&self, exclude_wrap_coord: bool, out: &mut Vec<Point>) {
        match self {
            GeoJson::Geometry(g) => g.collect_coords(exclude_wrap_coord, out),
            GeoJson::Feature(f) => f.collect_coords(exclude_wrap_coord, out),
            GeoJson::FeatureCollection(fc) => fc.collect_coords(exclude_wrap_coord, out),
        }
    }
}

/// The point of a feature whose geometry is exactly a Point.
pub fn get_coord(feature: &Feature) -> Result<Point> {
    match feature.geometry() {
        Some(Geometry::Point(point)) => Ok(*point),
        _ => Err(TurfError::PointRequired),
    }
}
