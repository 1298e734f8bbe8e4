//! Canonical geometry values consumed and produced by every turf algorithm.
//!
//! All values are immutable once built: constructors take ownership of their
//! coordinates and accessors only hand out shared references.

use crate::models::bbox::BoundingBox;
use std::hash::{Hash, Hasher};

/// Geometry type classification, mirroring the GeoJSON `type` member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryType {
    pub const fn as_str(self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::LineString => "LineString",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        }
    }
}

/// Access to the GeoJSON `type` and `bbox` members of a value.
pub trait GeoJsonObject {
    /// The GeoJSON type name, e.g. `"Polygon"` or `"FeatureCollection"`.
    fn type_name(&self) -> &'static str;

    /// Explicit bounding box carried by the value, if any.
    fn bbox(&self) -> Option<&BoundingBox>;
}

/// A position on the sphere in degrees, with optional altitude.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    longitude: f64,
    latitude: f64,
    altitude: Option<f64>,
}

impl Point {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude, altitude: None }
    }

    pub fn with_altitude(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Self { longitude, latitude, altitude: Some(altitude) }
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn altitude(&self) -> Option<f64> {
        self.altitude
    }

    /// `[longitude, latitude]` or `[longitude, latitude, altitude]`.
    pub fn coordinates(&self) -> Vec<f64> {
        match self.altitude {
            Some(altitude) => vec![self.longitude, self.latitude, altitude],
            None => vec![self.longitude, self.latitude],
        }
    }

    fn key(&self) -> (u64, u64, Option<u64>) {
        (
            canonical_bits(self.longitude),
            canonical_bits(self.latitude),
            self.altitude.map(canonical_bits),
        )
    }
}

// -0.0 folds into 0.0 and every NaN into one payload so equality and hashing agree.
fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

fn points_from_lng_lats(coords: &[[f64; 2]]) -> Vec<Point> {
    coords.iter().map(|c| Point::new(c[0], c[1])).collect()
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPoint {
    coordinates: Vec<Point>,
    bbox: Option<BoundingBox>,
}

impl MultiPoint {
    pub fn new(coordinates: Vec<Point>) -> Self {
        Self { coordinates, bbox: None }
    }

    pub fn from_lng_lats(coords: &[[f64; 2]]) -> Self {
        Self::new(points_from_lng_lats(coords))
    }

    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn coordinates(&self) -> &[Point] {
        &self.coordinates
    }
}

/// Ordered sequence of points. Algorithms that need a real line check for at
/// least two points themselves; construction does not validate.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString {
    coordinates: Vec<Point>,
    bbox: Option<BoundingBox>,
}

impl LineString {
    pub fn new(coordinates: Vec<Point>) -> Self {
        Self { coordinates, bbox: None }
    }

    pub fn from_lng_lats(coords: &[[f64; 2]]) -> Self {
        Self::new(points_from_lng_lats(coords))
    }

    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn coordinates(&self) -> &[Point] {
        &self.coordinates
    }

    pub fn into_coordinates(self) -> Vec<Point> {
        self.coordinates
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiLineString {
    line_strings: Vec<LineString>,
    bbox: Option<BoundingBox>,
}

impl MultiLineString {
    pub fn new(line_strings: Vec<LineString>) -> Self {
        Self { line_strings, bbox: None }
    }

    pub fn from_lng_lats(lines: Vec<Vec<[f64; 2]>>) -> Self {
        Self::new(lines.iter().map(|line| LineString::from_lng_lats(line)).collect())
    }

    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }
}

/// Ring 0 is the outer boundary, rings 1..n are holes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    rings: Vec<Vec<Point>>,
    bbox: Option<BoundingBox>,
}

impl Polygon {
    pub fn new(rings: Vec<Vec<Point>>) -> Self {
        Self { rings, bbox: None }
    }

    pub fn from_lng_lats(rings: Vec<Vec<[f64; 2]>>) -> Self {
        Self::new(rings.iter().map(|ring| points_from_lng_lats(ring)).collect())
    }

    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    /// Every ring, outer boundary first.
    pub fn coordinates(&self) -> &[Vec<Point>] {
        &self.rings
    }

    pub fn outer(&self) -> Option<&[Point]> {
        self.rings.first().map(Vec::as_slice)
    }

    pub fn holes(&self) -> &[Vec<Point>] {
        self.rings.get(1..).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    bbox: Option<BoundingBox>,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons, bbox: None }
    }

    pub fn from_lng_lats(polygons: Vec<Vec<Vec<[f64; 2]>>>) -> Self {
        Self::new(polygons.into_iter().map(Polygon::from_lng_lats).collect())
    }

    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }
}

/// Heterogeneous, possibly nested, list of geometries.
///
/// Dropping and comparing walk nested members iteratively, so nesting depth is
/// bounded by memory rather than the call stack. `Clone` and `Debug` still
/// recurse once per level.
#[derive(Debug, Clone, Default)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
    bbox: Option<BoundingBox>,
}

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self { geometries, bbox: None }
    }

    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }
}

impl PartialEq for GeometryCollection {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if left.bbox != right.bbox || left.geometries.len() != right.geometries.len() {
                return false;
            }
            for pair in left.geometries.iter().zip(&right.geometries) {
                match pair {
                    (Geometry::GeometryCollection(a), Geometry::GeometryCollection(b)) => {
                        pending.push((a, b))
                    }
                    (a, b) if a != b => return false,
                    _ => {}
                }
            }
        }
        true
    }
}

impl Drop for GeometryCollection {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.geometries);
        while let Some(geometry) = pending.pop() {
            // Members are emptied before they drop, so no drop recurses more than one level.
            if let Geometry::GeometryCollection(mut nested) = geometry {
                pending.append(&mut nested.geometries);
            }
        }
    }
}

/// Closed set of geometry kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    MultiLineString(MultiLineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// Get the geometry type
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }
}

macro_rules! impl_geometry_variant {
    ($($kind:ident),*) => {
        $(
            impl From<$kind> for Geometry {
                fn from(value: $kind) -> Self {
                    Geometry::$kind(value)
                }
            }

            impl GeoJsonObject for $kind {
                fn type_name(&self) -> &'static str {
                    GeometryType::$kind.as_str()
                }

                fn bbox(&self) -> Option<&BoundingBox> {
                    self.bbox.as_ref()
                }
            }
        )*
    };
}

impl_geometry_variant!(
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection
);

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Geometry::Point(value)
    }
}

impl GeoJsonObject for Point {
    fn type_name(&self) -> &'static str {
        GeometryType::Point.as_str()
    }

    fn bbox(&self) -> Option<&BoundingBox> {
        None
    }
}

impl GeoJsonObject for Geometry {
    fn type_name(&self) -> &'static str {
        self.geometry_type().as_str()
    }

    fn bbox(&self) -> Option<&BoundingBox> {
        match self {
            Geometry::Point(g) => g.bbox(),
            Geometry::MultiPoint(g) => g.bbox(),
            Geometry::LineString(g) => g.bbox(),
            Geometry::MultiLineString(g) => g.bbox(),
            Geometry::Polygon(g) => g.bbox(),
            Geometry::MultiPolygon(g) => g.bbox(),
            Geometry::GeometryCollection(g) => g.bbox(),
        }
    }
}
