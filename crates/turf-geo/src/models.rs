//! Bridges between the `turf-core` value model and the `geo` crate.
//!
//! `geo` types are planar and two-dimensional: altitudes are dropped on the way
//! out and absent on the way back.

use geo::Geometry as GeoGeometry;
use turf_core::models::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};

fn to_geo_coord(point: &Point) -> geo::Coord {
    geo::Coord { x: point.longitude(), y: point.latitude() }
}

fn to_geo_line(points: &[Point]) -> geo::LineString {
    geo::LineString::new(points.iter().map(to_geo_coord).collect())
}

fn to_geo_polygon(polygon: &Polygon) -> geo::Polygon {
    match polygon.outer() {
        Some(exterior) => geo::Polygon::new(
            to_geo_line(exterior),
            polygon.holes().iter().map(|hole| to_geo_line(hole)).collect(),
        ),
        None => geo::Polygon::new(geo::LineString::new(vec![]), vec![]),
    }
}

/// Planar `geo` equivalent of a geometry.
pub fn to_geo_geometry(geom: &Geometry) -> GeoGeometry {
    match geom {
        Geometry::Point(p) => GeoGeometry::Point(geo::Point::new(p.longitude(), p.latitude())),
        Geometry::MultiPoint(mp) => GeoGeometry::MultiPoint(geo::MultiPoint::new(
            mp.coordinates().iter().map(|p| geo::Point::new(p.longitude(), p.latitude())).collect(),
        )),
        Geometry::LineString(ls) => GeoGeometry::LineString(to_geo_line(ls.coordinates())),
        Geometry::MultiLineString(mls) => GeoGeometry::MultiLineString(geo::MultiLineString::new(
            mls.line_strings().iter().map(|ls| to_geo_line(ls.coordinates())).collect(),
        )),
        Geometry::Polygon(poly) => GeoGeometry::Polygon(to_geo_polygon(poly)),
        Geometry::MultiPolygon(mp) => GeoGeometry::MultiPolygon(geo::MultiPolygon::new(
            mp.polygons().iter().map(to_geo_polygon).collect(),
        )),
        Geometry::GeometryCollection(gc) => GeoGeometry::GeometryCollection(
            geo::GeometryCollection(gc.geometries().iter().map(to_geo_geometry).collect()),
        ),
    }
}

fn from_geo_line(line: &geo::LineString) -> Vec<Point> {
    line.coords().map(|c| Point::new(c.x, c.y)).collect()
}

fn from_geo_polygon(polygon: &geo::Polygon) -> Polygon {
    let mut rings = Vec::with_capacity(polygon.interiors().len() + 1);
    rings.push(from_geo_line(polygon.exterior()));
    rings.extend(polygon.interiors().iter().map(from_geo_line));
    Polygon::new(rings)
}

/// Geometry equivalent of a `geo` value.
///
/// `Line` becomes a two-point LineString; `Rect` and `Triangle` become Polygons.
pub fn from_geo_geometry(geom: &GeoGeometry) -> Geometry {
    match geom {
        GeoGeometry::Point(p) => Point::new(p.x(), p.y()).into(),
        GeoGeometry::Line(l) => {
            LineString::new(vec![Point::new(l.start.x, l.start.y), Point::new(l.end.x, l.end.y)])
                .into()
        }
        GeoGeometry::LineString(ls) => LineString::new(from_geo_line(ls)).into(),
        GeoGeometry::Polygon(p) => from_geo_polygon(p).into(),
        GeoGeometry::MultiPoint(mp) => {
            MultiPoint::new(mp.iter().map(|p| Point::new(p.x(), p.y())).collect()).into()
        }
        GeoGeometry::MultiLineString(mls) => MultiLineString::new(
            mls.iter().map(|ls| LineString::new(from_geo_line(ls))).collect(),
        )
        .into(),
        GeoGeometry::MultiPolygon(mp) => {
            MultiPolygon::new(mp.iter().map(from_geo_polygon).collect()).into()
        }
        GeoGeometry::GeometryCollection(gc) => {
            GeometryCollection::new(gc.iter().map(from_geo_geometry).collect()).into()
        }
        GeoGeometry::Rect(r) => from_geo_polygon(&r.to_polygon()).into(),
        GeoGeometry::Triangle(t) => from_geo_polygon(&t.to_polygon()).into(),
    }
}

/// Access to `geo` algorithms from a turf geometry.
pub trait GeometryExt {
    fn to_geo(&self) -> GeoGeometry;

    /// Planar centroid, `None` for empty geometries
    fn centroid(&self) -> Option<Point>;
}

impl GeometryExt for Geometry {
    fn to_geo(&self) -> GeoGeometry {
        to_geo_geometry(self)
    }

    fn centroid(&self) -> Option<Point> {
        use geo::algorithm::centroid::Centroid;
        self.to_geo().centroid().map(|p| Point::new(p.x(), p.y()))
    }
}
