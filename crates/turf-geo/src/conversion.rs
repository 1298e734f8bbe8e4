//! Unit conversion and geometry reshaping helpers.

use crate::meta::CoordAll;
use std::f64::consts::PI;
use turf_core::models::{
    Feature, FeatureCollection, GeoJsonObject, Geometry, JsonObject, LineString,
    MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, Unit,
};
use turf_core::{Result, TurfError};

/// Convert a distance to radians of arc.
pub fn length_to_radians(distance: f64, unit: Unit) -> f64 {
    distance / unit.factor()
}

/// Convert radians of arc to a distance.
pub fn radians_to_length(radians: f64, unit: Unit) -> f64 {
    radians * unit.factor()
}

/// Convert a distance to degrees of arc.
pub fn length_to_degrees(distance: f64, unit: Unit) -> f64 {
    radians_to_degrees(length_to_radians(distance, unit))
}

/// Radians to degrees, wrapping the input to one turn first.
pub fn radians_to_degrees(radians: f64) -> f64 {
    let bearing = radians % (2.0 * PI);
    bearing * 180.0 / PI
}

/// Degrees to radians, wrapping the input to one turn first.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    let radians = degrees % 360.0;
    radians * PI / 180.0
}

/// Convert a distance between units.
///
/// Negative distances are rejected.
pub fn convert_length(distance: f64, from: Unit, to: Unit) -> Result<f64> {
    if distance < 0.0 {
        return Err(TurfError::NegativeDistance { distance });
    }
    Ok(radians_to_length(length_to_radians(distance, from), to))
}

/// Every vertex of `value` as its own Point feature. Closing ring vertices are skipped.
pub fn explode<T: CoordAll + ?Sized>(value: &T) -> FeatureCollection {
    value.coord_all(true).into_iter().map(Feature::from_geometry).collect()
}

fn rings_to_line(rings: &[Vec<Point>], properties: JsonObject) -> Feature {
    let geometry: Option<Geometry> = match rings {
        [] => None,
        [ring] => Some(LineString::new(ring.clone()).into()),
        _ => Some(
            MultiLineString::new(rings.iter().cloned().map(LineString::new).collect()).into(),
        ),
    };
    Feature::new(geometry).with_properties(properties)
}

/// Outline of a polygon: a LineString for a single ring, a MultiLineString otherwise.
///
/// A polygon without rings yields a feature without geometry.
pub fn polygon_to_line(polygon: &Polygon, properties: Option<JsonObject>) -> Feature {
    rings_to_line(polygon.coordinates(), properties.unwrap_or_default())
}

/// One outline feature per member polygon.
pub fn multi_polygon_to_lines(
    multi_polygon: &MultiPolygon,
    properties: Option<JsonObject>,
) -> FeatureCollection {
    let properties = properties.unwrap_or_default();
    multi_polygon
        .polygons()
        .iter()
        .map(|polygon| rings_to_line(polygon.coordinates(), properties.clone()))
        .collect()
}

fn geometry_name(feature: &Feature) -> String {
    feature.geometry().map(|g| g.type_name()).unwrap_or("null").to_string()
}

/// Outline of a Polygon feature, keeping the feature's properties unless replaced.
pub fn polygon_feature_to_line(
    feature: &Feature,
    properties: Option<JsonObject>,
) -> Result<Feature> {
    match feature.geometry() {
        Some(Geometry::Polygon(polygon)) => Ok(polygon_to_line(
            polygon,
            Some(properties.unwrap_or_else(|| feature.properties().clone())),
        )),
        _ => Err(TurfError::InvalidInput {
            name: "polygonToLine".to_string(),
            expected: "Polygon".to_string(),
            given: geometry_name(feature),
        }),
    }
}

/// Outlines of a MultiPolygon feature, keeping the feature's properties unless replaced.
pub fn multi_polygon_to_line(
    feature: &Feature,
    properties: Option<JsonObject>,
) -> Result<FeatureCollection> {
    match feature.geometry() {
        Some(Geometry::MultiPolygon(multi_polygon)) => Ok(multi_polygon_to_lines(
            multi_polygon,
            Some(properties.unwrap_or_else(|| feature.properties().clone())),
        )),
        _ => Err(TurfError::InvalidInput {
            name: "multiPolygonToLine".to_string(),
            expected: "MultiPolygon".to_string(),
            given: geometry_name(feature),
        }),
    }
}

/// Merge point-like, line-like and polygon-like features into one multi-geometry feature each.
///
/// Returns the input unchanged when none of its features can be grouped.
pub fn combine(collection: &FeatureCollection) -> Result<FeatureCollection> {
    if collection.features().is_empty() {
        return Err(TurfError::InvalidInput {
            name: "combine".to_string(),
            expected: "FeatureCollection with at least one Feature".to_string(),
            given: "empty FeatureCollection".to_string(),
        });
    }

    let mut points = Vec::new();
    let mut lines = Vec::new();
    let mut polygons = Vec::new();

    for feature in collection.features() {
        match feature.geometry() {
            Some(Geometry::Point(p)) => points.push(*p),
            Some(Geometry::MultiPoint(mp)) => points.extend_from_slice(mp.coordinates()),
            Some(Geometry::LineString(ls)) => lines.push(ls.clone()),
            Some(Geometry::MultiLineString(mls)) => {
                lines.extend_from_slice(mls.line_strings())
            }
            Some(Geometry::Polygon(poly)) => polygons.push(poly.clone()),
            Some(Geometry::MultiPolygon(mp)) => polygons.extend_from_slice(mp.polygons()),
            Some(Geometry::GeometryCollection(_)) | None => {
                tracing::debug!("combine: skipping feature without a groupable geometry");
            }
        }
    }

    let mut combined = Vec::new();
    if !points.is_empty() {
        combined.push(Feature::from_geometry(MultiPoint::new(points)));
    }
    if !lines.is_empty() {
        combined.push(Feature::from_geometry(MultiLineString::new(lines)));
    }
    if !polygons.is_empty() {
        combined.push(Feature::from_geometry(MultiPolygon::new(polygons)));
    }

    if combined.is_empty() {
        Ok(collection.clone())
    } else {
        Ok(FeatureCollection::from_features(combined))
    }
}
