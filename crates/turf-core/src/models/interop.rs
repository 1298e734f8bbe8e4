//! Conversions between the canonical models and the `geojson` crate types.
//!
//! The `geojson` crate owns RFC 7946 text parsing and writing; these
//! conversions let callers move values across that boundary.
//!
//! A [`Point`] doubles as the coordinate type and has no bbox slot, so a
//! `bbox` member on a Point geometry is dropped when parsed. Boxes on every
//! other geometry, feature and collection are kept.

use crate::error::{Result, TurfError};
use crate::models::bbox::BoundingBox;
use crate::models::feature::{Feature, FeatureCollection, FeatureId, GeoJson};
use crate::models::geometry::{
    GeoJsonObject, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

fn to_position(point: &Point) -> geojson::Position {
    point.coordinates()
}

fn to_positions(points: &[Point]) -> Vec<geojson::Position> {
    points.iter().map(to_position).collect()
}

fn to_rings(rings: &[Vec<Point>]) -> Vec<Vec<geojson::Position>> {
    rings.iter().map(|ring| to_positions(ring)).collect()
}

fn to_bbox(bbox: Option<&BoundingBox>) -> Option<geojson::Bbox> {
    bbox.map(|b| b.to_array().to_vec())
}

fn from_position(position: &[f64]) -> Result<Point> {
    match position {
        [lon, lat] => Ok(Point::new(*lon, *lat)),
        [lon, lat, alt, ..] => Ok(Point::with_altitude(*lon, *lat, *alt)),
        _ => Err(TurfError::Serialization(format!(
            "position must have at least 2 elements, found {}",
            position.len()
        ))),
    }
}

fn from_positions(positions: &[geojson::Position]) -> Result<Vec<Point>> {
    positions.iter().map(|p| from_position(p)).collect()
}

fn from_rings(rings: &[Vec<geojson::Position>]) -> Result<Vec<Vec<Point>>> {
    rings.iter().map(|ring| from_positions(ring)).collect()
}

fn from_bbox(bbox: Option<&geojson::Bbox>) -> Result<Option<BoundingBox>> {
    match bbox.map(Vec::as_slice) {
        None => Ok(None),
        Some([west, south, east, north]) => {
            Ok(Some(BoundingBox::from_lng_lats(*west, *south, *east, *north)))
        }
        Some([west, south, low, east, north, high]) => Ok(Some(BoundingBox::new(
            Point::with_altitude(*west, *south, *low),
            Point::with_altitude(*east, *north, *high),
        ))),
        Some(other) => Err(TurfError::Serialization(format!(
            "bbox must have 4 or 6 elements, found {}",
            other.len()
        ))),
    }
}

impl From<&Geometry> for geojson::Geometry {
    fn from(geometry: &Geometry) -> Self {
        let value = match geometry {
            Geometry::Point(p) => geojson::Value::Point(to_position(p)),
            Geometry::MultiPoint(mp) => geojson::Value::MultiPoint(to_positions(mp.coordinates())),
            Geometry::LineString(ls) => geojson::Value::LineString(to_positions(ls.coordinates())),
            Geometry::MultiLineString(mls) => geojson::Value::MultiLineString(
                mls.line_strings().iter().map(|ls| to_positions(ls.coordinates())).collect(),
            ),
            Geometry::Polygon(poly) => geojson::Value::Polygon(to_rings(poly.coordinates())),
            Geometry::MultiPolygon(mp) => geojson::Value::MultiPolygon(
                mp.polygons().iter().map(|poly| to_rings(poly.coordinates())).collect(),
            ),
            Geometry::GeometryCollection(gc) => geojson::Value::GeometryCollection(
                gc.geometries().iter().map(geojson::Geometry::from).collect(),
            ),
        };
        let mut out = geojson::Geometry::new(value);
        out.bbox = to_bbox(geometry.bbox());
        out
    }
}

impl TryFrom<&geojson::Geometry> for Geometry {
    type Error = TurfError;

    fn try_from(geometry: &geojson::Geometry) -> Result<Self> {
        let bbox = from_bbox(geometry.bbox.as_ref())?;
        let converted: Geometry = match &geometry.value {
            geojson::Value::Point(p) => Geometry::Point(from_position(p)?),
            geojson::Value::MultiPoint(points) => {
                MultiPoint::new(from_positions(points)?).into()
            }
            geojson::Value::LineString(line) => LineString::new(from_positions(line)?).into(),
            geojson::Value::MultiLineString(lines) => MultiLineString::new(
                lines
                    .iter()
                    .map(|line| from_positions(line).map(LineString::new))
                    .collect::<Result<Vec<_>>>()?,
            )
            .into(),
            geojson::Value::Polygon(rings) => Polygon::new(from_rings(rings)?).into(),
            geojson::Value::MultiPolygon(polygons) => MultiPolygon::new(
                polygons
                    .iter()
                    .map(|rings| from_rings(rings).map(Polygon::new))
                    .collect::<Result<Vec<_>>>()?,
            )
            .into(),
            geojson::Value::GeometryCollection(geometries) => GeometryCollection::new(
                geometries.iter().map(Geometry::try_from).collect::<Result<Vec<_>>>()?,
            )
            .into(),
        };
        Ok(match (converted, bbox) {
            (converted, None) => converted,
            // Points carry no box of their own.
            (Geometry::Point(p), Some(_)) => Geometry::Point(p),
            (Geometry::MultiPoint(g), Some(b)) => g.with_bbox(b).into(),
            (Geometry::LineString(g), Some(b)) => g.with_bbox(b).into(),
            (Geometry::MultiLineString(g), Some(b)) => g.with_bbox(b).into(),
            (Geometry::Polygon(g), Some(b)) => g.with_bbox(b).into(),
            (Geometry::MultiPolygon(g), Some(b)) => g.with_bbox(b).into(),
            (Geometry::GeometryCollection(g), Some(b)) => g.with_bbox(b).into(),
        })
    }
}

impl From<&Feature> for geojson::Feature {
    fn from(feature: &Feature) -> Self {
        geojson::Feature {
            bbox: to_bbox(feature.bbox()),
            geometry: feature.geometry().map(geojson::Geometry::from),
            id: feature.id().map(|id| match id {
                FeatureId::String(s) => geojson::feature::Id::String(s.clone()),
                FeatureId::Number(n) => geojson::feature::Id::Number(n.clone()),
            }),
            properties: Some(feature.properties().clone()),
            foreign_members: None,
        }
    }
}

impl TryFrom<&geojson::Feature> for Feature {
    type Error = TurfError;

    fn try_from(feature: &geojson::Feature) -> Result<Self> {
        let geometry = feature.geometry.as_ref().map(Geometry::try_from).transpose()?;
        let mut out =
            Feature::new(geometry).with_properties(feature.properties.clone().unwrap_or_default());
        if let Some(id) = &feature.id {
            out = out.with_id(match id {
                geojson::feature::Id::String(s) => FeatureId::String(s.clone()),
                geojson::feature::Id::Number(n) => FeatureId::Number(n.clone()),
            });
        }
        if let Some(bbox) = from_bbox(feature.bbox.as_ref())? {
            out = out.with_bbox(bbox);
        }
        Ok(out)
    }
}

impl From<&FeatureCollection> for geojson::FeatureCollection {
    fn from(collection: &FeatureCollection) -> Self {
        geojson::FeatureCollection {
            bbox: to_bbox(collection.bbox()),
            features: collection.features().iter().map(geojson::Feature::from).collect(),
            foreign_members: None,
        }
    }
}

impl TryFrom<&geojson::FeatureCollection> for FeatureCollection {
    type Error = TurfError;

    fn try_from(collection: &geojson::FeatureCollection) -> Result<Self> {
        let features =
            collection.features.iter().map(Feature::try_from).collect::<Result<Vec<_>>>()?;
        let out = FeatureCollection::from_features(features);
        Ok(match from_bbox(collection.bbox.as_ref())? {
            Some(bbox) => out.with_bbox(bbox),
            None => out,
        })
    }
}

impl From<&GeoJson> for geojson::GeoJson {
    fn from(value: &GeoJson) -> Self {
        match value {
            GeoJson::Geometry(g) => geojson::GeoJson::Geometry(g.into()),
            GeoJson::Feature(f) => geojson::GeoJson::Feature(f.into()),
            GeoJson::FeatureCollection(fc) => geojson::GeoJson::FeatureCollection(fc.into()),
        }
    }
}

impl TryFrom<&geojson::GeoJson> for GeoJson {
    type Error = TurfError;

    fn try_from(value: &geojson::GeoJson) -> Result<Self> {
        Ok(match value {
            geojson::GeoJson::Geometry(g) => GeoJson::Geometry(g.try_into()?),
            geojson::GeoJson::Feature(f) => GeoJson::Feature(f.try_into()?),
            geojson::GeoJson::FeatureCollection(fc) => GeoJson::FeatureCollection(fc.try_into()?),
        })
    }
}

impl GeoJson {
    /// Parse GeoJSON text through the `geojson` crate.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let parsed: geojson::GeoJson = text
            .parse()
            .map_err(|e| TurfError::Serialization(format!("Failed to parse GeoJSON: {}", e)))?;
        GeoJson::try_from(&parsed)
    }

    /// Write the value as GeoJSON text.
    pub fn to_json_string(&self) -> String {
        geojson::GeoJson::from(self).to_string()
    }
}
