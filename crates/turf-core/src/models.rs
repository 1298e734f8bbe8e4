pub mod bbox;
pub mod feature;
pub mod geometry;
pub mod interop;
pub mod unit;

pub use bbox::BoundingBox;
pub use feature::{Feature, FeatureCollection, FeatureId, GeoJson, JsonObject};
pub use geometry::{
    GeoJsonObject, Geometry, GeometryCollection, GeometryType, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};
pub use unit::Unit;
