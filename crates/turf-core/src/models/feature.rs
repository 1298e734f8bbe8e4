use crate::models::bbox::BoundingBox;
use crate::models::geometry::{GeoJsonObject, Geometry};

/// Opaque property bag attached to a feature.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Feature identifier, either a string or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureId {
    String(String),
    Number(serde_json::Number),
}

impl From<&str> for FeatureId {
    fn from(value: &str) -> Self {
        FeatureId::String(value.to_string())
    }
}

impl From<String> for FeatureId {
    fn from(value: String) -> Self {
        FeatureId::String(value)
    }
}

impl From<u64> for FeatureId {
    fn from(value: u64) -> Self {
        FeatureId::Number(value.into())
    }
}

/// A geometry plus a property bag and an optional identifier.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feature {
    id: Option<FeatureId>,
    geometry: Option<Geometry>,
    properties: JsonObject,
    bbox: Option<BoundingBox>,
}

impl Feature {
    pub fn new(geometry: Option<Geometry>) -> Self {
        Self { geometry, ..Default::default() }
    }

    pub fn from_geometry(geometry: impl Into<Geometry>) -> Self {
        Self::new(Some(geometry.into()))
    }

    pub fn with_properties(mut self, properties: JsonObject) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_id(mut self, id: impl Into<FeatureId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn id(&self) -> Option<&FeatureId> {
        self.id.as_ref()
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    pub fn properties(&self) -> &JsonObject {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties.get(key)
    }
}

impl GeoJsonObject for Feature {
    fn type_name(&self) -> &'static str {
        "Feature"
    }

    fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

/// Ordered list of features.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureCollection {
    features: Vec<Feature>,
    bbox: Option<BoundingBox>,
}

impl FeatureCollection {
    pub fn from_features(features: Vec<Feature>) -> Self {
        Self { features, bbox: None }
    }

    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn into_features(self) -> Vec<Feature> {
        self.features
    }
}

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self::from_features(iter.into_iter().collect())
    }
}

impl GeoJsonObject for FeatureCollection {
    fn type_name(&self) -> &'static str {
        "FeatureCollection"
    }

    fn bbox(&self) -> Option<&BoundingBox> {
        self.bbox.as_ref()
    }
}

/// Any top-level GeoJSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoJson {
    Geometry(Geometry),
    Feature(Feature),
    FeatureCollection(FeatureCollection),
}

impl From<Geometry> for GeoJson {
    fn from(value: Geometry) -> Self {
        GeoJson::Geometry(value)
    }
}

impl From<Feature> for GeoJson {
    fn from(value: Feature) -> Self {
        GeoJson::Feature(value)
    }
}

impl From<FeatureCollection> for GeoJson {
    fn from(value: FeatureCollection) -> Self {
        GeoJson::FeatureCollection(value)
    }
}

impl GeoJsonObject for GeoJson {
    fn type_name(&self) -> &'static str {
        match self {
            GeoJson::Geometry(g) => g.type_name(),
            GeoJson::Feature(f) => f.type_name(),
            GeoJson::FeatureCollection(fc) => fc.type_name(),
        }
    }

    fn bbox(&self) -> Option<&BoundingBox> {
        match self {
            GeoJson::Geometry(g) => g.bbox(),
            GeoJson::Feature(f) => f.bbox(),
            GeoJson::FeatureCollection(fc) => fc.bbox(),
        }
    }
}
