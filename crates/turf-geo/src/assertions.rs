//! Precondition checks on GeoJSON values.
//!
//! Each check takes the caller's `name`, used only to build the error message.

use turf_core::models::{Feature, FeatureCollection, GeoJsonObject};
use turf_core::{Result, TurfError};

/// Fail unless `value` is present and its type is `expected`.
pub fn geojson_type<T: GeoJsonObject + ?Sized>(
    value: Option<&T>,
    expected: &str,
    name: &str,
) -> Result<()> {
    if expected.is_empty() || name.is_empty() {
        return Err(TurfError::TypeAndNameRequired);
    }
    match value {
        Some(value) if value.type_name() == expected => Ok(()),
        other => Err(TurfError::InvalidInput {
            name: name.to_string(),
            expected: expected.to_string(),
            given: other.map_or("null", |v| v.type_name()).to_string(),
        }),
    }
}

fn check_feature(feature: Option<&Feature>, expected: &str, name: &str) -> Result<()> {
    let Some(geometry) = feature.and_then(Feature::geometry) else {
        return Err(TurfError::FeatureRequired { name: name.to_string() });
    };
    if geometry.type_name() != expected {
        return Err(TurfError::InvalidInput {
            name: name.to_string(),
            expected: expected.to_string(),
            given: geometry.type_name().to_string(),
        });
    }
    Ok(())
}

/// Fail unless `feature` carries a geometry of type `expected`.
pub fn feature_of(feature: Option<&Feature>, expected: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(TurfError::NameRequired { function: "featureOf" });
    }
    check_feature(feature, expected, name)
}

/// Fail unless every feature in `collection` carries a geometry of type `expected`.
pub fn collection_of(
    collection: Option<&FeatureCollection>,
    expected: &str,
    name: &str,
) -> Result<()> {
    if name.is_empty() {
        return Err(TurfError::NameRequired { function: "collectionOf" });
    }
    let Some(collection) = collection else {
        return Err(TurfError::FeatureCollectionRequired { name: name.to_string() });
    };
    collection
        .features()
        .iter()
        .try_for_each(|feature| check_feature(Some(feature), expected, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use turf_core::models::{GeoJson, Geometry, LineString, Point};

    #[test]
    fn test_geojson_type() {
        let point: GeoJson = Geometry::Point(Point::new(0.0, 0.0)).into();
        assert!(geojson_type(Some(&point), "Point", "myfn").is_ok());

        let err = geojson_type(Some(&point), "LineString", "myfn").unwrap_err();
        assert_eq!(err.to_string(), "Invalid input to myfn: must be a LineString, given Point");
    }

    #[test]
    fn test_geojson_type_requires_type_and_name() {
        let point = Point::new(0.0, 0.0);
        assert!(matches!(
            geojson_type(Some(&point), "", "myfn"),
            Err(TurfError::TypeAndNameRequired)
        ));
        assert!(matches!(
            geojson_type(Some(&point), "Point", ""),
            Err(TurfError::TypeAndNameRequired)
        ));
    }

    #[test]
    fn test_geojson_type_missing_value() {
        let err = geojson_type::<Point>(None, "Point", "myfn").unwrap_err();
        assert!(err.to_string().ends_with("given null"));
    }

    #[test]
    fn test_feature_of() {
        let feature = Feature::from_geometry(Point::new(0.0, 0.0));
        assert!(feature_of(Some(&feature), "Point", "myfn").is_ok());

        let err = feature_of(Some(&feature), "Polygon", "myfn").unwrap_err();
        assert_eq!(err.to_string(), "Invalid input to myfn: must be a Polygon, given Point");

        let err = feature_of(Some(&Feature::new(None)), "Point", "myfn").unwrap_err();
        assert_eq!(err.to_string(), "Invalid input to myfn, Feature with geometry required");

        let err = feature_of(Some(&feature), "Point", "").unwrap_err();
        assert_eq!(err.to_string(), "featureOf() requires a name");
    }

    #[test]
    fn test_collection_of() {
        let points = FeatureCollection::from_features(vec![
            Feature::from_geometry(Point::new(0.0, 0.0)),
            Feature::from_geometry(Point::new(1.0, 1.0)),
        ]);
        assert!(collection_of(Some(&points), "Point", "myfn").is_ok());
        assert!(collection_of(Some(&FeatureCollection::default()), "Point", "myfn").is_ok());

        let mixed = FeatureCollection::from_features(vec![
            Feature::from_geometry(Point::new(0.0, 0.0)),
            Feature::from_geometry(LineString::from_lng_lats(&[[0.0, 0.0], [1.0, 1.0]])),
        ]);
        let err = collection_of(Some(&mixed), "Point", "myfn").unwrap_err();
        assert!(err.to_string().ends_with("given LineString"));

        let err = collection_of(None, "Point", "myfn").unwrap_err();
        assert_eq!(err.to_string(), "Invalid input to myfn, FeatureCollection required");

        let err = collection_of(Some(&points), "Point", "").unwrap_err();
        assert_eq!(err.to_string(), "collectionOf() requires a name");
    }
}
