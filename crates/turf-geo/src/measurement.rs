//! Spherical measurement: bearing, destination, distance, lengths, bounding boxes and area.
//!
//! All formulas treat the Earth as a sphere. Distances are expressed in the
//! caller's [`Unit`]; bearings are degrees in the range -180 to 180.

use crate::conversion::{length_to_radians, radians_to_length};
use crate::meta::CoordAll;
use turf_core::models::{
    BoundingBox, Feature, FeatureCollection, FeatureId, GeoJsonObject, Geometry,
    GeometryCollection, JsonObject, LineString, MultiLineString, MultiPolygon, Point, Polygon,
    Unit,
};
use turf_core::{Result, TurfError};

/// Equatorial radius in meters used by the area approximation.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Initial bearing from `from` to `to`, in degrees.
pub fn bearing(from: &Point, to: &Point) -> f64 {
    let lon1 = from.longitude().to_radians();
    let lon2 = to.longitude().to_radians();
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();

    let a = (lon2 - lon1).sin() * lat2.cos();
    let b = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * (lon2 - lon1).cos();

    a.atan2(b).to_degrees()
}

/// Point reached by travelling `distance` from `point` along `bearing` degrees.
///
/// A negative distance travels in the opposite direction.
pub fn destination(point: &Point, distance: f64, bearing: f64, unit: Unit) -> Point {
    let longitude1 = point.longitude().to_radians();
    let latitude1 = point.latitude().to_radians();
    let bearing_rad = bearing.to_radians();
    let radians = length_to_radians(distance, unit);

    let latitude2 = (latitude1.sin() * radians.cos()
        + latitude1.cos() * radians.sin() * bearing_rad.cos())
    .asin();
    let longitude2 = longitude1
        + (bearing_rad.sin() * radians.sin() * latitude1.cos())
            .atan2(radians.cos() - latitude1.sin() * latitude2.sin());

    Point::new(longitude2.to_degrees(), latitude2.to_degrees())
}

/// Great-circle distance between two points using the Haversine formula.
pub fn distance(from: &Point, to: &Point, unit: Unit) -> f64 {
    let d_lat = (to.latitude() - from.latitude()).to_radians();
    let d_lon = (to.longitude() - from.longitude()).to_radians();
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + (d_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();

    radians_to_length(2.0 * a.sqrt().atan2((1.0 - a).sqrt()), unit)
}

/// Point halfway between `from` and `to` along the initial bearing.
pub fn midpoint(from: &Point, to: &Point) -> Point {
    let dist = distance(from, to, Unit::Miles);
    let heading = bearing(from, to);
    destination(from, dist / 2.0, heading, Unit::Miles)
}

/// Sum of the distances between consecutive points.
pub fn path_length(points: &[Point], unit: Unit) -> f64 {
    points.windows(2).map(|pair| distance(&pair[0], &pair[1], unit)).sum()
}

/// Values with a linear length. Points have none; polygons count every ring.
pub trait Length {
    fn length(&self, unit: Unit) -> f64;
}

/// Length of a line, polygon outline, multi-geometry, feature or collection.
pub fn length<T: Length + ?Sized>(value: &T, unit: Unit) -> f64 {
    value.length(unit)
}

impl Length for LineString {
    fn length(&self, unit: Unit) -> f64 {
        path_length(self.coordinates(), unit)
    }
}

impl Length for MultiLineString {
    fn length(&self, unit: Unit) -> f64 {
        self.line_strings().iter().map(|line| line.length(unit)).sum()
    }
}

impl Length for Polygon {
    fn length(&self, unit: Unit) -> f64 {
        self.coordinates().iter().map(|ring| path_length(ring, unit)).sum()
    }
}

impl Length for MultiPolygon {
    fn length(&self, unit: Unit) -> f64 {
        self.polygons().iter().map(|polygon| polygon.length(unit)).sum()
    }
}

impl Length for GeometryCollection {
    fn length(&self, unit: Unit) -> f64 {
        sum_flattened(self, |geometry| geometry.length(unit))
    }
}

impl Length for Geometry {
    fn length(&self, unit: Unit) -> f64 {
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => 0.0,
            Geometry::LineString(g) => g.length(unit),
            Geometry::MultiLineString(g) => g.length(unit),
            Geometry::Polygon(g) => g.length(unit),
            Geometry::MultiPolygon(g) => g.length(unit),
            Geometry::GeometryCollection(g) => g.length(unit),
        }
    }
}

impl Length for Feature {
    fn length(&self, unit: Unit) -> f64 {
        self.geometry().map_or(0.0, |geometry| geometry.length(unit))
    }
}

impl Length for FeatureCollection {
    fn length(&self, unit: Unit) -> f64 {
        self.features().iter().map(|feature| feature.length(unit)).sum()
    }
}

// Applies `measure` to every non-collection member, walking nested collections iteratively.
fn sum_flattened(collection: &GeometryCollection, measure: impl Fn(&Geometry) -> f64) -> f64 {
    let mut stack: Vec<&Geometry> = collection.geometries().iter().collect();
    let mut total = 0.0;
    while let Some(geometry) = stack.pop() {
        match geometry {
            Geometry::GeometryCollection(gc) => stack.extend(gc.geometries()),
            other => total += measure(other),
        }
    }
    total
}

/// Point `target` distance along `coords`.
///
/// Returns the first point for a non-positive distance and the last point when the
/// distance exceeds the path length.
pub fn along(coords: &[Point], target: f64, unit: Unit) -> Result<Point> {
    let (Some(first), Some(last)) = (coords.first(), coords.last()) else {
        return Err(TurfError::TooFewCoordinates { operation: "along", required: 1, found: 0 });
    };
    if target <= 0.0 {
        return Ok(*first);
    }

    let mut travelled = 0.0;
    for i in 0..coords.len() {
        if target >= travelled && i == coords.len() - 1 {
            break;
        } else if travelled >= target {
            let overshot = target - travelled;
            if overshot == 0.0 {
                return Ok(coords[i]);
            }
            let direction = bearing(&coords[i], &coords[i - 1]) - 180.0;
            return Ok(destination(&coords[i], overshot, direction, unit));
        } else {
            travelled += distance(&coords[i], &coords[i + 1], unit);
        }
    }

    Ok(*last)
}

/// Bounding box of any value. An explicit box carried by the value wins over
/// the computed one; a value without coordinates has no box.
pub fn bbox<T: GeoJsonObject + CoordAll + ?Sized>(value: &T) -> Option<BoundingBox> {
    if let Some(explicit) = value.bbox() {
        return Some(*explicit);
    }
    bbox_of_points(&value.coord_all(false))
}

/// Smallest box enclosing `points`, or `None` when there are none.
pub fn bbox_of_points(points: &[Point]) -> Option<BoundingBox> {
    let first = points.first()?;
    let init = [first.longitude(), first.latitude(), first.longitude(), first.latitude()];
    let [west, south, east, north] = points.iter().fold(init, |[w, s, e, n], p| {
        [
            w.min(p.longitude()),
            s.min(p.latitude()),
            e.max(p.longitude()),
            n.max(p.latitude()),
        ]
    });
    Some(BoundingBox::from_lng_lats(west, south, east, north))
}

/// Closed rectangular polygon feature covering `bbox`.
pub fn bbox_polygon(
    bbox: &BoundingBox,
    properties: Option<JsonObject>,
    id: Option<FeatureId>,
) -> Feature {
    let (west, south, east, north) = (bbox.west(), bbox.south(), bbox.east(), bbox.north());
    let polygon = Polygon::from_lng_lats(vec![vec![
        [west, south],
        [east, south],
        [east, north],
        [west, north],
        [west, south],
    ]]);

    let mut feature = Feature::from_geometry(polygon).with_properties(properties.unwrap_or_default());
    if let Some(id) = id {
        feature = feature.with_id(id);
    }
    feature
}

/// Rectangular polygon enclosing every coordinate of `value`.
pub fn envelope<T: GeoJsonObject + CoordAll + ?Sized>(value: &T) -> Option<Polygon> {
    let outline = bbox_polygon(&bbox(value)?, None, None);
    match outline.geometry() {
        Some(Geometry::Polygon(polygon)) => Some(polygon.clone()),
        _ => None,
    }
}

/// Expand `bbox` along its shorter side so both sides span the same number of degrees.
pub fn square(bbox: &BoundingBox) -> BoundingBox {
    let (west, south, east, north) = (bbox.west(), bbox.south(), bbox.east(), bbox.north());

    let horizontal = distance(&bbox.southwest(), &Point::new(east, south), Unit::default());
    let vertical = distance(&Point::new(west, south), &Point::new(west, north), Unit::default());

    if horizontal >= vertical {
        let vertical_mid = (south + north) / 2.0;
        let half = (east - west) / 2.0;
        BoundingBox::from_lng_lats(west, vertical_mid - half, east, vertical_mid + half)
    } else {
        let horizontal_mid = (west + east) / 2.0;
        let half = (north - south) / 2.0;
        BoundingBox::from_lng_lats(horizontal_mid - half, south, horizontal_mid + half, north)
    }
}

/// Signed area of a ring in square meters: positive when clockwise, negative otherwise.
pub fn ring_area(coords: &[Point]) -> f64 {
    let n = coords.len();
    if n <= 2 {
        return 0.0;
    }

    let mut total = 0.0;
    for i in 0..n {
        let (lower, middle, upper) = if i == n - 2 {
            (n - 2, n - 1, 0)
        } else if i == n - 1 {
            (n - 1, 0, 1)
        } else {
            (i, i + 1, i + 2)
        };
        let p1 = &coords[lower];
        let p2 = &coords[middle];
        let p3 = &coords[upper];
        total += (p3.longitude().to_radians() - p1.longitude().to_radians())
            * p2.latitude().to_radians().sin();
    }

    total * EARTH_RADIUS * EARTH_RADIUS / 2.0
}

fn polygon_area(polygon: &Polygon) -> f64 {
    let Some(outer) = polygon.outer() else {
        return 0.0;
    };
    let holes: f64 = polygon.holes().iter().map(|hole| ring_area(hole).abs()).sum();
    ring_area(outer).abs() - holes
}

/// Area of a geometry in square meters. Points and lines have no area.
pub fn area(geometry: &Geometry) -> f64 {
    match geometry {
        Geometry::Point(_)
        | Geometry::MultiPoint(_)
        | Geometry::LineString(_)
        | Geometry::MultiLineString(_) => 0.0,
        Geometry::Polygon(polygon) => polygon_area(polygon),
        Geometry::MultiPolygon(multi) => multi.polygons().iter().map(polygon_area).sum(),
        Geometry::GeometryCollection(gc) => sum_flattened(gc, area),
    }
}

/// Area of a feature's geometry; zero when it has none.
pub fn area_feature(feature: &Feature) -> f64 {
    feature.geometry().map_or(0.0, area)
}

/// Total area of every feature in the collection.
pub fn area_collection(collection: &FeatureCollection) -> f64 {
    collection.features().iter().map(area_feature).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use turf_core::models::MultiPoint;

    const DELTA: f64 = 1e-6;

    fn pt1() -> Point {
        Point::new(-75.343, 39.984)
    }

    fn pt2() -> Point {
        Point::new(-75.534, 39.123)
    }

    #[test]
    fn test_distance() {
        assert!((distance(&pt1(), &pt2(), Unit::Miles) - 60.37218405837491).abs() < DELTA);
        assert!((distance(&pt1(), &pt2(), Unit::NauticalMiles) - 52.461979624130436).abs() < DELTA);
        assert!((distance(&pt1(), &pt2(), Unit::Kilometers) - 97.15957803131901).abs() < DELTA);
        assert!((distance(&pt1(), &pt2(), Unit::Radians) - 0.015245501024842149).abs() < DELTA);
        assert!((distance(&pt1(), &pt2(), Unit::Degrees) - 0.8735028650863799).abs() < DELTA);
        assert!((distance(&pt1(), &pt2(), Unit::default()) - 97.15957803131901).abs() < DELTA);
    }

    #[test]
    fn test_unknown_unit_is_rejected_before_measuring() {
        let err = "blah".parse::<Unit>().unwrap_err();
        assert!(err.to_string().starts_with("Invalid unit."));
    }

    #[test]
    fn test_bearing() {
        assert!((bearing(&Point::new(-75.0, 45.0), &Point::new(20.0, 60.0)) - 37.75495852601734).abs() < DELTA);
        assert!((bearing(&Point::new(0.0, 0.0), &Point::new(10.0, 0.0)) - 90.0).abs() < DELTA);
        assert!((bearing(&Point::new(0.0, 0.0), &Point::new(0.0, -10.0)) - 180.0).abs() < DELTA);
        assert_ne!(bearing(&Point::new(-75.4, 39.4), &pt2()), 0.0);
    }

    #[test]
    fn test_destination() {
        let south = destination(&Point::new(-75.0, 39.0), 100.0, 180.0, Unit::Kilometers);
        assert!((south.longitude() + 75.0).abs() < DELTA);
        assert!((south.latitude() - 38.10096062273525).abs() < DELTA);

        let east = destination(&Point::new(-75.0, 39.0), 100.0, 90.0, Unit::Kilometers);
        assert!((east.longitude() + 73.84321473156825).abs() < DELTA);
        assert!((east.latitude() - 38.994288534328966).abs() < DELTA);
    }

    #[test]
    fn test_midpoint_on_equator() {
        let mid = midpoint(&Point::new(0.0, 0.0), &Point::new(10.0, 0.0));
        assert!((mid.longitude() - 5.0).abs() < DELTA);
        assert!(mid.latitude().abs() < DELTA);
    }

    #[test]
    fn test_midpoint_is_equidistant() {
        let from = Point::new(22.5, 21.94304553343818);
        let to = Point::new(92.10937499999999, 46.800059446787316);
        let mid = midpoint(&from, &to);
        let a = distance(&from, &mid, Unit::Miles);
        let b = distance(&to, &mid, Unit::Miles);
        assert!((a - b).abs() < 1e-6);
    }

    #[test]
    fn test_length() {
        let line = LineString::from_lng_lats(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
        assert!((length(&line, Unit::Kilometers) - 222.45966645919725).abs() < DELTA);

        let single = LineString::from_lng_lats(&[[1.0, 1.0]]);
        assert_eq!(length(&single, Unit::Kilometers), 0.0);

        let feature = Feature::from_geometry(MultiPoint::from_lng_lats(&[[0.0, 0.0], [1.0, 1.0]]));
        assert_eq!(length(&feature, Unit::Kilometers), 0.0);
    }

    #[test]
    fn test_polygon_length_counts_every_ring() {
        let ring = vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]];
        let single = Polygon::from_lng_lats(vec![ring.clone()]);
        let double = Polygon::from_lng_lats(vec![ring.clone(), ring]);
        let one = length(&single, Unit::Miles);
        assert!(one > 0.0);
        assert!((length(&double, Unit::Miles) - 2.0 * one).abs() < DELTA);
    }

    #[test]
    fn test_nested_collection_length() {
        let line: Geometry = LineString::from_lng_lats(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]).into();
        let nested = GeometryCollection::new(vec![
            GeometryCollection::new(vec![line.clone()]).into(),
            Point::new(5.0, 5.0).into(),
            line,
        ]);
        assert!((length(&nested, Unit::Kilometers) - 2.0 * 222.45966645919725).abs() < DELTA);
    }

    #[test]
    fn test_along() {
        let coords = LineString::from_lng_lats(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]).into_coordinates();

        assert_eq!(along(&coords, 0.0, Unit::Kilometers).unwrap(), coords[0]);
        assert_eq!(along(&coords, -5.0, Unit::Kilometers).unwrap(), coords[0]);
        assert_eq!(along(&coords, 10_000.0, Unit::Kilometers).unwrap(), coords[2]);

        let first_leg = distance(&coords[0], &coords[1], Unit::Kilometers);
        let half = along(&coords, first_leg / 2.0, Unit::Kilometers).unwrap();
        assert!((half.longitude() - 0.5).abs() < 1e-6);
        assert!(half.latitude().abs() < 1e-6);
    }

    #[test]
    fn test_along_degenerate_inputs() {
        let single = vec![Point::new(1.0, 1.0)];
        assert_eq!(along(&single, 1.0, Unit::Kilometers).unwrap(), single[0]);
        assert!(matches!(
            along(&[], 1.0, Unit::Kilometers),
            Err(TurfError::TooFewCoordinates { operation: "along", .. })
        ));
    }

    fn west_of_dateline() -> Point {
        Point::new(179.5, 0.0)
    }

    fn east_of_dateline() -> Point {
        Point::new(-179.5, 0.0)
    }

    #[test]
    fn test_distance_across_antimeridian() {
        let d = distance(&west_of_dateline(), &east_of_dateline(), Unit::Kilometers);
        assert!((d - 111.22983322959863).abs() < DELTA);
        assert!((d - distance(&east_of_dateline(), &west_of_dateline(), Unit::Kilometers)).abs() < DELTA);
    }

    #[test]
    fn test_bearing_across_antimeridian() {
        assert!((bearing(&west_of_dateline(), &east_of_dateline()) - 90.0).abs() < DELTA);
        assert!((bearing(&east_of_dateline(), &west_of_dateline()) + 90.0).abs() < DELTA);
    }

    #[test]
    fn test_destination_across_antimeridian() {
        let reached = destination(&west_of_dateline(), 111.22983322959863, 90.0, Unit::Kilometers);
        // Longitudes are not wrapped, so 180.5 and -179.5 name the same place.
        assert!((reached.longitude() - 180.5).abs() < DELTA);
        assert!(reached.latitude().abs() < DELTA);
        assert!(distance(&reached, &east_of_dateline(), Unit::Kilometers) < DELTA);
    }

    #[test]
    fn test_along_and_midpoint_across_antimeridian() {
        let coords = vec![west_of_dateline(), east_of_dateline()];
        let half = path_length(&coords, Unit::Kilometers) / 2.0;

        let reached = along(&coords, half, Unit::Kilometers).unwrap();
        assert!(distance(&reached, &Point::new(180.0, 0.0), Unit::Kilometers) < DELTA);
        assert!(reached.latitude().abs() < DELTA);

        let mid = midpoint(&west_of_dateline(), &east_of_dateline());
        assert!(distance(&mid, &Point::new(-180.0, 0.0), Unit::Kilometers) < DELTA);
    }

    #[test]
    fn test_bbox() {
        let line = LineString::from_lng_lats(&[[102.0, -10.0], [103.0, 1.0], [104.0, 0.0], [130.0, 4.0]]);
        assert_eq!(bbox(&line), Some(BoundingBox::from_lng_lats(102.0, -10.0, 130.0, 4.0)));

        let point = Point::new(102.0, 0.5);
        assert_eq!(bbox(&point), Some(BoundingBox::from_lng_lats(102.0, 0.5, 102.0, 0.5)));

        assert_eq!(bbox(&FeatureCollection::default()), None);
    }

    #[test]
    fn test_bbox_prefers_explicit_box() {
        let explicit = BoundingBox::from_lng_lats(-1.0, -1.0, 1.0, 1.0);
        let line = LineString::from_lng_lats(&[[10.0, 10.0], [20.0, 20.0]]).with_bbox(explicit);
        assert_eq!(bbox(&line), Some(explicit));
    }

    #[test]
    fn test_bbox_of_geometry_collection() {
        let collection = GeometryCollection::new(vec![
            LineString::from_lng_lats(&[[102.0, -10.0], [130.0, 4.0]]).into(),
            GeometryCollection::new(vec![Point::new(-1.0, -1.0).into()]).into(),
        ]);
        assert_eq!(bbox(&collection), Some(BoundingBox::from_lng_lats(-1.0, -10.0, 130.0, 4.0)));
    }

    #[test]
    fn test_bbox_polygon() {
        let bbox = BoundingBox::from_lng_lats(0.0, 0.0, 10.0, 10.0);
        let feature = bbox_polygon(&bbox, None, Some(FeatureId::from("box")));

        let Some(Geometry::Polygon(polygon)) = feature.geometry() else {
            panic!("Expected Polygon");
        };
        let ring = &polygon.coordinates()[0];
        assert_eq!(ring.len(), 5);
        assert_eq!(ring[0], Point::new(0.0, 0.0));
        assert_eq!(ring[1], Point::new(10.0, 0.0));
        assert_eq!(ring[2], Point::new(10.0, 10.0));
        assert_eq!(ring[3], Point::new(0.0, 10.0));
        assert_eq!(ring[4], ring[0]);
        assert_eq!(feature.id(), Some(&FeatureId::from("box")));
    }

    #[test]
    fn test_envelope() {
        let collection = FeatureCollection::from_features(vec![
            Feature::from_geometry(Point::new(-5.0, 2.0)),
            Feature::from_geometry(Point::new(5.0, -2.0)),
        ]);
        let polygon = envelope(&collection).unwrap();
        assert_eq!(bbox(&polygon), Some(BoundingBox::from_lng_lats(-5.0, -2.0, 5.0, 2.0)));
        assert!(envelope(&FeatureCollection::default()).is_none());
    }

    #[test]
    fn test_square() {
        let tall = BoundingBox::from_lng_lats(-20.0, -20.0, -15.0, 0.0);
        assert_eq!(square(&tall), BoundingBox::from_lng_lats(-27.5, -20.0, -7.5, 0.0));

        let wide = BoundingBox::from_lng_lats(-10.0, -10.0, 10.0, 0.0);
        assert_eq!(square(&wide), BoundingBox::from_lng_lats(-10.0, -15.0, 10.0, 5.0));
    }

    #[test]
    fn test_ring_area_sign_follows_winding() {
        let clockwise = Polygon::from_lng_lats(vec![vec![
            [0.0, 0.0],
            [0.0, 1.0],
            [1.0, 1.0],
            [1.0, 0.0],
            [0.0, 0.0],
        ]]);
        let ring = &clockwise.coordinates()[0];
        let reversed: Vec<Point> = ring.iter().rev().copied().collect();

        let cw = ring_area(ring);
        let ccw = ring_area(&reversed);
        assert!(cw > 0.0);
        assert!(ccw < 0.0);
        assert!((cw + ccw).abs() < 1e-3);
        assert!((cw - 12391399902.071104).abs() < 1.0);
    }

    #[test]
    fn test_area_subtracts_holes() {
        let polygon: Geometry = Polygon::from_lng_lats(vec![
            vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]],
            vec![[0.25, 0.25], [0.25, 0.75], [0.75, 0.75], [0.75, 0.25], [0.25, 0.25]],
        ])
        .into();
        assert!((area(&polygon) - (12391399902.071104 - 3097879465.097536)).abs() < 1.0);
    }

    #[test]
    fn test_area_of_non_areal_geometries() {
        let line: Geometry = LineString::from_lng_lats(&[[0.0, 0.0], [1.0, 1.0]]).into();
        assert_eq!(area(&line), 0.0);
        assert_eq!(area_feature(&Feature::new(None)), 0.0);
        assert_eq!(area(&Polygon::default().into()), 0.0);
    }

    #[test]
    fn test_area_collection_sums_features() {
        let square = Polygon::from_lng_lats(vec![vec![
            [0.0, 0.0],
            [0.0, 1.0],
            [1.0, 1.0],
            [1.0, 0.0],
            [0.0, 0.0],
        ]]);
        let collection = FeatureCollection::from_features(vec![
            Feature::from_geometry(square.clone()),
            Feature::from_geometry(MultiPolygon::new(vec![square])),
        ]);
        assert!((area_collection(&collection) - 2.0 * 12391399902.071104).abs() < 1.0);
    }
}
