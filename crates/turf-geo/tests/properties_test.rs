//! Property tests for the measurement and simplification invariants.

use proptest::prelude::*;
use turf_core::models::{Point, Unit};
use turf_geo::measurement::{along, bbox_of_points, distance, midpoint, path_length};
use turf_geo::simplify::simplify;
use turf_geo::transformation::circle;

fn point() -> impl Strategy<Value = Point> {
    (-180.0..180.0f64, -85.0..85.0f64).prop_map(|(lng, lat)| Point::new(lng, lat))
}

// Bounded so that no pair is close to antipodal.
fn regional_point() -> impl Strategy<Value = Point> {
    (-60.0..60.0f64, -60.0..60.0f64).prop_map(|(lng, lat)| Point::new(lng, lat))
}

fn path() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(regional_point(), 1..40)
}

proptest! {
    #[test]
    fn prop_distance_is_symmetric(a in point(), b in point()) {
        let ab = distance(&a, &b, Unit::Kilometers);
        let ba = distance(&b, &a, Unit::Kilometers);
        prop_assert!(ab >= 0.0);
        prop_assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn prop_distance_to_self_is_zero(a in point()) {
        prop_assert_eq!(distance(&a, &a, Unit::Meters), 0.0);
    }

    #[test]
    fn prop_midpoint_is_equidistant(a in regional_point(), b in regional_point()) {
        let mid = midpoint(&a, &b);
        let to_a = distance(&mid, &a, Unit::Kilometers);
        let to_b = distance(&mid, &b, Unit::Kilometers);
        prop_assert!((to_a - to_b).abs() < 1e-6, "to_a={} to_b={}", to_a, to_b);
    }

    #[test]
    fn prop_along_boundaries(coords in path()) {
        let start = along(&coords, 0.0, Unit::Kilometers).unwrap();
        prop_assert_eq!(start, coords[0]);

        let total = path_length(&coords, Unit::Kilometers);
        let at_end = along(&coords, total, Unit::Kilometers).unwrap();
        prop_assert!(distance(&at_end, &coords[coords.len() - 1], Unit::Kilometers) < 1e-6);

        let beyond = total * 2.0 + 1.0;
        let end = along(&coords, beyond, Unit::Kilometers).unwrap();
        prop_assert_eq!(end, coords[coords.len() - 1]);
    }

    #[test]
    fn prop_bbox_contains_every_point(coords in path()) {
        let bbox = bbox_of_points(&coords).unwrap();
        for p in &coords {
            prop_assert!(bbox.west() <= p.longitude() && p.longitude() <= bbox.east());
            prop_assert!(bbox.south() <= p.latitude() && p.latitude() <= bbox.north());
        }
    }

    #[test]
    fn prop_simplify_keeps_endpoints(
        coords in path(),
        tolerance in 0.0..5.0f64,
        high_quality in any::<bool>(),
    ) {
        let simplified = simplify(&coords, tolerance, high_quality);

        prop_assert!(simplified.len() <= coords.len());
        prop_assert_eq!(simplified.first(), coords.first());
        prop_assert_eq!(simplified.last(), coords.last());
        if coords.len() <= 2 {
            prop_assert_eq!(&simplified, &coords);
        }
    }

    #[test]
    fn prop_simplify_output_is_subsequence(coords in path(), tolerance in 0.0..5.0f64) {
        let simplified = simplify(&coords, tolerance, true);
        let mut remaining = coords.iter();
        for kept in &simplified {
            prop_assert!(remaining.any(|p| p == kept));
        }
    }

    #[test]
    fn prop_circle_is_closed(center in regional_point(), radius in 0.1..500.0f64, steps in 1usize..128) {
        let polygon = circle(&center, radius, steps, Unit::Kilometers).unwrap();
        let ring = &polygon.coordinates()[0];
        prop_assert_eq!(ring.len(), steps + 1);
        prop_assert_eq!(ring.first(), ring.last());
    }
}
