//! Point-in-polygon relations using ray casting.

use turf_core::models::{Feature, FeatureCollection, Geometry, MultiPolygon, Point, Polygon};

// Toggles on every edge crossed by the horizontal ray leaving `point`.
fn in_ring(point: &Point, ring: &[Point]) -> bool {
    let (x, y) = (point.longitude(), point.latitude());
    let mut inside = false;

    let mut j = ring.len().wrapping_sub(1);
    for (i, vertex) in ring.iter().enumerate() {
        let (xi, yi) = (vertex.longitude(), vertex.latitude());
        let (xj, yj) = (ring[j].longitude(), ring[j].latitude());
        let intersect = ((yi > y) != (yj > y)) && (x < (xj - xi) * (y - yi) / (yj - yi) + xi);
        if intersect {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Whether `point` lies inside `polygon`: within the outer ring and outside every hole.
pub fn inside(point: &Point, polygon: &Polygon) -> bool {
    match polygon.outer() {
        Some(outer) if in_ring(point, outer) => {
            !polygon.holes().iter().any(|hole| in_ring(point, hole))
        }
        _ => false,
    }
}

/// Whether `point` lies inside at least one member polygon.
pub fn inside_multi_polygon(point: &Point, multi_polygon: &MultiPolygon) -> bool {
    multi_polygon.polygons().iter().any(|polygon| inside(point, polygon))
}

fn inside_geometry(point: &Point, geometry: &Geometry) -> bool {
    match geometry {
        Geometry::Polygon(polygon) => inside(point, polygon),
        Geometry::MultiPolygon(multi) => inside_multi_polygon(point, multi),
        _ => false,
    }
}

/// Point features of `points` that fall inside at least one polygon feature of `polygons`.
///
/// Each matching feature is kept once, in input order, with its properties and id.
/// Non-point features and non-polygonal features are skipped.
pub fn points_within_polygon(
    points: &FeatureCollection,
    polygons: &FeatureCollection,
) -> FeatureCollection {
    let areas: Vec<&Geometry> = polygons
        .features()
        .iter()
        .filter_map(Feature::geometry)
        .filter(|g| matches!(g, Geometry::Polygon(_) | Geometry::MultiPolygon(_)))
        .collect();
    if areas.len() < polygons.features().len() {
        tracing::debug!(
            skipped = polygons.features().len() - areas.len(),
            "pointsWithinPolygon: ignoring non-polygon features"
        );
    }

    points
        .features()
        .iter()
        .filter(|feature| match feature.geometry() {
            Some(Geometry::Point(point)) => areas.iter().any(|area| inside_geometry(point, area)),
            _ => {
                tracing::debug!("pointsWithinPolygon: ignoring non-point feature");
                false
            }
        })
        .cloned()
        .collect()
}
