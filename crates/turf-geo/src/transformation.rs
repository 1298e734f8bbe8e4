//! Shape generation.

use crate::measurement::destination;
use turf_core::config::TurfDefaults;
use turf_core::models::{Point, Polygon, Unit};
use turf_core::{Result, TurfError};

/// Polygon approximating the circle of `radius` around `center`.
///
/// The ring holds `steps` points spaced evenly by bearing, starting due north,
/// plus the closing point.
pub fn circle(center: &Point, radius: f64, steps: usize, unit: Unit) -> Result<Polygon> {
    if steps == 0 {
        return Err(TurfError::InvalidSteps { steps });
    }

    let mut ring: Vec<Point> = (0..steps)
        .map(|i| destination(center, radius, i as f64 * 360.0 / steps as f64, unit))
        .collect();
    ring.push(ring[0]);

    Ok(Polygon::new(vec![ring]))
}

/// [`circle`] using the configured step count and unit.
pub fn circle_with_defaults(center: &Point, radius: f64, defaults: &TurfDefaults) -> Result<Polygon> {
    circle(center, radius, defaults.circle_steps, defaults.unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::distance;

    #[test]
    fn test_circle_ring_is_closed() {
        let center = Point::new(-75.343, 39.984);
        let polygon = circle(&center, 5.0, 10, Unit::Kilometers).unwrap();

        let ring = &polygon.coordinates()[0];
        assert_eq!(ring.len(), 11);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn test_circle_points_are_on_radius() {
        let center = Point::new(10.0, 45.0);
        let polygon = circle(&center, 2.0, 16, Unit::Miles).unwrap();

        for point in &polygon.coordinates()[0] {
            assert!((distance(&center, point, Unit::Miles) - 2.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_first_point_is_due_north() {
        let center = Point::new(0.0, 0.0);
        let polygon = circle(&center, 100.0, 4, Unit::Kilometers).unwrap();
        let first = polygon.coordinates()[0][0];
        assert!(first.longitude().abs() < 1e-9);
        assert!(first.latitude() > 0.0);
    }

    #[test]
    fn test_zero_steps_rejected() {
        let err = circle(&Point::new(0.0, 0.0), 1.0, 0, Unit::Kilometers).unwrap_err();
        assert!(matches!(err, TurfError::InvalidSteps { steps: 0 }));
    }

    #[test]
    fn test_circle_with_defaults() {
        let polygon =
            circle_with_defaults(&Point::new(0.0, 0.0), 1.0, &TurfDefaults::default()).unwrap();
        assert_eq!(polygon.coordinates()[0].len(), 65);
    }
}
