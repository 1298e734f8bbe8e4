use crate::models::geometry::Point;

/// Axis-aligned bounding box given by its southwest and northeast corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    southwest: Point,
    northeast: Point,
}

impl BoundingBox {
    pub fn new(southwest: Point, northeast: Point) -> Self {
        Self { southwest, northeast }
    }

    /// Build a box from its four extrema.
    pub fn from_lng_lats(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self::new(Point::new(west, south), Point::new(east, north))
    }

    /// Build a box from a `[west, south, east, north]` array.
    pub fn from_array(bbox: [f64; 4]) -> Self {
        Self::from_lng_lats(bbox[0], bbox[1], bbox[2], bbox[3])
    }

    pub fn southwest(&self) -> Point {
        self.southwest
    }

    pub fn northeast(&self) -> Point {
        self.northeast
    }

    pub fn west(&self) -> f64 {
        self.southwest.longitude()
    }

    pub fn south(&self) -> f64 {
        self.southwest.latitude()
    }

    pub fn east(&self) -> f64 {
        self.northeast.longitude()
    }

    pub fn north(&self) -> f64 {
        self.northeast.latitude()
    }

    /// `[west, south, east, north]`
    pub fn to_array(&self) -> [f64; 4] {
        [self.west(), self.south(), self.east(), self.north()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let bbox = BoundingBox::from_lng_lats(-10.0, -5.0, 10.0, 5.0);
        assert_eq!(bbox.west(), -10.0);
        assert_eq!(bbox.south(), -5.0);
        assert_eq!(bbox.east(), 10.0);
        assert_eq!(bbox.north(), 5.0);
        assert_eq!(bbox.southwest(), Point::new(-10.0, -5.0));
        assert_eq!(bbox.to_array(), [-10.0, -5.0, 10.0, 5.0]);
    }

    #[test]
    fn test_from_array() {
        let bbox = BoundingBox::from_array([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(bbox, BoundingBox::from_lng_lats(1.0, 2.0, 3.0, 4.0));
    }
}
