use turf_core::models::{Geometry, LineString, MultiPoint, Point, Polygon};

/// Outcome of checking one geometry, with every problem found.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

/// A single problem and the path of the part that caused it.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub location: String,
    pub reason: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self { is_valid: true, errors: Vec::new() }
    }

    pub fn invalid(errors: Vec<ValidationError>) -> Self {
        Self { is_valid: false, errors }
    }

    /// Record a problem; the result becomes invalid.
    pub fn add_error(&mut self, location: String, reason: String) {
        self.is_valid = false;
        self.errors.push(ValidationError { location, reason });
    }

    fn merge(&mut self, prefix: &str, other: ValidationResult) {
        for error in other.errors {
            self.add_error(format!("{}.{}", prefix, error.location), error.reason);
        }
    }
}

fn is_finite(point: &Point) -> bool {
    point.longitude().is_finite()
        && point.latitude().is_finite()
        && point.altitude().map_or(true, f64::is_finite)
}

/// Validate a geometry.
///
/// Reports structural problems only; nothing is repaired. Nested
/// GeometryCollections are walked without recursion.
pub fn validate_geometry(geometry: &Geometry) -> ValidationResult {
    let mut result = ValidationResult::valid();
    // (parent entry, member index) for every collection member reached.
    let mut members: Vec<(Option<usize>, usize)> = Vec::new();
    let mut pending = vec![(None, geometry)];

    while let Some((entry, geometry)) = pending.pop() {
        let single = match geometry {
            Geometry::Point(p) => validate_point(p),
            Geometry::MultiPoint(mp) => validate_multipoint(mp),
            Geometry::LineString(ls) => validate_linestring(ls),
            Geometry::MultiLineString(mls) => {
                let mut nested = ValidationResult::valid();
                for (i, ls) in mls.line_strings().iter().enumerate() {
                    nested.merge(&format!("MultiLineString[{}]", i), validate_linestring(ls));
                }
                nested
            }
            Geometry::Polygon(poly) => validate_polygon(poly),
            Geometry::MultiPolygon(mp) => {
                let mut nested = ValidationResult::valid();
                for (i, poly) in mp.polygons().iter().enumerate() {
                    nested.merge(&format!("MultiPolygon[{}]", i), validate_polygon(poly));
                }
                nested
            }
            Geometry::GeometryCollection(gc) => {
                for (i, member) in gc.geometries().iter().enumerate().rev() {
                    members.push((entry, i));
                    pending.push((Some(members.len() - 1), member));
                }
                continue;
            }
        };

        if single.is_valid {
            continue;
        }
        let prefix = collection_path(&members, entry);
        for error in single.errors {
            result.add_error(format!("{}{}", prefix, error.location), error.reason);
        }
    }

    result
}

fn collection_path(members: &[(Option<usize>, usize)], mut entry: Option<usize>) -> String {
    let mut indices = Vec::new();
    while let Some(id) = entry {
        let (parent, index) = members[id];
        indices.push(index);
        entry = parent;
    }
    indices.iter().rev().map(|i| format!("GeometryCollection[{}].", i)).collect()
}

fn validate_point(point: &Point) -> ValidationResult {
    let mut result = ValidationResult::valid();
    if !is_finite(point) {
        result.add_error(
            format!("Point({}, {})", point.longitude(), point.latitude()),
            "Coordinates must be finite".to_string(),
        );
    }
    result
}

fn validate_multipoint(multipoint: &MultiPoint) -> ValidationResult {
    let mut result = ValidationResult::valid();
    for (i, point) in multipoint.coordinates().iter().enumerate() {
        if !is_finite(point) {
            result.add_error(format!("MultiPoint[{}]", i), "Coordinates must be finite".to_string());
        }
    }
    result
}

fn validate_linestring(linestring: &LineString) -> ValidationResult {
    let mut result = ValidationResult::valid();
    let coords = linestring.coordinates();

    if coords.len() < 2 {
        result.add_error(
            "LineString".to_string(),
            format!("LineString must have at least 2 points, found {}", coords.len()),
        );
        return result;
    }

    for (i, point) in coords.iter().enumerate() {
        if !is_finite(point) {
            result.add_error(format!("LineString[{}]", i), "Coordinates must be finite".to_string());
        }
    }

    result
}

fn validate_ring(ring: &[Point], location: String, result: &mut ValidationResult) {
    if ring.len() < 4 {
        result.add_error(
            location.clone(),
            format!("Linear ring must have at least 4 points, found {}", ring.len()),
        );
    }

    if let (Some(first), Some(last)) = (ring.first(), ring.last()) {
        if first != last {
            result.add_error(
                location.clone(),
                "Linear ring must be closed (first point == last point)".to_string(),
            );
        }
    }

    if ring.iter().any(|p| !is_finite(p)) {
        result.add_error(location, "Coordinates must be finite".to_string());
    }
}

fn validate_polygon(polygon: &Polygon) -> ValidationResult {
    let mut result = ValidationResult::valid();

    let Some(exterior) = polygon.outer() else {
        result.add_error("Polygon".to_string(), "Polygon must have an exterior ring".to_string());
        return result;
    };
    validate_ring(exterior, "Polygon exterior".to_string(), &mut result);

    for (i, interior) in polygon.holes().iter().enumerate() {
        validate_ring(interior, format!("Polygon interior[{}]", i), &mut result);
    }

    result
}

/// Number of geometries with at least one problem.
pub fn count_invalid_geometries(geometries: &[Geometry]) -> usize {
    geometries.iter().filter(|g| !validate_geometry(g).is_valid).count()
}
