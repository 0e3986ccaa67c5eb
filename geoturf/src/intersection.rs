//! Intersection points of linear geometries.

use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::{Coord, LineString};
use geojson::{Feature, FeatureCollection, Geometry, Value};
use geoturf_meta::GeometryKind;

use crate::conversion::polygon_to_line;
use crate::convert::convert_line_string;
use crate::error::{GeoturfError, Result};

/// Returns all points where the two geometries' lines meet, as a collection of `Point` features.
///
/// Both geometries can be `LineString`, `MultiLineString`, `Polygon` or `MultiPolygon`; for polygons the rings
/// are intersected. Where two segments overlap, both ends of the overlap are returned. Every point is returned
/// once, in the order it was found.
///
/// # Errors
///
/// * [`GeoturfError::UnsupportedGeometryKind`] for point and collection geometries.
/// * [`GeoturfError::InvalidGeoJson`] if a position has less than two ordinates.
pub fn line_intersect(a: &Value, b: &Value) -> Result<FeatureCollection> {
    let lines_a = linear_parts(a)?;
    let lines_b = linear_parts(b)?;

    let mut points = vec![];
    for line_a in &lines_a {
        for line_b in &lines_b {
            for point in intersections(line_a, line_b) {
                push_unique(&mut points, point);
            }
        }
    }

    Ok(FeatureCollection {
        bbox: None,
        features: points
            .into_iter()
            .map(|c| Feature::from(Geometry::new(Value::Point(vec![c.x, c.y]))))
            .collect(),
        foreign_members: None,
    })
}

/// Points where two line strings meet, each point once.
pub(crate) fn intersections(a: &LineString, b: &LineString) -> Vec<Coord> {
    let mut points = vec![];
    for line_a in a.lines() {
        for line_b in b.lines() {
            match line_intersection(line_a, line_b) {
                Some(LineIntersection::SinglePoint { intersection, .. }) => {
                    push_unique(&mut points, intersection)
                }
                Some(LineIntersection::Collinear { intersection }) => {
                    push_unique(&mut points, intersection.start);
                    push_unique(&mut points, intersection.end);
                }
                None => {}
            }
        }
    }

    points
}

/// Returns true if the two line strings have at least one common point.
pub(crate) fn lines_intersect(a: &LineString, b: &LineString) -> bool {
    a.lines()
        .any(|line_a| b.lines().any(|line_b| line_intersection(line_a, line_b).is_some()))
}

fn linear_parts(value: &Value) -> Result<Vec<LineString>> {
    match value {
        Value::LineString(line) => Ok(vec![convert_line_string(line)?]),
        Value::MultiLineString(lines) => lines.iter().map(|l| convert_line_string(l)).collect(),
        Value::Polygon(rings) => linear_parts(&polygon_to_line(rings)),
        Value::MultiPolygon(polygons) => {
            let mut lines = vec![];
            for rings in polygons {
                lines.extend(linear_parts(&polygon_to_line(rings))?);
            }
            Ok(lines)
        }
        other => Err(GeoturfError::UnsupportedGeometryKind(GeometryKind::of(
            other,
        ))),
    }
}

fn push_unique(points: &mut Vec<Coord>, point: Coord) {
    if !points.contains(&point) {
        points.push(point);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    use super::*;

    fn assert_single_point(fc: &FeatureCollection, x: f64, y: f64) {
        let points = coords(fc);
        assert_eq!(points.len(), 1);
        let Value::Point(point) = &points[0] else {
            panic!("expected a point, got {:?}", points[0]);
        };
        assert_abs_diff_eq!(point[0], x, epsilon = 1e-9);
        assert_abs_diff_eq!(point[1], y, epsilon = 1e-9);
    }

    fn coords(fc: &FeatureCollection) -> Vec<Value> {
        fc.features
            .iter()
            .filter_map(|f| f.geometry.as_ref().map(|g| g.value.clone()))
            .collect()
    }

    #[test]
    fn crossing_lines() {
        let a = Value::LineString(vec![vec![0.0, 0.0], vec![10.0, 10.0]]);
        let b = Value::LineString(vec![vec![0.0, 10.0], vec![10.0, 0.0]]);
        let result = line_intersect(&a, &b).unwrap();
        assert_single_point(&result, 5.0, 5.0);
    }

    #[test]
    fn shared_vertex_is_reported_once() {
        let a = Value::LineString(vec![vec![0.0, 0.0], vec![5.0, 5.0], vec![10.0, 0.0]]);
        let b = Value::LineString(vec![vec![0.0, 10.0], vec![5.0, 5.0], vec![10.0, 10.0]]);
        let result = line_intersect(&a, &b).unwrap();
        assert_eq!(coords(&result), vec![Value::Point(vec![5.0, 5.0])]);
    }

    #[test]
    fn collinear_overlap_gives_its_ends() {
        let a = Value::LineString(vec![vec![0.0, 0.0], vec![10.0, 0.0]]);
        let b = Value::LineString(vec![vec![5.0, 0.0], vec![15.0, 0.0]]);
        let result = line_intersect(&a, &b).unwrap();
        assert_eq!(
            coords(&result),
            vec![Value::Point(vec![5.0, 0.0]), Value::Point(vec![10.0, 0.0])]
        );
    }

    #[test]
    fn line_and_polygon_boundary() {
        let line = Value::LineString(vec![vec![-5.0, 5.0], vec![5.0, 5.0]]);
        let polygon = Value::Polygon(vec![vec![
            vec![0.0, 0.0],
            vec![0.0, 10.0],
            vec![10.0, 10.0],
            vec![10.0, 0.0],
            vec![0.0, 0.0],
        ]]);
        let result = line_intersect(&line, &polygon).unwrap();
        assert_single_point(&result, 0.0, 5.0);
    }

    #[test]
    fn separate_lines() {
        let a = convert_line_string(&[vec![0.0, 0.0], vec![1.0, 0.0]]).unwrap();
        let b = convert_line_string(&[vec![0.0, 1.0], vec![1.0, 1.0]]).unwrap();
        assert!(intersections(&a, &b).is_empty());
        assert!(!lines_intersect(&a, &b));
    }

    #[test]
    fn points_are_not_linear() {
        let point = Value::Point(vec![0.0, 0.0]);
        let line = Value::LineString(vec![vec![0.0, 0.0], vec![1.0, 0.0]]);
        assert_matches!(
            line_intersect(&point, &line),
            Err(GeoturfError::UnsupportedGeometryKind(GeometryKind::Point))
        );
    }
}
