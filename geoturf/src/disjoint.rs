//! Disjoint and intersects relations.

use std::ops::ControlFlow;

use geo::{Coord, LineString, Point, Polygon};
use geoturf_meta::{flatten_all, flatten_each, FlatFeature, GeoJsonLike, Part};

use crate::convert::{convert_coord, convert_line_string, convert_polygon};
use crate::error::Result;
use crate::intersection::lines_intersect;
use crate::line::{is_line_on_line, is_point_on_line};
use crate::point_in_polygon::point_in_polygon;

/// Result of [`disjoint`] for pairs of features that have no relation rule, which are pairs where either of
/// the features has no geometry.
pub const UNRELATED_PAIR_IS_DISJOINT: bool = false;

/// Returns true if the two single-part features have no common points.
///
/// * Two points are disjoint if their coordinates differ.
/// * A point and a line are disjoint if the point is not on the line.
/// * A point and a polygon are disjoint if the point is not inside the polygon or on its boundary.
/// * Two lines are disjoint if they do not intersect.
/// * A line and a polygon are disjoint if no vertex of the line is inside the polygon and the line does not
///   cross any of the polygon's rings.
/// * Two polygons are disjoint if no vertex of the exterior ring of either of them is inside the other one and
///   their rings do not intersect.
///
/// If either feature has no geometry, [`UNRELATED_PAIR_IS_DISJOINT`] is returned.
///
/// # Errors
///
/// [`GeoturfError::InvalidGeoJson`](crate::GeoturfError::InvalidGeoJson) if a position has less than two
/// ordinates.
pub fn disjoint(a: &FlatFeature, b: &FlatFeature) -> Result<bool> {
    let a = Shape::from_part(a.geometry)?;
    let b = Shape::from_part(b.geometry)?;
    Ok(shapes_disjoint(a.as_ref(), b.as_ref()))
}

/// Returns true if the two objects have no common points.
///
/// Both objects are flattened into single-part features (see [`flatten_each`]) and every part of `a` is
/// compared to every part of `b` with [`disjoint`]. Comparison stops at the first pair that is not disjoint.
/// Empty feature collections are disjoint with anything.
pub fn boolean_disjoint<'a, 'b>(
    a: impl Into<GeoJsonLike<'a>>,
    b: impl Into<GeoJsonLike<'b>>,
) -> Result<bool> {
    Ok(!any_intersecting_pair(a.into(), b.into())?)
}

/// Returns true if the two objects have at least one common point. This is always the opposite of
/// [`boolean_disjoint`].
pub fn boolean_intersects<'a, 'b>(
    a: impl Into<GeoJsonLike<'a>>,
    b: impl Into<GeoJsonLike<'b>>,
) -> Result<bool> {
    any_intersecting_pair(a.into(), b.into())
}

fn any_intersecting_pair(a: GeoJsonLike<'_>, b: GeoJsonLike<'_>) -> Result<bool> {
    let others = flatten_all(b)
        .into_iter()
        .map(|feature| Shape::from_part(feature.geometry))
        .collect::<Result<Vec<_>>>()?;

    let found = flatten_each(a, |feature, cursor| {
        let shape = match Shape::from_part(feature.geometry) {
            Ok(shape) => shape,
            Err(err) => return ControlFlow::Break(Err(err)),
        };

        for (index, other) in others.iter().enumerate() {
            if !shapes_disjoint(shape.as_ref(), other.as_ref()) {
                log::trace!(
                    "Part {}/{} intersects part {index} of the other object",
                    cursor.feature_index,
                    cursor.multi_feature_index
                );
                return ControlFlow::Break(Ok(true));
            }
        }

        ControlFlow::Continue(())
    });

    match found {
        ControlFlow::Break(result) => result,
        ControlFlow::Continue(()) => Ok(false),
    }
}

enum Shape {
    Point(Coord),
    Line(LineString),
    Polygon(Polygon),
}

impl Shape {
    fn from_part(part: Option<Part<'_>>) -> Result<Option<Self>> {
        Ok(match part {
            None => None,
            Some(Part::Point(point)) => Some(Self::Point(convert_coord(point)?)),
            Some(Part::LineString(line)) => Some(Self::Line(convert_line_string(line)?)),
            Some(Part::Polygon(rings)) => Some(Self::Polygon(convert_polygon(rings)?)),
        })
    }
}

fn shapes_disjoint(a: Option<&Shape>, b: Option<&Shape>) -> bool {
    let (Some(a), Some(b)) = (a, b) else {
        return UNRELATED_PAIR_IS_DISJOINT;
    };

    match (a, b) {
        (Shape::Point(a), Shape::Point(b)) => a != b,
        (Shape::Point(point), Shape::Line(line)) | (Shape::Line(line), Shape::Point(point)) => {
            !is_point_on_line(line, point)
        }
        (Shape::Point(point), Shape::Polygon(polygon))
        | (Shape::Polygon(polygon), Shape::Point(point)) => {
            !point_in_polygon(&Point::from(*point), polygon, false)
        }
        (Shape::Line(a), Shape::Line(b)) => !is_line_on_line(a, b),
        (Shape::Line(line), Shape::Polygon(polygon))
        | (Shape::Polygon(polygon), Shape::Line(line)) => !line_in_polygon(polygon, line),
        (Shape::Polygon(a), Shape::Polygon(b)) => !polygon_in_polygon(b, a),
    }
}

fn rings(polygon: &Polygon) -> impl Iterator<Item = &LineString> {
    std::iter::once(polygon.exterior()).chain(polygon.interiors())
}

fn vertex_inside(line: &LineString, polygon: &Polygon) -> bool {
    line.points()
        .any(|point| point_in_polygon(&point, polygon, false))
}

fn line_in_polygon(polygon: &Polygon, line: &LineString) -> bool {
    vertex_inside(line, polygon) || rings(polygon).any(|ring| lines_intersect(line, ring))
}

fn polygon_in_polygon(a: &Polygon, b: &Polygon) -> bool {
    vertex_inside(a.exterior(), b)
        || vertex_inside(b.exterior(), a)
        || rings(a).any(|ring_a| rings(b).any(|ring_b| lines_intersect(ring_a, ring_b)))
}
