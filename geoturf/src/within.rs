//! Within relation.

use geo::Relate;
use geojson::{Geometry, Value};
use geoturf_meta::{GeoJsonLike, GeometryKind};

use crate::convert::{convert_line_string, convert_multi_polygon, convert_point, convert_polygon};
use crate::error::{GeoturfError, Result};
use crate::multipoint::{
    multipoint_in_multipoint, multipoint_in_polygon, multipoint_on_line, point_in_multipoint,
};

/// Returns true if `a` is completely within `b`: the interiors of the geometries intersect, and no point of `a`
/// lies outside of `b`.
///
/// Both arguments must be geometries or features with geometry. Supported pairs of geometry kinds are:
///
/// | a \ b        | MultiPoint | LineString | Polygon, MultiPolygon |
/// |--------------|------------|------------|-----------------------|
/// | Point        | yes        | yes        | yes                   |
/// | MultiPoint   | yes        | yes        | yes                   |
/// | LineString   |            | yes        | yes                   |
/// | Polygon      |            |            | yes                   |
///
/// A multipoint is within a line if all its points are on the line and at least one of them is not an end
/// vertex. A multipoint is within a polygon if all its points are inside the polygon or on its boundary and at
/// least one of them is strictly inside.
///
/// # Errors
///
/// * [`GeoturfError::UnsupportedRelation`] for pairs not listed above.
/// * [`GeoturfError::InvalidGeoJson`] if an argument is a feature collection or a feature without geometry, or
///   a position has less than two ordinates.
pub fn boolean_within<'a, 'b>(
    a: impl Into<GeoJsonLike<'a>>,
    b: impl Into<GeoJsonLike<'b>>,
) -> Result<bool> {
    let a = single_geometry(a.into())?;
    let b = single_geometry(b.into())?;

    log::debug!(
        "Checking if {} is within {}",
        GeometryKind::of(&a.value),
        GeometryKind::of(&b.value)
    );

    match (&a.value, &b.value) {
        (Value::Point(point), Value::MultiPoint(points)) => point_in_multipoint(point, points),
        (Value::Point(point), Value::LineString(line)) => {
            relate_within(&convert_point(point)?, &convert_line_string(line)?)
        }
        (Value::Point(point), Value::Polygon(rings)) => {
            relate_within(&convert_point(point)?, &convert_polygon(rings)?)
        }
        (Value::Point(point), Value::MultiPolygon(polygons)) => {
            relate_within(&convert_point(point)?, &convert_multi_polygon(polygons)?)
        }
        (Value::MultiPoint(points), Value::MultiPoint(others)) => {
            multipoint_in_multipoint(points, others)
        }
        (Value::MultiPoint(points), Value::LineString(line)) => multipoint_on_line(points, line),
        (Value::MultiPoint(points), polygon @ (Value::Polygon(_) | Value::MultiPolygon(_))) => {
            multipoint_in_polygon(points, polygon)
        }
        (Value::LineString(line), Value::LineString(other)) => {
            relate_within(&convert_line_string(line)?, &convert_line_string(other)?)
        }
        (Value::LineString(line), Value::Polygon(rings)) => {
            relate_within(&convert_line_string(line)?, &convert_polygon(rings)?)
        }
        (Value::LineString(line), Value::MultiPolygon(polygons)) => {
            relate_within(&convert_line_string(line)?, &convert_multi_polygon(polygons)?)
        }
        (Value::Polygon(rings), Value::Polygon(other)) => {
            relate_within(&convert_polygon(rings)?, &convert_polygon(other)?)
        }
        (Value::Polygon(rings), Value::MultiPolygon(polygons)) => {
            relate_within(&convert_polygon(rings)?, &convert_multi_polygon(polygons)?)
        }
        (a, b) => Err(GeoturfError::UnsupportedRelation(
            GeometryKind::of(a),
            GeometryKind::of(b),
        )),
    }
}

fn relate_within<A, B>(a: &A, b: &B) -> Result<bool>
where
    A: Relate<f64, B>,
{
    Ok(a.relate(b).is_within())
}

fn single_geometry(input: GeoJsonLike<'_>) -> Result<&Geometry> {
    match input {
        GeoJsonLike::FeatureCollection(_) => Err(GeoturfError::InvalidGeoJson(
            "expected a geometry or a feature, got a feature collection".into(),
        )),
        _ => input
            .geometry()
            .ok_or_else(|| GeoturfError::InvalidGeoJson("feature has no geometry".into())),
    }
}
