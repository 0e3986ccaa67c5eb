//! Point in polygon test.

use geo::{Contains, Intersects, Point};
use geojson::Value;
use geoturf_meta::GeometryKind;

use crate::convert::{convert_multi_polygon, convert_point, convert_polygon};
use crate::error::{GeoturfError, Result};

/// Returns true if the `point` lies inside the `polygon`, which must be a `Polygon` or a `MultiPolygon` value.
///
/// Points inside polygon holes are outside of the polygon. Points on the boundary (including hole
/// boundaries) are inside unless `ignore_boundary` is set.
///
/// # Errors
///
/// * [`GeoturfError::UnsupportedGeometryKind`] if the `polygon` is not polygonal.
/// * [`GeoturfError::InvalidGeoJson`] if a position has less than two ordinates.
pub fn boolean_point_in_polygon(point: &[f64], polygon: &Value, ignore_boundary: bool) -> Result<bool> {
    let point = convert_point(point)?;
    match polygon {
        Value::Polygon(rings) => Ok(point_in_polygon(
            &point,
            &convert_polygon(rings)?,
            ignore_boundary,
        )),
        Value::MultiPolygon(polygons) => Ok(point_in_polygon(
            &point,
            &convert_multi_polygon(polygons)?,
            ignore_boundary,
        )),
        other => Err(GeoturfError::UnsupportedGeometryKind(GeometryKind::of(
            other,
        ))),
    }
}

pub(crate) fn point_in_polygon<G>(point: &Point, polygon: &G, ignore_boundary: bool) -> bool
where
    G: Contains<Point> + Intersects<Point>,
{
    if ignore_boundary {
        polygon.contains(point)
    } else {
        polygon.intersects(point)
    }
}
