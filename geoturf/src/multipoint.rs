//! Relations of multi-point geometries to other geometries.

use geo::Coord;
use geojson::{Position, Value};

use crate::convert::{convert_coord, convert_line_string};
use crate::error::Result;
use crate::line::{point_on_line, PointOnLineOptions};
use crate::point_in_polygon::boolean_point_in_polygon;

/// Returns true if the `point` is equal to any point of the `multipoint`. Only the first two ordinates are
/// compared.
pub fn point_in_multipoint(point: &[f64], multipoint: &[Position]) -> Result<bool> {
    let point = convert_coord(point)?;
    for other in multipoint {
        if convert_coord(other)? == point {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Returns true if every point of `a` is equal to some point of `b`.
pub fn multipoint_in_multipoint(a: &[Position], b: &[Position]) -> Result<bool> {
    let b = convert_coords(b)?;
    for point in a {
        let point = convert_coord(point)?;
        if !b.contains(&point) {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Returns true if every point of the `multipoint` lies on the `line` and at least one of them is not an end
/// vertex of the line.
pub fn multipoint_on_line(multipoint: &[Position], line: &[Position]) -> Result<bool> {
    let line = convert_line_string(line)?;
    let interior = PointOnLineOptions {
        ignore_end_vertices: true,
        ..Default::default()
    };

    let mut found_inside = false;
    for point in convert_coords(multipoint)? {
        if !point_on_line(&point, &line, &PointOnLineOptions::default()) {
            return Ok(false);
        }
        found_inside = found_inside || point_on_line(&point, &line, &interior);
    }

    Ok(found_inside)
}

/// Returns true if every point of the `multipoint` lies inside the `polygon` (boundary included) and at least
/// one of them lies strictly inside it.
///
/// The `polygon` must be a `Polygon` or a `MultiPolygon`, see [`boolean_point_in_polygon`].
pub fn multipoint_in_polygon(multipoint: &[Position], polygon: &Value) -> Result<bool> {
    let mut found_inside = false;
    for point in multipoint {
        if !boolean_point_in_polygon(point, polygon, false)? {
            return Ok(false);
        }
        found_inside = found_inside || boolean_point_in_polygon(point, polygon, true)?;
    }

    Ok(found_inside)
}

fn convert_coords(points: &[Position]) -> Result<Vec<Coord>> {
    points.iter().map(|p| convert_coord(p)).collect()
}
