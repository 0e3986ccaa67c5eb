//! Relations of points and lines.

use geo::{Coord, LineString};
use geojson::Position;

use crate::convert::{convert_coord, convert_line_string};
use crate::error::Result;
use crate::intersection::lines_intersect;
use crate::segment::{BoundaryExclusion, Segment};

/// Options of [`boolean_point_on_line`].
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct PointOnLineOptions {
    /// If set, the first and the last vertices of the line are not considered a part of it.
    pub ignore_end_vertices: bool,
    /// Tolerance of the collinearity check. If not set, the point must be exactly collinear with a segment.
    pub epsilon: Option<f64>,
}

/// Returns true if the `point` lies on any segment of the `line`.
///
/// # Errors
///
/// [`GeoturfError::InvalidGeoJson`](crate::GeoturfError::InvalidGeoJson) if a position has less than two
/// ordinates.
pub fn boolean_point_on_line(
    point: &[f64],
    line: &[Position],
    options: &PointOnLineOptions,
) -> Result<bool> {
    Ok(point_on_line(
        &convert_coord(point)?,
        &convert_line_string(line)?,
        options,
    ))
}

pub(crate) fn point_on_line(point: &Coord, line: &LineString, options: &PointOnLineOptions) -> bool {
    let last = line.0.len().saturating_sub(2);
    line.0.windows(2).enumerate().any(|(index, pair)| {
        let exclusion = if !options.ignore_end_vertices {
            BoundaryExclusion::None
        } else {
            match (index == 0, index == last) {
                (true, true) => BoundaryExclusion::Both,
                (true, false) => BoundaryExclusion::Start,
                (false, true) => BoundaryExclusion::End,
                (false, false) => BoundaryExclusion::None,
            }
        };

        Segment(&pair[0], &pair[1]).contains_point(point, exclusion, options.epsilon)
    })
}

/// Returns true if the `point` lies on the `line`, including its end vertices.
pub fn is_point_on_line(line: &LineString, point: &Coord) -> bool {
    point_on_line(point, line, &PointOnLineOptions::default())
}

/// Returns true if the two lines have at least one common point.
pub fn is_line_on_line(a: &LineString, b: &LineString) -> bool {
    lines_intersect(a, b)
}
