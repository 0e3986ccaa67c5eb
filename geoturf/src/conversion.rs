//! Conversion between geometry kinds.

use geojson::{Position, Value};

/// Returns the boundary of a polygon given by its rings.
///
/// A polygon with a single ring gives a `LineString`, a polygon with holes gives a `MultiLineString` with the
/// exterior ring first.
pub fn polygon_to_line(rings: &[Vec<Position>]) -> Value {
    match rings {
        [exterior] => Value::LineString(exterior.clone()),
        _ => Value::MultiLineString(rings.to_vec()),
    }
}
