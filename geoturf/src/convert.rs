//! Conversion of GeoJSON coordinates into `geo` geometries.

use geo::{Coord, LineString, MultiPolygon, Point, Polygon};
use geojson::Position;

use crate::error::{GeoturfError, Result};

pub(crate) fn convert_coord(position: &[f64]) -> Result<Coord> {
    match position {
        [x, y, ..] => Ok(Coord { x: *x, y: *y }),
        _ => Err(GeoturfError::InvalidGeoJson(format!(
            "position must contain at least 2 dimensions, got {}",
            position.len()
        ))),
    }
}

pub(crate) fn convert_point(position: &[f64]) -> Result<Point> {
    convert_coord(position).map(Point::from)
}

pub(crate) fn convert_line_string(line: &[Position]) -> Result<LineString> {
    Ok(LineString::new(
        line.iter()
            .map(|p| convert_coord(p))
            .collect::<Result<Vec<_>>>()?,
    ))
}

/// Rings are closed by `geo`. A polygon without rings becomes an empty polygon.
pub(crate) fn convert_polygon(rings: &[Vec<Position>]) -> Result<Polygon> {
    let mut rings = rings.iter().map(|ring| convert_line_string(ring));
    let exterior = rings
        .next()
        .transpose()?
        .unwrap_or_else(|| LineString::new(vec![]));

    Ok(Polygon::new(exterior, rings.collect::<Result<Vec<_>>>()?))
}

pub(crate) fn convert_multi_polygon(polygons: &[Vec<Vec<Position>>]) -> Result<MultiPolygon> {
    Ok(MultiPolygon::new(
        polygons
            .iter()
            .map(|p| convert_polygon(p))
            .collect::<Result<Vec<_>>>()?,
    ))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn extra_ordinates_are_ignored() {
        assert_eq!(
            convert_coord(&[1.0, 2.0, 300.0]).unwrap(),
            Coord { x: 1.0, y: 2.0 }
        );
    }

    #[test]
    fn short_position_is_invalid() {
        assert_matches!(convert_coord(&[1.0]), Err(GeoturfError::InvalidGeoJson(_)));
        assert_matches!(
            convert_line_string(&[vec![0.0, 0.0], vec![]]),
            Err(GeoturfError::InvalidGeoJson(_))
        );
    }

    #[test]
    fn polygon_rings_are_closed() {
        let polygon = convert_polygon(&[
            vec![vec![0.0, 0.0], vec![0.0, 4.0], vec![4.0, 4.0]],
            vec![vec![1.0, 1.0], vec![1.0, 2.0], vec![2.0, 2.0], vec![1.0, 1.0]],
        ])
        .unwrap();

        assert!(polygon.exterior().is_closed());
        assert_eq!(polygon.exterior().0.len(), 4);
        assert_eq!(polygon.interiors().len(), 1);
    }

    #[test]
    fn polygon_without_rings_is_empty() {
        let polygon = convert_polygon(&[]).unwrap();
        assert!(polygon.exterior().0.is_empty());
    }
}
