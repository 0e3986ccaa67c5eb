//! Visiting of the lines and segments of linear and polygonal geometries.

use std::ops::ControlFlow;

use geojson::{Feature, Geometry, JsonObject, Position, Value};

use crate::cursor::{fold_result, fold_step, reduce_step, Cursor};
use crate::flatten::{flatten_each, Part};
use crate::input::GeoJsonLike;

/// A run of coordinates borrowed from a line string or a polygon ring, together with the properties of the
/// feature it belongs to.
///
/// Produced by [`segment_each`] (always two coordinates) and [`line_each`] (whole lines and rings).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineFeature<'a> {
    /// Coordinates of the line.
    pub coordinates: &'a [Position],
    /// Properties of the feature the line belongs to.
    pub properties: Option<&'a JsonObject>,
}

impl LineFeature<'_> {
    /// Creates an owned GeoJSON feature with a `LineString` geometry.
    pub fn to_feature(&self) -> Feature {
        Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::LineString(self.coordinates.to_vec()))),
            id: None,
            properties: self.properties.cloned(),
            foreign_members: None,
        }
    }
}

/// Calls `visit` for every segment (pair of consecutive coordinates) of every line and polygon ring of the
/// `input`. Multi-part geometries are flattened first (see [`flatten_each`]).
///
/// The cursor carries `feature_index` and `multi_feature_index` of the flattened part, `geometry_index` of the
/// ring (`0` for line strings) and `segment_index`, which starts from `0` for every line and every ring. Points
/// have no segments.
pub fn segment_each<'a, B>(
    input: impl Into<GeoJsonLike<'a>>,
    mut visit: impl FnMut(LineFeature<'a>, Cursor) -> ControlFlow<B>,
) -> ControlFlow<B> {
    each_line(input, |line, cursor| {
        for (segment_index, coordinates) in line.coordinates.windows(2).enumerate() {
            visit(
                LineFeature {
                    coordinates,
                    properties: line.properties,
                },
                Cursor {
                    segment_index,
                    ..cursor
                },
            )?;
        }

        ControlFlow::Continue(())
    })
}

/// Folds all segments of the `input` into a single value, starting with `initial`. See [`segment_each`].
pub fn segment_fold<'a, T>(
    input: impl Into<GeoJsonLike<'a>>,
    initial: T,
    mut combine: impl FnMut(T, LineFeature<'a>, Cursor) -> ControlFlow<T, T>,
) -> T {
    let mut acc = Some(initial);
    let _ = segment_each(input, |segment, cursor| {
        fold_step(&mut acc, segment, |prev, segment| {
            combine(prev, segment, cursor)
        })
    });

    fold_result(acc)
}

/// Same as [`segment_fold`] but the first segment becomes the initial value of the accumulator.
pub fn segment_reduce<'a, T>(
    input: impl Into<GeoJsonLike<'a>>,
    mut combine: impl FnMut(T, LineFeature<'a>, Cursor) -> ControlFlow<T, T>,
) -> Option<T>
where
    LineFeature<'a>: Into<T>,
{
    let mut acc = None;
    let _ = segment_each(input, |segment, cursor| {
        reduce_step(&mut acc, segment, |prev, segment| {
            combine(prev, segment, cursor)
        })
    });

    acc
}

/// Calls `visit` for every line string and every polygon ring of the `input`. Multi-part geometries are
/// flattened first (see [`flatten_each`]).
///
/// The cursor carries `feature_index` and `multi_feature_index` of the flattened part and `geometry_index` of the
/// ring (`0` for line strings).
pub fn line_each<'a, B>(
    input: impl Into<GeoJsonLike<'a>>,
    visit: impl FnMut(LineFeature<'a>, Cursor) -> ControlFlow<B>,
) -> ControlFlow<B> {
    each_line(input, visit)
}

/// Folds all lines and rings of the `input` into a single value, starting with `initial`. See [`line_each`].
pub fn line_fold<'a, T>(
    input: impl Into<GeoJsonLike<'a>>,
    initial: T,
    mut combine: impl FnMut(T, LineFeature<'a>, Cursor) -> ControlFlow<T, T>,
) -> T {
    let mut acc = Some(initial);
    let _ = line_each(input, |line, cursor| {
        fold_step(&mut acc, line, |prev, line| combine(prev, line, cursor))
    });

    fold_result(acc)
}

/// Same as [`line_fold`] but the first line becomes the initial value of the accumulator.
pub fn line_reduce<'a, T>(
    input: impl Into<GeoJsonLike<'a>>,
    mut combine: impl FnMut(T, LineFeature<'a>, Cursor) -> ControlFlow<T, T>,
) -> Option<T>
where
    LineFeature<'a>: Into<T>,
{
    let mut acc = None;
    let _ = line_each(input, |line, cursor| {
        reduce_step(&mut acc, line, |prev, line| combine(prev, line, cursor))
    });

    acc
}

fn each_line<'a, B>(
    input: impl Into<GeoJsonLike<'a>>,
    mut visit: impl FnMut(LineFeature<'a>, Cursor) -> ControlFlow<B>,
) -> ControlFlow<B> {
    flatten_each(input, |feature, cursor| {
        let line = |coordinates: &'a [Position]| LineFeature {
            coordinates,
            properties: feature.properties,
        };

        match feature.geometry {
            None | Some(Part::Point(_)) => {}
            Some(Part::LineString(coordinates)) => visit(line(coordinates), cursor)?,
            Some(Part::Polygon(rings)) => {
                for (geometry_index, ring) in rings.iter().enumerate() {
                    visit(
                        line(ring.as_slice()),
                        Cursor {
                            geometry_index,
                            ..cursor
                        },
                    )?;
                }
            }
        }

        ControlFlow::Continue(())
    })
}

#[cfg(test)]
mod tests {
    use geojson::FeatureCollection;

    use super::*;

    fn polygon_with_hole() -> Geometry {
        Geometry::new(Value::Polygon(vec![
            vec![
                vec![0.0, 0.0],
                vec![0.0, 10.0],
                vec![10.0, 10.0],
                vec![10.0, 0.0],
                vec![0.0, 0.0],
            ],
            vec![vec![2.0, 2.0], vec![2.0, 3.0], vec![3.0, 3.0], vec![2.0, 2.0]],
        ]))
    }

    fn segments(input: GeoJsonLike<'_>) -> Vec<(Vec<Position>, Cursor)> {
        let mut visited = vec![];
        let _ = segment_each(input, |segment, cursor| {
            visited.push((segment.coordinates.to_vec(), cursor));
            ControlFlow::<()>::Continue(())
        });
        visited
    }

    #[test]
    fn segment_index_restarts_per_ring() {
        let polygon = polygon_with_hole();
        let visited = segments((&polygon).into());
        assert_eq!(visited.len(), 7);

        let indices: Vec<_> = visited
            .iter()
            .map(|(_, c)| (c.geometry_index, c.segment_index))
            .collect();
        assert_eq!(
            indices,
            vec![(0, 0), (0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)]
        );
        assert_eq!(visited[4].0, vec![vec![2.0, 2.0], vec![2.0, 3.0]]);
    }

    #[test]
    fn multi_line_segments_have_part_index() {
        let geometry = Geometry::new(Value::MultiLineString(vec![
            vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![2.0, 0.0]],
            vec![vec![5.0, 5.0], vec![6.0, 6.0]],
        ]));
        let indices: Vec<_> = segments((&geometry).into())
            .iter()
            .map(|(_, c)| (c.multi_feature_index, c.segment_index))
            .collect();
        assert_eq!(indices, vec![(0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn points_have_no_segments() {
        let fc = FeatureCollection {
            bbox: None,
            features: vec![
                Feature::from(Geometry::new(Value::Point(vec![0.0, 0.0]))),
                Feature::from(Geometry::new(Value::MultiPoint(vec![
                    vec![0.0, 0.0],
                    vec![1.0, 1.0],
                ]))),
            ],
            foreign_members: None,
        };
        assert!(segments((&fc).into()).is_empty());
    }

    #[test]
    fn segment_keeps_properties() {
        let mut properties = JsonObject::new();
        properties.insert("kind".into(), "road".into());
        let feature = Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::LineString(vec![
                vec![0.0, 0.0],
                vec![1.0, 1.0],
            ]))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        };

        let _ = segment_each(&feature, |segment, _| {
            let owned = segment.to_feature();
            assert_eq!(owned.properties, feature.properties);
            assert_eq!(
                owned.geometry.map(|g| g.value),
                Some(Value::LineString(vec![vec![0.0, 0.0], vec![1.0, 1.0]]))
            );
            ControlFlow::<()>::Continue(())
        });
    }

    #[test]
    fn segment_fold_and_reduce() {
        let polygon = polygon_with_hole();
        let count = segment_fold(&polygon, 0, |acc, _, _| ControlFlow::Continue(acc + 1));
        assert_eq!(count, 7);

        let first = segment_reduce(&polygon, |acc: LineFeature<'_>, _, _| {
            ControlFlow::Break(acc)
        });
        assert_eq!(
            first.map(|s| s.coordinates.to_vec()),
            Some(vec![vec![0.0, 0.0], vec![0.0, 10.0]])
        );
    }

    #[test]
    fn lines_of_polygon_are_rings() {
        let polygon = polygon_with_hole();
        let mut rings = vec![];
        let _ = line_each(&polygon, |line, cursor| {
            rings.push((line.coordinates.len(), cursor.geometry_index));
            ControlFlow::<()>::Continue(())
        });
        assert_eq!(rings, vec![(5, 0), (4, 1)]);
    }

    #[test]
    fn line_fold_and_reduce() {
        let geometry = Geometry::new(Value::MultiLineString(vec![
            vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![2.0, 0.0]],
            vec![vec![5.0, 5.0], vec![6.0, 6.0]],
        ]));
        let total = line_fold(&geometry, 0, |acc, line, _| {
            ControlFlow::Continue(acc + line.coordinates.len())
        });
        assert_eq!(total, 5);

        let longest = line_reduce(&geometry, |acc: LineFeature<'_>, line, _| {
            if line.coordinates.len() > acc.coordinates.len() {
                ControlFlow::Continue(line)
            } else {
                ControlFlow::Continue(acc)
            }
        });
        assert_eq!(longest.map(|l| l.coordinates.len()), Some(3));
    }
}
