//! Visiting of the individual coordinates of GeoJSON objects.

use std::ops::ControlFlow;

use geojson::{Position, Value};

use crate::cursor::{fold_result, fold_step, reduce_step, Cursor};
use crate::input::GeoJsonLike;

/// Calls `visit` for every coordinate of the `input`, in depth first order.
///
/// The cursor passed to the visitor is filled as follows:
/// * `Point` - single coordinate with `multi_feature_index` and `geometry_index` of `0`;
/// * `LineString` - all coordinates belong to the part `0`;
/// * `MultiPoint` - every point is a separate part;
/// * `Polygon` - all coordinates belong to the part `0`, `geometry_index` is the index of the ring;
/// * `MultiLineString` - every line is a separate part;
/// * `MultiPolygon` - every polygon is a separate part, `geometry_index` is the index of the ring inside
///   of the polygon;
/// * `GeometryCollection` - members are visited one by one, part and ring indices start from `0` for every
///   member.
///
/// `coord_index` runs through all the coordinates of a top level feature (including all members of a geometry
/// collection) and starts from `0` for every feature. Features without geometry are skipped.
///
/// If `exclude_wrap_coord` is set, the last coordinate of every polygon ring (the one repeating the first
/// coordinate) is not visited.
///
/// Traversal stops as soon as the visitor returns [`ControlFlow::Break`], and the break value is returned.
pub fn coord_each<'a, B>(
    input: impl Into<GeoJsonLike<'a>>,
    exclude_wrap_coord: bool,
    visit: impl FnMut(&'a [f64], Cursor) -> ControlFlow<B>,
) -> ControlFlow<B> {
    let input = input.into();
    let mut visitor = CoordVisitor {
        visit,
        exclude_wrap_coord,
        feature_index: 0,
        coord_index: 0,
    };

    for feature_index in 0..input.feature_count() {
        let Some((Some(geometry), _)) = input.feature_at(feature_index) else {
            continue;
        };

        visitor.feature_index = feature_index;
        visitor.coord_index = 0;
        visitor.geometry(&geometry.value)?;
    }

    ControlFlow::Continue(())
}

/// Folds all the coordinates of the `input` into a single value, starting with `initial`. See [`coord_each`]
/// for the traversal order.
///
/// The fold stops early if `combine` returns [`ControlFlow::Break`]; the value it carries is the result.
pub fn coord_fold<'a, T>(
    input: impl Into<GeoJsonLike<'a>>,
    exclude_wrap_coord: bool,
    initial: T,
    mut combine: impl FnMut(T, &'a [f64], Cursor) -> ControlFlow<T, T>,
) -> T {
    let mut acc = Some(initial);
    let _ = coord_each(input, exclude_wrap_coord, |coord, cursor| {
        fold_step(&mut acc, coord, |prev, coord| combine(prev, coord, cursor))
    });

    fold_result(acc)
}

/// Same as [`coord_fold`] but without an initial value: the first coordinate becomes the accumulator and
/// `combine` is called starting from the second coordinate.
///
/// Returns `None` if the `input` has no coordinates.
pub fn coord_reduce<'a, T>(
    input: impl Into<GeoJsonLike<'a>>,
    exclude_wrap_coord: bool,
    mut combine: impl FnMut(T, &'a [f64], Cursor) -> ControlFlow<T, T>,
) -> Option<T>
where
    &'a [f64]: Into<T>,
{
    let mut acc = None;
    let _ = coord_each(input, exclude_wrap_coord, |coord, cursor| {
        reduce_step(&mut acc, coord, |prev, coord| combine(prev, coord, cursor))
    });

    acc
}

/// Returns all coordinates of the `input` in the [`coord_each`] order, including ring closing coordinates.
pub fn coord_all<'a>(input: impl Into<GeoJsonLike<'a>>) -> Vec<&'a [f64]> {
    let mut coords = vec![];
    let _ = coord_each(input, false, |coord, _| {
        coords.push(coord);
        ControlFlow::<()>::Continue(())
    });

    coords
}

struct CoordVisitor<F> {
    visit: F,
    exclude_wrap_coord: bool,
    feature_index: usize,
    coord_index: usize,
}

impl<F> CoordVisitor<F> {
    fn geometry<'a, B>(&mut self, value: &'a Value) -> ControlFlow<B>
    where
        F: FnMut(&'a [f64], Cursor) -> ControlFlow<B>,
    {
        match value {
            Value::Point(coord) => self.coord(coord, 0, 0)?,
            Value::LineString(line) => {
                for coord in line {
                    self.coord(coord, 0, 0)?;
                }
            }
            Value::MultiPoint(points) => {
                for (multi_feature_index, coord) in points.iter().enumerate() {
                    self.coord(coord, multi_feature_index, 0)?;
                }
            }
            Value::Polygon(rings) => self.rings(rings, 0)?,
            Value::MultiLineString(lines) => {
                for (multi_feature_index, line) in lines.iter().enumerate() {
                    for coord in line {
                        self.coord(coord, multi_feature_index, 0)?;
                    }
                }
            }
            Value::MultiPolygon(polygons) => {
                for (multi_feature_index, rings) in polygons.iter().enumerate() {
                    self.rings(rings, multi_feature_index)?;
                }
            }
            Value::GeometryCollection(geometries) => {
                for geometry in geometries {
                    self.geometry(&geometry.value)?;
                }
            }
        }

        ControlFlow::Continue(())
    }

    fn rings<'a, B>(
        &mut self,
        rings: &'a [Vec<Position>],
        multi_feature_index: usize,
    ) -> ControlFlow<B>
    where
        F: FnMut(&'a [f64], Cursor) -> ControlFlow<B>,
    {
        for (geometry_index, ring) in rings.iter().enumerate() {
            let ring = if self.exclude_wrap_coord {
                &ring[..ring.len().saturating_sub(1)]
            } else {
                &ring[..]
            };

            for coord in ring {
                self.coord(coord, multi_feature_index, geometry_index)?;
            }
        }

        ControlFlow::Continue(())
    }

    fn coord<'a, B>(
        &mut self,
        coord: &'a [f64],
        multi_feature_index: usize,
        geometry_index: usize,
    ) -> ControlFlow<B>
    where
        F: FnMut(&'a [f64], Cursor) -> ControlFlow<B>,
    {
        let cursor = Cursor {
            feature_index: self.feature_index,
            multi_feature_index,
            geometry_index,
            coord_index: self.coord_index,
            segment_index: 0,
        };
        self.coord_index += 1;

        (self.visit)(coord, cursor)
    }
}
