//! Visiting of the geometries of GeoJSON objects.

use std::ops::ControlFlow;

use geojson::{Geometry, Value};

use crate::cursor::{fold_result, fold_step, reduce_step};
use crate::input::{FeatureInfo, GeoJsonLike};

/// Calls `visit` once for every geometry of the `input`.
///
/// A `GeometryCollection` of a feature is expanded into its members, all of them reported with the same feature
/// info. Members of the collection are passed as is, so a nested collection is given to the visitor as a single
/// geometry. A feature with null geometry results in a single call with `None` geometry.
///
/// Traversal stops as soon as the visitor returns [`ControlFlow::Break`], and the break value is returned.
pub fn geom_each<'a, B>(
    input: impl Into<GeoJsonLike<'a>>,
    mut visit: impl FnMut(Option<&'a Geometry>, FeatureInfo<'a>) -> ControlFlow<B>,
) -> ControlFlow<B> {
    let input = input.into();
    for index in 0..input.feature_count() {
        let Some((geometry, info)) = input.feature_at(index) else {
            continue;
        };

        match geometry {
            None => visit(None, info)?,
            Some(Geometry {
                value: Value::GeometryCollection(members),
                ..
            }) => {
                for member in members {
                    visit(Some(member), info)?;
                }
            }
            Some(geometry) => visit(Some(geometry), info)?,
        }
    }

    ControlFlow::Continue(())
}

/// Folds all the geometries of the `input` into a single value, starting with `initial`. See [`geom_each`].
pub fn geom_fold<'a, T>(
    input: impl Into<GeoJsonLike<'a>>,
    initial: T,
    mut combine: impl FnMut(T, Option<&'a Geometry>, FeatureInfo<'a>) -> ControlFlow<T, T>,
) -> T {
    let mut acc = Some(initial);
    let _ = geom_each(input, |geometry, info| {
        fold_step(&mut acc, geometry, |prev, geometry| {
            combine(prev, geometry, info)
        })
    });

    fold_result(acc)
}

/// Same as [`geom_fold`] but the first visited geometry becomes the initial value of the accumulator.
///
/// Returns `None` if nothing was visited.
pub fn geom_reduce<'a, T>(
    input: impl Into<GeoJsonLike<'a>>,
    mut combine: impl FnMut(T, Option<&'a Geometry>, FeatureInfo<'a>) -> ControlFlow<T, T>,
) -> Option<T>
where
    Option<&'a Geometry>: Into<T>,
{
    let mut acc = None;
    let _ = geom_each(input, |geometry, info| {
        reduce_step(&mut acc, geometry, |prev, geometry| {
            combine(prev, geometry, info)
        })
    });

    acc
}
