//! Visiting of the features and feature properties.

use std::ops::ControlFlow;

use geojson::{Feature, JsonObject};

use crate::cursor::{fold_result, fold_step, reduce_step};
use crate::input::GeoJsonLike;

/// Calls `visit` for every feature of the `input` together with the feature index.
///
/// A single feature is visited once with index `0`. A bare geometry is not a feature, so nothing is visited.
pub fn feature_each<'a, B>(
    input: impl Into<GeoJsonLike<'a>>,
    mut visit: impl FnMut(&'a Feature, usize) -> ControlFlow<B>,
) -> ControlFlow<B> {
    match input.into() {
        GeoJsonLike::Geometry(_) => {}
        GeoJsonLike::Feature(feature) => visit(feature, 0)?,
        GeoJsonLike::FeatureCollection(fc) => {
            for (index, feature) in fc.features.iter().enumerate() {
                visit(feature, index)?;
            }
        }
    }

    ControlFlow::Continue(())
}

/// Folds all features of the `input` into a single value, starting with `initial`. See [`feature_each`].
pub fn feature_fold<'a, T>(
    input: impl Into<GeoJsonLike<'a>>,
    initial: T,
    mut combine: impl FnMut(T, &'a Feature, usize) -> ControlFlow<T, T>,
) -> T {
    let mut acc = Some(initial);
    let _ = feature_each(input, |feature, index| {
        fold_step(&mut acc, feature, |prev, feature| {
            combine(prev, feature, index)
        })
    });

    fold_result(acc)
}

/// Same as [`feature_fold`] but the first feature becomes the initial value of the accumulator.
pub fn feature_reduce<'a, T>(
    input: impl Into<GeoJsonLike<'a>>,
    mut combine: impl FnMut(T, &'a Feature, usize) -> ControlFlow<T, T>,
) -> Option<T>
where
    &'a Feature: Into<T>,
{
    let mut acc = None;
    let _ = feature_each(input, |feature, index| {
        reduce_step(&mut acc, feature, |prev, feature| {
            combine(prev, feature, index)
        })
    });

    acc
}

/// Calls `visit` for the properties of every feature of the `input`. See [`feature_each`].
pub fn prop_each<'a, B>(
    input: impl Into<GeoJsonLike<'a>>,
    mut visit: impl FnMut(Option<&'a JsonObject>, usize) -> ControlFlow<B>,
) -> ControlFlow<B> {
    feature_each(input, |feature, index| {
        visit(feature.properties.as_ref(), index)
    })
}

/// Folds the properties of all features of the `input` into a single value, starting with `initial`.
pub fn prop_fold<'a, T>(
    input: impl Into<GeoJsonLike<'a>>,
    initial: T,
    mut combine: impl FnMut(T, Option<&'a JsonObject>, usize) -> ControlFlow<T, T>,
) -> T {
    let mut acc = Some(initial);
    let _ = prop_each(input, |properties, index| {
        fold_step(&mut acc, properties, |prev, properties| {
            combine(prev, properties, index)
        })
    });

    fold_result(acc)
}

/// Same as [`prop_fold`] but the properties of the first feature become the initial value of the accumulator.
pub fn prop_reduce<'a, T>(
    input: impl Into<GeoJsonLike<'a>>,
    mut combine: impl FnMut(T, Option<&'a JsonObject>, usize) -> ControlFlow<T, T>,
) -> Option<T>
where
    Option<&'a JsonObject>: Into<T>,
{
    let mut acc = None;
    let _ = prop_each(input, |properties, index| {
        reduce_step(&mut acc, properties, |prev, properties| {
            combine(prev, properties, index)
        })
    });

    acc
}

#[cfg(test)]
mod tests {
    use geojson::{FeatureCollection, Geometry, Value};
    use serde_json::json;

    use super::*;

    fn with_population(population: u64) -> Feature {
        let mut properties = JsonObject::new();
        properties.insert("population".into(), json!(population));

        Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Point(vec![0.0, 0.0]))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }

    fn collection() -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: vec![with_population(10), with_population(20), with_population(30)],
            foreign_members: None,
        }
    }

    #[test]
    fn features_are_visited_in_order() {
        let fc = collection();
        let mut indices = vec![];
        let _ = feature_each(&fc, |_, index| {
            indices.push(index);
            ControlFlow::<()>::Continue(())
        });
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn bare_geometry_has_no_features() {
        let geometry = Geometry::new(Value::Point(vec![0.0, 0.0]));
        let flow = feature_each(&geometry, |_, _| ControlFlow::Break(()));
        assert_eq!(flow, ControlFlow::Continue(()));
    }

    #[test]
    fn prop_each_stops_on_break() {
        let fc = collection();
        let mut seen = vec![];
        let _ = prop_each(&fc, |properties, index| {
            seen.push(index);
            let population = properties
                .and_then(|p| p.get("population"))
                .and_then(|v| v.as_u64());
            if population == Some(20) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(seen, vec![0, 1]);
    }

    #[test]
    fn prop_fold_sums_values() {
        let fc = collection();
        let total = prop_fold(&fc, 0, |acc, properties, _| {
            let population = properties
                .and_then(|p| p.get("population"))
                .and_then(|v| v.as_u64())
                .unwrap_or_default();
            ControlFlow::Continue(acc + population)
        });
        assert_eq!(total, 60);
    }

    #[test]
    fn feature_reduce_without_initial_value() {
        let fc = collection();
        let last = feature_reduce(&fc, |_: &Feature, feature, _| {
            ControlFlow::Continue(feature)
        });
        assert_eq!(last, fc.features.last());

        let empty = FeatureCollection {
            bbox: None,
            features: vec![],
            foreign_members: None,
        };
        assert!(feature_reduce(&empty, |acc: &Feature, _, _| ControlFlow::Continue(acc)).is_none());
    }

    #[test]
    fn feature_fold_counts_features() {
        let fc = collection();
        assert_eq!(
            feature_fold(&fc, 0, |acc, _, _| ControlFlow::Continue(acc + 1)),
            3
        );
    }
}
