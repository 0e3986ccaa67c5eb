//! Position of a traversal inside of the visited GeoJSON object.

use std::ops::ControlFlow;

/// Indices describing where in the input structure a visited element is located.
///
/// Which indices are meaningful depends on the traversal:
/// * `feature_index` - index of the top level feature, always set;
/// * `multi_feature_index` - index of the part of a multi-part geometry (see [`coord_each`](crate::coord_each)
///   for the exact rules);
/// * `geometry_index` - index of the ring inside of a polygon;
/// * `coord_index` - running index of the coordinate inside of the current feature;
/// * `segment_index` - index of the segment inside of the current line or ring.
///
/// Indices are reset to `0` every time a traversal descends into a new part.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    /// Index of the top level feature.
    pub feature_index: usize,
    /// Index of the part of a multi-part geometry.
    pub multi_feature_index: usize,
    /// Index of the ring (or line) inside of the part.
    pub geometry_index: usize,
    /// Running index of the coordinate.
    pub coord_index: usize,
    /// Index of the segment inside of the line or ring.
    pub segment_index: usize,
}

impl Cursor {
    pub(crate) fn feature(feature_index: usize) -> Self {
        Self {
            feature_index,
            ..Default::default()
        }
    }
}

/// One step of a `*_fold` traversal: replaces the accumulator with the value returned by `combine`.
///
/// `Break` of the combining function stops the traversal, keeping the value it carries as the result.
pub(crate) fn fold_step<T, I>(
    acc: &mut Option<T>,
    item: I,
    combine: impl FnOnce(T, I) -> ControlFlow<T, T>,
) -> ControlFlow<()> {
    let Some(current) = acc.take() else {
        return ControlFlow::Break(());
    };

    let (value, flow) = match combine(current, item) {
        ControlFlow::Continue(value) => (value, ControlFlow::Continue(())),
        ControlFlow::Break(value) => (value, ControlFlow::Break(())),
    };
    *acc = Some(value);

    flow
}

/// One step of a `*_reduce` traversal: the first item seeds the accumulator without calling `combine`, all the
/// following items are folded with [`fold_step`].
pub(crate) fn reduce_step<T, I>(
    acc: &mut Option<T>,
    item: I,
    combine: impl FnOnce(T, I) -> ControlFlow<T, T>,
) -> ControlFlow<()>
where
    I: Into<T>,
{
    if acc.is_none() {
        *acc = Some(item.into());
        return ControlFlow::Continue(());
    }

    fold_step(acc, item, combine)
}

/// Extracts the result of a `*_fold` traversal.
pub(crate) fn fold_result<T>(acc: Option<T>) -> T {
    acc.expect("accumulator is restored after every fold step")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_item_seeds_accumulator() {
        let mut acc: Option<i32> = None;
        let mut calls = 0;
        let _ = reduce_step(&mut acc, 5, |a, b| {
            calls += 1;
            ControlFlow::Continue(a + b)
        });
        assert_eq!(acc, Some(5));
        assert_eq!(calls, 0);

        let _ = reduce_step(&mut acc, 3, |a, b| ControlFlow::Continue(a + b));
        assert_eq!(acc, Some(8));
    }

    #[test]
    fn break_keeps_value_and_stops() {
        let mut acc = Some(1);
        let flow = fold_step(&mut acc, 10, |a, b| ControlFlow::Break(a * b));
        assert_eq!(flow, ControlFlow::Break(()));
        assert_eq!(acc, Some(10));
    }
}
