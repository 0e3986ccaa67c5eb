//! Flattening of multi-part geometries into single-part features.

use std::ops::ControlFlow;

use geojson::feature::Id;
use geojson::{Bbox, Feature, Geometry, JsonObject, Position, Value};

use crate::cursor::{fold_result, fold_step, reduce_step, Cursor};
use crate::geom::geom_each;
use crate::input::{FeatureInfo, GeoJsonLike};
use crate::GeometryKind;

/// Single-part geometry borrowed from a GeoJSON object.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Part<'a> {
    /// Coordinates of a point.
    Point(&'a [f64]),
    /// Coordinates of a line string.
    LineString(&'a [Position]),
    /// Rings of a polygon. The first ring is the exterior, the rest are holes.
    Polygon(&'a [Vec<Position>]),
}

impl<'a> Part<'a> {
    /// Kind of the geometry.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Part::Point(_) => GeometryKind::Point,
            Part::LineString(_) => GeometryKind::LineString,
            Part::Polygon(_) => GeometryKind::Polygon,
        }
    }

    /// Creates an owned GeoJSON value with the copy of the part's coordinates.
    pub fn to_value(&self) -> Value {
        match self {
            Part::Point(coord) => Value::Point(coord.to_vec()),
            Part::LineString(line) => Value::LineString(line.to_vec()),
            Part::Polygon(rings) => Value::Polygon(rings.to_vec()),
        }
    }

    /// Returns the part if the value is a single-part geometry.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Point(coord) => Some(Part::Point(coord)),
            Value::LineString(line) => Some(Part::LineString(line)),
            Value::Polygon(rings) => Some(Part::Polygon(rings)),
            Value::MultiPoint(_)
            | Value::MultiLineString(_)
            | Value::MultiPolygon(_)
            | Value::GeometryCollection(_) => None,
        }
    }
}

/// Feature with a single-part geometry produced by [`flatten_each`].
///
/// Parts of a multi-part geometry share the properties of the original feature, but not its bbox and id.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlatFeature<'a> {
    /// Geometry of the feature. `None` for features with null geometry.
    pub geometry: Option<Part<'a>>,
    /// Properties of the original feature.
    pub properties: Option<&'a JsonObject>,
    /// Bounding box of the original feature, if the geometry was not split.
    pub bbox: Option<&'a Bbox>,
    /// Id of the original feature, if the geometry was not split.
    pub id: Option<&'a Id>,
}

impl FlatFeature<'_> {
    /// Creates an owned GeoJSON feature from the flattened one.
    pub fn to_feature(&self) -> Feature {
        Feature {
            bbox: self.bbox.cloned(),
            geometry: self.geometry.map(|part| Geometry::new(part.to_value())),
            id: self.id.cloned(),
            properties: self.properties.cloned(),
            foreign_members: None,
        }
    }
}

/// Calls `visit` for every single-part geometry of the `input`.
///
/// `MultiPoint`, `MultiLineString` and `MultiPolygon` are split into `Point`, `LineString` and `Polygon`
/// parts, with `multi_feature_index` of the cursor set to the index of the part. Single-part geometries and null
/// geometries are passed through with `multi_feature_index` of `0`. Members of geometry collections (including
/// nested ones) are flattened one by one.
///
/// Only `feature_index` and `multi_feature_index` of the cursor are set.
pub fn flatten_each<'a, B>(
    input: impl Into<GeoJsonLike<'a>>,
    mut visit: impl FnMut(FlatFeature<'a>, Cursor) -> ControlFlow<B>,
) -> ControlFlow<B> {
    geom_each(input, |geometry, info| {
        let cursor = Cursor::feature(info.index);
        match geometry {
            Some(geometry) => flatten_value(&geometry.value, info, cursor, &mut visit),
            None => visit(whole(None, info), cursor),
        }
    })
}

/// Folds all single-part features of the `input` into a single value, starting with `initial`.
/// See [`flatten_each`].
pub fn flatten_fold<'a, T>(
    input: impl Into<GeoJsonLike<'a>>,
    initial: T,
    mut combine: impl FnMut(T, FlatFeature<'a>, Cursor) -> ControlFlow<T, T>,
) -> T {
    let mut acc = Some(initial);
    let _ = flatten_each(input, |feature, cursor| {
        fold_step(&mut acc, feature, |prev, feature| {
            combine(prev, feature, cursor)
        })
    });

    fold_result(acc)
}

/// Same as [`flatten_fold`] but the first single-part feature becomes the initial value of the accumulator.
pub fn flatten_reduce<'a, T>(
    input: impl Into<GeoJsonLike<'a>>,
    mut combine: impl FnMut(T, FlatFeature<'a>, Cursor) -> ControlFlow<T, T>,
) -> Option<T>
where
    FlatFeature<'a>: Into<T>,
{
    let mut acc = None;
    let _ = flatten_each(input, |feature, cursor| {
        reduce_step(&mut acc, feature, |prev, feature| {
            combine(prev, feature, cursor)
        })
    });

    acc
}

/// Returns all single-part features of the `input` in the [`flatten_each`] order.
pub fn flatten_all<'a>(input: impl Into<GeoJsonLike<'a>>) -> Vec<FlatFeature<'a>> {
    let mut features = vec![];
    let _ = flatten_each(input, |feature, _| {
        features.push(feature);
        ControlFlow::<()>::Continue(())
    });

    features
}

fn whole<'a>(geometry: Option<Part<'a>>, info: FeatureInfo<'a>) -> FlatFeature<'a> {
    FlatFeature {
        geometry,
        properties: info.properties,
        bbox: info.bbox,
        id: info.id,
    }
}

fn flatten_value<'a, B>(
    value: &'a Value,
    info: FeatureInfo<'a>,
    cursor: Cursor,
    visit: &mut impl FnMut(FlatFeature<'a>, Cursor) -> ControlFlow<B>,
) -> ControlFlow<B> {
    let split = |part: Part<'a>| FlatFeature {
        geometry: Some(part),
        properties: info.properties,
        bbox: None,
        id: None,
    };
    let at = |multi_feature_index: usize| Cursor {
        multi_feature_index,
        ..cursor
    };

    match value {
        Value::Point(_) | Value::LineString(_) | Value::Polygon(_) => {
            visit(whole(Part::from_value(value), info), cursor)?
        }
        Value::MultiPoint(points) => {
            for (index, point) in points.iter().enumerate() {
                visit(split(Part::Point(point)), at(index))?;
            }
        }
        Value::MultiLineString(lines) => {
            for (index, line) in lines.iter().enumerate() {
                visit(split(Part::LineString(line)), at(index))?;
            }
        }
        Value::MultiPolygon(polygons) => {
            for (index, polygon) in polygons.iter().enumerate() {
                visit(split(Part::Polygon(polygon)), at(index))?;
            }
        }
        Value::GeometryCollection(members) => {
            for member in members {
                flatten_value(&member.value, info, cursor, visit)?;
            }
        }
    }

    ControlFlow::Continue(())
}
