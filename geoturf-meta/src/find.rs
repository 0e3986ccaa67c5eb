//! Random access to a single segment or coordinate of a GeoJSON object.

use geojson::{Feature, Geometry, JsonObject, Position, Value};
use serde::{Deserialize, Serialize};

use crate::error::MetaError;
use crate::input::GeoJsonLike;

/// Selects the element returned by [`find_segment`] and [`find_point`].
///
/// All indices are signed: a negative index counts from the end of its array, so `-1` is the last element.
/// Each index is only used for the geometry kinds that have the corresponding level of nesting.
///
/// The options can be created in code or deserialized from a JSON record with camel case keys
/// (`featureIndex`, `multiFeatureIndex`, `geometryIndex`, `segmentIndex`, `coordIndex`, `properties`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct FindOptions {
    /// Index of the feature in a feature collection.
    pub feature_index: isize,
    /// Index of the part of a multi-part geometry.
    pub multi_feature_index: isize,
    /// Index of the polygon ring.
    pub geometry_index: isize,
    /// Index of the segment in a line or ring. Used by [`find_segment`].
    pub segment_index: isize,
    /// Index of the coordinate in a line or ring. Used by [`find_point`].
    pub coord_index: isize,
    /// Properties of the returned feature. If not set (or empty), the properties of the selected feature are
    /// used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<JsonObject>,
}

impl TryFrom<&serde_json::Value> for FindOptions {
    type Error = MetaError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        if !value.is_object() {
            return Err(MetaError::InvalidOptions(format!(
                "expected an options object, got {value}"
            )));
        }

        Self::deserialize(value).map_err(|err| MetaError::InvalidOptions(err.to_string()))
    }
}

/// Returns the segment selected by `options` as a two-point `LineString` feature.
///
/// Returns `Ok(None)` if the selected geometry is null or has no segments (`Point` and `MultiPoint`).
///
/// # Errors
///
/// * [`MetaError::InvalidOptions`] if any of the used indices points outside of its array.
/// * [`MetaError::InvalidGeoJson`] if the selected geometry is a `GeometryCollection`.
pub fn find_segment<'a>(
    input: impl Into<GeoJsonLike<'a>>,
    options: &FindOptions,
) -> Result<Option<Feature>, MetaError> {
    let Some((value, properties)) = select(input.into(), options)? else {
        return Ok(None);
    };

    let segment = match value {
        Value::Point(_) | Value::MultiPoint(_) => return Ok(None),
        Value::LineString(line) => segment_at(line, options)?,
        Value::Polygon(rings) => {
            let ring = index(rings, options.geometry_index, "geometry_index")?;
            segment_at(ring, options)?
        }
        Value::MultiLineString(lines) => {
            let line = index(lines, options.multi_feature_index, "multi_feature_index")?;
            segment_at(line, options)?
        }
        Value::MultiPolygon(polygons) => {
            let rings = index(polygons, options.multi_feature_index, "multi_feature_index")?;
            let ring = index(rings, options.geometry_index, "geometry_index")?;
            segment_at(ring, options)?
        }
        Value::GeometryCollection(_) => return Err(collection_error()),
    };

    Ok(Some(feature(Value::LineString(segment.to_vec()), properties)))
}

/// Returns the coordinate selected by `options` as a `Point` feature.
///
/// A `Point` geometry of a feature is returned as is, and a `MultiPoint` member is selected with
/// `multi_feature_index`. A bare `Point` or `MultiPoint` geometry and null geometries give `Ok(None)`.
///
/// # Errors
///
/// * [`MetaError::InvalidOptions`] if any of the used indices points outside of its array.
/// * [`MetaError::InvalidGeoJson`] if the selected geometry is a `GeometryCollection`.
pub fn find_point<'a>(
    input: impl Into<GeoJsonLike<'a>>,
    options: &FindOptions,
) -> Result<Option<Feature>, MetaError> {
    let Some((value, properties)) = select(input.into(), options)? else {
        return Ok(None);
    };

    let point = match value {
        Value::Point(point) => point,
        Value::MultiPoint(points) => {
            index(points, options.multi_feature_index, "multi_feature_index")?
        }
        Value::LineString(line) => index(line, options.coord_index, "coord_index")?,
        Value::Polygon(rings) => {
            let ring = index(rings, options.geometry_index, "geometry_index")?;
            index(ring, options.coord_index, "coord_index")?
        }
        Value::MultiLineString(lines) => {
            let line = index(lines, options.multi_feature_index, "multi_feature_index")?;
            index(line, options.coord_index, "coord_index")?
        }
        Value::MultiPolygon(polygons) => {
            let rings = index(polygons, options.multi_feature_index, "multi_feature_index")?;
            let ring = index(rings, options.geometry_index, "geometry_index")?;
            index(ring, options.coord_index, "coord_index")?
        }
        Value::GeometryCollection(_) => return Err(collection_error()),
    };

    Ok(Some(feature(Value::Point(point.clone()), properties)))
}

/// Geometry value selected by the feature index together with the properties of the resulting feature.
fn select<'a>(
    input: GeoJsonLike<'a>,
    options: &FindOptions,
) -> Result<Option<(&'a Value, Option<JsonObject>)>, MetaError> {
    let (geometry, feature_properties) = match input {
        GeoJsonLike::Geometry(geometry) => match geometry.value {
            Value::Point(_) | Value::MultiPoint(_) => return Ok(None),
            _ => (Some(geometry), None),
        },
        GeoJsonLike::Feature(feature) => (feature.geometry.as_ref(), feature.properties.as_ref()),
        GeoJsonLike::FeatureCollection(fc) => {
            let feature = index(&fc.features, options.feature_index, "feature_index")?;
            (feature.geometry.as_ref(), feature.properties.as_ref())
        }
    };

    let Some(geometry) = geometry else {
        log::trace!("Selected feature has no geometry");
        return Ok(None);
    };

    if matches!(geometry.value, Value::GeometryCollection(_)) {
        return Err(collection_error());
    }

    let properties = match &options.properties {
        Some(properties) if !properties.is_empty() => Some(properties.clone()),
        _ => feature_properties.cloned(),
    };

    Ok(Some((&geometry.value, properties)))
}

/// Resolves a signed index into an array of `len` elements. Negative indices count from the end.
fn resolve_index(index: isize, len: usize, field: &str) -> Result<usize, MetaError> {
    let resolved = if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        Some(index.unsigned_abs())
    };

    match resolved {
        Some(resolved) if resolved < len => Ok(resolved),
        _ => Err(MetaError::InvalidOptions(format!(
            "{field} {index} is out of range for {len} elements"
        ))),
    }
}

fn index<'v, T>(items: &'v [T], index: isize, field: &str) -> Result<&'v T, MetaError> {
    Ok(&items[resolve_index(index, items.len(), field)?])
}

/// Two consecutive coordinates of the line. A line of `n` coordinates has `n - 1` segments, so a negative
/// index resolves to `n + index - 1`.
fn segment_at<'v>(line: &'v [Position], options: &FindOptions) -> Result<&'v [Position], MetaError> {
    let segment_count = line.len().saturating_sub(1);
    let start = resolve_index(options.segment_index, segment_count, "segment_index")?;
    Ok(&line[start..start + 2])
}

fn feature(value: Value, properties: Option<JsonObject>) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties,
        foreign_members: None,
    }
}

fn collection_error() -> MetaError {
    MetaError::InvalidGeoJson("geometry collections do not support indexed lookup".into())
}
