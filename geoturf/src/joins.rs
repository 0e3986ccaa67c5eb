//! Spatial joins of point and polygon collections.

use std::ops::ControlFlow;

use geo::{MultiPolygon, Point, Polygon};
use geojson::{Feature, FeatureCollection, Value};
use geoturf_meta::{geom_each, GeoJsonLike, GeometryKind, MetaError};

use crate::convert::{convert_multi_polygon, convert_point, convert_polygon};
use crate::error::{GeoturfError, Result};
use crate::point_in_polygon::point_in_polygon;

/// How the points of a join are processed.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum ProcessingMode {
    /// All points are checked on the calling thread.
    Sequential,
    /// Chunks of points are checked in parallel on the `rayon` thread pool. Without the `parallel` feature
    /// this is the same as [`ProcessingMode::Sequential`].
    #[default]
    Parallel,
}

/// Options of [`points_within_polygon`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct JoinOptions {
    /// Number of points in one unit of parallel work. Must be greater than zero.
    pub chunk_size: usize,
    /// How the points are processed.
    pub mode: ProcessingMode,
}

impl Default for JoinOptions {
    fn default() -> Self {
        Self {
            chunk_size: 1,
            mode: ProcessingMode::default(),
        }
    }
}

/// Returns the point features that lie inside any of the polygons, boundary included.
///
/// `points` can be a `Point` geometry, a feature with a `Point` geometry, or a collection of such features. A
/// single point is wrapped into a feature. The result contains each matching input feature once, in the input
/// order, regardless of the number of polygons it lies in and of the processing mode. Features equal to an
/// earlier match are dropped.
///
/// Every geometry in `polygons` must be a `Polygon` or a `MultiPolygon`. Features without geometry are
/// skipped.
///
/// # Errors
///
/// * [`GeoturfError::EmptyInput`] if there are no points.
/// * [`GeoturfError::UnsupportedGeometryKind`] if a point feature is not a point, or a polygon is not
///   polygonal.
/// * [`GeoturfError::InvalidGeoJson`] if a point feature has no geometry, or a position has less than two
///   ordinates.
/// * [`GeoturfError::Meta`] with [`MetaError::InvalidOptions`] if the chunk size is zero.
pub fn points_within_polygon<'a, 'b>(
    points: impl Into<GeoJsonLike<'a>>,
    polygons: impl Into<GeoJsonLike<'b>>,
    options: &JoinOptions,
) -> Result<FeatureCollection> {
    if options.chunk_size == 0 {
        return Err(MetaError::InvalidOptions("chunk_size must be greater than zero".into()).into());
    }

    let features = point_features(points.into());
    if features.is_empty() {
        return Err(GeoturfError::EmptyInput("points"));
    }

    let areas = polygonal_areas(polygons.into())?;
    let matches = match options.mode {
        ProcessingMode::Sequential => check_chunk(&features, &areas)?,
        ProcessingMode::Parallel => check_parallel(&features, &areas, options.chunk_size)?,
    };
    let matches = unique(matches);

    log::debug!(
        "{} of {} points are within {} polygons",
        matches.len(),
        features.len(),
        areas.len()
    );

    Ok(FeatureCollection {
        bbox: None,
        features: matches.into_iter().map(|feature| feature.into_owned()).collect(),
        foreign_members: None,
    })
}

enum Area {
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
}

impl Area {
    fn contains(&self, point: &Point) -> bool {
        match self {
            Self::Polygon(polygon) => point_in_polygon(point, polygon, false),
            Self::MultiPolygon(polygons) => point_in_polygon(point, polygons, false),
        }
    }
}

type PointFeature<'a> = std::borrow::Cow<'a, Feature>;

fn point_features(input: GeoJsonLike<'_>) -> Vec<PointFeature<'_>> {
    match input {
        GeoJsonLike::Geometry(geometry) => {
            vec![PointFeature::Owned(Feature::from(geometry.clone()))]
        }
        GeoJsonLike::Feature(feature) => vec![PointFeature::Borrowed(feature)],
        GeoJsonLike::FeatureCollection(fc) => {
            fc.features.iter().map(PointFeature::Borrowed).collect()
        }
    }
}

fn polygonal_areas(input: GeoJsonLike<'_>) -> Result<Vec<Area>> {
    let mut areas = vec![];
    let result = geom_each(input, |geometry, _| {
        let area = match geometry.map(|g| &g.value) {
            None => return ControlFlow::Continue(()),
            Some(Value::Polygon(rings)) => convert_polygon(rings).map(Area::Polygon),
            Some(Value::MultiPolygon(polygons)) => {
                convert_multi_polygon(polygons).map(Area::MultiPolygon)
            }
            Some(other) => Err(GeoturfError::UnsupportedGeometryKind(GeometryKind::of(
                other,
            ))),
        };

        match area {
            Ok(area) => {
                areas.push(area);
                ControlFlow::Continue(())
            }
            Err(err) => ControlFlow::Break(err),
        }
    });

    match result {
        ControlFlow::Break(err) => Err(err),
        ControlFlow::Continue(()) => Ok(areas),
    }
}

fn check_chunk<'a>(features: &[PointFeature<'a>], areas: &[Area]) -> Result<Vec<PointFeature<'a>>> {
    let mut matches = vec![];
    for feature in features {
        let point = feature_point(feature)?;
        if areas.iter().any(|area| area.contains(&point)) {
            matches.push(feature.clone());
        }
    }

    Ok(matches)
}

fn unique<'a>(features: Vec<PointFeature<'a>>) -> Vec<PointFeature<'a>> {
    let mut unique: Vec<PointFeature<'a>> = Vec::with_capacity(features.len());
    for feature in features {
        if !unique.contains(&feature) {
            unique.push(feature);
        }
    }

    unique
}

#[cfg(feature = "parallel")]
fn check_parallel<'a>(
    features: &[PointFeature<'a>],
    areas: &[Area],
    chunk_size: usize,
) -> Result<Vec<PointFeature<'a>>> {
    use rayon::prelude::*;

    log::debug!(
        "Checking {} points in chunks of {chunk_size}",
        features.len()
    );

    let chunks = features
        .par_chunks(chunk_size)
        .map(|chunk| check_chunk(chunk, areas))
        .collect::<Result<Vec<_>>>()?;

    Ok(chunks.into_iter().flatten().collect())
}

#[cfg(not(feature = "parallel"))]
fn check_parallel<'a>(
    features: &[PointFeature<'a>],
    areas: &[Area],
    _chunk_size: usize,
) -> Result<Vec<PointFeature<'a>>> {
    check_chunk(features, areas)
}

fn feature_point(feature: &Feature) -> Result<Point> {
    match feature.geometry.as_ref().map(|g| &g.value) {
        Some(Value::Point(point)) => convert_point(point),
        Some(other) => Err(GeoturfError::UnsupportedGeometryKind(GeometryKind::of(
            other,
        ))),
        None => Err(GeoturfError::InvalidGeoJson(
            "point feature has no geometry".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use geojson::Geometry;
    use serde_json::json;

    use super::*;

    fn points(coords: &[[f64; 2]]) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: coords
                .iter()
                .map(|c| Feature::from(Geometry::new(Value::Point(c.to_vec()))))
                .collect(),
            foreign_members: None,
        }
    }

    fn squares() -> FeatureCollection {
        serde_json::from_value(json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": null,
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[0, 0], [0, 10], [10, 10], [10, 0], [0, 0]]]
                    }
                },
                {
                    "type": "Feature",
                    "properties": null,
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[5, 5], [5, 15], [15, 15], [15, 5], [5, 5]]]
                    }
                },
                {
                    "type": "Feature",
                    "properties": null,
                    "geometry": null
                }
            ]
        }))
        .unwrap()
    }

    fn coords(fc: &FeatureCollection) -> Vec<Value> {
        fc.features
            .iter()
            .filter_map(|f| f.geometry.as_ref().map(|g| g.value.clone()))
            .collect()
    }

    #[test]
    fn keeps_input_order_and_no_duplicates() {
        let input = points(&[[12.0, 12.0], [20.0, 20.0], [7.0, 7.0], [1.0, 1.0], [10.0, 0.0]]);
        let expected = vec![
            Value::Point(vec![12.0, 12.0]),
            Value::Point(vec![7.0, 7.0]),
            Value::Point(vec![1.0, 1.0]),
            Value::Point(vec![10.0, 0.0]),
        ];

        for mode in [ProcessingMode::Sequential, ProcessingMode::Parallel] {
            for chunk_size in [1, 2, 10] {
                let result = points_within_polygon(
                    &input,
                    &squares(),
                    &JoinOptions { chunk_size, mode },
                )
                .unwrap();
                assert_eq!(coords(&result), expected);
            }
        }
    }

    #[test]
    fn equal_features_are_returned_once() {
        let input = points(&[[1.0, 1.0], [2.0, 2.0], [1.0, 1.0], [20.0, 20.0], [2.0, 2.0]]);
        for mode in [ProcessingMode::Sequential, ProcessingMode::Parallel] {
            let result =
                points_within_polygon(&input, &squares(), &JoinOptions { chunk_size: 2, mode }).unwrap();
            assert_eq!(
                coords(&result),
                vec![Value::Point(vec![1.0, 1.0]), Value::Point(vec![2.0, 2.0])]
            );
        }
    }

    #[test]
    fn single_point_is_wrapped() {
        let point = Geometry::new(Value::Point(vec![1.0, 1.0]));
        let result = points_within_polygon(&point, &squares(), &JoinOptions::default()).unwrap();
        assert_eq!(result.features.len(), 1);

        let outside = Feature::from(Geometry::new(Value::Point(vec![-1.0, 1.0])));
        let result = points_within_polygon(&outside, &squares(), &JoinOptions::default()).unwrap();
        assert!(result.features.is_empty());
    }

    #[test]
    fn properties_are_kept() {
        let input: FeatureCollection = serde_json::from_value(json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"name": "inside"},
                "geometry": {"type": "Point", "coordinates": [1, 1]}
            }]
        }))
        .unwrap();
        let result = points_within_polygon(&input, &squares(), &JoinOptions::default()).unwrap();
        assert_eq!(result.features, input.features);
    }

    #[test]
    fn errors() {
        assert_matches!(
            points_within_polygon(&points(&[]), &squares(), &JoinOptions::default()),
            Err(GeoturfError::EmptyInput(_))
        );
        assert_matches!(
            points_within_polygon(
                &points(&[[1.0, 1.0]]),
                &squares(),
                &JoinOptions {
                    chunk_size: 0,
                    ..Default::default()
                }
            ),
            Err(GeoturfError::Meta(MetaError::InvalidOptions(_)))
        );

        let line = Feature::from(Geometry::new(Value::LineString(vec![
            vec![0.0, 0.0],
            vec![1.0, 1.0],
        ])));
        assert_matches!(
            points_within_polygon(&line, &squares(), &JoinOptions::default()),
            Err(GeoturfError::UnsupportedGeometryKind(GeometryKind::LineString))
        );
        assert_matches!(
            points_within_polygon(&points(&[[1.0, 1.0]]), &line, &JoinOptions::default()),
            Err(GeoturfError::UnsupportedGeometryKind(GeometryKind::LineString))
        );
    }
}
