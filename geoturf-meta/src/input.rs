//! Borrowed view over the three kinds of GeoJSON objects that can be traversed.

use geojson::feature::Id;
use geojson::{Bbox, Feature, FeatureCollection, GeoJson, Geometry, JsonObject};

/// Any GeoJSON object that carries geometries: a bare geometry, a single feature or a feature collection.
///
/// All traversal functions of the crate accept `impl Into<GeoJsonLike>`, so references to
/// [`Geometry`], [`Feature`], [`FeatureCollection`] and [`GeoJson`] can be passed directly.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GeoJsonLike<'a> {
    /// Bare geometry.
    Geometry(&'a Geometry),
    /// Single feature.
    Feature(&'a Feature),
    /// Collection of features.
    FeatureCollection(&'a FeatureCollection),
}

impl<'a> GeoJsonLike<'a> {
    /// Number of top level features. A bare geometry counts as one feature.
    pub fn feature_count(&self) -> usize {
        match self {
            Self::Geometry(_) | Self::Feature(_) => 1,
            Self::FeatureCollection(fc) => fc.features.len(),
        }
    }

    /// Returns the geometry of a bare geometry or a feature.
    ///
    /// Returns `None` for a feature with null geometry and for feature collections.
    pub fn geometry(&self) -> Option<&'a Geometry> {
        match self {
            Self::Geometry(geometry) => Some(geometry),
            Self::Feature(feature) => feature.geometry.as_ref(),
            Self::FeatureCollection(_) => None,
        }
    }

    /// Geometry and feature information of the top level feature with the given index.
    ///
    /// A bare geometry is reported as feature `0` without properties, bbox or id.
    pub(crate) fn feature_at(
        &self,
        index: usize,
    ) -> Option<(Option<&'a Geometry>, FeatureInfo<'a>)> {
        match self {
            Self::Geometry(geometry) => (index == 0).then(|| {
                (
                    Some(*geometry),
                    FeatureInfo {
                        index,
                        ..Default::default()
                    },
                )
            }),
            Self::Feature(feature) => (index == 0)
                .then(|| (feature.geometry.as_ref(), FeatureInfo::new(index, feature))),
            Self::FeatureCollection(fc) => fc
                .features
                .get(index)
                .map(|feature| (feature.geometry.as_ref(), FeatureInfo::new(index, feature))),
        }
    }
}

impl<'a> From<&'a Geometry> for GeoJsonLike<'a> {
    fn from(value: &'a Geometry) -> Self {
        Self::Geometry(value)
    }
}

impl<'a> From<&'a Feature> for GeoJsonLike<'a> {
    fn from(value: &'a Feature) -> Self {
        Self::Feature(value)
    }
}

impl<'a> From<&'a FeatureCollection> for GeoJsonLike<'a> {
    fn from(value: &'a FeatureCollection) -> Self {
        Self::FeatureCollection(value)
    }
}

impl<'a> From<&'a GeoJson> for GeoJsonLike<'a> {
    fn from(value: &'a GeoJson) -> Self {
        match value {
            GeoJson::Geometry(geometry) => Self::Geometry(geometry),
            GeoJson::Feature(feature) => Self::Feature(feature),
            GeoJson::FeatureCollection(fc) => Self::FeatureCollection(fc),
        }
    }
}

/// Metadata of the feature a visited geometry belongs to.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FeatureInfo<'a> {
    /// Index of the feature in its collection (`0` for single features and bare geometries).
    pub index: usize,
    /// Properties of the feature.
    pub properties: Option<&'a JsonObject>,
    /// Bounding box of the feature.
    pub bbox: Option<&'a Bbox>,
    /// Id of the feature.
    pub id: Option<&'a Id>,
}

impl<'a> FeatureInfo<'a> {
    fn new(index: usize, feature: &'a Feature) -> Self {
        Self {
            index,
            properties: feature.properties.as_ref(),
            bbox: feature.bbox.as_ref(),
            id: feature.id.as_ref(),
        }
    }
}
