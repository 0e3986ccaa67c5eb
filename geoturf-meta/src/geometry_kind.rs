//! See documentation for [`GeometryKind`].

use std::fmt::{Display, Formatter};

use geojson::Value;
use serde::{Deserialize, Serialize};

/// Tag of a GeoJSON geometry value, without its coordinates.
///
/// Used to name geometry kinds in errors and to dispatch relation rules on a pair of geometries.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum GeometryKind {
    /// `Point`
    Point,
    /// `MultiPoint`
    MultiPoint,
    /// `LineString`
    LineString,
    /// `MultiLineString`
    MultiLineString,
    /// `Polygon`
    Polygon,
    /// `MultiPolygon`
    MultiPolygon,
    /// `GeometryCollection`
    GeometryCollection,
}

impl GeometryKind {
    /// Kind of the given geometry value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Point(_) => Self::Point,
            Value::MultiPoint(_) => Self::MultiPoint,
            Value::LineString(_) => Self::LineString,
            Value::MultiLineString(_) => Self::MultiLineString,
            Value::Polygon(_) => Self::Polygon,
            Value::MultiPolygon(_) => Self::MultiPolygon,
            Value::GeometryCollection(_) => Self::GeometryCollection,
        }
    }

    /// Name of the kind as used in the `type` member of a GeoJSON geometry.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::MultiPoint => "MultiPoint",
            Self::LineString => "LineString",
            Self::MultiLineString => "MultiLineString",
            Self::Polygon => "Polygon",
            Self::MultiPolygon => "MultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
        }
    }

    /// Returns true for the kinds that consist of several parts of the same single-part kind.
    pub fn is_multi_part(&self) -> bool {
        matches!(
            self,
            Self::MultiPoint | Self::MultiLineString | Self::MultiPolygon
        )
    }
}

impl From<&Value> for GeometryKind {
    fn from(value: &Value) -> Self {
        Self::of(value)
    }
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
