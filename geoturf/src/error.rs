//! Error types used by the crate.

use geoturf_meta::{GeometryKind, MetaError};
use thiserror::Error;

/// Geoturf error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoturfError {
    /// Operation cannot be applied to a geometry of this kind.
    #[error("geometry of type {0} is not supported")]
    UnsupportedGeometryKind(GeometryKind),
    /// Relation between the two kinds of geometries is not defined.
    #[error("relation between {0} and {1} is not supported")]
    UnsupportedRelation(GeometryKind, GeometryKind),
    /// Input is not a valid GeoJSON object for the operation.
    #[error("invalid geojson: {0}")]
    InvalidGeoJson(String),
    /// Required input is empty.
    #[error("{0} cannot be empty")]
    EmptyInput(&'static str),
    /// Error of a traversal or lookup.
    #[error(transparent)]
    Meta(#[from] MetaError),
}

/// Result type of the crate.
pub type Result<T> = std::result::Result<T, GeoturfError>;
