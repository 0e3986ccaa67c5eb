//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetaError {
    /// Lookup options are not a valid options record, or an index in them points outside of the geometry.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    /// The root object cannot be used for the requested operation.
    #[error("invalid geojson: {0}")]
    InvalidGeoJson(String),
}
