//! Boolean spatial predicates for GeoJSON objects: point in polygon, point on line, disjoint, intersects and
//! within, and a point in polygon join for collections of points.
//!
//! All functions work with the object model of the [`geojson`] crate. Traversal of GeoJSON objects (coordinates,
//! geometries, features, segments) is provided by the [`meta`] module.
//!
//! ```
//! use geojson::{Geometry, Value};
//! use geoturf::{boolean_disjoint, boolean_point_in_polygon};
//!
//! let square = Value::Polygon(vec![vec![
//!     vec![0.0, 0.0],
//!     vec![0.0, 100.0],
//!     vec![100.0, 100.0],
//!     vec![100.0, 0.0],
//!     vec![0.0, 0.0],
//! ]]);
//!
//! assert!(boolean_point_in_polygon(&[50.0, 50.0], &square, false).unwrap());
//!
//! let point = Geometry::new(Value::Point(vec![140.0, 150.0]));
//! assert!(boolean_disjoint(&point, &Geometry::new(square)).unwrap());
//! ```
//!
//! Coordinates are interpreted as planar `x, y` values; ordinates after the first two are ignored.

#![warn(clippy::unwrap_used)]

pub use geoturf_meta as meta;

mod conversion;
pub use conversion::polygon_to_line;

mod convert;

mod disjoint;
pub use disjoint::*;

pub mod error;
pub use error::GeoturfError;

mod intersection;
pub use intersection::line_intersect;

mod joins;
pub use joins::*;

mod line;
pub use line::*;

mod multipoint;
pub use multipoint::*;

mod point_in_polygon;
pub use point_in_polygon::boolean_point_in_polygon;

pub mod segment;

mod within;
pub use within::boolean_within;
