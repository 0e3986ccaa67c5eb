//! Traversal of GeoJSON objects: coordinates, geometries, features, properties, flattened parts, lines and
//! segments.
//!
//! Every traversal accepts a bare [`geojson::Geometry`], a [`geojson::Feature`], a
//! [`geojson::FeatureCollection`] or a [`geojson::GeoJson`] (see [`GeoJsonLike`]), and calls a visitor for each
//! element in document order. The visitor returns [`ControlFlow`](std::ops::ControlFlow): returning
//! `Break` stops the traversal immediately and the break value is returned to the caller.
//!
//! ```
//! use std::ops::ControlFlow;
//! use geojson::{Geometry, Value};
//! use geoturf_meta::coord_each;
//!
//! let line = Geometry::new(Value::LineString(vec![vec![0.0, 0.0], vec![1.0, 1.0], vec![2.0, 2.0]]));
//! let found = coord_each(&line, false, |coord, cursor| {
//!     if coord[0] > 0.5 {
//!         ControlFlow::Break(cursor.coord_index)
//!     } else {
//!         ControlFlow::Continue(())
//!     }
//! });
//!
//! assert_eq!(found, ControlFlow::Break(1));
//! ```
//!
//! Every `*_each` function has `*_fold` and `*_reduce` counterparts. A fold starts with a supplied initial
//! value, a reduce uses the first visited element as the initial value and does not pass it to the combining
//! function.

#![warn(clippy::unwrap_used)]

mod coord;
pub use coord::*;

mod cursor;
pub use cursor::Cursor;

pub mod error;
pub use error::MetaError;

mod feature;
pub use feature::*;

mod find;
pub use find::*;

mod flatten;
pub use flatten::*;

mod geom;
pub use geom::*;

mod geometry_kind;
pub use geometry_kind::GeometryKind;

mod input;
pub use input::{FeatureInfo, GeoJsonLike};

mod line;
pub use line::*;
