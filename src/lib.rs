//! Conversion between [GeoJSON](https://geojson.org) geometries, as modeled by the
//! [`geojson`] crate, and [GEOS](https://libgeos.org) geometries from the [`geos`] crate.
//!
//! - [`ToGeos`] turns GeoJSON values, features and feature collections into GEOS
//!   geometries. A feature collection becomes a single geometry, the zero-width buffer
//!   of all of its features.
//! - [`to_geojson_value`] reads points, line strings, polygons and multi polygons back
//!   from GEOS.
//!
//! Not every kind converts in both directions: GeoJSON geometry collections cannot be
//! converted to GEOS, and GEOS multi points, multi line strings and geometry
//! collections cannot be converted to GeoJSON.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use from_geos::{to_geojson_geometry, to_geojson_value};
pub use point_cloud::point_cloud;
pub use to_geos::{to_geos_geometries, ToGeos, FEATURE_COLLECTION_QUADSEGS};

pub mod coord;
pub mod error;
pub mod from_geos;
pub mod io;
pub mod point_cloud;
pub mod to_geos;
