//! Conversion from GEOS geometries to GeoJSON values.
//!
//! Only the kinds that have a GeoJSON counterpart built by this crate are read back:
//! points, line strings, polygons and multi polygons.

mod linestring;
mod multipolygon;
mod point;
mod polygon;

use geojson::Value;
use geos::{Geom, GeometryTypes};

use crate::error::{GeoJsonGeosError, Result};

use linestring::line_string_to_geojson;
use multipolygon::multi_polygon_to_geojson;
use point::point_to_geojson;
use polygon::polygon_to_geojson;

/// Convert a GEOS geometry into a GeoJSON [`Value`], dispatching on the type GEOS
/// reports for it.
///
/// Works on owned geometries as well as on borrowed views such as the members of a
/// collection; everything read is copied into the returned value.
pub fn to_geojson_value(geom: &impl Geom) -> Result<Value> {
    match geom.geometry_type() {
        GeometryTypes::Point => point_to_geojson(geom),
        GeometryTypes::LineString => line_string_to_geojson(geom),
        GeometryTypes::Polygon => polygon_to_geojson(geom),
        GeometryTypes::MultiPolygon => multi_polygon_to_geojson(geom),
        typ @ (GeometryTypes::MultiPoint
        | GeometryTypes::MultiLineString
        | GeometryTypes::GeometryCollection
        | GeometryTypes::LinearRing) => Err(GeoJsonGeosError::NotYetImplemented(
            format!("{typ:?} in conversion from GEOS").into(),
        )),
        GeometryTypes::__Unknown(id) => Err(GeoJsonGeosError::UnexpectedType(
            format!("GEOS geometry type id {id}").into(),
        )),
    }
}

/// Same as [`to_geojson_value`], wrapped in a [`geojson::Geometry`].
pub fn to_geojson_geometry(geom: &impl Geom) -> Result<geojson::Geometry> {
    Ok(geojson::Geometry::new(to_geojson_value(geom)?))
}

pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::LineString(_) => "LineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPoint(_) => "MultiPoint",
        Value::MultiLineString(_) => "MultiLineString",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}
