//! Conversion from GeoJSON objects to GEOS geometries.

mod feature;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

use geojson::{GeoJson, Value};

use crate::error::{GeoJsonGeosError, Result};

pub use feature::FEATURE_COLLECTION_QUADSEGS;
use linestring::to_geos_line_string;
use multilinestring::to_geos_multi_line_string;
use multipoint::to_geos_multi_point;
use multipolygon::to_geos_multi_polygon;
use point::to_geos_point;
use polygon::to_geos_polygon;

/// Convert a GeoJSON object into a newly allocated [`geos::Geometry`].
///
/// Features are unwrapped to their geometry and their properties dropped. A
/// [`geojson::FeatureCollection`] is reduced to a single geometry: the converted
/// features are wrapped in a GEOS geometry collection and buffered by zero.
///
/// ```
/// use geojson_geos::ToGeos;
/// use geos::Geom;
///
/// let value = geojson::Value::Point(vec![1., 2.]);
/// let geom = value.to_geos().unwrap();
/// assert_eq!(geom.get_y().unwrap(), 2.);
/// ```
pub trait ToGeos {
    fn to_geos(&self) -> Result<geos::Geometry>;
}

impl ToGeos for Value {
    fn to_geos(&self) -> Result<geos::Geometry> {
        match self {
            Value::Point(position) => to_geos_point(position),
            Value::LineString(positions) => to_geos_line_string(positions),
            Value::Polygon(rings) => to_geos_polygon(rings),
            Value::MultiPoint(positions) => to_geos_multi_point(positions),
            Value::MultiLineString(lines) => to_geos_multi_line_string(lines),
            Value::MultiPolygon(polygons) => to_geos_multi_polygon(polygons),
            Value::GeometryCollection(_) => Err(GeoJsonGeosError::NotYetImplemented(
                "GeometryCollection in conversion to GEOS".into(),
            )),
        }
    }
}

impl ToGeos for geojson::Geometry {
    fn to_geos(&self) -> Result<geos::Geometry> {
        self.value.to_geos()
    }
}

impl ToGeos for GeoJson {
    fn to_geos(&self) -> Result<geos::Geometry> {
        match self {
            GeoJson::Geometry(geometry) => geometry.to_geos(),
            GeoJson::Feature(feature) => feature.to_geos(),
            GeoJson::FeatureCollection(collection) => collection.to_geos(),
        }
    }
}

/// Convert every geometry of a document separately, without the union step
/// applied to feature collections.
///
/// A feature collection yields one geometry per feature, in order; a feature or a
/// bare geometry yields exactly one.
pub fn to_geos_geometries(geojson: &GeoJson) -> Result<Vec<geos::Geometry>> {
    match geojson {
        GeoJson::FeatureCollection(collection) => collection
            .features
            .iter()
            .map(ToGeos::to_geos)
            .collect(),
        GeoJson::Feature(feature) => Ok(vec![feature.to_geos()?]),
        GeoJson::Geometry(geometry) => Ok(vec![geometry.to_geos()?]),
    }
}
