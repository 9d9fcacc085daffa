use geojson::{PolygonType, Value};
use geos::Geom;

use crate::error::{GeoJsonGeosError, Result};
use crate::from_geos::{to_geojson_value, value_type_name};

pub(crate) fn multi_polygon_to_geojson(geom: &impl Geom) -> Result<Value> {
    let num_polygons = geom.get_num_geometries()?;
    let mut polygons = Vec::with_capacity(num_polygons);

    for idx in 0..num_polygons {
        // The member borrows from `geom`; its rings are copied out before it is dropped.
        let member = geom.get_geometry_n(idx)?;
        polygons.push(expect_polygon(to_geojson_value(&member)?)?);
    }

    Ok(Value::MultiPolygon(polygons))
}

fn expect_polygon(value: Value) -> Result<PolygonType> {
    match value {
        Value::Polygon(rings) => Ok(rings),
        other => Err(GeoJsonGeosError::IncorrectType {
            expected: "Polygon",
            found: value_type_name(&other).into(),
        }),
    }
}
