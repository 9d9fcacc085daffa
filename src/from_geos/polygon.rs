use geojson::{PolygonType, Value};
use geos::Geom;

use crate::error::{GeoJsonGeosError, Result};
use crate::from_geos::linestring::line_string_positions;

pub(crate) fn polygon_to_geojson(geom: &impl Geom) -> Result<Value> {
    Ok(Value::Polygon(polygon_rings(geom)?))
}

/// Shell first, then each hole in the order GEOS reports them.
pub(crate) fn polygon_rings(geom: &impl Geom) -> Result<PolygonType> {
    let num_interiors = geom.get_num_interior_rings()?;
    let mut rings = Vec::with_capacity(1 + num_interiors);

    rings.push(line_string_positions(&geom.get_exterior_ring()?)?);
    for idx in 0..num_interiors {
        let idx = idx.try_into().map_err(|_| GeoJsonGeosError::Overflow)?;
        rings.push(line_string_positions(&geom.get_interior_ring_n(idx)?)?);
    }

    Ok(rings)
}
