use geojson::PolygonType;

use crate::error::Result;
use crate::to_geos::polygon::to_geos_polygon;

pub(crate) fn to_geos_multi_polygon(polygons: &[PolygonType]) -> Result<geos::Geometry> {
    Ok(geos::Geometry::create_multipolygon(
        polygons
            .iter()
            .map(to_geos_polygon)
            .collect::<Result<Vec<_>>>()?,
    )?)
}
