use geojson::Position;

use crate::error::Result;
use crate::to_geos::point::to_geos_point;

pub(crate) fn to_geos_multi_point(positions: &[Position]) -> Result<geos::Geometry> {
    Ok(geos::Geometry::create_multipoint(
        positions
            .iter()
            .map(to_geos_point)
            .collect::<Result<Vec<_>>>()?,
    )?)
}
