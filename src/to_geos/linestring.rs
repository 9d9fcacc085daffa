use geojson::Position;

use crate::coord::positions_to_coord_seq;
use crate::error::Result;

pub(crate) fn to_geos_line_string(positions: &[Position]) -> Result<geos::Geometry> {
    Ok(geos::Geometry::create_line_string(
        positions_to_coord_seq(positions)?,
    )?)
}

pub(crate) fn to_geos_linear_ring(positions: &[Position]) -> Result<geos::Geometry> {
    Ok(geos::Geometry::create_linear_ring(
        positions_to_coord_seq(positions)?,
    )?)
}
