use geojson::Position;

use crate::coord::position_to_coord_seq;
use crate::error::Result;

pub(crate) fn to_geos_point(position: &Position) -> Result<geos::Geometry> {
    Ok(geos::Geometry::create_point(position_to_coord_seq(
        position,
    )?)?)
}
