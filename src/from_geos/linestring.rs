use geojson::{LineStringType, Value};
use geos::Geom;

use crate::coord::coord_seq_to_positions;
use crate::error::Result;

pub(crate) fn line_string_to_geojson(geom: &impl Geom) -> Result<Value> {
    Ok(Value::LineString(line_string_positions(geom)?))
}

/// Copy the coordinates of a line string or linear ring.
pub(crate) fn line_string_positions(geom: &impl Geom) -> Result<LineStringType> {
    coord_seq_to_positions(&geom.get_coord_seq()?)
}
