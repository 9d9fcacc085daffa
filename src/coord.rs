//! Marshaling between GeoJSON positions and GEOS coordinate sequences.
//!
//! Only the first two ordinates of a position are kept.

use geojson::Position;
use geos::{CoordDimensions, CoordSeq};

use crate::error::{GeoJsonGeosError, Result};

fn xy(position: &Position) -> Result<(f64, f64)> {
    match position.as_slice() {
        [x, y, ..] => Ok((*x, *y)),
        _ => Err(GeoJsonGeosError::InvalidGeometry(
            format!(
                "position must have at least two ordinates, found {}",
                position.len()
            )
            .into(),
        )),
    }
}

/// Convert a single GeoJSON position to a one-element [`CoordSeq`].
pub fn position_to_coord_seq(position: &Position) -> Result<CoordSeq> {
    let (x, y) = xy(position)?;
    let mut coord_seq = CoordSeq::new(1, CoordDimensions::TwoD)?;
    coord_seq.set_x(0, x)?;
    coord_seq.set_y(0, y)?;
    Ok(coord_seq)
}

/// Convert an ordered run of GeoJSON positions to a [`CoordSeq`] of the same length.
pub fn positions_to_coord_seq(positions: &[Position]) -> Result<CoordSeq> {
    let size = u32::try_from(positions.len()).map_err(|_| GeoJsonGeosError::Overflow)?;
    let mut coord_seq = CoordSeq::new(size, CoordDimensions::TwoD)?;

    positions
        .iter()
        .enumerate()
        .try_for_each(|(idx, position)| {
            let (x, y) = xy(position)?;
            coord_seq.set_x(idx, x)?;
            coord_seq.set_y(idx, y)?;
            Ok::<_, GeoJsonGeosError>(())
        })?;

    Ok(coord_seq)
}

/// Read every coordinate of a [`CoordSeq`] back into GeoJSON positions.
pub fn coord_seq_to_positions(coord_seq: &CoordSeq) -> Result<Vec<Position>> {
    let size = coord_seq.size()?;
    let mut positions = Vec::with_capacity(size);
    for idx in 0..size {
        positions.push(vec![coord_seq.get_x(idx)?, coord_seq.get_y(idx)?]);
    }
    Ok(positions)
}
