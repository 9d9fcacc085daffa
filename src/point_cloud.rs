//! Collapse any GEOS geometry into the multi point of its vertices.

use geojson::Position;
use geos::{Geom, GeometryTypes};

use crate::coord::{coord_seq_to_positions, position_to_coord_seq};
use crate::error::{GeoJsonGeosError, Result};

/// Return a multi point holding every vertex of `geom`, in traversal order.
///
/// Polygons contribute their shell and then their holes; collections contribute their
/// members in order. Repeated vertices, such as the closing vertex of a ring, are kept.
pub fn point_cloud(geom: &impl Geom) -> Result<geos::Geometry> {
    let mut positions = Vec::new();
    collect_positions(geom, &mut positions)?;
    log::debug!("point cloud with {} vertices", positions.len());

    let points = positions
        .iter()
        .map(|position| Ok(geos::Geometry::create_point(position_to_coord_seq(position)?)?))
        .collect::<Result<Vec<_>>>()?;
    Ok(geos::Geometry::create_multipoint(points)?)
}

fn collect_positions(geom: &impl Geom, positions: &mut Vec<Position>) -> Result<()> {
    match geom.geometry_type() {
        GeometryTypes::Point => {
            if !geom.is_empty()? {
                positions.push(vec![geom.get_x()?, geom.get_y()?]);
            }
        }
        GeometryTypes::LineString | GeometryTypes::LinearRing => {
            positions.extend(coord_seq_to_positions(&geom.get_coord_seq()?)?);
        }
        GeometryTypes::Polygon => {
            collect_positions(&geom.get_exterior_ring()?, positions)?;
            for idx in 0..geom.get_num_interior_rings()? {
                let idx = idx.try_into().map_err(|_| GeoJsonGeosError::Overflow)?;
                collect_positions(&geom.get_interior_ring_n(idx)?, positions)?;
            }
        }
        GeometryTypes::MultiPoint
        | GeometryTypes::MultiLineString
        | GeometryTypes::MultiPolygon
        | GeometryTypes::GeometryCollection => {
            for idx in 0..geom.get_num_geometries()? {
                collect_positions(&geom.get_geometry_n(idx)?, positions)?;
            }
        }
        GeometryTypes::__Unknown(id) => {
            return Err(GeoJsonGeosError::UnexpectedType(
                format!("GEOS geometry type id {id}").into(),
            ))
        }
    }
    Ok(())
}
