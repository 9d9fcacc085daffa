use geojson::PolygonType;

use crate::error::{GeoJsonGeosError, Result};
use crate::to_geos::linestring::to_geos_linear_ring;

pub(crate) fn to_geos_polygon(rings: &PolygonType) -> Result<geos::Geometry> {
    let (shell, holes) = rings.split_first().ok_or_else(|| {
        GeoJsonGeosError::InvalidGeometry("polygon must have at least one ring".into())
    })?;

    let exterior = to_geos_linear_ring(shell)?;
    let interiors = holes
        .iter()
        .map(|hole| to_geos_linear_ring(hole))
        .collect::<Result<Vec<_>>>()?;
    Ok(geos::Geometry::create_polygon(exterior, interiors)?)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::polygon::{donut, square};
    use geos::Geom;

    #[test]
    fn shell_only() {
        let geom = to_geos_polygon(&square()).unwrap();
        assert_eq!(geom.get_num_interior_rings().unwrap(), 0);
        assert_eq!(geom.area().unwrap(), 100.);
    }

    #[test]
    fn shell_and_hole() {
        let geom = to_geos_polygon(&donut()).unwrap();
        assert_eq!(geom.get_num_interior_rings().unwrap(), 1);
        assert_eq!(geom.area().unwrap(), 96.);
    }

    #[test]
    fn no_rings() {
        let err = to_geos_polygon(&vec![]).err().unwrap();
        assert!(matches!(err, GeoJsonGeosError::InvalidGeometry(_)));
    }
}
