use geojson::LineStringType;

use crate::error::Result;
use crate::to_geos::linestring::to_geos_line_string;

pub(crate) fn to_geos_multi_line_string(lines: &[LineStringType]) -> Result<geos::Geometry> {
    Ok(geos::Geometry::create_multiline_string(
        lines
            .iter()
            .map(|line| to_geos_line_string(line))
            .collect::<Result<Vec<_>>>()?,
    )?)
}

#[cfg(test)]
mod test {
    use super::*;
    use geos::{Geom, GeometryTypes};

    #[test]
    fn members_in_order() {
        let geom = to_geos_multi_line_string(&[
            vec![vec![0., 0.], vec![1., 1.]],
            vec![vec![5., 5.], vec![6., 6.], vec![7., 5.]],
        ])
        .unwrap();
        assert!(matches!(
            geom.geometry_type(),
            GeometryTypes::MultiLineString
        ));
        assert_eq!(geom.get_num_geometries().unwrap(), 2);
        assert_eq!(geom.get_geometry_n(1).unwrap().get_num_points().unwrap(), 3);
    }
}
