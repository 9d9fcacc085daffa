use geojson::Value;
use geos::Geom;

use crate::error::Result;

pub(crate) fn point_to_geojson(geom: &impl Geom) -> Result<Value> {
    let x = geom.get_x()?;
    let y = geom.get_y()?;
    Ok(Value::Point(vec![x, y]))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn x_and_y_are_distinct() {
        let geom = geos::Geometry::new_from_wkt("POINT (3 -7)").unwrap();
        assert_eq!(point_to_geojson(&geom).unwrap(), Value::Point(vec![3., -7.]));
    }

    #[test]
    fn empty_point() {
        let geom = geos::Geometry::new_from_wkt("POINT EMPTY").unwrap();
        assert!(point_to_geojson(&geom).is_err());
    }
}
