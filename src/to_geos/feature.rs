use geojson::{Feature, FeatureCollection};
use geos::Geom;

use crate::error::{GeoJsonGeosError, Result};
use crate::to_geos::ToGeos;

/// Quadrant segments used by the zero-width buffer that dissolves a feature
/// collection into a single geometry. Matches the GEOS default.
pub const FEATURE_COLLECTION_QUADSEGS: i32 = 8;

impl ToGeos for Feature {
    fn to_geos(&self) -> Result<geos::Geometry> {
        match &self.geometry {
            Some(geometry) => geometry.to_geos(),
            None => Err(GeoJsonGeosError::UnexpectedType(
                "null geometry in Feature".into(),
            )),
        }
    }
}

impl ToGeos for FeatureCollection {
    fn to_geos(&self) -> Result<geos::Geometry> {
        let geometries = self
            .features
            .iter()
            .map(ToGeos::to_geos)
            .collect::<Result<Vec<_>>>()?;
        log::trace!(
            "dissolving {} features into one geometry",
            geometries.len()
        );

        let collection = geos::Geometry::create_geometry_collection(geometries)?;
        Ok(collection.buffer(0., FEATURE_COLLECTION_QUADSEGS)?)
    }
}
