//! Reading GeoJSON documents.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use geojson::GeoJson;

use crate::error::Result;

/// Read and parse a whole GeoJSON document.
pub fn read_geojson<R: Read>(mut reader: R) -> Result<GeoJson> {
    let mut geojson_str = String::new();
    reader.read_to_string(&mut geojson_str)?;
    Ok(geojson_str.parse::<GeoJson>()?)
}

/// Open `path` and parse it with [`read_geojson`].
pub fn read_geojson_file(path: impl AsRef<Path>) -> Result<GeoJson> {
    let path = path.as_ref();
    log::debug!("reading {}", path.display());
    read_geojson(BufReader::new(File::open(path)?))
}
