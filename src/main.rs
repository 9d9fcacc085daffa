use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use geojson_geos::io::read_geojson_file;
use geojson_geos::{point_cloud, to_geojson_geometry, to_geos_geometries, ToGeos};
use geos::Geom;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
)]
struct Cli {
    /// GeoJSON file to convert
    input: PathBuf,

    /// Convert the whole document into one geometry; feature collections are dissolved
    #[arg(long)]
    dissolve: bool,

    /// Replace every geometry by the multi point of its vertices
    #[arg(long)]
    point_cloud: bool,

    /// How to print the converted geometries
    #[arg(long, value_enum, default_value_t = OutputFormat::Wkt)]
    format: OutputFormat,

    #[command(flatten)]
    verbose: Verbosity<ErrorLevel>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Well-known text written by GEOS
    Wkt,
    /// GeoJSON read back from GEOS
    Geojson,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    let stdout = std::io::stdout();
    if let Err(err) = run(&cli, &mut stdout.lock()) {
        log::error!("{err:#}");
        return Err(err);
    }
    Ok(())
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let geojson = read_geojson_file(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;

    let geometries = if cli.dissolve {
        vec![geojson.to_geos()?]
    } else {
        to_geos_geometries(&geojson)?
    };
    log::info!("converted {} geometries", geometries.len());

    for geometry in geometries {
        let geometry = if cli.point_cloud {
            point_cloud(&geometry)?
        } else {
            geometry
        };

        match cli.format {
            OutputFormat::Wkt => writeln!(out, "{}", geometry.to_wkt()?)?,
            OutputFormat::Geojson => {
                let geometry = to_geojson_geometry(&geometry)?;
                writeln!(out, "{}", serde_json::to_string(&geometry)?)?
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{run, Cli};
    use anyhow::Result;
    use clap::Parser;

    fn fixture(name: &str) -> String {
        format!("{}/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
    }

    fn run_command(arg_vec: Vec<&str>) -> Result<String> {
        let cli = Cli::try_parse_from(arg_vec)?;
        let mut out = Vec::new();
        run(&cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn help() {
        let err = run_command(vec!["geojson-geos", "--help"])
            .unwrap_err()
            .to_string();
        assert!(err.contains("Usage: geojson-geos [OPTIONS] <INPUT>"));
    }

    #[test]
    fn one_line_per_feature() {
        let sample = fixture("sample.geojson");
        let output = run_command(vec!["geojson-geos", &sample]).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("POINT"));
        assert!(lines[1].starts_with("LINESTRING"));
        assert!(lines[2].starts_with("POLYGON"));
    }

    #[test]
    fn dissolve() {
        let sample = fixture("sample.geojson");
        let output = run_command(vec!["geojson-geos", "--dissolve", &sample]).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(output.starts_with("POLYGON"));
    }

    #[test]
    fn geojson_output() {
        let input = fixture("multipolygon.geojson");
        let output =
            run_command(vec!["geojson-geos", "--format", "geojson", &input]).unwrap();
        let geometry: geojson::Geometry = serde_json::from_str(output.trim()).unwrap();
        let geojson::Value::MultiPolygon(polygons) = geometry.value else {
            panic!("expected multi polygon");
        };
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].len(), 2);
    }

    #[test]
    fn point_cloud() {
        let input = fixture("multipolygon.geojson");
        let output = run_command(vec!["geojson-geos", "--point-cloud", &input]).unwrap();
        assert!(output.starts_with("MULTIPOINT"));
    }

    #[test]
    fn geometry_collection_fails() {
        let input = fixture("geometrycollection.geojson");
        let err = run_command(vec!["geojson-geos", &input]).unwrap_err();
        assert!(err.to_string().contains("GeometryCollection"));
    }

    #[test]
    fn missing_file_fails() {
        let err = run_command(vec!["geojson-geos", "no-such-file.geojson"]).unwrap_err();
        assert!(err.to_string().starts_with("reading no-such-file.geojson"));
    }
}
