//! Reprojection commands

use crate::cli::{GeometryFormat, ToLatlonArgs, ToUtmArgs};
use crate::input::read_arg;
use crate::output::OutputWriter;
use crate::output_types::ReprojectOutput;
use anyhow::{Context, Result};
use fieldgeo_geo::{
    geometry_to_geojson, geometry_to_wkt, latlon_to_utm, latlon_to_utm_north,
    latlon_to_utm_south, utm_to_latlon, wkt_to_geometry, Crs, Hemisphere, UtmZone,
};
use geo::Geometry;

pub fn to_utm(args: ToUtmArgs, output: &OutputWriter) -> Result<()> {
    let wkt = read_arg(&args.wkt)?;
    let geometry = wkt_to_geometry(&wkt).context("Failed to parse input geometry")?;

    let (projected, zone) = match args.zone {
        Some(zone) if args.south => (
            latlon_to_utm_south(&geometry, zone)?,
            UtmZone::new(zone as i32, Hemisphere::South),
        ),
        Some(zone) => (
            latlon_to_utm_north(&geometry, zone)?,
            UtmZone::new(zone as i32, Hemisphere::North),
        ),
        None => latlon_to_utm(&geometry).context("Failed to pick a UTM zone")?,
    };

    let target = zone.crs()?;
    tracing::info!(zone = %zone, crs = %target, "Projected geometry to UTM");
    write_geometry(&projected, &Crs::wgs84().code(), &target.code(), args.format, output)
}

pub fn to_latlon(args: ToLatlonArgs, output: &OutputWriter) -> Result<()> {
    let wkt = read_arg(&args.wkt)?;
    let geometry = wkt_to_geometry(&wkt).context("Failed to parse input geometry")?;
    let latlon = utm_to_latlon(&geometry, &args.from)?;
    if let Ok(source) = Crs::parse(&args.from) {
        tracing::info!(crs = %source, name = %source.name, "Projected geometry to WGS 84");
    }
    write_geometry(&latlon, &args.from, &Crs::wgs84().code(), args.format, output)
}

fn write_geometry(
    geometry: &Geometry<f64>,
    source_crs: &str,
    target_crs: &str,
    format: GeometryFormat,
    output: &OutputWriter,
) -> Result<()> {
    let wkt = geometry_to_wkt(geometry);
    let geojson = geometry_to_geojson(geometry)?;

    if output.is_json() {
        output.result(ReprojectOutput {
            source_crs: source_crs.to_string(),
            target_crs: target_crs.to_string(),
            wkt,
            geojson: serde_json::from_str(&geojson)?,
        })?;
    } else {
        match format {
            GeometryFormat::Wkt => output.plain(wkt),
            GeometryFormat::Geojson => output.plain(geojson),
        }
    }
    Ok(())
}
