//! WKT / GeoJSON conversion commands

use crate::cli::{GeojsonArgs, WktArgs};
use crate::input::read_arg;
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use fieldgeo_geo::{geojson_str_to_wkt, geometry_wkt_to_coordinate_list, wkt_to_geojson};

pub fn coords(args: WktArgs, output: &OutputWriter) -> Result<()> {
    let wkt = read_arg(&args.wkt)?;
    let coordinates =
        geometry_wkt_to_coordinate_list(&wkt).context("Failed to extract coordinates")?;

    if output.is_json() {
        output.result(coordinates)?;
    } else {
        output.plain(serde_json::to_string(&coordinates)?);
    }
    Ok(())
}

pub fn to_geojson(args: WktArgs, output: &OutputWriter) -> Result<()> {
    let wkt = read_arg(&args.wkt)?;
    let geojson = wkt_to_geojson(&wkt).context("Failed to convert WKT to GeoJSON")?;

    if output.is_json() {
        let value: serde_json::Value = serde_json::from_str(&geojson)?;
        output.result(value)?;
    } else {
        output.plain(geojson);
    }
    Ok(())
}

pub fn to_wkt(args: GeojsonArgs, output: &OutputWriter) -> Result<()> {
    let geojson = read_arg(&args.geojson)?;
    let wkt = geojson_str_to_wkt(&geojson).context("Failed to convert GeoJSON to WKT")?;

    if output.is_json() {
        output.result(serde_json::json!({ "wkt": wkt }))?;
    } else {
        output.plain(wkt);
    }
    Ok(())
}
