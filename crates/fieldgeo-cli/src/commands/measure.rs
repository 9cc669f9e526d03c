//! Centroid and UTM zone commands

use crate::cli::{UtmZoneArgs, WktArgs};
use crate::input::read_arg;
use crate::output::OutputWriter;
use crate::output_types::{CentroidOutput, UtmZoneOutput};
use anyhow::{Context, Result};

pub fn centroid(args: WktArgs, output: &OutputWriter) -> Result<()> {
    let wkt = read_arg(&args.wkt)?;
    let (latitude, longitude) =
        fieldgeo_geo::centroid(&wkt).context("Failed to compute centroid")?;

    if output.is_json() {
        output.result(CentroidOutput { latitude, longitude })?;
    } else {
        output.kv("Latitude", latitude);
        output.kv("Longitude", longitude);
    }
    Ok(())
}

pub fn utm_zone(args: UtmZoneArgs, output: &OutputWriter) -> Result<()> {
    let zone = fieldgeo_geo::utm_zone(args.lat, args.lon);
    let crs = zone.crs().ok().map(|crs| crs.code());

    if crs.is_none() {
        output.warning(format!(
            "Longitude {} is outside [-180, 180); zone {} has no UTM CRS",
            args.lon, zone.zone
        ));
    }

    if output.is_json() {
        output.result(UtmZoneOutput {
            zone: zone.zone,
            hemisphere: zone.hemisphere.to_string(),
            crs,
        })?;
    } else {
        output.kv("Zone", zone.zone);
        output.kv("Hemisphere", zone.hemisphere);
        if let Some(crs) = crs {
            output.kv("CRS", crs);
        }
    }
    Ok(())
}
