//! Reverse geocode command

use crate::cli::GeocodeArgs;
use crate::config_loader::load_config_with_overrides;
use crate::input::read_arg;
use crate::output::OutputWriter;
use anyhow::{bail, Context, Result};
use fieldgeo_core::config::CliConfigOverrides;
use fieldgeo_geo::{reverse_geocode, wkt_to_geometry, NominatimGeocoder};
use std::path::Path;

pub fn execute(args: GeocodeArgs, config_path: Option<&Path>, output: &OutputWriter) -> Result<()> {
    if args.timeout == Some(0) {
        bail!("--timeout must be a positive number of seconds");
    }

    let overrides = CliConfigOverrides {
        geocoder_url: args
            .geocoder_url
            .as_deref()
            .map(fieldgeo_core::config::parse_url)
            .transpose()?,
        geocoder_user_agent: args.user_agent,
        geocoder_timeout_secs: args.timeout,
    };
    let config = load_config_with_overrides(config_path, overrides)?;

    let wkt = read_arg(&args.wkt)?;
    let geometry = wkt_to_geometry(&wkt).context("Failed to parse input geometry")?;
    let geocoder = NominatimGeocoder::from_config(&config)?;
    let location = reverse_geocode(&geometry, &geocoder).context("Reverse geocoding failed")?;

    if output.is_json() {
        output.result(&location)?;
    } else {
        output.kv("Location", &location.name);
        if let Some(country) = &location.country {
            output.kv("Country", country);
        }
        if let Some(code) = &location.country_code {
            output.kv("Country Code", code);
        }
        if let Some(state) = &location.state {
            output.kv("State", state);
        }
        if let Some(county) = &location.county {
            output.kv("County", county);
        }
    }
    Ok(())
}
