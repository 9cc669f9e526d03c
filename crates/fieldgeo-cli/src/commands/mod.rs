//! Command implementations

mod config;
mod convert;
mod geocode;
mod measure;
mod project;
mod window;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Coords(args) => convert::coords(args, &output),
        Commands::ToGeojson(args) => convert::to_geojson(args, &output),
        Commands::ToWkt(args) => convert::to_wkt(args, &output),
        Commands::Centroid(args) => measure::centroid(args, &output),
        Commands::UtmZone(args) => measure::utm_zone(args, &output),
        Commands::ToUtm(args) => project::to_utm(args, &output),
        Commands::ToLatlon(args) => project::to_latlon(args, &output),
        Commands::Window(args) => window::execute(args, &output),
        Commands::Geocode(args) => geocode::execute(args, config_path, &output),
        Commands::Config => config::execute(config_path, &output),
    }
}
