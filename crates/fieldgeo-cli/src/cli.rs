use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// fieldgeo - Field-boundary geometry utilities
#[derive(Parser, Debug)]
#[command(name = "fieldgeo")]
#[command(about = "Field-boundary geometry utilities", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./fieldgeo.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the GeoJSON coordinate arrays of a WKT geometry
    Coords(WktArgs),

    /// Convert WKT to a GeoJSON geometry
    ToGeojson(WktArgs),

    /// Convert a GeoJSON geometry or Feature to WKT
    ToWkt(GeojsonArgs),

    /// Centroid of a WKT geometry as latitude/longitude
    Centroid(WktArgs),

    /// UTM zone and hemisphere of a coordinate
    UtmZone(UtmZoneArgs),

    /// Project a WGS 84 geometry into UTM
    ToUtm(ToUtmArgs),

    /// Project a geometry from another CRS back to WGS 84
    ToLatlon(ToLatlonArgs),

    /// Two-week imagery query window for a planting date
    Window(WindowArgs),

    /// Reverse-geocode the centroid of a WKT geometry
    Geocode(GeocodeArgs),

    /// Show the effective configuration and where each value comes from
    Config,
}

#[derive(Parser, Debug)]
pub struct WktArgs {
    /// WKT geometry, or "-" to read from stdin
    pub wkt: String,
}

#[derive(Parser, Debug)]
pub struct GeojsonArgs {
    /// GeoJSON text, or "-" to read from stdin
    pub geojson: String,
}

#[derive(Parser, Debug)]
pub struct UtmZoneArgs {
    /// Latitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,
}

/// Geometry text encoding for command output
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum GeometryFormat {
    #[default]
    Wkt,
    Geojson,
}

#[derive(Parser, Debug)]
pub struct ToUtmArgs {
    /// WKT geometry in WGS 84, or "-" to read from stdin
    pub wkt: String,

    /// UTM zone (1-60); picked from the centroid when omitted
    #[arg(long)]
    pub zone: Option<u32>,

    /// Use the southern hemisphere zone (only with --zone)
    #[arg(long, requires = "zone")]
    pub south: bool,

    /// Output encoding
    #[arg(long, value_enum, default_value_t = GeometryFormat::Wkt)]
    pub format: GeometryFormat,
}

#[derive(Parser, Debug)]
pub struct ToLatlonArgs {
    /// WKT geometry in the source CRS, or "-" to read from stdin
    pub wkt: String,

    /// Source CRS (e.g., EPSG:32615)
    #[arg(long)]
    pub from: String,

    /// Output encoding
    #[arg(long, value_enum, default_value_t = GeometryFormat::Wkt)]
    pub format: GeometryFormat,
}

#[derive(Parser, Debug)]
pub struct WindowArgs {
    /// Planting date (YYYY-MM-DD)
    pub planting_date: String,
}

#[derive(Parser, Debug)]
pub struct GeocodeArgs {
    /// WKT geometry in WGS 84, or "-" to read from stdin
    pub wkt: String,

    /// Nominatim base URL
    #[arg(long)]
    pub geocoder_url: Option<String>,

    /// User-Agent sent to the geocoder
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}
