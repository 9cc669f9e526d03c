use serde::Serialize;

/// Output for centroid command
#[derive(Debug, Serialize)]
pub struct CentroidOutput {
    pub latitude: f64,
    pub longitude: f64,
}

/// Output for utm-zone command
#[derive(Debug, Serialize)]
pub struct UtmZoneOutput {
    pub zone: i32,
    pub hemisphere: String,
    /// None when the zone falls outside 1-60
    pub crs: Option<String>,
}

/// Output for to-utm and to-latlon commands
#[derive(Debug, Serialize)]
pub struct ReprojectOutput {
    pub source_crs: String,
    pub target_crs: String,
    pub wkt: String,
    pub geojson: serde_json::Value,
}

/// Output for window command
#[derive(Debug, Serialize)]
pub struct WindowOutput {
    pub planting_date: String,
    pub start: String,
    pub end: String,
    pub days: i64,
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
    pub source: String,
}
