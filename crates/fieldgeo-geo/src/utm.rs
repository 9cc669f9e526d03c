//! UTM zone lookup

use crate::analytics::geometry_centroid;
use fieldgeo_core::error::Result;
use fieldgeo_core::models::{Hemisphere, UtmZone};
use geo::Geometry;

/// UTM zone and hemisphere of a WGS 84 coordinate.
///
/// Zone is `floor(1 + (longitude + 180) / 6)`. Inputs are not range checked:
/// a longitude of 180 or beyond yields zone 61 or more, below -180 yields zone
/// 0 or less. Latitude 0 is northern.
pub fn utm_zone(latitude: f64, longitude: f64) -> UtmZone {
    let zone = (1.0 + (longitude + 180.0) / 6.0).floor() as i32;
    UtmZone::new(zone, Hemisphere::from_latitude(latitude))
}

/// UTM zone of a geometry's centroid
pub fn utm_zone_for_geometry(geometry: &Geometry<f64>) -> Result<UtmZone> {
    let (latitude, longitude) = geometry_centroid(geometry)?;
    Ok(utm_zone(latitude, longitude))
}
