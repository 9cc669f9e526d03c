//! CRS transformation between WGS 84 and UTM

use crate::utm::utm_zone_for_geometry;
use fieldgeo_core::error::{FieldgeoError, Result};
use fieldgeo_core::models::{Crs, UtmZone};
use geo::{Coord, Geometry, MapCoords};
use proj::Proj;

/// Reproject a geometry from one CRS to another.
///
/// CRS arguments are anything PROJ resolves, usually `EPSG:<code>`.
/// Coordinates are taken and returned in x/y order (longitude first for
/// geographic CRSs). The input geometry is left untouched.
pub fn reproject(geometry: &Geometry<f64>, from_crs: &str, to_crs: &str) -> Result<Geometry<f64>> {
    // If CRS are the same, no transformation needed
    if from_crs.trim().eq_ignore_ascii_case(to_crs.trim()) {
        return Ok(geometry.clone());
    }

    let proj = Proj::new_known_crs(from_crs, to_crs, None).map_err(|e| FieldgeoError::Projection {
        from: from_crs.to_string(),
        to: to_crs.to_string(),
        reason: format!("Failed to create projection: {}", e),
    })?;

    tracing::debug!(from = from_crs, to = to_crs, "Reprojecting geometry");

    geometry
        .try_map_coords(|coord: Coord<f64>| {
            let (x, y) = proj.convert((coord.x, coord.y)).map_err(|e| e.to_string())?;
            if !x.is_finite() || !y.is_finite() {
                return Err(format!("({}, {}) has no finite image", coord.x, coord.y));
            }
            Ok(Coord { x, y })
        })
        .map_err(|reason| FieldgeoError::Projection {
            from: from_crs.to_string(),
            to: to_crs.to_string(),
            reason: format!("Projection failed: {}", reason),
        })
}

/// Project a WGS 84 geometry into UTM zone `zone` north (EPSG:326zz)
pub fn latlon_to_utm_north(geometry: &Geometry<f64>, zone: u32) -> Result<Geometry<f64>> {
    let target = Crs::utm_north(zone)?;
    reproject(geometry, &Crs::wgs84().code(), &target.code())
}

/// Project a WGS 84 geometry into UTM zone `zone` south (EPSG:327zz)
pub fn latlon_to_utm_south(geometry: &Geometry<f64>, zone: u32) -> Result<Geometry<f64>> {
    let target = Crs::utm_south(zone)?;
    reproject(geometry, &Crs::wgs84().code(), &target.code())
}

/// Project a geometry from `source_crs` back to WGS 84
pub fn utm_to_latlon(geometry: &Geometry<f64>, source_crs: &str) -> Result<Geometry<f64>> {
    reproject(geometry, source_crs, &Crs::wgs84().code())
}

/// Project a WGS 84 geometry into the UTM zone containing its centroid
pub fn latlon_to_utm(geometry: &Geometry<f64>) -> Result<(Geometry<f64>, UtmZone)> {
    let zone = utm_zone_for_geometry(geometry)?;
    let target = zone.crs()?;
    let projected = reproject(geometry, &Crs::wgs84().code(), &target.code())?;
    Ok((projected, zone))
}
