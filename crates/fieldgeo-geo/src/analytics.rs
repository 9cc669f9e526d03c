//! Centroid and reverse-geocode lookups for field geometries

use crate::convert::wkt_to_geometry;
use fieldgeo_core::error::{FieldgeoError, Result};
use fieldgeo_core::models::Location;
use fieldgeo_core::ports::ReverseGeocoder;
use geo::{Centroid, Geometry};

/// Centroid of a WKT geometry as `(latitude, longitude)`, i.e. `(y, x)`
pub fn centroid(wkt: &str) -> Result<(f64, f64)> {
    let geometry = wkt_to_geometry(wkt)?;
    geometry_centroid(&geometry)
}

/// Centroid of a geometry as `(latitude, longitude)`, i.e. `(y, x)`
pub fn geometry_centroid(geometry: &Geometry<f64>) -> Result<(f64, f64)> {
    let point = geometry.centroid().ok_or_else(|| FieldgeoError::InvalidGeometry {
        reason: "empty geometry has no centroid".to_string(),
    })?;
    Ok((point.y(), point.x()))
}

/// Reverse-geocode the centroid of a geometry.
///
/// The collaborator's result and errors are passed through unchanged.
pub fn reverse_geocode<G>(geometry: &Geometry<f64>, geocoder: &G) -> Result<Location>
where
    G: ReverseGeocoder + ?Sized,
{
    let (latitude, longitude) = geometry_centroid(geometry)?;
    tracing::debug!(
        service = geocoder.service_name(),
        latitude,
        longitude,
        "Reverse geocoding geometry centroid"
    );
    geocoder.reverse(latitude, longitude)
}
