use crate::error::Result;
use crate::models::Location;

/// Port for reverse-geocoding services
///
/// Implementations resolve a WGS 84 coordinate to the administrative area it
/// falls in. Callers pass latitude first.
pub trait ReverseGeocoder {
    /// Resolve `(latitude, longitude)` to a location
    fn reverse(&self, latitude: f64, longitude: f64) -> Result<Location>;

    /// Name of the backing service, for logs and diagnostics
    fn service_name(&self) -> &str;
}

