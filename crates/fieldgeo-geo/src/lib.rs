//! fieldgeo Geo - Geometry conversion, UTM, and CRS operations
//!
//! Stateless functions over field-boundary geometries: WKT/GeoJSON
//! conversion, centroids, UTM zone lookup, reprojection, imagery query
//! windows, and reverse geocoding through the [`ReverseGeocoder`] port.

pub mod analytics;
pub mod convert;
pub mod geocode;
pub mod transform;
pub mod utm;
pub mod window;

pub use analytics::{centroid, geometry_centroid, reverse_geocode};
pub use convert::{
    geojson_str_to_wkt, geojson_to_geometry, geojson_to_wkt, geometry_to_geojson,
    geometry_to_wkt, geometry_wkt_to_coordinate_list, wkt_to_feature, wkt_to_geojson,
    wkt_to_geometry,
};
pub use fieldgeo_core::models::{Crs, Hemisphere, Location, UtmZone};
pub use fieldgeo_core::ports::ReverseGeocoder;
pub use fieldgeo_core::{FieldgeoError, Result};
pub use geocode::NominatimGeocoder;
pub use transform::{
    latlon_to_utm, latlon_to_utm_north, latlon_to_utm_south, reproject, utm_to_latlon,
};
pub use utm::{utm_zone, utm_zone_for_geometry};
pub use window::{image_query_window, QueryWindow, IMAGE_QUERY_WINDOW_DAYS};
