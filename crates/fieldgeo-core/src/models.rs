pub mod crs;
pub mod location;

pub use crs::{Crs, Hemisphere, UtmZone, UTM_NORTH_EPSG_BASE, UTM_SOUTH_EPSG_BASE};
pub use location::Location;
