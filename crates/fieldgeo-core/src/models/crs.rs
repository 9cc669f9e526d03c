//! Coordinate reference system and UTM zone types.

use crate::error::{FieldgeoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// EPSG prefix for WGS 84 / UTM north zones (32601..=32660)
pub const UTM_NORTH_EPSG_BASE: u32 = 32600;

/// EPSG prefix for WGS 84 / UTM south zones (32701..=32760)
pub const UTM_SOUTH_EPSG_BASE: u32 = 32700;

/// Coordinate Reference System identified by EPSG code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crs {
    pub epsg: u32,
    pub name: String,
}

impl Default for Crs {
    fn default() -> Self {
        Self::wgs84()
    }
}

impl Crs {
    pub fn new(epsg: u32, name: impl Into<String>) -> Self {
        Self { epsg, name: name.into() }
    }

    /// WGS 84 (EPSG:4326)
    pub fn wgs84() -> Self {
        Self::new(4326, "WGS 84")
    }

    /// WGS 84 / UTM zone `zone`N (EPSG:326zz)
    pub fn utm_north(zone: u32) -> Result<Self> {
        check_zone(zone)?;
        Ok(Self::new(UTM_NORTH_EPSG_BASE + zone, format!("WGS 84 / UTM zone {}N", zone)))
    }

    /// WGS 84 / UTM zone `zone`S (EPSG:327zz)
    pub fn utm_south(zone: u32) -> Result<Self> {
        check_zone(zone)?;
        Ok(Self::new(UTM_SOUTH_EPSG_BASE + zone, format!("WGS 84 / UTM zone {}S", zone)))
    }

    /// Parse an `EPSG:<code>` identifier (prefix is case-insensitive)
    pub fn parse(code: &str) -> Result<Self> {
        let trimmed = code.trim();
        let digits = trimmed
            .get(..5)
            .filter(|prefix| prefix.eq_ignore_ascii_case("epsg:"))
            .map(|_| &trimmed[5..])
            .ok_or_else(|| {
                FieldgeoError::parse("CRS", format!("expected EPSG:<code>, got '{}'", code))
            })?;

        let epsg = digits
            .parse::<u32>()
            .map_err(|e| {
                FieldgeoError::parse("CRS", format!("invalid EPSG code '{}': {}", digits, e))
            })?;

        let name = match epsg {
            4326 => "WGS 84".to_string(),
            3857 => "Web Mercator".to_string(),
            c if (32601..=32660).contains(&c) => {
                format!("WGS 84 / UTM zone {}N", c - UTM_NORTH_EPSG_BASE)
            }
            c if (32701..=32760).contains(&c) => {
                format!("WGS 84 / UTM zone {}S", c - UTM_SOUTH_EPSG_BASE)
            }
            _ => format!("EPSG:{}", epsg),
        };

        Ok(Self { epsg, name })
    }

    /// The `EPSG:<code>` string handed to PROJ
    pub fn code(&self) -> String {
        format!("EPSG:{}", self.epsg)
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.epsg)
    }
}

fn check_zone(zone: u32) -> Result<()> {
    if !(1..=60).contains(&zone) {
        return Err(FieldgeoError::Projection {
            from: "EPSG:4326".to_string(),
            to: format!("UTM zone {}", zone),
            reason: "UTM zone must be between 1 and 60".to_string(),
        });
    }
    Ok(())
}

/// Hemisphere of a UTM zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hemisphere {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "S")]
    South,
}

impl Hemisphere {
    /// Southern for negative latitudes; the equator counts as north
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude < 0.0 {
            Hemisphere::South
        } else {
            Hemisphere::North
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Hemisphere::North => "N",
            Hemisphere::South => "S",
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UTM zone number plus hemisphere.
///
/// `zone` is not range checked: longitudes outside [-180, 180) produce zones
/// outside 1..=60 and are carried as-is. Only [`UtmZone::crs`] rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UtmZone {
    pub zone: i32,
    pub hemisphere: Hemisphere,
}

impl UtmZone {
    pub fn new(zone: i32, hemisphere: Hemisphere) -> Self {
        Self { zone, hemisphere }
    }

    pub fn is_north(&self) -> bool {
        self.hemisphere == Hemisphere::North
    }

    /// The WGS 84 / UTM CRS for this zone
    pub fn crs(&self) -> Result<Crs> {
        let zone = u32::try_from(self.zone).map_err(|_| FieldgeoError::Projection {
            from: "EPSG:4326".to_string(),
            to: format!("UTM zone {}", self),
            reason: "UTM zone must be between 1 and 60".to_string(),
        })?;
        match self.hemisphere {
            Hemisphere::North => Crs::utm_north(zone),
            Hemisphere::South => Crs::utm_south(zone),
        }
    }
}

impl fmt::Display for UtmZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.zone, self.hemisphere)
    }
}
