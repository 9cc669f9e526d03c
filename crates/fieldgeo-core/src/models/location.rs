//! Reverse-geocoding result

use serde::{Deserialize, Serialize};

/// Administrative location a coordinate falls in
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    /// Human-readable place name as reported by the geocoder
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// ISO 3166-1 alpha-2, upper case
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// First-level administrative division
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Second-level administrative division
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
}

impl Location {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = Some(code.into().to_uppercase());
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn county(mut self, county: impl Into<String>) -> Self {
        self.county = Some(county.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_builder() {
        let loc = Location::new("Ames, Iowa")
            .country("United States")
            .country_code("us")
            .state("Iowa");
        assert_eq!(loc.country_code.as_deref(), Some("US"));
        assert_eq!(loc.state.as_deref(), Some("Iowa"));
        assert!(loc.county.is_none());

        let json = serde_json::to_value(&loc).unwrap();
        assert!(json.get("county").is_none());
        assert_eq!(json["country"], "United States");
    }
}
