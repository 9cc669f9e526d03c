//! Nominatim reverse-geocoding adapter

use fieldgeo_core::config::LayeredConfig;
use fieldgeo_core::error::{FieldgeoError, Result};
use fieldgeo_core::models::Location;
use fieldgeo_core::ports::ReverseGeocoder;
use serde::Deserialize;
use std::time::Duration;

/// Zoom level 10 resolves to city/county granularity, enough for country and state
const REVERSE_ZOOM: u8 = 10;

/// Reverse geocoder backed by a Nominatim-compatible HTTP API
pub struct NominatimGeocoder {
    /// Base URL for the API (e.g., "https://nominatim.openstreetmap.org")
    base_url: String,

    /// User-Agent header sent with every request
    user_agent: String,

    /// HTTP client
    client: reqwest::Client,
}

impl NominatimGeocoder {
    /// Create a new geocoder
    pub fn new(
        base_url: impl Into<String>,
        user_agent: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let user_agent = user_agent.into();

        let client = reqwest::Client::builder()
            .user_agent(user_agent.clone())
            .timeout(timeout)
            .build()
            .map_err(|e| FieldgeoError::GeocoderUnavailable {
                reason: format!("Failed to build HTTP client: {}", e),
                remediation: "Check the TLS configuration of this host".to_string(),
            })?;

        Ok(Self { base_url, user_agent, client })
    }

    /// Create from layered configuration
    pub fn from_config(config: &LayeredConfig) -> Result<Self> {
        Self::new(
            config.geocoder_url.value.clone(),
            config.geocoder_user_agent.value.clone(),
            Duration::from_secs(config.geocoder_timeout_secs.value),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn reverse_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/reverse?format=jsonv2&addressdetails=1&zoom={}&lat={}&lon={}",
            self.base_url, REVERSE_ZOOM, latitude, longitude
        )
    }
}

impl ReverseGeocoder for NominatimGeocoder {
    fn reverse(&self, latitude: f64, longitude: f64) -> Result<Location> {
        // Use tokio runtime to execute async request
        let runtime =
            tokio::runtime::Runtime::new().map_err(|e| FieldgeoError::GeocoderUnavailable {
                reason: format!("Failed to create async runtime: {}", e),
                remediation: "Ensure tokio is properly configured".to_string(),
            })?;

        let url = self.reverse_url(latitude, longitude);
        tracing::debug!(%url, "Requesting reverse geocode");

        runtime.block_on(async {
            let response = self.client.get(&url).send().await.map_err(|e| {
                FieldgeoError::GeocoderUnavailable {
                    reason: format!("Failed to connect to geocoder: {}", e),
                    remediation: format!(
                        "Ensure {} is reachable, or point FIELDGEO_GEOCODER_URL \
                         at another Nominatim instance",
                        self.base_url
                    ),
                }
            })?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_default();
                return Err(FieldgeoError::GeocoderUnavailable {
                    reason: format!("Geocoder API error ({}): {}", status, error_text),
                    remediation: "Check the request rate and the configured User-Agent".to_string(),
                });
            }

            let body = response.text().await.map_err(|e| FieldgeoError::GeocoderUnavailable {
                reason: format!("Failed to read geocoder response: {}", e),
                remediation: "Retry the request".to_string(),
            })?;

            decode_response(&body)
        })
    }

    fn service_name(&self) -> &str {
        "nominatim"
    }
}

/// Decode a `format=jsonv2` reverse response
pub(crate) fn decode_response(body: &str) -> Result<Location> {
    let response: NominatimResponse =
        serde_json::from_str(body).map_err(|e| FieldgeoError::GeocoderUnavailable {
            reason: format!("Failed to parse geocoder response: {}", e),
            remediation: "Check Nominatim API compatibility".to_string(),
        })?;

    if let Some(error) = response.error {
        return Err(FieldgeoError::GeocoderUnavailable {
            reason: format!("Geocoder returned no result: {}", error),
            remediation: "Coordinates may be outside any mapped area (e.g. open sea)".to_string(),
        });
    }

    let address = response.address.unwrap_or_default();
    let mut location = Location::new(response.display_name.unwrap_or_default());
    location.country = address.country;
    location.country_code = address.country_code.map(|c| c.to_uppercase());
    location.state = address.state.or(address.province).or(address.region);
    location.county = address.county;
    Ok(location)
}

/// Response body of the Nominatim reverse API
#[derive(Debug, Deserialize)]
struct NominatimResponse {
    display_name: Option<String>,
    address: Option<NominatimAddress>,
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    country: Option<String>,
    country_code: Option<String>,
    state: Option<String>,
    province: Option<String>,
    region: Option<String>,
    county: Option<String>,
}
