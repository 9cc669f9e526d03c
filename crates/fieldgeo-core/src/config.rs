use crate::error::{FieldgeoError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Default Nominatim endpoint used for reverse geocoding
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

/// Default User-Agent sent to the geocoder (Nominatim rejects anonymous clients)
pub const DEFAULT_GEOCODER_USER_AGENT: &str = concat!("fieldgeo/", env!("CARGO_PKG_VERSION"));

/// Default geocoder request timeout in seconds
pub const DEFAULT_GEOCODER_TIMEOUT_SECS: u64 = 10;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for fieldgeo
///
/// Only the reverse-geocoder collaborator is configurable. The imagery query
/// window length is a fixed rule and deliberately absent here.
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub geocoder_url: ConfigValue<String>,
    pub geocoder_user_agent: ConfigValue<String>,
    pub geocoder_timeout_secs: ConfigValue<u64>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            geocoder_url: ConfigValue::new(DEFAULT_GEOCODER_URL.to_string(), ConfigSource::Default),
            geocoder_user_agent: ConfigValue::new(
                DEFAULT_GEOCODER_USER_AGENT.to_string(),
                ConfigSource::Default,
            ),
            geocoder_timeout_secs: ConfigValue::new(
                DEFAULT_GEOCODER_TIMEOUT_SECS,
                ConfigSource::Default,
            ),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| FieldgeoError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| FieldgeoError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(url) = file_config.geocoder_url {
            self.geocoder_url.update(parse_url(&url)?, ConfigSource::File);
        }

        if let Some(user_agent) = file_config.geocoder_user_agent {
            self.geocoder_user_agent.update(user_agent, ConfigSource::File);
        }

        if let Some(timeout) = file_config.geocoder_timeout_secs {
            if timeout == 0 {
                return Err(FieldgeoError::ConfigInvalid {
                    key: "geocoder_timeout_secs".to_string(),
                    reason: "Timeout must be a positive number of seconds".to_string(),
                });
            }
            self.geocoder_timeout_secs.update(timeout, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // FIELDGEO_GEOCODER_URL
        if let Ok(url) = env::var("FIELDGEO_GEOCODER_URL") {
            match parse_url(&url) {
                Ok(url) => self.geocoder_url.update(url, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid FIELDGEO_GEOCODER_URL value '{}': expected an http(s) URL",
                    url
                ),
            }
        }

        // FIELDGEO_GEOCODER_USER_AGENT
        if let Ok(user_agent) = env::var("FIELDGEO_GEOCODER_USER_AGENT") {
            if user_agent.trim().is_empty() {
                tracing::warn!("Ignoring empty FIELDGEO_GEOCODER_USER_AGENT");
            } else {
                self.geocoder_user_agent.update(user_agent, ConfigSource::Environment);
            }
        }

        // FIELDGEO_GEOCODER_TIMEOUT_SECS
        if let Ok(timeout_str) = env::var("FIELDGEO_GEOCODER_TIMEOUT_SECS") {
            match parse_timeout(&timeout_str) {
                Ok(timeout) => {
                    self.geocoder_timeout_secs.update(timeout, ConfigSource::Environment)
                }
                Err(_) => tracing::warn!(
                    "Invalid FIELDGEO_GEOCODER_TIMEOUT_SECS value '{}': not a positive integer",
                    timeout_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(url) = overrides.geocoder_url {
            self.geocoder_url.update(url, ConfigSource::Cli);
        }

        if let Some(user_agent) = overrides.geocoder_user_agent {
            self.geocoder_user_agent.update(user_agent, ConfigSource::Cli);
        }

        if let Some(timeout) = overrides.geocoder_timeout_secs {
            self.geocoder_timeout_secs.update(timeout, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "geocoder_url".to_string(),
            (self.geocoder_url.value.clone(), self.geocoder_url.source),
        );

        map.insert(
            "geocoder_user_agent".to_string(),
            (self.geocoder_user_agent.value.clone(), self.geocoder_user_agent.source),
        );

        map.insert(
            "geocoder_timeout_secs".to_string(),
            (self.geocoder_timeout_secs.value.to_string(), self.geocoder_timeout_secs.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    geocoder_url: Option<String>,
    geocoder_user_agent: Option<String>,
    geocoder_timeout_secs: Option<u64>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub geocoder_url: Option<String>,
    pub geocoder_user_agent: Option<String>,
    pub geocoder_timeout_secs: Option<u64>,
}

/// Validate a geocoder base URL, stripping any trailing slash
pub fn parse_url(s: &str) -> Result<String> {
    let trimmed = s.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(FieldgeoError::ConfigInvalid {
            key: "geocoder_url".to_string(),
            reason: format!("Invalid URL: {}. Must start with http:// or https://", s),
        })
    }
}

/// Parse a timeout in whole seconds; zero is rejected
pub fn parse_timeout(s: &str) -> Result<u64> {
    match s.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(FieldgeoError::ConfigInvalid {
            key: "geocoder_timeout_secs".to_string(),
            reason: format!("Invalid timeout: {}. Use a positive number of seconds", s),
        }),
    }
}
