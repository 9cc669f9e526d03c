//! Error types for fieldgeo

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldgeoError {
    // Input parsing errors
    #[error("Failed to parse {input}: {reason}")]
    Parse { input: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    // Reprojection errors
    #[error("Projection from {from} to {to} failed: {reason}")]
    Projection {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    // Reverse geocoding collaborator errors
    #[error("Geocoder unavailable: {reason}. Try: {remediation}")]
    GeocoderUnavailable {
        reason: String,
        remediation: String,
    },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FieldgeoError {
    /// Build a `Parse` error for the named input kind ("WKT", "GeoJSON", "date", ...)
    pub fn parse(input: impl Into<String>, reason: impl ToString) -> Self {
        FieldgeoError::Parse { input: input.into(), reason: reason.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, FieldgeoError>;
