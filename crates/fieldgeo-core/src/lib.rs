//! fieldgeo Core - Domain models, ports, and configuration
//!
//! This crate contains the shared error type, CRS and location models, the
//! reverse-geocoder port, and layered configuration for the fieldgeo tools.

pub mod config;
pub mod error;
pub mod models;
pub mod ports;

pub use error::{FieldgeoError, Result};
