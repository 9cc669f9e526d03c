//! Integration tests for layered configuration
//!
//! These tests verify that configuration loading follows the correct precedence:
//! CLI arguments > Environment variables > Config file > Defaults

use fieldgeo_core::config::{
    CliConfigOverrides, ConfigSource, LayeredConfig, DEFAULT_GEOCODER_TIMEOUT_SECS,
    DEFAULT_GEOCODER_URL,
};
use fieldgeo_core::FieldgeoError;
use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn clear_env() {
    env::remove_var("FIELDGEO_GEOCODER_URL");
    env::remove_var("FIELDGEO_GEOCODER_USER_AGENT");
    env::remove_var("FIELDGEO_GEOCODER_TIMEOUT_SECS");
}

#[test]
fn test_partial_file_configuration() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
geocoder_timeout_secs = 25
# Only override the timeout, leave others as defaults
"#
    )
    .unwrap();

    let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

    assert_eq!(config.geocoder_timeout_secs.value, 25);
    assert_eq!(config.geocoder_timeout_secs.source, ConfigSource::File);
    assert_eq!(config.geocoder_url.value, DEFAULT_GEOCODER_URL);
    assert_eq!(config.geocoder_url.source, ConfigSource::Default);
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = TempDir::new().unwrap();
    let result = LayeredConfig::with_defaults().load_from_file(dir.path().join("fieldgeo.toml"));

    match result {
        Err(FieldgeoError::ConfigInvalid { key, .. }) => assert_eq!(key, "file"),
        other => panic!("expected ConfigInvalid, got {:?}", other),
    }
}

#[test]
fn test_invalid_toml_is_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "geocoder_url = ").unwrap();

    let result = LayeredConfig::with_defaults().load_from_file(file.path());
    assert!(matches!(result, Err(FieldgeoError::ConfigInvalid { .. })));
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    clear_env();

    env::set_var("FIELDGEO_GEOCODER_URL", "http://geocoder.internal:8080/");
    env::set_var("FIELDGEO_GEOCODER_TIMEOUT_SECS", "45");

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
geocoder_url = "https://file.example.org"
geocoder_timeout_secs = 5
geocoder_user_agent = "file-agent/1.0"
"#
    )
    .unwrap();

    let config =
        LayeredConfig::with_defaults().load_from_file(file.path()).unwrap().load_from_env();

    assert_eq!(config.geocoder_url.value, "http://geocoder.internal:8080");
    assert_eq!(config.geocoder_url.source, ConfigSource::Environment);
    assert_eq!(config.geocoder_timeout_secs.value, 45);
    assert_eq!(config.geocoder_timeout_secs.source, ConfigSource::Environment);
    assert_eq!(config.geocoder_user_agent.value, "file-agent/1.0");
    assert_eq!(config.geocoder_user_agent.source, ConfigSource::File);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_environment_values_are_ignored() {
    clear_env();

    env::set_var("FIELDGEO_GEOCODER_URL", "not-a-url");
    env::set_var("FIELDGEO_GEOCODER_TIMEOUT_SECS", "forever");
    env::set_var("FIELDGEO_GEOCODER_USER_AGENT", "   ");

    let config = LayeredConfig::with_defaults().load_from_env();

    assert_eq!(config.geocoder_url.value, DEFAULT_GEOCODER_URL);
    assert_eq!(config.geocoder_url.source, ConfigSource::Default);
    assert_eq!(config.geocoder_timeout_secs.value, DEFAULT_GEOCODER_TIMEOUT_SECS);
    assert_eq!(config.geocoder_user_agent.source, ConfigSource::Default);

    clear_env();
}

#[test]
#[serial]
fn test_configuration_precedence_order() {
    clear_env();
    env::set_var("FIELDGEO_GEOCODER_TIMEOUT_SECS", "20");

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "geocoder_timeout_secs = 15").unwrap();

    let mut config =
        LayeredConfig::with_defaults().load_from_file(file.path()).unwrap().load_from_env();

    assert_eq!(config.geocoder_timeout_secs.value, 20);
    assert_eq!(config.geocoder_timeout_secs.source, ConfigSource::Environment);

    config.update_from_cli(CliConfigOverrides {
        geocoder_timeout_secs: Some(2),
        ..Default::default()
    });

    assert_eq!(config.geocoder_timeout_secs.value, 2);
    assert_eq!(config.geocoder_timeout_secs.source, ConfigSource::Cli);

    assert!(ConfigSource::Cli.precedence() > ConfigSource::Environment.precedence());
    assert!(ConfigSource::Environment.precedence() > ConfigSource::File.precedence());
    assert!(ConfigSource::File.precedence() > ConfigSource::Default.precedence());

    clear_env();
}
