//! Integration tests for layered configuration
//!
//! These tests verify that configuration loading follows the correct precedence:
//! Overrides > Environment variables > Config file > Defaults

use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;
use turf_core::config::{ConfigOverrides, ConfigSource, LayeredConfig, TurfDefaults};
use turf_core::models::Unit;

fn clear_env() {
    env::remove_var("TURF_DEFAULT_UNIT");
    env::remove_var("TURF_CIRCLE_STEPS");
    env::remove_var("TURF_SIMPLIFY_TOLERANCE");
    env::remove_var("TURF_SIMPLIFY_HIGH_QUALITY");
}

#[test]
#[serial]
fn test_defaults_match_turf_defaults() {
    clear_env();
    let config = LayeredConfig::with_defaults().load_from_env();

    assert_eq!(config.defaults(), TurfDefaults::default());
    assert_eq!(config.default_unit.source, ConfigSource::Default);
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
default_unit = "kilometres"
circle_steps = 32
"#
    )
    .unwrap();

    env::set_var("TURF_DEFAULT_UNIT", "miles");

    let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap().load_from_env();

    assert_eq!(config.default_unit.value, Unit::Miles);
    assert_eq!(config.default_unit.source, ConfigSource::Environment);
    assert_eq!(config.circle_steps.value, 32);
    assert_eq!(config.circle_steps.source, ConfigSource::File);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_env_values_are_ignored() {
    clear_env();
    env::set_var("TURF_DEFAULT_UNIT", "furlongs");
    env::set_var("TURF_CIRCLE_STEPS", "zero");
    env::set_var("TURF_SIMPLIFY_TOLERANCE", "-1");
    env::set_var("TURF_SIMPLIFY_HIGH_QUALITY", "sometimes");

    let config = LayeredConfig::with_defaults().load_from_env();

    assert_eq!(config.default_unit.value, Unit::Kilometers);
    assert_eq!(config.default_unit.source, ConfigSource::Default);
    assert_eq!(config.circle_steps.source, ConfigSource::Default);
    assert_eq!(config.simplify_tolerance.source, ConfigSource::Default);
    assert_eq!(config.simplify_high_quality.source, ConfigSource::Default);

    clear_env();
}

#[test]
#[serial]
fn test_valid_env_values() {
    clear_env();
    env::set_var("TURF_CIRCLE_STEPS", "128");
    env::set_var("TURF_SIMPLIFY_TOLERANCE", "0.001");
    env::set_var("TURF_SIMPLIFY_HIGH_QUALITY", "true");

    let defaults = LayeredConfig::with_defaults().load_from_env().defaults();

    assert_eq!(defaults.circle_steps, 128);
    assert_eq!(defaults.simplify_tolerance, 0.001);
    assert!(defaults.simplify_high_quality);

    clear_env();
}

#[test]
#[serial]
fn test_overrides_beat_environment() {
    clear_env();
    env::set_var("TURF_DEFAULT_UNIT", "miles");

    let mut config = LayeredConfig::with_defaults().load_from_env();
    config.update_from_overrides(ConfigOverrides {
        default_unit: Some(Unit::NauticalMiles),
        ..Default::default()
    });

    assert_eq!(config.default_unit.value, Unit::NauticalMiles);
    assert_eq!(config.default_unit.source, ConfigSource::Override);

    clear_env();
}

#[test]
fn test_missing_file_is_config_error() {
    let result = LayeredConfig::with_defaults().load_from_file("/nonexistent/turf.toml");
    assert!(result.is_err());
}

#[test]
fn test_unknown_unit_in_file_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"default_unit = "leagues""#).unwrap();

    let result = LayeredConfig::with_defaults().load_from_file(file.path());
    assert!(result.is_err());
}
