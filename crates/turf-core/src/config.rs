use crate::error::{Result, TurfError};
use crate::models::Unit;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Steps used to approximate a circle when none are given.
pub const DEFAULT_CIRCLE_STEPS: usize = 64;

/// Simplification tolerance, in coordinate degrees, when none is given.
pub const DEFAULT_SIMPLIFY_TOLERANCE: f64 = 1.0;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Set programmatically by the caller
    Override,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Override => 3,
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

/// Resolved defaults handed to the algorithms that take optional arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurfDefaults {
    pub unit: Unit,
    pub circle_steps: usize,
    pub simplify_tolerance: f64,
    pub simplify_high_quality: bool,
}

impl Default for TurfDefaults {
    fn default() -> Self {
        Self {
            unit: Unit::default(),
            circle_steps: DEFAULT_CIRCLE_STEPS,
            simplify_tolerance: DEFAULT_SIMPLIFY_TOLERANCE,
            simplify_high_quality: false,
        }
    }
}

/// Layered configuration for the turf defaults
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub default_unit: ConfigValue<Unit>,
    pub circle_steps: ConfigValue<usize>,
    pub simplify_tolerance: ConfigValue<f64>,
    pub simplify_high_quality: ConfigValue<bool>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        let defaults = TurfDefaults::default();
        Self {
            default_unit: ConfigValue::new(defaults.unit, ConfigSource::Default),
            circle_steps: ConfigValue::new(defaults.circle_steps, ConfigSource::Default),
            simplify_tolerance: ConfigValue::new(
                defaults.simplify_tolerance,
                ConfigSource::Default,
            ),
            simplify_high_quality: ConfigValue::new(
                defaults.simplify_high_quality,
                ConfigSource::Default,
            ),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| TurfError::ConfigInvalid {
            key: "file".to_string(),
            reason: format!("Failed to read config file: {}", e),
        })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| TurfError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(unit) = file_config.default_unit {
            self.default_unit.update(unit, ConfigSource::File);
        }

        if let Some(steps) = file_config.circle_steps {
            let steps = usize::try_from(steps).ok().filter(|s| *s >= 1).ok_or_else(|| {
                TurfError::ConfigInvalid {
                    key: "circle_steps".to_string(),
                    reason: format!("Invalid step count: {}. Use a positive integer", steps),
                }
            })?;
            self.circle_steps.update(steps, ConfigSource::File);
        }

        if let Some(tolerance) = file_config.simplify_tolerance {
            self.simplify_tolerance.update(check_tolerance(tolerance)?, ConfigSource::File);
        }

        if let Some(high_quality) = file_config.simplify_high_quality {
            self.simplify_high_quality.update(high_quality, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // TURF_DEFAULT_UNIT
        if let Ok(unit_str) = env::var("TURF_DEFAULT_UNIT") {
            match unit_str.parse::<Unit>() {
                Ok(unit) => self.default_unit.update(unit, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid TURF_DEFAULT_UNIT value '{}': expected a unit such as kilometers or miles",
                    unit_str
                ),
            }
        }

        // TURF_CIRCLE_STEPS
        if let Ok(steps_str) = env::var("TURF_CIRCLE_STEPS") {
            match parse_circle_steps(&steps_str) {
                Ok(steps) => self.circle_steps.update(steps, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid TURF_CIRCLE_STEPS value '{}': expected a positive integer",
                    steps_str
                ),
            }
        }

        // TURF_SIMPLIFY_TOLERANCE
        if let Ok(tolerance_str) = env::var("TURF_SIMPLIFY_TOLERANCE") {
            match parse_tolerance(&tolerance_str) {
                Ok(tolerance) => self.simplify_tolerance.update(tolerance, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid TURF_SIMPLIFY_TOLERANCE value '{}': expected a non-negative number",
                    tolerance_str
                ),
            }
        }

        // TURF_SIMPLIFY_HIGH_QUALITY
        if let Ok(flag_str) = env::var("TURF_SIMPLIFY_HIGH_QUALITY") {
            match parse_flag(&flag_str) {
                Ok(flag) => self.simplify_high_quality.update(flag, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid TURF_SIMPLIFY_HIGH_QUALITY value '{}': expected true or false",
                    flag_str
                ),
            }
        }

        self
    }

    /// Apply caller overrides, which take precedence over every other source
    pub fn update_from_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(unit) = overrides.default_unit {
            self.default_unit.update(unit, ConfigSource::Override);
        }

        if let Some(steps) = overrides.circle_steps {
            self.circle_steps.update(steps, ConfigSource::Override);
        }

        if let Some(tolerance) = overrides.simplify_tolerance {
            self.simplify_tolerance.update(tolerance, ConfigSource::Override);
        }

        if let Some(high_quality) = overrides.simplify_high_quality {
            self.simplify_high_quality.update(high_quality, ConfigSource::Override);
        }
    }

    /// Snapshot of the effective values
    pub fn defaults(&self) -> TurfDefaults {
        TurfDefaults {
            unit: self.default_unit.value,
            circle_steps: self.circle_steps.value,
            simplify_tolerance: self.simplify_tolerance.value,
            simplify_high_quality: self.simplify_high_quality.value,
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "default_unit".to_string(),
            (self.default_unit.value.to_string(), self.default_unit.source),
        );

        map.insert(
            "circle_steps".to_string(),
            (self.circle_steps.value.to_string(), self.circle_steps.source),
        );

        map.insert(
            "simplify_tolerance".to_string(),
            (self.simplify_tolerance.value.to_string(), self.simplify_tolerance.source),
        );

        map.insert(
            "simplify_high_quality".to_string(),
            (self.simplify_high_quality.value.to_string(), self.simplify_high_quality.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    default_unit: Option<Unit>,
    circle_steps: Option<i64>,
    simplify_tolerance: Option<f64>,
    simplify_high_quality: Option<bool>,
}

/// Programmatic configuration overrides
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub default_unit: Option<Unit>,
    pub circle_steps: Option<usize>,
    pub simplify_tolerance: Option<f64>,
    pub simplify_high_quality: Option<bool>,
}

/// Parse a circle step count; at least one step is required
pub fn parse_circle_steps(s: &str) -> Result<usize> {
    match s.trim().parse::<usize>() {
        Ok(steps) if steps >= 1 => Ok(steps),
        _ => Err(TurfError::ConfigInvalid {
            key: "circle_steps".to_string(),
            reason: format!("Invalid step count: {}. Use a positive integer", s),
        }),
    }
}

/// Parse a simplification tolerance; must be finite and non-negative
pub fn parse_tolerance(s: &str) -> Result<f64> {
    let tolerance = s.trim().parse::<f64>().map_err(|_| TurfError::ConfigInvalid {
        key: "simplify_tolerance".to_string(),
        reason: format!("Invalid tolerance: {}. Use a non-negative number", s),
    })?;
    check_tolerance(tolerance)
}

fn check_tolerance(tolerance: f64) -> Result<f64> {
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(tolerance)
    } else {
        Err(TurfError::ConfigInvalid {
            key: "simplify_tolerance".to_string(),
            reason: format!("Invalid tolerance: {}. Use a non-negative number", tolerance),
        })
    }
}

/// Parse a boolean flag from string
pub fn parse_flag(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(TurfError::ConfigInvalid {
            key: "simplify_high_quality".to_string(),
            reason: format!("Invalid flag: {}. Use true or false", s),
        }),
    }
}
