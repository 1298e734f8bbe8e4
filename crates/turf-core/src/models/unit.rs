//! Length and angle units supported by the measurement functions.

use crate::error::{Result, TurfError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Units a distance can be expressed in.
///
/// Every unit maps to a fixed number of units per radian of arc on a sphere with
/// the Earth's mean radius. British spellings parse to the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Miles,
    NauticalMiles,
    #[default]
    #[serde(alias = "kilometres")]
    Kilometers,
    #[serde(alias = "metres")]
    Meters,
    #[serde(alias = "centimetres")]
    Centimeters,
    Feet,
    Yards,
    Inches,
    Degrees,
    Radians,
}

impl Unit {
    /// All supported units, in declaration order.
    pub const ALL: [Unit; 10] = [
        Unit::Miles,
        Unit::NauticalMiles,
        Unit::Kilometers,
        Unit::Meters,
        Unit::Centimeters,
        Unit::Feet,
        Unit::Yards,
        Unit::Inches,
        Unit::Degrees,
        Unit::Radians,
    ];

    /// Units per radian.
    pub const fn factor(self) -> f64 {
        match self {
            Unit::Miles => 3960.0,
            Unit::NauticalMiles => 3441.145,
            Unit::Kilometers => 6373.0,
            Unit::Meters => 6_373_000.0,
            Unit::Centimeters => 6.373e8,
            Unit::Feet => 20_908_792.65,
            Unit::Yards => 6_969_600.0,
            Unit::Inches => 250_905_600.0,
            Unit::Degrees => 57.2957795,
            Unit::Radians => 1.0,
        }
    }

    /// Canonical (American spelling) name of the unit.
    pub const fn as_str(self) -> &'static str {
        match self {
            Unit::Miles => "miles",
            Unit::NauticalMiles => "nauticalmiles",
            Unit::Kilometers => "kilometers",
            Unit::Meters => "meters",
            Unit::Centimeters => "centimeters",
            Unit::Feet => "feet",
            Unit::Yards => "yards",
            Unit::Inches => "inches",
            Unit::Degrees => "degrees",
            Unit::Radians => "radians",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = TurfError;

    /// Unit names are case-sensitive.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "miles" => Ok(Unit::Miles),
            "nauticalmiles" => Ok(Unit::NauticalMiles),
            "kilometers" | "kilometres" => Ok(Unit::Kilometers),
            "meters" | "metres" => Ok(Unit::Meters),
            "centimeters" | "centimetres" => Ok(Unit::Centimeters),
            "feet" => Ok(Unit::Feet),
            "yards" => Ok(Unit::Yards),
            "inches" => Ok(Unit::Inches),
            "degrees" => Ok(Unit::Degrees),
            "radians" => Ok(Unit::Radians),
            _ => Err(TurfError::InvalidUnit { unit: s.to_string() }),
        }
    }
}
