// src/units.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEGREES_PER_RADIAN, EARTH_RADIUS_KM, EARTH_RADIUS_MI, KILOMETERS_PER_MILE,
    MILES_PER_KILOMETER, RADIANS_PER_DEGREE,
};
use crate::error::GeoError;

/// Angular representation used when constructing a point or reading its coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleFormat {
    #[default]
    Degrees,
    #[serde(rename = "radian")]
    Radians,
}

impl AngleFormat {
    /// The canonical token for this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            AngleFormat::Degrees => "degrees",
            AngleFormat::Radians => "radian",
        }
    }
}

impl fmt::Display for AngleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AngleFormat {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "degrees" | "degree" => Ok(AngleFormat::Degrees),
            "radian" | "radians" => Ok(AngleFormat::Radians),
            _ => Err(GeoError::unknown_token(
                "angle format",
                s,
                &["degrees", "radian"],
            )),
        }
    }
}

/// Unit for linear distances along the Earth's surface.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Miles,
}

impl DistanceUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "kilometers",
            DistanceUnit::Miles => "miles",
        }
    }

    /// Mean Earth radius expressed in this unit.
    pub fn earth_radius(&self) -> f64 {
        match self {
            DistanceUnit::Kilometers => EARTH_RADIUS_KM,
            DistanceUnit::Miles => EARTH_RADIUS_MI,
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceUnit {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kilometers" | "km" => Ok(DistanceUnit::Kilometers),
            "miles" | "mi" => Ok(DistanceUnit::Miles),
            _ => Err(GeoError::unknown_token(
                "distance unit",
                s,
                &["kilometers", "miles"],
            )),
        }
    }
}

pub fn radians_to_degrees(value: f64) -> f64 {
    value * DEGREES_PER_RADIAN
}

pub fn degrees_to_radians(value: f64) -> f64 {
    value * RADIANS_PER_DEGREE
}

pub fn miles_to_kilometers(value: f64) -> f64 {
    value * KILOMETERS_PER_MILE
}

pub fn kilometers_to_miles(value: f64) -> f64 {
    value * MILES_PER_KILOMETER
}
