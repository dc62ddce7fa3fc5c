// src/consts.rs
//
// Literal values are kept at the precision the reference results were
// produced with. Do not replace them with expressions derived from PI.
#![allow(clippy::excessive_precision)]

use std::f64::consts::PI;

pub const KILOMETERS_PER_MILE: f64 = 1.6093439999999999;
pub const MILES_PER_KILOMETER: f64 = 0.621371192237334;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.01;
/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MI: f64 = 3958.762079;

pub const RADIANS_PER_DEGREE: f64 = 0.0174532925199433;
pub const DEGREES_PER_RADIAN: f64 = 57.295779513082321;

pub const MAX_LATITUDE_RAD: f64 = PI / 2.0;
pub const MIN_LATITUDE_RAD: f64 = -MAX_LATITUDE_RAD;
pub const MAX_LONGITUDE_RAD: f64 = PI;
pub const MIN_LONGITUDE_RAD: f64 = -MAX_LONGITUDE_RAD;

pub(crate) const FULL_CIRCLE_RAD: f64 = PI * 2.0;
