// src/geopoint.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{
    FULL_CIRCLE_RAD, MAX_LATITUDE_RAD, MAX_LONGITUDE_RAD, MIN_LATITUDE_RAD, MIN_LONGITUDE_RAD,
};
use crate::error::{ArgumentViolation, GeoError, Result};
use crate::units::{self, AngleFormat, DistanceUnit};

/// A point on the surface of a sphere approximating the Earth.
///
/// Latitude and longitude are held in both degrees and radians. The output
/// format only decides which of the two `latitude()` / `longitude()` return;
/// it takes no part in equality or serialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(into = "GeoPointRecord", try_from = "GeoPointRecord")]
pub struct GeoPoint {
    deg_lat: f64,
    deg_lon: f64,
    rad_lat: f64,
    rad_lon: f64,
    output_format: AngleFormat,
}

/// Serialized form of a [`GeoPoint`], always in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPointRecord {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a new `GeoPoint` from a coordinate pair expressed in `format`.
    ///
    /// # Errors
    /// Returns `GeoError::InvalidArgument` if either value is NaN, if the
    /// latitude lies outside [-π/2, π/2] radians or if the longitude lies
    /// outside [-π, π] radians. The checks run in that order and the first
    /// failure is reported.
    pub fn new(lat: f64, lon: f64, format: AngleFormat) -> Result<Self> {
        let (deg_lat, deg_lon, rad_lat, rad_lon) = match format {
            AngleFormat::Radians => (
                units::radians_to_degrees(lat),
                units::radians_to_degrees(lon),
                lat,
                lon,
            ),
            AngleFormat::Degrees => (
                lat,
                lon,
                units::degrees_to_radians(lat),
                units::degrees_to_radians(lon),
            ),
        };

        validate(lat, lon, rad_lat, rad_lon)?;

        Ok(GeoPoint {
            deg_lat,
            deg_lon,
            rad_lat,
            rad_lon,
            output_format: AngleFormat::Degrees,
        })
    }

    /// Creates a `GeoPoint` from textual input.
    ///
    /// The format token is checked first, then each coordinate must parse as a
    /// finite number, then the values go through [`GeoPoint::new`]. Text such
    /// as `"inf"` or `"NaN"` counts as non-numeric.
    pub fn parse(lat: &str, lon: &str, format: &str) -> Result<Self> {
        let format: AngleFormat = format.parse()?;
        let lat = parse_finite(lat).ok_or(ArgumentViolation::LatitudeNotNumeric)?;
        let lon = parse_finite(lon).ok_or(ArgumentViolation::LongitudeNotNumeric)?;
        Self::new(lat, lon, format)
    }

    pub fn output_format(&self) -> AngleFormat {
        self.output_format
    }

    /// Sets the representation returned by [`latitude`](Self::latitude) and
    /// [`longitude`](Self::longitude).
    pub fn set_output_format(&mut self, format: AngleFormat) {
        self.output_format = format;
    }

    /// Like [`set_output_format`](Self::set_output_format) but takes a format token.
    /// The point is left untouched if the token is not recognized.
    pub fn set_output_format_str(&mut self, format: &str) -> Result<()> {
        self.output_format = format.parse()?;
        Ok(())
    }

    pub fn with_output_format(mut self, format: AngleFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Latitude in the current output format.
    pub fn latitude(&self) -> f64 {
        match self.output_format {
            AngleFormat::Radians => self.rad_lat,
            AngleFormat::Degrees => self.deg_lat,
        }
    }

    /// Longitude in the current output format.
    pub fn longitude(&self) -> f64 {
        match self.output_format {
            AngleFormat::Radians => self.rad_lon,
            AngleFormat::Degrees => self.deg_lon,
        }
    }

    pub fn latitude_degrees(&self) -> f64 {
        self.deg_lat
    }

    pub fn longitude_degrees(&self) -> f64 {
        self.deg_lon
    }

    pub fn latitude_radians(&self) -> f64 {
        self.rad_lat
    }

    pub fn longitude_radians(&self) -> f64 {
        self.rad_lon
    }

    pub fn radians_to_degrees(value: f64) -> f64 {
        units::radians_to_degrees(value)
    }

    pub fn degrees_to_radians(value: f64) -> f64 {
        units::degrees_to_radians(value)
    }

    pub fn miles_to_kilometers(value: f64) -> f64 {
        units::miles_to_kilometers(value)
    }

    pub fn kilometers_to_miles(value: f64) -> f64 {
        units::kilometers_to_miles(value)
    }

    /// Great-circle distance to `other` using the spherical law of cosines.
    ///
    /// The cosine sum is not clamped, so rounding on (nearly) coincident or
    /// antipodal points can yield NaN.
    pub fn distance_to(&self, other: &GeoPoint, unit: DistanceUnit) -> f64 {
        let (lat1, lon1) = (self.rad_lat, self.rad_lon);
        let (lat2, lon2) = (other.rad_lat, other.rad_lon);

        let central_angle =
            (lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * (lon1 - lon2).cos()).acos();

        central_angle * unit.earth_radius()
    }

    /// Computes the southwest and northeast corners of the latitude/longitude
    /// rectangle containing every point within `distance` of this one.
    ///
    /// `radius` is the sphere radius in `unit`; the Earth's radius is used
    /// when it is `None`, NaN or negative. If the rectangle would reach a pole
    /// the latitudes are clamped and the longitudes span the full circle.
    ///
    /// A negative finite `distance` swaps the corners. A distance of `-inf`
    /// is not caught up front and fails through corner validation with
    /// "Longitude must be numeric".
    ///
    /// # Errors
    /// Returns `GeoError::InvalidArgument` if `distance` is NaN.
    pub fn bounding_coordinates(
        &self,
        distance: f64,
        radius: Option<f64>,
        unit: DistanceUnit,
    ) -> Result<(GeoPoint, GeoPoint)> {
        if distance.is_nan() {
            return Err(ArgumentViolation::DistanceNotNumeric.into());
        }

        let radius = match radius {
            Some(r) if !r.is_nan() && r >= 0.0 => r,
            Some(r) => {
                log::debug!(
                    "Ignoring sphere radius {} for bounding box; using Earth radius in {}",
                    r,
                    unit
                );
                unit.earth_radius()
            }
            None => unit.earth_radius(),
        };

        let (lat, lon) = (self.rad_lat, self.rad_lon);
        let angular_distance = distance / radius;
        let mut min_lat = lat - angular_distance;
        let mut max_lat = lat + angular_distance;
        let (min_lon, max_lon) = if min_lat > MIN_LATITUDE_RAD && max_lat < MAX_LATITUDE_RAD {
            log::trace!(
                "Bounding box around {}: angular distance {} rad",
                self,
                angular_distance
            );
            let delta_lon = (angular_distance.sin() / lat.cos()).asin();

            let mut min_lon = lon - delta_lon;
            if min_lon < MIN_LONGITUDE_RAD {
                min_lon += FULL_CIRCLE_RAD;
            }
            let mut max_lon = lon + delta_lon;
            if max_lon > MAX_LONGITUDE_RAD {
                max_lon -= FULL_CIRCLE_RAD;
            }
            (min_lon, max_lon)
        } else {
            log::trace!(
                "Bounding box around {} crosses a pole (angular distance {} rad)",
                self,
                angular_distance
            );
            min_lat = min_lat.max(MIN_LATITUDE_RAD);
            max_lat = max_lat.min(MAX_LATITUDE_RAD);
            (MIN_LONGITUDE_RAD, MAX_LONGITUDE_RAD)
        };

        Ok((
            GeoPoint::new(min_lat, min_lon, AngleFormat::Radians)?,
            GeoPoint::new(max_lat, max_lon, AngleFormat::Radians)?,
        ))
    }

    /// Bounding box on the Earth with `distance` in kilometers.
    pub fn bounding_coordinates_km(&self, distance: f64) -> Result<(GeoPoint, GeoPoint)> {
        self.bounding_coordinates(distance, None, DistanceUnit::Kilometers)
    }
}

fn parse_finite(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn validate(lat: f64, lon: f64, rad_lat: f64, rad_lon: f64) -> Result<()> {
    if lat.is_nan() {
        return Err(ArgumentViolation::LatitudeNotNumeric.into());
    }
    if lon.is_nan() {
        return Err(ArgumentViolation::LongitudeNotNumeric.into());
    }
    if !(MIN_LATITUDE_RAD..=MAX_LATITUDE_RAD).contains(&rad_lat) {
        return Err(ArgumentViolation::LatitudeOutOfBounds.into());
    }
    if !(MIN_LONGITUDE_RAD..=MAX_LONGITUDE_RAD).contains(&rad_lon) {
        return Err(ArgumentViolation::LongitudeOutOfBounds.into());
    }
    Ok(())
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.deg_lat == other.deg_lat
            && self.deg_lon == other.deg_lon
            && self.rad_lat == other.rad_lat
            && self.rad_lon == other.rad_lon
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.output_format {
            AngleFormat::Degrees => write!(f, "({}°, {}°)", self.deg_lat, self.deg_lon),
            AngleFormat::Radians => write!(f, "({} rad, {} rad)", self.rad_lat, self.rad_lon),
        }
    }
}

impl From<GeoPoint> for GeoPointRecord {
    fn from(point: GeoPoint) -> Self {
        GeoPointRecord {
            latitude: point.deg_lat,
            longitude: point.deg_lon,
        }
    }
}

impl TryFrom<GeoPointRecord> for GeoPoint {
    type Error = GeoError;

    fn try_from(record: GeoPointRecord) -> Result<Self> {
        GeoPoint::new(record.latitude, record.longitude, AngleFormat::Degrees)
    }
}

/// Builds a point from a `(latitude, longitude)` pair in degrees.
impl TryFrom<(f64, f64)> for GeoPoint {
    type Error = GeoError;

    fn try_from((lat, lon): (f64, f64)) -> Result<Self> {
        GeoPoint::new(lat, lon, AngleFormat::Degrees)
    }
}
