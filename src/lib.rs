pub mod consts;
pub mod error;
pub mod geopoint;
pub mod units;

pub use error::{ArgumentViolation, GeoError, Result};
pub use geopoint::{GeoPoint, GeoPointRecord};
pub use units::{
    degrees_to_radians, kilometers_to_miles, miles_to_kilometers, radians_to_degrees,
    AngleFormat, DistanceUnit,
};
