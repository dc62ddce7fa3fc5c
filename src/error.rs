// src/error.rs
use thiserror::Error;

/// The individual validation check that rejected an argument.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentViolation {
    #[error("Latitude must be numeric")]
    LatitudeNotNumeric,

    #[error("Longitude must be numeric")]
    LongitudeNotNumeric,

    #[error("Latitude out of bounds")]
    LatitudeOutOfBounds,

    #[error("Longitude out of bounds")]
    LongitudeOutOfBounds,

    #[error("Distance must be numeric")]
    DistanceNotNumeric,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    #[error("{0}")]
    InvalidArgument(#[from] ArgumentViolation),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

impl GeoError {
    /// Returns the failed check when this is an `InvalidArgument` error.
    pub fn violation(&self) -> Option<ArgumentViolation> {
        match self {
            GeoError::InvalidArgument(violation) => Some(*violation),
            GeoError::InvalidFormat(_) => None,
        }
    }

    pub(crate) fn unknown_token(kind: &str, token: &str, expected: &[&str]) -> Self {
        GeoError::InvalidFormat(format!(
            "unrecognized {} '{}'. Expected one of: {}",
            kind,
            token,
            expected.join(", ")
        ))
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;
