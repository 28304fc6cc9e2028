//! Core error type.
//!
//! Only opt-in validation produces these; distance and containment checks are
//! infallible.

use thiserror::Error;

/// Errors produced by `gv-core` validation helpers.
#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    #[error("invalid zone radius {0} m: expected a finite value >= 0")]
    InvalidRadius(f64),

    #[error("non-finite coordinate ({lat}, {lon})")]
    NonFiniteCoordinate { lat: f64, lon: f64 },
}

/// Shorthand result type for `gv-core`.
pub type GeoResult<T> = Result<T, GeoError>;
