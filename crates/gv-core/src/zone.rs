//! Circular visit zones.
//!
//! A [`Zone`] is a center coordinate plus a radius in metres.  Distances are
//! computed in kilometres, so the radius is converted once per test via
//! [`Zone::radius_km`].
//!
//! The radius is expected to be `>= 0`.  Nothing on the evaluation path
//! enforces that: a negative radius simply makes every comparison false, so
//! the zone can never be touched.  Callers that want the contract checked can
//! run [`Zone::validate`] up front.

use crate::error::{GeoError, GeoResult};
use crate::geo::{haversine_km, GeoPoint};

/// A circular region of interest.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone {
    pub lat: f64,
    pub lon: f64,
    /// Radius in metres.
    pub radius_m: f64,
}

impl Zone {
    #[inline]
    pub fn new(lat: f64, lon: f64, radius_m: f64) -> Self {
        Self { lat, lon, radius_m }
    }

    /// Zone centered on `center`.
    #[inline]
    pub fn around(center: GeoPoint, radius_m: f64) -> Self {
        Self::new(center.lat, center.lon, radius_m)
    }

    #[inline]
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }

    #[inline]
    pub fn radius_km(&self) -> f64 {
        self.radius_m / 1000.0
    }

    /// `true` if `point` lies inside the zone or exactly on its boundary.
    ///
    /// A NaN distance compares false, so non-finite points are never inside.
    #[inline]
    pub fn contains(&self, point: GeoPoint) -> bool {
        haversine_km(self.center(), point) <= self.radius_km()
    }

    /// Check the radius and center against the zone contract.
    pub fn validate(&self) -> GeoResult<()> {
        if !self.center().is_finite() {
            return Err(GeoError::NonFiniteCoordinate { lat: self.lat, lon: self.lon });
        }
        if !self.radius_m.is_finite() || self.radius_m < 0.0 {
            return Err(GeoError::InvalidRadius(self.radius_m));
        }
        Ok(())
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6}) r={}m", self.lat, self.lon, self.radius_m)
    }
}
