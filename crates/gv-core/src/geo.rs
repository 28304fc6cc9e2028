//! Geographic coordinate type and great-circle distance.
//!
//! Everything here treats the Earth as a perfect sphere of radius
//! [`EARTH_RADIUS_KM`].  Latitude and longitude are decimal degrees and are
//! never range-checked: out-of-range values go straight through the formula.

/// Sphere radius used for every distance in the workspace, kilometres.
pub const EARTH_RADIUS_KM: f64 = 6378.137;

/// A geographic coordinate (decimal degrees) stored as double-precision floats.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    #[inline]
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        haversine_km(self, other)
    }

    /// Haversine great-circle distance in metres.
    #[inline]
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        haversine_km(self, other) * 1000.0
    }

    /// `true` when neither coordinate is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl From<(f64, f64)> for GeoPoint {
    #[inline]
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Haversine distance between `a` and `b` in kilometres.
///
/// The intermediate `a = sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)` is clamped
/// to `[0, 1]` before `sqrt`/`asin`, so nearly antipodal points come out at
/// `π · R` instead of NaN.  NaN coordinates still yield NaN.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat * 0.5).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

    // f64::clamp passes NaN through unchanged.
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}
