//! Flat `f64` buffer layout used at process and language boundaries.
//!
//! # Layout
//!
//! ```text
//! zones:     [lat₀, lon₀, radius_m₀, lat₁, lon₁, radius_m₁, …]   stride 3
//! positions: [lat₀, lon₀, lat₁, lon₁, …]                         stride 2
//! ```
//!
//! Record counts are implied by slice length.  A trailing partial record is a
//! [`ZoneError::FlatLayout`] error rather than silently ignored.

use gv_core::{GeoPoint, Zone};

use crate::coverage::{all_zones_touched, any_zone_touched};
use crate::{ZoneError, ZoneResult};

pub const ZONE_STRIDE: usize = 3;
pub const POSITION_STRIDE: usize = 2;

fn check_stride(what: &'static str, len: usize, stride: usize) -> ZoneResult<()> {
    if len % stride != 0 {
        return Err(ZoneError::FlatLayout { what, len, stride });
    }
    Ok(())
}

/// Decode `[lat, lon, radius_m]` triples.
pub fn zones_from_flat(flat: &[f64]) -> ZoneResult<Vec<Zone>> {
    check_stride("zone", flat.len(), ZONE_STRIDE)?;
    Ok(flat
        .chunks_exact(ZONE_STRIDE)
        .map(|r| Zone::new(r[0], r[1], r[2]))
        .collect())
}

/// Decode `[lat, lon]` pairs.
pub fn positions_from_flat(flat: &[f64]) -> ZoneResult<Vec<GeoPoint>> {
    check_stride("position", flat.len(), POSITION_STRIDE)?;
    Ok(flat
        .chunks_exact(POSITION_STRIDE)
        .map(|r| GeoPoint::new(r[0], r[1]))
        .collect())
}

/// Flat-buffer form of [`any_zone_touched`].
pub fn any_point_touched(zones: &[f64], positions: &[f64]) -> ZoneResult<bool> {
    let zones = zones_from_flat(zones)?;
    let positions = positions_from_flat(positions)?;
    Ok(any_zone_touched(&zones, &positions))
}

/// Flat-buffer form of [`all_zones_touched`].
pub fn all_points_touched(zones: &[f64], positions: &[f64]) -> ZoneResult<bool> {
    let zones = zones_from_flat(zones)?;
    let positions = positions_from_flat(positions)?;
    Ok(all_zones_touched(&zones, &positions))
}
