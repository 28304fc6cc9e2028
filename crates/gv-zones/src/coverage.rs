//! Zone coverage evaluation.
//!
//! Every function here is a pure scan over borrowed slices: one haversine
//! computation per (zone, position) pair, no spatial index, no retained state.
//! Worst case is `O(zones × positions)`; scans stop at the first decisive
//! pair.
//!
//! # Empty inputs
//!
//! | Call                   | no zones | no positions (≥1 zone) |
//! |------------------------|----------|------------------------|
//! | [`zone_touched`]       | —        | `false`                |
//! | [`any_zone_touched`]   | `false`  | `false`                |
//! | [`all_zones_touched`]  | `true`   | `false`                |

use gv_core::{GeoPoint, Zone};

use crate::ZoneResult;

/// `true` iff at least one position lies inside `zone` (boundary inclusive).
///
/// Positions are tested in stream order and the scan stops at the first hit.
#[inline]
pub fn zone_touched(zone: &Zone, positions: &[GeoPoint]) -> bool {
    first_touching_position(zone, positions).is_some()
}

/// Index of the first position (stream order) inside `zone`.
pub fn first_touching_position(zone: &Zone, positions: &[GeoPoint]) -> Option<usize> {
    positions.iter().position(|&p| zone.contains(p))
}

/// `true` iff some zone in `zones` is touched by some position.
///
/// An empty zone set is never touched.
pub fn any_zone_touched(zones: &[Zone], positions: &[GeoPoint]) -> bool {
    let hit = first_touched_zone(zones, positions);
    log::trace!(
        "any_zone_touched: {} zones, {} positions -> {:?}",
        zones.len(),
        positions.len(),
        hit
    );
    hit.is_some()
}

/// `true` iff every zone in `zones` is touched by some position.
///
/// An empty zone set is vacuously touched: the result is `true`.
pub fn all_zones_touched(zones: &[Zone], positions: &[GeoPoint]) -> bool {
    match zones.iter().position(|z| !zone_touched(z, positions)) {
        Some(i) => {
            log::debug!("zone {i} {} not touched by {} positions", zones[i], positions.len());
            false
        }
        None => {
            log::trace!("all {} zones touched", zones.len());
            true
        }
    }
}

/// Index of the first zone (set order) touched by some position.
pub fn first_touched_zone(zones: &[Zone], positions: &[GeoPoint]) -> Option<usize> {
    let hit = zones.iter().position(|z| zone_touched(z, positions));
    if let Some(i) = hit {
        log::debug!("zone {i} {} touched", zones[i]);
    }
    hit
}

/// Per-zone touched flags, in zone order.
///
/// Unlike the aggregate calls this never short-circuits across zones, so it
/// costs a full scan for every untouched zone.
pub fn touched_zones(zones: &[Zone], positions: &[GeoPoint]) -> Vec<bool> {
    zones.iter().map(|z| zone_touched(z, positions)).collect()
}

/// Run [`Zone::validate`] over a zone set, stopping at the first bad zone.
///
/// The evaluators above never call this; it is for callers that want the
/// radius contract enforced before evaluation.
pub fn validate_zones(zones: &[Zone]) -> ZoneResult<()> {
    for zone in zones {
        zone.validate()?;
    }
    Ok(())
}
