//! C ABI for zone coverage over flat `f64` buffers.
//!
//! ```c
//! bool any_point_touched(const double *zones, const double *positions,
//!                        unsigned zone_count, unsigned position_count);
//! bool all_points_touched(const double *zones, const double *positions,
//!                         unsigned zone_count, unsigned position_count);
//! ```
//!
//! `zones` holds `zone_count` `[lat, lon, radius_m]` triples and `positions`
//! holds `position_count` `[lat, lon]` pairs (see [`gv_zones::flat`]).  Both
//! buffers are borrowed for the duration of the call only.
//!
//! A null pointer is read as an empty collection regardless of its count.

use gv_zones::ZoneResult;
use gv_zones::flat::{self, POSITION_STRIDE, ZONE_STRIDE};

/// Borrow `count` records of `stride` doubles starting at `ptr`.
///
/// # Safety
/// If `ptr` is non-null it must point to `count * stride` initialised,
/// properly aligned `f64`s that stay valid and unmodified for `'a`.
unsafe fn records<'a>(what: &str, ptr: *const f64, count: u32, stride: usize) -> &'a [f64] {
    if ptr.is_null() {
        if count != 0 {
            log::warn!("null {what} buffer with count {count}; treating as empty");
        }
        return &[];
    }
    // SAFETY: upheld by the caller per the function contract.
    unsafe { std::slice::from_raw_parts(ptr, count as usize * stride) }
}

/// Collapse a flat-layout result into the C `bool`.
///
/// Slices built by [`records`] are always whole records, so the error arm is
/// unreachable in practice; it still maps to "not touched" rather than a panic
/// across the ABI.
fn to_c(result: ZoneResult<bool>) -> bool {
    result.unwrap_or_else(|e| {
        log::error!("{e}");
        false
    })
}

/// `true` if any zone has been reached by at least one position.
///
/// # Safety
/// `zones` must be null or point to `zone_count * 3` doubles; `positions` must
/// be null or point to `position_count * 2` doubles.  Both must stay valid for
/// the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn any_point_touched(
    zones: *const f64,
    positions: *const f64,
    zone_count: u32,
    position_count: u32,
) -> bool {
    // SAFETY: forwarded to the caller.
    let (zones, positions) = unsafe {
        (
            records("zone", zones, zone_count, ZONE_STRIDE),
            records("position", positions, position_count, POSITION_STRIDE),
        )
    };
    to_c(flat::any_point_touched(zones, positions))
}

/// `true` if every zone has been reached by at least one position.  Zero
/// zones yields `true`.
///
/// # Safety
/// Same contract as [`any_point_touched`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn all_points_touched(
    zones: *const f64,
    positions: *const f64,
    zone_count: u32,
    position_count: u32,
) -> bool {
    // SAFETY: forwarded to the caller.
    let (zones, positions) = unsafe {
        (
            records("zone", zones, zone_count, ZONE_STRIDE),
            records("position", positions, position_count, POSITION_STRIDE),
        )
    };
    to_c(flat::all_points_touched(zones, positions))
}
