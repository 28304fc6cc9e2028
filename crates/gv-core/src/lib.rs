//! `gv-core` — foundational types for the `geovisit` zone-coverage workspace.
//!
//! This crate is a dependency of every other `gv-*` crate.  It has no `gv-*`
//! dependencies and a single required external one (`thiserror`), plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module    | Contents                                              |
//! |-----------|-------------------------------------------------------|
//! | [`geo`]   | `GeoPoint`, `haversine_km`, `EARTH_RADIUS_KM`         |
//! | [`zone`]  | `Zone` (center + radius in metres), containment test  |
//! | [`error`] | `GeoError`, `GeoResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod zone;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GeoError, GeoResult};
pub use geo::{haversine_km, GeoPoint, EARTH_RADIUS_KM};
pub use zone::Zone;
