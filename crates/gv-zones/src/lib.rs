//! `gv-zones` — "did the recorded path touch these places?"
//!
//! Given a set of circular [`Zone`]s and a stream of recorded [`GeoPoint`]s,
//! decide per zone whether any position falls inside it, then aggregate into
//! an *any zone touched* or *all zones touched* answer.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`coverage`] | `zone_touched`, `any_zone_touched`, `all_zones_touched`, …     |
//! | [`mode`]     | `Coverage` policy enum (`any` / `all`)                         |
//! | [`flat`]     | flat `f64` buffer decoding and entry points                    |
//! | [`error`]    | `ZoneError`, `ZoneResult<T>`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Coverage` and core types. |
//!
//! # Quick-start
//!
//! ```rust
//! use gv_core::{GeoPoint, Zone};
//! use gv_zones::{all_zones_touched, any_zone_touched};
//!
//! let zones = [Zone::new(0.0, 0.0, 1_000.0), Zone::new(10.0, 10.0, 500.0)];
//! let path = [GeoPoint::new(0.001, 0.001), GeoPoint::new(0.5, 0.5)];
//!
//! assert!(any_zone_touched(&zones, &path));
//! assert!(!all_zones_touched(&zones, &path));
//! ```

pub mod coverage;
pub mod error;
pub mod flat;
pub mod mode;


pub use coverage::{
    all_zones_touched, any_zone_touched, first_touched_zone, first_touching_position,
    touched_zones, validate_zones, zone_touched,
};
pub use error::{ZoneError, ZoneResult};
pub use mode::Coverage;

pub use gv_core::{GeoPoint, Zone};
