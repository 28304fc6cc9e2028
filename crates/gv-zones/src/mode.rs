//! Aggregation policy over a zone set.
//!
//! Stored by callers alongside their zone lists (e.g. "this badge needs every
//! checkpoint" vs. "any trailhead will do"), hence the optional serde derives
//! and string round-trip.

use std::str::FromStr;

use gv_core::{GeoPoint, Zone};

use crate::coverage::{all_zones_touched, any_zone_touched};
use crate::ZoneError;

/// How per-zone results combine into one answer.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Coverage {
    /// At least one zone touched.  Empty zone set → `false`.
    #[default]
    Any,
    /// Every zone touched.  Empty zone set → `true`.
    All,
}

impl Coverage {
    /// Evaluate this policy for `zones` against `positions`.
    #[inline]
    pub fn evaluate(self, zones: &[Zone], positions: &[GeoPoint]) -> bool {
        match self {
            Coverage::Any => any_zone_touched(zones, positions),
            Coverage::All => all_zones_touched(zones, positions),
        }
    }

    /// Fold precomputed per-zone flags (see
    /// [`touched_zones`][crate::touched_zones]) with this policy.
    pub fn fold(self, touched: &[bool]) -> bool {
        match self {
            Coverage::Any => touched.iter().any(|&t| t),
            Coverage::All => touched.iter().all(|&t| t),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Coverage::Any => "any",
            Coverage::All => "all",
        }
    }
}

impl std::fmt::Display for Coverage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Coverage {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" => Ok(Coverage::Any),
            "all" => Ok(Coverage::All),
            _ => Err(ZoneError::UnknownCoverage(s.to_owned())),
        }
    }
}
