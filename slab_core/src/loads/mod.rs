//! Slab loads and the ACI strength combination
//!
//! Loads are entered as area loads (kN/m²) and carried on a 1 m wide design
//! strip, so an area load of `q` kN/m² becomes a line load of `q` kN/m.
//!
//! # Overview
//!
//! - [`LoadSet`] - superimposed dead and live service loads
//! - [`LoadCombination`] - factors for a strength-design combination
//! - [`combine`] - self-weight, total dead and factored load for a thickness
//!
//! # Example
//!
//! ```
//! use slab_core::loads::{combine, LoadSet, ACI_DEAD_LIVE};
//!
//! let loads = LoadSet::new(1.5, 3.0);
//! let result = combine(&loads, 180.0, 25.0);
//!
//! assert!((result.self_weight_kn_m2 - 4.5).abs() < 1e-9);
//! assert!((result.factored_load_kn_m - 12.0).abs() < 1e-9);
//! assert_eq!(result.combination, ACI_DEAD_LIVE.name);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Service loads applied to the slab, excluding self-weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadSet {
    /// Superimposed dead load: finishes, partitions, services (kN/m²)
    pub superimposed_dead_kn_m2: f64,

    /// Occupancy live load (kN/m²)
    pub live_kn_m2: f64,
}

impl LoadSet {
    pub fn new(superimposed_dead_kn_m2: f64, live_kn_m2: f64) -> Self {
        LoadSet {
            superimposed_dead_kn_m2,
            live_kn_m2,
        }
    }

    /// Validate that both loads are finite and non-negative.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("superimposed_dead_kn_m2", self.superimposed_dead_kn_m2),
            ("live_kn_m2", self.live_kn_m2),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Load must be zero or positive",
                ));
            }
        }
        Ok(())
    }
}

/// A strength-design load combination on dead and live load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadCombination {
    /// Human-readable equation (e.g. "1.2D + 1.6L")
    pub name: &'static str,
    pub dead_factor: f64,
    pub live_factor: f64,
}

impl LoadCombination {
    /// Apply this combination to unfactored dead and live load
    pub fn apply(&self, dead: f64, live: f64) -> f64 {
        self.dead_factor * dead + self.live_factor * live
    }
}

/// ACI 318-14 Eq. 5.3.1b, the gravity combination used for slab design.
pub const ACI_DEAD_LIVE: LoadCombination = LoadCombination {
    name: "1.2D + 1.6L",
    dead_factor: 1.2,
    live_factor: 1.6,
};

/// Loads on the 1 m design strip after adding self-weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadResult {
    /// Slab self-weight (kN/m²)
    pub self_weight_kn_m2: f64,

    /// Superimposed dead + self-weight (kN/m²)
    pub total_dead_kn_m2: f64,

    /// Live load carried through unchanged (kN/m²)
    pub live_kn_m2: f64,

    /// Factored uniform load wu on the 1 m strip (kN/m)
    pub factored_load_kn_m: f64,

    /// Combination that produced `factored_load_kn_m`
    pub combination: String,
}

/// Self-weight of a slab of the given thickness (kN/m²)
pub fn self_weight_kn_m2(thickness_mm: f64, density_kn_m3: f64) -> f64 {
    (thickness_mm / 1000.0) * density_kn_m3
}

/// Compute self-weight, total dead load and the factored design load.
pub fn combine(loads: &LoadSet, thickness_mm: f64, density_kn_m3: f64) -> LoadResult {
    let self_weight = self_weight_kn_m2(thickness_mm, density_kn_m3);
    let total_dead = loads.superimposed_dead_kn_m2 + self_weight;
    let wu = ACI_DEAD_LIVE.apply(total_dead, loads.live_kn_m2);

    LoadResult {
        self_weight_kn_m2: self_weight,
        total_dead_kn_m2: total_dead,
        live_kn_m2: loads.live_kn_m2,
        factored_load_kn_m: wu,
        combination: ACI_DEAD_LIVE.name.to_string(),
    }
}
