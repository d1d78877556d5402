//! Advisory design notes
//!
//! Conditions the engineer must see but that do not stop the design. They are
//! carried on the result and always rendered, separately from errors.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::moments::MomentLocation;

/// A non-fatal observation recorded during design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DesignNote {
    /// The caller's thickness is thinner than the Table 7.3.1.1 minimum;
    /// the caller's value was used anyway.
    ThicknessBelowMinimum {
        user_thickness_mm: f64,
        minimum_thickness_mm: f64,
    },

    /// The flexural discriminant went negative at this location and the
    /// reinforcement ratio was capped at 0.02.
    OverReinforced { location: MomentLocation },

    /// Factored shear exceeds φVc.
    ShearCapacityExceeded { vu_kn: f64, phi_vc_kn: f64 },
}

impl DesignNote {
    pub fn message(&self) -> String {
        match self {
            DesignNote::ThicknessBelowMinimum {
                user_thickness_mm,
                minimum_thickness_mm,
            } => format!(
                "Warning: User-specified thickness ({}mm) is less than calculated minimum ({}mm)",
                user_thickness_mm, minimum_thickness_mm
            ),
            DesignNote::OverReinforced { location } => format!(
                "Warning: {} exceeds singly reinforced capacity; reinforcement ratio capped at 0.02 - review section depth",
                location.label()
            ),
            DesignNote::ShearCapacityExceeded { vu_kn, phi_vc_kn } => format!(
                "Warning: Vu = {:.2} kN exceeds φVc = {:.2} kN - increase slab thickness",
                vu_kn, phi_vc_kn
            ),
        }
    }
}

impl fmt::Display for DesignNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
