//! # Materials
//!
//! Concrete and reinforcing steel inputs for slab design.
//!
//! - [`MaterialProperties`] - f'c, fy, concrete unit weight and clear cover
//! - [`rebar`] - standard bar size catalog
//!
//! ## JSON Example
//!
//! ```json
//! { "fc_mpa": 28.0, "fy_mpa": 420.0, "density_kn_m3": 25.0, "cover_mm": 20.0 }
//! ```
//!
//! `density_kn_m3` and `cover_mm` may be omitted and default to 25 kN/m³ and
//! 20 mm.

pub mod rebar;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

pub use rebar::{bar_catalog, BarSize, ReinforcingBar};

/// Normal-weight reinforced concrete unit weight (kN/m³)
pub const DEFAULT_CONCRETE_DENSITY_KN_M3: f64 = 25.0;

/// Default clear cover for slabs not exposed to weather (mm)
pub const DEFAULT_COVER_MM: f64 = 20.0;

fn default_density() -> f64 {
    DEFAULT_CONCRETE_DENSITY_KN_M3
}

fn default_cover() -> f64 {
    DEFAULT_COVER_MM
}

/// Concrete and steel properties for one design run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Specified concrete compressive strength f'c (MPa)
    pub fc_mpa: f64,

    /// Specified steel yield strength fy (MPa)
    pub fy_mpa: f64,

    /// Concrete unit weight (kN/m³) used for self-weight
    #[serde(default = "default_density")]
    pub density_kn_m3: f64,

    /// Clear cover to the main bars (mm)
    #[serde(default = "default_cover")]
    pub cover_mm: f64,
}

impl MaterialProperties {
    /// Material with the default density and cover
    pub fn new(fc_mpa: f64, fy_mpa: f64) -> Self {
        MaterialProperties {
            fc_mpa,
            fy_mpa,
            density_kn_m3: DEFAULT_CONCRETE_DENSITY_KN_M3,
            cover_mm: DEFAULT_COVER_MM,
        }
    }

    /// Override clear cover (builder pattern)
    pub fn with_cover(mut self, cover_mm: f64) -> Self {
        self.cover_mm = cover_mm;
        self
    }

    /// Validate material values.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.fc_mpa.is_finite() && self.fc_mpa > 0.0) {
            return Err(CalcError::invalid_input(
                "fc_mpa",
                self.fc_mpa.to_string(),
                "Concrete strength must be positive",
            ));
        }
        if !(self.fy_mpa.is_finite() && self.fy_mpa > 0.0) {
            return Err(CalcError::invalid_input(
                "fy_mpa",
                self.fy_mpa.to_string(),
                "Steel yield strength must be positive",
            ));
        }
        if !(self.density_kn_m3.is_finite() && self.density_kn_m3 >= 0.0) {
            return Err(CalcError::invalid_input(
                "density_kn_m3",
                self.density_kn_m3.to_string(),
                "Concrete density cannot be negative",
            ));
        }
        if !(self.cover_mm.is_finite() && self.cover_mm >= 0.0) {
            return Err(CalcError::invalid_input(
                "cover_mm",
                self.cover_mm.to_string(),
                "Cover cannot be negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let mat = MaterialProperties::new(28.0, 420.0);
        assert_eq!(mat.density_kn_m3, 25.0);
        assert_eq!(mat.cover_mm, 20.0);
        assert!(mat.validate().is_ok());
    }

    #[test]
    fn test_serde_defaults() {
        let mat: MaterialProperties =
            serde_json::from_str(r#"{ "fc_mpa": 30.0, "fy_mpa": 500.0 }"#).unwrap();
        assert_eq!(mat.density_kn_m3, DEFAULT_CONCRETE_DENSITY_KN_M3);
        assert_eq!(mat.cover_mm, DEFAULT_COVER_MM);
    }

    #[test]
    fn test_rejects_non_positive_strengths() {
        assert!(MaterialProperties::new(0.0, 420.0).validate().is_err());
        assert!(MaterialProperties::new(28.0, -1.0).validate().is_err());
        assert!(MaterialProperties::new(f64::NAN, 420.0).validate().is_err());
    }

    #[test]
    fn test_rejects_negative_cover() {
        let mat = MaterialProperties::new(28.0, 420.0).with_cover(-5.0);
        let err = mat.validate().unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "cover_mm"));
    }
}
