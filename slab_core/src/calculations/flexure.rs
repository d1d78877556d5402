//! # Flexural Reinforcement
//!
//! Sizes the main steel for one design moment on a 1 m strip.
//!
//! ## Procedure
//!
//! 1. Rn = Mu/(φbd²), m = fy/(0.85f'c)
//! 2. ρ from the rectangular stress block; ρ = 0.02 when the discriminant
//!    is negative (flagged as over-reinforced)
//! 3. As = max(ρbd, As,min)
//! 4. s = 1000·Ab/As, capped at min(3h, 450), detailed down to a 25 mm
//!    multiple but never below 75 mm
//! 5. As,prov = 1000·Ab/s

use serde::{Deserialize, Serialize};

use super::moments::{DesignMoment, MomentLocation};
use super::notes::DesignNote;
use crate::equations::concrete::{
    area_for_spacing_mm2, gross_area_mm2, material_ratio_m, max_flexural_spacing_mm,
    min_flexural_steel_mm2, required_rho, round_down_to, spacing_for_area_mm,
    strength_coefficient_rn, MIN_FLEXURAL_SPACING_MM, SPACING_INCREMENT_MM, STRIP_WIDTH_MM,
};
use crate::materials::{BarSize, MaterialProperties};
use crate::units::{KnM, NMm};

/// Main reinforcement at one moment location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlexuralReinforcement {
    pub location: MomentLocation,

    /// Factored moment (kN·m/m)
    pub mu_knm: f64,

    /// Nominal strength coefficient Rn (MPa)
    pub rn_mpa: f64,

    /// Reinforcement ratio used
    pub rho: f64,

    /// ρbd (mm²/m)
    pub as_required_mm2: f64,

    /// Code minimum (mm²/m)
    pub as_min_mm2: f64,

    /// Governing area, max(As,req, As,min) (mm²/m)
    pub as_final_mm2: f64,

    /// Area provided at the detailed spacing (mm²/m)
    pub as_provided_mm2: f64,

    /// Spacing that exactly delivers As,final (mm)
    pub spacing_required_mm: f64,

    /// Code maximum, min(3h, 450) (mm)
    pub spacing_code_max_mm: f64,

    /// min(required, code max) before detailing (mm)
    pub spacing_max_mm: f64,

    /// Detailed spacing (mm)
    pub spacing_final_mm: f64,

    pub bar: BarSize,

    /// ρ was capped at 0.02 because the section could not be solved
    pub over_reinforced: bool,
}

impl FlexuralReinforcement {
    /// Bar callout, e.g. "#13 @ 250 mm c/c"
    pub fn callout(&self) -> String {
        format!("{} @ {} mm c/c", self.bar, self.spacing_final_mm)
    }

    /// Advisory note when ρ was capped
    pub fn note(&self) -> Option<DesignNote> {
        self.over_reinforced.then_some(DesignNote::OverReinforced {
            location: self.location,
        })
    }
}

/// Size main reinforcement for one moment.
///
/// Returns `None` when `Mu ≤ 0`; no steel entry is produced for that location.
/// `effective_depth_mm` must already be validated positive.
pub fn size_flexural_steel(
    moment: &DesignMoment,
    effective_depth_mm: f64,
    thickness_mm: f64,
    material: &MaterialProperties,
    bar: BarSize,
) -> Option<FlexuralReinforcement> {
    if moment.mu_knm <= 0.0 {
        return None;
    }

    let mu: NMm = KnM(moment.mu_knm).into();
    let d = effective_depth_mm;
    let rn = strength_coefficient_rn(mu.value(), d);
    let m = material_ratio_m(material.fy_mpa, material.fc_mpa);
    let solution = required_rho(rn, m, material.fy_mpa);

    let as_required = solution.rho * STRIP_WIDTH_MM * d;
    let as_min = min_flexural_steel_mm2(material.fy_mpa, gross_area_mm2(thickness_mm));
    let as_final = as_required.max(as_min);

    let bar_area = bar.area_mm2();
    let spacing_required = spacing_for_area_mm(bar_area, as_final);
    let spacing_code_max = max_flexural_spacing_mm(thickness_mm);
    let spacing_max = spacing_required.min(spacing_code_max);
    let spacing_final =
        round_down_to(spacing_max, SPACING_INCREMENT_MM).max(MIN_FLEXURAL_SPACING_MM);
    let as_provided = area_for_spacing_mm2(bar_area, spacing_final);

    Some(FlexuralReinforcement {
        location: moment.location,
        mu_knm: moment.mu_knm,
        rn_mpa: rn,
        rho: solution.rho,
        as_required_mm2: as_required,
        as_min_mm2: as_min,
        as_final_mm2: as_final,
        as_provided_mm2: as_provided,
        spacing_required_mm: spacing_required,
        spacing_code_max_mm: spacing_code_max,
        spacing_max_mm: spacing_max,
        spacing_final_mm: spacing_final,
        bar,
        over_reinforced: solution.over_reinforced,
    })
}
