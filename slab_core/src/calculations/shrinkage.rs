//! # Shrinkage and Temperature Reinforcement
//!
//! Distribution steel perpendicular to the main bars, sized from the gross
//! section alone (ACI 318-14 Table 24.4.3.2). Spacing is capped at
//! min(5h, 450) and detailed down to a 25 mm multiple. Unlike the main steel
//! there is no 75 mm lower bound.

use serde::{Deserialize, Serialize};

use crate::equations::concrete::{
    area_for_spacing_mm2, gross_area_mm2, max_shrinkage_spacing_mm, round_down_to,
    shrinkage_steel_mm2, spacing_for_area_mm, SPACING_INCREMENT_MM,
};
use crate::errors::{CalcError, CalcResult};
use crate::materials::BarSize;

/// Shrinkage and temperature steel per metre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShrinkageReinforcement {
    /// Required area (mm²/m)
    pub as_required_mm2: f64,

    /// Area provided at the detailed spacing (mm²/m)
    pub as_provided_mm2: f64,

    /// Spacing that exactly delivers the required area (mm)
    pub spacing_required_mm: f64,

    /// Code maximum, min(5h, 450) (mm)
    pub spacing_code_max_mm: f64,

    /// min(required, code max) before detailing (mm)
    pub spacing_max_mm: f64,

    /// Detailed spacing (mm)
    pub spacing_final_mm: f64,

    pub bar: BarSize,
}

impl ShrinkageReinforcement {
    /// Bar callout, e.g. "#10 @ 200 mm c/c"
    pub fn callout(&self) -> String {
        format!("{} @ {} mm c/c", self.bar, self.spacing_final_mm)
    }

    /// Provided over required area, as a percentage
    pub fn efficiency_pct(&self) -> f64 {
        self.as_provided_mm2 / self.as_required_mm2 * 100.0
    }
}

/// Size shrinkage and temperature steel for a slab thickness.
///
/// Fails only when the chosen bar is so small that the required spacing rounds
/// down to zero.
pub fn size_shrinkage_steel(
    thickness_mm: f64,
    fy_mpa: f64,
    bar: BarSize,
) -> CalcResult<ShrinkageReinforcement> {
    let as_required = shrinkage_steel_mm2(fy_mpa, gross_area_mm2(thickness_mm));

    let bar_area = bar.area_mm2();
    let spacing_required = spacing_for_area_mm(bar_area, as_required);
    let spacing_code_max = max_shrinkage_spacing_mm(thickness_mm);
    let spacing_max = spacing_required.min(spacing_code_max);
    let spacing_final = round_down_to(spacing_max, SPACING_INCREMENT_MM);

    if spacing_final <= 0.0 {
        return Err(CalcError::calculation_failed(
            "Shrinkage reinforcement",
            format!(
                "{} bars would need {:.1} mm spacing for {:.0} mm²/m; choose a larger bar",
                bar, spacing_required, as_required
            ),
        ));
    }

    Ok(ShrinkageReinforcement {
        as_required_mm2: as_required,
        as_provided_mm2: area_for_spacing_mm2(bar_area, spacing_final),
        spacing_required_mm: spacing_required,
        spacing_code_max_mm: spacing_code_max,
        spacing_max_mm: spacing_max,
        spacing_final_mm: spacing_final,
        bar,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_420_reference() {
        // h = 180: As = 0.0018 * 180000 = 324; s = 129000/324 = 398 -> 375
        let s = size_shrinkage_steel(180.0, 420.0, BarSize::No13).unwrap();
        assert!((s.as_required_mm2 - 324.0).abs() < 1e-6);
        assert_eq!(s.spacing_code_max_mm, 450.0);
        assert_eq!(s.spacing_final_mm, 375.0);
        assert!((s.as_provided_mm2 - 344.0).abs() < 1e-9);
        assert!(s.efficiency_pct() > 100.0);
    }

    #[test]
    fn test_low_grade_uses_0020() {
        let s = size_shrinkage_steel(150.0, 280.0, BarSize::No10).unwrap();
        assert!((s.as_required_mm2 - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_thin_slab_capped_at_5h() {
        // h = 60: 5h = 300; 1000*199/108 = 1843 -> capped at 300
        let s = size_shrinkage_steel(60.0, 420.0, BarSize::No16).unwrap();
        assert_eq!(s.spacing_code_max_mm, 300.0);
        assert_eq!(s.spacing_final_mm, 300.0);
    }

    #[test]
    fn test_no_75mm_floor() {
        // h = 700: As = 1260; #10: 1000*71/1260 = 56.3 -> 50 (below 75 is allowed)
        let s = size_shrinkage_steel(700.0, 420.0, BarSize::No10).unwrap();
        assert_eq!(s.spacing_final_mm, 50.0);
    }

    #[test]
    fn test_spacing_properties() {
        for h in (50..=600).step_by(10) {
            let h = h as f64;
            for bar in BarSize::ALL {
                let s = size_shrinkage_steel(h, 420.0, bar).unwrap();
                assert_eq!(s.spacing_final_mm % 25.0, 0.0);
                assert!(s.spacing_final_mm <= s.spacing_required_mm.min(5.0 * h).min(450.0));
            }
        }
    }

    #[test]
    fn test_zero_spacing_is_an_error() {
        // h = 2000: As = 3600; #10 needs 19.7 mm -> rounds to 0
        let err = size_shrinkage_steel(2000.0, 420.0, BarSize::No10).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }
}
