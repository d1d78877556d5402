//! # Reinforced Concrete Formulas (ACI 318-14)
//!
//! Section-level equations for one-way slabs designed per metre of width.
//!
//! ## Notation
//!
//! - `h` = Overall slab thickness (mm)
//! - `d` = Effective depth to the tension steel centroid (mm)
//! - `b` = Design strip width, fixed at 1000 mm
//! - `Mu` = Factored moment (N·mm)
//! - `Rn` = Nominal strength coefficient Mu/(φbd²) (MPa)
//! - `m` = fy / (0.85 f'c)
//! - `ρ` = Tension reinforcement ratio As/(bd)
//! - `Ag` = Gross area of the strip, b·h (mm²)
//!
//! ## References
//!
//! - ACI 318-14 Table 7.3.1.1: Minimum thickness of solid nonprestressed one-way slabs
//! - ACI 318-14 Section 7.6.1.1: Minimum flexural reinforcement
//! - ACI 318-14 Section 7.7.2.3: Maximum spacing of flexural reinforcement
//! - ACI 318-14 Table 24.4.3.2: Shrinkage and temperature reinforcement ratio
//! - ACI 318-14 Section 22.5.5.1: One-way shear strength of concrete

/// Strength reduction factor for tension-controlled flexure (Table 21.2.1)
pub const PHI_FLEXURE: f64 = 0.9;

/// Strength reduction factor for shear (Table 21.2.1)
pub const PHI_SHEAR: f64 = 0.75;

/// Design strip width for per-metre slab design (mm)
pub const STRIP_WIDTH_MM: f64 = 1000.0;

/// Reinforcement ratio adopted when the section cannot be solved singly reinforced
pub const RHO_FALLBACK: f64 = 0.02;

/// Lightweight-concrete modification factor for normal-weight concrete
pub const LAMBDA_NORMAL_WEIGHT: f64 = 1.0;

/// Absolute cap on reinforcement spacing (mm)
pub const MAX_BAR_SPACING_MM: f64 = 450.0;

/// Bar spacing is detailed in whole multiples of this increment (mm)
pub const SPACING_INCREMENT_MM: f64 = 25.0;

/// Smallest flexural bar spacing the engine will detail (mm)
pub const MIN_FLEXURAL_SPACING_MM: f64 = 75.0;

/// Thickness is rounded up to multiples of this increment (mm)
pub const THICKNESS_INCREMENT_MM: f64 = 10.0;

/// Steel grade at which the shrinkage/minimum ratio formula changes (MPa)
pub const REFERENCE_FY_MPA: f64 = 420.0;

// =============================================================================
// ROUNDING
// =============================================================================

/// Round `value` up to the next multiple of `step`.
///
/// # Example
/// ```rust
/// use slab_core::equations::concrete::round_up_to;
///
/// assert_eq!(round_up_to(175.0, 10.0), 180.0);
/// assert_eq!(round_up_to(150.0, 10.0), 150.0);
/// ```
#[inline]
pub fn round_up_to(value: f64, step: f64) -> f64 {
    (value / step).ceil() * step
}

/// Round `value` down to the previous multiple of `step`.
#[inline]
pub fn round_down_to(value: f64, step: f64) -> f64 {
    (value / step).floor() * step
}

// =============================================================================
// SECTION GEOMETRY
// =============================================================================

/// Effective depth d = h - cover - db/2
///
/// ```text
///   ┌──────────────────────┐ ─┬─
///   │                      │  │ d
///   │   ●    ●    ●    ●   │ ─┴─  (bar centroid)
///   └──────────────────────┘ cover
/// ```
#[inline]
pub fn effective_depth_mm(thickness_mm: f64, cover_mm: f64, bar_diameter_mm: f64) -> f64 {
    thickness_mm - cover_mm - (bar_diameter_mm / 2.0)
}

/// Gross concrete area of a 1 m strip, Ag = b·h (mm²)
#[inline]
pub fn gross_area_mm2(thickness_mm: f64) -> f64 {
    STRIP_WIDTH_MM * thickness_mm
}

// =============================================================================
// FLEXURE
// =============================================================================

/// Nominal strength coefficient Rn = Mu / (φ b d²)
#[inline]
pub fn strength_coefficient_rn(mu_nmm: f64, d_mm: f64) -> f64 {
    mu_nmm / (PHI_FLEXURE * STRIP_WIDTH_MM * d_mm.powi(2))
}

/// Material ratio m = fy / (0.85 f'c)
#[inline]
pub fn material_ratio_m(fy_mpa: f64, fc_mpa: f64) -> f64 {
    fy_mpa / (0.85 * fc_mpa)
}

/// Required reinforcement ratio from the rectangular stress block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RhoSolution {
    pub rho: f64,
    /// The discriminant went negative and [`RHO_FALLBACK`] was adopted
    pub over_reinforced: bool,
}

/// Solve ρ = (1/m)(1 - √(1 - 2 m Rn / fy)).
///
/// When the term under the root is negative the moment exceeds what the
/// singly reinforced section can develop; ρ is then fixed at
/// [`RHO_FALLBACK`] and the solution is flagged.
pub fn required_rho(rn_mpa: f64, m: f64, fy_mpa: f64) -> RhoSolution {
    let term = 1.0 - (2.0 * m * rn_mpa / fy_mpa);
    if term < 0.0 {
        RhoSolution {
            rho: RHO_FALLBACK,
            over_reinforced: true,
        }
    } else {
        RhoSolution {
            rho: (1.0 / m) * (1.0 - term.sqrt()),
            over_reinforced: false,
        }
    }
}

/// Minimum flexural steel for slabs (mm²)
///
/// - fy < 420 MPa: 0.0020·Ag
/// - fy ≥ 420 MPa: max(0.0018·420/fy·Ag, 0.0014·Ag)
pub fn min_flexural_steel_mm2(fy_mpa: f64, gross_area_mm2: f64) -> f64 {
    if fy_mpa < REFERENCE_FY_MPA {
        0.0020 * gross_area_mm2
    } else {
        ((0.0018 * REFERENCE_FY_MPA / fy_mpa) * gross_area_mm2).max(0.0014 * gross_area_mm2)
    }
}

/// Shrinkage and temperature steel (mm²)
///
/// - fy < 420 MPa: 0.0020·Ag
/// - fy ≥ 420 MPa: 0.0018·420/fy·Ag (no 0.0014 lower bound applied)
pub fn shrinkage_steel_mm2(fy_mpa: f64, gross_area_mm2: f64) -> f64 {
    if fy_mpa < REFERENCE_FY_MPA {
        0.0020 * gross_area_mm2
    } else {
        (0.0018 * REFERENCE_FY_MPA / fy_mpa) * gross_area_mm2
    }
}

/// Centre-to-centre spacing that delivers `steel_mm2` per metre with one bar size
#[inline]
pub fn spacing_for_area_mm(bar_area_mm2: f64, steel_mm2: f64) -> f64 {
    STRIP_WIDTH_MM * bar_area_mm2 / steel_mm2
}

/// Steel area per metre provided by bars at `spacing_mm`
#[inline]
pub fn area_for_spacing_mm2(bar_area_mm2: f64, spacing_mm: f64) -> f64 {
    STRIP_WIDTH_MM * bar_area_mm2 / spacing_mm
}

/// Code maximum spacing of principal flexural steel, min(3h, 450)
#[inline]
pub fn max_flexural_spacing_mm(thickness_mm: f64) -> f64 {
    (3.0 * thickness_mm).min(MAX_BAR_SPACING_MM)
}

/// Code maximum spacing of shrinkage steel, min(5h, 450)
#[inline]
pub fn max_shrinkage_spacing_mm(thickness_mm: f64) -> f64 {
    (5.0 * thickness_mm).min(MAX_BAR_SPACING_MM)
}

// =============================================================================
// SHEAR
// =============================================================================

/// Nominal one-way shear strength of a 1 m strip, Vc = 0.17 λ √f'c b d (kN)
pub fn concrete_shear_capacity_kn(fc_mpa: f64, d_mm: f64) -> f64 {
    0.17 * LAMBDA_NORMAL_WEIGHT * fc_mpa.sqrt() * STRIP_WIDTH_MM * d_mm / 1000.0
}
