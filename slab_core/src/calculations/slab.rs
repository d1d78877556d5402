//! # One-Way Slab Design
//!
//! Runs the full ACI 318-14 one-way slab procedure for a 1 m design strip:
//!
//! ```text
//! validate -> thickness -> loads -> moments -> effective depth
//!          -> flexural steel (per moment) + shrinkage steel -> shear -> result
//! ```
//!
//! Every stage is a pure function of the earlier stage records, so the whole
//! design is a deterministic function of [`DesignInput`]. A run either returns
//! a complete [`DesignResult`] or an error; there is no partial result.
//!
//! ## Assumptions
//!
//! - Uniform gravity load on a prismatic slab of constant thickness
//! - Normal-weight concrete (λ = 1.0)
//! - Tension-controlled flexure (φ = 0.9), singly reinforced
//! - Approximate moment and shear coefficients of ACI 318-14 Section 6.5
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use slab_core::calculations::slab::{design, DesignInput};
//! use slab_core::calculations::SupportCondition;
//! use slab_core::loads::LoadSet;
//! use slab_core::materials::MaterialProperties;
//!
//! let result = design(
//!     3500.0,
//!     MaterialProperties::new(28.0, 420.0),
//!     LoadSet::new(1.5, 3.0),
//!     SupportCondition::SimplySupported,
//!     "#13",
//!     "#13",
//!     None,
//! )
//! .unwrap();
//!
//! assert_eq!(result.thickness_mm(), 180.0);
//! assert!((result.factored_load_kn_m() - 12.0).abs() < 1e-9);
//! assert!(result.shear.passes());
//! ```

use serde::{Deserialize, Serialize};

use super::flexure::{size_flexural_steel, FlexuralReinforcement};
use super::moments::{solve_moments, DesignMoment, MomentLocation};
use super::notes::DesignNote;
use super::shear::{check_shear, ShearCheck};
use super::shrinkage::{size_shrinkage_steel, ShrinkageReinforcement};
use super::support::SupportCondition;
use super::thickness::{select_thickness, ThicknessResult};
use crate::equations::concrete::effective_depth_mm;
use crate::errors::{CalcError, CalcResult};
use crate::loads::{combine, LoadResult, LoadSet};
use crate::materials::{BarSize, MaterialProperties};

/// Input parameters for a one-way slab design.
///
/// ## JSON Example
///
/// ```json
/// {
///   "clear_span_mm": 3500.0,
///   "material": { "fc_mpa": 28.0, "fy_mpa": 420.0 },
///   "loads": { "superimposed_dead_kn_m2": 1.5, "live_kn_m2": 3.0 },
///   "support": "simply_supported",
///   "main_bar": "#13",
///   "shrinkage_bar": "#10",
///   "user_thickness_mm": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignInput {
    /// Clear span between support faces (mm)
    pub clear_span_mm: f64,

    pub material: MaterialProperties,

    pub loads: LoadSet,

    #[serde(default)]
    pub support: SupportCondition,

    /// Main flexural bar size
    #[serde(default)]
    pub main_bar: BarSize,

    /// Shrinkage and temperature bar size
    #[serde(default)]
    pub shrinkage_bar: BarSize,

    /// Explicit thickness, used in place of the code minimum (mm)
    #[serde(default)]
    pub user_thickness_mm: Option<f64>,
}

impl DesignInput {
    /// Input with #13 bars both ways and no thickness override
    pub fn new(
        clear_span_mm: f64,
        material: MaterialProperties,
        loads: LoadSet,
        support: SupportCondition,
    ) -> Self {
        DesignInput {
            clear_span_mm,
            material,
            loads,
            support,
            main_bar: BarSize::default(),
            shrinkage_bar: BarSize::default(),
            user_thickness_mm: None,
        }
    }

    /// Parse an input from JSON.
    ///
    /// Fields with defaults (support, bars, override, density, cover) may be
    /// omitted. Values are not validated until [`calculate`] runs.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set bar sizes (builder pattern)
    pub fn with_bars(mut self, main_bar: BarSize, shrinkage_bar: BarSize) -> Self {
        self.main_bar = main_bar;
        self.shrinkage_bar = shrinkage_bar;
        self
    }

    /// Set a thickness override (builder pattern)
    pub fn with_thickness(mut self, thickness_mm: f64) -> Self {
        self.user_thickness_mm = Some(thickness_mm);
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.clear_span_mm.is_finite() && self.clear_span_mm > 0.0) {
            return Err(CalcError::invalid_input(
                "clear_span_mm",
                self.clear_span_mm.to_string(),
                "Clear span must be positive",
            ));
        }
        self.material.validate()?;
        self.loads.validate()?;
        if let Some(h) = self.user_thickness_mm {
            if !(h.is_finite() && h > 0.0) {
                return Err(CalcError::invalid_input(
                    "user_thickness_mm",
                    h.to_string(),
                    "Thickness override must be positive",
                ));
            }
        }
        Ok(())
    }
}

/// Results of a one-way slab design.
///
/// A read-only snapshot of every stage record. Serializes to JSON for
/// reports and API consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    pub support: SupportCondition,

    pub thickness: ThicknessResult,

    /// d = h - cover - db/2 (mm)
    pub effective_depth_mm: f64,

    pub loads: LoadResult,

    /// Design moments in report order
    pub moments: Vec<DesignMoment>,

    /// Main steel, one entry per nonzero design moment, in moment order
    pub reinforcement: Vec<FlexuralReinforcement>,

    pub shrinkage: ShrinkageReinforcement,

    pub shear: ShearCheck,

    /// Advisory notes, always to be shown to the user
    pub notes: Vec<DesignNote>,
}

impl DesignResult {
    /// Design thickness (mm)
    pub fn thickness_mm(&self) -> f64 {
        self.thickness.thickness_mm
    }

    /// Factored uniform load on the 1 m strip (kN/m)
    pub fn factored_load_kn_m(&self) -> f64 {
        self.loads.factored_load_kn_m
    }

    /// Moment at a location, if the support condition has one there
    pub fn moment(&self, location: MomentLocation) -> Option<f64> {
        self.moments
            .iter()
            .find(|m| m.location == location)
            .map(|m| m.mu_knm)
    }

    /// Largest moment magnitude (kN·m)
    pub fn max_abs_moment(&self) -> f64 {
        self.moments
            .iter()
            .map(|m| m.mu_knm.abs())
            .fold(0.0, f64::max)
    }

    /// True when shear passes and no steel was capped
    pub fn passes(&self) -> bool {
        self.shear.passes() && self.reinforcement.iter().all(|r| !r.over_reinforced)
    }
}

/// Design a one-way slab.
///
/// This is a pure function: identical inputs always produce identical results.
///
/// # Returns
///
/// * `Ok(DesignResult)` - complete design with advisory notes
/// * `Err(CalcError::InvalidInput)` - rejected input, before any stage ran
/// * `Err(CalcError::GeometricInfeasibility)` - cover and bar leave no effective depth
/// * `Err(CalcError::CalculationFailed)` - shrinkage bar too small to detail
pub fn calculate(input: &DesignInput) -> CalcResult<DesignResult> {
    input.validate()?;

    let mut notes = Vec::new();

    let thickness = select_thickness(input.clear_span_mm, input.support, input.user_thickness_mm);
    let h = thickness.thickness_mm;
    tracing::debug!(
        minimum_mm = thickness.minimum_mm,
        thickness_mm = h,
        "thickness selected ({})",
        input.support.thickness_rule()
    );
    notes.extend(thickness.note());

    let loads = combine(&input.loads, h, input.material.density_kn_m3);
    tracing::debug!(
        self_weight = loads.self_weight_kn_m2,
        wu = loads.factored_load_kn_m,
        "loads combined ({})",
        loads.combination
    );

    let moments = solve_moments(loads.factored_load_kn_m, input.clear_span_mm, input.support);
    for m in &moments {
        tracing::debug!(location = m.location.label(), mu_knm = m.mu_knm, "design moment");
    }

    let d = effective_depth_mm(h, input.material.cover_mm, input.main_bar.diameter_mm());
    if d <= 0.0 {
        return Err(CalcError::geometric_infeasibility(
            h,
            input.material.cover_mm,
            input.main_bar.diameter_mm(),
        ));
    }
    tracing::debug!(effective_depth_mm = d, "effective depth");

    let reinforcement: Vec<FlexuralReinforcement> = moments
        .iter()
        .filter_map(|m| size_flexural_steel(m, d, h, &input.material, input.main_bar))
        .collect();
    notes.extend(reinforcement.iter().filter_map(FlexuralReinforcement::note));

    let shrinkage = size_shrinkage_steel(h, input.material.fy_mpa, input.shrinkage_bar)?;
    tracing::debug!(spacing_mm = shrinkage.spacing_final_mm, "shrinkage steel sized");

    let shear = check_shear(
        loads.factored_load_kn_m,
        input.clear_span_mm,
        d,
        input.support,
        input.material.fc_mpa,
    );
    tracing::debug!(
        vu_kn = shear.vu_kn,
        phi_vc_kn = shear.phi_vc_kn,
        utilization_pct = shear.utilization_pct,
        "shear checked"
    );
    notes.extend(shear.note());

    for note in &notes {
        tracing::warn!("{}", note);
    }
    tracing::info!(
        support = input.support.code(),
        thickness_mm = h,
        notes = notes.len(),
        "slab design completed"
    );

    Ok(DesignResult {
        support: input.support,
        thickness,
        effective_depth_mm: d,
        loads,
        moments,
        reinforcement,
        shrinkage,
        shear,
        notes,
    })
}

/// Design a one-way slab from bar designations.
///
/// Bar names are resolved against the standard catalog first; an unknown
/// name is rejected as [`CalcError::InvalidInput`] before any stage runs.
pub fn design(
    clear_span_mm: f64,
    material: MaterialProperties,
    loads: LoadSet,
    support: SupportCondition,
    main_bar: &str,
    shrinkage_bar: &str,
    user_thickness_mm: Option<f64>,
) -> CalcResult<DesignResult> {
    let input = DesignInput {
        clear_span_mm,
        material,
        loads,
        support,
        main_bar: BarSize::from_designation(main_bar)?,
        shrinkage_bar: BarSize::from_designation(shrinkage_bar)?,
        user_thickness_mm,
    };
    calculate(&input)
}
