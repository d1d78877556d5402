//! # One-Way Shear Check
//!
//! Factored shear at the critical section compared with the concrete
//! strength of a 1 m strip, φVc = 0.75·0.17λ√f'c·b·d. No stirrups are
//! designed: a failing check asks for a thicker slab.
//!
//! ## Demand by Support Condition
//!
//! | Support | Vu |
//! |---|---|
//! | Simply supported | wu(ln/2 - d) |
//! | Both ends continuous | wu(ln/2 - d) |
//! | One end continuous | max(wu(ln/2 - d), wu(0.575ln - d)) |
//! | Cantilever | wu·ln at the fixed support |
//!
//! `ln` and `d` are in metres; Vu is never reported negative.

use serde::{Deserialize, Serialize};

use super::notes::DesignNote;
use super::support::SupportCondition;
use crate::equations::concrete::{concrete_shear_capacity_kn, PHI_SHEAR};
use crate::units::{Meters, Millimeters};

/// Pass/fail outcome of the shear check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShearStatus {
    /// Vu ≤ φVc
    Pass,
    /// Vu > φVc
    Fail,
}

impl ShearStatus {
    pub fn message(&self) -> &'static str {
        match self {
            ShearStatus::Pass => "PASS - No shear reinforcement required",
            ShearStatus::Fail => "FAIL - Increase slab thickness",
        }
    }
}

/// Display band for shear utilization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UtilizationBand {
    /// Below 50%
    Low,
    /// 50% to below 80%
    Moderate,
    /// 80% to 100%
    Critical,
    /// Over 100%
    Exceeded,
}

impl UtilizationBand {
    pub fn from_pct(utilization_pct: f64) -> Self {
        if utilization_pct < 50.0 {
            UtilizationBand::Low
        } else if utilization_pct < 80.0 {
            UtilizationBand::Moderate
        } else if utilization_pct <= 100.0 {
            UtilizationBand::Critical
        } else {
            UtilizationBand::Exceeded
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UtilizationBand::Low => "Safe - Low Utilization",
            UtilizationBand::Moderate => "Adequate - Moderate Utilization",
            UtilizationBand::Critical => "Critical - Near Limit",
            UtilizationBand::Exceeded => "Failed - Redesign Needed",
        }
    }
}

/// Shear check results per metre width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShearCheck {
    /// Factored shear demand Vu (kN/m)
    pub vu_kn: f64,

    /// Nominal concrete shear strength Vc (kN/m)
    pub vc_kn: f64,

    /// Design shear strength φVc (kN/m)
    pub phi_vc_kn: f64,

    /// Vu/φVc × 100, or 0 when φVc is zero
    pub utilization_pct: f64,

    pub status: ShearStatus,
}

impl ShearCheck {
    pub fn passes(&self) -> bool {
        self.status == ShearStatus::Pass
    }

    pub fn band(&self) -> UtilizationBand {
        UtilizationBand::from_pct(self.utilization_pct)
    }

    /// Advisory note when the check fails
    pub fn note(&self) -> Option<DesignNote> {
        (!self.passes()).then_some(DesignNote::ShearCapacityExceeded {
            vu_kn: self.vu_kn,
            phi_vc_kn: self.phi_vc_kn,
        })
    }
}

/// Factored shear demand at the critical section (kN per metre width)
pub fn shear_demand_kn(
    factored_load_kn_m: f64,
    clear_span_mm: f64,
    effective_depth_mm: f64,
    support: SupportCondition,
) -> f64 {
    let ln: Meters = Millimeters(clear_span_mm).into();
    let d: Meters = Millimeters(effective_depth_mm).into();
    let wu = factored_load_kn_m;
    let simple_arm = ln / 2.0 - d;

    let vu = match support {
        SupportCondition::SimplySupported | SupportCondition::BothEndsContinuous => {
            wu * simple_arm.value()
        }
        SupportCondition::OneEndContinuous => {
            let continuous_arm = ln * 0.575 - d;
            (wu * simple_arm.value()).max(wu * continuous_arm.value())
        }
        SupportCondition::Cantilever => wu * ln.value(),
    };

    vu.max(0.0)
}

/// Run the one-way shear check.
pub fn check_shear(
    factored_load_kn_m: f64,
    clear_span_mm: f64,
    effective_depth_mm: f64,
    support: SupportCondition,
    fc_mpa: f64,
) -> ShearCheck {
    let vu = shear_demand_kn(factored_load_kn_m, clear_span_mm, effective_depth_mm, support);
    let vc = concrete_shear_capacity_kn(fc_mpa, effective_depth_mm);
    let phi_vc = PHI_SHEAR * vc;

    let utilization_pct = if phi_vc > 0.0 { (vu / phi_vc) * 100.0 } else { 0.0 };
    let status = if vu <= phi_vc {
        ShearStatus::Pass
    } else {
        ShearStatus::Fail
    };

    ShearCheck {
        vu_kn: vu,
        vc_kn: vc,
        phi_vc_kn: phi_vc,
        utilization_pct,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_span_demand() {
        // 12 * (1.75 - 0.15365) = 19.1562
        let vu = shear_demand_kn(12.0, 3500.0, 153.65, SupportCondition::SimplySupported);
        assert!((vu - 12.0 * (1.75 - 0.15365)).abs() < 1e-9);
    }

    #[test]
    fn test_one_end_continuous_takes_larger() {
        let vu = shear_demand_kn(10.0, 4000.0, 120.0, SupportCondition::OneEndContinuous);
        assert!((vu - 10.0 * (0.575 * 4.0 - 0.12)).abs() < 1e-9);
    }

    #[test]
    fn test_cantilever_ignores_depth() {
        let a = shear_demand_kn(8.0, 1500.0, 100.0, SupportCondition::Cantilever);
        let b = shear_demand_kn(8.0, 1500.0, 300.0, SupportCondition::Cantilever);
        assert_eq!(a, b);
        assert!((a - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_demand_clamped_at_zero() {
        // d larger than half the span
        let vu = shear_demand_kn(10.0, 200.0, 150.0, SupportCondition::BothEndsContinuous);
        assert_eq!(vu, 0.0);
    }

    #[test]
    fn test_capacity_and_pass() {
        let check = check_shear(12.0, 3500.0, 153.65, SupportCondition::SimplySupported, 28.0);
        let vc = 0.17 * 28.0_f64.sqrt() * 153.65;
        assert!((check.vc_kn - vc).abs() < 1e-9);
        assert!((check.phi_vc_kn - 0.75 * vc).abs() < 1e-9);
        assert!(check.passes());
        assert!(check.note().is_none());
        assert_eq!(check.band(), UtilizationBand::Low);
    }

    #[test]
    fn test_fail_produces_note() {
        let check = check_shear(200.0, 6000.0, 80.0, SupportCondition::SimplySupported, 20.0);
        assert_eq!(check.status, ShearStatus::Fail);
        assert!(check.utilization_pct > 100.0);
        assert_eq!(check.band(), UtilizationBand::Exceeded);
        assert!(matches!(check.note(), Some(DesignNote::ShearCapacityExceeded { .. })));
    }

    #[test]
    fn test_zero_capacity_has_zero_utilization() {
        let check = check_shear(10.0, 3000.0, 0.0, SupportCondition::Cantilever, 28.0);
        assert_eq!(check.phi_vc_kn, 0.0);
        assert_eq!(check.utilization_pct, 0.0);
        assert!(check.utilization_pct.is_finite());
    }

    #[test]
    fn test_bands() {
        assert_eq!(UtilizationBand::from_pct(49.9), UtilizationBand::Low);
        assert_eq!(UtilizationBand::from_pct(50.0), UtilizationBand::Moderate);
        assert_eq!(UtilizationBand::from_pct(100.0), UtilizationBand::Critical);
        assert_eq!(UtilizationBand::from_pct(100.1), UtilizationBand::Exceeded);
    }
}
