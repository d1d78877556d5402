//! # Approximate Design Moments
//!
//! ACI 318-14 Section 6.5 coefficients applied to `wu·ln²`. The coefficient
//! set is fixed by the support condition; nothing here is configurable.
//!
//! | Support | Location | C |
//! |---|---|---|
//! | Simply supported | Positive Moment (Midspan) | 1/8 |
//! | One end continuous | Negative Moment (Exterior Support) | 1/24 |
//! | One end continuous | Positive Moment (Midspan) | 1/14 |
//! | One end continuous | Negative Moment (First Interior Support) | 1/10 |
//! | Both ends continuous | Negative Moment (Supports) | 1/11 |
//! | Both ends continuous | Positive Moment (Midspan) | 1/16 |
//! | Cantilever | Negative Moment (Support) | 1/2 |

use std::fmt;

use serde::{Deserialize, Serialize};

use super::support::SupportCondition;
use crate::units::{Meters, Millimeters};

/// Named location of a design moment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MomentLocation {
    PositiveMidspan,
    NegativeExteriorSupport,
    NegativeFirstInteriorSupport,
    NegativeSupports,
    NegativeCantileverSupport,
}

impl MomentLocation {
    /// Label used in reports and tables
    pub fn label(&self) -> &'static str {
        match self {
            MomentLocation::PositiveMidspan => "Positive Moment (Midspan)",
            MomentLocation::NegativeExteriorSupport => "Negative Moment (Exterior Support)",
            MomentLocation::NegativeFirstInteriorSupport => {
                "Negative Moment (First Interior Support)"
            }
            MomentLocation::NegativeSupports => "Negative Moment (Supports)",
            MomentLocation::NegativeCantileverSupport => "Negative Moment (Support)",
        }
    }
}

impl fmt::Display for MomentLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// ACI approximate moment coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MomentCoefficient {
    /// 1/24, exterior support integral with a spandrel
    ExteriorNegative,
    /// 1/14, end span positive
    ExteriorPositive,
    /// 1/10, exterior face of first interior support
    FirstInteriorNegative,
    /// 1/11, interior support faces
    InteriorNegative,
    /// 1/16, interior span positive
    InteriorPositive,
    /// 1/8, simple span
    SimpleSpan,
    /// 1/2, cantilever root
    Cantilever,
}

impl MomentCoefficient {
    pub fn value(&self) -> f64 {
        match self {
            MomentCoefficient::ExteriorNegative => 1.0 / 24.0,
            MomentCoefficient::ExteriorPositive => 1.0 / 14.0,
            MomentCoefficient::FirstInteriorNegative => 1.0 / 10.0,
            MomentCoefficient::InteriorNegative => 1.0 / 11.0,
            MomentCoefficient::InteriorPositive => 1.0 / 16.0,
            MomentCoefficient::SimpleSpan => 1.0 / 8.0,
            MomentCoefficient::Cantilever => 1.0 / 2.0,
        }
    }

    /// Fraction as written in the code (e.g. "1/24")
    pub fn fraction(&self) -> &'static str {
        match self {
            MomentCoefficient::ExteriorNegative => "1/24",
            MomentCoefficient::ExteriorPositive => "1/14",
            MomentCoefficient::FirstInteriorNegative => "1/10",
            MomentCoefficient::InteriorNegative => "1/11",
            MomentCoefficient::InteriorPositive => "1/16",
            MomentCoefficient::SimpleSpan => "1/8",
            MomentCoefficient::Cantilever => "1/2",
        }
    }
}

/// One factored design moment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignMoment {
    pub location: MomentLocation,
    pub coefficient: MomentCoefficient,
    /// Factored moment Mu (kN·m per metre width)
    pub mu_knm: f64,
}

/// Compute the design moments for a span.
///
/// `M0 = wu·ln²` with `ln` in metres; each location gets `C·M0`.
pub fn solve_moments(
    factored_load_kn_m: f64,
    clear_span_mm: f64,
    support: SupportCondition,
) -> Vec<DesignMoment> {
    let span: Meters = Millimeters(clear_span_mm).into();
    let base_moment = factored_load_kn_m * span.value().powi(2);

    support
        .moment_pattern()
        .iter()
        .map(|&(location, coefficient)| DesignMoment {
            location,
            coefficient,
            mu_knm: coefficient.value() * base_moment,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locations(support: SupportCondition) -> Vec<MomentLocation> {
        solve_moments(10.0, 4000.0, support)
            .into_iter()
            .map(|m| m.location)
            .collect()
    }

    #[test]
    fn test_key_sets_per_support() {
        assert_eq!(
            locations(SupportCondition::SimplySupported),
            vec![MomentLocation::PositiveMidspan]
        );
        assert_eq!(
            locations(SupportCondition::OneEndContinuous),
            vec![
                MomentLocation::NegativeExteriorSupport,
                MomentLocation::PositiveMidspan,
                MomentLocation::NegativeFirstInteriorSupport,
            ]
        );
        assert_eq!(
            locations(SupportCondition::BothEndsContinuous),
            vec![MomentLocation::NegativeSupports, MomentLocation::PositiveMidspan]
        );
        assert_eq!(
            locations(SupportCondition::Cantilever),
            vec![MomentLocation::NegativeCantileverSupport]
        );
    }

    #[test]
    fn test_simple_span_moment() {
        let moments = solve_moments(12.0, 3500.0, SupportCondition::SimplySupported);
        // 12.0 * 3.5² / 8 = 18.375
        assert!((moments[0].mu_knm - 18.375).abs() < 1e-9);
    }

    #[test]
    fn test_one_end_continuous_coefficients() {
        let m0 = 10.0 * 4.0_f64.powi(2);
        let moments = solve_moments(10.0, 4000.0, SupportCondition::OneEndContinuous);
        assert!((moments[0].mu_knm - m0 / 24.0).abs() < 1e-9);
        assert!((moments[1].mu_knm - m0 / 14.0).abs() < 1e-9);
        assert!((moments[2].mu_knm - m0 / 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_both_ends_continuous_coefficients() {
        let m0 = 10.0 * 4.0_f64.powi(2);
        let moments = solve_moments(10.0, 4000.0, SupportCondition::BothEndsContinuous);
        assert!((moments[0].mu_knm - m0 / 11.0).abs() < 1e-9);
        assert!((moments[1].mu_knm - m0 / 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_labels() {
        assert_eq!(MomentLocation::NegativeCantileverSupport.label(), "Negative Moment (Support)");
        assert_eq!(MomentCoefficient::InteriorNegative.fraction(), "1/11");
    }
}
