//! Support conditions for one-way slabs
//!
//! The four prescriptive cases of ACI 318-14 Table 7.3.1.1 and Section 6.5.
//! Each case fixes the minimum-thickness divisor, which approximate moments
//! apply, and how shear demand is taken at the support.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::moments::{MomentCoefficient, MomentLocation};
use crate::errors::CalcError;

/// Support condition of the slab span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SupportCondition {
    /// Pinned at both ends
    #[default]
    SimplySupported,
    /// End span, continuous over one support
    OneEndContinuous,
    /// Interior span, continuous over both supports
    BothEndsContinuous,
    /// Fixed at one end, free at the other
    Cantilever,
}

impl SupportCondition {
    /// All support conditions for UI selection
    pub const ALL: [SupportCondition; 4] = [
        SupportCondition::SimplySupported,
        SupportCondition::OneEndContinuous,
        SupportCondition::BothEndsContinuous,
        SupportCondition::Cantilever,
    ];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportCondition::SimplySupported => "Simply Supported",
            SupportCondition::OneEndContinuous => "One End Continuous",
            SupportCondition::BothEndsContinuous => "Both Ends Continuous",
            SupportCondition::Cantilever => "Cantilever",
        }
    }

    /// Machine name, as used in JSON and on the command line
    pub fn code(&self) -> &'static str {
        match self {
            SupportCondition::SimplySupported => "simply_supported",
            SupportCondition::OneEndContinuous => "one_end_continuous",
            SupportCondition::BothEndsContinuous => "both_ends_continuous",
            SupportCondition::Cantilever => "cantilever",
        }
    }

    /// Span-to-depth divisor for minimum thickness (Table 7.3.1.1)
    pub fn thickness_divisor(&self) -> f64 {
        match self {
            SupportCondition::SimplySupported => 20.0,
            SupportCondition::OneEndContinuous => 24.0,
            SupportCondition::BothEndsContinuous => 28.0,
            SupportCondition::Cantilever => 10.0,
        }
    }

    /// Minimum thickness rule as written in the code table (e.g. "L/20")
    pub fn thickness_rule(&self) -> &'static str {
        match self {
            SupportCondition::SimplySupported => "L/20",
            SupportCondition::OneEndContinuous => "L/24",
            SupportCondition::BothEndsContinuous => "L/28",
            SupportCondition::Cantilever => "L/10",
        }
    }

    /// Design moment locations and their coefficients, in report order
    pub fn moment_pattern(&self) -> &'static [(MomentLocation, MomentCoefficient)] {
        match self {
            SupportCondition::SimplySupported => &[(
                MomentLocation::PositiveMidspan,
                MomentCoefficient::SimpleSpan,
            )],
            SupportCondition::OneEndContinuous => &[
                (
                    MomentLocation::NegativeExteriorSupport,
                    MomentCoefficient::ExteriorNegative,
                ),
                (
                    MomentLocation::PositiveMidspan,
                    MomentCoefficient::ExteriorPositive,
                ),
                (
                    MomentLocation::NegativeFirstInteriorSupport,
                    MomentCoefficient::FirstInteriorNegative,
                ),
            ],
            SupportCondition::BothEndsContinuous => &[
                (
                    MomentLocation::NegativeSupports,
                    MomentCoefficient::InteriorNegative,
                ),
                (
                    MomentLocation::PositiveMidspan,
                    MomentCoefficient::InteriorPositive,
                ),
            ],
            SupportCondition::Cantilever => &[(
                MomentLocation::NegativeCantileverSupport,
                MomentCoefficient::Cantilever,
            )],
        }
    }
}

impl fmt::Display for SupportCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SupportCondition {
    type Err = CalcError;

    /// Accepts the machine name in snake or kebab case, or the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        SupportCondition::ALL
            .into_iter()
            .find(|sc| sc.code() == normalized)
            .ok_or_else(|| {
                CalcError::invalid_input(
                    "support_condition",
                    s,
                    "Expected simply-supported, one-end-continuous, both-ends-continuous or cantilever",
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divisors() {
        assert_eq!(SupportCondition::SimplySupported.thickness_divisor(), 20.0);
        assert_eq!(SupportCondition::OneEndContinuous.thickness_divisor(), 24.0);
        assert_eq!(SupportCondition::BothEndsContinuous.thickness_divisor(), 28.0);
        assert_eq!(SupportCondition::Cantilever.thickness_divisor(), 10.0);
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!(
            "simply-supported".parse::<SupportCondition>().unwrap(),
            SupportCondition::SimplySupported
        );
        assert_eq!(
            "both_ends_continuous".parse::<SupportCondition>().unwrap(),
            SupportCondition::BothEndsContinuous
        );
        assert_eq!(
            "One End Continuous".parse::<SupportCondition>().unwrap(),
            SupportCondition::OneEndContinuous
        );
        assert!("fixed".parse::<SupportCondition>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&SupportCondition::Cantilever).unwrap();
        assert_eq!(json, "\"cantilever\"");
        let back: SupportCondition = serde_json::from_str("\"one_end_continuous\"").unwrap();
        assert_eq!(back, SupportCondition::OneEndContinuous);
    }
}
