//! # Equation Registry
//!
//! Every equation the slab design applies, with its formula and code
//! reference. The text report lists these so a checker can trace each number
//! back to a clause.
//!
//! ## Usage
//!
//! ```rust
//! use slab_core::equations::registry::Equation;
//!
//! let meta = Equation::ReinforcementRatio.metadata();
//! assert_eq!(meta.reference.citation(), "ACI 318-14 Section 22.2");
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to the governing code clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// ACI 318 - Building Code Requirements for Structural Concrete
    ACI318 {
        year: u16,
        section: &'static str,
    },
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    const fn aci(section: &'static str) -> Self {
        CodeReference::ACI318 { year: 2014, section }
    }

    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::ACI318 { year, section } => {
                format!("ACI 318-{} Section {}", year % 100, section)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Metadata for one design equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used by the one-way slab design, in the order applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equation {
    /// h_min = ln / divisor, rounded up to 10 mm
    MinimumThickness,
    /// wu = 1.2D + 1.6L
    FactoredLoad,
    /// Mu = C·wu·ln²
    ApproximateMoments,
    /// d = h - cover - db/2
    EffectiveDepth,
    /// Rn = Mu/(φbd²)
    StrengthCoefficient,
    /// ρ = (1/m)(1 - √(1 - 2mRn/fy))
    ReinforcementRatio,
    /// As,min
    MinimumFlexuralSteel,
    /// s_max = min(3h, 450)
    MaximumFlexuralSpacing,
    /// As,sh
    ShrinkageSteel,
    /// s_max = min(5h, 450)
    MaximumShrinkageSpacing,
    /// Vu at d from the support face
    ShearDemand,
    /// φVc = 0.75·0.17λ√f'c·b·d
    ConcreteShearStrength,
}

impl Equation {
    /// All equations in application order
    pub const ALL: [Equation; 12] = [
        Equation::MinimumThickness,
        Equation::FactoredLoad,
        Equation::ApproximateMoments,
        Equation::EffectiveDepth,
        Equation::StrengthCoefficient,
        Equation::ReinforcementRatio,
        Equation::MinimumFlexuralSteel,
        Equation::MaximumFlexuralSpacing,
        Equation::ShrinkageSteel,
        Equation::MaximumShrinkageSpacing,
        Equation::ShearDemand,
        Equation::ConcreteShearStrength,
    ];

    /// Get full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        let (name, formula_plain, reference) = match self {
            Equation::MinimumThickness => (
                "Minimum slab thickness",
                "h_min = ln / (20 | 24 | 28 | 10), rounded up to 10 mm",
                CodeReference::aci("7.3.1.1"),
            ),
            Equation::FactoredLoad => (
                "Factored uniform load",
                "wu = 1.2(D + h·γc) + 1.6L",
                CodeReference::aci("5.3.1"),
            ),
            Equation::ApproximateMoments => (
                "Approximate design moments",
                "Mu = C·wu·ln²",
                CodeReference::aci("6.5.2"),
            ),
            Equation::EffectiveDepth => (
                "Effective depth",
                "d = h - cover - db/2",
                CodeReference::Mechanics,
            ),
            Equation::StrengthCoefficient => (
                "Nominal strength coefficient",
                "Rn = Mu / (φ·b·d²), φ = 0.9",
                CodeReference::aci("21.2.1"),
            ),
            Equation::ReinforcementRatio => (
                "Required reinforcement ratio",
                "ρ = (1/m)(1 - √(1 - 2·m·Rn/fy)), m = fy/(0.85f'c)",
                CodeReference::aci("22.2"),
            ),
            Equation::MinimumFlexuralSteel => (
                "Minimum flexural reinforcement",
                "As,min = 0.0020Ag (fy < 420) or max(0.0018·420/fy, 0.0014)·Ag",
                CodeReference::aci("7.6.1.1"),
            ),
            Equation::MaximumFlexuralSpacing => (
                "Maximum flexural bar spacing",
                "s ≤ min(3h, 450 mm)",
                CodeReference::aci("7.7.2.3"),
            ),
            Equation::ShrinkageSteel => (
                "Shrinkage and temperature reinforcement",
                "As,sh = 0.0020Ag (fy < 420) or 0.0018·420/fy·Ag",
                CodeReference::aci("24.4.3.2"),
            ),
            Equation::MaximumShrinkageSpacing => (
                "Maximum shrinkage bar spacing",
                "s ≤ min(5h, 450 mm)",
                CodeReference::aci("24.4.3.3"),
            ),
            Equation::ShearDemand => (
                "One-way shear demand",
                "Vu = wu(ln/2 - d); wu(0.575ln - d) at first interior support; wu·ln for cantilevers",
                CodeReference::aci("6.5.4"),
            ),
            Equation::ConcreteShearStrength => (
                "Concrete one-way shear strength",
                "φVc = 0.75 · 0.17λ√f'c·b·d",
                CodeReference::aci("22.5.5.1"),
            ),
        };
        EquationMetadata {
            name,
            formula_plain,
            reference,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        for eq in Equation::ALL {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty());
            assert!(!meta.formula_plain.is_empty());
        }
    }

    #[test]
    fn test_code_reference_citation() {
        assert_eq!(CodeReference::aci("7.3.1.1").citation(), "ACI 318-14 Section 7.3.1.1");
        assert_eq!(CodeReference::Mechanics.citation(), "Fundamental Mechanics");
    }

    #[test]
    fn test_shear_demand_cites_approximate_coefficients() {
        let meta = Equation::ShearDemand.metadata();
        assert_eq!(meta.reference.citation(), "ACI 318-14 Section 6.5.4");
        assert!(meta.formula_plain.contains("0.575ln"));
    }
}
