//! # Slab Thickness Selection
//!
//! Minimum thickness per ACI 318-14 Table 7.3.1.1, `ln / divisor`, rounded up
//! to a 10 mm increment. An explicit user thickness always wins; when it is
//! thinner than the code minimum the result carries an advisory note instead
//! of being replaced.

use serde::{Deserialize, Serialize};

use super::notes::DesignNote;
use super::support::SupportCondition;
use crate::equations::concrete::{round_up_to, THICKNESS_INCREMENT_MM};

/// Outcome of thickness selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThicknessResult {
    /// Table 7.3.1.1 divisor for the support condition
    pub divisor: f64,

    /// ln / divisor before rounding (mm)
    pub computed_mm: f64,

    /// Code minimum rounded up to 10 mm
    pub minimum_mm: f64,

    /// Thickness used for design (mm)
    pub thickness_mm: f64,

    /// Thickness the caller asked for, if any
    pub user_override_mm: Option<f64>,
}

impl ThicknessResult {
    /// True when the caller's override is thinner than the code minimum
    pub fn below_minimum(&self) -> bool {
        self.user_override_mm
            .is_some_and(|user| user < self.minimum_mm)
    }

    /// Advisory note for an override below the minimum
    pub fn note(&self) -> Option<DesignNote> {
        match self.user_override_mm {
            Some(user) if user < self.minimum_mm => Some(DesignNote::ThicknessBelowMinimum {
                user_thickness_mm: user,
                minimum_thickness_mm: self.minimum_mm,
            }),
            _ => None,
        }
    }
}

/// Select the design thickness.
///
/// # Example
///
/// ```rust
/// use slab_core::calculations::{select_thickness, SupportCondition};
///
/// let t = select_thickness(3500.0, SupportCondition::SimplySupported, None);
/// assert_eq!(t.thickness_mm, 180.0); // 3500/20 = 175 -> 180
///
/// let t = select_thickness(3500.0, SupportCondition::SimplySupported, Some(150.0));
/// assert_eq!(t.thickness_mm, 150.0);
/// assert!(t.below_minimum());
/// ```
pub fn select_thickness(
    clear_span_mm: f64,
    support: SupportCondition,
    user_thickness_mm: Option<f64>,
) -> ThicknessResult {
    let divisor = support.thickness_divisor();
    let computed = clear_span_mm / divisor;
    let minimum = round_up_to(computed, THICKNESS_INCREMENT_MM);

    ThicknessResult {
        divisor,
        computed_mm: computed,
        minimum_mm: minimum,
        thickness_mm: user_thickness_mm.unwrap_or(minimum),
        user_override_mm: user_thickness_mm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_up_to_ten() {
        let t = select_thickness(3500.0, SupportCondition::SimplySupported, None);
        assert_eq!(t.computed_mm, 175.0);
        assert_eq!(t.thickness_mm, 180.0);
        assert!(t.note().is_none());
    }

    #[test]
    fn test_cantilever_exact_multiple() {
        let t = select_thickness(1500.0, SupportCondition::Cantilever, None);
        assert_eq!(t.thickness_mm, 150.0);
    }

    #[test]
    fn test_multiple_of_ten_over_span_range() {
        for support in SupportCondition::ALL {
            let mut span = 1.0;
            while span <= 10_000.0 {
                let t = select_thickness(span, support, None);
                assert!(t.thickness_mm > 0.0);
                assert_eq!(t.thickness_mm % 10.0, 0.0, "span {span} {support:?}");
                assert!(t.thickness_mm >= t.computed_mm);
                span += 37.0;
            }
        }
    }

    #[test]
    fn test_override_above_minimum_has_no_note() {
        let t = select_thickness(3500.0, SupportCondition::SimplySupported, Some(200.0));
        assert_eq!(t.thickness_mm, 200.0);
        assert!(!t.below_minimum());
        assert!(t.note().is_none());
    }

    #[test]
    fn test_override_below_minimum_is_kept_with_note() {
        let t = select_thickness(4200.0, SupportCondition::BothEndsContinuous, Some(125.0));
        // 4200/28 = 150
        assert_eq!(t.minimum_mm, 150.0);
        assert_eq!(t.thickness_mm, 125.0);
        assert!(matches!(
            t.note(),
            Some(DesignNote::ThicknessBelowMinimum { user_thickness_mm, minimum_thickness_mm })
                if user_thickness_mm == 125.0 && minimum_thickness_mm == 150.0
        ));
    }
}
