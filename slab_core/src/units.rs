//! # Unit Types
//!
//! Thin newtype wrappers for the SI units the slab formulas mix. The ACI
//! equations take span in metres for moments and shear but depth in
//! millimetres for section work, and moments switch between kN·m and N·mm;
//! these wrappers make each conversion explicit at the call site.
//!
//! ## Units Used
//!
//! - Length: millimetres (mm), metres (m)
//! - Moment: kilonewton-metres (kN·m), newton-millimetres (N·mm)
//! - Stress: MPa (kept as plain `f64` on the material record)
//! - Distributed load: kN/m² on area, kN/m on the 1 m design strip
//!
//! ## Example
//!
//! ```rust
//! use slab_core::units::{Meters, Millimeters, KnM, NMm};
//!
//! let span: Meters = Millimeters(3500.0).into();
//! assert_eq!(span.0, 3.5);
//!
//! let mu: NMm = KnM(18.375).into();
//! assert_eq!(mu.0, 18.375e6);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnM(pub f64);

/// Moment in newton-millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NMm(pub f64);

impl From<KnM> for NMm {
    fn from(knm: KnM) -> Self {
        NMm(knm.0 * 1e6)
    }
}

impl From<NMm> for KnM {
    fn from(nmm: NMm) -> Self {
        KnM(nmm.0 / 1e6)
    }
}

// ============================================================================
// Value Access and Arithmetic
// ============================================================================

macro_rules! impl_value {
    ($type:ty) => {
        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_value!(Millimeters);
impl_value!(Meters);
impl_value!(KnM);
impl_value!(NMm);

// Lever arms in the shear formulas are built from spans and depths in metres
impl Sub for Meters {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Meters(self.0 - rhs.0)
    }
}

impl Mul<f64> for Meters {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Meters(self.0 * rhs)
    }
}

impl Div<f64> for Meters {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        Meters(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_m() {
        let m: Meters = Millimeters(1500.0).into();
        assert_eq!(m.0, 1.5);
        let back: Millimeters = m.into();
        assert_eq!(back.0, 1500.0);
    }

    #[test]
    fn test_moment_conversion() {
        let nmm: NMm = KnM(2.5).into();
        assert_eq!(nmm.0, 2.5e6);
        let knm: KnM = nmm.into();
        assert_eq!(knm.0, 2.5);
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(1.75);
        let b = Meters(0.25);
        assert_eq!((a - b).value(), 1.5);
        assert_eq!((b * 2.0).value(), 0.5);
        assert_eq!((a / 7.0).value(), 0.25);
    }

    #[test]
    fn test_serialization() {
        let mm = Millimeters(180.0);
        assert_eq!(serde_json::to_string(&mm).unwrap(), "180.0");
    }
}
