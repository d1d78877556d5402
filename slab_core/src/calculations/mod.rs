//! # Slab Design Calculations
//!
//! The one-way slab design pipeline. Each stage follows the pattern:
//!
//! - a plain function taking the earlier stage values
//! - a `*Result`/record type it returns (JSON-serializable)
//!
//! and [`slab::calculate`] chains them in the fixed ACI order.
//!
//! ## Stages
//!
//! - [`thickness`] - minimum thickness and user override
//! - [`moments`] - approximate design moments
//! - [`flexure`] - main reinforcement per moment
//! - [`shrinkage`] - shrinkage and temperature reinforcement
//! - [`shear`] - one-way shear check
//! - [`slab`] - orchestration, [`DesignInput`] and [`DesignResult`]

pub mod flexure;
pub mod moments;
pub mod notes;
pub mod shear;
pub mod shrinkage;
pub mod slab;
pub mod support;
pub mod thickness;

// Re-export commonly used types
pub use flexure::{size_flexural_steel, FlexuralReinforcement};
pub use moments::{solve_moments, DesignMoment, MomentCoefficient, MomentLocation};
pub use notes::DesignNote;
pub use shear::{check_shear, ShearCheck, ShearStatus, UtilizationBand};
pub use shrinkage::{size_shrinkage_steel, ShrinkageReinforcement};
pub use slab::{calculate, design, DesignInput, DesignResult};
pub use support::SupportCondition;
pub use thickness::{select_thickness, ThicknessResult};
