//! # slab_core - One-Way Slab Design Engine
//!
//! `slab_core` designs one-way reinforced concrete slabs to ACI 318-14 from a
//! handful of geometric, material and load inputs: thickness, factored load,
//! design moments, main and shrinkage reinforcement, and the one-way shear
//! check. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: one pure function from input to result, safe to call
//!   from many threads at once
//! - **JSON-First**: all inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, advisory notes kept separate
//! - **Code-Traceable**: every formula lives in [`equations`] with its clause
//!
//! ## Quick Start
//!
//! ```rust
//! use slab_core::{design, LoadSet, MaterialProperties, SupportCondition};
//!
//! let result = design(
//!     1500.0,
//!     MaterialProperties::new(28.0, 420.0),
//!     LoadSet::new(1.5, 3.0),
//!     SupportCondition::Cantilever,
//!     "#13",
//!     "#10",
//!     None,
//! )
//! .unwrap();
//!
//! assert_eq!(result.thickness_mm(), 150.0);
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("negative_cantilever_support"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - the design stages and the orchestrating [`design`] call
//! - [`equations`] - ACI 318-14 formulas and their code references
//! - [`materials`] - concrete/steel properties and the bar catalog
//! - [`loads`] - service loads and the factored combination
//! - [`report`] - plain-text report and CSV export
//! - [`units`] - SI unit wrappers
//! - [`errors`] - structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod loads;
pub mod materials;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, design, DesignInput, DesignResult, SupportCondition};
pub use errors::{CalcError, CalcResult};
pub use loads::LoadSet;
pub use materials::{bar_catalog, BarSize, MaterialProperties};
