//! # Design Equations
//!
//! The ACI 318-14 formulas behind the slab design, kept in one place so they
//! can be checked against the code clauses independently of the stage logic.
//!
//! ## Modules
//!
//! - [`concrete`] - section, flexure, reinforcement and shear formulas
//! - [`registry`] - equation metadata and code references for reports
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moments**: Reported as magnitudes; the location label carries the sign
//!   ("Positive Moment", "Negative Moment")
//! - **Shear**: Reported as a magnitude, never negative

pub mod concrete;
pub mod registry;

pub use registry::{CodeReference, Equation};
