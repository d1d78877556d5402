//! Command implementations

pub mod bars;
pub mod design;
