//! # Error Types
//!
//! Structured error types for slab_core. Each variant carries enough context
//! for a caller (or a form front end) to point at the offending input without
//! parsing the message text.
//!
//! Advisory conditions such as a user thickness below the code minimum are
//! NOT errors; they travel with the result as
//! [`DesignNote`](crate::calculations::DesignNote)s.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_mm: f64) -> CalcResult<()> {
//!     if span_mm <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "clear_span_mm",
//!             span_mm.to_string(),
//!             "Clear span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_span(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for slab_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for design operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive span, unknown bar size, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The section has no room for the tension steel: h - cover - db/2 <= 0
    #[error(
        "Geometrically infeasible section: thickness {thickness_mm} mm, cover {cover_mm} mm, \
         bar diameter {bar_diameter_mm} mm leave no positive effective depth"
    )]
    GeometricInfeasibility {
        thickness_mm: f64,
        cover_mm: f64,
        bar_diameter_mm: f64,
    },

    /// Calculation could not produce a usable value
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a GeometricInfeasibility error
    pub fn geometric_infeasibility(thickness_mm: f64, cover_mm: f64, bar_diameter_mm: f64) -> Self {
        CalcError::GeometricInfeasibility {
            thickness_mm,
            cover_mm,
            bar_diameter_mm,
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error came from the caller's inputs rather than the solver
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. } | CalcError::GeometricInfeasibility { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::GeometricInfeasibility { .. } => "GEOMETRIC_INFEASIBILITY",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("clear_span_mm", "-5", "Clear span must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::geometric_infeasibility(50.0, 40.0, 25.4).error_code(),
            "GEOMETRIC_INFEASIBILITY"
        );
        assert_eq!(
            CalcError::calculation_failed("Shrinkage", "x").error_code(),
            "CALCULATION_FAILED"
        );
    }

    #[test]
    fn test_geometric_message_names_values() {
        let msg = CalcError::geometric_infeasibility(50.0, 40.0, 25.4).to_string();
        assert!(msg.contains("50"));
        assert!(msg.contains("40"));
        assert!(msg.contains("25.4"));
    }

    #[test]
    fn test_input_error_classification() {
        assert!(CalcError::invalid_input("fy_mpa", "0", "must be positive").is_input_error());
        assert!(!CalcError::calculation_failed("Shrinkage", "x").is_input_error());
    }

    #[test]
    fn test_from_json_error() {
        let err: CalcError = serde_json::from_str::<f64>("not json").unwrap_err().into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
