//! # Calculation Errors
//!
//! Only structurally unsatisfiable requests are errors: a bearing calculation
//! with no resolvable catalog reference, or a catalog search with no candidate
//! at all. Inadequate designs (short bearing life, unsafe shaft, large ratio
//! error) are reported as flags on the result records, never as errors.
//!
//! `InvalidInput` is produced only by the `validate()` helpers on the input
//! records. The solvers do not call them; non-positive speeds or factors
//! propagate as `NaN`/`inf` through the numeric results.
//!
//! ```rust
//! use helix_core::errors::{CalcError, CalcResult};
//!
//! fn check_speed(speed_rpm: f64) -> CalcResult<()> {
//!     if speed_rpm <= 0.0 {
//!         return Err(CalcError::invalid_input("speed_rpm", speed_rpm.to_string(), "speed must be positive"));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(check_speed(-10.0).unwrap_err().error_code(), "INVALID_INPUT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type CalcResult<T> = Result<T, CalcError>;

/// Failure of a reducer, stage, bearing or shaft calculation.
///
/// Serialized as `{"type": "<Variant>", "details": {...}}` so the CLI can
/// print it as JSON.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Rejected by a `validate()` helper
    #[error("{field} = {value} rejected: {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{field} must be given")]
    MissingField { field: String },

    /// Name absent from both the gear-grade and general-structural catalogs
    #[error("Unknown material '{material_name}'")]
    MaterialNotFound { material_name: String },

    /// Bearing life requested without a resolvable catalog reference
    #[error("No bearing selected: {reason}")]
    BearingNotSelected { reason: String },

    /// No catalog bearing satisfies the bore/kind constraint
    #[error("No {kind} bearing in catalog with bore >= {min_bore_mm} mm")]
    NoBearingCandidate { kind: String, min_bore_mm: f64 },
}

impl CalcError {
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    pub fn bearing_not_selected(reason: impl Into<String>) -> Self {
        CalcError::BearingNotSelected {
            reason: reason.into(),
        }
    }

    pub fn no_bearing_candidate(kind: impl Into<String>, min_bore_mm: f64) -> Self {
        CalcError::NoBearingCandidate {
            kind: kind.into(),
            min_bore_mm,
        }
    }

    /// True for the two bearing-resolution failures (missing selection, no candidate)
    pub fn is_selection_error(&self) -> bool {
        matches!(
            self,
            CalcError::BearingNotSelected { .. } | CalcError::NoBearingCandidate { .. }
        )
    }

    /// Stable upper-case code, printed next to the message by the CLI
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::BearingNotSelected { .. } => "BEARING_NOT_SELECTED",
            CalcError::NoBearingCandidate { .. } => "NO_BEARING_CANDIDATE",
        }
    }
}

/// Reject a value that must be strictly positive.
///
/// Shared by the `validate()` helpers of the input records.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if value.is_nan() || value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be positive",
        ));
    }
    Ok(())
}
