//! # Reducer Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable), with a `validate()` helper
//! - `*Result` - Calculation results (JSON-serializable)
//! - a pure function `&*Input -> CalcResult<*Result>`
//!
//! The solvers trust their input: out-of-range numbers propagate as
//! `NaN`/`inf` instead of failing. Call `validate()` first on untrusted input.
//!
//! ## Available Calculations
//!
//! - [`ratio`] - Two-stage ratio split and tooth counts
//! - [`gear_stage`] - Module sizing and strength check of one helical stage
//! - [`reducer`] - Two-stage helical reducer
//! - [`bearing`] - Rolling bearing life and selection
//! - [`shaft`] - Gear shaft diameter and keyway

pub mod bearing;
pub mod gear_stage;
pub mod ratio;
pub mod reducer;
pub mod shaft;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::factors::DesignConstants;

// Re-export commonly used types
pub use bearing::{select_bearing, BearingInput, BearingResult, BearingSelection, Mounting};
pub use gear_stage::{size_stage, GearForces, ModuleChoice, ShaftSeed, SingleStageResult, StageInput};
pub use ratio::{distribute_ratio, RatioDistribution, RatioInput, ToothCounts};
pub use reducer::{size_reducer, ReducerInput, ReducerResult, ReducerStageDesign};
pub use shaft::{size_shaft, FatigueCorrection, KeywayStyle, ShaftInput, ShaftResult, VerticalMoment};

/// Enum wrapper for all calculation inputs.
///
/// Lets a caller hand over any calculation as one JSON document:
///
/// ```json
/// { "type": "Bearing", "radial_load_n": 4800, "speed_rpm": 500,
///   "desired_life_hours": 22000, "selection": { "Designation": "6205" } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationRequest {
    /// Two-stage reducer
    Reducer(ReducerInput),
    /// Single gear stage
    Stage(StageInput),
    /// Bearing life check
    Bearing(BearingInput),
    /// Gear shaft
    Shaft(ShaftInput),
}

/// Result matching a [`CalculationRequest`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Reducer(ReducerResult),
    Stage(SingleStageResult),
    Bearing(BearingResult),
    Shaft(ShaftResult),
}

impl CalculationRequest {
    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationRequest::Reducer(_) => "Reducer",
            CalculationRequest::Stage(_) => "Stage",
            CalculationRequest::Bearing(_) => "Bearing",
            CalculationRequest::Shaft(_) => "Shaft",
        }
    }

    /// Run the input's `validate()` helper
    pub fn validate(&self) -> CalcResult<()> {
        match self {
            CalculationRequest::Reducer(input) => input.validate(),
            CalculationRequest::Stage(input) => input.validate(),
            CalculationRequest::Bearing(input) => input.validate(),
            CalculationRequest::Shaft(input) => input.validate(),
        }
    }

    /// Run the calculation
    pub fn run(&self, constants: &DesignConstants) -> CalcResult<CalculationOutput> {
        log::info!("running {} calculation", self.calc_type());
        Ok(match self {
            CalculationRequest::Reducer(input) => CalculationOutput::Reducer(size_reducer(input, constants)?),
            CalculationRequest::Stage(input) => CalculationOutput::Stage(size_stage(input, constants)?),
            CalculationRequest::Bearing(input) => CalculationOutput::Bearing(select_bearing(input)?),
            CalculationRequest::Shaft(input) => CalculationOutput::Shaft(size_shaft(input)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_tagged_json() {
        let json = r#"{
            "type": "Bearing",
            "radial_load_n": 4800,
            "speed_rpm": 500,
            "desired_life_hours": 22000,
            "selection": { "Designation": "6205" }
        }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.calc_type(), "Bearing");
        assert!(request.validate().is_ok());

        match request.run(&DesignConstants::default()).unwrap() {
            CalculationOutput::Bearing(result) => assert!(!result.is_adequate),
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[test]
    fn test_stage_request_runs() {
        let input = StageInput::new(7.5, 1450.0, 4.0, 15.0, "DIN 17 200, Ck 45", 0.6);
        let request = CalculationRequest::Stage(input);
        let output = request.run(&DesignConstants::default()).unwrap();
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains("\"type\":\"Stage\""));
    }

    #[test]
    fn test_request_errors_propagate() {
        let mut input = StageInput::new(7.5, 1450.0, 4.0, 15.0, "DIN 17 200, Ck 45", 0.6);
        input.gear_material = "Unobtainium".to_string();
        let err = CalculationRequest::Stage(input).run(&DesignConstants::default()).unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
    }
}
