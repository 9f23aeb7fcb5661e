//! # Two-Stage Reducer
//!
//! Ratio split followed by two independent stage sizings.
//!
//! - Stage 1: full input power at the input speed
//! - Stage 2: power × η at the intermediate speed N2 that the rounded stage 1
//!   tooth counts actually produce
//! - Output torque: 9550 · P·η² / Nc
//!
//! Only power and speed couple the stages; they share no geometry.
//!
//! ## Example
//!
//! ```rust
//! use helix_core::calculations::reducer::{size_reducer, ReducerInput, ReducerStageDesign};
//! use helix_core::factors::DesignConstants;
//!
//! let stage = ReducerStageDesign::new(15.0, "DIN 17 200, 42 CrMo 4", 0.6);
//! let input = ReducerInput::new(7.5, 1450.0, 100.0, stage.clone(), stage);
//! let result = size_reducer(&input, &DesignConstants::default()).unwrap();
//!
//! assert_eq!(result.total_ratio, result.stage1.ratio * result.stage2.ratio);
//! assert!(result.stage2.module_mm >= result.stage1.module_mm);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::gear_stage::{
    default_notch_factor, default_safety, default_working_factor, size_stage, ModuleChoice, SingleStageResult,
    StageInput,
};
use crate::calculations::ratio::{distribute_ratio, RatioDistribution, RatioInput, ToothCounts};
use crate::equations::gear::torque_nm;
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::factors::{DesignConstants, LoadDirection};

/// Per-stage design choices of a reducer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReducerStageDesign {
    /// Helix angle β (degrees)
    pub helix_angle_deg: f64,
    /// Gear-grade pinion material
    pub pinion_material: String,
    /// Gear-grade wheel material; `None` uses the pinion material
    #[serde(default)]
    pub gear_material: Option<String>,
    /// ψd = b/d1
    pub width_factor: f64,
    #[serde(default)]
    pub module: ModuleChoice,
}

impl ReducerStageDesign {
    pub fn new(helix_angle_deg: f64, material: &str, width_factor: f64) -> Self {
        ReducerStageDesign {
            helix_angle_deg,
            pinion_material: material.to_string(),
            gear_material: None,
            width_factor,
            module: ModuleChoice::Automatic,
        }
    }

    fn gear_material(&self) -> &str {
        self.gear_material.as_deref().unwrap_or(&self.pinion_material)
    }
}

/// Input parameters for a two-stage reducer.
///
/// ## JSON Example
///
/// ```json
/// {
///   "power_kw": 7.5,
///   "input_speed_rpm": 1450,
///   "output_speed_rpm": 100,
///   "stage1": { "helix_angle_deg": 15, "pinion_material": "DIN 17 200, 42 CrMo 4", "width_factor": 0.6 },
///   "stage2": { "helix_angle_deg": 12, "pinion_material": "DIN 17 200, 42 CrMo 4", "width_factor": 0.8 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReducerInput {
    /// Input power (kW)
    pub power_kw: f64,
    /// Input speed Ng (rpm)
    pub input_speed_rpm: f64,
    /// Target output speed Nc (rpm)
    pub output_speed_rpm: f64,
    /// z1; `None` uses the engine default
    #[serde(default)]
    pub stage1_pinion_teeth: Option<u32>,
    /// z3; `None` uses the engine default
    #[serde(default)]
    pub stage2_pinion_teeth: Option<u32>,
    pub stage1: ReducerStageDesign,
    pub stage2: ReducerStageDesign,
    /// Ko, shared by both stages
    #[serde(default = "default_working_factor")]
    pub working_factor: f64,
    #[serde(default)]
    pub dynamic_factor: Option<f64>,
    #[serde(default)]
    pub pressure_angle_deg: Option<f64>,
    #[serde(default = "default_notch_factor")]
    pub notch_factor: f64,
    #[serde(default)]
    pub load_direction: LoadDirection,
    #[serde(default = "default_safety")]
    pub bending_safety: f64,
    #[serde(default = "default_safety")]
    pub surface_safety: f64,
    /// Efficiency of one mesh; `None` uses the engine default
    #[serde(default)]
    pub mesh_efficiency: Option<f64>,
}

impl ReducerInput {
    /// Reducer with default tooth counts and factors
    pub fn new(
        power_kw: f64,
        input_speed_rpm: f64,
        output_speed_rpm: f64,
        stage1: ReducerStageDesign,
        stage2: ReducerStageDesign,
    ) -> Self {
        ReducerInput {
            power_kw,
            input_speed_rpm,
            output_speed_rpm,
            stage1_pinion_teeth: None,
            stage2_pinion_teeth: None,
            stage1,
            stage2,
            working_factor: default_working_factor(),
            dynamic_factor: None,
            pressure_angle_deg: None,
            notch_factor: default_notch_factor(),
            load_direction: LoadDirection::default(),
            bending_safety: default_safety(),
            surface_safety: default_safety(),
            mesh_efficiency: None,
        }
    }

    pub fn ratio_input(&self) -> RatioInput {
        RatioInput {
            input_speed_rpm: self.input_speed_rpm,
            output_speed_rpm: self.output_speed_rpm,
            stage1_pinion_teeth: self.stage1_pinion_teeth,
            stage2_pinion_teeth: self.stage2_pinion_teeth,
        }
    }

    /// Stage input for one stage of this reducer
    fn stage_input(
        &self,
        design: &ReducerStageDesign,
        power_kw: f64,
        speed_rpm: f64,
        ratio: f64,
        pinion_teeth: Option<u32>,
    ) -> StageInput {
        StageInput {
            power_kw,
            speed_rpm,
            ratio,
            helix_angle_deg: design.helix_angle_deg,
            pressure_angle_deg: self.pressure_angle_deg,
            pinion_material: design.pinion_material.clone(),
            gear_material: design.gear_material().to_string(),
            notch_factor: self.notch_factor,
            load_direction: self.load_direction,
            width_factor: design.width_factor,
            working_factor: self.working_factor,
            dynamic_factor: self.dynamic_factor,
            pinion_teeth,
            bending_safety: self.bending_safety,
            surface_safety: self.surface_safety,
            module: design.module,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("power_kw", self.power_kw)?;
        self.ratio_input().validate()?;
        if let Some(eta) = self.mesh_efficiency {
            if !(eta > 0.0 && eta <= 1.0) {
                return Err(CalcError::invalid_input(
                    "mesh_efficiency",
                    eta.to_string(),
                    "Efficiency must be in (0, 1]",
                ));
            }
        }
        let ratio = (self.input_speed_rpm / self.output_speed_rpm).sqrt();
        self.stage_input(&self.stage1, self.power_kw, self.input_speed_rpm, ratio, self.stage1_pinion_teeth)
            .validate()?;
        self.stage_input(&self.stage2, self.power_kw, self.input_speed_rpm, ratio, self.stage2_pinion_teeth)
            .validate()?;
        Ok(())
    }
}

/// Shaft speeds through the reducer (rpm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedCascade {
    /// Ng
    pub input_rpm: f64,
    /// N2 from the rounded stage 1 ratio
    pub intermediate_rpm: f64,
    /// Nominal Nc
    pub output_rpm: f64,
}

/// Two-stage reducer result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReducerResult {
    pub ratio_analysis: RatioDistribution,
    pub stage1: SingleStageResult,
    pub stage2: SingleStageResult,
    pub speeds: SpeedCascade,
    pub tooth_counts: ToothCounts,
    /// stage 1 ratio × stage 2 ratio
    pub total_ratio: f64,
    /// η used for each mesh
    pub mesh_efficiency: f64,
    /// P·η² (kW)
    pub output_power_kw: f64,
    /// 9550 · P·η² / Nc (N·m)
    pub output_torque_nm: f64,
}

impl ReducerResult {
    /// True when both stages reach the required safety factors
    pub fn meets(&self, bending_safety: f64, surface_safety: f64) -> bool {
        self.stage1.meets(bending_safety, surface_safety) && self.stage2.meets(bending_safety, surface_safety)
    }
}

/// Size a two-stage helical reducer.
///
/// Fails only when a material is not in the gear-grade catalog.
pub fn size_reducer(input: &ReducerInput, constants: &DesignConstants) -> CalcResult<ReducerResult> {
    let split = distribute_ratio(&input.ratio_input(), constants);
    let eta = input.mesh_efficiency.unwrap_or(constants.default_mesh_efficiency);
    let counts = split.tooth_counts;

    let stage1_input = input.stage_input(
        &input.stage1,
        input.power_kw,
        input.input_speed_rpm,
        split.stage1_ratio,
        Some(counts.stage1_pinion),
    );
    let stage1 = size_stage(&stage1_input, constants)?;

    let stage2_power_kw = input.power_kw * eta;
    let stage2_input = input.stage_input(
        &input.stage2,
        stage2_power_kw,
        split.intermediate_speed_rpm,
        split.stage2_ratio,
        Some(counts.stage2_pinion),
    );
    let stage2 = size_stage(&stage2_input, constants)?;

    let output_power_kw = stage2_power_kw * eta;
    let output_torque_nm = torque_nm(output_power_kw, input.output_speed_rpm);

    log::debug!(
        "reducer: modules {} / {} mm, output torque {:.1} N·m",
        stage1.module_mm,
        stage2.module_mm,
        output_torque_nm
    );

    Ok(ReducerResult {
        speeds: SpeedCascade {
            input_rpm: input.input_speed_rpm,
            intermediate_rpm: split.intermediate_speed_rpm,
            output_rpm: input.output_speed_rpm,
        },
        tooth_counts: counts,
        total_ratio: split.achieved_ratio,
        mesh_efficiency: eta,
        output_power_kw,
        output_torque_nm,
        ratio_analysis: split,
        stage1,
        stage2,
    })
}
