//! # Ratio Distribution
//!
//! Splits the total reduction of a two-stage reducer across both stages and
//! fixes the four integer tooth counts.
//!
//! ## Method
//!
//! ```text
//! i_target = Ng / Nc
//! i1_th = √i_target,  i2_th = i_target / i1_th
//! z2 = round(z1·i1_th),  z4 = round(z3·i2_th)
//! i1 = z2/z1,  i2 = z4/z3,  i = i1·i2
//! error = |i_target − i| / i_target · 100
//! N2 = Ng / i1
//! ```
//!
//! The geometric split keeps both stages about the same size. Tooth-count
//! rounding is the dominant source of ratio error; the error is reported and
//! never corrected.
//!
//! ## Example
//!
//! ```rust
//! use helix_core::calculations::ratio::{distribute_ratio, RatioInput};
//!
//! use helix_core::factors::DesignConstants;
//!
//! let input = RatioInput {
//!     input_speed_rpm: 1000.0,
//!     output_speed_rpm: 100.0,
//!     stage1_pinion_teeth: Some(20),
//!     stage2_pinion_teeth: Some(22),
//! };
//! let split = distribute_ratio(&input, &DesignConstants::default());
//! assert_eq!(split.tooth_counts.stage1_gear, 63);
//! assert_eq!(split.tooth_counts.stage2_gear, 70);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult, require_positive};
use crate::factors::DesignConstants;

/// Smallest pinion tooth count accepted by `validate()` (undercut is not
/// modeled below this)
pub const MIN_PINION_TEETH: u32 = 10;

/// Target speeds and pinion tooth counts for both stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioInput {
    /// Input shaft speed Ng (rpm)
    pub input_speed_rpm: f64,
    /// Target output shaft speed Nc (rpm)
    pub output_speed_rpm: f64,
    /// Stage 1 pinion teeth z1; `None` uses the engine default
    #[serde(default)]
    pub stage1_pinion_teeth: Option<u32>,
    /// Stage 2 pinion teeth z3; `None` uses the engine default
    #[serde(default)]
    pub stage2_pinion_teeth: Option<u32>,
}

impl RatioInput {
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("input_speed_rpm", self.input_speed_rpm)?;
        require_positive("output_speed_rpm", self.output_speed_rpm)?;
        validate_pinion_teeth("stage1_pinion_teeth", self.stage1_pinion_teeth)?;
        validate_pinion_teeth("stage2_pinion_teeth", self.stage2_pinion_teeth)?;
        Ok(())
    }
}

/// Unset tooth counts resolve later against `DesignConstants` and pass here
pub(crate) fn validate_pinion_teeth(field: &str, teeth: Option<u32>) -> CalcResult<()> {
    let Some(teeth) = teeth else {
        return Ok(());
    };
    if teeth < MIN_PINION_TEETH {
        return Err(CalcError::invalid_input(
            field,
            teeth.to_string(),
            format!("Pinion needs at least {} teeth", MIN_PINION_TEETH),
        ));
    }
    Ok(())
}

/// The four tooth counts of a two-stage reducer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToothCounts {
    /// z1
    pub stage1_pinion: u32,
    /// z2
    pub stage1_gear: u32,
    /// z3
    pub stage2_pinion: u32,
    /// z4
    pub stage2_gear: u32,
}

/// Result of the ratio split
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioDistribution {
    /// Ng / Nc
    pub target_ratio: f64,
    /// √(target ratio)
    pub theoretical_stage1_ratio: f64,
    /// target ratio / theoretical stage 1 ratio
    pub theoretical_stage2_ratio: f64,
    /// z2 / z1
    pub stage1_ratio: f64,
    /// z4 / z3
    pub stage2_ratio: f64,
    /// stage1_ratio × stage2_ratio
    pub achieved_ratio: f64,
    /// |target − achieved| / target × 100
    pub error_percent: f64,
    /// Intermediate shaft speed N2 = Ng / stage1_ratio (rpm)
    pub intermediate_speed_rpm: f64,
    pub tooth_counts: ToothCounts,
}

impl RatioDistribution {
    /// Output speed actually reached with the rounded tooth counts (rpm)
    pub fn achieved_output_speed_rpm(&self) -> f64 {
        self.intermediate_speed_rpm / self.stage2_ratio
    }
}

/// Gear tooth count for a pinion and a theoretical ratio, rounded to the
/// nearest whole tooth
pub(crate) fn mating_teeth(pinion_teeth: u32, ratio: f64) -> u32 {
    (pinion_teeth as f64 * ratio).round() as u32
}

/// Distribute a target reduction across two stages.
///
/// Never fails; non-positive speeds propagate as `NaN`/`inf`. Call
/// [`RatioInput::validate`] first when the input is untrusted. Unset pinion
/// tooth counts take `constants.default_pinion_teeth`.
pub fn distribute_ratio(input: &RatioInput, constants: &DesignConstants) -> RatioDistribution {
    let target_ratio = input.input_speed_rpm / input.output_speed_rpm;
    let theoretical_stage1_ratio = target_ratio.sqrt();
    let theoretical_stage2_ratio = target_ratio / theoretical_stage1_ratio;

    let z1 = input.stage1_pinion_teeth.unwrap_or(constants.default_pinion_teeth);
    let z3 = input.stage2_pinion_teeth.unwrap_or(constants.default_pinion_teeth);
    let z2 = mating_teeth(z1, theoretical_stage1_ratio);
    let z4 = mating_teeth(z3, theoretical_stage2_ratio);

    let stage1_ratio = z2 as f64 / z1 as f64;
    let stage2_ratio = z4 as f64 / z3 as f64;
    let achieved_ratio = stage1_ratio * stage2_ratio;
    let error_percent = (target_ratio - achieved_ratio).abs() / target_ratio * 100.0;

    log::debug!(
        "ratio split: target {:.4}, z {}/{} x {}/{} = {:.4} ({:.2}% off)",
        target_ratio,
        z2,
        z1,
        z4,
        z3,
        achieved_ratio,
        error_percent
    );

    RatioDistribution {
        target_ratio,
        theoretical_stage1_ratio,
        theoretical_stage2_ratio,
        stage1_ratio,
        stage2_ratio,
        achieved_ratio,
        error_percent,
        intermediate_speed_rpm: input.input_speed_rpm / stage1_ratio,
        tooth_counts: ToothCounts {
            stage1_pinion: z1,
            stage1_gear: z2,
            stage2_pinion: z3,
            stage2_gear: z4,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn input(ng: f64, nc: f64, z1: u32, z3: u32) -> RatioInput {
        RatioInput {
            input_speed_rpm: ng,
            output_speed_rpm: nc,
            stage1_pinion_teeth: Some(z1),
            stage2_pinion_teeth: Some(z3),
        }
    }

    fn distribute(input: &RatioInput) -> RatioDistribution {
        distribute_ratio(input, &DesignConstants::default())
    }

    #[test]
    fn test_ten_to_one_reference() {
        let split = distribute(&input(1000.0, 100.0, 20, 22));

        assert_relative_eq!(split.target_ratio, 10.0);
        assert_relative_eq!(split.theoretical_stage1_ratio, 10f64.sqrt());
        assert_eq!(split.tooth_counts.stage1_gear, 63);
        assert_eq!(split.tooth_counts.stage2_gear, 70);
        assert_relative_eq!(split.stage1_ratio, 3.15);
        assert_relative_eq!(split.stage2_ratio, 70.0 / 22.0);
        assert!(split.error_percent > 0.0);
        assert!(split.error_percent < 3.0);
        assert_relative_eq!(split.intermediate_speed_rpm, 1000.0 / 3.15);
    }

    #[test]
    fn test_achieved_ratio_is_product_of_stages() {
        let split = distribute(&input(1450.0, 37.0, 19, 23));
        assert_eq!(split.achieved_ratio, split.stage1_ratio * split.stage2_ratio);
    }

    #[test]
    fn test_exact_square_has_no_error() {
        // 16 = 4 × 4 with 20 teeth → 80 teeth per gear
        let split = distribute(&input(1600.0, 100.0, 20, 20));
        assert_eq!(split.tooth_counts.stage1_gear, 80);
        assert_eq!(split.tooth_counts.stage2_gear, 80);
        assert_relative_eq!(split.error_percent, 0.0);
        assert_relative_eq!(split.achieved_output_speed_rpm(), 100.0);
    }

    #[test]
    fn test_pinion_teeth_default_on_deserialize() {
        let parsed: RatioInput =
            serde_json::from_str(r#"{ "input_speed_rpm": 1450, "output_speed_rpm": 90 }"#).unwrap();
        assert_eq!(parsed.stage1_pinion_teeth, None);
        assert_eq!(parsed.stage2_pinion_teeth, None);

        let counts = distribute(&parsed).tooth_counts;
        assert_eq!(counts.stage1_pinion, 20);
        assert_eq!(counts.stage2_pinion, 20);
    }

    #[test]
    fn test_pinion_teeth_from_constants() {
        let constants = DesignConstants {
            default_pinion_teeth: 25,
            ..DesignConstants::default()
        };
        let mut unset = input(1000.0, 100.0, 20, 22);
        unset.stage1_pinion_teeth = None;
        unset.stage2_pinion_teeth = None;

        let counts = distribute_ratio(&unset, &constants).tooth_counts;
        assert_eq!(counts.stage1_pinion, 25);
        assert_eq!(counts.stage2_pinion, 25);
        // round(25·√10) = 79
        assert_eq!(counts.stage1_gear, 79);

        // Explicit counts win over the constant
        let explicit = distribute_ratio(&input(1000.0, 100.0, 20, 22), &constants);
        assert_eq!(explicit.tooth_counts.stage1_pinion, 20);
    }

    #[test]
    fn test_validate() {
        assert!(input(1000.0, 100.0, 20, 22).validate().is_ok());
        assert!(input(0.0, 100.0, 20, 22).validate().is_err());

        let err = input(1000.0, 100.0, 8, 22).validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
