//! # Shaft Sizing
//!
//! Gear shaft between two bearings: reactions, bending and equivalent moment,
//! minimum and standard diameter, keyway and key pressure check.
//!
//! ## Method
//!
//! ```text
//! T   = 9550·P/n                              (N·m)
//! Mv  = max(|RA_V·l1|, |RB_V·l2|)            (|RA_V·l1| with VerticalMoment::BearingA)
//! Mh  = RA_H·l1
//! Mb  = √(Mv² + Mh²)
//! Meq = √((k·Mb)² + 0.75·T²)                  (k = σK/σD when fatigue-corrected)
//! σem = σAk / S
//! d   = ∛(32·Meq / (π·σem))  → next standard diameter
//! ```
//!
//! The key is taken from the DIN 6885 band of the standard diameter. The hub
//! is 1.2·d long; a round-ended (form A) key loses one key width of bearing
//! length.
//!
//! ## Example
//!
//! ```rust
//! use helix_core::calculations::gear_stage::GearForces;
//! use helix_core::calculations::shaft::{size_shaft, ShaftInput};
//!
//! let forces = GearForces {
//!     tangential_n: 2000.0,
//!     radial_n: 800.0,
//!     axial_n: 0.0,
//!     pitch_diameter_mm: 200.0,
//! };
//! let mut input = ShaftInput::new(5.5, 300.0, forces, 60.0, 60.0, "DIN 17 100, St 37");
//! input.safety_factor = 2.0;
//!
//! let result = size_shaft(&input).unwrap();
//! assert_eq!(result.standard_diameter_mm, 25.0);
//! assert!(result.is_safe);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::gear_stage::{GearForces, ShaftSeed};
use crate::equations::gear::torque_nm;
use crate::equations::shaft::{
    bearing_reactions, equivalent_moment, key_pressure, minimum_diameter, polar_section_modulus, section_modulus,
    BearingReactions,
};
use crate::errors::{require_positive, CalcResult};
use crate::materials::{Material, MaterialCategory};
use crate::tables::{keyway_for_diameter, shaft_extension, standard_shaft_diameter, Keyway, ShaftExtension};

/// Hub length as a multiple of the shaft diameter
pub const HUB_LENGTH_RATIO: f64 = 1.2;

/// Key pressure safety below which the keyway is flagged
pub const MIN_KEY_SAFETY: f64 = 1.0;

/// Parallel key end form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum KeywayStyle {
    /// Round ends; the bearing length loses one key width
    #[default]
    A,
    /// Square ends; full hub length bears
    B,
}

/// Optional fatigue scaling of the bending moment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FatigueCorrection {
    #[default]
    Disabled,
    /// Scale bending by σK/σD; needs a material with a durability limit
    UltimateToDurability,
}

/// Side of the gear whose vertical moment enters Mb.
///
/// With an axial force the couple Fa·d/2 makes the vertical moment jump at
/// the gear, so the two sides differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum VerticalMoment {
    /// The larger of |RA_V·l1| and |RB_V·l2|
    #[default]
    LargerSide,
    /// |RA_V·l1| only
    BearingA,
}

impl VerticalMoment {
    fn at_gear(self, reactions: &BearingReactions, l1_mm: f64, l2_mm: f64) -> f64 {
        let a_side = (reactions.a_vertical_n * l1_mm).abs();
        match self {
            VerticalMoment::LargerSide => a_side.max((reactions.b_vertical_n * l2_mm).abs()),
            VerticalMoment::BearingA => a_side,
        }
    }
}

fn default_material_category() -> MaterialCategory {
    MaterialCategory::General
}

fn default_shaft_safety() -> f64 {
    2.0
}

/// Input parameters for shaft sizing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "power_kw": 7.12,
///   "speed_rpm": 362.5,
///   "forces": {
///     "tangential_n": 954.3,
///     "radial_n": 359.6,
///     "axial_n": 255.7,
///     "pitch_diameter_mm": 414.1
///   },
///   "l1_mm": 60.0,
///   "l2_mm": 90.0,
///   "material": "DIN 17 200, Ck 45",
///   "safety_factor": 2.0,
///   "keyway_style": "A"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShaftInput {
    /// Transmitted power P (kW)
    pub power_kw: f64,
    /// Shaft speed n (rpm)
    pub speed_rpm: f64,
    /// Mesh forces of the gear on this shaft
    pub forces: GearForces,
    /// Bearing A to gear (mm)
    pub l1_mm: f64,
    /// Gear to bearing B (mm)
    pub l2_mm: f64,
    /// Shaft material name
    pub material: String,
    #[serde(default = "default_material_category")]
    pub material_category: MaterialCategory,
    /// Required safety against yield
    #[serde(default = "default_shaft_safety")]
    pub safety_factor: f64,
    #[serde(default)]
    pub keyway_style: KeywayStyle,
    #[serde(default)]
    pub fatigue_correction: FatigueCorrection,
    #[serde(default)]
    pub vertical_moment: VerticalMoment,
}

impl ShaftInput {
    /// Input with a general-structural material, safety 2.0, form A key and
    /// no fatigue correction
    pub fn new(
        power_kw: f64,
        speed_rpm: f64,
        forces: GearForces,
        l1_mm: f64,
        l2_mm: f64,
        material: impl Into<String>,
    ) -> Self {
        ShaftInput {
            power_kw,
            speed_rpm,
            forces,
            l1_mm,
            l2_mm,
            material: material.into(),
            material_category: default_material_category(),
            safety_factor: default_shaft_safety(),
            keyway_style: KeywayStyle::default(),
            fatigue_correction: FatigueCorrection::default(),
            vertical_moment: VerticalMoment::default(),
        }
    }

    /// Input seeded from a gear stage's output shaft
    pub fn from_seed(seed: &ShaftSeed, l1_mm: f64, l2_mm: f64, material: impl Into<String>) -> Self {
        ShaftInput::new(seed.power_kw, seed.speed_rpm, seed.forces, l1_mm, l2_mm, material)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("power_kw", self.power_kw)?;
        require_positive("speed_rpm", self.speed_rpm)?;
        require_positive("l1_mm", self.l1_mm)?;
        require_positive("l2_mm", self.l2_mm)?;
        require_positive("safety_factor", self.safety_factor)?;
        require_positive("forces.pitch_diameter_mm", self.forces.pitch_diameter_mm)?;
        Material::lookup(self.material_category, &self.material)?;
        Ok(())
    }
}

/// Moments at the gear (N·mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShaftMoments {
    /// Vertical plane bending moment
    pub vertical_nmm: f64,
    /// Horizontal plane bending moment
    pub horizontal_nmm: f64,
    /// Resultant bending moment Mb
    pub bending_nmm: f64,
    /// Torque T
    pub torque_nmm: f64,
    /// Equivalent moment Meq
    pub equivalent_nmm: f64,
}

/// Key flank pressure check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeywayCheck {
    /// Hub length 1.2·d (mm)
    pub hub_length_mm: f64,
    /// Bearing length after the end-form deduction (mm)
    pub effective_length_mm: f64,
    /// Circumferential force at the shaft surface (N)
    pub force_n: f64,
    /// Flank pressure p (N/mm²)
    pub pressure_mpa: f64,
    /// Allowable pressure σAk/S (N/mm²)
    pub allowable_pressure_mpa: f64,
    pub safety_factor: f64,
    pub is_safe: bool,
}

/// Stresses at the standard diameter (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShaftStresses {
    /// Mb / W
    pub bending_mpa: f64,
    /// Meq / W
    pub equivalent_mpa: f64,
    /// T / Wp
    pub shear_mpa: f64,
}

/// Result of shaft sizing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShaftResult {
    /// Transmitted torque (N·m)
    pub torque_nm: f64,
    pub reactions: BearingReactions,
    pub moments: ShaftMoments,
    /// Bending multiplier k (1.0 unless fatigue-corrected)
    pub fatigue_multiplier: f64,
    /// Allowable stress σAk/S (N/mm²)
    pub allowable_stress_mpa: f64,
    pub minimum_diameter_mm: f64,
    pub standard_diameter_mm: f64,
    /// Minimum diameter beyond the standard series
    pub exceeds_standard_series: bool,
    pub keyway: Keyway,
    pub keyway_check: KeywayCheck,
    pub extension: ShaftExtension,
    pub stresses: ShaftStresses,
    /// Bending stress below the allowable stress at the standard diameter
    pub is_safe: bool,
}

fn fatigue_multiplier(correction: FatigueCorrection, material: &Material) -> f64 {
    match correction {
        FatigueCorrection::Disabled => 1.0,
        FatigueCorrection::UltimateToDurability => match material.durability_limit_mpa {
            Some(limit) if limit > 0.0 => material.ultimate_strength_mpa / limit,
            _ => {
                log::warn!(
                    "{} has no durability limit, fatigue correction skipped",
                    material.name
                );
                1.0
            }
        },
    }
}

/// Size a gear shaft.
///
/// # Errors
///
/// `MaterialNotFound` when the material is not in the requested catalog.
pub fn size_shaft(input: &ShaftInput) -> CalcResult<ShaftResult> {
    let material = Material::lookup(input.material_category, &input.material)?;
    let forces = &input.forces;

    let torque = torque_nm(input.power_kw, input.speed_rpm);
    let torque_nmm = torque * 1000.0;

    let reactions = bearing_reactions(
        forces.tangential_n,
        forces.radial_n,
        forces.axial_n,
        forces.pitch_diameter_mm,
        input.l1_mm,
        input.l2_mm,
    );

    let vertical = input.vertical_moment.at_gear(&reactions, input.l1_mm, input.l2_mm);
    let horizontal = reactions.a_horizontal_n * input.l1_mm;
    let bending = vertical.hypot(horizontal);

    let k = fatigue_multiplier(input.fatigue_correction, &material);
    let equivalent = equivalent_moment(bending, torque_nmm, k);

    let allowable = material.yield_strength_mpa / input.safety_factor;
    let d_min = minimum_diameter(equivalent, allowable);
    let pick = standard_shaft_diameter(d_min);
    let d = pick.value;
    if pick.exceeds_series {
        log::warn!(
            "required shaft diameter {:.1} mm exceeds the standard series, using {} mm",
            d_min,
            d
        );
    }

    let keyway = keyway_for_diameter(d);
    let hub_length = HUB_LENGTH_RATIO * d;
    let effective_length = match input.keyway_style {
        KeywayStyle::A => hub_length - keyway.b,
        KeywayStyle::B => hub_length,
    };
    let pressure = key_pressure(torque, d, effective_length, keyway.t2);
    let key_safety = allowable / pressure;

    log::debug!(
        "shaft: Meq = {:.0} N·mm, d_min = {:.2} mm, d = {} mm, key {}",
        equivalent,
        d_min,
        d,
        keyway.designation()
    );

    let w = section_modulus(d);
    let stresses = ShaftStresses {
        bending_mpa: bending / w,
        equivalent_mpa: equivalent / w,
        shear_mpa: torque_nmm / polar_section_modulus(d),
    };

    Ok(ShaftResult {
        torque_nm: torque,
        reactions,
        moments: ShaftMoments {
            vertical_nmm: vertical,
            horizontal_nmm: horizontal,
            bending_nmm: bending,
            torque_nmm,
            equivalent_nmm: equivalent,
        },
        fatigue_multiplier: k,
        allowable_stress_mpa: allowable,
        minimum_diameter_mm: d_min,
        standard_diameter_mm: d,
        exceeds_standard_series: pick.exceeds_series,
        keyway,
        keyway_check: KeywayCheck {
            hub_length_mm: hub_length,
            effective_length_mm: effective_length,
            force_n: 2000.0 * torque / d,
            pressure_mpa: pressure,
            allowable_pressure_mpa: allowable,
            safety_factor: key_safety,
            is_safe: key_safety >= MIN_KEY_SAFETY,
        },
        extension: shaft_extension(d),
        stresses,
        is_safe: stresses.bending_mpa < allowable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn symmetric_input() -> ShaftInput {
        let forces = GearForces {
            tangential_n: 2000.0,
            radial_n: 800.0,
            axial_n: 0.0,
            pitch_diameter_mm: 200.0,
        };
        let mut input = ShaftInput::new(5.5, 300.0, forces, 60.0, 60.0, "DIN 17 100, St 37");
        input.safety_factor = 2.0;
        input
    }

    #[test]
    fn test_symmetric_reactions() {
        let r = size_shaft(&symmetric_input()).unwrap();
        assert_relative_eq!(r.reactions.a_vertical_n, 400.0);
        assert_relative_eq!(r.reactions.b_vertical_n, 400.0);
        assert_relative_eq!(r.reactions.a_horizontal_n, 1000.0);
        assert_relative_eq!(r.reactions.b_horizontal_n, 1000.0);
    }

    #[test]
    fn test_reference_shaft() {
        let r = size_shaft(&symmetric_input()).unwrap();

        assert_relative_eq!(r.torque_nm, 175.0833, epsilon = 1e-4);
        assert_relative_eq!(r.moments.vertical_nmm, 24000.0);
        assert_relative_eq!(r.moments.horizontal_nmm, 60000.0);
        assert_relative_eq!(r.moments.bending_nmm, 64621.98, epsilon = 1e-2);
        assert_relative_eq!(r.moments.equivalent_nmm, 164823.03, epsilon = 1e-2);
        assert_relative_eq!(r.allowable_stress_mpa, 115.0);
        assert_relative_eq!(r.minimum_diameter_mm, 24.4403, epsilon = 1e-4);
        assert_eq!(r.standard_diameter_mm, 25.0);
        assert!(!r.exceeds_standard_series);

        assert_relative_eq!(r.stresses.bending_mpa, 42.127, epsilon = 1e-3);
        assert_relative_eq!(r.stresses.equivalent_mpa, 107.448, epsilon = 1e-3);
        assert_relative_eq!(r.stresses.shear_mpa, 57.068, epsilon = 1e-3);
        assert!(r.is_safe);
    }

    #[test]
    fn test_keyway_and_extension() {
        let r = size_shaft(&symmetric_input()).unwrap();

        assert_eq!((r.keyway.b, r.keyway.h, r.keyway.t2), (8.0, 7.0, 3.3));
        assert_relative_eq!(r.keyway_check.hub_length_mm, 30.0);
        assert_relative_eq!(r.keyway_check.effective_length_mm, 22.0);
        assert_relative_eq!(r.keyway_check.pressure_mpa, 192.929, epsilon = 1e-3);
        assert_relative_eq!(r.keyway_check.safety_factor, 0.59607, epsilon = 1e-5);
        assert!(!r.keyway_check.is_safe);

        assert_eq!(r.extension.diameter_mm, 25.0);
        assert_eq!(r.extension.length_mm, 60.0);
    }

    #[test]
    fn test_square_key_uses_full_hub() {
        let mut input = symmetric_input();
        input.keyway_style = KeywayStyle::B;
        let b = size_shaft(&input).unwrap();
        let a = size_shaft(&symmetric_input()).unwrap();

        assert_relative_eq!(b.keyway_check.effective_length_mm, 30.0);
        assert!(b.keyway_check.pressure_mpa < a.keyway_check.pressure_mpa);
    }

    #[test]
    fn test_axial_force_raises_moment() {
        let mut input = symmetric_input();
        input.forces.axial_n = 600.0;
        let with = size_shaft(&input).unwrap();
        let without = size_shaft(&symmetric_input()).unwrap();

        // RB_V = (800·60 + 600·100) / 120 = 900, B side governs
        assert_relative_eq!(with.reactions.b_vertical_n, 900.0);
        assert_relative_eq!(with.moments.vertical_nmm, 54000.0);
        assert!(with.moments.bending_nmm > without.moments.bending_nmm);
    }

    #[test]
    fn test_vertical_moment_from_bearing_a() {
        let mut input = symmetric_input();
        input.forces.axial_n = 600.0;
        input.vertical_moment = VerticalMoment::BearingA;
        let r = size_shaft(&input).unwrap();

        // RA_V = (800·60 − 600·100) / 120 = −100
        assert_relative_eq!(r.reactions.a_vertical_n, -100.0);
        assert_relative_eq!(r.moments.vertical_nmm, 6000.0);
        assert_relative_eq!(r.moments.bending_nmm, 6000f64.hypot(60000.0), epsilon = 1e-6);

        // Without an axial force both rules agree
        let mut plain = symmetric_input();
        plain.vertical_moment = VerticalMoment::BearingA;
        let a = size_shaft(&plain).unwrap();
        let larger = size_shaft(&symmetric_input()).unwrap();
        assert_relative_eq!(a.moments.bending_nmm, larger.moments.bending_nmm);
    }

    #[test]
    fn test_fatigue_correction() {
        let mut input = symmetric_input();
        input.material = "DIN 17 200, Ck 45".to_string();
        input.material_category = MaterialCategory::Gear;
        input.fatigue_correction = FatigueCorrection::UltimateToDurability;
        let r = size_shaft(&input).unwrap();

        let ck45 = Material::gear("DIN 17 200, Ck 45").unwrap();
        let k = ck45.ultimate_strength_mpa / ck45.durability_or_zero();
        assert_relative_eq!(r.fatigue_multiplier, k);
        assert!(r.fatigue_multiplier > 1.0);

        // General materials carry no durability limit: skipped
        let mut general = symmetric_input();
        general.fatigue_correction = FatigueCorrection::UltimateToDurability;
        assert_eq!(size_shaft(&general).unwrap().fatigue_multiplier, 1.0);
    }

    #[test]
    fn test_oversized_shaft_flagged() {
        let mut input = symmetric_input();
        input.power_kw = 400.0;
        input.speed_rpm = 20.0;
        let r = size_shaft(&input).unwrap();
        assert!(r.exceeds_standard_series);
        assert_eq!(r.standard_diameter_mm, 120.0);
    }

    #[test]
    fn test_unknown_material() {
        let mut input = symmetric_input();
        input.material = "Unobtainium".to_string();
        assert_eq!(size_shaft(&input).unwrap_err().error_code(), "MATERIAL_NOT_FOUND");
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_validate() {
        assert!(symmetric_input().validate().is_ok());
        let mut input = symmetric_input();
        input.l2_mm = 0.0;
        assert_eq!(input.validate().unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_defaults_on_deserialize() {
        let json = r#"{
            "power_kw": 5.5, "speed_rpm": 300,
            "forces": { "tangential_n": 2000, "radial_n": 800, "axial_n": 0, "pitch_diameter_mm": 200 },
            "l1_mm": 60, "l2_mm": 60, "material": "DIN 17 100, St 37"
        }"#;
        let parsed: ShaftInput = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.material_category, MaterialCategory::General);
        assert_eq!(parsed.keyway_style, KeywayStyle::A);
        assert_eq!(parsed.fatigue_correction, FatigueCorrection::Disabled);
        assert_eq!(parsed.safety_factor, 2.0);
        assert_eq!(parsed.vertical_moment, VerticalMoment::LargerSide);

        let a_side: ShaftInput =
            serde_json::from_str(&json.replace("\"material\"", "\"vertical_moment\": \"BearingA\", \"material\"")).unwrap();
        assert_eq!(a_side.vertical_moment, VerticalMoment::BearingA);
    }
}
