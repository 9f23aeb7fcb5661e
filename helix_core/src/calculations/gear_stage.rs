//! # Helical Gear Stage Sizing
//!
//! Sizes one external helical gear pair: required normal module from tooth-root
//! bending and from flank surface pressure, the standard module, geometry,
//! mesh forces and the achieved safety factors of pinion and gear.
//!
//! ## Procedure
//!
//! 1. T = 9550·P/n, z2 = round(z1·i)
//! 2. Kf from z/cos³β, Kb from β
//! 3. Bending module against σem = σD·Kd / (S_F·Kc)
//! 4. Surface module against Pem = PhD / S_H
//! 5. mn = smallest standard module ≥ max(both), unless overridden
//! 6. Geometry and forces at mn
//! 7. Safety factors at mn for pinion and gear
//!
//! The pinion governs the module requirement (it carries the larger form
//! factor). The gear shows up through its own safety factors at the selected
//! module.
//!
//! ## Example
//!
//! ```rust
//! use helix_core::calculations::gear_stage::{size_stage, StageInput, GoverningCriterion};
//! use helix_core::factors::DesignConstants;
//!
//! let input = StageInput::new(7.5, 1450.0, 4.0, 15.0, "DIN 17 200, Ck 45", 0.6);
//! let result = size_stage(&input, &DesignConstants::default()).unwrap();
//!
//! assert_eq!(result.gear_teeth, 80);
//! assert_eq!(result.module_mm, 5.0);
//! assert_eq!(result.governing, GoverningCriterion::SurfacePressure);
//! assert!(result.safety.surface_pinion >= 1.5);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::ratio::{mating_teeth, validate_pinion_teeth};
use crate::equations::gear::{
    bending_module, bending_stress, equivalent_tooth_count, material_factor, mesh_forces, pitch_diameter,
    ratio_factor, surface_module, surface_pressure, torque_nm, transverse_contact_ratio,
};
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::factors::{working_factor, DesignConstants, DrivenLoad, LoadDirection, PrimeMover};
use crate::materials::Material;
use crate::tables::{form_factor, helix_angle_factor, standard_module};

pub(crate) fn default_notch_factor() -> f64 {
    1.0
}

pub(crate) fn default_working_factor() -> f64 {
    working_factor(PrimeMover::default(), DrivenLoad::default())
}

pub(crate) fn default_safety() -> f64 {
    1.5
}

/// How the normal module is chosen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum ModuleChoice {
    /// Smallest standard module covering both strength criteria
    #[default]
    Automatic,
    /// Use this module verbatim, bypassing the standard series. Adequacy is
    /// then shown only by the safety factors. Values ≤ 0 fall back to
    /// `Automatic`.
    Override(f64),
}

/// Strength criterion that set the theoretical module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoverningCriterion {
    /// Tooth-root bending strength
    Bending,
    /// Flank surface durability
    SurfacePressure,
}

impl GoverningCriterion {
    pub fn display_name(&self) -> &'static str {
        match self {
            GoverningCriterion::Bending => "Tooth-root bending",
            GoverningCriterion::SurfacePressure => "Surface pressure",
        }
    }
}

/// Input parameters for one gear stage.
///
/// ## JSON Example
///
/// ```json
/// {
///   "power_kw": 7.5,
///   "speed_rpm": 1450,
///   "ratio": 4.0,
///   "helix_angle_deg": 15,
///   "pinion_material": "DIN 17 200, Ck 45",
///   "gear_material": "DIN 17 200, Ck 35",
///   "width_factor": 0.6,
///   "module": { "Override": 4.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageInput {
    /// Transmitted power at the pinion (kW)
    pub power_kw: f64,
    /// Pinion speed (rpm)
    pub speed_rpm: f64,
    /// Nominal stage ratio; the gear tooth count is rounded from it
    pub ratio: f64,
    /// Helix angle β (degrees), 0 for spur gears
    pub helix_angle_deg: f64,
    /// Normal pressure angle αn (degrees); `None` uses the engine default
    #[serde(default)]
    pub pressure_angle_deg: Option<f64>,
    /// Gear-grade pinion material name
    pub pinion_material: String,
    /// Gear-grade wheel material name
    pub gear_material: String,
    /// Notch factor Kc at the tooth root
    #[serde(default = "default_notch_factor")]
    pub notch_factor: f64,
    #[serde(default)]
    pub load_direction: LoadDirection,
    /// Face width as a fraction of the pinion pitch diameter (ψd = b/d1)
    pub width_factor: f64,
    /// Working (application) factor Ko
    #[serde(default = "default_working_factor")]
    pub working_factor: f64,
    /// Dynamic factor Kv; `None` uses the engine default
    #[serde(default)]
    pub dynamic_factor: Option<f64>,
    /// Pinion teeth z1; `None` uses the engine default
    #[serde(default)]
    pub pinion_teeth: Option<u32>,
    /// Required safety against root bending
    #[serde(default = "default_safety")]
    pub bending_safety: f64,
    /// Required safety against surface pressure
    #[serde(default = "default_safety")]
    pub surface_safety: f64,
    #[serde(default)]
    pub module: ModuleChoice,
}

impl StageInput {
    /// Stage with one material for pinion and gear and default factors
    pub fn new(
        power_kw: f64,
        speed_rpm: f64,
        ratio: f64,
        helix_angle_deg: f64,
        material: &str,
        width_factor: f64,
    ) -> Self {
        StageInput {
            power_kw,
            speed_rpm,
            ratio,
            helix_angle_deg,
            pressure_angle_deg: None,
            pinion_material: material.to_string(),
            gear_material: material.to_string(),
            notch_factor: default_notch_factor(),
            load_direction: LoadDirection::default(),
            width_factor,
            working_factor: default_working_factor(),
            dynamic_factor: None,
            pinion_teeth: None,
            bending_safety: default_safety(),
            surface_safety: default_safety(),
            module: ModuleChoice::Automatic,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("power_kw", self.power_kw)?;
        require_positive("speed_rpm", self.speed_rpm)?;
        require_positive("ratio", self.ratio)?;
        require_positive("width_factor", self.width_factor)?;
        require_positive("notch_factor", self.notch_factor)?;
        require_positive("working_factor", self.working_factor)?;
        require_positive("bending_safety", self.bending_safety)?;
        require_positive("surface_safety", self.surface_safety)?;
        if let Some(kv) = self.dynamic_factor {
            require_positive("dynamic_factor", kv)?;
        }
        if let Some(alpha) = self.pressure_angle_deg {
            require_positive("pressure_angle_deg", alpha)?;
        }
        if !(0.0..45.0).contains(&self.helix_angle_deg) {
            return Err(CalcError::invalid_input(
                "helix_angle_deg",
                self.helix_angle_deg.to_string(),
                "Helix angle must be in [0, 45) degrees",
            ));
        }
        validate_pinion_teeth("pinion_teeth", self.pinion_teeth)?;
        Material::gear(&self.pinion_material)?;
        Material::gear(&self.gear_material)?;
        Ok(())
    }
}

/// Force system at one mesh plus the diameter it acts on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GearForces {
    /// Tangential force Ft (N)
    pub tangential_n: f64,
    /// Radial force Fr (N)
    pub radial_n: f64,
    /// Axial force Fa (N)
    pub axial_n: f64,
    /// Pitch diameter the forces act on (mm)
    pub pitch_diameter_mm: f64,
}

/// Pair geometry at the selected module (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageGeometry {
    pub pinion_pitch_diameter_mm: f64,
    pub gear_pitch_diameter_mm: f64,
    /// d + 2·mn
    pub pinion_tip_diameter_mm: f64,
    pub gear_tip_diameter_mm: f64,
    /// d − 2.5·mn
    pub pinion_root_diameter_mm: f64,
    pub gear_root_diameter_mm: f64,
    /// (d1 + d2) / 2
    pub center_distance_mm: f64,
    /// ψd·d1
    pub face_width_mm: f64,
    /// mn / cos β
    pub transverse_module_mm: f64,
}

/// Factors that entered the sizing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageFactors {
    /// Kf of the pinion
    pub form_factor_pinion: f64,
    /// Kf of the gear
    pub form_factor_gear: f64,
    /// Kb
    pub helix_angle_factor: f64,
    /// Ke
    pub material_factor: f64,
    /// Ki
    pub ratio_factor: f64,
    /// Kα
    pub rolling_factor: f64,
    /// εα
    pub contact_ratio: f64,
    /// Zε
    pub contact_factor: f64,
    /// Ko
    pub working_factor: f64,
    /// Kv
    pub dynamic_factor: f64,
    /// Kc
    pub notch_factor: f64,
    /// Kd
    pub load_direction_factor: f64,
}

/// Stresses and achieved safety factors at the selected module
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageSafety {
    /// Allowable root stress of the pinion σD·Kd/(S_F·Kc) (N/mm²)
    pub allowable_bending_mpa: f64,
    /// Allowable surface pressure of the pinion PhD/S_H (N/mm²)
    pub allowable_surface_mpa: f64,
    pub bending_stress_pinion_mpa: f64,
    pub bending_stress_gear_mpa: f64,
    /// Flank pressure, shared by both flanks (N/mm²)
    pub surface_pressure_mpa: f64,
    pub bending_pinion: f64,
    pub bending_gear: f64,
    pub surface_pinion: f64,
    pub surface_gear: f64,
}

impl StageSafety {
    /// Smallest of the four achieved safety factors
    pub fn minimum(&self) -> f64 {
        self.bending_pinion
            .min(self.bending_gear)
            .min(self.surface_pinion)
            .min(self.surface_gear)
    }
}

/// Sizing result for one gear pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleStageResult {
    /// Pinion torque (N·m)
    pub torque_nm: f64,
    /// Pinion speed (rpm)
    pub speed_rpm: f64,
    pub helix_angle_deg: f64,
    pub pinion_teeth: u32,
    pub gear_teeth: u32,
    /// z2 / z1
    pub ratio: f64,
    /// Module required by root bending (mm)
    pub bending_module_mm: f64,
    /// Module required by surface pressure (mm)
    pub surface_module_mm: f64,
    /// max(bending, surface) (mm)
    pub theoretical_module_mm: f64,
    pub governing: GoverningCriterion,
    /// Selected normal module mn (mm)
    pub module_mm: f64,
    pub module_overridden: bool,
    /// The requirement exceeded the largest standard module
    pub exceeds_standard_series: bool,
    pub geometry: StageGeometry,
    /// Forces at the pinion pitch circle
    pub forces: GearForces,
    pub factors: StageFactors,
    pub safety: StageSafety,
}

/// Values the shaft calculation of the driven (gear) shaft starts from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShaftSeed {
    pub power_kw: f64,
    pub speed_rpm: f64,
    /// Mesh forces at the gear pitch circle
    pub forces: GearForces,
}

impl SingleStageResult {
    /// True when all four achieved safety factors reach the required values
    pub fn meets(&self, bending_safety: f64, surface_safety: f64) -> bool {
        self.safety.bending_pinion >= bending_safety
            && self.safety.bending_gear >= bending_safety
            && self.safety.surface_pinion >= surface_safety
            && self.safety.surface_gear >= surface_safety
    }

    /// Seed for sizing the gear's shaft: speed n/i, gear torque T·i, the same
    /// mesh forces acting on the gear pitch diameter
    pub fn output_shaft_seed(&self) -> ShaftSeed {
        let speed_rpm = self.speed_rpm / self.ratio;
        let gear_torque_nm = self.torque_nm * self.ratio;
        ShaftSeed {
            power_kw: gear_torque_nm * speed_rpm / crate::equations::gear::TORQUE_CONSTANT,
            speed_rpm,
            forces: GearForces {
                pitch_diameter_mm: self.geometry.gear_pitch_diameter_mm,
                ..self.forces
            },
        }
    }
}

/// Size one helical gear stage.
///
/// Fails only when a material name is not in the gear-grade catalog.
/// Non-positive speeds, ratios or width factors propagate as `NaN`/`inf`;
/// call [`StageInput::validate`] first for untrusted input.
pub fn size_stage(input: &StageInput, constants: &DesignConstants) -> CalcResult<SingleStageResult> {
    let pinion = Material::gear(&input.pinion_material)?;
    let gear = Material::gear(&input.gear_material)?;

    let torque = torque_nm(input.power_kw, input.speed_rpm);
    let torque_nmm = torque * 1000.0;

    let pinion_teeth = input.pinion_teeth.unwrap_or(constants.default_pinion_teeth);
    let gear_teeth = mating_teeth(pinion_teeth, input.ratio);
    let z1 = pinion_teeth as f64;
    let z2 = gear_teeth as f64;
    let ratio = z2 / z1;

    let beta = input.helix_angle_deg.to_radians();
    let alpha_n = input
        .pressure_angle_deg
        .unwrap_or(constants.default_pressure_angle_deg)
        .to_radians();
    let ko = input.working_factor;
    let kv = input.dynamic_factor.unwrap_or(constants.default_dynamic_factor);
    let kc = input.notch_factor;
    let kd = input.load_direction.factor(constants);
    let psi = input.width_factor;

    // Root bending
    let kf1 = form_factor(equivalent_tooth_count(z1, beta));
    let kf2 = form_factor(equivalent_tooth_count(z2, beta));
    let allowable_bending_mpa = pinion.durability_or_zero() * kd / (input.bending_safety * kc);
    let bending_module_mm = bending_module(torque_nmm, beta, kf1, ko, kv, z1, psi, allowable_bending_mpa);

    // Surface pressure
    let kb = helix_angle_factor(input.helix_angle_deg);
    let ke = material_factor(pinion.elastic_modulus_mpa, gear.elastic_modulus_mpa);
    let ki = ratio_factor(ratio);
    let contact_ratio = transverse_contact_ratio(z1, z2, alpha_n, beta);
    let z_eps = constants.contact_factor.value(contact_ratio);
    let k_product = ke * constants.rolling_factor * kb * ki * z_eps;
    let allowable_surface_mpa = pinion.surface_pressure_or_zero() / input.surface_safety;
    let surface_module_mm = surface_module(torque_nmm, beta, k_product, ko, kv, z1, psi, allowable_surface_mpa);

    let (theoretical_module_mm, governing) = if bending_module_mm >= surface_module_mm {
        (bending_module_mm, GoverningCriterion::Bending)
    } else {
        (surface_module_mm, GoverningCriterion::SurfacePressure)
    };

    let (module_mm, module_overridden, exceeds_standard_series) = match input.module {
        ModuleChoice::Override(m) if m > 0.0 => (m, true, false),
        choice => {
            if let ModuleChoice::Override(m) = choice {
                log::warn!("module override {} ignored, selecting a standard module", m);
            }
            let pick = standard_module(theoretical_module_mm);
            if pick.exceeds_series {
                log::warn!(
                    "required module {:.3} mm exceeds the standard series, using {} mm",
                    theoretical_module_mm,
                    pick.value
                );
            }
            (pick.value, false, pick.exceeds_series)
        }
    };

    log::debug!(
        "stage {}:{} bending mn {:.3}, surface mn {:.3}, {} governs, selected {} mm",
        pinion_teeth,
        gear_teeth,
        bending_module_mm,
        surface_module_mm,
        governing.display_name(),
        module_mm
    );

    // Geometry
    let d1 = pitch_diameter(module_mm, z1, beta);
    let d2 = pitch_diameter(module_mm, z2, beta);
    let geometry = StageGeometry {
        pinion_pitch_diameter_mm: d1,
        gear_pitch_diameter_mm: d2,
        pinion_tip_diameter_mm: d1 + 2.0 * module_mm,
        gear_tip_diameter_mm: d2 + 2.0 * module_mm,
        pinion_root_diameter_mm: d1 - 2.5 * module_mm,
        gear_root_diameter_mm: d2 - 2.5 * module_mm,
        center_distance_mm: (d1 + d2) / 2.0,
        face_width_mm: psi * d1,
        transverse_module_mm: module_mm / beta.cos(),
    };

    let mesh = mesh_forces(torque, d1, alpha_n, beta);
    let forces = GearForces {
        tangential_n: mesh.tangential_n,
        radial_n: mesh.radial_n,
        axial_n: mesh.axial_n,
        pitch_diameter_mm: d1,
    };

    // Achieved safety at the selected module
    let bending_stress_pinion_mpa = bending_stress(torque_nmm, beta, kf1, ko, kv, z1, psi, module_mm);
    let bending_stress_gear_mpa = bending_stress(torque_nmm, beta, kf2, ko, kv, z1, psi, module_mm);
    let surface_pressure_mpa = surface_pressure(torque_nmm, beta, k_product, ko, kv, z1, psi, module_mm);

    let safety = StageSafety {
        allowable_bending_mpa,
        allowable_surface_mpa,
        bending_stress_pinion_mpa,
        bending_stress_gear_mpa,
        surface_pressure_mpa,
        bending_pinion: pinion.durability_or_zero() * kd / (kc * bending_stress_pinion_mpa),
        bending_gear: gear.durability_or_zero() * kd / (kc * bending_stress_gear_mpa),
        surface_pinion: pinion.surface_pressure_or_zero() / surface_pressure_mpa,
        surface_gear: gear.surface_pressure_or_zero() / surface_pressure_mpa,
    };

    Ok(SingleStageResult {
        torque_nm: torque,
        speed_rpm: input.speed_rpm,
        helix_angle_deg: input.helix_angle_deg,
        pinion_teeth,
        gear_teeth,
        ratio,
        bending_module_mm,
        surface_module_mm,
        theoretical_module_mm,
        governing,
        module_mm,
        module_overridden,
        exceeds_standard_series,
        geometry,
        forces,
        factors: StageFactors {
            form_factor_pinion: kf1,
            form_factor_gear: kf2,
            helix_angle_factor: kb,
            material_factor: ke,
            ratio_factor: ki,
            rolling_factor: constants.rolling_factor,
            contact_ratio,
            contact_factor: z_eps,
            working_factor: ko,
            dynamic_factor: kv,
            notch_factor: kc,
            load_direction_factor: kd,
        },
        safety,
    })
}
