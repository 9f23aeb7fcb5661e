//! # Design Factors
//!
//! Empirical factors that enter the gear sizing formulas, plus the
//! configurable constants of the calculation engine.
//!
//! ## Factor Summary
//!
//! | Factor | Description                          | Typical Values |
//! |--------|--------------------------------------|----------------|
//! | Ko     | Working (application shock) factor   | 1.00 - 2.25    |
//! | Kv     | Dynamic factor                       | 1.2            |
//! | Kc     | Notch factor at the tooth root       | 1.0 - 1.6      |
//! | Kd     | Load-direction derating of σD        | 1.0 or 0.7     |
//! | Kα     | Rolling (zone) factor                | 1.76           |
//! | Zε     | Contact-ratio factor √((4 − εα)/3)   | 0.85 - 0.95    |
//!
//! Kf (form factor) and Kb (helix-angle factor) are table lookups, see
//! [`crate::tables`].

use serde::{Deserialize, Serialize};

// ============================================================================
// Working Factor (Ko)
// ============================================================================

/// Driving machine for the working factor matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PrimeMover {
    /// Electric motor, turbine
    #[default]
    ElectricMotor,
    /// Multi-cylinder internal combustion engine
    MultiCylinderEngine,
    /// Single-cylinder internal combustion engine
    SingleCylinderEngine,
}

impl PrimeMover {
    pub const ALL: [PrimeMover; 3] = [
        PrimeMover::ElectricMotor,
        PrimeMover::MultiCylinderEngine,
        PrimeMover::SingleCylinderEngine,
    ];

    fn row(&self) -> usize {
        match self {
            PrimeMover::ElectricMotor => 0,
            PrimeMover::MultiCylinderEngine => 1,
            PrimeMover::SingleCylinderEngine => 2,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrimeMover::ElectricMotor => "Electric motor",
            PrimeMover::MultiCylinderEngine => "Multi-cylinder engine",
            PrimeMover::SingleCylinderEngine => "Single-cylinder engine",
        }
    }
}

/// Shock class of the driven machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DrivenLoad {
    /// Uniform load (generators, conveyors with uniform feed)
    Uniform,
    /// Moderate shock
    #[default]
    ModerateShock,
    /// Heavy shock (crushers, presses)
    HeavyShock,
}

impl DrivenLoad {
    pub const ALL: [DrivenLoad; 3] = [
        DrivenLoad::Uniform,
        DrivenLoad::ModerateShock,
        DrivenLoad::HeavyShock,
    ];

    fn column(&self) -> usize {
        match self {
            DrivenLoad::Uniform => 0,
            DrivenLoad::ModerateShock => 1,
            DrivenLoad::HeavyShock => 2,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DrivenLoad::Uniform => "Uniform",
            DrivenLoad::ModerateShock => "Moderate shock",
            DrivenLoad::HeavyShock => "Heavy shock",
        }
    }
}

/// Ko matrix, rows by prime mover, columns by driven load
const WORKING_FACTOR_MATRIX: [[f64; 3]; 3] = [
    [1.00, 1.25, 1.50],
    [1.25, 1.50, 1.75],
    [1.75, 2.00, 2.25],
];

/// Working factor Ko for a prime mover / driven load combination
pub fn working_factor(prime_mover: PrimeMover, load: DrivenLoad) -> f64 {
    WORKING_FACTOR_MATRIX[prime_mover.row()][load.column()]
}

// ============================================================================
// Load Direction (Kd)
// ============================================================================

/// Bending duty of the teeth.
///
/// Idler gears and reversing drives see fully reversed root stress, which
/// lowers the usable share of the pulsating durability limit σD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LoadDirection {
    /// Teeth loaded on one flank only (pulsating bending)
    #[default]
    SingleDirection,
    /// Teeth loaded on both flanks (alternating bending)
    Reversing,
}

impl LoadDirection {
    /// Multiplier on the allowable bending stress
    pub fn factor(&self, constants: &DesignConstants) -> f64 {
        match self {
            LoadDirection::SingleDirection => 1.0,
            LoadDirection::Reversing => constants.reversing_load_factor,
        }
    }
}

// ============================================================================
// Contact-Ratio Factor
// ============================================================================

/// How the transverse contact ratio enters the surface-pressure formula.
///
/// The attenuating form Zε = √((4 − εα)/3) lowers the computed surface
/// pressure as more teeth share the load. `Fixed` replaces it with a constant
/// (1.0 reproduces the formula without any contact-ratio term).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum ContactFactor {
    #[default]
    Attenuating,
    Fixed(f64),
}

impl ContactFactor {
    /// Factor value for a given transverse contact ratio εα
    pub fn value(&self, contact_ratio: f64) -> f64 {
        match self {
            ContactFactor::Attenuating => ((4.0 - contact_ratio) / 3.0).max(0.0).sqrt(),
            ContactFactor::Fixed(value) => *value,
        }
    }
}

// ============================================================================
// Engine Constants
// ============================================================================

/// Configurable constants of the calculation engine.
///
/// Passed explicitly to the solvers; `Default` holds the values of the
/// reference design method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignConstants {
    /// Rolling (zone) factor Kα in the surface-pressure formula
    pub rolling_factor: f64,
    /// Contact-ratio treatment in the surface-pressure formula
    pub contact_factor: ContactFactor,
    /// Derating of σD for reversing bending
    pub reversing_load_factor: f64,
    /// Dynamic factor Kv used when an input does not specify one
    pub default_dynamic_factor: f64,
    /// Normal pressure angle αn (degrees)
    pub default_pressure_angle_deg: f64,
    /// Efficiency of one gear mesh
    pub default_mesh_efficiency: f64,
    /// Pinion tooth count used when an input does not specify one
    pub default_pinion_teeth: u32,
}

impl Default for DesignConstants {
    fn default() -> Self {
        DesignConstants {
            rolling_factor: 1.76,
            contact_factor: ContactFactor::Attenuating,
            reversing_load_factor: 0.7,
            default_dynamic_factor: 1.2,
            default_pressure_angle_deg: 20.0,
            default_mesh_efficiency: 0.95,
            default_pinion_teeth: 20,
        }
    }
}
