//! # Machine Element Equations
//!
//! Closed-form formulas used by the calculations, kept in one place so they can
//! be verified against the design references independently of the selection
//! logic wrapped around them.
//!
//! ## Modules
//!
//! - [`gear`] - Torque, helical gear geometry, mesh forces, tooth-root bending
//!   and surface-pressure relations
//! - [`shaft`] - Bearing reactions, combined bending/torsion, keyway pressure
//! - [`bearing`] - Rolling bearing life and static load relations
//!
//! ## Units
//!
//! - Power: kW, speed: rpm
//! - Torque: N·m at the API boundary, N·mm inside stress formulas
//! - Lengths: mm, forces: N, stresses: N/mm²
//! - Angles: radians inside formulas (callers convert from degrees)
//!
//! ## References
//!
//! - Niemann/Winter, Maschinenelemente Band II (helical gear sizing)
//! - DIN 743 (shaft strength, simplified), DIN 6885 (parallel keys)
//! - ISO 281 (bearing basic rating life), ISO 76 (static load ratings)

pub mod bearing;
pub mod gear;
pub mod shaft;

pub use bearing::{l10_hours, l10_million_revolutions, required_dynamic_rating, static_equivalent_load};
pub use gear::{
    bending_module,
    bending_stress,
    equivalent_tooth_count,
    material_factor,
    mesh_forces,
    pitch_diameter,
    ratio_factor,
    surface_module,
    surface_pressure,
    torque_nm,
    transverse_contact_ratio,
    MeshForces,
};
pub use shaft::{
    bearing_reactions,
    equivalent_moment,
    key_pressure,
    minimum_diameter,
    polar_section_modulus,
    section_modulus,
    BearingReactions,
};
