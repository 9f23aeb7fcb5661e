//! # Helical Gear Formulas
//!
//! Sizing relations for an external helical gear pair with unshifted,
//! full-depth teeth.
//!
//! ## Notation
//!
//! - `T` = Pinion torque (N·mm inside stress formulas)
//! - `mn` = Normal module
//! - `z1`, `z2` = Pinion and gear tooth counts
//! - `β` = Helix angle, `αn` = Normal pressure angle
//! - `ψd` = Width factor b/d1
//! - `Kf` = Form factor, `Ko` = Working factor, `Kv` = Dynamic factor
//! - `Ke` = Material factor, `Kα` = Rolling factor, `Kb` = Helix-angle factor,
//!   `Ki` = Ratio factor, `Zε` = Contact-ratio factor
//!
//! ## Root bending
//!
//! ```text
//! σ = 2·T·cos²β·Kf·Ko·Kv / (z1²·ψd·mn³)
//! ```
//!
//! ## Surface pressure
//!
//! ```text
//! p² = (Ke·Kα·Kb·Ki·Zε)² · 2·T·Ko·Kv·cos³β / (ψd·z1³·mn³)
//! ```
//!
//! Both module formulas are these relations solved for `mn` at the allowable
//! stress.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Power-to-torque constant: T[N·m] = 9550 · P[kW] / n[rpm]
pub const TORQUE_CONSTANT: f64 = 9550.0;

/// Shaft torque in N·m for a power in kW at a speed in rpm
#[inline]
pub fn torque_nm(power_kw: f64, speed_rpm: f64) -> f64 {
    TORQUE_CONSTANT * power_kw / speed_rpm
}

/// Reference (pitch) diameter d = mn·z / cos β
#[inline]
pub fn pitch_diameter(module_mm: f64, teeth: f64, helix_rad: f64) -> f64 {
    module_mm * teeth / helix_rad.cos()
}

/// Virtual spur-gear tooth count z / cos³β used for the form factor lookup
#[inline]
pub fn equivalent_tooth_count(teeth: f64, helix_rad: f64) -> f64 {
    teeth / helix_rad.cos().powi(3)
}

/// Material factor Ke = 0.59·√E_eq with E_eq = 2·E1·E2 / (E1 + E2)
#[inline]
pub fn material_factor(e1_mpa: f64, e2_mpa: f64) -> f64 {
    let e_eq = 2.0 * e1_mpa * e2_mpa / (e1_mpa + e2_mpa);
    0.59 * e_eq.sqrt()
}

/// Ratio factor Ki = √((i + 1) / i)
#[inline]
pub fn ratio_factor(ratio: f64) -> f64 {
    ((ratio + 1.0) / ratio).sqrt()
}

/// Transverse contact ratio εα of a standard helical pair.
///
/// Addendum = mn, no profile shift. The result does not depend on the module,
/// so it is evaluated at mn = 1.
///
/// ```text
/// αt = atan(tan αn / cos β)
/// εα = (√(ra1² − rb1²) + √(ra2² − rb2²) − a·sin αt) / (π·mt·cos αt)
/// ```
pub fn transverse_contact_ratio(z1: f64, z2: f64, pressure_rad: f64, helix_rad: f64) -> f64 {
    let cos_beta = helix_rad.cos();
    let alpha_t = (pressure_rad.tan() / cos_beta).atan();
    let m_t = 1.0 / cos_beta;

    let r1 = z1 * m_t / 2.0;
    let r2 = z2 * m_t / 2.0;
    let (ra1, ra2) = (r1 + 1.0, r2 + 1.0);
    let (rb1, rb2) = (r1 * alpha_t.cos(), r2 * alpha_t.cos());
    let center_distance = r1 + r2;

    let path = (ra1 * ra1 - rb1 * rb1).sqrt() + (ra2 * ra2 - rb2 * rb2).sqrt()
        - center_distance * alpha_t.sin();
    path / (PI * m_t * alpha_t.cos())
}

/// Force system at one gear mesh (N)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshForces {
    /// Tangential force Ft
    pub tangential_n: f64,
    /// Radial (separating) force Fr
    pub radial_n: f64,
    /// Axial (thrust) force Fa
    pub axial_n: f64,
}

/// Mesh forces for a torque (N·m) acting on a pitch diameter (mm).
///
/// - Ft = 2000·T / d
/// - Fr = Ft·tan αn / cos β
/// - Fa = Ft·tan β
pub fn mesh_forces(torque_nm: f64, pitch_diameter_mm: f64, pressure_rad: f64, helix_rad: f64) -> MeshForces {
    let tangential_n = 2000.0 * torque_nm / pitch_diameter_mm;
    MeshForces {
        tangential_n,
        radial_n: tangential_n * pressure_rad.tan() / helix_rad.cos(),
        axial_n: tangential_n * helix_rad.tan(),
    }
}

/// Load terms common to the bending relations: 2·T·cos²β·Kf·Ko·Kv / (z1²·ψd)
#[inline]
fn bending_load(torque_nmm: f64, helix_rad: f64, kf: f64, ko: f64, kv: f64, z1: f64, width_factor: f64) -> f64 {
    2.0 * torque_nmm * helix_rad.cos().powi(2) * kf * ko * kv / (z1 * z1 * width_factor)
}

/// Tooth-root bending stress (N/mm²) at normal module `module_mm`
#[allow(clippy::too_many_arguments)]
pub fn bending_stress(
    torque_nmm: f64,
    helix_rad: f64,
    kf: f64,
    ko: f64,
    kv: f64,
    z1: f64,
    width_factor: f64,
    module_mm: f64,
) -> f64 {
    bending_load(torque_nmm, helix_rad, kf, ko, kv, z1, width_factor) / module_mm.powi(3)
}

/// Module required so the root bending stress equals `allowable_mpa`
#[allow(clippy::too_many_arguments)]
pub fn bending_module(
    torque_nmm: f64,
    helix_rad: f64,
    kf: f64,
    ko: f64,
    kv: f64,
    z1: f64,
    width_factor: f64,
    allowable_mpa: f64,
) -> f64 {
    (bending_load(torque_nmm, helix_rad, kf, ko, kv, z1, width_factor) / allowable_mpa).cbrt()
}

/// Surface-pressure load term: K²·2·T·Ko·Kv / ψd, with K the product of
/// Ke·Kα·Kb·Ki·Zε
#[inline]
fn surface_load(torque_nmm: f64, k_product: f64, ko: f64, kv: f64, width_factor: f64) -> f64 {
    k_product * k_product * 2.0 * torque_nmm * ko * kv / width_factor
}

/// Flank surface pressure (N/mm²) at normal module `module_mm`
#[allow(clippy::too_many_arguments)]
pub fn surface_pressure(
    torque_nmm: f64,
    helix_rad: f64,
    k_product: f64,
    ko: f64,
    kv: f64,
    z1: f64,
    width_factor: f64,
    module_mm: f64,
) -> f64 {
    let d1_cubed = (module_mm * z1 / helix_rad.cos()).powi(3);
    (surface_load(torque_nmm, k_product, ko, kv, width_factor) / d1_cubed).sqrt()
}

/// Module required so the surface pressure equals `allowable_mpa`.
///
/// ```text
/// mn = (cos β / z1) · [K²·2·T·Ko·Kv / (ψd·Pem²)]^(1/3)
/// ```
#[allow(clippy::too_many_arguments)]
pub fn surface_module(
    torque_nmm: f64,
    helix_rad: f64,
    k_product: f64,
    ko: f64,
    kv: f64,
    z1: f64,
    width_factor: f64,
    allowable_mpa: f64,
) -> f64 {
    let term = surface_load(torque_nmm, k_product, ko, kv, width_factor) / (allowable_mpa * allowable_mpa);
    helix_rad.cos() / z1 * term.cbrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_torque() {
        // 11 kW at 1450 rpm
        assert_relative_eq!(torque_nm(11.0, 1450.0), 72.448, epsilon = 1e-3);
    }

    #[test]
    fn test_pitch_diameter_spur_and_helical() {
        assert_relative_eq!(pitch_diameter(2.0, 20.0, 0.0), 40.0);
        let beta = 15f64.to_radians();
        assert_relative_eq!(pitch_diameter(2.0, 20.0, beta), 41.411, epsilon = 1e-3);
    }

    #[test]
    fn test_equivalent_tooth_count() {
        assert_relative_eq!(equivalent_tooth_count(20.0, 0.0), 20.0);
        assert_relative_eq!(equivalent_tooth_count(20.0, 15f64.to_radians()), 22.192, epsilon = 1e-3);
    }

    #[test]
    fn test_material_factor_steel_pair() {
        // 0.59·√211000
        assert_relative_eq!(material_factor(211_000.0, 211_000.0), 271.02, epsilon = 1e-2);
        // Mixed pair lies between the two single-material values
        let mixed = material_factor(211_000.0, 172_000.0);
        assert!(mixed < material_factor(211_000.0, 211_000.0));
        assert!(mixed > material_factor(172_000.0, 172_000.0));
    }

    #[test]
    fn test_ratio_factor() {
        assert_relative_eq!(ratio_factor(1.0), 2f64.sqrt());
        assert_relative_eq!(ratio_factor(4.0), 1.25f64.sqrt());
    }

    #[test]
    fn test_contact_ratio_spur_reference() {
        // 20/40 spur pair, 20° → textbook value ≈ 1.635
        let eps = transverse_contact_ratio(20.0, 40.0, 20f64.to_radians(), 0.0);
        assert_relative_eq!(eps, 1.635, epsilon = 5e-3);
    }

    #[test]
    fn test_contact_ratio_falls_with_helix_angle() {
        let spur = transverse_contact_ratio(20.0, 63.0, 20f64.to_radians(), 0.0);
        let helical = transverse_contact_ratio(20.0, 63.0, 20f64.to_radians(), 15f64.to_radians());
        assert!(helical < spur);
        assert!(helical > 1.0);
    }

    #[test]
    fn test_mesh_forces() {
        let forces = mesh_forces(100.0, 100.0, 20f64.to_radians(), 0.0);
        assert_relative_eq!(forces.tangential_n, 2000.0);
        assert_relative_eq!(forces.radial_n, 2000.0 * 20f64.to_radians().tan());
        assert_relative_eq!(forces.axial_n, 0.0);

        let helical = mesh_forces(100.0, 100.0, 20f64.to_radians(), 15f64.to_radians());
        assert_relative_eq!(helical.axial_n, 2000.0 * 15f64.to_radians().tan());
    }

    #[test]
    fn test_bending_module_inverts_stress() {
        let beta = 12f64.to_radians();
        let m = bending_module(50_000.0, beta, 2.9, 1.25, 1.2, 20.0, 0.6, 150.0);
        let sigma = bending_stress(50_000.0, beta, 2.9, 1.25, 1.2, 20.0, 0.6, m);
        assert_relative_eq!(sigma, 150.0, epsilon = 1e-9);
    }

    #[test]
    fn test_surface_module_inverts_pressure() {
        let beta = 15f64.to_radians();
        let k = 271.0 * 1.76 * 0.975 * 1.11;
        let m = surface_module(50_000.0, beta, k, 1.25, 1.2, 20.0, 0.6, 300.0);
        let p = surface_pressure(50_000.0, beta, k, 1.25, 1.2, 20.0, 0.6, m);
        assert_relative_eq!(p, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bending_stress_scales_with_module_cubed() {
        let s1 = bending_stress(50_000.0, 0.0, 2.9, 1.0, 1.0, 20.0, 0.6, 2.0);
        let s2 = bending_stress(50_000.0, 0.0, 2.9, 1.0, 1.0, 20.0, 0.6, 4.0);
        assert_relative_eq!(s1 / s2, 8.0, epsilon = 1e-12);
    }
}
