//! # Shaft Formulas
//!
//! Simply supported shaft with one gear between bearings A and B.
//!
//! ```text
//!        Ft, Fr, Fa (at radius d/2)
//!   A ─────────●───────────────── B
//!   |<── l1 ──>|<────── l2 ──────>|
//! ```
//!
//! The axial force acts at the pitch radius and adds a couple Ma = Fa·d/2 to
//! the vertical plane. Bending and torsion are combined with the distortion
//! energy criterion: Mv = √(Mb² + 0.75·T²).

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Support reactions (N) in both load planes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BearingReactions {
    /// Vertical reaction at A (radial force plane)
    pub a_vertical_n: f64,
    /// Vertical reaction at B
    pub b_vertical_n: f64,
    /// Horizontal reaction at A (tangential force plane)
    pub a_horizontal_n: f64,
    /// Horizontal reaction at B
    pub b_horizontal_n: f64,
}

impl BearingReactions {
    /// Resultant radial load on bearing A
    pub fn resultant_a(&self) -> f64 {
        self.a_vertical_n.hypot(self.a_horizontal_n)
    }

    /// Resultant radial load on bearing B
    pub fn resultant_b(&self) -> f64 {
        self.b_vertical_n.hypot(self.b_horizontal_n)
    }
}

/// Reactions from moment equilibrium about A.
///
/// Forces in N, lengths and the gear diameter in mm.
///
/// ```text
/// RB_V = (Fr·l1 + Fa·d/2) / (l1 + l2),  RA_V = Fr − RB_V
/// RB_H = Ft·l1 / (l1 + l2),             RA_H = Ft − RB_H
/// ```
pub fn bearing_reactions(
    tangential_n: f64,
    radial_n: f64,
    axial_n: f64,
    gear_diameter_mm: f64,
    l1_mm: f64,
    l2_mm: f64,
) -> BearingReactions {
    let span = l1_mm + l2_mm;
    let axial_couple = axial_n * gear_diameter_mm / 2.0;

    let b_vertical_n = (radial_n * l1_mm + axial_couple) / span;
    let b_horizontal_n = tangential_n * l1_mm / span;

    BearingReactions {
        a_vertical_n: radial_n - b_vertical_n,
        b_vertical_n,
        a_horizontal_n: tangential_n - b_horizontal_n,
        b_horizontal_n,
    }
}

/// Equivalent moment Mv = √((k·Mb)² + 0.75·T²).
///
/// `k` scales the bending moment (1.0 for none). Moments and torque share a
/// unit.
#[inline]
pub fn equivalent_moment(bending: f64, torque: f64, k: f64) -> f64 {
    ((k * bending).powi(2) + 0.75 * torque * torque).sqrt()
}

/// Bending section modulus W = π·d³/32 of a solid round section (mm³)
#[inline]
pub fn section_modulus(diameter_mm: f64) -> f64 {
    PI * diameter_mm.powi(3) / 32.0
}

/// Polar section modulus Wp = π·d³/16 of a solid round section (mm³)
#[inline]
pub fn polar_section_modulus(diameter_mm: f64) -> f64 {
    PI * diameter_mm.powi(3) / 16.0
}

/// Smallest solid diameter (mm) that keeps Mv (N·mm) at or below σ (N/mm²)
#[inline]
pub fn minimum_diameter(equivalent_moment_nmm: f64, allowable_mpa: f64) -> f64 {
    (32.0 * equivalent_moment_nmm / (PI * allowable_mpa)).cbrt()
}

/// Key flank pressure (N/mm²) against the hub groove.
///
/// F = 2000·T / d, p = F / (L_eff·t2); torque in N·m, lengths in mm.
#[inline]
pub fn key_pressure(torque_nm: f64, shaft_diameter_mm: f64, effective_length_mm: f64, hub_depth_mm: f64) -> f64 {
    let force = 2000.0 * torque_nm / shaft_diameter_mm;
    force / (effective_length_mm * hub_depth_mm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_symmetric_reactions() {
        let r = bearing_reactions(2000.0, 800.0, 0.0, 100.0, 60.0, 60.0);
        assert_relative_eq!(r.a_vertical_n, 400.0);
        assert_relative_eq!(r.b_vertical_n, 400.0);
        assert_relative_eq!(r.a_horizontal_n, 1000.0);
        assert_relative_eq!(r.b_horizontal_n, 1000.0);
    }

    #[test]
    fn test_reactions_balance_applied_forces() {
        let r = bearing_reactions(3500.0, 1300.0, 900.0, 180.0, 45.0, 110.0);
        assert_relative_eq!(r.a_vertical_n + r.b_vertical_n, 1300.0, epsilon = 1e-9);
        assert_relative_eq!(r.a_horizontal_n + r.b_horizontal_n, 3500.0, epsilon = 1e-9);
    }

    #[test]
    fn test_axial_couple_shifts_vertical_reactions() {
        let without = bearing_reactions(2000.0, 800.0, 0.0, 100.0, 60.0, 60.0);
        let with = bearing_reactions(2000.0, 800.0, 600.0, 100.0, 60.0, 60.0);
        // Ma = 600·50 = 30000 N·mm over a 120 mm span
        assert_relative_eq!(with.b_vertical_n - without.b_vertical_n, 250.0, epsilon = 1e-9);
        assert_relative_eq!(with.a_horizontal_n, without.a_horizontal_n);
    }

    #[test]
    fn test_resultants() {
        let r = bearing_reactions(2000.0, 800.0, 0.0, 100.0, 60.0, 60.0);
        assert_relative_eq!(r.resultant_a(), (400.0f64.powi(2) + 1000.0f64.powi(2)).sqrt());
    }

    #[test]
    fn test_equivalent_moment() {
        assert_relative_eq!(equivalent_moment(100.0, 0.0, 1.0), 100.0);
        assert_relative_eq!(equivalent_moment(0.0, 100.0, 1.0), 75f64.sqrt() * 10.0);
        assert!(equivalent_moment(100.0, 50.0, 2.0) > equivalent_moment(100.0, 50.0, 1.0));
    }

    #[test]
    fn test_minimum_diameter_matches_section_modulus() {
        let d = minimum_diameter(250_000.0, 60.0);
        assert_relative_eq!(250_000.0 / section_modulus(d), 60.0, epsilon = 1e-9);
        assert_relative_eq!(polar_section_modulus(d), 2.0 * section_modulus(d));
    }

    #[test]
    fn test_key_pressure() {
        // 200 N·m on a 40 mm shaft → F = 10000 N over 36 mm × 3.3 mm
        assert_relative_eq!(key_pressure(200.0, 40.0, 36.0, 3.3), 10_000.0 / (36.0 * 3.3));
    }
}
