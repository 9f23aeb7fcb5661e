//! # Material Catalogs
//!
//! Material definitions for gear and shaft calculations.
//!
//! ## Material Categories
//!
//! - **Gear-grade**: steels and cast irons with a tabulated tooth-root
//!   durability limit σD and allowable surface pressure PhD (used by the gear
//!   stage sizer)
//! - **General-structural**: construction, cast and heat-treatable steels with
//!   a Poisson ratio but no gear ratings (used by the shaft solver)
//!
//! Both catalogs are built once on first access and never mutated. Names repeat
//! across catalogs (e.g. `DIN 17 100, St 50` is listed in both with different
//! values), so lookups are always per category.
//!
//! ## Example
//!
//! ```rust
//! use helix_core::materials::Material;
//!
//! let ck45 = Material::gear("DIN 17 200, Ck 45").unwrap();
//! assert_eq!(ck45.durability_limit_mpa, Some(350.0));
//!
//! let st37 = Material::general("DIN 17 100, St 37").unwrap();
//! assert_eq!(st37.yield_strength_mpa, 230.0);
//! ```

pub mod gear_grade;
pub mod general_grade;

pub use gear_grade::GEAR_MATERIALS;
pub use general_grade::GENERAL_MATERIALS;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Material category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialCategory {
    /// Gear-grade material with durability and surface-pressure ratings
    Gear,
    /// General structural material
    General,
}

impl MaterialCategory {
    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialCategory::Gear => "Gear-grade",
            MaterialCategory::General => "General structural",
        }
    }
}

impl std::fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Mechanical properties of one catalog material. All stresses in N/mm².
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "DIN 17 200, Ck 45",
///   "category": "Gear",
///   "ultimate_strength_mpa": 700.0,
///   "yield_strength_mpa": 420.0,
///   "durability_limit_mpa": 350.0,
///   "elastic_modulus_mpa": 211000.0,
///   "shear_modulus_mpa": 81000.0,
///   "hardness_hb": 205.0,
///   "surface_pressure_mpa": 410.0,
///   "poisson_ratio": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Standard designation, e.g. "DIN 17 200, Ck 45"
    pub name: String,
    pub category: MaterialCategory,
    /// Ultimate tensile strength σK
    pub ultimate_strength_mpa: f64,
    /// Yield strength σAk
    pub yield_strength_mpa: f64,
    /// Tooth-root durability (fatigue) limit σD, gear-grade only
    #[serde(default)]
    pub durability_limit_mpa: Option<f64>,
    /// Elastic modulus E
    pub elastic_modulus_mpa: f64,
    /// Shear modulus G
    pub shear_modulus_mpa: f64,
    /// Brinell hardness
    pub hardness_hb: f64,
    /// Allowable surface pressure PhD, gear-grade only
    #[serde(default)]
    pub surface_pressure_mpa: Option<f64>,
    /// Poisson ratio, general-grade only
    #[serde(default)]
    pub poisson_ratio: Option<f64>,
}

impl Material {
    /// Look up a gear-grade material by name
    pub fn gear(name: &str) -> CalcResult<Material> {
        find_in(&GEAR_MATERIALS, name)
    }

    /// Look up a general-structural material by name
    pub fn general(name: &str) -> CalcResult<Material> {
        find_in(&GENERAL_MATERIALS, name)
    }

    /// Look up a material by category and name
    pub fn lookup(category: MaterialCategory, name: &str) -> CalcResult<Material> {
        match category {
            MaterialCategory::Gear => Material::gear(name),
            MaterialCategory::General => Material::general(name),
        }
    }

    /// Durability limit σD, or 0 when the material carries no gear rating.
    ///
    /// A zero limit drives the required module to infinity rather than
    /// failing; callers are expected to pick gear-grade materials.
    pub fn durability_or_zero(&self) -> f64 {
        self.durability_limit_mpa.unwrap_or(0.0)
    }

    /// Allowable surface pressure PhD, or 0 when not rated
    pub fn surface_pressure_or_zero(&self) -> f64 {
        self.surface_pressure_mpa.unwrap_or(0.0)
    }

    pub fn is_gear_grade(&self) -> bool {
        self.category == MaterialCategory::Gear
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One catalog row, kept `const`-constructible so the tables read as data.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MaterialRow {
    pub name: &'static str,
    pub sigma_k: f64,
    pub sigma_ak: f64,
    pub sigma_d: f64,
    pub e: f64,
    pub g: f64,
    pub hb: f64,
    pub phd: f64,
    pub poisson: f64,
}

impl MaterialRow {
    pub(crate) fn to_material(self, category: MaterialCategory) -> Material {
        let rated = |v: f64| if v > 0.0 { Some(v) } else { None };
        Material {
            name: self.name.to_string(),
            category,
            ultimate_strength_mpa: self.sigma_k,
            yield_strength_mpa: self.sigma_ak,
            durability_limit_mpa: rated(self.sigma_d),
            elastic_modulus_mpa: self.e,
            shear_modulus_mpa: self.g,
            hardness_hb: self.hb,
            surface_pressure_mpa: rated(self.phd),
            poisson_ratio: rated(self.poisson),
        }
    }
}

fn find_in(catalog: &[Material], name: &str) -> CalcResult<Material> {
    let wanted = name.trim();
    catalog
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(wanted))
        .cloned()
        .ok_or_else(|| CalcError::material_not_found(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gear_lookup() {
        let m = Material::gear("DIN 17 200, Ck 45").unwrap();
        assert_eq!(m.category, MaterialCategory::Gear);
        assert_eq!(m.ultimate_strength_mpa, 700.0);
        assert_eq!(m.surface_pressure_mpa, Some(410.0));
        assert!(m.poisson_ratio.is_none());
    }

    #[test]
    fn test_general_lookup() {
        let m = Material::general("DIN 17 100, St 37").unwrap();
        assert_eq!(m.category, MaterialCategory::General);
        assert!(m.durability_limit_mpa.is_none());
        assert_eq!(m.poisson_ratio, Some(0.3));
        assert_eq!(m.durability_or_zero(), 0.0);
    }

    #[test]
    fn test_same_name_differs_by_category() {
        let gear = Material::gear("DIN 17 100, St 50").unwrap();
        let general = Material::general("DIN 17 100, St 50").unwrap();
        assert_ne!(gear.ultimate_strength_mpa, general.ultimate_strength_mpa);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(Material::gear("din 17 200, ck 45").is_ok());
        assert!(Material::lookup(MaterialCategory::General, " DIN 1691, GG 20 ").is_ok());
    }

    #[test]
    fn test_unknown_material() {
        let err = Material::gear("Unobtainium").unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_catalog_invariants() {
        assert!(GEAR_MATERIALS.iter().all(|m| m.durability_limit_mpa.is_some()
            && m.surface_pressure_mpa.is_some()));
        assert!(GENERAL_MATERIALS.iter().all(|m| m.poisson_ratio.is_some()));
        assert!(GEAR_MATERIALS.iter().all(|m| m.yield_strength_mpa < m.ultimate_strength_mpa));
    }

    #[test]
    fn test_material_json() {
        let m = Material::gear("DIN 17 200, 42 CrMo 4").unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"category\":\"Gear\""));
        let parsed: Material = serde_json::from_str(&json).unwrap();
        assert_eq!(m, parsed);
    }
}
