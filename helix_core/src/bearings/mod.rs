//! # Rolling Bearing Catalog
//!
//! Single-row bearings from the 60/62/63, 72, 302, 12 and NU2 series with
//! boundary dimensions, load ratings and (where published) limiting speeds.
//!
//! ## Example
//!
//! ```rust
//! use helix_core::bearings::{BearingCatalogEntry, BearingKind};
//!
//! let b = BearingCatalogEntry::find("6205").unwrap();
//! assert_eq!(b.bore_mm, 25.0);
//! assert_eq!(b.kind, BearingKind::DeepGrooveBall);
//!
//! let at_40: Vec<_> = BearingCatalogEntry::by_bore(40.0, Some(BearingKind::DeepGrooveBall));
//! assert!(at_40.iter().any(|b| b.designation == "6308"));
//! ```

mod catalog;

pub use catalog::BEARING_CATALOG;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Bearing type, decides the X/Y factor table and the life exponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BearingKind {
    #[default]
    DeepGrooveBall,
    SelfAligningBall,
    /// Single row, 25° contact angle
    AngularContact,
    TaperedRoller,
    CylindricalRoller,
}

impl BearingKind {
    pub const ALL: [BearingKind; 5] = [
        BearingKind::DeepGrooveBall,
        BearingKind::SelfAligningBall,
        BearingKind::AngularContact,
        BearingKind::TaperedRoller,
        BearingKind::CylindricalRoller,
    ];

    pub fn is_ball(&self) -> bool {
        matches!(
            self,
            BearingKind::DeepGrooveBall | BearingKind::SelfAligningBall | BearingKind::AngularContact
        )
    }

    /// Life exponent p: 3 for ball bearings, 10/3 for roller bearings
    pub fn life_exponent(&self) -> f64 {
        if self.is_ball() {
            3.0
        } else {
            10.0 / 3.0
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BearingKind::DeepGrooveBall => "Deep groove ball",
            BearingKind::SelfAligningBall => "Self-aligning ball",
            BearingKind::AngularContact => "Angular contact ball",
            BearingKind::TaperedRoller => "Tapered roller",
            BearingKind::CylindricalRoller => "Cylindrical roller",
        }
    }
}

impl std::fmt::Display for BearingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One catalog bearing. Dimensions in mm, ratings in N, speeds in rpm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BearingCatalogEntry {
    /// Designation, e.g. "6205" or "NU205"
    pub designation: String,
    pub kind: BearingKind,
    /// Bore diameter d
    pub bore_mm: f64,
    /// Outer diameter D
    pub outer_diameter_mm: f64,
    /// Width B (overall width T for tapered roller bearings)
    pub width_mm: f64,
    /// Basic dynamic load rating C
    pub dynamic_rating_n: f64,
    /// Basic static load rating C0
    pub static_rating_n: f64,
    #[serde(default)]
    pub grease_speed_limit_rpm: Option<f64>,
    #[serde(default)]
    pub oil_speed_limit_rpm: Option<f64>,
}

impl BearingCatalogEntry {
    /// Find a catalog bearing by designation, ignoring case and spaces
    /// ("NU 205" and "nu205" both match NU205)
    pub fn find(designation: &str) -> CalcResult<BearingCatalogEntry> {
        let wanted = normalize(designation);
        BEARING_CATALOG
            .iter()
            .find(|b| normalize(&b.designation) == wanted)
            .cloned()
            .ok_or_else(|| {
                CalcError::bearing_not_selected(format!("Bearing '{}' is not in the catalog", designation.trim()))
            })
    }

    /// All catalog bearings with exactly this bore, optionally of one kind
    pub fn by_bore(bore_mm: f64, kind: Option<BearingKind>) -> Vec<BearingCatalogEntry> {
        BEARING_CATALOG
            .iter()
            .filter(|b| b.bore_mm == bore_mm && kind.map_or(true, |k| b.kind == k))
            .cloned()
            .collect()
    }

    /// Candidates for the auto-search: bore at least `min_bore_mm`, matching
    /// kind, smallest first (by bore, then outer diameter, then C)
    pub fn candidates(min_bore_mm: f64, kind: BearingKind) -> Vec<&'static BearingCatalogEntry> {
        let mut found: Vec<&BearingCatalogEntry> = BEARING_CATALOG
            .iter()
            .filter(|b| b.kind == kind && b.bore_mm >= min_bore_mm)
            .collect();
        found.sort_by(|a, b| {
            a.bore_mm
                .total_cmp(&b.bore_mm)
                .then(a.outer_diameter_mm.total_cmp(&b.outer_diameter_mm))
                .then(a.dynamic_rating_n.total_cmp(&b.dynamic_rating_n))
        });
        found
    }
}

impl std::fmt::Display for BearingCatalogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} {}x{}x{})",
            self.designation, self.kind, self.bore_mm, self.outer_diameter_mm, self.width_mm
        )
    }
}

fn normalize(designation: &str) -> String {
    designation
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_life_exponent() {
        assert_eq!(BearingKind::DeepGrooveBall.life_exponent(), 3.0);
        assert_eq!(BearingKind::AngularContact.life_exponent(), 3.0);
        assert_eq!(BearingKind::TaperedRoller.life_exponent(), 10.0 / 3.0);
        assert_eq!(BearingKind::CylindricalRoller.life_exponent(), 10.0 / 3.0);
    }

    #[test]
    fn test_find_normalizes_designation() {
        let nu = BearingCatalogEntry::find("NU 205").unwrap();
        assert_eq!(nu.designation, "NU205");
        assert_eq!(nu.kind, BearingKind::CylindricalRoller);
        assert!(BearingCatalogEntry::find(" nu205 ").is_ok());
    }

    #[test]
    fn test_find_unknown_designation() {
        let err = BearingCatalogEntry::find("9999").unwrap_err();
        assert_eq!(err.error_code(), "BEARING_NOT_SELECTED");
    }

    #[test]
    fn test_deep_groove_has_speed_limits() {
        let b = BearingCatalogEntry::find("6205").unwrap();
        assert_eq!(b.dynamic_rating_n, 14000.0);
        assert_eq!(b.grease_speed_limit_rpm, Some(15000.0));
        assert_eq!(b.oil_speed_limit_rpm, Some(18000.0));

        let taper = BearingCatalogEntry::find("30205").unwrap();
        assert!(taper.grease_speed_limit_rpm.is_none());
    }

    #[test]
    fn test_by_bore() {
        let all_25 = BearingCatalogEntry::by_bore(25.0, None);
        assert!(all_25.len() >= 5);
        assert!(BearingKind::ALL.iter().all(|k| all_25.iter().any(|b| b.kind == *k)));

        let ball_25 = BearingCatalogEntry::by_bore(25.0, Some(BearingKind::DeepGrooveBall));
        assert!(ball_25.iter().all(|b| b.kind == BearingKind::DeepGrooveBall));
    }

    #[test]
    fn test_candidates_sorted_smallest_first() {
        let found = BearingCatalogEntry::candidates(24.0, BearingKind::DeepGrooveBall);
        assert_eq!(found[0].designation, "6005");
        assert!(found.windows(2).all(|w| w[0].bore_mm <= w[1].bore_mm));
        assert!(found.iter().all(|b| b.bore_mm >= 24.0));
    }

    #[test]
    fn test_designations_unique() {
        let mut names: Vec<String> = BEARING_CATALOG.iter().map(|b| normalize(&b.designation)).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_catalog_ratings_positive() {
        assert!(BEARING_CATALOG.iter().all(|b| b.dynamic_rating_n > 0.0
            && b.static_rating_n > 0.0
            && b.outer_diameter_mm > b.bore_mm));
    }
}
