//! # Rolling Bearing Life
//!
//! Equivalent dynamic load, L10 life, required dynamic rating, static safety
//! and speed check of a catalog bearing.
//!
//! ## Selection protocols
//!
//! - **Explicit**: a designation or a full catalog entry is evaluated as is.
//! - **Auto-search**: catalog bearings of one kind with bore ≥ the shaft
//!   diameter are evaluated smallest first. The first adequate one is
//!   returned; when none is adequate the largest candidate is returned with
//!   its (short) life, so the caller can see why nothing fits.
//!
//! ## Equivalent load
//!
//! ```text
//! Fa_eff = Fa / 2 for paired mounting, else Fa
//! P  = X·Fr + Y·Fa_eff          (X = 1, Y = 0 while Fa_eff/Fr ≤ e)
//! P0 = max(0.6·Fr + 0.5·Fa_eff, Fr),  S0 = C0/P0 ≥ 1.5
//! ```
//!
//! ## Example
//!
//! ```rust
//! use helix_core::calculations::bearing::{select_bearing, BearingInput, BearingSelection};
//!
//! let input = BearingInput {
//!     radial_load_n: 4800.0,
//!     axial_load_n: 0.0,
//!     speed_rpm: 500.0,
//!     desired_life_hours: 22000.0,
//!     mounting: Default::default(),
//!     selection: Some(BearingSelection::Designation("6205".into())),
//! };
//! let result = select_bearing(&input).unwrap();
//! assert_eq!(result.equivalent_load_n, 4800.0);
//! assert!(!result.is_adequate);
//! ```

use serde::{Deserialize, Serialize};

use crate::bearings::{BearingCatalogEntry, BearingKind};
use crate::equations::bearing::{
    l10_hours, l10_million_revolutions, required_dynamic_rating, static_equivalent_load,
};
use crate::errors::{require_positive, CalcError, CalcResult};

/// Static safety S0 below which a bearing is flagged
pub const MIN_STATIC_SAFETY: f64 = 1.5;

/// How the axial load is shared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Mounting {
    #[default]
    Single,
    /// Two bearings sharing the thrust; each sees half the axial load
    Paired,
}

impl Mounting {
    fn effective_axial(&self, axial_n: f64) -> f64 {
        match self {
            Mounting::Single => axial_n,
            Mounting::Paired => axial_n / 2.0,
        }
    }
}

/// Which bearing to evaluate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BearingSelection {
    /// Catalog designation, e.g. "6308"
    Designation(String),
    /// A full entry, possibly not from the built-in catalog
    Entry(BearingCatalogEntry),
    /// Smallest adequate catalog bearing of `kind` with bore ≥ `min_bore_mm`
    AutoSearch { min_bore_mm: f64, kind: BearingKind },
}

/// Input parameters for a bearing life check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "radial_load_n": 3200,
///   "axial_load_n": 900,
///   "speed_rpm": 360,
///   "desired_life_hours": 20000,
///   "mounting": "Paired",
///   "selection": { "AutoSearch": { "min_bore_mm": 40, "kind": "TaperedRoller" } }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BearingInput {
    /// Radial load Fr (N)
    pub radial_load_n: f64,
    /// Axial load Fa (N)
    #[serde(default)]
    pub axial_load_n: f64,
    /// Speed n (rpm)
    pub speed_rpm: f64,
    /// Required life Lh (hours)
    pub desired_life_hours: f64,
    #[serde(default)]
    pub mounting: Mounting,
    #[serde(default)]
    pub selection: Option<BearingSelection>,
}

impl BearingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("speed_rpm", self.speed_rpm)?;
        require_positive("desired_life_hours", self.desired_life_hours)?;
        if self.radial_load_n.is_nan() || self.radial_load_n < 0.0 {
            return Err(CalcError::invalid_input(
                "radial_load_n",
                self.radial_load_n.to_string(),
                "Radial load cannot be negative",
            ));
        }
        if self.axial_load_n.is_nan() || self.axial_load_n < 0.0 {
            return Err(CalcError::invalid_input(
                "axial_load_n",
                self.axial_load_n.to_string(),
                "Axial load cannot be negative",
            ));
        }
        match &self.selection {
            None => Err(CalcError::missing_field("selection")),
            Some(BearingSelection::AutoSearch { min_bore_mm, .. }) => require_positive("min_bore_mm", *min_bore_mm),
            Some(_) => Ok(()),
        }
    }
}

/// Dynamic load factors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadFactors {
    /// Radial factor X
    pub x: f64,
    /// Axial factor Y
    pub y: f64,
    /// Limit e of Fa/Fr below which the axial load is ignored
    pub e: f64,
}

impl LoadFactors {
    const RADIAL_ONLY_X: f64 = 1.0;

    fn radial_only(e: f64) -> Self {
        LoadFactors { x: Self::RADIAL_ONLY_X, y: 0.0, e }
    }
}

/// Deep groove ball bearings: e from Fa/C0, then Y from e
fn deep_groove_e(fa_over_c0: f64) -> f64 {
    const STEPS: [(f64, f64); 6] = [(0.5, 0.56), (0.25, 0.44), (0.13, 0.37), (0.07, 0.31), (0.04, 0.27), (0.025, 0.24)];
    STEPS
        .iter()
        .find(|(limit, _)| fa_over_c0 > *limit)
        .map_or(0.22, |&(_, e)| e)
}

fn deep_groove_y(e: f64) -> f64 {
    const Y_BY_E: [(f64, f64); 6] = [(0.22, 2.0), (0.24, 1.8), (0.27, 1.6), (0.31, 1.4), (0.37, 1.2), (0.44, 1.0)];
    Y_BY_E.iter().find(|(key, _)| *key == e).map_or(1.0, |&(_, y)| y)
}

/// X, Y and e for a bearing kind.
///
/// `axial_n` is the effective axial load after mounting share; `c0` the static
/// rating of the bearing under evaluation.
pub fn load_factors(kind: BearingKind, radial_n: f64, axial_n: f64, c0: f64) -> LoadFactors {
    let (e, x, y) = match kind {
        BearingKind::DeepGrooveBall => {
            let e = deep_groove_e(axial_n / c0);
            (e, 0.56, deep_groove_y(e))
        }
        BearingKind::SelfAligningBall => (0.3, 0.65, 2.5),
        BearingKind::AngularContact => (0.68, 0.41, 0.87),
        BearingKind::TaperedRoller => (0.37, 0.4, 1.6),
        BearingKind::CylindricalRoller => (0.0, 0.92, 0.6),
    };

    if axial_n <= 0.0 || axial_n / radial_n <= e {
        LoadFactors::radial_only(e)
    } else {
        LoadFactors { x, y, e }
    }
}

/// Static load check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaticCheck {
    /// P0 (N)
    pub equivalent_load_n: f64,
    /// C0 (N)
    pub static_rating_n: f64,
    /// S0 = C0/P0
    pub safety_factor: f64,
    /// S0 ≥ 1.5
    pub is_safe: bool,
}

/// Operating speed against the catalog limiting speeds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedCheck {
    pub grease_limit_rpm: Option<f64>,
    pub oil_limit_rpm: Option<f64>,
    /// True when no grease limit is listed
    pub is_safe_grease: bool,
    /// True when no oil limit is listed
    pub is_safe_oil: bool,
}

/// Result of a bearing life check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BearingResult {
    pub bearing: BearingCatalogEntry,
    /// Axial load after mounting share (N)
    pub effective_axial_load_n: f64,
    pub load_factors: LoadFactors,
    /// P (N)
    pub equivalent_load_n: f64,
    /// p
    pub life_exponent: f64,
    /// L10 (10⁶ revolutions)
    pub life_million_revs: f64,
    /// L10h (hours)
    pub life_hours: f64,
    /// C needed for the desired life (N)
    pub required_dynamic_rating_n: f64,
    /// L10h / Lh
    pub life_ratio: f64,
    /// L10h ≥ Lh
    pub is_adequate: bool,
    pub static_check: StaticCheck,
    /// Present when the catalog lists at least one limiting speed
    pub speed_check: Option<SpeedCheck>,
    /// Catalog bearings evaluated (1 for explicit selection)
    pub candidates_evaluated: usize,
}

impl BearingResult {
    /// Adequate life, static safety and speed
    pub fn passes(&self) -> bool {
        self.is_adequate
            && self.static_check.is_safe
            && self.speed_check.map_or(true, |s| s.is_safe_grease || s.is_safe_oil)
    }
}

/// Evaluate one bearing against the loads of `input`
pub fn evaluate_bearing(input: &BearingInput, bearing: &BearingCatalogEntry) -> BearingResult {
    let fr = input.radial_load_n;
    let fa = input.mounting.effective_axial(input.axial_load_n);
    let n = input.speed_rpm;
    let life_target = input.desired_life_hours;

    let factors = load_factors(bearing.kind, fr, fa, bearing.static_rating_n);
    let p = factors.x * fr + factors.y * fa;
    let exponent = bearing.kind.life_exponent();

    let l10 = l10_million_revolutions(bearing.dynamic_rating_n, p, exponent);
    let life_hours = l10_hours(l10, n);

    let p0 = static_equivalent_load(fr, fa);
    let static_safety = bearing.static_rating_n / p0;

    let speed_check = if bearing.grease_speed_limit_rpm.is_some() || bearing.oil_speed_limit_rpm.is_some() {
        Some(SpeedCheck {
            grease_limit_rpm: bearing.grease_speed_limit_rpm,
            oil_limit_rpm: bearing.oil_speed_limit_rpm,
            is_safe_grease: bearing.grease_speed_limit_rpm.map_or(true, |limit| n <= limit),
            is_safe_oil: bearing.oil_speed_limit_rpm.map_or(true, |limit| n <= limit),
        })
    } else {
        None
    };

    BearingResult {
        bearing: bearing.clone(),
        effective_axial_load_n: fa,
        load_factors: factors,
        equivalent_load_n: p,
        life_exponent: exponent,
        life_million_revs: l10,
        life_hours,
        required_dynamic_rating_n: required_dynamic_rating(p, n, life_target, exponent),
        life_ratio: life_hours / life_target,
        is_adequate: life_hours >= life_target,
        static_check: StaticCheck {
            equivalent_load_n: p0,
            static_rating_n: bearing.static_rating_n,
            safety_factor: static_safety,
            is_safe: static_safety >= MIN_STATIC_SAFETY,
        },
        speed_check,
        candidates_evaluated: 1,
    }
}

/// Run the bearing life check for the selection in `input`.
///
/// # Errors
///
/// - `BearingNotSelected` when `selection` is `None` or the designation is not
///   in the catalog
/// - `NoBearingCandidate` when an auto-search finds no bearing of the kind with
///   a large enough bore
pub fn select_bearing(input: &BearingInput) -> CalcResult<BearingResult> {
    match &input.selection {
        None => Err(CalcError::bearing_not_selected(
            "Select a catalog bearing or request an auto-search",
        )),
        Some(BearingSelection::Designation(designation)) => {
            let bearing = BearingCatalogEntry::find(designation)?;
            Ok(evaluate_bearing(input, &bearing))
        }
        Some(BearingSelection::Entry(bearing)) => Ok(evaluate_bearing(input, bearing)),
        Some(BearingSelection::AutoSearch { min_bore_mm, kind }) => auto_search(input, *min_bore_mm, *kind),
    }
}

fn auto_search(input: &BearingInput, min_bore_mm: f64, kind: BearingKind) -> CalcResult<BearingResult> {
    let candidates = BearingCatalogEntry::candidates(min_bore_mm, kind);

    let mut evaluated = 0;
    let mut last = None;
    for bearing in candidates {
        evaluated += 1;
        let result = evaluate_bearing(input, bearing);
        log::debug!(
            "bearing {}: P = {:.0} N, L10h = {:.0} h",
            bearing.designation,
            result.equivalent_load_n,
            result.life_hours
        );
        if result.is_adequate {
            return Ok(BearingResult {
                candidates_evaluated: evaluated,
                ..result
            });
        }
        last = Some(result);
    }

    match last {
        Some(result) => {
            log::warn!(
                "no {} bearing reaches {} h, returning largest candidate {}",
                kind,
                input.desired_life_hours,
                result.bearing.designation
            );
            Ok(BearingResult {
                candidates_evaluated: evaluated,
                ..result
            })
        }
        None => Err(CalcError::no_bearing_candidate(kind.display_name(), min_bore_mm)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn input(fr: f64, fa: f64, speed: f64, life: f64, selection: Option<BearingSelection>) -> BearingInput {
        BearingInput {
            radial_load_n: fr,
            axial_load_n: fa,
            speed_rpm: speed,
            desired_life_hours: life,
            mounting: Mounting::Single,
            selection,
        }
    }

    fn designation(name: &str) -> Option<BearingSelection> {
        Some(BearingSelection::Designation(name.to_string()))
    }

    #[test]
    fn test_6205_pure_radial() {
        let r = select_bearing(&input(4800.0, 0.0, 500.0, 22000.0, designation("6205"))).unwrap();

        assert_eq!(r.load_factors.x, 1.0);
        assert_eq!(r.load_factors.y, 0.0);
        assert_eq!(r.equivalent_load_n, 4800.0);
        assert_eq!(r.life_exponent, 3.0);
        assert_relative_eq!(r.life_hours, (14000.0f64 / 4800.0).powi(3) * 1e6 / 30000.0, epsilon = 1e-9);
        assert_relative_eq!(r.life_hours, 827.07, epsilon = 1e-2);
        assert_eq!(r.is_adequate, r.life_hours >= 22000.0);
        assert!(!r.is_adequate);
        assert!(r.required_dynamic_rating_n > 14000.0);
    }

    #[test]
    fn test_static_check() {
        let r = select_bearing(&input(4800.0, 0.0, 500.0, 22000.0, designation("6205"))).unwrap();
        assert_eq!(r.static_check.equivalent_load_n, 4800.0);
        assert_relative_eq!(r.static_check.safety_factor, 7800.0 / 4800.0);
        assert!(r.static_check.is_safe);
    }

    #[test]
    fn test_speed_check() {
        let r = select_bearing(&input(1000.0, 0.0, 16000.0, 1000.0, designation("6205"))).unwrap();
        let speed = r.speed_check.unwrap();
        assert!(!speed.is_safe_grease);
        assert!(speed.is_safe_oil);

        let taper = select_bearing(&input(1000.0, 0.0, 1000.0, 1000.0, designation("30205"))).unwrap();
        assert!(taper.speed_check.is_none());
    }

    #[test]
    fn test_deep_groove_factors() {
        // Fa/C0 = 0.1 → e = 0.31; Fa/Fr = 0.5 > e → X = 0.56, Y = 1.4
        let f = load_factors(BearingKind::DeepGrooveBall, 2000.0, 1000.0, 10_000.0);
        assert_eq!(f.e, 0.31);
        assert_eq!(f.x, 0.56);
        assert_eq!(f.y, 1.4);

        // Small thrust stays below e
        let f = load_factors(BearingKind::DeepGrooveBall, 2000.0, 100.0, 10_000.0);
        assert_eq!((f.x, f.y), (1.0, 0.0));

        // Fa/C0 ≤ 0.025 → e = 0.22, Y = 2.0
        let f = load_factors(BearingKind::DeepGrooveBall, 1000.0, 240.0, 10_000.0);
        assert_eq!((f.e, f.y), (0.22, 2.0));

        // Fa/C0 > 0.5 → e = 0.56, Y falls back to 1.0
        let f = load_factors(BearingKind::DeepGrooveBall, 1000.0, 6000.0, 10_000.0);
        assert_eq!((f.e, f.y), (0.56, 1.0));
    }

    #[test]
    fn test_other_kind_factors() {
        let f = load_factors(BearingKind::AngularContact, 1000.0, 1000.0, 10_000.0);
        assert_eq!((f.x, f.y), (0.41, 0.87));
        let f = load_factors(BearingKind::TaperedRoller, 1000.0, 300.0, 10_000.0);
        assert_eq!((f.x, f.y), (1.0, 0.0));
        let f = load_factors(BearingKind::CylindricalRoller, 1000.0, 0.0, 10_000.0);
        assert_eq!((f.x, f.y), (1.0, 0.0));
        let f = load_factors(BearingKind::CylindricalRoller, 1000.0, 50.0, 10_000.0);
        assert_eq!((f.x, f.y), (0.92, 0.6));
        let f = load_factors(BearingKind::SelfAligningBall, 1000.0, 500.0, 10_000.0);
        assert_eq!((f.x, f.y), (0.65, 2.5));
    }

    #[test]
    fn test_paired_mounting_halves_thrust() {
        let mut paired = input(2000.0, 1000.0, 500.0, 10000.0, designation("7208"));
        paired.mounting = Mounting::Paired;
        let r = select_bearing(&paired).unwrap();
        assert_eq!(r.effective_axial_load_n, 500.0);
        // 500/2000 = 0.25 ≤ 0.68 → axial ignored
        assert_eq!(r.equivalent_load_n, 2000.0);
        assert_relative_eq!(r.static_check.equivalent_load_n, 2000.0);

        let single = select_bearing(&input(2000.0, 1000.0, 500.0, 10000.0, designation("7208"))).unwrap();
        assert!(single.static_check.safety_factor <= r.static_check.safety_factor);
    }

    #[test]
    fn test_roller_life_exponent() {
        let r = select_bearing(&input(5000.0, 0.0, 500.0, 20000.0, designation("NU 208"))).unwrap();
        assert_relative_eq!(r.life_exponent, 10.0 / 3.0);
        assert_relative_eq!(r.life_million_revs, (56000.0f64 / 5000.0).powf(10.0 / 3.0), epsilon = 1e-9);
    }

    #[test]
    fn test_explicit_entry() {
        let mut custom = BearingCatalogEntry::find("6205").unwrap();
        custom.designation = "6205-2RS".to_string();
        custom.dynamic_rating_n = 20000.0;
        let r = select_bearing(&input(4800.0, 0.0, 500.0, 1000.0, Some(BearingSelection::Entry(custom)))).unwrap();
        assert_eq!(r.bearing.designation, "6205-2RS");
        assert!(r.is_adequate);
    }

    #[test]
    fn test_missing_selection() {
        let err = select_bearing(&input(4800.0, 0.0, 500.0, 22000.0, None)).unwrap_err();
        assert_eq!(err.error_code(), "BEARING_NOT_SELECTED");

        let err = select_bearing(&input(4800.0, 0.0, 500.0, 22000.0, designation("9999"))).unwrap_err();
        assert_eq!(err.error_code(), "BEARING_NOT_SELECTED");
    }

    #[test]
    fn test_auto_search_returns_first_adequate() {
        let search = Some(BearingSelection::AutoSearch {
            min_bore_mm: 25.0,
            kind: BearingKind::DeepGrooveBall,
        });
        let r = select_bearing(&input(2000.0, 0.0, 1000.0, 10000.0, search)).unwrap();
        assert!(r.is_adequate);
        assert!(r.bearing.bore_mm >= 25.0);
        // 6005 (C 10100) gives 2145 h, 6205 (C 14000) 5716 h, 6305 (C 22500) 23730 h
        assert_eq!(r.bearing.designation, "6305");
        assert_eq!(r.candidates_evaluated, 3);
    }

    #[test]
    fn test_auto_search_best_effort() {
        let search = Some(BearingSelection::AutoSearch {
            min_bore_mm: 45.0,
            kind: BearingKind::AngularContact,
        });
        let r = select_bearing(&input(60_000.0, 0.0, 1000.0, 50_000.0, search)).unwrap();
        assert!(!r.is_adequate);
        assert_eq!(r.bearing.designation, "7210");
        assert_eq!(r.candidates_evaluated, 2);
    }

    #[test]
    fn test_auto_search_no_candidate() {
        let search = Some(BearingSelection::AutoSearch {
            min_bore_mm: 60.0,
            kind: BearingKind::CylindricalRoller,
        });
        let err = select_bearing(&input(2000.0, 0.0, 1000.0, 10000.0, search)).unwrap_err();
        assert_eq!(err.error_code(), "NO_BEARING_CANDIDATE");
    }

    #[test]
    fn test_validate() {
        assert!(input(4800.0, 0.0, 500.0, 22000.0, designation("6205")).validate().is_ok());
        assert_eq!(
            input(4800.0, 0.0, 500.0, 22000.0, None).validate().unwrap_err().error_code(),
            "MISSING_FIELD"
        );
        assert!(input(4800.0, -1.0, 500.0, 22000.0, designation("6205")).validate().is_err());
        assert!(input(4800.0, 0.0, 0.0, 22000.0, designation("6205")).validate().is_err());
    }

    #[test]
    fn test_selection_json() {
        let json = r#"{
            "radial_load_n": 3200, "speed_rpm": 360, "desired_life_hours": 20000,
            "mounting": "Paired",
            "selection": { "AutoSearch": { "min_bore_mm": 40, "kind": "TaperedRoller" } }
        }"#;
        let parsed: BearingInput = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.axial_load_n, 0.0);
        assert_eq!(parsed.mounting, Mounting::Paired);
        assert_eq!(
            parsed.selection,
            Some(BearingSelection::AutoSearch {
                min_bore_mm: 40.0,
                kind: BearingKind::TaperedRoller
            })
        );
    }
}
