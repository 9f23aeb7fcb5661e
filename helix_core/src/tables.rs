//! # Lookup Tables
//!
//! Static interpolation tables and standard series used by the gear, shaft and
//! keyway calculations. All data is `const` and read-only for the process
//! lifetime.
//!
//! ## Interpolation tables
//!
//! | Table | Independent variable | Asymptote |
//! |-------|----------------------|-----------|
//! | Tooth-form factor Kf | equivalent tooth count z/cos³β | 2.20 at z ≥ 100 |
//! | Helix-angle factor Kb | helix angle β (degrees) | 0.855 at β ≥ 35° |
//!
//! Both tables are strictly ascending on their independent variable. Negative
//! inputs are a caller error.
//!
//! ## Standard series
//!
//! - Normal modules (DIN 780 series 1 subset)
//! - Shaft seat diameters (R10-preferred)
//! - Parallel keys per DIN 6885
//! - Shaft extension stubs (diameter and length bands)

use serde::{Deserialize, Serialize};

// ============================================================================
// Interpolation Tables
// ============================================================================

/// Tooth-form factor Kf for unshifted teeth, keyed by tooth count.
///
/// The trailing `(1000, 2.20)` entry carries the asymptote for rack-like gears.
pub const FORM_FACTOR_TABLE: [(f64, f64); 28] = [
    (12.0, 3.70), (14.0, 3.33), (15.0, 3.23), (16.0, 3.15),
    (17.0, 3.08), (18.0, 3.00), (19.0, 2.98), (20.0, 2.95),
    (21.0, 2.90), (22.0, 2.86), (23.0, 2.82), (24.0, 2.78),
    (25.0, 2.73), (26.0, 2.70), (27.0, 2.67), (28.0, 2.64),
    (29.0, 2.62), (30.0, 2.60), (35.0, 2.51), (40.0, 2.45),
    (45.0, 2.41), (50.0, 2.37), (65.0, 2.29), (70.0, 2.28),
    (80.0, 2.25), (90.0, 2.23), (100.0, 2.21), (1000.0, 2.20),
];

/// Form factor returned at or above 100 teeth
pub const FORM_FACTOR_ASYMPTOTE: f64 = 2.20;

/// Tooth count at which the asymptotic form factor applies
const FORM_FACTOR_ASYMPTOTE_Z: f64 = 100.0;

/// Helix-angle factor Kb keyed by helix angle in degrees.
pub const HELIX_ANGLE_FACTOR_TABLE: [(f64, f64); 13] = [
    (0.0, 1.0), (10.0, 0.99), (12.0, 0.985),
    (14.0, 0.98), (16.0, 0.97), (18.0, 0.964),
    (20.0, 0.954), (22.0, 0.94), (24.0, 0.933),
    (26.0, 0.922), (30.0, 0.905), (32.0, 0.894),
    (35.0, 0.855),
];

/// Helix-angle factor returned at or above 35°
pub const HELIX_ANGLE_FACTOR_ASYMPTOTE: f64 = 0.855;

const HELIX_ANGLE_ASYMPTOTE_DEG: f64 = 35.0;

/// Linearly interpolate `x` within an ascending `(x, y)` table.
///
/// Scans for the first bracketing pair with `lower.x <= x <= upper.x`.
/// Returns `None` when `x` lies outside the table, leaving the out-of-range
/// policy to the caller.
pub fn interpolate(table: &[(f64, f64)], x: f64) -> Option<f64> {
    table.windows(2).find_map(|pair| {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x >= x0 && x <= x1 {
            let t = (x - x0) / (x1 - x0);
            Some(y0 + t * (y1 - y0))
        } else {
            None
        }
    })
}

/// Tooth-form factor Kf for an equivalent tooth count.
///
/// - `z_eq >= 100` → 2.20
/// - below the first table entry → the factor of the smallest tabulated tooth
///   count (3.70), the conservative end of the table
/// - otherwise linear interpolation
pub fn form_factor(z_equivalent: f64) -> f64 {
    if z_equivalent >= FORM_FACTOR_ASYMPTOTE_Z {
        return FORM_FACTOR_ASYMPTOTE;
    }
    interpolate(&FORM_FACTOR_TABLE, z_equivalent).unwrap_or(FORM_FACTOR_TABLE[0].1)
}

/// Helix-angle factor Kb for a helix angle in degrees.
pub fn helix_angle_factor(helix_angle_deg: f64) -> f64 {
    if helix_angle_deg >= HELIX_ANGLE_ASYMPTOTE_DEG {
        return HELIX_ANGLE_FACTOR_ASYMPTOTE;
    }
    interpolate(&HELIX_ANGLE_FACTOR_TABLE, helix_angle_deg).unwrap_or(HELIX_ANGLE_FACTOR_TABLE[0].1)
}

// ============================================================================
// Standard Series
// ============================================================================

/// Standard normal modules mn (mm)
pub const STANDARD_MODULES: [f64; 14] = [
    1.0, 1.25, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0, 12.0, 16.0, 20.0,
];

/// Standard shaft seat diameters (mm), R10 series preferred
pub const STANDARD_SHAFT_DIAMETERS: [f64; 21] = [
    15.0, 17.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0,
    75.0, 80.0, 85.0, 90.0, 95.0, 100.0, 110.0, 120.0,
];

/// Outcome of rounding a value up to a standard series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPick {
    /// Selected standard value
    pub value: f64,
    /// True when the requirement exceeded the largest tabulated value and the
    /// largest value was returned anyway
    pub exceeds_series: bool,
}

/// Smallest value in an ascending series that is ≥ `required`.
///
/// Falls back to the largest entry (flagged) when the requirement is beyond
/// the series.
pub fn round_up_to_series(series: &[f64], required: f64) -> SeriesPick {
    match series.iter().copied().find(|&v| v >= required) {
        Some(value) => SeriesPick {
            value,
            exceeds_series: false,
        },
        None => SeriesPick {
            value: series.last().copied().unwrap_or(required),
            exceeds_series: true,
        },
    }
}

/// Standard module for a theoretical module requirement
pub fn standard_module(required_mm: f64) -> SeriesPick {
    round_up_to_series(&STANDARD_MODULES, required_mm)
}

/// Standard shaft diameter for a minimum diameter requirement
pub fn standard_shaft_diameter(required_mm: f64) -> SeriesPick {
    round_up_to_series(&STANDARD_SHAFT_DIAMETERS, required_mm)
}

// ============================================================================
// Keyways (DIN 6885 parallel keys)
// ============================================================================

/// Parallel key and groove dimensions for a shaft diameter band (mm).
///
/// Valid for `d_min < d <= d_max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyway {
    /// Lower bound of the shaft-diameter band (exclusive)
    pub d_min: f64,
    /// Upper bound of the shaft-diameter band (inclusive)
    pub d_max: f64,
    /// Key width b
    pub b: f64,
    /// Key height h
    pub h: f64,
    /// Shaft groove depth t1
    pub t1: f64,
    /// Hub groove depth t2
    pub t2: f64,
}

impl Keyway {
    const fn new(d_min: f64, d_max: f64, b: f64, h: f64, t1: f64, t2: f64) -> Self {
        Keyway { d_min, d_max, b, h, t1, t2 }
    }

    /// True when `d` lies in this keyway's diameter band
    pub fn covers(&self, d: f64) -> bool {
        d > self.d_min && d <= self.d_max
    }

    /// Designation in the usual "b x h" form
    pub fn designation(&self) -> String {
        format!("{} x {}", self.b, self.h)
    }
}

/// DIN 6885 parallel keys, ascending by diameter band
pub const STANDARD_KEYWAYS: [Keyway; 13] = [
    Keyway::new(12.0, 17.0, 5.0, 5.0, 3.0, 2.3),
    Keyway::new(17.0, 22.0, 6.0, 6.0, 3.5, 2.8),
    Keyway::new(22.0, 30.0, 8.0, 7.0, 4.0, 3.3),
    Keyway::new(30.0, 38.0, 10.0, 8.0, 5.0, 3.3),
    Keyway::new(38.0, 44.0, 12.0, 8.0, 5.0, 3.3),
    Keyway::new(44.0, 50.0, 14.0, 9.0, 5.5, 3.8),
    Keyway::new(50.0, 58.0, 16.0, 10.0, 6.0, 4.3),
    Keyway::new(58.0, 65.0, 18.0, 11.0, 7.0, 4.4),
    Keyway::new(65.0, 75.0, 20.0, 12.0, 7.5, 4.9),
    Keyway::new(75.0, 85.0, 22.0, 14.0, 9.0, 5.4),
    Keyway::new(85.0, 95.0, 25.0, 14.0, 9.0, 5.4),
    Keyway::new(95.0, 110.0, 28.0, 16.0, 10.0, 6.4),
    Keyway::new(110.0, 130.0, 32.0, 18.0, 11.0, 7.4),
];

/// Keyway for a shaft diameter.
///
/// Diameters outside the banded table clamp to the nearest band (first band
/// below the table, last band above it) and log a warning.
pub fn keyway_for_diameter(d_mm: f64) -> Keyway {
    if let Some(keyway) = STANDARD_KEYWAYS.iter().find(|k| k.covers(d_mm)) {
        return *keyway;
    }
    let clamped = if d_mm <= STANDARD_KEYWAYS[0].d_min {
        STANDARD_KEYWAYS[0]
    } else {
        STANDARD_KEYWAYS[STANDARD_KEYWAYS.len() - 1]
    };
    log::warn!(
        "shaft diameter {:.1} mm outside keyway table, using {} key",
        d_mm,
        clamped.designation()
    );
    clamped
}

// ============================================================================
// Shaft Extension Stubs
// ============================================================================

/// Standard shaft-end (extension) diameter and length
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShaftExtension {
    /// Extension diameter dc (mm)
    pub diameter_mm: f64,
    /// Extension length lc (mm)
    pub length_mm: f64,
}

/// Step table `(upper diameter bound, dc, lc)`; the first band whose bound
/// is ≥ the shaft diameter applies.
const SHAFT_EXTENSION_STEPS: [(f64, f64, f64); 33] = [
    (12.0, 12.0, 30.0), (14.0, 14.0, 30.0), (16.0, 16.0, 40.0), (19.0, 19.0, 40.0),
    (20.0, 20.0, 50.0), (22.0, 22.0, 50.0), (24.0, 24.0, 60.0), (25.0, 25.0, 60.0),
    (28.0, 28.0, 60.0), (30.0, 30.0, 80.0), (32.0, 32.0, 80.0), (35.0, 35.0, 80.0),
    (38.0, 38.0, 80.0), (40.0, 40.0, 110.0), (42.0, 42.0, 110.0), (45.0, 45.0, 110.0),
    (48.0, 48.0, 110.0), (50.0, 50.0, 110.0), (55.0, 55.0, 110.0), (60.0, 60.0, 140.0),
    (65.0, 65.0, 140.0), (70.0, 70.0, 140.0), (75.0, 75.0, 140.0), (80.0, 80.0, 170.0),
    (85.0, 85.0, 170.0), (90.0, 90.0, 170.0), (95.0, 95.0, 170.0), (100.0, 100.0, 210.0),
    (110.0, 110.0, 210.0), (120.0, 120.0, 210.0), (140.0, 140.0, 250.0), (160.0, 160.0, 300.0),
    (180.0, 180.0, 300.0),
];

/// Length used beyond the last step; the diameter passes through unchanged
const SHAFT_EXTENSION_OVERSIZE_LENGTH: f64 = 350.0;

/// Standard shaft extension for a (standardized) shaft diameter
pub fn shaft_extension(d_mm: f64) -> ShaftExtension {
    SHAFT_EXTENSION_STEPS
        .iter()
        .find(|(bound, _, _)| d_mm <= *bound)
        .map(|&(_, diameter_mm, length_mm)| ShaftExtension {
            diameter_mm,
            length_mm,
        })
        .unwrap_or(ShaftExtension {
            diameter_mm: d_mm,
            length_mm: SHAFT_EXTENSION_OVERSIZE_LENGTH,
        })
}
