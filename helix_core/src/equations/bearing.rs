//! # Rolling Bearing Formulas
//!
//! Basic rating life per ISO 281 and the static equivalent load per ISO 76.
//!
//! ```text
//! L10  = (C / P)^p                 [10⁶ revolutions]
//! L10h = L10 · 10⁶ / (60 · n)      [hours]
//! ```
//!
//! The life exponent is p = 3 for ball bearings and p = 10/3 for roller
//! bearings.

/// Basic rating life in millions of revolutions
#[inline]
pub fn l10_million_revolutions(dynamic_rating_n: f64, equivalent_load_n: f64, exponent: f64) -> f64 {
    (dynamic_rating_n / equivalent_load_n).powf(exponent)
}

/// Rating life in operating hours at `speed_rpm`
#[inline]
pub fn l10_hours(l10_million_revs: f64, speed_rpm: f64) -> f64 {
    l10_million_revs * 1.0e6 / (60.0 * speed_rpm)
}

/// Dynamic load rating needed to reach `life_hours` at `speed_rpm`.
///
/// C_req = P · (60·n·Lh / 10⁶)^(1/p)
#[inline]
pub fn required_dynamic_rating(equivalent_load_n: f64, speed_rpm: f64, life_hours: f64, exponent: f64) -> f64 {
    equivalent_load_n * (60.0 * speed_rpm * life_hours / 1.0e6).powf(1.0 / exponent)
}

/// Static equivalent load P0 = max(0.6·Fr + 0.5·Fa, Fr)
#[inline]
pub fn static_equivalent_load(radial_n: f64, axial_n: f64) -> f64 {
    (0.6 * radial_n + 0.5 * axial_n).max(radial_n)
}
