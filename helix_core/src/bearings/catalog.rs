//! Catalog rows. Limiting speeds are listed for the deep groove ball and
//! cylindrical roller bearings only.

use once_cell::sync::Lazy;

use super::{BearingCatalogEntry, BearingKind};
use BearingKind::*;

struct Row {
    designation: &'static str,
    kind: BearingKind,
    d: f64,
    outer: f64,
    b: f64,
    c: f64,
    c0: f64,
    grease: f64,
    oil: f64,
}

#[allow(clippy::too_many_arguments)]
const fn rated(
    kind: BearingKind,
    designation: &'static str,
    d: f64,
    outer: f64,
    b: f64,
    c: f64,
    c0: f64,
    grease: f64,
    oil: f64,
) -> Row {
    Row { designation, kind, d, outer, b, c, c0, grease, oil }
}

const fn plain(kind: BearingKind, designation: &'static str, d: f64, outer: f64, b: f64, c: f64, c0: f64) -> Row {
    Row { designation, kind, d, outer, b, c, c0, grease: 0.0, oil: 0.0 }
}

// designation, d, D, B, C, C0[, grease, oil]
const ROWS: [Row; 66] = [
    // Deep groove ball, 60/62/63 series
    plain(DeepGrooveBall, "6200", 10.0, 30.0, 9.0, 5070.0, 2360.0),
    plain(DeepGrooveBall, "6201", 12.0, 32.0, 10.0, 6890.0, 3100.0),
    plain(DeepGrooveBall, "6202", 15.0, 35.0, 11.0, 7800.0, 3750.0),
    plain(DeepGrooveBall, "6203", 17.0, 40.0, 12.0, 9560.0, 4750.0),
    rated(DeepGrooveBall, "6004", 20.0, 42.0, 12.0, 9400.0, 5000.0, 19000.0, 24000.0),
    rated(DeepGrooveBall, "6204", 20.0, 47.0, 14.0, 12800.0, 6600.0, 17000.0, 22000.0),
    rated(DeepGrooveBall, "6304", 20.0, 52.0, 15.0, 15900.0, 7800.0, 16000.0, 19000.0),
    rated(DeepGrooveBall, "6005", 25.0, 47.0, 12.0, 10100.0, 5850.0, 16000.0, 20000.0),
    rated(DeepGrooveBall, "6205", 25.0, 52.0, 15.0, 14000.0, 7800.0, 15000.0, 18000.0),
    rated(DeepGrooveBall, "6305", 25.0, 62.0, 17.0, 22500.0, 11600.0, 13000.0, 16000.0),
    rated(DeepGrooveBall, "6006", 30.0, 55.0, 13.0, 13200.0, 8300.0, 14000.0, 17000.0),
    rated(DeepGrooveBall, "6206", 30.0, 62.0, 16.0, 19500.0, 11200.0, 12000.0, 15000.0),
    rated(DeepGrooveBall, "6306", 30.0, 72.0, 19.0, 28100.0, 16000.0, 11000.0, 13000.0),
    rated(DeepGrooveBall, "6007", 35.0, 62.0, 14.0, 16000.0, 10300.0, 12000.0, 15000.0),
    rated(DeepGrooveBall, "6207", 35.0, 72.0, 17.0, 25500.0, 15300.0, 10000.0, 13000.0),
    rated(DeepGrooveBall, "6008", 40.0, 68.0, 15.0, 16800.0, 11500.0, 11000.0, 13000.0),
    rated(DeepGrooveBall, "6208", 40.0, 80.0, 18.0, 29100.0, 17900.0, 9000.0, 11000.0),
    rated(DeepGrooveBall, "6308", 40.0, 90.0, 23.0, 41000.0, 24000.0, 8500.0, 10000.0),
    rated(DeepGrooveBall, "6009", 45.0, 75.0, 16.0, 21000.0, 15100.0, 9500.0, 12000.0),
    rated(DeepGrooveBall, "6209", 45.0, 85.0, 19.0, 31500.0, 20500.0, 8500.0, 10000.0),
    rated(DeepGrooveBall, "6010", 50.0, 80.0, 16.0, 21800.0, 16600.0, 9000.0, 11000.0),
    rated(DeepGrooveBall, "6210", 50.0, 90.0, 20.0, 35100.0, 23200.0, 7500.0, 9000.0),
    rated(DeepGrooveBall, "6310", 50.0, 110.0, 27.0, 62000.0, 38000.0, 7000.0, 8500.0),
    plain(DeepGrooveBall, "6211", 55.0, 100.0, 21.0, 43600.0, 29600.0),
    plain(DeepGrooveBall, "6212", 60.0, 110.0, 22.0, 52700.0, 36500.0),
    plain(DeepGrooveBall, "6213", 65.0, 120.0, 23.0, 57200.0, 40500.0),
    plain(DeepGrooveBall, "6214", 70.0, 125.0, 24.0, 61800.0, 44000.0),
    plain(DeepGrooveBall, "6215", 75.0, 130.0, 25.0, 66300.0, 48000.0),
    plain(DeepGrooveBall, "6216", 80.0, 140.0, 26.0, 72800.0, 53000.0),
    // Angular contact ball, 72 series (25°)
    plain(AngularContact, "7201", 12.0, 32.0, 10.0, 7020.0, 3100.0),
    plain(AngularContact, "7202", 15.0, 35.0, 11.0, 8060.0, 3900.0),
    plain(AngularContact, "7203", 17.0, 40.0, 12.0, 10400.0, 5200.0),
    plain(AngularContact, "7204", 20.0, 47.0, 14.0, 14300.0, 7350.0),
    plain(AngularContact, "7205", 25.0, 52.0, 15.0, 15900.0, 8800.0),
    plain(AngularContact, "7206", 30.0, 62.0, 16.0, 22900.0, 13000.0),
    plain(AngularContact, "7207", 35.0, 72.0, 17.0, 30700.0, 18000.0),
    plain(AngularContact, "7208", 40.0, 80.0, 18.0, 35800.0, 22400.0),
    plain(AngularContact, "7209", 45.0, 85.0, 19.0, 39700.0, 25500.0),
    plain(AngularContact, "7210", 50.0, 90.0, 20.0, 42300.0, 27500.0),
    // Tapered roller, 302 series
    plain(TaperedRoller, "30202", 15.0, 35.0, 11.75, 12700.0, 10200.0),
    plain(TaperedRoller, "30203", 17.0, 40.0, 13.25, 15600.0, 13000.0),
    plain(TaperedRoller, "30204", 20.0, 47.0, 15.25, 20800.0, 18000.0),
    plain(TaperedRoller, "30205", 25.0, 52.0, 16.25, 24500.0, 22400.0),
    plain(TaperedRoller, "30206", 30.0, 62.0, 17.25, 32500.0, 31000.0),
    plain(TaperedRoller, "30207", 35.0, 72.0, 18.25, 44000.0, 43000.0),
    plain(TaperedRoller, "30208", 40.0, 80.0, 19.75, 50700.0, 51000.0),
    plain(TaperedRoller, "30209", 45.0, 85.0, 20.75, 55900.0, 58500.0),
    plain(TaperedRoller, "30210", 50.0, 90.0, 21.75, 61200.0, 66300.0),
    // Self-aligning ball, 12 series
    plain(SelfAligningBall, "1200", 10.0, 30.0, 9.0, 3120.0, 1250.0),
    plain(SelfAligningBall, "1201", 12.0, 32.0, 10.0, 4160.0, 1730.0),
    plain(SelfAligningBall, "1202", 15.0, 35.0, 11.0, 4680.0, 2040.0),
    plain(SelfAligningBall, "1203", 17.0, 40.0, 12.0, 5720.0, 2600.0),
    plain(SelfAligningBall, "1204", 20.0, 47.0, 14.0, 7540.0, 3650.0),
    plain(SelfAligningBall, "1205", 25.0, 52.0, 15.0, 8190.0, 4250.0),
    plain(SelfAligningBall, "1206", 30.0, 62.0, 16.0, 11700.0, 6300.0),
    plain(SelfAligningBall, "1207", 35.0, 72.0, 17.0, 15100.0, 8500.0),
    plain(SelfAligningBall, "1208", 40.0, 80.0, 18.0, 17500.0, 10200.0),
    plain(SelfAligningBall, "1209", 45.0, 85.0, 19.0, 19600.0, 11800.0),
    plain(SelfAligningBall, "1210", 50.0, 90.0, 20.0, 20800.0, 12700.0),
    // Cylindrical roller, NU2 series
    plain(CylindricalRoller, "NU204", 20.0, 47.0, 14.0, 22400.0, 18000.0),
    rated(CylindricalRoller, "NU205", 25.0, 52.0, 15.0, 28600.0, 27000.0, 11000.0, 14000.0),
    rated(CylindricalRoller, "NU206", 30.0, 62.0, 16.0, 38000.0, 36500.0, 9500.0, 12000.0),
    plain(CylindricalRoller, "NU207", 35.0, 72.0, 17.0, 45500.0, 45000.0),
    rated(CylindricalRoller, "NU208", 40.0, 80.0, 18.0, 56000.0, 50000.0, 7500.0, 9000.0),
    plain(CylindricalRoller, "NU209", 45.0, 85.0, 19.0, 57200.0, 60000.0),
    rated(CylindricalRoller, "NU210", 50.0, 90.0, 20.0, 72000.0, 69000.0, 6300.0, 7500.0),
];

/// Bearing catalog, built on first access
pub static BEARING_CATALOG: Lazy<Vec<BearingCatalogEntry>> = Lazy::new(|| {
    let limit = |v: f64| if v > 0.0 { Some(v) } else { None };
    ROWS.iter()
        .map(|r| BearingCatalogEntry {
            designation: r.designation.to_string(),
            kind: r.kind,
            bore_mm: r.d,
            outer_diameter_mm: r.outer,
            width_mm: r.b,
            dynamic_rating_n: r.c,
            static_rating_n: r.c0,
            grease_speed_limit_rpm: limit(r.grease),
            oil_speed_limit_rpm: limit(r.oil),
        })
        .collect()
});
