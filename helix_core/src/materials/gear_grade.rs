//! Gear-grade materials with tooth-root durability limit σD and allowable
//! surface pressure PhD.

use once_cell::sync::Lazy;

use super::{Material, MaterialCategory, MaterialRow};

const fn gear(
    name: &'static str,
    sigma_k: f64,
    sigma_ak: f64,
    sigma_d: f64,
    e: f64,
    g: f64,
    hb: f64,
    phd: f64,
) -> MaterialRow {
    MaterialRow { name, sigma_k, sigma_ak, sigma_d, e, g, hb, phd, poisson: 0.0 }
}

// name, σK, σAk, σD, E, G, HB, PhD
const ROWS: [MaterialRow; 31] = [
    // Construction steels
    gear("DIN 17 100, St 50", 540.0, 290.0, 216.0, 211000.0, 81000.0, 160.0, 352.0),
    gear("DIN 17 100, St 60", 650.0, 330.0, 260.0, 211000.0, 81000.0, 195.0, 429.0),
    gear("DIN 17 100, St 70", 770.0, 360.0, 308.0, 211000.0, 81000.0, 205.0, 451.0),
    // Cast irons and cast steels
    gear("DIN 1693, GGG 70", 700.0, 440.0, 210.0, 172000.0, 67200.0, 300.0, 600.0),
    gear("DIN 1681, GS 38", 380.0, 200.0, 133.0, 205000.0, 79000.0, 100.0, 200.0),
    gear("DIN 1681, GS 45", 450.0, 230.0, 158.0, 205000.0, 79000.0, 125.0, 250.0),
    gear("DIN 1681, GS 52", 520.0, 260.0, 182.0, 205000.0, 79000.0, 150.0, 300.0),
    gear("DIN 1681, GS 60", 600.0, 300.0, 210.0, 205000.0, 79000.0, 175.0, 350.0),
    // Heat-treatable steels
    gear("DIN 17 200, Ck 35", 565.0, 275.0, 226.0, 211000.0, 81000.0, 183.0, 366.0),
    gear("DIN 17 200, Ck 45", 700.0, 420.0, 350.0, 211000.0, 81000.0, 205.0, 410.0),
    gear("DIN 17 200, Ck 55", 740.0, 500.0, 296.0, 211000.0, 81000.0, 229.0, 458.0),
    gear("DIN 17 200, Ck 60", 860.0, 520.0, 344.0, 211000.0, 81000.0, 241.0, 482.0),
    gear("DIN 17 200, 28 Mn 6", 780.0, 490.0, 312.0, 211000.0, 81000.0, 223.0, 446.0),
    gear("DIN 17 200, 38 Cr 2", 775.0, 450.0, 310.0, 211000.0, 81000.0, 207.0, 414.0),
    gear("DIN 17 200, 46 Cr 2", 875.0, 550.0, 350.0, 211000.0, 81000.0, 223.0, 446.0),
    gear("DIN 17 200, 34 Cr 4", 875.0, 590.0, 350.0, 211000.0, 81000.0, 223.0, 446.0),
    gear("DIN 17 200, 37 Cr 4", 925.0, 630.0, 370.0, 211000.0, 81000.0, 235.0, 470.0),
    gear("DIN 17 200, 41 Cr 4", 1000.0, 660.0, 400.0, 211000.0, 81000.0, 241.0, 482.0),
    gear("DIN 17 200, 25 CrMo 4", 875.0, 600.0, 350.0, 211000.0, 81000.0, 212.0, 424.0),
    gear("DIN 17 200, 34 CrMo 4", 1000.0, 650.0, 400.0, 211000.0, 81000.0, 223.0, 446.0),
    gear("DIN 17 200, 42 CrMo 4", 1100.0, 750.0, 550.0, 211000.0, 81000.0, 241.0, 482.0),
    gear("DIN 17 200, 50 CrMo 4", 1100.0, 780.0, 550.0, 211000.0, 81000.0, 248.0, 496.0),
    gear("DIN 17 200, 50 CrV 4", 1100.0, 800.0, 550.0, 211000.0, 81000.0, 248.0, 496.0),
    // Case-hardening steels
    gear("DIN 17 210, 17 Cr 3", 785.0, 440.0, 314.0, 211000.0, 81000.0, 174.0, 348.0),
    gear("DIN 17 210, 20 Cr 4", 830.0, 440.0, 332.0, 211000.0, 81000.0, 197.0, 394.0),
    gear("DIN 17 210, 16 MnCr 5", 880.0, 440.0, 352.0, 211000.0, 81000.0, 207.0, 414.0),
    gear("DIN 17 210, 20 MnCr 5", 1130.0, 540.0, 452.0, 211000.0, 81000.0, 217.0, 434.0),
    gear("DIN 17 210, 20 MoCr 4", 930.0, 590.0, 372.0, 211000.0, 81000.0, 207.0, 414.0),
    gear("DIN 17 210, 15 CrNi 6", 1030.0, 540.0, 412.0, 211000.0, 81000.0, 217.0, 434.0),
    gear("DIN 17 210, 18 CrNi 8", 1180.0, 785.0, 472.0, 211000.0, 81000.0, 248.0, 496.0),
    gear("DIN 17 440, 17 CrNiMo 6", 1200.0, 785.0, 480.0, 211000.0, 81000.0, 248.0, 496.0),
];

/// Gear-grade material catalog, built on first access
pub static GEAR_MATERIALS: Lazy<Vec<Material>> = Lazy::new(|| {
    ROWS.iter()
        .map(|row| row.to_material(MaterialCategory::Gear))
        .collect()
});
