//! General structural materials for shafts and housings. No gear ratings;
//! Poisson ratio included.

use once_cell::sync::Lazy;

use super::{Material, MaterialCategory, MaterialRow};

const fn general(
    name: &'static str,
    sigma_k: f64,
    sigma_ak: f64,
    e: f64,
    g: f64,
    hb: f64,
    poisson: f64,
) -> MaterialRow {
    MaterialRow { name, sigma_k, sigma_ak, sigma_d: 0.0, e, g, hb, phd: 0.0, poisson }
}

const ROWS: [MaterialRow; 48] = [
    // Construction steels
    general("DIN 17 100, St 33", 320.0, 180.0, 211000.0, 81000.0, 100.0, 0.3),
    general("DIN 17 100, St 37", 360.0, 230.0, 211000.0, 81000.0, 120.0, 0.3),
    general("DIN 17 100, St 44", 410.0, 275.0, 211000.0, 81000.0, 140.0, 0.3),
    general("DIN 17 100, St 50", 490.0, 290.0, 211000.0, 81000.0, 160.0, 0.3),
    general("DIN 17 100, St 52", 510.0, 350.0, 211000.0, 81000.0, 200.0, 0.3),
    general("DIN 17 100, St 60", 590.0, 330.0, 211000.0, 81000.0, 195.0, 0.3),
    general("DIN 17 100, St 70", 690.0, 360.0, 211000.0, 81000.0, 205.0, 0.3),
    // Grey cast iron (GG)
    general("DIN 1691, GG 15", 150.0, 150.0, 100000.0, 40000.0, 205.0, 0.26),
    general("DIN 1691, GG 20", 200.0, 200.0, 100000.0, 40000.0, 230.0, 0.26),
    general("DIN 1691, GG 25", 250.0, 250.0, 100000.0, 40000.0, 250.0, 0.26),
    general("DIN 1691, GG 30", 300.0, 300.0, 100000.0, 40000.0, 275.0, 0.26),
    general("DIN 1691, GG 35", 315.0, 315.0, 100000.0, 40000.0, 285.0, 0.26),
    general("DIN 1691, GG 40", 400.0, 400.0, 100000.0, 40000.0, 310.0, 0.26),
    // Nodular cast iron (GGG)
    general("DIN 1693, GGG 40", 400.0, 250.0, 172000.0, 67200.0, 180.0, 0.28),
    general("DIN 1693, GGG 50", 500.0, 350.0, 172000.0, 67200.0, 240.0, 0.28),
    general("DIN 1693, GGG 60", 600.0, 420.0, 172000.0, 67200.0, 260.0, 0.28),
    general("DIN 1693, GGG 70", 700.0, 500.0, 172000.0, 67200.0, 300.0, 0.28),
    // Cast steel (GS)
    general("DIN 1681, GS 38", 380.0, 190.0, 205000.0, 79000.0, 150.0, 0.3),
    general("DIN 1681, GS 45", 450.0, 230.0, 205000.0, 79000.0, 150.0, 0.3),
    general("DIN 1681, GS 52", 520.0, 260.0, 205000.0, 79000.0, 150.0, 0.3),
    general("DIN 1681, GS 60", 600.0, 300.0, 205000.0, 79000.0, 150.0, 0.3),
    general("DIN 1681, GS 70", 700.0, 350.0, 205000.0, 79000.0, 150.0, 0.3),
    // Heat-treatable steels
    general("DIN 17 200, Ck 25", 490.0, 290.0, 211000.0, 81000.0, 155.0, 0.3),
    general("DIN 17 200, Ck 35", 540.0, 320.0, 211000.0, 81000.0, 183.0, 0.3),
    general("DIN 17 200, Ck 45", 620.0, 370.0, 211000.0, 81000.0, 205.0, 0.3),
    general("DIN 17 200, Ck 55", 660.0, 420.0, 211000.0, 81000.0, 229.0, 0.3),
    general("DIN 17 200, Ck 60", 740.0, 450.0, 211000.0, 81000.0, 241.0, 0.3),
    general("DIN 17 200, 28 Mn 6", 690.0, 490.0, 211000.0, 81000.0, 223.0, 0.3),
    general("DIN 17 200, 38 Cr 2", 700.0, 450.0, 211000.0, 81000.0, 207.0, 0.3),
    general("DIN 17 200, 46 Cr 2", 800.0, 550.0, 211000.0, 81000.0, 223.0, 0.3),
    general("DIN 17 200, 34 Cr 4", 800.0, 590.0, 211000.0, 81000.0, 223.0, 0.3),
    general("DIN 17 200, 37 Cr 4", 850.0, 630.0, 211000.0, 81000.0, 235.0, 0.3),
    general("DIN 17 200, 41 Cr 4", 690.0, 460.0, 211000.0, 81000.0, 241.0, 0.3),
    // Chromium-molybdenum alloys
    general("DIN 17 200, 25 CrMo 4", 690.0, 460.0, 211000.0, 81000.0, 212.0, 0.3),
    general("DIN 17 200, 34 CrMo 4", 800.0, 590.0, 211000.0, 81000.0, 223.0, 0.3),
    general("DIN 17 200, 42 CrMo 4", 880.0, 630.0, 211000.0, 81000.0, 241.0, 0.3),
    general("DIN 17 200, 50 CrMo 4", 880.0, 680.0, 211000.0, 81000.0, 248.0, 0.3),
    general("DIN 17 200, 50 CrV 4", 1000.0, 800.0, 211000.0, 81000.0, 248.0, 0.3),
    general("DIN 17 200, 36 CrNiMo 4", 1000.0, 800.0, 211000.0, 81000.0, 248.0, 0.3),
    general("DIN 17 200, 34 CrNiMo 4", 1100.0, 900.0, 211000.0, 81000.0, 248.0, 0.3),
    general("DIN 17 200, 30 CrNiMo 8", 1250.0, 920.0, 211000.0, 81000.0, 248.0, 0.3),
    // Case-hardening steels
    general("DIN 17 210, Ck 10", 490.0, 300.0, 211000.0, 81000.0, 131.0, 0.3),
    general("DIN 17 210, Ck 15", 590.0, 360.0, 211000.0, 81000.0, 143.0, 0.3),
    general("DIN 17 210, 17 Cr 3", 690.0, 440.0, 211000.0, 81000.0, 174.0, 0.3),
    general("DIN 17 210, 20 Cr 4", 730.0, 440.0, 211000.0, 81000.0, 197.0, 0.3),
    general("DIN 17 210, 16 MnCr 5", 780.0, 440.0, 211000.0, 81000.0, 207.0, 0.3),
    general("DIN 17 210, 20 MnCr 5", 980.0, 540.0, 211000.0, 81000.0, 217.0, 0.3),
    general("DIN 17 210, 20 MoCr 4", 780.0, 590.0, 211000.0, 81000.0, 207.0, 0.3),
];

/// General structural material catalog, built on first access
pub static GENERAL_MATERIALS: Lazy<Vec<Material>> = Lazy::new(|| {
    ROWS.iter()
        .map(|row| row.to_material(MaterialCategory::General))
        .collect()
});
