//! Plain-text result summaries

use helix_core::bearings::BearingCatalogEntry;
use helix_core::calculations::{BearingResult, ReducerResult, ShaftResult, SingleStageResult};
use helix_core::factors::{working_factor, DrivenLoad, PrimeMover};
use helix_core::materials::{Material, MaterialCategory};

const RULE: &str = "═══════════════════════════════════════";

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

fn banner(title: &str) {
    println!("{}", RULE);
    println!("  {}", title);
    println!("{}", RULE);
}

pub fn print_reducer(result: &ReducerResult) {
    let split = &result.ratio_analysis;
    let z = &result.tooth_counts;

    banner("TWO-STAGE REDUCER");
    println!();
    println!("Ratio:");
    println!("  Target:    {:.4}", split.target_ratio);
    println!(
        "  Achieved:  {:.4} = {}/{} x {}/{} ({:.2}% off)",
        result.total_ratio, z.stage1_gear, z.stage1_pinion, z.stage2_gear, z.stage2_pinion, split.error_percent
    );
    println!();
    println!("Speeds:");
    println!("  N1 = {:.1} rpm", result.speeds.input_rpm);
    println!("  N2 = {:.1} rpm", result.speeds.intermediate_rpm);
    println!("  N3 = {:.1} rpm (achieved {:.1})", result.speeds.output_rpm, split.achieved_output_speed_rpm());
    println!();
    println!("Output:");
    println!("  P = {:.2} kW (η = {:.2} per mesh)", result.output_power_kw, result.mesh_efficiency);
    println!("  T = {:.1} N·m", result.output_torque_nm);
    println!();

    print_stage("STAGE 1", &result.stage1);
    println!();
    print_stage("STAGE 2", &result.stage2);
}

pub fn print_stage(title: &str, stage: &SingleStageResult) {
    let g = &stage.geometry;
    let s = &stage.safety;

    banner(title);
    println!();
    println!(
        "  z = {}/{}, i = {:.3}, β = {:.1}°, T = {:.1} N·m at {:.1} rpm",
        stage.pinion_teeth, stage.gear_teeth, stage.ratio, stage.helix_angle_deg, stage.torque_nm, stage.speed_rpm
    );
    println!();
    println!("Module:");
    println!("  Bending:   {:.3} mm", stage.bending_module_mm);
    println!("  Surface:   {:.3} mm", stage.surface_module_mm);
    println!(
        "  Selected:  {} mm ({}{}{})",
        stage.module_mm,
        stage.governing.display_name(),
        if stage.module_overridden { ", override" } else { "" },
        if stage.exceeds_standard_series { ", beyond standard series" } else { "" }
    );
    println!();
    println!("Geometry:");
    println!("  d1 = {:.2}  d2 = {:.2}  a = {:.2} mm", g.pinion_pitch_diameter_mm, g.gear_pitch_diameter_mm, g.center_distance_mm);
    println!("  b  = {:.2} mm, εα = {:.3}", g.face_width_mm, stage.factors.contact_ratio);
    println!();
    println!("Forces:");
    println!(
        "  Ft = {:.1} N  Fr = {:.1} N  Fa = {:.1} N",
        stage.forces.tangential_n, stage.forces.radial_n, stage.forces.axial_n
    );
    println!();
    println!("Safety:");
    println!(
        "  Bending:  pinion {:.2}, gear {:.2} ({:.1} N/mm² allowable)",
        s.bending_pinion, s.bending_gear, s.allowable_bending_mpa
    );
    println!(
        "  Surface:  pinion {:.2}, gear {:.2} ({:.1} N/mm²)",
        s.surface_pinion, s.surface_gear, s.surface_pressure_mpa
    );
}

pub fn print_bearing(result: &BearingResult) {
    banner("BEARING LIFE");
    println!();
    println!("  Bearing:  {}", result.bearing);
    println!(
        "  Loads:    X = {:.2}, Y = {:.2}, e = {:.2}, Fa_eff = {:.0} N",
        result.load_factors.x, result.load_factors.y, result.load_factors.e, result.effective_axial_load_n
    );
    println!("  P = {:.0} N, C = {:.0} N, C_req = {:.0} N", result.equivalent_load_n, result.bearing.dynamic_rating_n, result.required_dynamic_rating_n);
    println!();
    println!(
        "  Life:    {:.0} h ({:.2}x required) {}",
        result.life_hours,
        result.life_ratio,
        status_icon(result.is_adequate)
    );
    println!(
        "  Static:  S0 = {:.2} (P0 = {:.0} N) {}",
        result.static_check.safety_factor,
        result.static_check.equivalent_load_n,
        status_icon(result.static_check.is_safe)
    );
    if let Some(speed) = &result.speed_check {
        println!(
            "  Speed:   grease {} {}, oil {} {}",
            speed.grease_limit_rpm.map_or("-".to_string(), |v| format!("{:.0}", v)),
            status_icon(speed.is_safe_grease),
            speed.oil_limit_rpm.map_or("-".to_string(), |v| format!("{:.0}", v)),
            status_icon(speed.is_safe_oil)
        );
    }
    if result.candidates_evaluated > 1 {
        println!("  ({} candidates evaluated)", result.candidates_evaluated);
    }
    println!();
    banner(&format!("RESULT: {}", if result.passes() { "PASS" } else { "FAIL" }));
}

pub fn print_shaft(result: &ShaftResult) {
    let r = &result.reactions;
    let m = &result.moments;

    banner("SHAFT");
    println!();
    println!("Reactions:");
    println!("  A: H = {:.1} N, V = {:.1} N", r.a_horizontal_n, r.a_vertical_n);
    println!("  B: H = {:.1} N, V = {:.1} N", r.b_horizontal_n, r.b_vertical_n);
    println!();
    println!("Moments:");
    println!("  Mb  = {:.1} N·m", m.bending_nmm / 1000.0);
    println!("  T   = {:.1} N·m", result.torque_nm);
    println!("  Meq = {:.1} N·m (k = {:.2})", m.equivalent_nmm / 1000.0, result.fatigue_multiplier);
    println!();
    println!("Diameter:");
    println!("  d_min = {:.2} mm -> d = {} mm", result.minimum_diameter_mm, result.standard_diameter_mm);
    println!(
        "  Extension {} x {} mm, key {}",
        result.extension.diameter_mm,
        result.extension.length_mm,
        result.keyway.designation()
    );
    println!();
    println!("Checks:");
    println!(
        "  Bending:  {:.1}/{:.1} N/mm² {}",
        result.stresses.bending_mpa,
        result.allowable_stress_mpa,
        status_icon(result.is_safe)
    );
    println!(
        "  Key:      {:.1}/{:.1} N/mm² (S = {:.2}) {}",
        result.keyway_check.pressure_mpa,
        result.keyway_check.allowable_pressure_mpa,
        result.keyway_check.safety_factor,
        status_icon(result.keyway_check.is_safe)
    );
}

pub fn print_bearing_catalog(bearings: &[&BearingCatalogEntry]) {
    println!(
        "{:<8} {:<22} {:>6} {:>6} {:>6} {:>8} {:>8}",
        "Bearing", "Kind", "d", "D", "B", "C", "C0"
    );
    for b in bearings {
        println!(
            "{:<8} {:<22} {:>6} {:>6} {:>6} {:>8} {:>8}",
            b.designation,
            b.kind.display_name(),
            b.bore_mm,
            b.outer_diameter_mm,
            b.width_mm,
            b.dynamic_rating_n,
            b.static_rating_n
        );
    }
}

pub fn print_materials(category: MaterialCategory, materials: &[Material]) {
    println!("{} materials", category);
    println!("{:<28} {:>6} {:>6} {:>6} {:>6}", "Name", "σK", "σAk", "σD", "PhD");
    for m in materials {
        println!(
            "{:<28} {:>6} {:>6} {:>6} {:>6}",
            m.name,
            m.ultimate_strength_mpa,
            m.yield_strength_mpa,
            m.durability_limit_mpa.map_or("-".to_string(), |v| v.to_string()),
            m.surface_pressure_mpa.map_or("-".to_string(), |v| v.to_string())
        );
    }
}

pub fn print_working_factors() {
    print!("{:<24}", "Ko");
    for load in DrivenLoad::ALL {
        print!(" {:>15}", load.display_name());
    }
    println!();
    for mover in PrimeMover::ALL {
        print!("{:<24}", mover.display_name());
        for load in DrivenLoad::ALL {
            print!(" {:>15.2}", working_factor(mover, load));
        }
        println!();
    }
}
