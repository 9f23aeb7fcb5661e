//! Property tests across the public calculation API.

use approx::assert_relative_eq;
use proptest::prelude::*;

use helix_core::bearings::BearingCatalogEntry;
use helix_core::calculations::bearing::{select_bearing, BearingInput, BearingSelection, Mounting};
use helix_core::calculations::gear_stage::{size_stage, GearForces, ModuleChoice, StageInput};
use helix_core::calculations::ratio::{distribute_ratio, RatioInput};
use helix_core::calculations::shaft::{size_shaft, ShaftInput};
use helix_core::DesignConstants;

const CK45: &str = "DIN 17 200, Ck 45";
const ST50: &str = "DIN 17 100, St 50";

fn stage(power_kw: f64, speed_rpm: f64, ratio: f64, helix_deg: f64) -> StageInput {
    StageInput::new(power_kw, speed_rpm, ratio, helix_deg, CK45, 0.6)
}

fn bearing_input(radial_n: f64, axial_n: f64, speed_rpm: f64, entry: BearingCatalogEntry) -> BearingInput {
    BearingInput {
        radial_load_n: radial_n,
        axial_load_n: axial_n,
        speed_rpm,
        desired_life_hours: 20000.0,
        mounting: Mounting::Single,
        selection: Some(BearingSelection::Entry(entry)),
    }
}

proptest! {
    #[test]
    fn achieved_ratio_is_product_of_tooth_ratios(
        ng in 300.0f64..3000.0,
        reduction in 2.0f64..60.0,
        z1 in 10u32..40,
        z3 in 10u32..40,
    ) {
        let split = distribute_ratio(&RatioInput {
            input_speed_rpm: ng,
            output_speed_rpm: ng / reduction,
            stage1_pinion_teeth: Some(z1),
            stage2_pinion_teeth: Some(z3),
        }, &DesignConstants::default());
        let counts = split.tooth_counts;

        prop_assert_eq!(split.stage1_ratio, counts.stage1_gear as f64 / z1 as f64);
        prop_assert_eq!(split.stage2_ratio, counts.stage2_gear as f64 / z3 as f64);
        prop_assert_eq!(split.achieved_ratio, split.stage1_ratio * split.stage2_ratio);
        prop_assert!(split.error_percent >= 0.0);
    }

    #[test]
    fn module_never_shrinks_with_torque(
        power in 0.5f64..40.0,
        scale in 1.0f64..5.0,
        speed in 200.0f64..3000.0,
        ratio in 2.0f64..6.0,
        helix in 0.0f64..30.0,
    ) {
        let constants = DesignConstants::default();
        let base = size_stage(&stage(power, speed, ratio, helix), &constants).unwrap();
        let scaled = size_stage(&stage(power * scale, speed, ratio, helix), &constants).unwrap();

        prop_assert!(scaled.theoretical_module_mm >= base.theoretical_module_mm * (1.0 - 1e-12));
        prop_assert!(scaled.module_mm >= base.module_mm);
    }

    #[test]
    fn required_safety_only_grows_the_module(
        power in 0.5f64..30.0,
        speed in 300.0f64..3000.0,
        safety in 1.0f64..2.0,
        extra in 0.0f64..1.5,
    ) {
        let constants = DesignConstants::default();
        let mut low = stage(power, speed, 4.0, 15.0);
        low.bending_safety = safety;
        low.surface_safety = safety;
        let mut high = low.clone();
        high.bending_safety = safety + extra;
        high.surface_safety = safety + extra;

        let low_result = size_stage(&low, &constants).unwrap();
        let high_result = size_stage(&high, &constants).unwrap();
        prop_assert!(high_result.module_mm >= low_result.module_mm);

        // At a fixed module the achieved safety does not depend on the requirement
        low.module = ModuleChoice::Override(low_result.module_mm);
        high.module = ModuleChoice::Override(low_result.module_mm);
        let low_fixed = size_stage(&low, &constants).unwrap();
        let high_fixed = size_stage(&high, &constants).unwrap();
        prop_assert!(high_fixed.safety.minimum() <= low_fixed.safety.minimum());
    }

    #[test]
    fn higher_dynamic_rating_never_shortens_life(
        radial in 500.0f64..20000.0,
        axial in 0.0f64..5000.0,
        speed in 50.0f64..3000.0,
        boost in 1.0f64..3.0,
        index in 0usize..66,
    ) {
        let catalog = &*helix_core::bearings::BEARING_CATALOG;
        let base = catalog[index % catalog.len()].clone();
        let mut stronger = base.clone();
        stronger.dynamic_rating_n *= boost;

        let weak = select_bearing(&bearing_input(radial, axial, speed, base)).unwrap();
        let strong = select_bearing(&bearing_input(radial, axial, speed, stronger)).unwrap();
        prop_assert!(strong.life_hours >= weak.life_hours);
    }

    #[test]
    fn symmetric_span_splits_loads_evenly(
        ft in 100.0f64..20000.0,
        fr in 0.0f64..8000.0,
        span in 20.0f64..300.0,
        d in 40.0f64..500.0,
    ) {
        let forces = GearForces { tangential_n: ft, radial_n: fr, axial_n: 0.0, pitch_diameter_mm: d };
        let result = size_shaft(&ShaftInput::new(5.0, 500.0, forces, span, span, ST50)).unwrap();
        let r = result.reactions;

        prop_assert!((r.a_vertical_n - r.b_vertical_n).abs() <= 1e-9 * fr.max(1.0));
        prop_assert!((r.a_horizontal_n - r.b_horizontal_n).abs() <= 1e-9 * ft);
    }
}

/// Stage forces on a centered span reduce to Mb = F·L/4
#[test]
fn stage_forces_on_centered_span_give_point_load_moment() {
    let result = size_stage(&stage(7.5, 1450.0, 4.0, 15.0), &DesignConstants::default()).unwrap();
    let mut forces = result.forces;
    forces.axial_n = 0.0;

    let span = 150.0;
    let shaft = size_shaft(&ShaftInput::new(7.5, 1450.0, forces, span / 2.0, span / 2.0, ST50)).unwrap();
    let resultant = forces.tangential_n.hypot(forces.radial_n);
    assert_relative_eq!(shaft.moments.bending_nmm, resultant * span / 4.0, epsilon = 1e-6);
}

#[test]
fn ten_to_one_reducer_split() {
    let split = distribute_ratio(&RatioInput {
        input_speed_rpm: 1000.0,
        output_speed_rpm: 100.0,
        stage1_pinion_teeth: Some(20),
        stage2_pinion_teeth: Some(22),
    }, &DesignConstants::default());
    assert_relative_eq!(split.target_ratio, 10.0);
    assert_eq!(split.tooth_counts.stage1_gear, 63);
    assert_eq!(split.tooth_counts.stage2_gear, 70);
    assert!(split.error_percent > 0.0 && split.error_percent < 3.0);
}

#[test]
fn deep_groove_reference_bearing() {
    let input = BearingInput {
        radial_load_n: 4800.0,
        axial_load_n: 0.0,
        speed_rpm: 500.0,
        desired_life_hours: 22000.0,
        mounting: Mounting::Single,
        selection: Some(BearingSelection::Designation("6205".to_string())),
    };
    let result = select_bearing(&input).unwrap();
    assert_eq!(result.equivalent_load_n, 4800.0);
    assert_relative_eq!(result.life_hours, (14000.0f64 / 4800.0).powi(3) * 1e6 / (60.0 * 500.0));
    assert_eq!(result.is_adequate, result.life_hours >= 22000.0);
}

#[test]
fn symmetric_reference_shaft() {
    let forces = GearForces { tangential_n: 2000.0, radial_n: 800.0, axial_n: 0.0, pitch_diameter_mm: 200.0 };
    let result = size_shaft(&ShaftInput::new(5.5, 300.0, forces, 60.0, 60.0, ST50)).unwrap();
    assert_eq!(result.reactions.a_vertical_n, 400.0);
    assert_eq!(result.reactions.b_vertical_n, 400.0);
    assert_eq!(result.reactions.a_horizontal_n, 1000.0);
    assert_eq!(result.reactions.b_horizontal_n, 1000.0);
}
