//! # Drafting Export
//!
//! Named data records for the gearbox drafting macro. Every record is one or
//! more lines of comma-joined numbers with two decimals:
//!
//! | Record | Fields |
//! |--------|--------|
//! | `Disli1.dat`, `Disli2.dat` | β, b, b, mn, 0, 0, d1, d2, a, da1, da2, df1, df2, z1, z2, Ft, Fa, Fr |
//! | `devir.dat` | N1, N2, N3 |
//! | `shaft.dat` | d, d_min, RA_H, RB_H, RA_V, RB_V, key b, h, t1, t2 |
//! | `bearing.dat` | one line per bearing: index, P0, C0, C_req, P, L10h, adequate (1/0) |
//!
//! `shaft.dat` and `bearing.dat` are only produced when shaft or bearing
//! results are supplied. Writing the records anywhere is up to the caller.

use serde::{Deserialize, Serialize};

use crate::calculations::bearing::BearingResult;
use crate::calculations::gear_stage::SingleStageResult;
use crate::calculations::reducer::ReducerResult;
use crate::calculations::shaft::ShaftResult;

/// One named export record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftingRecord {
    /// File name expected by the drafting macro
    pub name: String,
    /// Record text, newline terminated
    pub contents: String,
}

impl DraftingRecord {
    fn new(name: &str, contents: String) -> Self {
        DraftingRecord {
            name: name.to_string(),
            contents,
        }
    }
}

/// Results to export
#[derive(Debug, Clone, Copy)]
pub struct DraftingExport<'a> {
    pub reducer: &'a ReducerResult,
    pub shaft: Option<&'a ShaftResult>,
    pub bearings: &'a [BearingResult],
}

/// Format values as one record line: two decimals, ", " separated, newline
/// terminated
pub fn format_record(values: &[f64]) -> String {
    let mut line = values
        .iter()
        .map(|v| format!("{:.2}", v))
        .collect::<Vec<_>>()
        .join(", ");
    line.push('\n');
    line
}

fn stage_line(stage: &SingleStageResult) -> String {
    let g = &stage.geometry;
    format_record(&[
        stage.helix_angle_deg,
        g.face_width_mm,
        g.face_width_mm,
        stage.module_mm,
        // Addendum and dedendum are derived by the macro
        0.0,
        0.0,
        g.pinion_pitch_diameter_mm,
        g.gear_pitch_diameter_mm,
        g.center_distance_mm,
        g.pinion_tip_diameter_mm,
        g.gear_tip_diameter_mm,
        g.pinion_root_diameter_mm,
        g.gear_root_diameter_mm,
        stage.pinion_teeth as f64,
        stage.gear_teeth as f64,
        stage.forces.tangential_n,
        stage.forces.axial_n,
        stage.forces.radial_n,
    ])
}

fn shaft_line(shaft: &ShaftResult) -> String {
    let r = &shaft.reactions;
    let k = &shaft.keyway;
    format_record(&[
        shaft.standard_diameter_mm,
        shaft.minimum_diameter_mm,
        r.a_horizontal_n,
        r.b_horizontal_n,
        r.a_vertical_n,
        r.b_vertical_n,
        k.b,
        k.h,
        k.t1,
        k.t2,
    ])
}

fn bearing_line(index: usize, bearing: &BearingResult) -> String {
    format_record(&[
        (index + 1) as f64,
        bearing.static_check.equivalent_load_n,
        bearing.static_check.static_rating_n,
        bearing.required_dynamic_rating_n,
        bearing.equivalent_load_n,
        bearing.life_hours,
        if bearing.is_adequate { 1.0 } else { 0.0 },
    ])
}

/// Build the drafting records, in macro load order
pub fn drafting_records(export: &DraftingExport<'_>) -> Vec<DraftingRecord> {
    let speeds = &export.reducer.speeds;
    let mut records = vec![
        DraftingRecord::new("Disli1.dat", stage_line(&export.reducer.stage1)),
        DraftingRecord::new("Disli2.dat", stage_line(&export.reducer.stage2)),
        DraftingRecord::new(
            "devir.dat",
            format_record(&[speeds.input_rpm, speeds.intermediate_rpm, speeds.output_rpm]),
        ),
    ];

    if let Some(shaft) = export.shaft {
        records.push(DraftingRecord::new("shaft.dat", shaft_line(shaft)));
    }

    if !export.bearings.is_empty() {
        let lines: String = export
            .bearings
            .iter()
            .enumerate()
            .map(|(i, b)| bearing_line(i, b))
            .collect();
        records.push(DraftingRecord::new("bearing.dat", lines));
    }

    log::debug!("drafting export: {} records", records.len());
    records
}
