//! Read/write sampled curve bundles.
//!
//! Curve JSON is the hand-off to the chart renderer:
//! - sex and reference set the curves were sampled from
//! - the age grid used
//! - every curve with its SD level, style hint and points
//!
//! The CSV form is long format (one row per point) for spreadsheets.

use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::domain::{Curve, CurveFile, CurveGrid, CurveStyle, Sex};
use crate::error::AppError;

/// Tool name written into curve files.
pub const TOOL_NAME: &str = "growth";

pub fn curve_file(reference: &str, sex: Sex, grid: CurveGrid, curves: Vec<Curve>) -> CurveFile {
    CurveFile {
        tool: TOOL_NAME.to_string(),
        reference: reference.to_string(),
        sex,
        grid,
        curves,
    }
}

/// Write a curve JSON file.
pub fn write_curve_json(path: &Path, curves: &CurveFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(4, format!("Failed to create curve JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, curves)
        .map_err(|e| AppError::new(4, format!("Failed to write curve JSON: {e}")))?;
    Ok(())
}

/// Read a curve JSON file.
pub fn read_curve_json(path: &Path) -> Result<CurveFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open curve JSON '{}': {e}", path.display())))?;
    let curves: CurveFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid curve JSON: {e}")))?;
    Ok(curves)
}

#[derive(Serialize)]
struct CurveCsvRow<'a> {
    sex: Sex,
    metric: &'a str,
    sd_level: f64,
    label: &'a str,
    style: &'a str,
    age: f64,
    value: f64,
}

/// Write curves as long-format CSV.
pub fn write_curves_csv(path: &Path, curves: &[Curve]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::new(4, format!("Failed to create curve CSV '{}': {e}", path.display())))?;

    for curve in curves {
        let label = curve.label();
        let style = match curve.style {
            CurveStyle::Standard => "standard",
            CurveStyle::Median => "median",
            CurveStyle::Threshold => "threshold",
        };
        for p in &curve.points {
            writer
                .serialize(CurveCsvRow {
                    sex: curve.sex,
                    metric: curve.metric.as_str(),
                    sd_level: curve.sd_level,
                    label: &label,
                    style,
                    age: p.age,
                    value: p.value,
                })
                .map_err(|e| AppError::new(4, format!("Failed to write curve CSV row: {e}")))?;
        }
    }

    writer
        .flush()
        .map_err(|e| AppError::new(4, format!("Failed to flush curve CSV: {e}")))?;
    Ok(())
}
