//! Formatted terminal output.
//!
//! Formatting lives here so the scoring code stays free of presentation.

use crate::domain::{ChildInfo, Measurement, Metric, Sex};
use crate::io::ingest::RowError;
use crate::models::NormalizationModel;
use crate::reference::ReferenceTable;
use crate::report::classify;

/// `+1.1 SD`, `0.0 SD`, `-2.5 SD`.
pub fn fmt_sd(sd: f64) -> String {
    if sd > 0.0 {
        format!("+{sd:.1} SD")
    } else {
        format!("{:.1} SD", sd + 0.0)
    }
}

fn fmt_sd_cell(metric: Metric, sd: Option<f64>) -> String {
    match sd {
        Some(v) => format!("{}{}", fmt_sd(v), classify(metric, v).marker()),
        None => "-".to_string(),
    }
}

/// Header block describing the child.
pub fn format_child_summary(child: &ChildInfo) -> String {
    let mut out = String::new();
    out.push_str("=== growth - SD scores (JSPE 2000 reference) ===\n");
    out.push_str(&format!("Patient ID: {}", child.display_id()));
    if !child.full_name.trim().is_empty() {
        out.push_str(&format!(" / Name: {}", child.full_name.trim()));
    }
    out.push('\n');
    let birth = child
        .birth_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());
    out.push_str(&format!("Birth date: {birth} | Sex: {}\n", child.sex));
    out
}

/// Results table: one line per measurement, in session order.
pub fn format_measurements(measurements: &[Measurement]) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:>3} {:<10} {:>6} {:>8} {:>10} {:>8} {:>10}\n",
            "#", "date", "age", "height", "height SD", "weight", "weight SD"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<3} {:-<10} {:-<6} {:-<8} {:-<10} {:-<8} {:-<10}\n",
            "", "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for (idx, m) in measurements.iter().enumerate() {
        let age = m
            .age
            .map(|a| format!("{a:.1}y"))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(
            format!(
                "{:>3} {:<10} {:>6} {:>8.1} {:>10} {:>8.1} {:>10}\n",
                idx,
                m.date,
                age,
                m.height,
                fmt_sd_cell(Metric::Height, m.height_sd),
                m.weight,
                fmt_sd_cell(Metric::Weight, m.weight_sd),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out.push_str("(* beyond ±2 SD, ! beyond ±2.5 SD for height or ±2 SD for weight)\n");
    out
}

/// Rows that were skipped during ingest or scoring.
pub fn format_row_errors(errors: &[RowError]) -> String {
    let mut out = String::new();
    if errors.is_empty() {
        return out;
    }
    out.push_str(&format!("Skipped rows: {}\n", errors.len()));
    for e in errors {
        out.push_str(&format!("  line {}: {}\n", e.line, e.message));
    }
    out
}

/// Print a reference table with its model parameters.
pub fn format_reference_table(sex: Sex, metric: Metric, table: &ReferenceTable) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Reference: {} {} ({}), {} rows, ages {:.2}-{:.2}\n",
        sex.display_name(),
        metric,
        table.kind().display_name(),
        table.len(),
        table.min_age(),
        table.max_age(),
    ));

    match table {
        ReferenceTable::Lms(t) => {
            out.push_str(&format!("{:>6} {:>8} {:>8} {:>8}\n", "age", "L", "M", "S"));
            for r in t.rows() {
                out.push_str(&format!("{:>6.2} {:>8.3} {:>8.2} {:>8.4}\n", r.age, r.l, r.m, r.s));
            }
        }
        ReferenceTable::Normal(t) => {
            out.push_str(&format!("{:>6} {:>8} {:>8}\n", "age", "mean", "sd"));
            for r in t.rows() {
                out.push_str(&format!("{:>6.2} {:>8.2} {:>8.3}\n", r.age, r.mean, r.sd));
            }
        }
    }

    out
}
