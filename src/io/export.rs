//! Export scored measurements to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{ChildInfo, Measurement, Metric};
use crate::error::AppError;

#[derive(Serialize)]
struct MeasurementCsvRow<'a> {
    patient_id: &'a str,
    full_name: &'a str,
    sex: &'a str,
    birth_date: Option<NaiveDate>,
    date: NaiveDate,
    age_years: Option<String>,
    height_cm: f64,
    height_sd: Option<f64>,
    weight_kg: f64,
    weight_sd: Option<f64>,
}

/// Write the session's measurements to a CSV file.
pub fn write_measurements_csv(
    path: &Path,
    child: &ChildInfo,
    measurements: &[Measurement],
) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::new(4, format!("Failed to create export CSV '{}': {e}", path.display())))?;

    for m in measurements {
        writer
            .serialize(MeasurementCsvRow {
                patient_id: child.display_id(),
                full_name: &child.full_name,
                sex: child.sex.as_str(),
                birth_date: child.birth_date,
                date: m.date,
                age_years: m.age.map(|a| format!("{a:.4}")),
                height_cm: m.height,
                height_sd: m.sd(Metric::Height),
                weight_kg: m.weight,
                weight_sd: m.sd(Metric::Weight),
            })
            .map_err(|e| AppError::new(4, format!("Failed to write export CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::new(4, format!("Failed to flush export CSV: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Sex;

    #[test]
    fn writes_header_and_rows() {
        let child = ChildInfo {
            patient_id: String::new(),
            full_name: "Yamada, Hanako".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2018, 6, 1),
            sex: Sex::Female,
        };
        let measurements = vec![Measurement {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            height: 114.5,
            weight: 20.1,
            age: Some(6.0),
            height_sd: Some(0.3),
            weight_sd: Some(0.2),
        }];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scored.csv");
        write_measurements_csv(&path, &child, &measurements).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "patient_id,full_name,sex,birth_date,date,age_years,height_cm,height_sd,weight_kg,weight_sd"
        );
        assert_eq!(
            lines[1],
            "0,\"Yamada, Hanako\",female,2018-06-01,2024-06-01,6.0000,114.5,0.3,20.1,0.2"
        );
    }
}
