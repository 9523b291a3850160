//! Measurement CSV ingest.
//!
//! Turns a `date,height,weight` CSV into typed measurement inputs. Parsing is
//! row-tolerant: malformed rows are collected as `RowError`s and skipped, and
//! blank height/weight cells are kept as `None` so the session can report them
//! as missing inputs.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::error::AppError;

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

/// One parsed CSV row, before scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementInput {
    /// 1-based CSV line (header is line 1).
    pub line: usize,
    pub date: NaiveDate,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

/// A row-level error encountered during ingest or scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct IngestedMeasurements {
    pub rows: Vec<MeasurementInput>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Load measurement rows from a CSV file.
pub fn load_measurements(path: &Path) -> Result<IngestedMeasurements, AppError> {
    let file = std::fs::File::open(path).map_err(|e| {
        AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display()))
    })?;
    read_measurements(file)
}

/// Parse measurement rows from any reader.
pub fn read_measurements<R: Read>(input: R) -> Result<IngestedMeasurements, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);
    for required in ["date", "height", "weight"] {
        if !header_map.contains_key(required) {
            return Err(AppError::new(2, format!("Missing required column: `{required}`")));
        }
    }

    let mut out = IngestedMeasurements::default();
    for (idx, result) in reader.records().enumerate() {
        let line = idx + 2;
        out.rows_read += 1;

        let parsed = result
            .map_err(|e| format!("CSV parse error: {e}"))
            .and_then(|record| parse_row(&record, &header_map, line));
        match parsed {
            Ok(row) => out.rows.push(row),
            Err(message) => out.row_errors.push(RowError { line, message }),
        }
    }

    Ok(out)
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports often prefix the first header with a UTF-8 BOM.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn parse_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    line: usize,
) -> Result<MeasurementInput, String> {
    let date = cell(record, header_map, "date").ok_or_else(|| "missing `date`".to_string())?;
    let date = parse_date(date)?;

    Ok(MeasurementInput {
        line,
        date,
        height: parse_opt_f64(cell(record, header_map, "height"), "height")?,
        weight: parse_opt_f64(cell(record, header_map, "weight"), "weight")?,
    })
}

fn cell<'a>(record: &'a StringRecord, header_map: &HashMap<String, usize>, name: &str) -> Option<&'a str> {
    header_map
        .get(name)
        .and_then(|&idx| record.get(idx))
        .filter(|s| !s.is_empty())
}

/// Parse a calendar date in ISO (`2024-05-01`) or slash/dot form.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .ok_or_else(|| format!("invalid date `{s}` (expected YYYY-MM-DD)"))
}

fn parse_opt_f64(s: Option<&str>, field: &str) -> Result<Option<f64>, String> {
    match s {
        None => Ok(None),
        Some(raw) => raw
            .parse::<f64>()
            .map(Some)
            .map_err(|_| format!("invalid {field} `{raw}`")),
    }
}
