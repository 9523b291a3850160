//! Reference set JSON documents.
//!
//! ```json
//! {
//!   "version": 1,
//!   "source": "jspe-2000-lms",
//!   "tables": [
//!     { "sex": "male", "metric": "height", "model": "lms",
//!       "rows": [{ "age": 0.0, "L": 2.3, "M": 49.0, "S": 0.0417 }, ...] },
//!     { "sex": "female", "metric": "weight", "model": "normal",
//!       "rows": [{ "age": 0.0, "mean": 3.0, "sd": 0.4 }, ...] }
//!   ]
//! }
//! ```
//!
//! Every table is validated on load; the model is chosen per table by `model`.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Metric, Sex};
use crate::error::AppError;
use crate::reference::{LmsRow, NormalRow, ReferenceTable, ReferenceTableStore};

pub const REFERENCE_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceDocument {
    pub version: u32,
    pub source: String,
    pub tables: Vec<TableEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableEntry {
    pub sex: Sex,
    pub metric: Metric,
    #[serde(flatten)]
    pub rows: TableRows,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "lowercase")]
pub enum TableRows {
    Lms { rows: Vec<LmsRow> },
    Normal { rows: Vec<NormalRow> },
}

impl ReferenceDocument {
    pub fn from_store(store: &ReferenceTableStore) -> Self {
        let tables = store
            .iter()
            .map(|(sex, metric, table)| TableEntry {
                sex,
                metric,
                rows: match table {
                    ReferenceTable::Lms(t) => TableRows::Lms {
                        rows: t.rows().to_vec(),
                    },
                    ReferenceTable::Normal(t) => TableRows::Normal {
                        rows: t.rows().to_vec(),
                    },
                },
            })
            .collect();
        Self {
            version: REFERENCE_FORMAT_VERSION,
            source: store.source().to_string(),
            tables,
        }
    }

    pub fn into_store(self) -> Result<ReferenceTableStore, AppError> {
        if self.version != REFERENCE_FORMAT_VERSION {
            return Err(AppError::new(
                2,
                format!(
                    "Unsupported reference format version {} (expected {REFERENCE_FORMAT_VERSION})",
                    self.version
                ),
            ));
        }
        let mut tables = Vec::with_capacity(self.tables.len());
        for entry in self.tables {
            let table = match entry.rows {
                TableRows::Lms { rows } => ReferenceTable::lms(rows),
                TableRows::Normal { rows } => ReferenceTable::normal(rows),
            }
            .map_err(|e| AppError::new(2, format!("{}/{}: {e}", entry.sex, entry.metric)))?;
            tables.push((entry.sex, entry.metric, table));
        }
        ReferenceTableStore::new(self.source, tables).map_err(|e| AppError::new(2, e.to_string()))
    }
}

/// Load and validate a reference set from JSON.
pub fn load_reference_json(path: &Path) -> Result<ReferenceTableStore, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(2, format!("Failed to open reference JSON '{}': {e}", path.display()))
    })?;
    let doc: ReferenceDocument = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid reference JSON '{}': {e}", path.display())))?;
    doc.into_store()
}

/// Write a reference set to JSON.
pub fn write_reference_json(path: &Path, store: &ReferenceTableStore) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(4, format!("Failed to create reference JSON '{}': {e}", path.display()))
    })?;
    serde_json::to_writer_pretty(file, &ReferenceDocument::from_store(store))
        .map_err(|e| AppError::new(4, format!("Failed to write reference JSON: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ModelKind, NormalizationModel};

    #[test]
    fn builtin_set_round_trips_through_json() {
        let store = ReferenceTableStore::builtin();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reference.json");
        write_reference_json(&path, &store).unwrap();
        let loaded = load_reference_json(&path).unwrap();
        assert_eq!(loaded, *store);
    }

    #[test]
    fn mixed_models_load_per_table() {
        let json = r#"{
            "version": 1,
            "source": "custom",
            "tables": [
                { "sex": "male", "metric": "height", "model": "lms",
                  "rows": [{ "age": 0, "L": 1.0, "M": 50.0, "S": 0.04 },
                           { "age": 1, "L": 1.0, "M": 75.0, "S": 0.03 }] },
                { "sex": "male", "metric": "weight", "model": "normal",
                  "rows": [{ "age": 0, "mean": 3.0, "sd": 0.4 },
                           { "age": 1, "mean": 9.5, "sd": 1.0 }] }
            ]
        }"#;
        let doc: ReferenceDocument = serde_json::from_str(json).unwrap();
        let store = doc.into_store().unwrap();
        assert_eq!(store.source(), "custom");
        assert_eq!(store.table(Sex::Male, Metric::Height).unwrap().kind(), ModelKind::Lms);
        assert_eq!(store.table(Sex::Male, Metric::Weight).unwrap().kind(), ModelKind::Normal);
        assert!(store.table(Sex::Female, Metric::Height).is_err());
    }

    #[test]
    fn unsorted_rows_are_rejected_with_table_name() {
        let json = r#"{
            "version": 1,
            "source": "bad",
            "tables": [
                { "sex": "female", "metric": "weight", "model": "normal",
                  "rows": [{ "age": 2, "mean": 12.0, "sd": 1.2 },
                           { "age": 1, "mean": 9.5, "sd": 1.0 }] }
            ]
        }"#;
        let doc: ReferenceDocument = serde_json::from_str(json).unwrap();
        let err = doc.into_store().unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().starts_with("female/weight"));
    }

    #[test]
    fn unknown_version_is_rejected() {
        let doc = ReferenceDocument {
            version: 7,
            source: "future".to_string(),
            tables: Vec::new(),
        };
        assert!(doc.into_store().is_err());
    }
}
