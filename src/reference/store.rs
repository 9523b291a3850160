//! Immutable (sex, metric) -> table store.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use crate::domain::{Metric, Sex};
use crate::error::{GrowthError, Result};
use crate::reference::builtin::{
    BUILTIN_SOURCE, FEMALE_HEIGHT, FEMALE_WEIGHT, MALE_HEIGHT, MALE_WEIGHT,
};
use crate::reference::table::{AgeTable, LmsRow, ReferenceTable};

static BUILTIN: OnceLock<Arc<ReferenceTableStore>> = OnceLock::new();

fn lms(rows: &[LmsRow]) -> ReferenceTable {
    ReferenceTable::Lms(AgeTable::from_trusted(rows.to_vec()))
}

/// Reference tables keyed by sex and metric.
///
/// Loaded once, never mutated; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTableStore {
    source: String,
    tables: BTreeMap<(Sex, Metric), ReferenceTable>,
}

impl ReferenceTableStore {
    /// Build a store, rejecting duplicate (sex, metric) entries.
    pub fn new(
        source: impl Into<String>,
        tables: impl IntoIterator<Item = (Sex, Metric, ReferenceTable)>,
    ) -> Result<Self> {
        let mut map = BTreeMap::new();
        for (sex, metric, table) in tables {
            if map.insert((sex, metric), table).is_some() {
                return Err(GrowthError::InvalidTable(format!(
                    "duplicate table for {sex}/{metric}"
                )));
            }
        }
        if map.is_empty() {
            return Err(GrowthError::InvalidTable("reference set has no tables".to_string()));
        }
        Ok(Self {
            source: source.into(),
            tables: map,
        })
    }

    /// The shipped JSPE 2000 LMS tables.
    pub fn builtin() -> Arc<Self> {
        BUILTIN
            .get_or_init(|| {
                let tables = BTreeMap::from([
                    ((Sex::Male, Metric::Height), lms(&MALE_HEIGHT)),
                    ((Sex::Male, Metric::Weight), lms(&MALE_WEIGHT)),
                    ((Sex::Female, Metric::Height), lms(&FEMALE_HEIGHT)),
                    ((Sex::Female, Metric::Weight), lms(&FEMALE_WEIGHT)),
                ]);
                Arc::new(Self {
                    source: BUILTIN_SOURCE.to_string(),
                    tables,
                })
            })
            .clone()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn table(&self, sex: Sex, metric: Metric) -> Result<&ReferenceTable> {
        self.tables
            .get(&(sex, metric))
            .ok_or_else(|| GrowthError::UnknownTable {
                sex: sex.to_string(),
                metric: metric.to_string(),
            })
    }

    /// Highest tabulated age for the pair (curve sampling default).
    pub fn upper_bound(&self, sex: Sex, metric: Metric) -> Result<f64> {
        self.table(sex, metric).map(ReferenceTable::max_age)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Sex, Metric, &ReferenceTable)> {
        self.tables.iter().map(|((sex, metric), t)| (*sex, *metric, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_AGES: [f64; 40] = [
        0.0, 0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0, 5.5, 6.0,
        6.5, 7.0, 7.5, 8.0, 8.5, 9.0, 9.5, 10.0, 10.5, 11.0, 11.5, 12.0, 12.5, 13.0, 13.5, 14.0,
        14.5, 15.0, 15.5, 16.0, 16.5, 17.0, 17.5,
    ];

    #[test]
    fn builtin_tables_pass_validation_and_share_the_age_grid() {
        let store = ReferenceTableStore::builtin();
        assert_eq!(store.source(), BUILTIN_SOURCE);
        assert_eq!(store.iter().count(), 4);
        for (sex, metric, table) in store.iter() {
            let ReferenceTable::Lms(t) = table else {
                panic!("{sex}/{metric} should be an LMS table");
            };
            AgeTable::new(t.rows().to_vec()).unwrap();
            assert_eq!(table.ages(), EXPECTED_AGES.to_vec(), "{sex}/{metric}");
            assert_eq!(store.upper_bound(sex, metric).unwrap(), 17.5);
        }
    }

    #[test]
    fn builtin_rows_match_published_values() {
        let store = ReferenceTableStore::builtin();
        let ReferenceTable::Lms(t) = store.table(Sex::Male, Metric::Weight).unwrap() else {
            panic!("expected LMS");
        };
        assert_eq!(t.interpolate(10.0).unwrap(), LmsRow::new(10.0, -1.191, 31.4, 0.189));
        let ReferenceTable::Lms(t) = store.table(Sex::Male, Metric::Height).unwrap() else {
            panic!("expected LMS");
        };
        assert_eq!(t.interpolate(5.0).unwrap().m, 106.8);
    }

    #[test]
    fn every_builtin_row_is_returned_unchanged_at_its_age() {
        let store = ReferenceTableStore::builtin();
        for sex in Sex::ALL {
            for metric in Metric::ALL {
                let ReferenceTable::Lms(t) = store.table(sex, metric).unwrap() else {
                    panic!("{sex}/{metric} should be an LMS table");
                };
                for row in t.rows() {
                    assert_eq!(t.interpolate(row.age).unwrap(), *row, "{sex}/{metric} at {}", row.age);
                }
            }
        }
    }

    #[test]
    fn missing_pair_is_unknown_table() {
        let rows = vec![LmsRow::new(0.0, 1.0, 50.0, 0.04), LmsRow::new(1.0, 1.0, 75.0, 0.03)];
        let store = ReferenceTableStore::new(
            "test",
            [(Sex::Female, Metric::Height, ReferenceTable::lms(rows).unwrap())],
        )
        .unwrap();
        assert!(matches!(
            store.table(Sex::Male, Metric::Height),
            Err(GrowthError::UnknownTable { .. })
        ));
    }

    #[test]
    fn duplicate_pairs_are_rejected() {
        let rows = vec![LmsRow::new(0.0, 1.0, 50.0, 0.04), LmsRow::new(1.0, 1.0, 75.0, 0.03)];
        let table = ReferenceTable::lms(rows).unwrap();
        let err = ReferenceTableStore::new(
            "dup",
            [
                (Sex::Male, Metric::Height, table.clone()),
                (Sex::Male, Metric::Height, table),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, GrowthError::InvalidTable(_)));
    }
}
