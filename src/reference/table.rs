//! Reference rows and validated age tables.

use serde::{Deserialize, Serialize};

use crate::error::{GrowthError, Result};
use crate::math::{AgeRow, interpolate, lerp};

/// Power-transform (LMS) row: skewness `L`, median `M`, coefficient of variation `S`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LmsRow {
    pub age: f64,
    #[serde(rename = "L")]
    pub l: f64,
    #[serde(rename = "M")]
    pub m: f64,
    #[serde(rename = "S")]
    pub s: f64,
}

impl LmsRow {
    pub const fn new(age: f64, l: f64, m: f64, s: f64) -> Self {
        Self { age, l, m, s }
    }
}

impl AgeRow for LmsRow {
    fn age(&self) -> f64 {
        self.age
    }

    fn lerp(&self, other: &Self, fraction: f64) -> Self {
        Self {
            age: lerp(self.age, other.age, fraction),
            l: lerp(self.l, other.l, fraction),
            m: lerp(self.m, other.m, fraction),
            s: lerp(self.s, other.s, fraction),
        }
    }
}

/// Normal-approximation row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalRow {
    pub age: f64,
    pub mean: f64,
    pub sd: f64,
}

impl NormalRow {
    pub const fn new(age: f64, mean: f64, sd: f64) -> Self {
        Self { age, mean, sd }
    }
}

impl AgeRow for NormalRow {
    fn age(&self) -> f64 {
        self.age
    }

    fn lerp(&self, other: &Self, fraction: f64) -> Self {
        Self {
            age: lerp(self.age, other.age, fraction),
            mean: lerp(self.mean, other.mean, fraction),
            sd: lerp(self.sd, other.sd, fraction),
        }
    }
}

/// Row-level invariants checked when a table is built.
pub trait ReferenceRow: AgeRow {
    fn check(&self) -> std::result::Result<(), String>;
}

impl ReferenceRow for LmsRow {
    fn check(&self) -> std::result::Result<(), String> {
        if !(self.age.is_finite() && self.l.is_finite() && self.m.is_finite() && self.s.is_finite()) {
            return Err(format!("non-finite LMS row at age {}", self.age));
        }
        if self.m <= 0.0 || self.s <= 0.0 {
            return Err(format!("M and S must be > 0 (age {})", self.age));
        }
        Ok(())
    }
}

impl ReferenceRow for NormalRow {
    fn check(&self) -> std::result::Result<(), String> {
        if !(self.age.is_finite() && self.mean.is_finite() && self.sd.is_finite()) {
            return Err(format!("non-finite mean/SD row at age {}", self.age));
        }
        if self.mean <= 0.0 || self.sd <= 0.0 {
            return Err(format!("mean and SD must be > 0 (age {})", self.age));
        }
        Ok(())
    }
}

/// Rows strictly increasing by age, at least two of them.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeTable<R> {
    rows: Vec<R>,
}

impl<R: ReferenceRow> AgeTable<R> {
    pub fn new(rows: Vec<R>) -> Result<Self> {
        if rows.len() < 2 {
            return Err(GrowthError::InvalidTable(format!(
                "need at least 2 rows, got {}",
                rows.len()
            )));
        }
        for row in &rows {
            row.check().map_err(GrowthError::InvalidTable)?;
        }
        for pair in rows.windows(2) {
            if pair[1].age() <= pair[0].age() {
                return Err(GrowthError::InvalidTable(format!(
                    "ages must be strictly increasing ({} then {})",
                    pair[0].age(),
                    pair[1].age()
                )));
            }
        }
        Ok(Self { rows })
    }

    /// Built-in data is checked by tests rather than on every start-up.
    pub(crate) fn from_trusted(rows: Vec<R>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn min_age(&self) -> f64 {
        self.rows[0].age()
    }

    pub fn max_age(&self) -> f64 {
        self.rows[self.rows.len() - 1].age()
    }

    pub fn interpolate(&self, age: f64) -> Result<R> {
        interpolate(&self.rows, age)
    }
}

/// A reference table; the variant decides the normalization model.
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceTable {
    Lms(AgeTable<LmsRow>),
    Normal(AgeTable<NormalRow>),
}

impl ReferenceTable {
    pub fn lms(rows: Vec<LmsRow>) -> Result<Self> {
        AgeTable::new(rows).map(ReferenceTable::Lms)
    }

    pub fn normal(rows: Vec<NormalRow>) -> Result<Self> {
        AgeTable::new(rows).map(ReferenceTable::Normal)
    }

    pub fn len(&self) -> usize {
        match self {
            ReferenceTable::Lms(t) => t.rows().len(),
            ReferenceTable::Normal(t) => t.rows().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn min_age(&self) -> f64 {
        match self {
            ReferenceTable::Lms(t) => t.min_age(),
            ReferenceTable::Normal(t) => t.min_age(),
        }
    }

    pub fn max_age(&self) -> f64 {
        match self {
            ReferenceTable::Lms(t) => t.max_age(),
            ReferenceTable::Normal(t) => t.max_age(),
        }
    }

    pub fn ages(&self) -> Vec<f64> {
        match self {
            ReferenceTable::Lms(t) => t.rows().iter().map(|r| r.age).collect(),
            ReferenceTable::Normal(t) => t.rows().iter().map(|r| r.age).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_unsorted_and_invalid_tables() {
        assert!(matches!(
            ReferenceTable::lms(vec![LmsRow::new(0.0, 1.0, 50.0, 0.04)]),
            Err(GrowthError::InvalidTable(_))
        ));
        assert!(matches!(
            ReferenceTable::lms(vec![
                LmsRow::new(1.0, 1.0, 50.0, 0.04),
                LmsRow::new(1.0, 1.0, 51.0, 0.04),
            ]),
            Err(GrowthError::InvalidTable(_))
        ));
        assert!(matches!(
            ReferenceTable::normal(vec![
                NormalRow::new(0.0, 50.0, 2.0),
                NormalRow::new(1.0, 60.0, 0.0),
            ]),
            Err(GrowthError::InvalidTable(_))
        ));
        assert!(matches!(
            ReferenceTable::lms(vec![
                LmsRow::new(0.0, f64::NAN, 50.0, 0.04),
                LmsRow::new(1.0, 1.0, 51.0, 0.04),
            ]),
            Err(GrowthError::InvalidTable(_))
        ));
    }

    #[test]
    fn reports_domain_bounds() {
        let table = ReferenceTable::normal(vec![
            NormalRow::new(0.0, 50.0, 2.0),
            NormalRow::new(0.5, 66.0, 2.4),
            NormalRow::new(1.0, 75.0, 2.6),
        ])
        .unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.min_age(), 0.0);
        assert_eq!(table.max_age(), 1.0);
        assert_eq!(table.ages(), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn lms_rows_blend_every_field() {
        let a = LmsRow::new(0.0, 1.0, 50.0, 0.04);
        let b = LmsRow::new(1.0, -1.0, 70.0, 0.02);
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid.age, 0.5);
        assert_eq!(mid.l, 0.0);
        assert_eq!(mid.m, 60.0);
        assert!((mid.s - 0.03).abs() < 1e-12);
    }

    #[test]
    fn lms_rows_use_letter_keys_in_json() {
        let json = serde_json::to_string(&LmsRow::new(5.0, 0.542, 106.8, 0.0403)).unwrap();
        assert_eq!(json, r#"{"age":5.0,"L":0.542,"M":106.8,"S":0.0403}"#);
    }
}
