//! Measurement session: one child, an ordered list of scored measurements.
//!
//! The session is an explicit object owned by the caller. It is mutated only
//! through its operations, and each operation either applies completely or
//! leaves the session untouched.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{ChildInfo, CurvePoint, Measurement, Metric, Sex};
use crate::error::{GrowthError, Result};
use crate::reference::ReferenceTableStore;
use crate::score::score;

/// Average month length (days) used by the age unit.
pub const DAYS_PER_MONTH: f64 = 30.44;

/// Oldest accepted measurement age in years.
pub const MAX_AGE_YEARS: f64 = 18.0;

/// Decimal age in years: `days / 30.44 / 12`.
///
/// Scores and curves are only comparable when every caller uses this unit.
pub fn compute_age(birth_date: NaiveDate, measurement_date: NaiveDate) -> f64 {
    let days = (measurement_date - birth_date).num_days() as f64;
    days / DAYS_PER_MONTH / 12.0
}

fn check_age(age: f64) -> Result<f64> {
    if (0.0..=MAX_AGE_YEARS).contains(&age) {
        Ok(age)
    } else {
        Err(GrowthError::AgeOutOfRange { age })
    }
}

#[derive(Debug, Clone)]
pub struct MeasurementSession {
    store: Arc<ReferenceTableStore>,
    child: ChildInfo,
    measurements: Vec<Measurement>,
}

impl MeasurementSession {
    pub fn new(store: Arc<ReferenceTableStore>, child: ChildInfo) -> Self {
        Self {
            store,
            child,
            measurements: Vec::new(),
        }
    }

    /// Restore a session from previously recorded entries, kept as-is.
    pub fn with_measurements(
        store: Arc<ReferenceTableStore>,
        child: ChildInfo,
        measurements: Vec<Measurement>,
    ) -> Self {
        Self {
            store,
            child,
            measurements,
        }
    }

    pub fn child(&self) -> &ChildInfo {
        &self.child
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Update identity fields; these never affect scores.
    pub fn set_identity(&mut self, patient_id: impl Into<String>, full_name: impl Into<String>) {
        self.child.patient_id = patient_id.into();
        self.child.full_name = full_name.into();
    }

    /// Score and append a measurement taken on `date`.
    pub fn add_measurement(
        &mut self,
        date: NaiveDate,
        height: Option<f64>,
        weight: Option<f64>,
    ) -> Result<&Measurement> {
        let birth_date = self.child.birth_date.ok_or(GrowthError::Validation("birth date"))?;
        let height = height.ok_or(GrowthError::Validation("height"))?;
        let weight = weight.ok_or(GrowthError::Validation("weight"))?;

        let age = check_age(compute_age(birth_date, date))?;
        let (height_sd, weight_sd) = self.score_pair(height, weight, age, self.child.sex)?;

        self.measurements.push(Measurement {
            date,
            height,
            weight,
            age: Some(age),
            height_sd: Some(height_sd),
            weight_sd: Some(weight_sd),
        });
        Ok(&self.measurements[self.measurements.len() - 1])
    }

    /// Remove and return the measurement at `index`.
    pub fn delete_measurement(&mut self, index: usize) -> Result<Measurement> {
        if index >= self.measurements.len() {
            return Err(GrowthError::IndexOutOfBounds {
                index,
                len: self.measurements.len(),
            });
        }
        Ok(self.measurements.remove(index))
    }

    /// Switch the child's sex and re-score every entry that has an age.
    ///
    /// Entries without an age are left untouched.
    pub fn recompute_for_sex(&mut self, sex: Sex) -> Result<()> {
        let mut rescored = Vec::with_capacity(self.measurements.len());
        for m in &self.measurements {
            match m.age {
                Some(age) => rescored.push(Some(self.score_pair(m.height, m.weight, age, sex)?)),
                None => rescored.push(None),
            }
        }

        self.child.sex = sex;
        for (m, scores) in self.measurements.iter_mut().zip(rescored) {
            if let Some((height_sd, weight_sd)) = scores {
                m.height_sd = Some(height_sd);
                m.weight_sd = Some(weight_sd);
            }
        }
        Ok(())
    }

    /// Change the birth date; every age and score is recomputed.
    ///
    /// Fails without changes if any measurement would leave the 0-18y window.
    pub fn set_birth_date(&mut self, birth_date: NaiveDate) -> Result<()> {
        let sex = self.child.sex;
        let mut updated = Vec::with_capacity(self.measurements.len());
        for m in &self.measurements {
            let age = check_age(compute_age(birth_date, m.date))?;
            let (height_sd, weight_sd) = self.score_pair(m.height, m.weight, age, sex)?;
            updated.push(Measurement {
                age: Some(age),
                height_sd: Some(height_sd),
                weight_sd: Some(weight_sd),
                ..m.clone()
            });
        }

        self.child.birth_date = Some(birth_date);
        self.measurements = updated;
        Ok(())
    }

    /// Entries ordered by age (entries without age last), for plotting.
    pub fn sorted_by_age(&self) -> Vec<Measurement> {
        let mut out = self.measurements.clone();
        out.sort_by(|a, b| match (a.age, b.age) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        out
    }

    /// The child's own trajectory for one metric, ordered by age.
    pub fn plot_series(&self, metric: Metric) -> Vec<CurvePoint> {
        self.sorted_by_age()
            .iter()
            .filter_map(|m| {
                m.age.map(|age| CurvePoint {
                    age,
                    value: m.value(metric),
                })
            })
            .collect()
    }

    fn score_pair(&self, height: f64, weight: f64, age: f64, sex: Sex) -> Result<(f64, f64)> {
        let height_sd = score(&self.store, height, age, sex, Metric::Height)?;
        let weight_sd = score(&self.store, weight, age, sex, Metric::Weight)?;
        Ok((height_sd, weight_sd))
    }
}
