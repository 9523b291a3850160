//! Normalization models: LMS power transform and mean/SD normal approximation.
//!
//! Both models expose the same two primitive operations:
//! - `sd_for_value`: raw measurement -> z (forward transform, unrounded)
//! - `value_for_sd`: z -> raw measurement (inverse transform)
//!
//! A `ReferenceTable` picks its model at load time through its variant, so
//! callers never branch on row shape.

use serde::{Deserialize, Serialize};

use crate::error::{GrowthError, Result};
use crate::reference::{LmsRow, NormalRow, ReferenceTable};

/// `|L|` below this is treated as the `L = 0` (log-normal) limit.
pub const LMS_L_EPSILON: f64 = 1e-9;

/// Which model a table uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Lms,
    Normal,
}

impl ModelKind {
    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::Lms => "LMS (power transform)",
            ModelKind::Normal => "mean/SD (normal)",
        }
    }
}

/// Capability set shared by both model variants.
pub trait NormalizationModel {
    fn kind(&self) -> ModelKind;

    /// Unrounded z-score of `value` at `age`.
    fn sd_for_value(&self, age: f64, value: f64) -> Result<f64>;

    /// Raw value a reference-population member at `sd` has at `age`.
    fn value_for_sd(&self, age: f64, sd: f64) -> Result<f64>;
}

impl NormalizationModel for ReferenceTable {
    fn kind(&self) -> ModelKind {
        match self {
            ReferenceTable::Lms(_) => ModelKind::Lms,
            ReferenceTable::Normal(_) => ModelKind::Normal,
        }
    }

    fn sd_for_value(&self, age: f64, value: f64) -> Result<f64> {
        ensure_positive(value)?;
        let z = match self {
            ReferenceTable::Lms(t) => lms_z(&t.interpolate(age)?, value),
            ReferenceTable::Normal(t) => normal_z(&t.interpolate(age)?, value),
        };
        if z.is_finite() {
            Ok(z)
        } else {
            Err(GrowthError::InvalidValue { value })
        }
    }

    fn value_for_sd(&self, age: f64, sd: f64) -> Result<f64> {
        if !sd.is_finite() {
            return Err(GrowthError::OutOfModelRange { sd, age });
        }
        let value = match self {
            ReferenceTable::Lms(t) => lms_value(&t.interpolate(age)?, sd),
            ReferenceTable::Normal(t) => normal_value(&t.interpolate(age)?, sd),
        };
        match value {
            Some(v) if v.is_finite() && v > 0.0 => Ok(v),
            _ => Err(GrowthError::OutOfModelRange { sd, age }),
        }
    }
}

fn ensure_positive(value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GrowthError::InvalidValue { value })
    }
}

/// Forward LMS transform for a positive `value`.
pub fn lms_z(row: &LmsRow, value: f64) -> f64 {
    let ratio = value / row.m;
    if row.l.abs() < LMS_L_EPSILON {
        ratio.ln() / row.s
    } else {
        (ratio.powf(row.l) - 1.0) / (row.l * row.s)
    }
}

/// Inverse LMS transform. `None` when `1 + L*S*z <= 0` (no real solution).
pub fn lms_value(row: &LmsRow, z: f64) -> Option<f64> {
    if row.l.abs() < LMS_L_EPSILON {
        return Some(row.m * (row.s * z).exp());
    }
    let base = 1.0 + row.l * row.s * z;
    if base <= 0.0 {
        return None;
    }
    Some(row.m * base.powf(1.0 / row.l))
}

pub fn normal_z(row: &NormalRow, value: f64) -> f64 {
    (value - row.mean) / row.sd
}

pub fn normal_value(row: &NormalRow, z: f64) -> Option<f64> {
    Some(row.mean + z * row.sd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lms_zero_l_uses_log_branch() {
        let row = LmsRow::new(17.5, 0.0, 170.8, 0.034);
        let z = lms_z(&row, 170.8 * (0.034f64 * 2.0).exp());
        assert!((z - 2.0).abs() < 1e-12);
        let v = lms_value(&row, -1.0).unwrap();
        assert!((v - 170.8 * (-0.034f64).exp()).abs() < 1e-9);
    }

    #[test]
    fn lms_forward_matches_worked_example() {
        // Boys' weight at 10y, 40 kg.
        let row = LmsRow::new(10.0, -1.191, 31.4, 0.189);
        let z = lms_z(&row, 40.0);
        assert!((z - 1.1126).abs() < 1e-3, "z = {z}");
    }

    #[test]
    fn lms_inverse_rejects_non_real_tail() {
        let row = LmsRow::new(0.0, -2.0, 10.0, 0.2);
        // 1 + (-2)(0.2)(3) = -0.2
        assert_eq!(lms_value(&row, 3.0), None);
    }

    #[test]
    fn normal_model_round_trips() {
        let table = ReferenceTable::normal(vec![
            NormalRow::new(0.0, 50.0, 2.0),
            NormalRow::new(1.0, 76.0, 3.0),
        ])
        .unwrap();
        assert_eq!(table.kind(), ModelKind::Normal);
        let v = table.value_for_sd(0.5, -2.0).unwrap();
        assert!((v - (63.0 - 5.0)).abs() < 1e-12);
        let z = table.sd_for_value(0.5, v).unwrap();
        assert!((z + 2.0).abs() < 1e-12);
    }

    #[test]
    fn normal_model_rejects_non_positive_results() {
        let table = ReferenceTable::normal(vec![
            NormalRow::new(0.0, 3.0, 1.0),
            NormalRow::new(1.0, 9.0, 1.2),
        ])
        .unwrap();
        assert!(matches!(
            table.value_for_sd(0.0, -4.0),
            Err(GrowthError::OutOfModelRange { .. })
        ));
    }

    #[test]
    fn forward_transform_rejects_non_positive_values() {
        let table = ReferenceTable::lms(vec![
            LmsRow::new(0.0, 1.0, 50.0, 0.04),
            LmsRow::new(1.0, 1.0, 75.0, 0.03),
        ])
        .unwrap();
        for bad in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                table.sd_for_value(0.5, bad),
                Err(GrowthError::InvalidValue { .. })
            ));
        }
    }
}
