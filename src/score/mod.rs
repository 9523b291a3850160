//! Forward scorer and inverse evaluator.
//!
//! - [`score`] maps a raw measurement to an SD score rounded to 0.1
//! - [`raw_score`] is the same transform without rounding
//! - [`value_at_sd`] is the exact inverse at the same interpolated parameters
//!
//! All three are pure functions over an immutable `ReferenceTableStore`.

use crate::domain::{Metric, Sex};
use crate::error::Result;
use crate::math::round_sd;
use crate::models::NormalizationModel;
use crate::reference::ReferenceTableStore;

/// Unrounded SD score of `value` at `age` (years).
pub fn raw_score(
    store: &ReferenceTableStore,
    value: f64,
    age: f64,
    sex: Sex,
    metric: Metric,
) -> Result<f64> {
    store.table(sex, metric)?.sd_for_value(age, value)
}

/// SD score rounded to one decimal place (half away from zero).
pub fn score(
    store: &ReferenceTableStore,
    value: f64,
    age: f64,
    sex: Sex,
    metric: Metric,
) -> Result<f64> {
    raw_score(store, value, age, sex, metric).map(round_sd)
}

/// Raw value at SD level `sd` and `age`. Not rounded.
pub fn value_at_sd(
    store: &ReferenceTableStore,
    sd: f64,
    age: f64,
    sex: Sex,
    metric: Metric,
) -> Result<f64> {
    store.table(sex, metric)?.value_for_sd(age, sd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GrowthError;
    use crate::reference::ReferenceTable;
    use proptest::prelude::*;

    fn builtin() -> std::sync::Arc<ReferenceTableStore> {
        ReferenceTableStore::builtin()
    }

    fn median(store: &ReferenceTableStore, age: f64, sex: Sex, metric: Metric) -> f64 {
        match store.table(sex, metric).unwrap() {
            ReferenceTable::Lms(t) => t.interpolate(age).unwrap().m,
            ReferenceTable::Normal(t) => t.interpolate(age).unwrap().mean,
        }
    }

    fn sex_strategy() -> impl Strategy<Value = Sex> {
        prop_oneof![Just(Sex::Male), Just(Sex::Female)]
    }

    fn metric_strategy() -> impl Strategy<Value = Metric> {
        prop_oneof![Just(Metric::Height), Just(Metric::Weight)]
    }

    #[test]
    fn median_boy_at_five_scores_zero() {
        let store = builtin();
        assert_eq!(score(&store, 106.8, 5.0, Sex::Male, Metric::Height).unwrap(), 0.0);
    }

    #[test]
    fn ten_year_old_boy_weighing_40kg() {
        let store = builtin();
        let raw = raw_score(&store, 40.0, 10.0, Sex::Male, Metric::Weight).unwrap();
        assert!((raw - 1.113).abs() < 1e-3, "raw = {raw}");
        assert_eq!(score(&store, 40.0, 10.0, Sex::Male, Metric::Weight).unwrap(), 1.1);
    }

    #[test]
    fn non_positive_values_are_rejected() {
        let store = builtin();
        assert!(matches!(
            score(&store, 0.0, 3.0, Sex::Female, Metric::Weight),
            Err(GrowthError::InvalidValue { .. })
        ));
        assert!(matches!(
            score(&store, -12.0, 3.0, Sex::Female, Metric::Height),
            Err(GrowthError::InvalidValue { .. })
        ));
    }

    #[test]
    fn zero_l_row_uses_log_branch() {
        // Boys' height at 17.5y has L = 0.
        let store = builtin();
        let v = value_at_sd(&store, 1.0, 17.5, Sex::Male, Metric::Height).unwrap();
        assert!((v - 170.8 * 0.034f64.exp()).abs() < 1e-9);
        assert_eq!(score(&store, v, 17.5, Sex::Male, Metric::Height).unwrap(), 1.0);
    }

    #[test]
    fn ages_beyond_the_table_clamp() {
        let store = builtin();
        let at_max = value_at_sd(&store, -2.0, 17.5, Sex::Female, Metric::Weight).unwrap();
        let beyond = value_at_sd(&store, -2.0, 17.9, Sex::Female, Metric::Weight).unwrap();
        assert_eq!(at_max, beyond);
    }

    proptest! {
        #[test]
        fn median_scores_zero(age in 0.0f64..17.5, sex in sex_strategy(), metric in metric_strategy()) {
            let store = builtin();
            let m = median(&store, age, sex, metric);
            let raw = raw_score(&store, m, age, sex, metric).unwrap();
            prop_assert!(raw.abs() < 0.05);
            prop_assert_eq!(score(&store, m, age, sex, metric).unwrap(), 0.0);
        }

        #[test]
        fn inverse_law_on_tenth_grid(
            age in 0.0f64..17.5,
            k in -30i32..=30,
            sex in sex_strategy(),
            metric in metric_strategy(),
        ) {
            let store = builtin();
            let sd = f64::from(k) / 10.0;
            let v = value_at_sd(&store, sd, age, sex, metric).unwrap();
            prop_assert_eq!(score(&store, v, age, sex, metric).unwrap(), round_sd(sd));
        }

        #[test]
        fn value_is_strictly_increasing_in_sd(
            age in 0.0f64..17.5,
            k in -30i32..30,
            sex in sex_strategy(),
            metric in metric_strategy(),
        ) {
            let store = builtin();
            let lo = value_at_sd(&store, f64::from(k) / 10.0, age, sex, metric).unwrap();
            let hi = value_at_sd(&store, f64::from(k + 1) / 10.0, age, sex, metric).unwrap();
            prop_assert!(lo < hi);
        }
    }
}
