//! Age interpolation over age-ordered reference rows.
//!
//! There is exactly one interpolator in the crate. The forward scorer, the
//! inverse evaluator and the curve sampler all go through [`interpolate`], so
//! a score and the curve it is drawn against always see the same parameters.
//!
//! Rules (rows strictly increasing by age):
//! - `age` equal to a row's age returns that row unchanged
//! - `age` outside the table is clamped to the boundary row (no extrapolation)
//! - otherwise every numeric field is blended linearly between the bracketing rows

use crate::error::{GrowthError, Result};

/// A reference row anchored at an age.
pub trait AgeRow: Copy {
    fn age(&self) -> f64;

    /// Blend every numeric field toward `other`:
    /// `self.field + fraction * (other.field - self.field)`.
    fn lerp(&self, other: &Self, fraction: f64) -> Self;
}

/// Position of an age relative to a table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bracket {
    /// Below or at the first row.
    ClampLow,
    /// Above or at the last row.
    ClampHigh,
    /// Exactly on an interior row.
    Exact(usize),
    /// Strictly between `left` and `left + 1`.
    Between { left: usize, fraction: f64 },
}

/// Locate `age` in `rows` with a binary search over the (strictly increasing) ages.
pub fn bracket<R: AgeRow>(rows: &[R], age: f64) -> Result<Bracket> {
    if !age.is_finite() {
        return Err(GrowthError::InvalidAge(age));
    }
    let (Some(first), Some(last)) = (rows.first(), rows.last()) else {
        return Err(GrowthError::InvalidTable("table has no rows".to_string()));
    };

    if age <= first.age() {
        return Ok(Bracket::ClampLow);
    }
    if age >= last.age() {
        return Ok(Bracket::ClampHigh);
    }

    // first.age < age < last.age, so 1 <= upper <= len - 1.
    let upper = rows.partition_point(|r| r.age() <= age);
    let left = upper - 1;
    let lo = rows[left].age();
    if lo == age {
        return Ok(Bracket::Exact(left));
    }
    let hi = rows[upper].age();
    Ok(Bracket::Between {
        left,
        fraction: (age - lo) / (hi - lo),
    })
}

/// Interpolated row at `age`.
pub fn interpolate<R: AgeRow>(rows: &[R], age: f64) -> Result<R> {
    let row = match bracket(rows, age)? {
        Bracket::ClampLow => rows[0],
        Bracket::ClampHigh => rows[rows.len() - 1],
        Bracket::Exact(idx) => rows[idx],
        Bracket::Between { left, fraction } => rows[left].lerp(&rows[left + 1], fraction),
    };
    Ok(row)
}

/// `a + fraction * (b - a)`.
#[inline]
pub fn lerp(a: f64, b: f64, fraction: f64) -> f64 {
    a + fraction * (b - a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Row {
        age: f64,
        v: f64,
    }

    impl AgeRow for Row {
        fn age(&self) -> f64 {
            self.age
        }

        fn lerp(&self, other: &Self, fraction: f64) -> Self {
            Row {
                age: lerp(self.age, other.age, fraction),
                v: lerp(self.v, other.v, fraction),
            }
        }
    }

    fn table() -> Vec<Row> {
        vec![
            Row { age: 0.0, v: 10.0 },
            Row { age: 0.25, v: 20.0 },
            Row { age: 1.0, v: 50.0 },
            Row { age: 2.0, v: 40.0 },
        ]
    }

    #[test]
    fn exact_ages_return_rows_unchanged() {
        let rows = table();
        for r in &rows {
            assert_eq!(interpolate(&rows, r.age).unwrap(), *r);
        }
    }

    #[test]
    fn out_of_range_ages_clamp_to_boundary_rows() {
        let rows = table();
        assert_eq!(interpolate(&rows, -1.0).unwrap(), rows[0]);
        assert_eq!(interpolate(&rows, 999.0).unwrap(), rows[3]);
    }

    #[test]
    fn interior_ages_blend_linearly() {
        let rows = table();
        let r = interpolate(&rows, 0.625).unwrap();
        assert!((r.v - 35.0).abs() < 1e-12);
        let r = interpolate(&rows, 1.5).unwrap();
        assert!((r.v - 45.0).abs() < 1e-12);
    }

    #[test]
    fn bracket_reports_interior_exact_hits() {
        let rows = table();
        assert_eq!(bracket(&rows, 1.0).unwrap(), Bracket::Exact(2));
        assert_eq!(bracket(&rows, 0.0).unwrap(), Bracket::ClampLow);
        assert_eq!(bracket(&rows, 2.0).unwrap(), Bracket::ClampHigh);
    }

    #[test]
    fn rejects_non_finite_age_and_empty_table() {
        let rows = table();
        assert!(matches!(interpolate(&rows, f64::NAN), Err(GrowthError::InvalidAge(_))));
        let empty: Vec<Row> = Vec::new();
        assert!(matches!(interpolate(&empty, 1.0), Err(GrowthError::InvalidTable(_))));
    }

    proptest! {
        #[test]
        fn interpolated_age_tracks_query_inside_domain(age in 0.0f64..2.0) {
            let rows = table();
            let r = interpolate(&rows, age).unwrap();
            prop_assert!((r.age - age).abs() < 1e-9);
        }

        #[test]
        fn bracket_is_monotonic(a in -1.0f64..3.0, b in -1.0f64..3.0) {
            let rows = table();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let pos = |age: f64| match bracket(&rows, age).unwrap() {
                Bracket::ClampLow => 0.0,
                Bracket::ClampHigh => (rows.len() - 1) as f64,
                Bracket::Exact(i) => i as f64,
                Bracket::Between { left, fraction } => left as f64 + fraction,
            };
            prop_assert!(pos(lo) <= pos(hi));
        }
    }
}
