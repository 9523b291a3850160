//! Reference curve sampling.
//!
//! Each curve is regenerated from the reference table and an SD level on
//! demand; nothing here holds state.

pub mod grid;
pub mod levels;

pub use grid::*;
pub use levels::*;

use crate::domain::{Curve, CurveGrid, CurvePoint, Metric, Sex};
use crate::error::Result;
use crate::reference::ReferenceTableStore;
use crate::score::value_at_sd;

/// Sample the `sd_level` curve for one sex and metric over `grid`.
pub fn sample_curve(
    store: &ReferenceTableStore,
    sex: Sex,
    metric: Metric,
    sd_level: f64,
    grid: &CurveGrid,
) -> Result<Curve> {
    let age_max = match grid.age_max {
        Some(max) => max,
        None => store.upper_bound(sex, metric)?,
    };
    let ages = age_grid(grid.age_min, age_max, grid.step)?;

    let points = ages
        .into_iter()
        .map(|age| {
            value_at_sd(store, sd_level, age, sex, metric).map(|value| CurvePoint { age, value })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Curve {
        sex,
        metric,
        sd_level,
        style: style_for(metric, sd_level),
        points,
    })
}

/// Sample every configured level for the given metrics.
pub fn sample_chart(
    store: &ReferenceTableStore,
    sex: Sex,
    metrics: &[Metric],
    levels: &SdLevels,
    grid: &CurveGrid,
) -> Result<Vec<Curve>> {
    let mut curves = Vec::new();
    for &metric in metrics {
        for &sd in levels.for_metric(metric) {
            curves.push(sample_curve(store, sex, metric, sd, grid)?);
        }
    }
    Ok(curves)
}
