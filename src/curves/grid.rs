//! Age grid generation for curve sampling.
//!
//! Ages are computed from the step index (`min + i * step`) rather than by
//! repeated addition, so a 0-17.5y grid at 0.1y ends exactly on 17.5.

use crate::error::{GrowthError, Result};

/// Slack that lets `max` count as reached despite float rounding.
const GRID_EPS: f64 = 1e-9;

/// Largest grid `age_grid` will build.
pub const MAX_GRID_POINTS: usize = 1_000_000;

/// Offsets are snapped to 1e-9 only when that moves them by less than this
/// fraction of their size, i.e. only float noise is removed.
const SNAP_REL_TOL: f64 = 1e-12;

/// Evenly spaced ages in `[min, max]`, both ends inclusive when the span is a
/// multiple of `step`. The first age is always exactly `min`.
pub fn age_grid(min: f64, max: f64, step: f64) -> Result<Vec<f64>> {
    if !(min.is_finite() && max.is_finite() && step.is_finite()) {
        return Err(GrowthError::InvalidGrid(format!(
            "min={min}, max={max}, step={step} must be finite"
        )));
    }
    if step <= 0.0 {
        return Err(GrowthError::InvalidGrid(format!("step must be > 0 (got {step})")));
    }
    if max < min {
        return Err(GrowthError::InvalidGrid(format!(
            "max age {max} is below min age {min}"
        )));
    }

    let steps = ((max - min) / step + GRID_EPS).floor();
    if !steps.is_finite() || steps >= MAX_GRID_POINTS as f64 {
        return Err(GrowthError::InvalidGrid(format!(
            "step {step} over {min}-{max} exceeds {MAX_GRID_POINTS} points"
        )));
    }
    let steps = steps as usize;

    Ok((0..=steps)
        .map(|i| {
            let age = min + snap_offset(step * i as f64);
            if i == steps && (age - max).abs() <= GRID_EPS { max } else { age }
        })
        .collect())
}

/// `0.30000000000000004` -> `0.3`; genuinely tiny offsets are left alone.
fn snap_offset(offset: f64) -> f64 {
    let snapped = (offset * 1e9).round() / 1e9;
    if (snapped - offset).abs() <= offset.abs() * SNAP_REL_TOL {
        snapped
    } else {
        offset
    }
}
