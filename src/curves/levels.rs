//! SD levels drawn per metric.
//!
//! This is chart configuration, not model logic: the sampler accepts any level.

use serde::{Deserialize, Serialize};

use crate::domain::{CurveStyle, Metric};

/// Height lines at -2.5 SD and -3 SD mark growth-hormone treatment criteria
/// (GH deficiency and achondroplasia respectively).
pub const HEIGHT_THRESHOLD_LEVELS: [f64; 2] = [-2.5, -3.0];

pub const DEFAULT_HEIGHT_LEVELS: [f64; 8] = [3.0, 2.0, 1.0, 0.0, -1.0, -2.0, -2.5, -3.0];
pub const DEFAULT_WEIGHT_LEVELS: [f64; 5] = [2.0, 1.0, 0.0, -1.0, -2.0];

/// SD levels to sample for each metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SdLevels {
    pub height: Vec<f64>,
    pub weight: Vec<f64>,
}

impl Default for SdLevels {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT_LEVELS.to_vec(),
            weight: DEFAULT_WEIGHT_LEVELS.to_vec(),
        }
    }
}

impl SdLevels {
    pub fn for_metric(&self, metric: Metric) -> &[f64] {
        match metric {
            Metric::Height => &self.height,
            Metric::Weight => &self.weight,
        }
    }
}

/// Style hint for a curve at `sd` on the `metric` chart.
pub fn style_for(metric: Metric, sd: f64) -> CurveStyle {
    if sd == 0.0 {
        CurveStyle::Median
    } else if metric == Metric::Height && HEIGHT_THRESHOLD_LEVELS.contains(&sd) {
        CurveStyle::Threshold
    } else {
        CurveStyle::Standard
    }
}
