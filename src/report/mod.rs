//! Reporting utilities: SD band classification and formatted terminal output.

pub mod format;

pub use format::*;

use serde::Serialize;

use crate::domain::Metric;

/// Clinical reading of an SD score, used to highlight table cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SdBand {
    /// Within ±2 SD.
    Normal,
    /// Height only: beyond ±2 SD but within ±2.5 SD.
    Borderline,
    /// Beyond ±2.5 SD (height) or ±2 SD (weight).
    Outside,
}

impl SdBand {
    pub fn marker(self) -> &'static str {
        match self {
            SdBand::Normal => "",
            SdBand::Borderline => "*",
            SdBand::Outside => "!",
        }
    }
}

/// Classify a rounded SD score for `metric`.
pub fn classify(metric: Metric, sd: f64) -> SdBand {
    let magnitude = sd.abs();
    if magnitude <= 2.0 {
        return SdBand::Normal;
    }
    match metric {
        Metric::Height if magnitude <= 2.5 => SdBand::Borderline,
        _ => SdBand::Outside,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_has_a_borderline_band() {
        assert_eq!(classify(Metric::Height, -2.0), SdBand::Normal);
        assert_eq!(classify(Metric::Height, -2.3), SdBand::Borderline);
        assert_eq!(classify(Metric::Height, 2.5), SdBand::Borderline);
        assert_eq!(classify(Metric::Height, -2.6), SdBand::Outside);
    }

    #[test]
    fn weight_is_normal_or_outside() {
        assert_eq!(classify(Metric::Weight, 1.9), SdBand::Normal);
        assert_eq!(classify(Metric::Weight, 2.1), SdBand::Outside);
        assert_eq!(classify(Metric::Weight, -2.4), SdBand::Outside);
    }
}
