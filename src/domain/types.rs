//! Shared domain types.
//!
//! These types are kept small and serializable so they can be:
//!
//! - held in a measurement session
//! - exported to JSON/CSV for the chart renderer
//! - reloaded later

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::GrowthError;

/// Sex used to select a reference table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    /// Chart title wording.
    pub fn display_name(self) -> &'static str {
        match self {
            Sex::Male => "Boys",
            Sex::Female => "Girls",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(GrowthError::UnknownTable {
                sex: s.to_string(),
                metric: "*".to_string(),
            }),
        }
    }
}

/// Anthropometric metric.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Height,
    Weight,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Height, Metric::Weight];

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Height => "height",
            Metric::Weight => "weight",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Metric::Height => "cm",
            Metric::Weight => "kg",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "height" | "length" => Ok(Metric::Height),
            "weight" => Ok(Metric::Weight),
            _ => Err(GrowthError::UnknownTable {
                sex: "*".to_string(),
                metric: s.to_string(),
            }),
        }
    }
}

/// Identity and the two inputs (birth date, sex) that drive scoring.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChildInfo {
    pub patient_id: String,
    pub full_name: String,
    pub birth_date: Option<NaiveDate>,
    pub sex: Sex,
}

impl ChildInfo {
    /// Patient id as shown on charts; unknown ids are shown as `0`.
    pub fn display_id(&self) -> &str {
        if self.patient_id.trim().is_empty() {
            "0"
        } else {
            self.patient_id.trim()
        }
    }
}

/// A recorded measurement, enriched with decimal age and SD scores.
///
/// `age` is `None` only for legacy entries restored without an age; such
/// entries are never re-scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub date: NaiveDate,
    /// Height in cm.
    pub height: f64,
    /// Weight in kg.
    pub weight: f64,
    /// Decimal age in years.
    pub age: Option<f64>,
    pub height_sd: Option<f64>,
    pub weight_sd: Option<f64>,
}

impl Measurement {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Height => self.height,
            Metric::Weight => self.weight,
        }
    }

    pub fn sd(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Height => self.height_sd,
            Metric::Weight => self.weight_sd,
        }
    }
}

/// One sampled point of a reference curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub age: f64,
    pub value: f64,
}

/// Rendering hint attached to each curve.
///
/// The sampler only classifies; colors and dash patterns belong to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveStyle {
    Standard,
    /// The 0 SD line.
    Median,
    /// Clinical treatment-eligibility line (-2.5 SD and -3 SD for height).
    Threshold,
}

/// A sampled SD-level curve for one sex and metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub sex: Sex,
    pub metric: Metric,
    pub sd_level: f64,
    pub style: CurveStyle,
    pub points: Vec<CurvePoint>,
}

impl Curve {
    /// Label drawn at the end of the line, e.g. `+2SD`, `0SD`, `-2.5SD`.
    pub fn label(&self) -> String {
        sd_label(self.sd_level)
    }
}

pub fn sd_label(sd: f64) -> String {
    if sd > 0.0 {
        format!("+{sd}SD")
    } else {
        format!("{}SD", sd + 0.0)
    }
}

/// Age grid used for curve sampling.
///
/// `age_max = None` means "up to the table's upper age bound".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveGrid {
    pub age_min: f64,
    pub age_max: Option<f64>,
    pub step: f64,
}

impl Default for CurveGrid {
    fn default() -> Self {
        Self {
            age_min: 0.0,
            age_max: None,
            step: 0.1,
        }
    }
}

/// A saved curve bundle (JSON) handed to the chart renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    /// Reference set the curves were sampled from.
    pub reference: String,
    pub sex: Sex,
    pub grid: CurveGrid,
    pub curves: Vec<Curve>,
}
