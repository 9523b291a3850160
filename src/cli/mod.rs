//! Command-line parsing for the growth SD-score tool.
//!
//! Argument parsing and command dispatch stay separate from the scoring code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::domain::{Metric, Sex};
use crate::logging::LogFormat;

/// Environment variable naming an alternate reference set JSON.
pub const REFERENCE_ENV: &str = "GROWTH_REFERENCE";

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "growth",
    version,
    about = "Child growth SD scores against the JSPE 2000 reference"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args, Clone)]
pub struct GlobalArgs {
    /// Reference set JSON to use instead of the built-in tables.
    #[arg(long, global = true, env = REFERENCE_ENV, value_name = "JSON")]
    pub reference: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Allow patient identifiers in log output.
    #[arg(long, global = true)]
    pub log_data: bool,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score one measurement.
    Score(ScoreArgs),
    /// Value at an SD level (inverse transform).
    Value(ValueArgs),
    /// Sample reference curves and export them as JSON and/or CSV.
    Curves(CurvesArgs),
    /// Score a child's measurement history from CSV.
    Session(SessionArgs),
    /// Print a reference table.
    Table(TableArgs),
    /// Write the active reference set to JSON.
    ExportReference(ExportReferenceArgs),
}

#[derive(Debug, Args, Clone)]
pub struct ScoreArgs {
    #[arg(long, value_enum)]
    pub sex: Sex,

    #[arg(long, value_enum)]
    pub metric: Metric,

    /// Decimal age in years.
    #[arg(long)]
    pub age: f64,

    /// Measured value (cm for height, kg for weight).
    #[arg(long)]
    pub value: f64,
}

#[derive(Debug, Args, Clone)]
pub struct ValueArgs {
    #[arg(long, value_enum)]
    pub sex: Sex,

    #[arg(long, value_enum)]
    pub metric: Metric,

    #[arg(long)]
    pub age: f64,

    #[arg(long, allow_hyphen_values = true)]
    pub sd: f64,
}

#[derive(Debug, Args, Clone)]
pub struct CurvesArgs {
    #[arg(long, value_enum)]
    pub sex: Sex,

    /// Only sample this metric (default: both).
    #[arg(long, value_enum)]
    pub metric: Option<Metric>,

    /// Age step in years.
    #[arg(long, default_value_t = 0.1)]
    pub step: f64,

    #[arg(long, default_value_t = 0.0)]
    pub age_min: f64,

    /// Upper age (default: the table's last age).
    #[arg(long)]
    pub age_max: Option<f64>,

    /// Height SD levels, comma separated (default: 3,2,1,0,-1,-2,-2.5,-3).
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub height_levels: Option<Vec<f64>>,

    /// Weight SD levels, comma separated (default: 2,1,0,-1,-2).
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub weight_levels: Option<Vec<f64>>,

    /// Curve JSON output.
    #[arg(long, value_name = "JSON")]
    pub out: Option<PathBuf>,

    /// Long-format curve CSV output.
    #[arg(long, value_name = "CSV")]
    pub csv: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct SessionArgs {
    /// Birth date (YYYY-MM-DD).
    #[arg(long)]
    pub birth: NaiveDate,

    #[arg(long, value_enum)]
    pub sex: Sex,

    /// Measurement CSV with `date,height,weight` columns.
    #[arg(long, value_name = "CSV")]
    pub input: PathBuf,

    #[arg(long, default_value = "")]
    pub patient_id: String,

    #[arg(long, default_value = "")]
    pub name: String,

    /// Print rows sorted by age instead of input order.
    #[arg(long)]
    pub sorted: bool,

    /// Scored measurement CSV output.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct TableArgs {
    #[arg(long, value_enum)]
    pub sex: Sex,

    #[arg(long, value_enum)]
    pub metric: Metric,
}

#[derive(Debug, Args, Clone)]
pub struct ExportReferenceArgs {
    #[arg(long, value_name = "JSON")]
    pub out: PathBuf,
}
