//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - initialises logging
//! - resolves the reference set (built-in or `--reference` JSON)
//! - dispatches the subcommand and writes optional exports

use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, trace, warn};

use crate::cli::{
    Cli, Command, CurvesArgs, ExportReferenceArgs, ScoreArgs, SessionArgs, TableArgs, ValueArgs,
};
use crate::curves::{SdLevels, sample_chart};
use crate::domain::{ChildInfo, CurveGrid, Metric};
use crate::error::AppError;
use crate::logging::{LogConfig, init_logging, redact_value};
use crate::models::NormalizationModel;
use crate::reference::ReferenceTableStore;

pub mod pipeline;

/// Entry point for the `growth` binary.
pub fn run() -> Result<(), AppError> {
    // `.env` may set GROWTH_REFERENCE; a missing file is fine.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_logging(
        &LogConfig::from_verbosity(cli.global.verbose)
            .with_format(cli.global.log_format)
            .with_log_data(cli.global.log_data),
    );

    let store = load_store(cli.global.reference.as_deref())?;
    info!(source = store.source(), "reference set loaded");

    match cli.command {
        Command::Score(args) => handle_score(&store, &args),
        Command::Value(args) => handle_value(&store, &args),
        Command::Curves(args) => handle_curves(&store, &args),
        Command::Session(args) => handle_session(store, args),
        Command::Table(args) => handle_table(&store, &args),
        Command::ExportReference(args) => handle_export_reference(&store, &args),
    }
}

fn load_store(path: Option<&Path>) -> Result<Arc<ReferenceTableStore>, AppError> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading reference JSON");
            Ok(Arc::new(crate::io::reference::load_reference_json(path)?))
        }
        None => Ok(ReferenceTableStore::builtin()),
    }
}

fn handle_score(store: &ReferenceTableStore, args: &ScoreArgs) -> Result<(), AppError> {
    info!(sex = %args.sex, metric = %args.metric, age = args.age, "score");
    let raw = crate::score::raw_score(store, args.value, args.age, args.sex, args.metric)?;
    let sd = crate::math::round_sd(raw);
    let band = crate::report::classify(args.metric, sd);

    println!(
        "{} {} {:.1} {} at {:.2}y: {} (z = {raw:.4}, {band:?})",
        args.sex.display_name(),
        args.metric,
        args.value,
        args.metric.unit(),
        args.age,
        crate::report::fmt_sd(sd),
    );
    Ok(())
}

fn handle_value(store: &ReferenceTableStore, args: &ValueArgs) -> Result<(), AppError> {
    info!(sex = %args.sex, metric = %args.metric, age = args.age, sd = args.sd, "value");
    let value = crate::score::value_at_sd(store, args.sd, args.age, args.sex, args.metric)?;
    println!(
        "{} {} at {:.2}y, {}: {value:.2} {}",
        args.sex.display_name(),
        args.metric,
        args.age,
        crate::report::fmt_sd(args.sd),
        args.metric.unit(),
    );
    Ok(())
}

/// Grid and SD-level settings for one `growth curves` run.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub metrics: Vec<Metric>,
    pub levels: SdLevels,
    pub grid: CurveGrid,
}

pub fn chart_config_from_args(args: &CurvesArgs) -> ChartConfig {
    let defaults = SdLevels::default();
    ChartConfig {
        metrics: match args.metric {
            Some(metric) => vec![metric],
            None => Metric::ALL.to_vec(),
        },
        levels: SdLevels {
            height: args.height_levels.clone().unwrap_or(defaults.height),
            weight: args.weight_levels.clone().unwrap_or(defaults.weight),
        },
        grid: CurveGrid {
            age_min: args.age_min,
            age_max: args.age_max,
            step: args.step,
        },
    }
}

fn handle_curves(store: &ReferenceTableStore, args: &CurvesArgs) -> Result<(), AppError> {
    let config = chart_config_from_args(args);
    info!(sex = %args.sex, metrics = ?config.metrics, step = config.grid.step, "curves");

    let curves = sample_chart(store, args.sex, &config.metrics, &config.levels, &config.grid)?;

    for curve in &curves {
        let (first, last) = match (curve.points.first(), curve.points.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => continue,
        };
        println!(
            "{:<7} {:>7} {:>4} points  {:>5.2}y {:>7.2} -> {:>5.2}y {:>7.2} {}",
            curve.metric.as_str(),
            curve.label(),
            curve.points.len(),
            first.age,
            first.value,
            last.age,
            last.value,
            curve.metric.unit(),
        );
    }

    if let Some(path) = &args.csv {
        crate::io::curve::write_curves_csv(path, &curves)?;
        info!(path = %path.display(), "wrote curve CSV");
    }
    if let Some(path) = &args.out {
        let file = crate::io::curve::curve_file(store.source(), args.sex, config.grid, curves);
        crate::io::curve::write_curve_json(path, &file)?;
        info!(path = %path.display(), "wrote curve JSON");
    }
    Ok(())
}

fn handle_session(store: Arc<ReferenceTableStore>, args: SessionArgs) -> Result<(), AppError> {
    info!(sex = %args.sex, input = %args.input.display(), "session");
    trace!(patient_id = redact_value(&args.patient_id), "patient");

    let ingested = crate::io::ingest::load_measurements(&args.input)?;
    for e in &ingested.row_errors {
        warn!(line = e.line, error = %e.message, "CSV row skipped");
    }

    let child = ChildInfo {
        patient_id: args.patient_id,
        full_name: args.name,
        birth_date: Some(args.birth),
        sex: args.sex,
    };
    let run = pipeline::run_session(store, child, ingested);
    let session = &run.session;

    print!("{}", crate::report::format_child_summary(session.child()));
    let rows = if args.sorted {
        session.sorted_by_age()
    } else {
        session.measurements().to_vec()
    };
    print!("{}", crate::report::format_measurements(&rows));
    print!("{}", crate::report::format_row_errors(&run.row_errors));

    if let Some(path) = &args.export {
        crate::io::export::write_measurements_csv(path, session.child(), session.measurements())?;
        info!(path = %path.display(), rows = session.len(), "wrote scored measurements");
    }
    Ok(())
}

fn handle_table(store: &ReferenceTableStore, args: &TableArgs) -> Result<(), AppError> {
    let table = store.table(args.sex, args.metric)?;
    info!(model = table.kind().display_name(), rows = table.len(), "table");
    print!(
        "{}",
        crate::report::format_reference_table(args.sex, args.metric, table)
    );
    Ok(())
}

fn handle_export_reference(
    store: &ReferenceTableStore,
    args: &ExportReferenceArgs,
) -> Result<(), AppError> {
    crate::io::reference::write_reference_json(&args.out, store)?;
    info!(path = %args.out.display(), "wrote reference JSON");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curves_args(argv: &[&str]) -> CurvesArgs {
        let mut full = vec!["growth", "curves"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Command::Curves(args) => args,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn chart_config_defaults_to_both_metrics() {
        let config = chart_config_from_args(&curves_args(&["--sex", "female"]));
        assert_eq!(config.metrics, vec![Metric::Height, Metric::Weight]);
        assert_eq!(config.levels, SdLevels::default());
        assert_eq!(config.grid, CurveGrid::default());
    }

    #[test]
    fn chart_config_honours_overrides() {
        let config = chart_config_from_args(&curves_args(&[
            "--sex",
            "male",
            "--metric",
            "weight",
            "--weight-levels",
            "0,2",
            "--step",
            "0.5",
            "--age-max",
            "6",
        ]));
        assert_eq!(config.metrics, vec![Metric::Weight]);
        assert_eq!(config.levels.weight, vec![0.0, 2.0]);
        assert_eq!(config.grid.step, 0.5);
        assert_eq!(config.grid.age_max, Some(6.0));
    }

    #[test]
    fn builtin_store_is_default() {
        let store = load_store(None).unwrap();
        assert_eq!(store.source(), crate::reference::builtin::BUILTIN_SOURCE);
    }
}
