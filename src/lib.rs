//! `growth-sds` library crate.
//!
//! Child growth SD scores against the JSPE 2000 reference tables, plus the
//! reference percentile curves used to chart a child's trajectory.
//!
//! The binary (`growth`) is a thin wrapper around this library so that:
//!
//! - scoring and curve sampling are testable without spawning processes
//! - a chart front-end can embed the core directly

pub mod app;
pub mod cli;
pub mod curves;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod models;
pub mod reference;
pub mod report;
pub mod score;
pub mod session;
