//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - table selectors (`Sex`, `Metric`)
//! - session records (`ChildInfo`, `Measurement`)
//! - curve outputs (`Curve`, `CurvePoint`, `CurveGrid`, `CurveFile`)

pub mod types;

pub use types::*;
