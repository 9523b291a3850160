//! Numeric helpers: age interpolation and SD rounding.

pub mod interp;
pub mod rounding;

pub use interp::*;
pub use rounding::*;
