//! Reference table store.
//!
//! - row types and validated tables (`table`)
//! - the shipped JSPE 2000 data (`builtin`)
//! - the immutable (sex, metric) lookup (`store`)

pub mod builtin;
pub mod store;
pub mod table;

pub use store::*;
pub use table::*;
