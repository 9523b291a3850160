//! Normalization model implementations.
//!
//! Models are small, pure functions over an interpolated row so the scorer and
//! the curve sampler stay model-agnostic.

pub mod model;

pub use model::*;
