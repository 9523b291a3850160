//! Input/output helpers.
//!
//! - measurement CSV ingest (`ingest`)
//! - scored-measurement CSV export (`export`)
//! - curve JSON/CSV export (`curve`)
//! - reference set JSON load/save (`reference`)

pub mod curve;
pub mod export;
pub mod ingest;
pub mod reference;

pub use curve::*;
pub use export::*;
pub use ingest::*;
pub use reference::*;
