//! Input helpers.
//!
//! - reference-dataset CSV ingest + validation (`ingest`)
//! - model artifact JSON load (`artifact`)

pub mod artifact;
pub mod ingest;

pub use artifact::*;
pub use ingest::*;
