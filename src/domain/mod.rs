//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the fixed 17-field input schema (`Field`, `FieldValue`)
//! - raw dataset rows as parsed from CSV (`SaleRow`)
//! - the single-row record sent to the model (`InputRecord`)

pub mod types;

pub use types::*;
