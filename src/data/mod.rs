//! Reference-dataset derived state.
//!
//! The dataset is used solely to derive per-field control constraints:
//! distinct-value sets for categorical fields and min/max/mean for numeric
//! fields. Nothing here mutates the rows.

pub mod ranges;

pub use ranges::*;
