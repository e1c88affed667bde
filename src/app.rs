//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads the reference dataset and derives control ranges
//! - loads the model artifact
//! - launches the TUI

use clap::Parser;

use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `mhp` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    // Startup loads are fatal on failure: without the dataset there are no
    // control ranges, and without the artifact there is nothing to predict.
    let ingest = crate::io::ingest::load_sale_rows(&cli.data)?;
    let ranges = crate::data::derive_ranges(&ingest.rows)?;
    let model = crate::io::artifact::read_model_json(&cli.model)?;

    crate::tui::run(ingest, ranges, model)
}
