//! Command-line parsing.
//!
//! The prediction surface itself has no CLI — all interaction happens in the
//! TUI. The only flags are the two startup file paths, which default to the
//! fixed local names the training pipeline writes next to the binary.

use std::path::PathBuf;

use clap::Parser;

/// Melbourne house price prediction form.
#[derive(Debug, Parser)]
#[command(name = "mhp", version, about = "Melbourne house price prediction form (TUI)")]
pub struct Cli {
    /// Reference dataset CSV (historical sales, used to derive input ranges).
    #[arg(long, value_name = "CSV", default_value = "cleaned_data.csv")]
    pub data: PathBuf,

    /// Trained model artifact (JSON).
    #[arg(long, value_name = "JSON", default_value = "model.json")]
    pub model: PathBuf,
}
