//! `melb-prices` library crate.
//!
//! The binary (`mhp`) is a thin wrapper around this library so that:
//!
//! - core logic (ingest, range derivation, form state, prediction) is
//!   testable without spawning processes or a terminal
//! - the TUI stays a pure presentation layer over the same pipeline
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod form;
pub mod io;
pub mod model;
pub mod report;
pub mod tui;
