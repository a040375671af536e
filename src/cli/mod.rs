//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod chart;
pub mod export;
pub mod run;

pub use chart::{handle_chart_command, ChartArgs};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use run::{handle_run, RunArgs};
