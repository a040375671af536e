//! CLI command for data export
//!
//! Writes the analysis to a file in one of several formats.

use crate::error::{BoxOfficeError, BoxOfficeResult};
use crate::export::{csv, json, yaml};
use crate::services::Analysis;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Export format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Semicolon-separated record table
    #[default]
    Csv,
    /// JSON (records, rates and metadata)
    Json,
    /// YAML (records, rates and metadata, human-readable)
    Yaml,
}

/// Options for the export command
#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command<W: Write>(
    analysis: &Analysis,
    args: ExportArgs,
    out: &mut W,
) -> BoxOfficeResult<()> {
    let file = File::create(&args.output).map_err(|e| {
        BoxOfficeError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => csv::export_records_csv(analysis.records(), &mut writer)?,
        ExportFormat::Json => json::export_full_json(analysis, &mut writer, args.pretty)?,
        ExportFormat::Yaml => yaml::export_full_yaml(analysis, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| BoxOfficeError::Export(e.to_string()))?;

    writeln!(
        out,
        "{} films exported to: {}",
        analysis.records().len(),
        args.output.display()
    )?;

    Ok(())
}
