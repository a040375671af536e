//! The full analysis pipeline
//!
//! Prints the three charts, then the highlights, then writes the CSV table.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use crate::charts;
use crate::config::Settings;
use crate::display::format_highlights;
use crate::error::{BoxOfficeError, BoxOfficeResult};
use crate::export::export_records_csv;
use crate::services::Analysis;

/// Options for the full pipeline
#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// CSV output path (overrides settings)
    #[arg(short, long, env = "BOXOFFICE_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Also save charts as text files in this directory
    #[arg(long)]
    pub chart_dir: Option<PathBuf>,

    /// Skip printing charts
    #[arg(long)]
    pub no_charts: bool,
}

/// Run the pipeline, writing console output to `out`
pub fn handle_run<W: Write>(
    analysis: &Analysis,
    settings: &Settings,
    args: RunArgs,
    out: &mut W,
) -> BoxOfficeResult<()> {
    let (width, height) = (settings.chart_width, settings.chart_height);

    if !args.no_charts {
        for (_, chart) in charts::render_all(analysis, width, height)? {
            writeln!(out, "{}\n", chart)?;
        }
    }

    if let Some(dir) = args.chart_dir.as_ref().or(settings.chart_dir.as_ref()) {
        charts::write_charts(dir, analysis, width, height)?;
    }

    writeln!(out, "{}", format_highlights(analysis.highlights()))?;

    let output = args.output.unwrap_or_else(|| settings.export_path.clone());
    write_table(analysis, &output)?;
    writeln!(out, "--- Table saved to '{}' ---", output.display())?;

    Ok(())
}

/// Write the chronological table to a CSV file
pub fn write_table(analysis: &Analysis, output: &Path) -> BoxOfficeResult<()> {
    let file = File::create(output).map_err(|e| {
        BoxOfficeError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);
    export_records_csv(analysis.records(), &mut writer)?;
    info!(path = %output.display(), rows = analysis.records().len(), "table written");
    Ok(())
}
