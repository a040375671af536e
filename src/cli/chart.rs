//! CLI command for drawing a single chart

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::charts::{render_chart, ChartKind};
use crate::config::Settings;
use crate::error::{BoxOfficeError, BoxOfficeResult};
use crate::services::Analysis;

/// Options for the chart command
#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    /// Which chart to draw
    #[arg(value_enum)]
    pub kind: ChartKind,

    /// Chart width in columns (overrides settings)
    #[arg(short = 'W', long)]
    pub width: Option<u16>,

    /// Chart height in rows (overrides settings)
    #[arg(short = 'H', long)]
    pub height: Option<u16>,

    /// Write the chart to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the chart command
pub fn handle_chart_command<W: Write>(
    analysis: &Analysis,
    settings: &Settings,
    args: ChartArgs,
    out: &mut W,
) -> BoxOfficeResult<()> {
    let width = args.width.unwrap_or(settings.chart_width);
    let height = args.height.unwrap_or(settings.chart_height);
    let text = render_chart(args.kind, analysis, width, height)?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, text + "\n").map_err(|e| {
                BoxOfficeError::Io(format!("Failed to write chart {}: {}", path.display(), e))
            })?;
            writeln!(out, "Chart saved to: {}", path.display())?;
        }
        None => writeln!(out, "{}", text)?,
    }

    Ok(())
}
