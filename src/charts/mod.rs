//! Chart rendering
//!
//! Charts are ratatui widgets. For non-interactive output they are drawn
//! into an off-screen buffer and flattened to plain text; the TUI renders
//! the same widgets into a live frame.

pub mod bar;
pub mod line;

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    widgets::Widget,
};
use tracing::info;

use crate::error::{BoxOfficeError, BoxOfficeResult};
use crate::services::Analysis;

pub use bar::{bar_chart, bar_chart_height};
pub use line::ProfitSeries;

/// Smallest drawable chart dimensions
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 10;

/// The three charts produced by the analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    /// Adjusted budget, horizontal bars, ascending
    Budget,
    /// Adjusted box office, horizontal bars, ascending
    Revenue,
    /// Adjusted profit, line chart, chronological
    Profit,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Budget, ChartKind::Revenue, ChartKind::Profit];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Budget => "Adjusted Budget by Film (2025 USD)",
            Self::Revenue => "Adjusted Box Office by Film (2025 USD)",
            Self::Profit => "Adjusted Profit by Film (2025 USD)",
        }
    }

    /// File stem used when saving the chart
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Budget => "adjusted_budget",
            Self::Revenue => "adjusted_box_office",
            Self::Profit => "adjusted_profit",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Budget => Color::Rgb(0x4A, 0x90, 0xE2),
            Self::Revenue => Color::Rgb(0x50, 0xE3, 0xC2),
            Self::Profit => Color::Rgb(0xF5, 0xA6, 0x23),
        }
    }

    /// Cycle forward through the charts
    pub fn next(&self) -> Self {
        match self {
            Self::Budget => Self::Revenue,
            Self::Revenue => Self::Profit,
            Self::Profit => Self::Budget,
        }
    }

    /// Cycle backward through the charts
    pub fn prev(&self) -> Self {
        match self {
            Self::Budget => Self::Profit,
            Self::Revenue => Self::Budget,
            Self::Profit => Self::Revenue,
        }
    }
}

/// Draw a chart into an area of a buffer
///
/// Bar charts use the budget and revenue orderings; the profit line uses
/// the chronological records.
pub fn draw_chart(kind: ChartKind, analysis: &Analysis, area: Rect, buf: &mut Buffer) {
    match kind {
        ChartKind::Budget => bar_chart(kind, &analysis.by_adjusted_budget()).render(area, buf),
        ChartKind::Revenue => bar_chart(kind, &analysis.by_adjusted_revenue()).render(area, buf),
        ChartKind::Profit => ProfitSeries::new(analysis.records()).chart().render(area, buf),
    }
}

/// Render a chart to plain text
///
/// Bar charts grow taller than `height` when needed to give every film a row.
pub fn render_chart(
    kind: ChartKind,
    analysis: &Analysis,
    width: u16,
    height: u16,
) -> BoxOfficeResult<String> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        return Err(BoxOfficeError::Render(format!(
            "chart size {}x{} is below the minimum {}x{}",
            width, height, MIN_WIDTH, MIN_HEIGHT
        )));
    }

    let height = match kind {
        ChartKind::Budget | ChartKind::Revenue => {
            height.max(bar_chart_height(analysis.records().len()))
        }
        ChartKind::Profit => height,
    };

    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    draw_chart(kind, analysis, area, &mut buf);
    Ok(buffer_to_string(&buf))
}

/// Render every chart, in [`ChartKind::ALL`] order
pub fn render_all(
    analysis: &Analysis,
    width: u16,
    height: u16,
) -> BoxOfficeResult<Vec<(ChartKind, String)>> {
    ChartKind::ALL
        .iter()
        .map(|kind| Ok((*kind, render_chart(*kind, analysis, width, height)?)))
        .collect()
}

/// Save every chart as `<slug>.txt` under `dir`, creating it if needed
pub fn write_charts(
    dir: &Path,
    analysis: &Analysis,
    width: u16,
    height: u16,
) -> BoxOfficeResult<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| {
        BoxOfficeError::Io(format!("Failed to create chart directory {}: {}", dir.display(), e))
    })?;

    let mut written = Vec::new();
    for (kind, text) in render_all(analysis, width, height)? {
        let path = dir.join(format!("{}.txt", kind.slug()));
        fs::write(&path, text + "\n").map_err(|e| {
            BoxOfficeError::Io(format!("Failed to write chart {}: {}", path.display(), e))
        })?;
        info!(chart = kind.slug(), path = %path.display(), "chart written");
        written.push(path);
    }
    Ok(written)
}

/// Flatten a buffer to text, one line per row without trailing spaces
fn buffer_to_string(buf: &Buffer) -> String {
    let width = usize::from(buf.area.width).max(1);
    buf.content()
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
