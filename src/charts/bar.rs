//! Horizontal bar charts of adjusted budget and box office

use ratatui::{
    layout::Direction,
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
};

use super::ChartKind;
use crate::display::format_millions;
use crate::models::EnrichedRecord;

/// Rows used per bar, including the gap below it
const ROWS_PER_BAR: u16 = 2;

/// Value a bar chart plots for a record; `None` for charts drawn as lines
pub fn bar_value(kind: ChartKind, record: &EnrichedRecord) -> Option<f64> {
    match kind {
        ChartKind::Budget => Some(record.adjusted_budget),
        ChartKind::Revenue => Some(record.adjusted_revenue),
        ChartKind::Profit => None,
    }
}

/// Height needed to draw one bar per record inside a bordered block
pub fn bar_chart_height(records: usize) -> u16 {
    let bars = u16::try_from(records).unwrap_or(u16::MAX);
    bars.saturating_mul(ROWS_PER_BAR)
        .saturating_sub(1)
        .saturating_add(2)
}

/// Build a horizontal bar chart, one bar per record in the order given
///
/// Bar lengths are whole millions; the text on each bar keeps one decimal.
/// A kind without a bar value yields a chart with no bars.
pub fn bar_chart(kind: ChartKind, records: &[EnrichedRecord]) -> BarChart<'static> {
    let bars: Vec<Bar<'static>> = records
        .iter()
        .filter_map(|record| {
            let value = bar_value(kind, record)?;
            let bar = Bar::default()
                .value(to_millions(value))
                .label(Line::from(record.title.clone()))
                .text_value(format_millions(value));
            Some(bar)
        })
        .collect();

    let max = bars_max(kind, records);

    BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(kind.title()))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(ROWS_PER_BAR - 1)
        .bar_style(Style::default().fg(kind.color()))
        .value_style(Style::default().fg(Color::Black).bg(kind.color()))
        .data(BarGroup::default().bars(&bars))
        .max(max)
}

fn bars_max(kind: ChartKind, records: &[EnrichedRecord]) -> u64 {
    records
        .iter()
        .filter_map(|r| bar_value(kind, r))
        .map(to_millions)
        .max()
        .unwrap_or(0)
        .max(1)
}

fn to_millions(amount: f64) -> u64 {
    (amount / 1e6).round().max(0.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{film_catalog, inflation_rates};
    use crate::services::Analysis;

    #[test]
    fn test_bar_chart_height() {
        assert_eq!(bar_chart_height(1), 3);
        assert_eq!(bar_chart_height(12), 25);
    }

    #[test]
    fn test_bar_value_by_kind() {
        let analysis = Analysis::run(&film_catalog(), &inflation_rates()).unwrap();
        let record = &analysis.records()[0];

        assert_eq!(bar_value(ChartKind::Budget, record), Some(record.adjusted_budget));
        assert_eq!(bar_value(ChartKind::Revenue, record), Some(record.adjusted_revenue));
        assert_eq!(bar_value(ChartKind::Profit, record), None);
    }

    #[test]
    fn test_bars_max_ignores_line_kinds() {
        let analysis = Analysis::run(&film_catalog(), &inflation_rates()).unwrap();
        assert_eq!(bars_max(ChartKind::Profit, analysis.records()), 1);
        assert!(bars_max(ChartKind::Budget, analysis.records()) > 400);
    }

    #[test]
    fn test_to_millions() {
        assert_eq!(to_millions(447e6), 447);
        assert_eq!(to_millions(15.6e6), 16);
        assert_eq!(to_millions(-5e6), 0);
    }
}
