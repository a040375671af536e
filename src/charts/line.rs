//! Line chart of adjusted profit over the franchise timeline

use ratatui::{
    style::Style,
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

use super::ChartKind;
use crate::display::format_millions_whole;
use crate::models::EnrichedRecord;

/// Adjusted profit points, one per film in chronological order
///
/// The x coordinate is the film's position; axis labels show release years.
#[derive(Debug, Clone)]
pub struct ProfitSeries {
    points: Vec<(f64, f64)>,
    years: Vec<i32>,
}

impl ProfitSeries {
    /// Build the series from records already in chronological order
    pub fn new(records: &[EnrichedRecord]) -> Self {
        Self {
            points: records
                .iter()
                .enumerate()
                .map(|(i, r)| (i as f64, r.adjusted_profit))
                .collect(),
            years: records.iter().map(|r| r.release_year).collect(),
        }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Lower and upper y bounds; the range always contains zero
    pub fn y_bounds(&self) -> [f64; 2] {
        let low = self.points.iter().map(|p| p.1).fold(0.0_f64, f64::min);
        let high = self.points.iter().map(|p| p.1).fold(0.0_f64, f64::max);
        if high > low {
            [low, high + (high - low) * 0.05]
        } else {
            [low, low + 1e6]
        }
    }

    fn x_bounds(&self) -> [f64; 2] {
        [0.0, self.points.len().saturating_sub(1).max(1) as f64]
    }

    fn x_labels(&self) -> Vec<Span<'static>> {
        match (self.years.first(), self.years.last()) {
            (Some(first), Some(last)) => {
                let middle = self.years[self.years.len() / 2];
                vec![
                    Span::raw(first.to_string()),
                    Span::raw(middle.to_string()),
                    Span::raw(last.to_string()),
                ]
            }
            _ => Vec::new(),
        }
    }

    fn y_labels(&self) -> Vec<Span<'static>> {
        let [low, high] = self.y_bounds();
        vec![
            Span::raw(format_millions_whole(low)),
            Span::raw(format_millions_whole((low + high) / 2.0)),
            Span::raw(format_millions_whole(high)),
        ]
    }

    /// Build the chart widget borrowing this series
    pub fn chart(&self) -> Chart<'_> {
        let kind = ChartKind::Profit;
        let dataset = Dataset::default()
            .name("Adjusted profit")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(kind.color()))
            .data(&self.points);

        Chart::new(vec![dataset])
            .block(Block::default().borders(Borders::ALL).title(kind.title()))
            .x_axis(
                Axis::default()
                    .title("Release")
                    .bounds(self.x_bounds())
                    .labels(self.x_labels()),
            )
            .y_axis(
                Axis::default()
                    .title("Profit (USD millions)")
                    .bounds(self.y_bounds())
                    .labels(self.y_labels()),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FilmRecord;
    use crate::services::enrich_record;

    fn record(title: &str, year: i32, budget: f64, revenue: f64) -> EnrichedRecord {
        enrich_record(&FilmRecord::new(title, year, budget, revenue), 1.0)
    }

    #[test]
    fn test_points_follow_record_order() {
        let series = ProfitSeries::new(&[
            record("A", 1977, 10e6, 110e6),
            record("B", 1980, 20e6, 70e6),
        ]);
        assert_eq!(series.points(), &[(0.0, 100e6), (1.0, 50e6)]);
    }

    #[test]
    fn test_y_bounds_include_zero() {
        let series = ProfitSeries::new(&[record("Flop", 2000, 100e6, 40e6)]);
        let [low, high] = series.y_bounds();
        assert_eq!(low, -60e6);
        assert!(high > low);
    }

    #[test]
    fn test_y_bounds_when_every_film_loses_money() {
        let series = ProfitSeries::new(&[
            record("Flop", 2000, 200e6, 100e6),
            record("Bomb", 2001, 199e6, 100e6),
        ]);
        let [low, high] = series.y_bounds();
        assert_eq!(low, -100e6);
        assert!(high > low);
        assert!(high >= 0.0);
    }

    #[test]
    fn test_y_bounds_without_points() {
        assert_eq!(ProfitSeries::new(&[]).y_bounds(), [0.0, 1e6]);
    }

    #[test]
    fn test_x_labels_use_years() {
        let series = ProfitSeries::new(&[
            record("A", 1977, 1.0, 2.0),
            record("B", 1999, 1.0, 2.0),
            record("C", 2019, 1.0, 2.0),
        ]);
        let labels: Vec<String> = series.x_labels().iter().map(|s| s.content.to_string()).collect();
        assert_eq!(labels, vec!["1977", "1999", "2019"]);
    }
}
