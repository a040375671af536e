//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use crate::charts::ChartKind;
use crate::services::Analysis;

/// Main application state
pub struct App<'a> {
    /// The analysis being viewed
    pub analysis: &'a Analysis,

    /// Chart currently on screen
    pub active_chart: ChartKind,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(analysis: &'a Analysis) -> Self {
        Self {
            analysis,
            active_chart: ChartKind::Budget,
            should_quit: false,
        }
    }

    pub fn next_chart(&mut self) {
        self.active_chart = self.active_chart.next();
    }

    pub fn prev_chart(&mut self) {
        self.active_chart = self.active_chart.prev();
    }

    /// Jump to a chart by its 1-based position in the tab bar
    pub fn select_chart(&mut self, position: usize) {
        if let Some(kind) = position
            .checked_sub(1)
            .and_then(|i| ChartKind::ALL.get(i))
        {
            self.active_chart = *kind;
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{film_catalog, inflation_rates};

    #[test]
    fn test_chart_navigation() {
        let analysis = Analysis::run(&film_catalog(), &inflation_rates()).unwrap();
        let mut app = App::new(&analysis);

        assert_eq!(app.active_chart, ChartKind::Budget);
        app.next_chart();
        assert_eq!(app.active_chart, ChartKind::Revenue);
        app.prev_chart();
        app.prev_chart();
        assert_eq!(app.active_chart, ChartKind::Profit);

        app.select_chart(2);
        assert_eq!(app.active_chart, ChartKind::Revenue);
        app.select_chart(0);
        app.select_chart(9);
        assert_eq!(app.active_chart, ChartKind::Revenue);
    }
}
