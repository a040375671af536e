//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers for the franchise summary.

use crate::services::Highlights;

/// Banner printed above the highlights
pub const HIGHLIGHTS_BANNER: &str = "--- Franchise Sales Analysis (Nominal Values) ---";

/// Format a USD amount in millions with one decimal, e.g. `447.0M`
pub fn format_millions(amount: f64) -> String {
    format!("{:.1}M", amount / 1e6)
}

/// Format a USD amount in whole millions, used for axis labels
pub fn format_millions_whole(amount: f64) -> String {
    format!("{:.0}M", amount / 1e6)
}

/// Format the highlights block: banner plus one line per record holder
pub fn format_highlights(highlights: &Highlights) -> String {
    format!(
        "{}\nFilm with the largest budget: {}\nFilm with the largest box office: {}\nFilm with the largest profit: {}",
        HIGHLIGHTS_BANNER, highlights.max_budget, highlights.max_revenue, highlights.max_profit
    )
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_millions() {
        assert_eq!(format_millions(447e6), "447.0M");
        assert_eq!(format_millions(2.0713e9), "2071.3M");
        assert_eq!(format_millions_whole(392.9248e6), "393M");
    }

    #[test]
    fn test_format_highlights() {
        let highlights = Highlights {
            max_budget: "A".into(),
            max_revenue: "B".into(),
            max_profit: "C".into(),
        };
        let text = format_highlights(&highlights);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], HIGHLIGHTS_BANNER);
        assert_eq!(lines[1], "Film with the largest budget: A");
        assert_eq!(lines[3], "Film with the largest profit: C");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(-1.0, 100.0, 4), "    ");
    }
}
