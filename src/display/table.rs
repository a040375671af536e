//! Tabular display of enriched records

use tabled::settings::{object::Columns, Alignment, Style};
use tabled::{Table, Tabled};

use crate::display::report::{format_bar, format_millions};
use crate::models::EnrichedRecord;

const PROFIT_BAR_WIDTH: usize = 12;

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Film")]
    title: String,
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "Factor")]
    factor: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Adj. Budget")]
    adjusted_budget: String,
    #[tabled(rename = "Box Office")]
    revenue: String,
    #[tabled(rename = "Adj. Box Office")]
    adjusted_revenue: String,
    #[tabled(rename = "Adj. Profit")]
    adjusted_profit: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Format the enriched records as a table, in the order given
pub fn format_record_table(records: &[EnrichedRecord]) -> String {
    if records.is_empty() {
        return "No films found.".to_string();
    }

    let max_profit = records
        .iter()
        .map(|r| r.adjusted_profit)
        .fold(0.0_f64, f64::max);

    let rows: Vec<RecordRow> = records
        .iter()
        .map(|r| RecordRow {
            title: r.title.clone(),
            year: r.release_year,
            factor: format!("{:.4}", r.cumulative_inflation_factor),
            budget: format_millions(r.nominal_budget),
            adjusted_budget: format_millions(r.adjusted_budget),
            revenue: format_millions(r.nominal_revenue),
            adjusted_revenue: format_millions(r.adjusted_revenue),
            adjusted_profit: format_millions(r.adjusted_profit),
            bar: format_bar(r.adjusted_profit, max_profit, PROFIT_BAR_WIDTH),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .modify(Columns::new(1..8), Alignment::right());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{film_catalog, inflation_rates};
    use crate::services::Analysis;

    #[test]
    fn test_record_table_lists_every_film() {
        let analysis = Analysis::run(&film_catalog(), &inflation_rates()).unwrap();
        let table = format_record_table(analysis.records());

        assert!(table.contains("Adj. Box Office"));
        for record in analysis.records() {
            assert!(table.contains(&record.title));
        }
        assert!(table.contains("447.0M"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_record_table(&[]), "No films found.");
    }
}
