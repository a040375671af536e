//! Franchise highlights
//!
//! Picks the films with the largest nominal budget, box office and profit.
//! Selection uses nominal values even though the charts show adjusted ones.

use crate::models::EnrichedRecord;

/// Titles of the record-holding films
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlights {
    pub max_budget: String,
    pub max_revenue: String,
    pub max_profit: String,
}

impl Highlights {
    /// Compute highlights over `records` in the order given
    ///
    /// Ties go to the earliest record. Returns `None` for an empty slice.
    pub fn from_records(records: &[EnrichedRecord]) -> Option<Self> {
        Some(Self {
            max_budget: first_max_by(records, |r| r.nominal_budget)?.title.clone(),
            max_revenue: first_max_by(records, |r| r.nominal_revenue)?.title.clone(),
            max_profit: first_max_by(records, |r| r.nominal_profit)?.title.clone(),
        })
    }
}

/// Record with the largest key, keeping the first one on ties
fn first_max_by<F>(records: &[EnrichedRecord], key: F) -> Option<&EnrichedRecord>
where
    F: Fn(&EnrichedRecord) -> f64,
{
    records.iter().fold(None, |best, record| match best {
        Some(current) if key(record) <= key(current) => Some(current),
        _ => Some(record),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{film_catalog, inflation_rates};
    use crate::models::FilmRecord;
    use crate::services::enrich::{enrich_record, EnrichmentService};

    #[test]
    fn test_catalog_highlights() {
        let rates = inflation_rates();
        let records = EnrichmentService::new(&rates).enrich_all(&film_catalog());
        let highlights = Highlights::from_records(&records).unwrap();

        assert_eq!(highlights.max_budget, "The Force Awakens");
        assert_eq!(highlights.max_revenue, "The Force Awakens");
        assert_eq!(highlights.max_profit, "The Force Awakens");
    }

    #[test]
    fn test_ties_resolve_to_first_occurrence() {
        let records = vec![
            enrich_record(&FilmRecord::new("First", 2000, 100.0, 500.0), 1.0),
            enrich_record(&FilmRecord::new("Second", 1990, 100.0, 500.0), 1.0),
        ];
        let highlights = Highlights::from_records(&records).unwrap();

        assert_eq!(highlights.max_budget, "First");
        assert_eq!(highlights.max_revenue, "First");
        assert_eq!(highlights.max_profit, "First");
    }

    #[test]
    fn test_selection_uses_nominal_values() {
        // "Old" wins every adjusted column but none of the nominal ones.
        let records = vec![
            enrich_record(&FilmRecord::new("Old", 1977, 90.0, 190.0), 10.0),
            enrich_record(&FilmRecord::new("New", 2019, 100.0, 210.0), 1.0),
        ];
        let highlights = Highlights::from_records(&records).unwrap();

        assert_eq!(highlights.max_budget, "New");
        assert_eq!(highlights.max_revenue, "New");
        assert_eq!(highlights.max_profit, "New");
    }

    #[test]
    fn test_independent_selection() {
        let records = vec![
            enrich_record(&FilmRecord::new("Expensive", 2000, 300.0, 350.0), 1.0),
            enrich_record(&FilmRecord::new("Blockbuster", 2001, 200.0, 600.0), 1.0),
            enrich_record(&FilmRecord::new("Indie", 2002, 1.0, 500.0), 1.0),
        ];
        let highlights = Highlights::from_records(&records).unwrap();

        assert_eq!(highlights.max_budget, "Expensive");
        assert_eq!(highlights.max_revenue, "Blockbuster");
        assert_eq!(highlights.max_profit, "Indie");
    }

    #[test]
    fn test_empty_records() {
        assert!(Highlights::from_records(&[]).is_none());
    }
}
