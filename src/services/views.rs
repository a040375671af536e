//! Sorted projections of the enriched collection
//!
//! Each function returns a new vector and leaves its input untouched. Sorts
//! are stable, so equal keys keep their relative order.

use crate::models::EnrichedRecord;

/// Ascending by adjusted budget
pub fn by_adjusted_budget(records: &[EnrichedRecord]) -> Vec<EnrichedRecord> {
    sorted_by_f64(records, |r| r.adjusted_budget)
}

/// Ascending by adjusted box office
pub fn by_adjusted_revenue(records: &[EnrichedRecord]) -> Vec<EnrichedRecord> {
    sorted_by_f64(records, |r| r.adjusted_revenue)
}

/// Ascending by release year
pub fn chronological(records: &[EnrichedRecord]) -> Vec<EnrichedRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.release_year);
    sorted
}

fn sorted_by_f64<F>(records: &[EnrichedRecord], key: F) -> Vec<EnrichedRecord>
where
    F: Fn(&EnrichedRecord) -> f64,
{
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| key(a).total_cmp(&key(b)));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{film_catalog, inflation_rates};
    use crate::services::enrich::EnrichmentService;

    fn catalog_records() -> Vec<EnrichedRecord> {
        let rates = inflation_rates();
        EnrichmentService::new(&rates).enrich_all(&film_catalog())
    }

    #[test]
    fn test_by_adjusted_budget() {
        let sorted = by_adjusted_budget(&catalog_records());
        assert!(sorted
            .windows(2)
            .all(|w| w[0].adjusted_budget <= w[1].adjusted_budget));
        assert_eq!(sorted.last().unwrap().title, "The Force Awakens");
    }

    #[test]
    fn test_by_adjusted_revenue() {
        let sorted = by_adjusted_revenue(&catalog_records());
        assert!(sorted
            .windows(2)
            .all(|w| w[0].adjusted_revenue <= w[1].adjusted_revenue));
        assert_eq!(sorted.first().unwrap().title, "The Clone Wars");
    }

    #[test]
    fn test_chronological() {
        let sorted = chronological(&catalog_records());
        assert_eq!(sorted.len(), 12);
        assert!(sorted.windows(2).all(|w| w[0].release_year < w[1].release_year));
        assert_eq!(sorted[0].title, "A New Hope");
        assert_eq!(sorted[11].title, "The Rise of Skywalker");
    }

    #[test]
    fn test_input_is_not_mutated() {
        let records = catalog_records();
        let before: Vec<_> = records.iter().map(|r| r.title.clone()).collect();
        let _ = by_adjusted_budget(&records);
        let _ = chronological(&records);
        let after: Vec<_> = records.iter().map(|r| r.title.clone()).collect();
        assert_eq!(before, after);
    }
}
