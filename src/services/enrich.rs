//! Enrichment service
//!
//! Derives the inflation-adjusted columns for each film record.

use tracing::debug;

use crate::models::{EnrichedRecord, FilmRecord, InflationTable};

/// Build an enriched record from a film and its cumulative inflation factor
pub fn enrich_record(film: &FilmRecord, factor: f64) -> EnrichedRecord {
    let adjusted_budget = film.nominal_budget * factor;
    let adjusted_revenue = film.nominal_revenue * factor;

    EnrichedRecord {
        title: film.title.clone(),
        release_year: film.release_year,
        nominal_budget: film.nominal_budget,
        nominal_revenue: film.nominal_revenue,
        cumulative_inflation_factor: factor,
        adjusted_budget,
        adjusted_revenue,
        nominal_profit: film.nominal_profit(),
        adjusted_profit: adjusted_revenue - adjusted_budget,
    }
}

/// Service that enriches films against a fixed inflation table
pub struct EnrichmentService<'a> {
    inflation: &'a InflationTable,
}

impl<'a> EnrichmentService<'a> {
    /// Create a new enrichment service
    pub fn new(inflation: &'a InflationTable) -> Self {
        Self { inflation }
    }

    /// Enrich a single film
    pub fn enrich(&self, film: &FilmRecord) -> EnrichedRecord {
        let factor = self.inflation.factor(film.release_year);
        debug!(title = %film.title, year = film.release_year, factor, "enriched film");
        enrich_record(film, factor)
    }

    /// Enrich every film, preserving input order
    pub fn enrich_all(&self, films: &[FilmRecord]) -> Vec<EnrichedRecord> {
        films.iter().map(|film| self.enrich(film)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{film_catalog, inflation_rates};

    #[test]
    fn test_enrich_record_formulas() {
        let film = FilmRecord::new("A New Hope", 1977, 11e6, 775.398e6);
        let record = enrich_record(&film, 2.0);

        assert_eq!(record.cumulative_inflation_factor, 2.0);
        assert_eq!(record.adjusted_budget, 22e6);
        assert_eq!(record.adjusted_revenue, 775.398e6 * 2.0);
        assert_eq!(record.nominal_profit, 775.398e6 - 11e6);
        assert_eq!(record.film(), film);
    }

    #[test]
    fn test_adjusted_profit_matches_adjusted_columns() {
        let rates = inflation_rates();
        let service = EnrichmentService::new(&rates);
        for record in service.enrich_all(&film_catalog()) {
            assert_eq!(
                record.adjusted_profit,
                record.adjusted_revenue - record.adjusted_budget
            );
            assert_eq!(
                record.nominal_profit,
                record.nominal_revenue - record.nominal_budget
            );
        }
    }

    #[test]
    fn test_enrich_all_is_idempotent() {
        let rates = inflation_rates();
        let films = film_catalog();
        let service = EnrichmentService::new(&rates);

        let first = service.enrich_all(&films);
        let second = service.enrich_all(&films);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.title, b.title);
            assert_eq!(
                a.cumulative_inflation_factor.to_bits(),
                b.cumulative_inflation_factor.to_bits()
            );
            assert_eq!(a.adjusted_budget.to_bits(), b.adjusted_budget.to_bits());
            assert_eq!(a.adjusted_revenue.to_bits(), b.adjusted_revenue.to_bits());
            assert_eq!(a.adjusted_profit.to_bits(), b.adjusted_profit.to_bits());
        }
    }

    #[test]
    fn test_enrich_all_preserves_order() {
        let rates = inflation_rates();
        let films = film_catalog();
        let enriched = EnrichmentService::new(&rates).enrich_all(&films);

        let titles: Vec<_> = enriched.iter().map(|r| r.title.as_str()).collect();
        let expected: Vec<_> = films.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn test_factor_for_the_force_awakens() {
        let rates = inflation_rates();
        let film = FilmRecord::new("The Force Awakens", 2015, 447e6, 2.0713e9);
        let record = EnrichmentService::new(&rates).enrich(&film);

        let expected = 1.001 * 1.01 * 1.021 * 1.024 * 1.018 * 1.025;
        assert!((record.cumulative_inflation_factor - expected).abs() < 1e-12);
    }
}
