//! Film records
//!
//! `FilmRecord` is the hand-entered input; `EnrichedRecord` adds the
//! inflation-adjusted figures derived from it.

use serde::{Deserialize, Serialize};

/// A film with its nominal (as-recorded) budget and box office in USD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmRecord {
    pub title: String,
    pub release_year: i32,
    pub nominal_budget: f64,
    pub nominal_revenue: f64,
}

impl FilmRecord {
    /// Create a new film record
    pub fn new(
        title: impl Into<String>,
        release_year: i32,
        nominal_budget: f64,
        nominal_revenue: f64,
    ) -> Self {
        Self {
            title: title.into(),
            release_year,
            nominal_budget,
            nominal_revenue,
        }
    }

    /// Revenue minus budget, unadjusted
    pub fn nominal_profit(&self) -> f64 {
        self.nominal_revenue - self.nominal_budget
    }
}

/// A film record together with its inflation-adjusted figures
///
/// Field order is the column order of the exported table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub title: String,
    pub release_year: i32,
    pub nominal_budget: f64,
    pub nominal_revenue: f64,
    /// Compounded inflation from `release_year` up to the reference year
    pub cumulative_inflation_factor: f64,
    pub adjusted_budget: f64,
    pub adjusted_revenue: f64,
    pub nominal_profit: f64,
    pub adjusted_profit: f64,
}

impl EnrichedRecord {
    /// Recover the input record
    pub fn film(&self) -> FilmRecord {
        FilmRecord::new(
            self.title.clone(),
            self.release_year,
            self.nominal_budget,
            self.nominal_revenue,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominal_profit() {
        let film = FilmRecord::new("The Force Awakens", 2015, 447e6, 2.0713e9);
        assert_eq!(film.nominal_profit(), 2.0713e9 - 447e6);
    }

    #[test]
    fn test_serde_field_order() {
        let record = EnrichedRecord {
            title: "Rogue One".into(),
            release_year: 2016,
            nominal_budget: 1.0,
            nominal_revenue: 2.0,
            cumulative_inflation_factor: 1.0,
            adjusted_budget: 1.0,
            adjusted_revenue: 2.0,
            nominal_profit: 1.0,
            adjusted_profit: 1.0,
        };
        let json = serde_json::to_string(&record).unwrap();
        let title = json.find("\"title\"").unwrap();
        let factor = json.find("\"cumulative_inflation_factor\"").unwrap();
        let profit = json.find("\"adjusted_profit\"").unwrap();
        assert!(title < factor && factor < profit);
        assert_eq!(record.film().title, "Rogue One");
    }
}
