//! Annual inflation rates and the cumulative factor derived from them

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Year whose purchasing power all adjusted values are expressed in
pub const REFERENCE_YEAR: i32 = 2025;

/// Sparse mapping of year to annual inflation rate in percent (5.1 = 5.1%)
///
/// Only the years present contribute to a cumulative factor; gaps are not
/// interpolated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InflationTable {
    rates: BTreeMap<i32, f64>,
}

impl InflationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the rate for a year
    pub fn with_rate(mut self, year: i32, rate_percent: f64) -> Self {
        self.rates.insert(year, rate_percent);
        self
    }

    /// Rate recorded for a year, if any
    pub fn rate(&self, year: i32) -> Option<f64> {
        self.rates.get(&year).copied()
    }

    /// Years with a recorded rate, ascending
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.rates.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Cumulative inflation factor from `year` up to [`REFERENCE_YEAR`]
    ///
    /// Product of `1 + rate / 100` over every recorded year `y` with
    /// `year <= y <= REFERENCE_YEAR`. Returns 1.0 when no year qualifies,
    /// including every `year` after the reference year.
    pub fn factor(&self, year: i32) -> f64 {
        // Ascending key order keeps the product bit-reproducible.
        self.rates
            .iter()
            .filter(|(y, _)| year <= **y && **y <= REFERENCE_YEAR)
            .map(|(_, rate)| 1.0 + rate / 100.0)
            .product()
    }
}

impl FromIterator<(i32, f64)> for InflationTable {
    fn from_iter<I: IntoIterator<Item = (i32, f64)>>(iter: I) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}
