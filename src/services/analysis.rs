//! Analysis pipeline
//!
//! Enriches the films once and holds the result in chronological order,
//! which every downstream sink starts from.

use tracing::info;

use crate::error::{BoxOfficeError, BoxOfficeResult};
use crate::models::{EnrichedRecord, FilmRecord, InflationTable};
use crate::services::enrich::EnrichmentService;
use crate::services::highlights::Highlights;
use crate::services::views;

/// Result of running the analysis over a record set
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Enriched records, ascending by release year
    records: Vec<EnrichedRecord>,
    /// Highlights over the records in entry order
    highlights: Highlights,
    inflation: InflationTable,
}

impl Analysis {
    /// Enrich `films` against `inflation` and compute the highlights
    pub fn run(films: &[FilmRecord], inflation: &InflationTable) -> BoxOfficeResult<Self> {
        let enriched = EnrichmentService::new(inflation).enrich_all(films);
        let highlights =
            Highlights::from_records(&enriched).ok_or_else(BoxOfficeError::empty_records)?;

        info!(films = enriched.len(), rates = inflation.len(), "analysis complete");

        Ok(Self {
            records: views::chronological(&enriched),
            highlights,
            inflation: inflation.clone(),
        })
    }

    /// Enriched records in chronological order
    pub fn records(&self) -> &[EnrichedRecord] {
        &self.records
    }

    pub fn highlights(&self) -> &Highlights {
        &self.highlights
    }

    pub fn inflation(&self) -> &InflationTable {
        &self.inflation
    }

    /// Records ascending by adjusted budget
    pub fn by_adjusted_budget(&self) -> Vec<EnrichedRecord> {
        views::by_adjusted_budget(&self.records)
    }

    /// Records ascending by adjusted box office
    pub fn by_adjusted_revenue(&self) -> Vec<EnrichedRecord> {
        views::by_adjusted_revenue(&self.records)
    }
}
