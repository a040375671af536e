//! JSON Export functionality
//!
//! Exports the full analysis (rates and enriched records) to JSON format
//! with schema versioning.

use crate::error::{BoxOfficeError, BoxOfficeResult};
use crate::models::{EnrichedRecord, InflationTable, REFERENCE_YEAR};
use crate::services::Analysis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full analysis export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Year adjusted values are expressed in
    pub reference_year: i32,

    /// Annual inflation rates the factors were computed from
    pub inflation_rates: InflationTable,

    /// Enriched records, chronological
    pub records: Vec<EnrichedRecord>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of films
    pub film_count: usize,

    /// Earliest release year
    pub earliest_year: Option<i32>,

    /// Latest release year
    pub latest_year: Option<i32>,

    pub max_budget: String,
    pub max_revenue: String,
    pub max_profit: String,
}

impl FullExport {
    /// Create a new full export from an analysis
    pub fn from_analysis(analysis: &Analysis) -> Self {
        let records = analysis.records().to_vec();
        let highlights = analysis.highlights();

        let metadata = ExportMetadata {
            film_count: records.len(),
            earliest_year: records.iter().map(|r| r.release_year).min(),
            latest_year: records.iter().map(|r| r.release_year).max(),
            max_budget: highlights.max_budget.clone(),
            max_revenue: highlights.max_revenue.clone(),
            max_profit: highlights.max_profit.clone(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            reference_year: REFERENCE_YEAR,
            inflation_rates: analysis.inflation().clone(),
            records,
            metadata,
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Unsupported schema version: {} (expected {})",
                self.schema_version, EXPORT_SCHEMA_VERSION
            ));
        }
        if self.metadata.film_count != self.records.len() {
            return Err(format!(
                "Film count mismatch: metadata says {}, found {}",
                self.metadata.film_count,
                self.records.len()
            ));
        }
        Ok(())
    }
}

/// Export the full analysis to JSON format
pub fn export_full_json<W: Write>(
    analysis: &Analysis,
    writer: &mut W,
    pretty: bool,
) -> BoxOfficeResult<()> {
    let export = FullExport::from_analysis(analysis);

    let written = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    };
    written.map_err(|e| BoxOfficeError::Export(e.to_string()))?;

    writer
        .flush()
        .map_err(|e| BoxOfficeError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a JSON export
pub fn import_from_json(json_str: &str) -> BoxOfficeResult<FullExport> {
    let export: FullExport = serde_json::from_str(json_str)?;
    export.validate().map_err(BoxOfficeError::Validation)?;
    Ok(export)
}
