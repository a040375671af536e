//! CSV Export functionality
//!
//! Writes the enriched records as a semicolon-separated table with a header
//! row. Floats are written at full round-trip precision.

use crate::error::{BoxOfficeError, BoxOfficeResult};
use crate::models::EnrichedRecord;
use std::io::Write;

/// Field delimiter of the exported table
pub const DELIMITER: u8 = b';';

/// Default file name for the exported table
pub const DEFAULT_EXPORT_FILE: &str = "tabela_final_star_wars.csv";

/// Export records to CSV, one row per record in the order given
pub fn export_records_csv<W: Write>(
    records: &[EnrichedRecord],
    writer: &mut W,
) -> BoxOfficeResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .from_writer(writer);

    for record in records {
        csv_writer.serialize(record)?;
    }

    csv_writer
        .flush()
        .map_err(|e| BoxOfficeError::Export(e.to_string()))?;

    Ok(())
}
