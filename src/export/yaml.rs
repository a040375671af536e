//! YAML Export functionality
//!
//! Exports the full analysis to YAML format for human reading.

use crate::error::{BoxOfficeError, BoxOfficeResult};
use crate::export::json::FullExport;
use crate::services::Analysis;
use std::io::Write;

/// Export the full analysis to YAML format
pub fn export_full_yaml<W: Write>(analysis: &Analysis, writer: &mut W) -> BoxOfficeResult<()> {
    let export = FullExport::from_analysis(analysis);

    writeln!(writer, "# Box Office Inflation Analysis Export")
        .map_err(|e| BoxOfficeError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| BoxOfficeError::Export(e.to_string()))?;
    writeln!(writer, "# Values adjusted to {} USD", export.reference_year)
        .map_err(|e| BoxOfficeError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BoxOfficeError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| BoxOfficeError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a YAML export
pub fn import_from_yaml(yaml_str: &str) -> BoxOfficeResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml_str).map_err(|e| BoxOfficeError::Validation(e.to_string()))?;

    export.validate().map_err(BoxOfficeError::Validation)?;

    Ok(export)
}
